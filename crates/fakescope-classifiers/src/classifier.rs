//! Probabilistic binary classifiers over feature vectors

use crate::features::{FeatureVector, ModelError};

/// Capability: score a feature vector into a class probability distribution
pub trait ProbabilisticClassifier: std::fmt::Debug + Send + Sync {
    /// Probability per class, in the order of [`classes`](Self::classes)
    fn predict_probabilities(&self, features: &FeatureVector) -> Result<Vec<f64>, ModelError>;

    /// Number of input features expected
    fn n_features(&self) -> usize;

    /// Class labels, index-aligned with the predicted distribution
    fn classes(&self) -> &[String];

    /// Short identifier of the classifier type
    fn kind(&self) -> &str;
}

fn check_classes(classes: &[String]) -> Result<(), ModelError> {
    if classes.len() != 2 {
        return Err(ModelError::InvalidParameters(format!(
            "binary classifier needs exactly 2 classes, got {}",
            classes.len()
        )));
    }
    Ok(())
}

/// Logistic sigmoid, stable for large magnitudes
fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

/// Binary logistic regression: `P(class 1) = sigmoid(w·x + b)`
#[derive(Debug, Clone)]
pub struct LogisticRegression {
    classes: Vec<String>,
    coef: Vec<f64>,
    intercept: f64,
}

impl LogisticRegression {
    pub fn new(classes: Vec<String>, coef: Vec<f64>, intercept: f64) -> Result<Self, ModelError> {
        check_classes(&classes)?;
        if coef.iter().any(|w| !w.is_finite()) || !intercept.is_finite() {
            return Err(ModelError::NonFinite("logistic regression weights".to_string()));
        }
        Ok(Self {
            classes,
            coef,
            intercept,
        })
    }

    /// Raw decision value `w·x + b`
    pub fn decision_function(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        Ok(features.dot(&self.coef)? + self.intercept)
    }
}

impl ProbabilisticClassifier for LogisticRegression {
    fn predict_probabilities(&self, features: &FeatureVector) -> Result<Vec<f64>, ModelError> {
        let positive = sigmoid(self.decision_function(features)?);
        Ok(vec![1.0 - positive, positive])
    }

    fn n_features(&self) -> usize {
        self.coef.len()
    }

    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn kind(&self) -> &str {
        "logistic_regression"
    }
}

/// Multinomial naive Bayes: softmax over `log P(c) + Σ x_j log P(j | c)`
#[derive(Debug, Clone)]
pub struct MultinomialNb {
    classes: Vec<String>,
    class_log_prior: Vec<f64>,
    feature_log_prob: Vec<Vec<f64>>,
}

impl MultinomialNb {
    pub fn new(
        classes: Vec<String>,
        class_log_prior: Vec<f64>,
        feature_log_prob: Vec<Vec<f64>>,
    ) -> Result<Self, ModelError> {
        check_classes(&classes)?;
        if class_log_prior.len() != classes.len() || feature_log_prob.len() != classes.len() {
            return Err(ModelError::InvalidParameters(
                "naive Bayes parameters must have one row per class".to_string(),
            ));
        }

        let n_features = feature_log_prob[0].len();
        if feature_log_prob.iter().any(|row| row.len() != n_features) {
            return Err(ModelError::InvalidParameters(
                "naive Bayes feature rows differ in length".to_string(),
            ));
        }
        if class_log_prior
            .iter()
            .chain(feature_log_prob.iter().flatten())
            .any(|v| !v.is_finite())
        {
            return Err(ModelError::NonFinite("naive Bayes log probabilities".to_string()));
        }

        Ok(Self {
            classes,
            class_log_prior,
            feature_log_prob,
        })
    }
}

impl ProbabilisticClassifier for MultinomialNb {
    fn predict_probabilities(&self, features: &FeatureVector) -> Result<Vec<f64>, ModelError> {
        let joint: Vec<f64> = self
            .class_log_prior
            .iter()
            .zip(&self.feature_log_prob)
            .map(|(prior, row)| -> Result<f64, ModelError> { Ok(prior + features.dot(row)?) })
            .collect::<Result<_, _>>()?;

        let max = joint.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let exp: Vec<f64> = joint.iter().map(|j| (j - max).exp()).collect();
        let total: f64 = exp.iter().sum();

        Ok(exp.into_iter().map(|e| e / total).collect())
    }

    fn n_features(&self) -> usize {
        self.feature_log_prob[0].len()
    }

    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn kind(&self) -> &str {
        "multinomial_nb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes() -> Vec<String> {
        vec!["fake".to_string(), "real".to_string()]
    }

    #[test]
    fn test_logistic_regression_probabilities() {
        let model = LogisticRegression::new(classes(), vec![2.0, -1.0], 0.0).unwrap();

        let zero = FeatureVector::zeros(2);
        assert_eq!(model.predict_probabilities(&zero).unwrap(), vec![0.5, 0.5]);

        let x = FeatureVector::from_entries(2, vec![(0, 1.0)]).unwrap();
        let probs = model.predict_probabilities(&x).unwrap();
        let expected = 1.0 / (1.0 + (-2.0f64).exp());
        assert!((probs[1] - expected).abs() < 1e-12);
        assert!((probs[0] + probs[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_sigmoid_extremes() {
        assert_eq!(sigmoid(1000.0), 1.0);
        assert_eq!(sigmoid(-1000.0), 0.0);
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_logistic_regression_dimension_mismatch() {
        let model = LogisticRegression::new(classes(), vec![1.0, 1.0, 1.0], 0.0).unwrap();
        let x = FeatureVector::zeros(2);
        assert!(matches!(
            model.predict_probabilities(&x),
            Err(ModelError::DimensionMismatch { expected: 3, actual: 2 })
        ));
    }

    #[test]
    fn test_logistic_regression_rejects_bad_params() {
        assert!(LogisticRegression::new(vec!["only".to_string()], vec![1.0], 0.0).is_err());
        assert!(LogisticRegression::new(classes(), vec![f64::NAN], 0.0).is_err());
    }

    #[test]
    fn test_multinomial_nb_probabilities() {
        let model = MultinomialNb::new(
            classes(),
            vec![0.5f64.ln(), 0.5f64.ln()],
            vec![vec![0.9f64.ln(), 0.1f64.ln()], vec![0.1f64.ln(), 0.9f64.ln()]],
        )
        .unwrap();

        assert_eq!(model.n_features(), 2);

        let x = FeatureVector::from_entries(2, vec![(0, 1.0)]).unwrap();
        let probs = model.predict_probabilities(&x).unwrap();
        assert!((probs[0] - 0.9).abs() < 1e-9);
        assert!((probs[1] - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_multinomial_nb_rejects_ragged_rows() {
        let result = MultinomialNb::new(
            classes(),
            vec![0.0, 0.0],
            vec![vec![0.0, 0.0], vec![0.0]],
        );
        assert!(result.is_err());
    }
}
