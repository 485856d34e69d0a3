//! Subcommand handlers

use crate::cli::OutputFormat;
use crate::output::{self, ModelStatus};
use anyhow::Context;
use fakescope_classifiers::artifact::{load_classifier, load_vectorizer};
use fakescope_classifiers::{
    is_blank, Analyzer, ModelPair, Normalizer, RegistryCell, RegistryConfig, EMPTY_INPUT_MESSAGE,
};
use fakescope_core::{Domain, DomainSelection, Error};
use std::io::Read;
use std::process::ExitCode;
use tracing::{info, warn};

/// Exit code for blank input
const EXIT_EMPTY_INPUT: u8 = 2;

/// Use the positional text if given, otherwise read all of stdin
pub fn read_input(text: Option<String>) -> anyhow::Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read news text from stdin")?;
            Ok(buffer)
        }
    }
}

fn empty_input() -> ExitCode {
    eprintln!("⚠️  {}", EMPTY_INPUT_MESSAGE);
    ExitCode::from(EXIT_EMPTY_INPUT)
}

pub fn analyze(
    config: &RegistryConfig,
    raw: &str,
    selection: DomainSelection,
    format: OutputFormat,
) -> anyhow::Result<ExitCode> {
    // Checked before loading any model
    if is_blank(raw) {
        return Ok(empty_input());
    }

    let cell = RegistryCell::new();
    let analyzer =
        Analyzer::from_config(config, &cell).context("Failed to initialize model registry")?;

    let report = match analyzer.analyze(raw, selection) {
        Ok(report) => report,
        Err(Error::Validation(_)) => return Ok(empty_input()),
        Err(e) => return Err(e.into()),
    };

    match format {
        OutputFormat::Text => println!("{}", output::render_report(&report)),
        OutputFormat::Json => println!("{}", output::render_report_json(&report)?),
    }

    if report.per_model_results.is_empty() {
        warn!("No model produced a result");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

pub fn normalize(config: &RegistryConfig, raw: &str) -> anyhow::Result<ExitCode> {
    if is_blank(raw) {
        return Ok(empty_input());
    }

    let normalizer = Normalizer::new(config.load_stopwords()?)?;
    println!("{}", normalizer.normalize(raw));
    Ok(ExitCode::SUCCESS)
}

/// Try loading one domain's artifacts without building a registry
pub fn check_domain(config: &RegistryConfig, domain: Domain) -> ModelStatus {
    let Some((vectorizer_path, classifier_path)) = config.artifact_paths(domain) else {
        return ModelStatus {
            domain,
            vectorizer: Default::default(),
            classifier: Default::default(),
            loaded: false,
            detail: "not configured".to_string(),
        };
    };

    let loaded = load_vectorizer(&vectorizer_path).and_then(|vectorizer| {
        let classifier = load_classifier(&classifier_path)?;
        ModelPair::new(domain, vectorizer, classifier)
            .map_err(|e| Error::model_load(&classifier_path, e.to_string()))
    });

    let (loaded, detail) = match loaded {
        Ok(pair) => (
            true,
            format!(
                "{} vectorizer ({} features), {} classifier",
                pair.vectorizer().kind(),
                pair.vectorizer().dimension(),
                pair.classifier().kind()
            ),
        ),
        Err(e) => (false, e.to_string()),
    };

    ModelStatus {
        domain,
        vectorizer: vectorizer_path,
        classifier: classifier_path,
        loaded,
        detail,
    }
}

pub fn models(config: &RegistryConfig, format: OutputFormat) -> anyhow::Result<ExitCode> {
    info!("Checking artifacts under {}", config.models_dir.display());

    let statuses: Vec<ModelStatus> = Domain::ALL
        .into_iter()
        .map(|domain| check_domain(config, domain))
        .collect();

    match format {
        OutputFormat::Text => print!("{}", output::render_models(&statuses)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&statuses)?),
    }

    if statuses.iter().all(|s| s.loaded) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &std::path::Path, name: &str, content: &str) {
        std::fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_check_domain_reports_load_state() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "liar_vectorizer.json",
            r#"{"format_version": 1, "kind": "tfidf", "vocabulary": {"aliens": 0, "senate": 1}}"#,
        );
        write(
            dir.path(),
            "liar_model.json",
            r#"{"format_version": 1, "kind": "logistic_regression",
                "classes": ["false", "true"], "coef": [1.0, -1.0], "intercept": 0.0}"#,
        );
        let config = RegistryConfig::default().with_models_dir(dir.path());

        let liar = check_domain(&config, Domain::Liar);
        assert!(liar.loaded, "{}", liar.detail);
        assert_eq!(
            liar.detail,
            "tfidf vectorizer (2 features), logistic_regression classifier"
        );

        let fnn = check_domain(&config, Domain::FakeNewsNet);
        assert!(!fnn.loaded);
        assert!(fnn.detail.contains("fakenewsnet_vectorizer.json"));
    }

    #[test]
    fn test_blank_input_skips_model_loading() {
        // Nothing exists under this models dir; a load attempt would error.
        let dir = TempDir::new().unwrap();
        let config = RegistryConfig::default().with_models_dir(dir.path().join("missing"));

        for raw in ["  \n", "\x1c\x1d"] {
            let code = analyze(&config, raw, DomainSelection::Both, OutputFormat::Text).unwrap();
            assert_eq!(code, ExitCode::from(EXIT_EMPTY_INPUT));
        }
    }

    #[test]
    fn test_missing_models_is_error() {
        let dir = TempDir::new().unwrap();
        let config = RegistryConfig::default().with_models_dir(dir.path());

        assert!(analyze(&config, "news", DomainSelection::Liar, OutputFormat::Text).is_err());
    }
}
