use anyhow::{Context as AnyhowContext, Result};
use luhn_summarizer::{DuplicatePolicy, LanguageResources, Summarizer, SummarizerConfig};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub(crate) const ENV_SUMMARY_LENGTH: &str = "LUHN_SUMMARY_LENGTH";
pub(crate) const ENV_THRESHOLD: &str = "LUHN_THRESHOLD";

/// Values given on the command line; `None` leaves the lower layer in place
#[derive(Debug, Clone, Default)]
pub(crate) struct Overrides {
    pub(crate) config_file: Option<PathBuf>,
    pub(crate) summary_length: Option<usize>,
    pub(crate) threshold: Option<f64>,
    pub(crate) language: Option<String>,
    pub(crate) keep_duplicates: bool,
}

/// Resolve configuration: defaults < config file < environment < flags
pub(crate) fn resolve_config(
    overrides: &Overrides,
    env: impl Fn(&str) -> Option<String>,
) -> Result<SummarizerConfig> {
    let mut config = match &overrides.config_file {
        Some(path) => SummarizerConfig::from_toml_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => SummarizerConfig::default(),
    };

    if let Some(raw) = env(ENV_SUMMARY_LENGTH) {
        config.summary_length = raw
            .trim()
            .parse()
            .with_context(|| format!("{ENV_SUMMARY_LENGTH} must be a whole number, got '{raw}'"))?;
    }
    if let Some(raw) = env(ENV_THRESHOLD) {
        config.threshold = raw
            .trim()
            .parse()
            .with_context(|| format!("{ENV_THRESHOLD} must be a number, got '{raw}'"))?;
    }

    if let Some(summary_length) = overrides.summary_length {
        config.summary_length = summary_length;
    }
    if let Some(threshold) = overrides.threshold {
        config.threshold = threshold;
    }
    if let Some(language) = &overrides.language {
        config.language = language.clone();
    }
    if overrides.keep_duplicates {
        config.duplicates = DuplicatePolicy::Keep;
    }

    Ok(config)
}

/// Build the summarizer, loading a custom stopword list when one is given
pub(crate) fn build_summarizer(
    config: SummarizerConfig,
    stopwords: Option<&Path>,
) -> Result<Summarizer> {
    let resources = match stopwords {
        Some(path) => {
            let resources = LanguageResources::from_stopword_file(path)?;
            log::debug!(
                "Loaded {} stopwords from {}",
                resources.stopword_count(),
                path.display()
            );
            Arc::new(resources)
        }
        None => LanguageResources::for_language(&config.language)?,
    };
    Ok(Summarizer::with_resources(resources, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::tempdir;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_layers() {
        let config = resolve_config(&Overrides::default(), env_from(&[])).unwrap();
        assert_eq!(config, SummarizerConfig::default());
    }

    #[test]
    fn layers_apply_in_order() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("luhn.toml");
        fs::write(&path, "summary_length = 7\nthreshold = 0.2\nduplicates = \"keep\"\n").unwrap();

        let overrides = Overrides {
            config_file: Some(path.clone()),
            ..Overrides::default()
        };
        let config = resolve_config(&overrides, env_from(&[])).unwrap();
        assert_eq!(config.summary_length, 7);
        assert_eq!(config.threshold, 0.2);
        assert_eq!(config.duplicates, DuplicatePolicy::Keep);

        let config =
            resolve_config(&overrides, env_from(&[(ENV_THRESHOLD, "0.9")])).unwrap();
        assert_eq!(config.threshold, 0.9);
        assert_eq!(config.summary_length, 7);

        let overrides = Overrides {
            config_file: Some(path),
            summary_length: Some(2),
            threshold: Some(0.4),
            ..Overrides::default()
        };
        let config = resolve_config(
            &overrides,
            env_from(&[(ENV_THRESHOLD, "0.9"), (ENV_SUMMARY_LENGTH, "5")]),
        )
        .unwrap();
        assert_eq!(config.summary_length, 2);
        assert_eq!(config.threshold, 0.4);
    }

    #[test]
    fn bad_env_value_is_reported() {
        let err = resolve_config(
            &Overrides::default(),
            env_from(&[(ENV_SUMMARY_LENGTH, "lots")]),
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains(ENV_SUMMARY_LENGTH));
    }

    #[test]
    fn missing_config_file_is_reported() {
        let overrides = Overrides {
            config_file: Some(PathBuf::from("/definitely/not/here.toml")),
            ..Overrides::default()
        };
        let err = resolve_config(&overrides, env_from(&[])).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to load config"));
    }

    #[test]
    fn keep_duplicates_flag() {
        let overrides = Overrides {
            keep_duplicates: true,
            ..Overrides::default()
        };
        let config = resolve_config(&overrides, env_from(&[])).unwrap();
        assert_eq!(config.duplicates, DuplicatePolicy::Keep);
    }

    #[test]
    fn unknown_language_fails_to_build() {
        let config = SummarizerConfig::default().with_language("quenya");
        assert!(build_summarizer(config, None).is_err());
    }
}
