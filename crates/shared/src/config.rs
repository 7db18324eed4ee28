//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Submission policy configuration.
    #[serde(default)]
    pub submission: SubmissionConfig,
}

/// Submission policy configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionConfig {
    /// Skills that classify a worker as a development worker.
    ///
    /// Workers holding any of these skills must attach a commit link to
    /// their daily submissions.
    #[serde(default = "default_development_skills")]
    pub development_skills: Vec<String>,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            development_skills: default_development_skills(),
        }
    }
}

fn default_development_skills() -> Vec<String> {
    [
        "React",
        "Node.js",
        "Python",
        "Java",
        "PHP",
        "Angular",
        "Vue.js",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// All sources are optional; with nothing present the built-in defaults
    /// apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("CREWLINE")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("submission.development_skills"),
            )
            .build()?;

        config.try_deserialize()
    }
}
