use std::time::Duration;

pub const ENV_BASE_URL: &str = "ALLENATORE_LLM_BASE_URL";
pub const ENV_MODEL: &str = "ALLENATORE_LLM_MODEL";
pub const ENV_API_KEY: &str = "ALLENATORE_LLM_API_KEY";

const DEFAULT_BASE_URL: &str = "http://localhost:11434/v1";
const DEFAULT_MODEL: &str = "llama3.1";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Connection to an OpenAI-compatible chat completions endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnhancerConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for EnhancerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl EnhancerConfig {
    /// Applies the `ALLENATORE_LLM_*` environment variables.
    #[must_use]
    pub fn with_env(self) -> Self {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    #[must_use]
    pub fn with_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name| var(name).filter(|value: &String| !value.trim().is_empty());
        if let Some(base_url) = var(ENV_BASE_URL) {
            self.base_url = base_url;
        }
        if let Some(model) = var(ENV_MODEL) {
            self.model = model;
        }
        if let Some(api_key) = var(ENV_API_KEY) {
            self.api_key = Some(api_key);
        }
        self
    }

    #[must_use]
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_with_overrides() {
        let env = HashMap::from([
            (ENV_BASE_URL, "https://llm.example.org/v1/"),
            (ENV_MODEL, " "),
            (ENV_API_KEY, "secret"),
        ]);
        let config = EnhancerConfig::default()
            .with_overrides(|name| env.get(name).map(ToString::to_string));
        assert_eq!(
            config,
            EnhancerConfig {
                base_url: "https://llm.example.org/v1/".to_string(),
                model: DEFAULT_MODEL.to_string(),
                api_key: Some("secret".to_string()),
                timeout: Duration::from_secs(20),
            }
        );
    }

    #[rstest]
    #[case("http://localhost:11434/v1", "http://localhost:11434/v1/chat/completions")]
    #[case("https://api.example.org/v1/", "https://api.example.org/v1/chat/completions")]
    fn test_completions_url(#[case] base_url: &str, #[case] expected: &str) {
        let config = EnhancerConfig {
            base_url: base_url.to_string(),
            ..EnhancerConfig::default()
        };
        assert_eq!(config.completions_url(), expected);
    }
}
