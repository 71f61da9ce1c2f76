use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

const BASE_URL_VAR: &str = "STUDY_API_BASE_URL";
const TIMEOUT_VAR: &str = "STUDY_API_TIMEOUT_SECS";

/// Where the study backend lives and how long to wait for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudyApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for StudyApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl StudyApiConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Reads `STUDY_API_BASE_URL` and `STUDY_API_TIMEOUT_SECS`, falling back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup(BASE_URL_VAR)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let timeout = lookup(TIMEOUT_VAR)
            .and_then(|value| value.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map_or(DEFAULT_TIMEOUT, Duration::from_secs);

        Self::new(base_url).with_timeout(timeout)
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Joins an endpoint path onto the base url.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_env_is_missing_or_blank() {
        let config = StudyApiConfig::from_lookup(|key| match key {
            "STUDY_API_BASE_URL" => Some("  ".into()),
            _ => None,
        });
        assert_eq!(config, StudyApiConfig::default());
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn env_values_are_normalized() {
        let config = StudyApiConfig::from_lookup(|key| match key {
            "STUDY_API_BASE_URL" => Some("https://study.example.com/api/".into()),
            "STUDY_API_TIMEOUT_SECS" => Some("15".into()),
            _ => None,
        });
        assert_eq!(config.base_url, "https://study.example.com/api");
        assert_eq!(config.timeout, Duration::from_secs(15));
        assert_eq!(
            config.endpoint("/quiz-from-content"),
            "https://study.example.com/api/quiz-from-content"
        );
    }

    #[test]
    fn zero_or_garbage_timeout_uses_default() {
        for raw in ["0", "soon"] {
            let config = StudyApiConfig::from_lookup(|key| {
                (key == "STUDY_API_TIMEOUT_SECS").then(|| raw.to_string())
            });
            assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        }
    }
}
