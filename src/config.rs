use crate::domain::error::DomainError;

pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_LANGUAGE: &str = "Traditional Chinese (繁體中文)";
pub const DEFAULT_MAX_ITEMS: usize = 3;

/// Reporter settings. Built once by the caller and passed in explicitly.
#[derive(Debug, Clone)]
pub struct ReporterConfig {
    /// Provider credential. Checked at request time, not at construction.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    /// Language the model is asked to write titles and summaries in.
    pub language: String,
    pub max_items: usize,
    /// Request timeout. `None` leaves it to the transport.
    pub timeout_secs: Option<u64>,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            max_items: DEFAULT_MAX_ITEMS,
            timeout_secs: None,
        }
    }
}

impl ReporterConfig {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }

    /// Read settings from `TRENDPULSE_*` variables. Blank values count as unset.
    ///
    /// The key falls back to `GEMINI_API_KEY` and then `API_KEY`.
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let max_items = match get("TRENDPULSE_MAX_ITEMS") {
            Some(v) => v.trim().parse::<usize>().ok().filter(|n| *n > 0).ok_or_else(|| {
                DomainError::Configuration(format!(
                    "TRENDPULSE_MAX_ITEMS must be a positive integer, got '{v}'"
                ))
            })?,
            None => defaults.max_items,
        };

        let timeout_secs = get("TRENDPULSE_TIMEOUT_SECS")
            .map(|v| {
                v.trim().parse::<u64>().map_err(|_| {
                    DomainError::Configuration(format!(
                        "TRENDPULSE_TIMEOUT_SECS must be a number of seconds, got '{v}'"
                    ))
                })
            })
            .transpose()?;

        Ok(Self {
            api_key: get("TRENDPULSE_API_KEY")
                .or_else(|| get("GEMINI_API_KEY"))
                .or_else(|| get("API_KEY")),
            model: get("TRENDPULSE_MODEL").unwrap_or(defaults.model),
            base_url: get("TRENDPULSE_BASE_URL").unwrap_or(defaults.base_url),
            language: get("TRENDPULSE_LANGUAGE").unwrap_or(defaults.language),
            max_items,
            timeout_secs,
        })
    }

    /// The credential, if one is set and not blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }
}
