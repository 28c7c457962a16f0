//! Runtime configuration from environment variables.
//!
//! | variable                     | default                                      |
//! |------------------------------|----------------------------------------------|
//! | `API_KEY` / `GEMINI_API_KEY` | none (every entry becomes the error text)    |
//! | `INFINITY_WIKI_MODEL`        | `gemini-2.5-flash-lite`                      |
//! | `INFINITY_WIKI_ENDPOINT`     | `https://generativelanguage.googleapis.com`  |
//! | `INFINITY_WIKI_TIMEOUT_SECS` | `30`                                         |
//! | `INFINITY_WIKI_FADE_MS`      | `500`                                        |
//! | `INFINITY_WIKI_LANG`         | `zh`                                         |

use std::str::FromStr;
use std::time::Duration;

use crate::engine::controller::DEFAULT_FADE_DELAY;
use crate::lang::Language;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-lite";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const TIMEOUT_VAR: &str = "INFINITY_WIKI_TIMEOUT_SECS";
const FADE_VAR: &str = "INFINITY_WIKI_FADE_MS";
const LANG_VAR: &str = "INFINITY_WIKI_LANG";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
    pub timeout: Duration,
    pub fade_delay: Duration,
    pub language: Language,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            fade_delay: DEFAULT_FADE_DELAY,
            language: Language::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key → value lookup. Blank values count as unset;
    /// unparsable ones are logged and the default is kept.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();
        config.api_key = get("API_KEY").or_else(|| get("GEMINI_API_KEY"));
        if let Some(model) = get("INFINITY_WIKI_MODEL") {
            config.model = model;
        }
        if let Some(endpoint) = get("INFINITY_WIKI_ENDPOINT") {
            config.endpoint = endpoint;
        }
        if let Some(secs) = parse_or_warn::<u64>(TIMEOUT_VAR, get(TIMEOUT_VAR)) {
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(ms) = parse_or_warn::<u64>(FADE_VAR, get(FADE_VAR)) {
            config.fade_delay = Duration::from_millis(ms);
        }
        if let Some(language) = parse_or_warn::<Language>(LANG_VAR, get(LANG_VAR)) {
            config.language = language;
        }
        config
    }
}

fn parse_or_warn<T>(key: &str, value: Option<String>) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let value = value?;
    match value.parse() {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("ignoring {key}={value:?}: {e}");
            None
        }
    }
}
