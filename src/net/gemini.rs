//! Blocking client for the Gemini `generateContent` endpoint.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::Config;
use crate::engine::pipeline::{Backend, GenerateError};

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize, Default)]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Default)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Deserialize, Default)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize, Default)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GenerateResponse {
    /// Text of the first candidate, parts concatenated.
    pub(crate) fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let text: String = candidate
            .content
            .parts
            .iter()
            .map(|p| p.text.as_str())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Gemini text backend.
pub struct GeminiClient {
    api_key: Option<String>,
    url: Url,
    client: reqwest::blocking::Client,
}

impl GeminiClient {
    pub fn new(
        api_key: Option<String>,
        endpoint: &str,
        model: &str,
        timeout: Duration,
    ) -> Result<Self, GenerateError> {
        let url = generate_url(endpoint, model)?;

        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("infinity-wiki/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| GenerateError::new("config", format!("Client error: {}", e)))?;

        Ok(Self {
            api_key,
            url,
            client,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, GenerateError> {
        Self::new(
            config.api_key.clone(),
            &config.endpoint,
            &config.model,
            config.timeout,
        )
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl Backend for GeminiClient {
    fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(GenerateError::new("config", "API_KEY is not set"));
        };

        let body = GenerateRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(self.url.as_str())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .map_err(|e| GenerateError::new("request", format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().unwrap_or_default();
            return Err(GenerateError::new(
                "status",
                format!("HTTP {}: {}", status.as_u16(), detail.trim()),
            ));
        }

        let parsed: GenerateResponse = response
            .json()
            .map_err(|e| GenerateError::new("decode", format!("Bad response body: {}", e)))?;

        parsed
            .text()
            .ok_or_else(|| GenerateError::new("empty", "response had no candidate text"))
    }
}

/// `{endpoint}/v1beta/models/{model}:generateContent`
pub fn generate_url(endpoint: &str, model: &str) -> Result<Url, GenerateError> {
    let base = Url::parse(endpoint)
        .map_err(|e| GenerateError::new("config", format!("Invalid endpoint: {}", e)))?;
    if model.is_empty() || model.contains('/') {
        return Err(GenerateError::new(
            "config",
            format!("Invalid model name: {:?}", model),
        ));
    }
    let path = format!(
        "{}/v1beta/models/{}:generateContent",
        base.path().trim_end_matches('/'),
        model
    );
    let mut url = base;
    url.set_path(&path);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_generate_url() {
        let url = generate_url(
            "https://generativelanguage.googleapis.com",
            "gemini-2.5-flash-lite",
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash-lite:generateContent"
        );
    }

    #[test]
    fn url_keeps_proxy_prefix() {
        let url = generate_url("http://localhost:8080/proxy/", "m").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/proxy/v1beta/models/m:generateContent"
        );
    }

    #[test]
    fn rejects_bad_endpoint_and_model() {
        assert_eq!(generate_url("not a url", "m").unwrap_err().phase, "config");
        assert_eq!(
            generate_url("https://example.com", "").unwrap_err().phase,
            "config"
        );
        assert_eq!(
            generate_url("https://example.com", "a/b").unwrap_err().phase,
            "config"
        );
    }

    #[test]
    fn request_body_shape() {
        let body = GenerateRequest {
            contents: [Content {
                parts: [Part { text: "hi" }],
            }],
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "contents": [{ "parts": [{ "text": "hi" }] }] })
        );
    }

    #[test]
    fn response_text_joins_parts() {
        let parsed: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"This is "},{"text":"the wiki."}],"role":"model"}}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.text().as_deref(), Some("This is the wiki."));
    }

    #[test]
    fn response_without_candidates_has_no_text() {
        let parsed: GenerateResponse =
            serde_json::from_str(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#).unwrap();
        assert_eq!(parsed.text(), None);
    }

    #[test]
    fn missing_api_key_fails_without_network() {
        let client = GeminiClient::new(
            None,
            "https://generativelanguage.googleapis.com",
            "gemini-2.5-flash-lite",
            Duration::from_secs(1),
        )
        .unwrap();
        let err = client.generate("anything").unwrap_err();
        assert_eq!(err.phase, "config");
    }
}
