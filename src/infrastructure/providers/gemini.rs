use crate::config::ReporterConfig;
use crate::domain::error::DomainError;
use crate::domain::ports::research_provider::{ResearchProvider, ResearchRequest};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Gemini `generateContent` over REST, with the Google Search tool.
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Tool {
    google_search: GoogleSearch,
}

#[derive(Serialize)]
struct GoogleSearch {}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GeminiProvider {
    pub fn new(api_key: String, model: Option<String>, base_url: Option<String>) -> Self {
        Self::with_client(Client::new(), api_key, model, base_url)
    }

    pub fn from_config(config: &ReporterConfig) -> Self {
        let client = match config.timeout_secs {
            Some(secs) => Client::builder()
                .timeout(Duration::from_secs(secs))
                .build()
                .unwrap_or_default(),
            None => Client::new(),
        };
        Self::with_client(
            client,
            config.api_key().unwrap_or_default().to_string(),
            Some(config.model.clone()),
            Some(config.base_url.clone()),
        )
    }

    fn with_client(client: Client, api_key: String, model: Option<String>, base_url: Option<String>) -> Self {
        Self {
            client,
            api_key,
            model: model.unwrap_or_else(|| crate::config::DEFAULT_MODEL.to_string()),
            base_url: base_url
                .unwrap_or_else(|| crate::config::DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }
}

/// Joins the text parts of the first candidate. `None` when there are none.
fn response_text(response: GenerateResponse) -> Option<String> {
    let parts = response.candidates.into_iter().next()?.content?.parts;
    let texts: Vec<String> = parts.into_iter().filter_map(|p| p.text).collect();
    if texts.is_empty() {
        None
    } else {
        Some(texts.concat())
    }
}

#[async_trait::async_trait]
impl ResearchProvider for GeminiProvider {
    async fn generate(&self, request: &ResearchRequest) -> Result<Option<String>, DomainError> {
        let tools = if request.web_search {
            vec![Tool {
                google_search: GoogleSearch {},
            }]
        } else {
            vec![]
        };

        let body = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part {
                    text: &request.prompt,
                }],
            }],
            tools,
            generation_config: GenerationConfig {
                response_mime_type: &request.response_mime_type,
            },
        };

        let resp = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(format!("Gemini API error: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::ExternalService(format!(
                "Gemini API {status}: {body}"
            )));
        }

        let result: GenerateResponse = resp
            .json()
            .await
            .map_err(|e| DomainError::ExternalService(format!("Gemini response parse error: {e}")))?;
        Ok(response_text(result))
    }

    fn name(&self) -> &str {
        "gemini"
    }
}
