use crate::domain::error::DomainError;

/// A single generation request sent to a search-augmented model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResearchRequest {
    pub prompt: String,
    /// Let the model run live web searches while answering.
    pub web_search: bool,
    /// Content type the model is asked to answer in.
    pub response_mime_type: String,
}

impl ResearchRequest {
    pub fn json_with_search(prompt: String) -> Self {
        Self {
            prompt,
            web_search: true,
            response_mime_type: "application/json".to_string(),
        }
    }
}

/// A generative model that answers a prompt, optionally grounded in web search.
#[async_trait::async_trait]
pub trait ResearchProvider: Send + Sync {
    /// Run the request and return the text payload of the answer.
    ///
    /// `Ok(None)` means the call succeeded but the answer carried no text.
    async fn generate(&self, request: &ResearchRequest) -> Result<Option<String>, DomainError>;

    /// Provider name for logging.
    fn name(&self) -> &str;
}
