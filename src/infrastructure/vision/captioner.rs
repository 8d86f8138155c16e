use crate::domain::error::DomainError;
use crate::domain::ports::captioner::Captioner;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const API_VERSION: &str = "2024-02-01";

/// Caption client for the managed image-analysis API.
pub struct VisionCaptioner {
    client: Client,
    endpoint: String,
    api_key: String,
}

#[derive(Serialize)]
struct AnalyzeRequest {
    url: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeResponse {
    #[serde(default)]
    caption_result: Option<CaptionResult>,
}

#[derive(Deserialize)]
struct CaptionResult {
    text: String,
}

impl VisionCaptioner {
    pub fn new(endpoint: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[async_trait::async_trait]
impl Captioner for VisionCaptioner {
    async fn caption(&self, image_url: &str) -> Result<String, DomainError> {
        let url = format!(
            "{}/computervision/imageanalysis:analyze?api-version={}&features=caption",
            self.endpoint, API_VERSION
        );

        let response = self
            .client
            .post(&url)
            .header("Ocp-Apim-Subscription-Key", &self.api_key)
            .json(&AnalyzeRequest {
                url: image_url.to_string(),
            })
            .send()
            .await
            .map_err(|e| DomainError::Vision(format!("caption call failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::Vision(format!("caption {status}: {body}")));
        }

        let body: AnalyzeResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Parse(format!("caption response: {e}")))?;

        Ok(body
            .caption_result
            .map(|c| c.text)
            .unwrap_or_else(|| "No caption available".to_string()))
    }
}
