use crate::domain::error::DomainError;
use crate::domain::ports::garment_analyzer::GarmentAnalyzer;
use base64::Engine;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const API_VERSION: &str = "2024-02-01";

const SYSTEM_PROMPT: &str =
    "You are an expert image analyst specializing in fashion and accessories.";

const USER_PROMPT: &str = "Please analyze the image and identify all fashion items and accessories \
present. For each item, provide the following attributes separated by commas and different items \
will be on a different line: Item Type, Color, Pattern, Material, Brand, Size, Additional Details. \
If any attribute cannot be identified, state 'Not identifiable:'";

/// Garment analysis via a vision-capable chat completion deployment.
pub struct ChatGarmentAnalyzer {
    client: Client,
    endpoint: String,
    api_key: String,
    deployment: String,
}

#[derive(Serialize)]
struct ChatRequest {
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: MessageContent,
}

#[derive(Serialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrlPart },
}

#[derive(Serialize)]
struct ImageUrlPart {
    url: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatGarmentAnalyzer {
    pub fn new(endpoint: String, api_key: String, deployment: String) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key,
            deployment,
        }
    }

    fn request_for(image: &[u8]) -> ChatRequest {
        let encoded = base64::engine::general_purpose::STANDARD.encode(image);
        ChatRequest {
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: MessageContent::Text(SYSTEM_PROMPT.to_string()),
                },
                ChatMessage {
                    role: "user",
                    content: MessageContent::Parts(vec![
                        ContentPart::Text {
                            text: USER_PROMPT.to_string(),
                        },
                        ContentPart::ImageUrl {
                            image_url: ImageUrlPart {
                                url: format!("data:image/jpeg;base64,{encoded}"),
                            },
                        },
                    ]),
                },
            ],
            max_tokens: 2000,
        }
    }
}

#[async_trait::async_trait]
impl GarmentAnalyzer for ChatGarmentAnalyzer {
    async fn analyze(&self, image: &[u8]) -> Result<String, DomainError> {
        let url = format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint, self.deployment, API_VERSION
        );

        let response = self
            .client
            .post(&url)
            .header("api-key", &self.api_key)
            .json(&Self::request_for(image))
            .send()
            .await
            .map_err(|e| DomainError::Vision(format!("analysis call failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::Vision(format!("analysis {status}: {body}")));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Parse(format!("analysis response: {e}")))?;

        body.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| DomainError::Vision("analysis returned no completion".to_string()))
    }
}
