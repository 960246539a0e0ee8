use super::client::GeminiHttpClient;
use super::types::{Content, GenerateContentRequest, GenerateContentResponse, Part};
use crate::ai::{ChatService, CHAT_FALLBACK};
use crate::models::ChatMessage;
use crate::{prompts, Result};
use async_trait::async_trait;
use std::time::Duration;

pub struct GeminiChatClient {
    http: GeminiHttpClient,
}

impl GeminiChatClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, model: String, client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(
                api_key,
                model,
                Duration::from_secs(30),
                client,
            ),
        }
    }

    fn build_request(history: &[ChatMessage], message: &str) -> GenerateContentRequest {
        let mut contents: Vec<Content> = history
            .iter()
            .map(|msg| Content::with_role(msg.role(), vec![Part::text(msg.text.clone())]))
            .collect();
        contents.push(Content::user(vec![Part::text(message)]));

        GenerateContentRequest {
            system_instruction: Some(Content {
                role: None,
                parts: vec![Part::text(prompts::CHAT_SYSTEM.trim_end())],
            }),
            contents,
            generation_config: None,
        }
    }
}

super::impl_with_gemini_base_url!(GeminiChatClient);

#[async_trait]
impl ChatService for GeminiChatClient {
    async fn chat(&self, history: &[ChatMessage], message: &str) -> Result<String> {
        let request = Self::build_request(history, message);

        let response: GenerateContentResponse = self.http.generate_content(&request).await?;

        Ok(response.text().unwrap_or_else(|| CHAT_FALLBACK.to_string()))
    }
}
