use super::client::GeminiHttpClient;
use super::types::{GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part};
use crate::ai::ImageEditService;
use crate::models::ImagePayload;
use crate::{Error, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Generative edits on apron photos (for example highlighting a fuel cap).
pub struct GeminiImageEditClient {
    http: GeminiHttpClient,
}

impl GeminiImageEditClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, model: String, client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(
                api_key,
                model,
                Duration::from_secs(120),
                client,
            ),
        }
    }
}

super::impl_with_gemini_base_url!(GeminiImageEditClient);

#[async_trait]
impl ImageEditService for GeminiImageEditClient {
    async fn edit_image(
        &self,
        image: &ImagePayload,
        edit_prompt: &str,
    ) -> Result<Option<Vec<u8>>> {
        let mut request =
            GenerateContentRequest::user_turn(vec![Part::text(edit_prompt), Part::image(image)]);
        request.generation_config = Some(GenerationConfig {
            response_modalities: vec!["TEXT".to_string(), "IMAGE".to_string()],
            ..Default::default()
        });

        let gemini_response: GenerateContentResponse = self.http.generate_content(&request).await?;

        let Some(image_data) = gemini_response.inline_data() else {
            tracing::info!("Gemini ({}) returned no edited image", self.http.model());
            return Ok(None);
        };

        tracing::debug!(
            "Gemini returned edited image with mime_type: {}",
            image_data.mime_type
        );

        use base64::Engine as _;
        base64::engine::general_purpose::STANDARD
            .decode(&image_data.data)
            .map(Some)
            .map_err(|e| Error::AiProvider(format!("Failed to decode Gemini base64 image: {}", e)))
    }
}
