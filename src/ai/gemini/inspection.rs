use super::client::GeminiHttpClient;
use super::types::{GenerateContentRequest, GenerateContentResponse, Part};
use crate::ai::{VisualInspectionService, DESCRIPTION_FALLBACK, SAFETY_FALLBACK};
use crate::models::ImagePayload;
use crate::{prompts, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Multimodal client for apron safety inspections and image descriptions.
pub struct GeminiInspectionClient {
    http: GeminiHttpClient,
}

impl GeminiInspectionClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, model: String, client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(
                api_key,
                model,
                Duration::from_secs(60),
                client,
            ),
        }
    }

    async fn ask_about_image(&self, prompt: String, image: &ImagePayload) -> Result<Option<String>> {
        tracing::debug!(
            "Sending {} image ({} base64 chars) to Gemini",
            image.mime_type,
            image.data.len()
        );

        let request = GenerateContentRequest::user_turn(vec![Part::text(prompt), Part::image(image)]);
        let response: GenerateContentResponse = self.http.generate_content(&request).await?;
        Ok(response.text())
    }
}

super::impl_with_gemini_base_url!(GeminiInspectionClient);

#[async_trait]
impl VisualInspectionService for GeminiInspectionClient {
    async fn analyze_safety_image(
        &self,
        image: &ImagePayload,
        context: Option<&str>,
    ) -> Result<String> {
        let text = self
            .ask_about_image(prompts::safety_inspection(context), image)
            .await?;
        Ok(text.unwrap_or_else(|| {
            tracing::warn!("Gemini returned no safety analysis text");
            SAFETY_FALLBACK.to_string()
        }))
    }

    async fn describe_image(&self, image: &ImagePayload, prompt: Option<&str>) -> Result<String> {
        let prompt = prompt.unwrap_or(prompts::DEFAULT_DESCRIBE_PROMPT).to_string();
        let text = self.ask_about_image(prompt, image).await?;
        Ok(text.unwrap_or_else(|| DESCRIPTION_FALLBACK.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::gemini::test_support;
    use crate::Error;
    use wiremock::matchers::body_string_contains;
    use wiremock::{MockServer, ResponseTemplate};

    const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

    fn make_client(server: &MockServer) -> GeminiInspectionClient {
        GeminiInspectionClient::new("test-key".to_string(), DEFAULT_MODEL.to_string())
            .with_base_url(server.uri())
    }

    fn apron_photo() -> ImagePayload {
        ImagePayload::new("/9j/4AAQSkZJRg==".to_string(), "image/jpeg".to_string())
    }

    #[tokio::test]
    async fn test_safety_analysis_sends_prompt_and_image() {
        let server = MockServer::start().await;

        test_support::post_path_regex(test_support::GENERATE_CONTENT_PATH_REGEX)
            .and(body_string_contains("Context: general inspection."))
            .and(body_string_contains("[STATUS: SAFE/RISK]"))
            .and(body_string_contains(
                r#""inlineData":{"mimeType":"image/jpeg","data":"/9j/4AAQSkZJRg=="}"#,
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(test_support::text_response(
                "[STATUS: RISK] Loose chock near the nose gear.",
            )))
            .expect(1)
            .mount(&server)
            .await;

        let client = make_client(&server);
        let result = client.analyze_safety_image(&apron_photo(), None).await.unwrap();
        assert_eq!(result, "[STATUS: RISK] Loose chock near the nose gear.");
    }

    #[tokio::test]
    async fn test_safety_analysis_uses_custom_context() {
        let server = MockServer::start().await;

        test_support::post_path_regex(test_support::GENERATE_CONTENT_PATH_REGEX)
            .and(body_string_contains("Context: refuelling at stand 204."))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(test_support::text_response("[STATUS: SAFE]")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = make_client(&server);
        client
            .analyze_safety_image(&apron_photo(), Some("refuelling at stand 204"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_safety_analysis_fallback_on_empty_text() {
        let server = MockServer::start().await;

        test_support::post_path_regex(test_support::GENERATE_CONTENT_PATH_REGEX)
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{ "content": { "parts": [] } }]
            })))
            .mount(&server)
            .await;

        let client = make_client(&server);
        let result = client.analyze_safety_image(&apron_photo(), None).await.unwrap();
        assert_eq!(result, "error in visual analysis");
    }

    #[tokio::test]
    async fn test_safety_analysis_propagates_api_error() {
        let server = MockServer::start().await;

        test_support::post_path_regex(test_support::GENERATE_CONTENT_PATH_REGEX)
            .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
            .mount(&server)
            .await;

        let client = make_client(&server);
        let err = client
            .analyze_safety_image(&apron_photo(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::AiProvider(_)));
    }

    #[tokio::test]
    async fn test_describe_image_default_prompt_and_fallback() {
        let server = MockServer::start().await;

        test_support::post_path_regex(test_support::GENERATE_CONTENT_PATH_REGEX)
            .and(body_string_contains("Describe this image."))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = make_client(&server);
        let result = client.describe_image(&apron_photo(), None).await.unwrap();
        assert_eq!(result, DESCRIPTION_FALLBACK);
    }

    #[tokio::test]
    async fn test_describe_image_uses_text_model_with_prompt_before_image() {
        let server = MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("POST"))
            .and(wiremock::matchers::path(
                "/v1beta/models/gemini-3-flash-preview:generateContent",
            ))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(test_support::text_response("Tug parked at stand 12")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = make_client(&server);
        let result = client
            .describe_image(&apron_photo(), Some("What vehicle is this?"))
            .await
            .unwrap();
        assert_eq!(result, "Tug parked at stand 12");

        let requests = server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        let parts = &body["contents"][0]["parts"];
        assert_eq!(parts[0]["text"], "What vehicle is this?");
        assert_eq!(parts[1]["inlineData"]["mimeType"], "image/jpeg");
    }
}
