use super::{
    BriefingService, ChatService, ImageEditService, VisualInspectionService, BRIEFING_FALLBACK,
    CHAT_FALLBACK, SAFETY_FALLBACK, TEAM_OPTIMIZATION_FALLBACK,
};
use crate::models::{ChatMessage, FlightRecord, ImagePayload, OperatorProfile, Vehicle};
use crate::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Returns queued responses in order, cycling once exhausted.
fn next_response<T: Clone>(responses: &Mutex<Vec<T>>, call_count: &Mutex<usize>) -> Option<T> {
    let mut count = call_count.lock().unwrap();
    *count += 1;

    let responses = responses.lock().unwrap();
    if responses.is_empty() {
        None
    } else {
        let index = (*count - 1) % responses.len();
        Some(responses[index].clone())
    }
}

pub struct MockBriefingClient {
    responses: Arc<Mutex<Vec<String>>>,
    call_count: Arc<Mutex<usize>>,
    last_flights: Arc<Mutex<Vec<FlightRecord>>>,
}

impl MockBriefingClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
            last_flights: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_response(self, response: String) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    pub fn get_last_flights(&self) -> Vec<FlightRecord> {
        self.last_flights.lock().unwrap().clone()
    }
}

impl Default for MockBriefingClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BriefingService for MockBriefingClient {
    async fn generate_shift_briefing(&self, flights: &[FlightRecord]) -> Result<String> {
        *self.last_flights.lock().unwrap() = flights.to_vec();
        Ok(next_response(&self.responses, &self.call_count)
            .unwrap_or_else(|| BRIEFING_FALLBACK.to_string()))
    }

    async fn analyze_flight(&self, flight: &FlightRecord) -> Result<String> {
        *self.last_flights.lock().unwrap() = vec![flight.clone()];
        Ok(next_response(&self.responses, &self.call_count)
            .unwrap_or_else(|| format!("Flight {} on schedule", flight.flight_number)))
    }

    async fn analyze_pool_inventory(&self, vehicles: &[Vehicle]) -> Result<String> {
        Ok(next_response(&self.responses, &self.call_count)
            .unwrap_or_else(|| format!("{} vehicles in pool", vehicles.len())))
    }

    async fn suggest_team_optimizations(
        &self,
        _team: &[OperatorProfile],
        flights: &[FlightRecord],
    ) -> Result<String> {
        *self.last_flights.lock().unwrap() = flights.to_vec();
        Ok(next_response(&self.responses, &self.call_count)
            .unwrap_or_else(|| TEAM_OPTIMIZATION_FALLBACK.to_string()))
    }
}

pub struct MockInspectionClient {
    responses: Arc<Mutex<Vec<String>>>,
    call_count: Arc<Mutex<usize>>,
    last_context: Arc<Mutex<Option<String>>>,
}

impl MockInspectionClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
            last_context: Arc::new(Mutex::new(None)),
        }
    }

    pub fn with_response(self, response: String) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    pub fn get_last_context(&self) -> Option<String> {
        self.last_context.lock().unwrap().clone()
    }
}

impl Default for MockInspectionClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VisualInspectionService for MockInspectionClient {
    async fn analyze_safety_image(
        &self,
        _image: &ImagePayload,
        context: Option<&str>,
    ) -> Result<String> {
        *self.last_context.lock().unwrap() = context.map(str::to_string);
        Ok(next_response(&self.responses, &self.call_count)
            .unwrap_or_else(|| SAFETY_FALLBACK.to_string()))
    }

    async fn describe_image(&self, image: &ImagePayload, prompt: Option<&str>) -> Result<String> {
        *self.last_context.lock().unwrap() = prompt.map(str::to_string);
        Ok(next_response(&self.responses, &self.call_count)
            .unwrap_or_else(|| format!("A {} photo of the apron", image.mime_type)))
    }
}

pub struct MockImageEditClient {
    responses: Arc<Mutex<Vec<Option<Vec<u8>>>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockImageEditClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_image_response(self, response: Vec<u8>) -> Self {
        self.responses.lock().unwrap().push(Some(response));
        self
    }

    /// Queue a response in which the model returned no image.
    pub fn with_empty_response(self) -> Self {
        self.responses.lock().unwrap().push(None);
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockImageEditClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageEditService for MockImageEditClient {
    async fn edit_image(
        &self,
        image: &ImagePayload,
        _edit_prompt: &str,
    ) -> Result<Option<Vec<u8>>> {
        match next_response(&self.responses, &self.call_count) {
            Some(response) => Ok(response),
            None => {
                // Echo the source image back
                use base64::Engine as _;
                Ok(base64::engine::general_purpose::STANDARD
                    .decode(&image.data)
                    .ok())
            }
        }
    }
}

pub struct MockChatClient {
    responses: Arc<Mutex<Vec<String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_response(self, response: String) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatService for MockChatClient {
    async fn chat(&self, _history: &[ChatMessage], _message: &str) -> Result<String> {
        Ok(next_response(&self.responses, &self.call_count)
            .unwrap_or_else(|| CHAT_FALLBACK.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_briefing_cycles_responses() {
        let client = MockBriefingClient::new()
            .with_response("Briefing A".to_string())
            .with_response("Briefing B".to_string());

        assert_eq!(client.generate_shift_briefing(&[]).await.unwrap(), "Briefing A");
        assert_eq!(client.generate_shift_briefing(&[]).await.unwrap(), "Briefing B");
        // Should cycle back
        assert_eq!(client.generate_shift_briefing(&[]).await.unwrap(), "Briefing A");
        assert_eq!(client.get_call_count(), 3);
    }

    #[tokio::test]
    async fn test_mock_briefing_defaults_to_fallback_and_records_flights() {
        let client = MockBriefingClient::new();
        let flights = vec![FlightRecord::new("LA3055", "LATAM", "FUELING", "204")];

        let briefing = client.generate_shift_briefing(&flights).await.unwrap();
        assert_eq!(briefing, BRIEFING_FALLBACK);
        assert_eq!(client.get_last_flights(), flights);
    }

    #[tokio::test]
    async fn test_mock_inspection_records_context() {
        let client = MockInspectionClient::new();
        let image = ImagePayload::new("AA==".to_string(), "image/png".to_string());

        let result = client
            .analyze_safety_image(&image, Some("pit 3"))
            .await
            .unwrap();
        assert_eq!(result, SAFETY_FALLBACK);
        assert_eq!(client.get_last_context().as_deref(), Some("pit 3"));
    }

    #[tokio::test]
    async fn test_mock_image_edit_echoes_source_by_default() {
        let client = MockImageEditClient::new();
        let image = ImagePayload::from_bytes(&[1, 2, 3]);

        let result = client.edit_image(&image, "brighten").await.unwrap();
        assert_eq!(result, Some(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn test_mock_image_edit_queued_responses() {
        let client = MockImageEditClient::new()
            .with_image_response(vec![9, 9])
            .with_empty_response();
        let image = ImagePayload::from_bytes(&[1]);

        assert_eq!(client.edit_image(&image, "a").await.unwrap(), Some(vec![9, 9]));
        assert_eq!(client.edit_image(&image, "b").await.unwrap(), None);
        assert_eq!(client.get_call_count(), 2);
    }

    #[tokio::test]
    async fn test_mock_chat_call_count() {
        let client = MockChatClient::new().with_response("Copy.".to_string());

        assert_eq!(client.get_call_count(), 0);
        assert_eq!(client.chat(&[], "status?").await.unwrap(), "Copy.");
        assert_eq!(client.get_call_count(), 1);
    }
}
