//! Facade over the Gemini-backed ground-operations services.

use crate::ai::{
    BriefingService, ChatService, GeminiBriefingClient, GeminiChatClient, GeminiImageEditClient,
    GeminiInspectionClient, ImageEditService, VisualInspectionService,
};
use crate::models::{ChatMessage, Config, FlightRecord, ImagePayload, OperatorProfile, Vehicle};
use crate::Result;
use tracing::info;

/// Entry point for every assistant operation. Holds no per-call state.
pub struct OpsAssistant {
    briefing: Box<dyn BriefingService>,
    inspection: Box<dyn VisualInspectionService>,
    editor: Box<dyn ImageEditService>,
    chat: Box<dyn ChatService>,
}

/// Injectable service bundle used to construct [`OpsAssistant`] in tests/harnesses.
pub struct AssistantServices {
    pub briefing: Box<dyn BriefingService>,
    pub inspection: Box<dyn VisualInspectionService>,
    pub editor: Box<dyn ImageEditService>,
    pub chat: Box<dyn ChatService>,
}

impl OpsAssistant {
    /// Build an assistant from concrete service dependencies.
    pub fn with_services(services: AssistantServices) -> Self {
        Self {
            briefing: services.briefing,
            inspection: services.inspection,
            editor: services.editor,
            chat: services.chat,
        }
    }

    /// Build Gemini-backed services from a validated [`Config`].
    pub fn new(config: &Config) -> Self {
        // Reuse one HTTP connection pool across model clients.
        let http_client = reqwest::Client::new();

        info!("Text model: {}", config.text_model());
        info!("Image model: {}", config.image_model());

        let briefing = GeminiBriefingClient::new_with_client(
            config.api_key().to_string(),
            config.text_model().to_string(),
            http_client.clone(),
        )
        .with_base_url(config.base_url().to_string());

        let inspection = GeminiInspectionClient::new_with_client(
            config.api_key().to_string(),
            config.text_model().to_string(),
            http_client.clone(),
        )
        .with_base_url(config.base_url().to_string());

        let editor = GeminiImageEditClient::new_with_client(
            config.api_key().to_string(),
            config.image_model().to_string(),
            http_client.clone(),
        )
        .with_base_url(config.base_url().to_string());

        let chat = GeminiChatClient::new_with_client(
            config.api_key().to_string(),
            config.text_model().to_string(),
            http_client,
        )
        .with_base_url(config.base_url().to_string());

        Self::with_services(AssistantServices {
            briefing: Box::new(briefing),
            inspection: Box::new(inspection),
            editor: Box::new(editor),
            chat: Box::new(chat),
        })
    }

    /// Shift-handover briefing built from the current apron flights.
    pub async fn generate_shift_briefing(&self, flights: &[FlightRecord]) -> Result<String> {
        info!("Generating shift briefing ({} flights)", flights.len());
        self.briefing.generate_shift_briefing(flights).await
    }

    /// Delay analysis for a single flight.
    pub async fn analyze_flight(&self, flight: &FlightRecord) -> Result<String> {
        info!("Analyzing flight {}", flight.flight_number);
        self.briefing.analyze_flight(flight).await
    }

    /// Availability and status review of the refuelling vehicle pool.
    pub async fn analyze_pool_inventory(&self, vehicles: &[Vehicle]) -> Result<String> {
        info!("Analyzing pool inventory ({} vehicles)", vehicles.len());
        self.briefing.analyze_pool_inventory(vehicles).await
    }

    /// Operator and vehicle allocation suggestions for the current flights.
    pub async fn suggest_team_optimizations(
        &self,
        team: &[OperatorProfile],
        flights: &[FlightRecord],
    ) -> Result<String> {
        info!(
            "Suggesting team optimizations ({} operators, {} flights)",
            team.len(),
            flights.len()
        );
        self.briefing.suggest_team_optimizations(team, flights).await
    }

    /// FOD/PPE/equipment inspection; the answer starts with `[STATUS: SAFE/RISK]`
    /// when the model follows the requested format.
    pub async fn analyze_safety_image(
        &self,
        image: &ImagePayload,
        context: Option<&str>,
    ) -> Result<String> {
        info!("Running safety inspection on {} image", image.mime_type);
        self.inspection.analyze_safety_image(image, context).await
    }

    pub async fn describe_image(
        &self,
        image: &ImagePayload,
        prompt: Option<&str>,
    ) -> Result<String> {
        self.inspection.describe_image(image, prompt).await
    }

    pub async fn edit_visual_ops_image(
        &self,
        image: &ImagePayload,
        edit_prompt: &str,
    ) -> Result<Option<Vec<u8>>> {
        info!("Editing {} image", image.mime_type);
        self.editor.edit_image(image, edit_prompt).await
    }

    pub async fn chat(&self, history: &[ChatMessage], message: &str) -> Result<String> {
        self.chat.chat(history, message).await
    }
}
