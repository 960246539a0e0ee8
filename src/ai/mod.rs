//! AI service integration for briefings, inspections, chat and image edits
//!
//! Each capability sits behind a trait with a Gemini implementation and an
//! in-memory mock. Empty model output maps to the fallback strings below
//! rather than to an error.

pub mod gemini;
pub mod mime;
pub mod mock;

pub use gemini::{
    GeminiBriefingClient, GeminiChatClient, GeminiImageEditClient, GeminiInspectionClient,
};
pub use mock::{MockBriefingClient, MockChatClient, MockImageEditClient, MockInspectionClient};

use crate::models::{ChatMessage, FlightRecord, ImagePayload, OperatorProfile, Vehicle};
use crate::Result;
use async_trait::async_trait;

pub const BRIEFING_FALLBACK: &str = "no data for briefing";
pub const SAFETY_FALLBACK: &str = "error in visual analysis";
pub const FLIGHT_ANALYSIS_FALLBACK: &str = "no analysis generated";
pub const INVENTORY_FALLBACK: &str = "no analysis generated";
pub const TEAM_OPTIMIZATION_FALLBACK: &str = "no optimization suggestions";
pub const DESCRIPTION_FALLBACK: &str = "no description generated";
pub const CHAT_FALLBACK: &str = "I did not understand the question.";

#[async_trait]
pub trait BriefingService: Send + Sync {
    async fn generate_shift_briefing(&self, flights: &[FlightRecord]) -> Result<String>;
    async fn analyze_flight(&self, flight: &FlightRecord) -> Result<String>;
    async fn analyze_pool_inventory(&self, vehicles: &[Vehicle]) -> Result<String>;
    async fn suggest_team_optimizations(
        &self,
        team: &[OperatorProfile],
        flights: &[FlightRecord],
    ) -> Result<String>;
}

#[async_trait]
pub trait VisualInspectionService: Send + Sync {
    /// `context` of `None` inspects with the general-inspection context.
    async fn analyze_safety_image(
        &self,
        image: &ImagePayload,
        context: Option<&str>,
    ) -> Result<String>;
    async fn describe_image(&self, image: &ImagePayload, prompt: Option<&str>) -> Result<String>;
}

#[async_trait]
pub trait ImageEditService: Send + Sync {
    /// Returns `None` when the model answers without an inline image.
    async fn edit_image(&self, image: &ImagePayload, edit_prompt: &str)
        -> Result<Option<Vec<u8>>>;
}

#[async_trait]
pub trait ChatService: Send + Sync {
    async fn chat(&self, history: &[ChatMessage], message: &str) -> Result<String>;
}
