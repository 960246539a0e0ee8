use super::client::GeminiHttpClient;
use super::types::{GenerateContentRequest, GenerateContentResponse, Part};
use crate::ai::{
    BriefingService, BRIEFING_FALLBACK, FLIGHT_ANALYSIS_FALLBACK, INVENTORY_FALLBACK,
    TEAM_OPTIMIZATION_FALLBACK,
};
use crate::models::{FlightRecord, OperatorProfile, Vehicle};
use crate::{prompts, Result};
use async_trait::async_trait;
use std::time::Duration;

pub struct GeminiBriefingClient {
    http: GeminiHttpClient,
}

impl GeminiBriefingClient {
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

    async fn generate_text(&self, prompt: String) -> Result<Option<String>> {
        let request = GenerateContentRequest::user_turn(vec![Part::text(prompt)]);
        let response: GenerateContentResponse = self.http.generate_content(&request).await?;
        Ok(response.text())
    }
}

super::impl_with_gemini_base_url!(GeminiBriefingClient);

#[async_trait]
impl BriefingService for GeminiBriefingClient {
    async fn generate_shift_briefing(&self, flights: &[FlightRecord]) -> Result<String> {
        tracing::debug!("Generating shift briefing for {} flights", flights.len());

        let text = self.generate_text(prompts::shift_briefing(flights)).await?;
        Ok(text.unwrap_or_else(|| {
            tracing::warn!("Gemini returned no briefing text");
            BRIEFING_FALLBACK.to_string()
        }))
    }

    async fn analyze_flight(&self, flight: &FlightRecord) -> Result<String> {
        tracing::debug!("Analyzing flight {}", flight.flight_number);

        let flight_json = serde_json::to_string(flight)?;
        let prompt = prompts::render(prompts::FLIGHT_ANALYSIS, &[("flight", &flight_json)]);

        let text = self.generate_text(prompt).await?;
        Ok(text.unwrap_or_else(|| FLIGHT_ANALYSIS_FALLBACK.to_string()))
    }

    async fn analyze_pool_inventory(&self, vehicles: &[Vehicle]) -> Result<String> {
        tracing::debug!("Analyzing pool inventory of {} vehicles", vehicles.len());

        let vehicles_json = serde_json::to_string_pretty(vehicles)?;
        let prompt = prompts::render(prompts::POOL_INVENTORY, &[("vehicles", &vehicles_json)]);

        let text = self.generate_text(prompt).await?;
        Ok(text.unwrap_or_else(|| INVENTORY_FALLBACK.to_string()))
    }

    async fn suggest_team_optimizations(
        &self,
        team: &[OperatorProfile],
        flights: &[FlightRecord],
    ) -> Result<String> {
        tracing::debug!(
            "Suggesting allocations for {} operators and {} flights",
            team.len(),
            flights.len()
        );

        let profiles_json = serde_json::to_string_pretty(team)?;
        let flights_json = serde_json::to_string_pretty(flights)?;
        let prompt = prompts::render(
            prompts::TEAM_OPTIMIZATION,
            &[("profiles", &profiles_json), ("flights", &flights_json)],
        );

        let text = self.generate_text(prompt).await?;
        Ok(text.unwrap_or_else(|| TEAM_OPTIMIZATION_FALLBACK.to_string()))
    }
}
