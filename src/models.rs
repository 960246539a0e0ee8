//! Data models and configuration
//!
//! Defines the flight, image and chat structures passed to the assistant, and
//! the startup configuration holding the Gemini credential.

use serde::{Deserialize, Serialize};

pub const DEFAULT_TEXT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FlightRecord {
    pub flight_number: String,
    pub airline: String,
    pub status: String,
    pub gate: String,
}

impl FlightRecord {
    pub fn new(flight_number: &str, airline: &str, status: &str, gate: &str) -> Self {
        Self {
            flight_number: flight_number.to_string(),
            airline: airline.to_string(),
            status: status.to_string(),
            gate: gate.to_string(),
        }
    }
}

/// Base64 image data plus its MIME type, forwarded to the model untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImagePayload {
    pub data: String,
    pub mime_type: String,
}

impl ImagePayload {
    pub fn new(data: String, mime_type: String) -> Self {
        Self { data, mime_type }
    }

    /// Encode raw image bytes, sniffing the MIME type from the file header.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        use base64::Engine as _;
        Self {
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
            mime_type: crate::ai::mime::detect_image_mime(bytes).to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub text: String,
    /// Messages typed by the shift manager; everything else came from the model.
    #[serde(default)]
    pub is_manager: bool,
}

impl ChatMessage {
    pub fn role(&self) -> &'static str {
        if self.is_manager {
            "user"
        } else {
            "model"
        }
    }
}

/// Refuelling vehicle (hydrant server or tanker) from the fleet pool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// Fleet number.
    pub id: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub manufacturer: String,
    pub status: String,
    /// Litres per minute.
    pub max_flow_rate: f64,
    #[serde(default)]
    pub has_platform: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_volume: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OperatorProfile {
    pub id: String,
    pub war_name: String,
    pub status: String,
    pub category: String,
    #[serde(default)]
    pub last_position: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fleet_capability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_vehicle: Option<String>,
    #[serde(default)]
    pub airlines: Vec<String>,
}

/// Startup configuration. Fields are private so every instance goes through
/// the credential check.
#[derive(Debug, Clone)]
pub struct Config {
    api_key: String,
    text_model: String,
    image_model: String,
    base_url: String,
}

impl Config {
    /// Config with default models and host. Fails on a blank `api_key`.
    pub fn new(api_key: String) -> crate::Result<Self> {
        Self::from_lookup(|key| match key {
            "GEMINI_API_KEY" => Some(api_key.clone()),
            _ => None,
        })
    }

    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Fails when `GEMINI_API_KEY`
    /// is unset or blank.
    pub fn from_lookup<F>(lookup: F) -> crate::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = non_empty("GEMINI_API_KEY")
            .ok_or_else(|| crate::Error::Config("GEMINI_API_KEY not set".to_string()))?;

        Ok(Self {
            api_key,
            text_model: non_empty("GEMINI_TEXT_MODEL")
                .unwrap_or_else(|| DEFAULT_TEXT_MODEL.to_string()),
            image_model: non_empty("GEMINI_IMAGE_MODEL")
                .unwrap_or_else(|| DEFAULT_IMAGE_MODEL.to_string()),
            base_url: non_empty("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn text_model(&self) -> &str {
        &self.text_model
    }

    pub fn image_model(&self) -> &str {
        &self.image_model
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
