macro_rules! impl_with_gemini_base_url {
    ($client:ty) => {
        impl $client {
            /// Send requests to another Gemini-compatible host.
            pub fn with_base_url(mut self, base_url: String) -> Self {
                self.http = self.http.with_base_url(base_url);
                self
            }
        }
    };
}

pub(crate) use impl_with_gemini_base_url;

pub mod briefing;
pub mod chat;
pub mod client;
pub mod edit;
pub mod inspection;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use briefing::GeminiBriefingClient;
pub use chat::GeminiChatClient;
pub use edit::GeminiImageEditClient;
pub use inspection::GeminiInspectionClient;
