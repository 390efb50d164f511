use std::env;

pub const DEFAULT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub api_key: String,
    pub completions_url: String,
    pub port: u16,
}

impl RelayConfig {
    pub fn from_env() -> Self {
        // A missing key is not rejected here; it surfaces as an upstream
        // authorization failure on the first request.
        let api_key = env::var("OPENAI_API_KEY").unwrap_or_default();

        let completions_url = env::var("OPENAI_COMPLETIONS_URL")
            .unwrap_or_else(|_| DEFAULT_COMPLETIONS_URL.to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(3000);

        Self {
            api_key,
            completions_url,
            port,
        }
    }
}
