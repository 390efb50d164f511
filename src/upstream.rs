use std::error::Error;
use std::fmt;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::config::RelayConfig;

const MODEL: &str = "gpt-3.5-turbo";
const MAX_TOKENS: u32 = 100;
const TEMPERATURE: f32 = 0.7;

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'static str,
    messages: Vec<Message<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

#[derive(Debug)]
pub enum UpstreamError {
    Transport(reqwest::Error),
    ErrorStatus { status: StatusCode, body: String },
    Decode(reqwest::Error),
    NoChoices,
}

impl fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "completion request failed to send: {err}"),
            Self::ErrorStatus { status, body } => {
                write!(f, "completion API returned {status}: {body}")
            }
            Self::Decode(err) => write!(f, "failed to decode completion response: {err}"),
            Self::NoChoices => write!(f, "completion response contained no choices"),
        }
    }
}

impl Error for UpstreamError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) | Self::Decode(err) => Some(err),
            _ => None,
        }
    }
}

pub async fn fetch_suggestion(
    client: &Client,
    config: &RelayConfig,
    prompt: &str,
) -> Result<String, UpstreamError> {
    let request = CompletionRequest {
        model: MODEL,
        messages: vec![Message {
            role: "user",
            content: prompt,
        }],
        max_tokens: MAX_TOKENS,
        temperature: TEMPERATURE,
    };

    let response = client
        .post(&config.completions_url)
        .bearer_auth(&config.api_key)
        .json(&request)
        .send()
        .await
        .map_err(UpstreamError::Transport)?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unable to read response body>".to_string());
        return Err(UpstreamError::ErrorStatus { status, body });
    }

    let completion: CompletionResponse =
        response.json().await.map_err(UpstreamError::Decode)?;

    extract_suggestion(completion).ok_or(UpstreamError::NoChoices)
}

fn extract_suggestion(completion: CompletionResponse) -> Option<String> {
    completion
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content.trim().to_string())
}
