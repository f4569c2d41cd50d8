use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;

use crate::models::CastingBrief;

const SYSTEM_INSTRUCTION: &str =
    "You are a helpful assistant for a Voice Over casting platform. Reply in Spanish.";

/// Errors that can occur when generating a casting brief
///
/// Callers report all of them as a single "analysis failed" condition.
#[derive(Debug, Error)]
pub enum BriefError {
    #[error("Brief generation API key is not configured")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Brief generator returned no text")]
    EmptyResponse,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Turns a natural-language project description into a structured brief
#[async_trait]
pub trait BriefGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<CastingBrief, BriefError>;
}

/// Gemini `generateContent` client
///
/// One request per call, no retries. The HTTP timeout is optional; without
/// one a hung upstream request keeps the caller waiting.
pub struct GeminiClient {
    base_url: String,
    api_key: Option<String>,
    model: String,
    client: Client,
}

impl GeminiClient {
    pub fn new(
        base_url: String,
        api_key: Option<String>,
        model: String,
        timeout_secs: Option<u64>,
    ) -> Result<Self, BriefError> {
        let mut builder = Client::builder();
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            base_url,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            model,
            client,
        })
    }

    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    fn request_body(prompt: &str) -> Value {
        let contents = format!(
            "You are an expert Casting Director assistant.\n\
             Analyze the following project description provided by an advertising agency or production company.\n\
             Extract the distinct roles required for voice over or dubbing.\n\n\
             Input Description:\n\"{}\"\n\n\
             Be precise with age ranges and voice textures.",
            prompt
        );

        json!({
            "contents": [{ "role": "user", "parts": [{ "text": contents }] }],
            "systemInstruction": { "parts": [{ "text": SYSTEM_INSTRUCTION }] },
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": casting_schema(),
            }
        })
    }
}

/// Response schema: a role list with five required fields plus a title suggestion
fn casting_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "roles": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING", "description": "Name of the character or role (e.g., 'Narrator', 'Dad')" },
                        "description": { "type": "STRING", "description": "Brief description of the role's personality and context" },
                        "gender": { "type": "STRING", "description": "Gender of the voice (Male, Female, Non-binary, Any)" },
                        "ageRange": { "type": "STRING", "description": "Estimated age range (e.g., '30-40', 'Child', 'Senior')" },
                        "voiceType": { "type": "STRING", "description": "Adjectives describing the voice tone (e.g., Warm, Energetic, Raspy, Corporate)" }
                    },
                    "required": ["name", "description", "gender", "ageRange", "voiceType"]
                }
            },
            "projectTitleSuggestion": { "type": "STRING", "description": "A catchy title for this casting project based on the description" }
        },
        "required": ["roles", "projectTitleSuggestion"]
    })
}

/// Extract the generated text from a `generateContent` response
fn response_text(json: &Value) -> Option<&str> {
    json.get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
}

/// Parse the generated JSON into a brief
///
/// Any deviation from the expected shape, including a role missing one of
/// its five fields, rejects the whole brief.
pub fn parse_brief(text: &str) -> Result<CastingBrief, BriefError> {
    serde_json::from_str(text)
        .map_err(|e| BriefError::InvalidResponse(format!("Failed to parse brief: {}", e)))
}

#[async_trait]
impl BriefGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<CastingBrief, BriefError> {
        let api_key = self.api_key.as_deref().ok_or(BriefError::MissingApiKey)?;

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            self.model,
            urlencoding::encode(api_key)
        );

        tracing::debug!("Requesting casting brief from model {}", self.model);

        let response = self
            .client
            .post(&url)
            .json(&Self::request_body(prompt))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Brief generation failed: {} - {}", status, body);
            return Err(BriefError::ApiError(format!("Failed to generate brief: {}", status)));
        }

        let json: Value = response.json().await?;

        let text = response_text(&json)
            .filter(|t| !t.trim().is_empty())
            .ok_or(BriefError::EmptyResponse)?;

        let brief = parse_brief(text)?;

        tracing::info!("Generated brief '{}' with {} roles", brief.title, brief.roles.len());

        Ok(brief)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gemini_client_creation() {
        let client = GeminiClient::new(
            "https://generativelanguage.test/v1beta".to_string(),
            Some("test_key".to_string()),
            "gemini-2.5-flash".to_string(),
            Some(30),
        )
        .unwrap();

        assert_eq!(client.base_url, "https://generativelanguage.test/v1beta");
        assert!(client.has_credentials());
    }

    #[test]
    fn test_blank_key_is_missing() {
        let client = GeminiClient::new(
            "https://generativelanguage.test/v1beta".to_string(),
            Some("  ".to_string()),
            "gemini-2.5-flash".to_string(),
            None,
        )
        .unwrap();

        assert!(!client.has_credentials());
    }

    #[test]
    fn test_request_body_carries_schema_and_prompt() {
        let body = GeminiClient::request_body("Marca: Ford. Campaña: . Descripción: Spot");

        let text = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(text.contains("Marca: Ford"));
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(
            body["generationConfig"]["responseSchema"]["properties"]["roles"]["items"]["required"]
                .as_array()
                .unwrap()
                .len(),
            5
        );
    }

    #[test]
    fn test_response_text() {
        let json = json!({
            "candidates": [{ "content": { "parts": [{ "text": "{}" }] } }]
        });
        assert_eq!(response_text(&json), Some("{}"));
        assert_eq!(response_text(&json!({ "candidates": [] })), None);
    }

    #[test]
    fn test_parse_brief() {
        let text = r#"{
            "projectTitleSuggestion": "Vuelo a casa",
            "roles": [{
                "name": "Azafata",
                "description": "Anuncia el embarque",
                "gender": "Femenino",
                "ageRange": "30-40",
                "voiceType": "Amable Cálida"
            }]
        }"#;

        let brief = parse_brief(text).unwrap();
        assert_eq!(brief.title, "Vuelo a casa");
        assert_eq!(brief.roles[0].voice_type, "Amable Cálida");

        assert!(matches!(parse_brief("not json"), Err(BriefError::InvalidResponse(_))));
        assert!(matches!(
            parse_brief(r#"{"roles": []}"#),
            Err(BriefError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_request() {
        let client = GeminiClient::new(
            "http://127.0.0.1:9".to_string(),
            None,
            "gemini-2.5-flash".to_string(),
            None,
        )
        .unwrap();

        assert!(matches!(client.generate("x").await, Err(BriefError::MissingApiKey)));
    }
}
