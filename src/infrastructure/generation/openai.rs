use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use crate::domain::hue::errors::HueError;
use crate::domain::hue::ports::ResultGenerator;
use crate::domain::hue::value_objects::{HueChoices, HueResult};
use crate::infrastructure::config::HueConfig;

/// Response envelope of the OpenAI Responses API, reduced to the parts
/// this generator reads.
#[derive(Debug, Deserialize)]
struct ResponsesEnvelope {
  output: Vec<OutputItem>,
}

#[derive(Debug, Deserialize)]
struct OutputItem {
  content: Vec<ContentItem>,
}

#[derive(Debug, Deserialize)]
struct ContentItem {
  text: String,
}

/// The structured output the model is constrained to by the JSON schema.
#[derive(Debug, Deserialize)]
struct GeneratedAnswer {
  hue: GeneratedHue,
  message: String,
}

#[derive(Debug, Deserialize)]
struct GeneratedHue {
  r: i32,
  g: i32,
  b: i32,
}

/// Result generator backed by the OpenAI Responses API.
///
/// The model is pinned to a strict JSON schema, and the parsed answer still
/// goes through the domain constructors, so out-of-range channels or a
/// blank message are rejected rather than passed along.
pub struct OpenAiResultGenerator {
  client: reqwest::Client,
  endpoint: String,
  api_key: String,
  model: String,
  system_prompt: String,
}

impl OpenAiResultGenerator {
  pub fn new(config: &HueConfig) -> Result<Self, HueError> {
    let client = reqwest::Client::builder()
      .timeout(Duration::from_secs(config.request_timeout_seconds))
      .build()
      .map_err(|e| HueError::GenerationFailed(format!("Failed to build HTTP client: {}", e)))?;

    Ok(Self {
      client,
      endpoint: config.api_endpoint.clone(),
      api_key: config.api_key.clone(),
      model: config.model.clone(),
      system_prompt: config.system_prompt.replace('\n', ""),
    })
  }

  fn user_prompt(choices: &HueChoices) -> String {
    let mut prompt = String::new();
    for (word, color) in choices.iter() {
      if prompt.is_empty() {
        prompt = format!("選択 : (語彙, 色) = ({}, {})", word, color);
      } else {
        prompt.push_str(&format!(", ({}, {})", word, color));
      }
    }
    prompt
  }

  fn request_body(&self, choices: &HueChoices) -> serde_json::Value {
    json!({
      "model": self.model,
      "input": [
        {
          "role": "system",
          "content": [{"type": "input_text", "text": self.system_prompt}]
        },
        {
          "role": "user",
          "content": [{"type": "input_text", "text": Self::user_prompt(choices)}]
        }
      ],
      "text": {
        "format": {
          "type": "json_schema",
          "name": "HueAreYouResultResponse",
          "schema": {
            "type": "object",
            "properties": {
              "hue": {
                "type": "object",
                "properties": {
                  "r": {"type": "integer", "minimum": 0, "maximum": 255},
                  "g": {"type": "integer", "minimum": 0, "maximum": 255},
                  "b": {"type": "integer", "minimum": 0, "maximum": 255}
                },
                "required": ["r", "g", "b"],
                "additionalProperties": false
              },
              "message": {"type": "string"}
            },
            "required": ["hue", "message"],
            "additionalProperties": false
          },
          "strict": true
        }
      }
    })
  }
}

#[async_trait]
impl ResultGenerator for OpenAiResultGenerator {
  async fn generate(&self, choices: &HueChoices) -> Result<HueResult, HueError> {
    let response = self
      .client
      .post(&self.endpoint)
      .bearer_auth(&self.api_key)
      .json(&self.request_body(choices))
      .send()
      .await
      .map_err(|e| HueError::GenerationFailed(format!("Request failed: {}", e)))?;

    let status = response.status();
    if !status.is_success() {
      tracing::error!(%status, "result generation request rejected");
      return Err(HueError::GenerationFailed(format!(
        "Upstream returned {}",
        status
      )));
    }

    let envelope: ResponsesEnvelope = response
      .json()
      .await
      .map_err(|e| HueError::GenerationFailed(format!("Malformed response envelope: {}", e)))?;

    let text = envelope
      .output
      .first()
      .and_then(|item| item.content.first())
      .map(|content| content.text.as_str())
      .ok_or_else(|| HueError::GenerationFailed("No content returned".to_string()))?;

    let answer: GeneratedAnswer = serde_json::from_str(text)
      .map_err(|e| HueError::GenerationFailed(format!("Malformed structured output: {}", e)))?;

    HueResult::from_raw(answer.hue.r, answer.hue.g, answer.hue.b, answer.message)
  }
}
