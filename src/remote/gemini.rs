// SPDX-License-Identifier: MPL-2.0
//! Gemini adapter for the image processing port.
//!
//! Speaks the `generateContent` REST endpoint: the image goes out as
//! base64 inline data next to the instruction text, and the first inline
//! data part of the answer comes back as the cleaned image.

use super::{ImageProcessor, ProcessError};
use crate::media::asset::FALLBACK_MEDIA_TYPE;
use crate::media::ImageAsset;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use futures_util::future::BoxFuture;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variables probed for the credential, in order.
const API_KEY_VARS: &[&str] = &["GEMINI_API_KEY", "API_KEY"];

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct GeminiClient {
    api_key: Option<String>,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Self {
        Self {
            api_key,
            model: model.into(),
        }
    }

    /// Builds a client with the credential from the process environment.
    ///
    /// A missing credential does not fail construction; the first call
    /// reports it, which keeps the rest of the app usable.
    pub fn from_env(model: impl Into<String>) -> Self {
        let api_key = API_KEY_VARS
            .iter()
            .find_map(|var| env::var(var).ok().filter(|value| !value.is_empty()));
        if api_key.is_none() {
            log::warn!("No API key in the environment (checked {API_KEY_VARS:?})");
        }
        Self::new(api_key, model)
    }

    async fn generate(
        &self,
        image: ImageAsset,
        instruction: String,
    ) -> Result<ImageAsset, ProcessError> {
        let api_key = self.api_key.clone().ok_or_else(|| {
            ProcessError::Failed(
                "No API key configured. Set GEMINI_API_KEY in the environment.".to_string(),
            )
        })?;

        let url = format!("{API_BASE}/models/{}:generateContent", self.model);
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![
                    Part {
                        inline_data: Some(InlineData {
                            mime_type: Some(image.media_type().to_string()),
                            data: BASE64.encode(image.bytes()),
                        }),
                        text: None,
                    },
                    Part {
                        inline_data: None,
                        text: Some(instruction),
                    },
                ],
            }],
        };

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| ProcessError::Failed(format!("Failed to create HTTP client: {e}")))?;

        let response = client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProcessError::Failed(e.to_string()))?;

        let status = response.status();
        let body_text = response
            .text()
            .await
            .map_err(|e| ProcessError::Failed(e.to_string()))?;

        if !status.is_success() {
            // Prefer the API's own message over the bare status line.
            let message = serde_json::from_str::<ErrorResponse>(&body_text)
                .ok()
                .and_then(|body| body.error)
                .map(|detail| detail.message)
                .unwrap_or_else(|| status.to_string());
            return Err(ProcessError::Failed(message));
        }

        let parsed: GenerateResponse = serde_json::from_str(&body_text)
            .map_err(|e| ProcessError::Failed(format!("Unexpected response: {e}")))?;

        extract_image(parsed)
    }
}

impl ImageProcessor for GeminiClient {
    fn process(
        &self,
        image: ImageAsset,
        instruction: String,
    ) -> BoxFuture<'static, Result<ImageAsset, ProcessError>> {
        let client = self.clone();
        Box::pin(async move { client.generate(image, instruction).await })
    }
}

// =============================================================================
// Wire format
// =============================================================================

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    inline_data: Option<InlineData>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    mime_type: Option<String>,
    data: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Picks the first inline image out of a response.
///
/// A part without a declared mime type defaults to PNG, matching what the
/// endpoint emits for generated images.
fn extract_image(response: GenerateResponse) -> Result<ImageAsset, ProcessError> {
    let parts = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| content.parts)
        .unwrap_or_default();

    for part in parts {
        let Some(inline) = part.inline_data else {
            continue;
        };
        if inline.data.is_empty() {
            continue;
        }

        let bytes = BASE64
            .decode(inline.data.as_bytes())
            .map_err(|e| ProcessError::Failed(format!("Invalid image payload: {e}")))?;
        let media_type = inline
            .mime_type
            .unwrap_or_else(|| FALLBACK_MEDIA_TYPE.to_string());
        return ImageAsset::from_encoded(bytes, media_type, None)
            .map_err(|e| ProcessError::Failed(e.to_string()));
    }

    Err(ProcessError::NoImage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_png_bytes;
    use serde_json::json;

    fn response_with_parts(parts: serde_json::Value) -> GenerateResponse {
        serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": parts, "role": "model" } }]
        }))
        .expect("fixture should deserialize")
    }

    #[test]
    fn request_serializes_camel_case_inline_data() {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![
                    Part {
                        inline_data: Some(InlineData {
                            mime_type: Some("image/jpeg".to_string()),
                            data: "QUJD".to_string(),
                        }),
                        text: None,
                    },
                    Part {
                        inline_data: None,
                        text: Some("clean this".to_string()),
                    },
                ],
            }],
        };

        let value = serde_json::to_value(&request).expect("request should serialize");
        assert_eq!(
            value.pointer("/contents/0/parts/0/inlineData/mimeType"),
            Some(&json!("image/jpeg"))
        );
        assert_eq!(
            value.pointer("/contents/0/parts/1/text"),
            Some(&json!("clean this"))
        );
        // Absent options stay off the wire entirely.
        assert!(value.pointer("/contents/0/parts/1/inlineData").is_none());
    }

    #[test]
    fn extract_returns_first_inline_image() {
        let payload = BASE64.encode(sample_png_bytes(4, 2));
        let response = response_with_parts(json!([
            { "text": "Here is the cleaned image." },
            { "inlineData": { "mimeType": "image/png", "data": payload } },
        ]));

        let asset = extract_image(response).expect("inline image expected");
        assert_eq!(asset.width(), 4);
        assert_eq!(asset.media_type(), "image/png");
    }

    #[test]
    fn extract_defaults_missing_mime_type_to_png() {
        let payload = BASE64.encode(sample_png_bytes(2, 2));
        let response = response_with_parts(json!([
            { "inlineData": { "data": payload } },
        ]));

        let asset = extract_image(response).expect("inline image expected");
        assert_eq!(asset.media_type(), FALLBACK_MEDIA_TYPE);
    }

    #[test]
    fn extract_reports_no_image_for_text_only_answer() {
        let response = response_with_parts(json!([
            { "text": "I cannot process this image." },
        ]));
        assert!(matches!(extract_image(response), Err(ProcessError::NoImage)));
    }

    #[test]
    fn extract_reports_no_image_for_empty_candidates() {
        let response: GenerateResponse =
            serde_json::from_value(json!({})).expect("empty response should deserialize");
        assert!(matches!(extract_image(response), Err(ProcessError::NoImage)));
    }

    #[test]
    fn extract_skips_empty_inline_data() {
        let response = response_with_parts(json!([
            { "inlineData": { "mimeType": "image/png", "data": "" } },
        ]));
        assert!(matches!(extract_image(response), Err(ProcessError::NoImage)));
    }

    #[test]
    fn extract_rejects_invalid_base64() {
        let response = response_with_parts(json!([
            { "inlineData": { "mimeType": "image/png", "data": "!!not base64!!" } },
        ]));
        assert!(matches!(
            extract_image(response),
            Err(ProcessError::Failed(_))
        ));
    }

    #[test]
    fn error_body_message_is_preferred() {
        let body = r#"{"error":{"code":429,"message":"Resource has been exhausted","status":"RESOURCE_EXHAUSTED"}}"#;
        let parsed: ErrorResponse = serde_json::from_str(body).expect("error body parses");
        assert_eq!(
            parsed.error.map(|detail| detail.message).as_deref(),
            Some("Resource has been exhausted")
        );
    }

    #[tokio::test]
    async fn missing_api_key_fails_at_call_time() {
        let client = GeminiClient::new(None, "gemini-test");
        let asset = crate::test_utils::sample_asset(2, 2, None);

        let result = client.process(asset, "clean".to_string()).await;
        match result {
            Err(ProcessError::Failed(message)) => {
                assert!(message.contains("GEMINI_API_KEY"), "got: {message}");
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }
}
