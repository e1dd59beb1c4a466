//! Canned model answers and sample logos for tests.

use std::time::Duration;

use serde_json::json;

/// What the stub model answers to every request.
#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub body: String,
    /// Wait this long before answering.
    pub delay: Option<Duration>,
}

impl CannedResponse {
    pub fn raw(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            delay: None,
        }
    }

    /// A successful answer whose single candidate carries `text`.
    pub fn text(text: &str) -> Self {
        let body = json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": text}]},
                "finishReason": "STOP"
            }],
            "modelVersion": "stub"
        });
        Self::raw(200, body.to_string())
    }

    /// A complete brand kit for the sample logo.
    pub fn brand_kit() -> Self {
        Self::text(SAMPLE_BRAND_KIT)
    }

    /// The service's error envelope with the given status.
    pub fn error(status: u16, message: &str) -> Self {
        let body = json!({
            "error": {
                "code": status,
                "message": message,
                "status": "INVALID_ARGUMENT"
            }
        });
        Self::raw(status, body.to_string())
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

pub const SAMPLE_BRAND_KIT: &str = r##"{"palette":["#111111","#222222"],"brandName":"Acme","heroTitle":"Stay Better"}"##;

/// Bytes that sniff as a PNG image.
pub fn png_logo() -> Vec<u8> {
    let mut bytes = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    // IHDR chunk for a 1x1 image
    bytes.extend_from_slice(&[
        0x00, 0x00, 0x00, 0x0D, b'I', b'H', b'D', b'R', 0x00, 0x00, 0x00,
        0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00,
    ]);
    bytes
}
