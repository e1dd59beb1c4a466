//! Response bodies from the generative model.
//!
//! Every field is optional on the wire; missing pieces deserialize to empty
//! values so the caller decides what counts as a usable answer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidatePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, with its text parts joined. `None` if the
    /// service produced no text at all.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

/// Error envelope returned with non-2xx statuses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetails {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_joins_first_candidate_parts() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    {"content": {"parts": [{"text": "{\"palette\":"}, {"text": "[]}"}]},
                     "finishReason": "STOP"},
                    {"content": {"parts": [{"text": "ignored"}]}}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(response.text().as_deref(), Some(r#"{"palette":[]}"#));
    }

    #[test]
    fn test_missing_pieces_yield_no_text() {
        for body in [
            "{}",
            r#"{"candidates": []}"#,
            r#"{"candidates": [{}]}"#,
            r#"{"candidates": [{"content": {"parts": [{}]}}]}"#,
            r#"{"candidates": [{"content": {"parts": [{"text": "  "}]}}]}"#,
        ] {
            let response: GenerateContentResponse =
                serde_json::from_str(body).unwrap();
            assert_eq!(response.text(), None, "{body}");
        }
    }
}
