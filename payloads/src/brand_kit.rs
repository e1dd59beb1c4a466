//! Brand kit generation: turning an uploaded logo into a color palette and
//! naming suggestions, and the drawer-level policy around that request.
//!
//! The network call itself lives in [`crate::api_client`]. This module owns
//! everything that can be decided without I/O, so the UI hook and the CLI
//! share one set of rules.

use std::fmt;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use crate::api_client::ClientError;
use crate::requests::{
    Content, GenerateContent, GenerationConfig, InlineData, Part, Schema,
};
use crate::{CustomizationField, CustomizationUpdate};

/// Largest logo accepted for upload.
pub const MAX_LOGO_SIZE: usize = 4 * 1024 * 1024;

/// Upper bound on one generation request, including the model's thinking
/// time.
pub const GENERATION_TIMEOUT: Duration = Duration::from_secs(60);

/// Swatches offered for manual selection in the drawer.
pub const PRESET_COLORS: [&str; 8] = [
    "#ef4444", "#f97316", "#eab308", "#22c55e", "#3b82f6", "#8b5cf6",
    "#ec4899", "#64748b",
];

const BRAND_KIT_PROMPT: &str = "Analyze this logo. Extract a vibrant color \
    palette of 5 primary and secondary brand colors. Also, suggest a creative \
    brand name (without a suffix) and a catchy hero title based on the visual \
    identity. Return a JSON object with keys: 'palette' (array of hex \
    strings), 'brandName' (string), 'heroTitle' (string).";

#[derive(Debug, thiserror::Error)]
pub enum LogoError {
    #[error("Please choose an image file (got {0}).")]
    NotAnImage(String),
    #[error("The selected file is empty.")]
    Empty,
    #[error("Logo is too large ({size} bytes, limit {MAX_LOGO_SIZE}).")]
    TooLarge { size: usize },
}

/// An uploaded logo, already checked to be a reasonably sized image.
#[derive(Clone, PartialEq, Eq)]
pub struct LogoImage {
    bytes: Vec<u8>,
    mime_type: String,
}

impl fmt::Debug for LogoImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogoImage")
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl LogoImage {
    pub fn new(
        bytes: Vec<u8>,
        mime_type: impl Into<String>,
    ) -> Result<Self, LogoError> {
        let mime_type = mime_type.into();
        if !mime_type.starts_with("image/") {
            return Err(LogoError::NotAnImage(mime_type));
        }
        if bytes.is_empty() {
            return Err(LogoError::Empty);
        }
        if bytes.len() > MAX_LOGO_SIZE {
            return Err(LogoError::TooLarge { size: bytes.len() });
        }
        Ok(Self { bytes, mime_type })
    }

    /// Build from raw bytes, taking the MIME type from their magic number.
    pub fn sniff(bytes: Vec<u8>) -> Result<Self, LogoError> {
        let mime_type = infer::get(&bytes)
            .map(|kind| kind.mime_type())
            .unwrap_or("application/octet-stream");
        Self::new(bytes, mime_type)
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn inline_data(&self) -> InlineData {
        InlineData {
            mime_type: self.mime_type.clone(),
            data: STANDARD.encode(&self.bytes),
        }
    }

    /// `data:` URL for previewing the logo in an `<img>`.
    pub fn data_url(&self) -> String {
        let data = STANDARD.encode(&self.bytes);
        format!("data:{};base64,{data}", self.mime_type)
    }
}

/// Request asking the model for a palette, brand name and hero title.
pub fn brand_kit_request(logo: &LogoImage) -> GenerateContent {
    let schema = Schema::object(vec![
        ("palette", Schema::array(Schema::string("Hex color code"))),
        ("brandName", Schema::string("Suggested brand name")),
        ("heroTitle", Schema::string("Suggested hero title")),
    ]);

    GenerateContent {
        contents: vec![Content {
            parts: vec![
                Part::InlineData {
                    inline_data: logo.inline_data(),
                },
                Part::Text {
                    text: BRAND_KIT_PROMPT.into(),
                },
            ],
        }],
        generation_config: Some(GenerationConfig {
            response_mime_type: "application/json".into(),
            response_schema: Some(schema),
        }),
    }
}

/// Why a generation produced nothing usable. Shown to the user only as
/// [`BrandKitError::GenerationFailed`]; the detail goes to the log.
#[derive(Debug, thiserror::Error)]
pub enum GenerationFailure {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("model output is not JSON")]
    Malformed(#[from] serde_json::Error),
    #[error("model returned no palette")]
    EmptyPalette,
    #[error("no answer within {0:?}")]
    TimedOut(Duration),
}

#[derive(Debug, thiserror::Error)]
pub enum BrandKitError {
    #[error("Please upload a logo first.")]
    UploadMissing,
    #[error("A brand kit is already being generated.")]
    Busy,
    #[error("Could not generate brand kit. Please try another image.")]
    GenerationFailed(#[source] GenerationFailure),
}

/// What the model suggested for a logo. The palette is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandKit {
    palette: Vec<String>,
    pub brand_name: Option<String>,
    pub hero_title: Option<String>,
}

impl BrandKit {
    /// Parse the model's JSON answer.
    ///
    /// Unexpected shapes are tolerated: non-string or blank palette entries
    /// are skipped and names that are not non-blank strings count as absent.
    /// Only a missing or empty palette is a failure.
    pub fn from_json(text: &str) -> Result<Self, GenerationFailure> {
        let value: Value = serde_json::from_str(strip_code_fence(text))?;

        let palette: Vec<String> = value
            .get("palette")
            .and_then(Value::as_array)
            .map(|entries| entries.iter().filter_map(non_blank).collect())
            .unwrap_or_default();
        if palette.is_empty() {
            return Err(GenerationFailure::EmptyPalette);
        }

        Ok(Self {
            palette,
            brand_name: value.get("brandName").and_then(non_blank),
            hero_title: value.get("heroTitle").and_then(non_blank),
        })
    }

    pub fn palette(&self) -> &[String] {
        &self.palette
    }

    pub fn primary_color(&self) -> &str {
        &self.palette[0]
    }

    /// The customization change this kit implies. Names the model left out
    /// are not part of the update, so the current ones stay.
    pub fn update(&self) -> CustomizationUpdate {
        CustomizationUpdate {
            primary_color: Some(self.primary_color().to_string()),
            brand_name: self.brand_name.clone(),
            hero_title: self.hero_title.clone(),
            ..Default::default()
        }
    }
}

fn non_blank(value: &Value) -> Option<String> {
    let text = value.as_str()?.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Models sometimes wrap JSON output in a markdown fence even when asked for
/// `application/json`.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(body) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = body.strip_prefix("json").unwrap_or(body);
    body.strip_suffix("```").unwrap_or(body).trim()
}

/// Identifies one `begin`/`finish` pair. A ticket only completes the request
/// it was issued for, and only while its logo is still the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationTicket {
    id: u64,
    logo_version: u64,
}

/// Brand kit state of one drawer session.
///
/// Holds the current logo, the palette generated for it and the single
/// request allowed in flight. Every method is synchronous; the caller runs
/// the request between [`begin`](Self::begin) and [`finish`](Self::finish).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrandKitSession {
    logo: Option<LogoImage>,
    logo_version: u64,
    palette: Vec<String>,
    in_flight: Option<GenerationTicket>,
    issued: u64,
    error: Option<String>,
}

impl BrandKitSession {
    pub fn logo(&self) -> Option<&LogoImage> {
        self.logo.as_ref()
    }

    pub fn palette(&self) -> &[String] {
        &self.palette
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn can_generate(&self) -> bool {
        self.logo.is_some() && !self.is_busy()
    }

    /// Message for the user, if the last action failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replace the logo. The old palette and error no longer apply, and a
    /// request still running for the old logo will be discarded on arrival.
    pub fn upload(&mut self, logo: LogoImage) {
        tracing::debug!(?logo, "logo uploaded");
        self.logo = Some(logo);
        self.logo_version += 1;
        self.palette.clear();
        self.error = None;
    }

    /// Record an upload the browser or validation rejected.
    pub fn reject_upload(&mut self, error: LogoError) {
        tracing::warn!(%error, "logo rejected");
        self.error = Some(error.to_string());
    }

    /// Start a generation for the current logo. Returns the ticket to hand
    /// back to [`finish`](Self::finish) and the logo to send.
    pub fn begin(
        &mut self,
    ) -> Result<(GenerationTicket, LogoImage), BrandKitError> {
        if self.in_flight.is_some() {
            return Err(BrandKitError::Busy);
        }
        let Some(logo) = self.logo.clone() else {
            let error = BrandKitError::UploadMissing;
            self.error = Some(error.to_string());
            return Err(error);
        };

        self.issued += 1;
        let ticket = GenerationTicket {
            id: self.issued,
            logo_version: self.logo_version,
        };
        tracing::info!(?ticket, ?logo, "brand kit generation started");
        self.in_flight = Some(ticket);
        self.palette.clear();
        self.error = None;
        Ok((ticket, logo))
    }

    /// Complete the request `ticket` was issued for.
    ///
    /// Returns the customization update to apply, or `None` when the request
    /// failed or its result is stale (cancelled, or the logo changed since).
    pub fn finish(
        &mut self,
        ticket: GenerationTicket,
        result: Result<BrandKit, GenerationFailure>,
    ) -> Option<CustomizationUpdate> {
        if self.in_flight != Some(ticket) {
            tracing::debug!(?ticket, "discarding result of cancelled request");
            return None;
        }
        self.in_flight = None;

        if ticket.logo_version != self.logo_version {
            tracing::debug!(?ticket, "discarding result for a replaced logo");
            return None;
        }

        match result {
            Ok(kit) => {
                tracing::info!(?kit, "brand kit generated");
                self.palette = kit.palette().to_vec();
                Some(kit.update())
            }
            Err(failure) => {
                let error = BrandKitError::GenerationFailed(failure);
                tracing::error!(
                    "brand kit generation failed: {}",
                    ErrorChain(&error)
                );
                self.error = Some(error.to_string());
                None
            }
        }
    }

    /// Pick one of the generated colors. The palette stays on offer.
    pub fn select_generated(&self, color: &str) -> CustomizationUpdate {
        CustomizationUpdate::primary_color(color)
    }

    /// Pick a preset swatch. The generated palette no longer applies.
    pub fn select_manual(&mut self, color: &str) -> CustomizationUpdate {
        self.palette.clear();
        CustomizationUpdate::field(CustomizationField::PrimaryColor, color)
    }

    /// The drawer closed: whatever is in flight will be ignored.
    pub fn cancel(&mut self) {
        if let Some(ticket) = self.in_flight.take() {
            tracing::debug!(?ticket, "brand kit generation cancelled");
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

/// Formats an error followed by its `source()` chain, `outer: inner: ...`.
pub struct ErrorChain<'a>(pub &'a (dyn std::error::Error + 'static));

impl fmt::Display for ErrorChain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;
        let mut source = self.0.source();
        while let Some(cause) = source {
            write!(f, ": {cause}")?;
            source = cause.source();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CustomizationState;

    fn logo() -> LogoImage {
        LogoImage::new(vec![0x89, b'P', b'N', b'G'], "image/png").unwrap()
    }

    fn kit(json: &str) -> BrandKit {
        BrandKit::from_json(json).unwrap()
    }

    #[test]
    fn test_full_kit_updates_color_and_names() {
        let kit = kit(
            r##"{"palette":["#111111","#222222"],"brandName":"Acme","heroTitle":"Stay Better"}"##,
        );
        let state = CustomizationState::default().applied(kit.update());
        assert_eq!(state.primary_color, "#111111");
        assert_eq!(state.brand_name, "Acme");
        assert_eq!(state.hero_title, "Stay Better");
        assert_eq!(state.brand_name_suffix, "Hotel Pro");
    }

    #[test]
    fn test_missing_names_keep_current_values() {
        let kit = kit(r##"{"palette":["#abcdef"],"brandName":"  ","heroTitle":7}"##);
        let before = CustomizationState::default();
        let after = before.clone().applied(kit.update());
        assert_eq!(after.primary_color, "#abcdef");
        assert_eq!(after.brand_name, before.brand_name);
        assert_eq!(after.hero_title, before.hero_title);
    }

    #[test]
    fn test_empty_or_missing_palette_fails() {
        for body in [
            r#"{"palette":[]}"#,
            r#"{"brandName":"Acme"}"#,
            r##"{"palette":"#fff"}"##,
            r#"{"palette":[1, null, "  "]}"#,
            r#"[1, 2, 3]"#,
        ] {
            assert!(
                matches!(
                    BrandKit::from_json(body),
                    Err(GenerationFailure::EmptyPalette)
                ),
                "{body}"
            );
        }
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        assert!(matches!(
            BrandKit::from_json("not json"),
            Err(GenerationFailure::Malformed(_))
        ));
    }

    #[test]
    fn test_mixed_palette_entries_are_filtered() {
        let kit = kit(r##"{"palette":[3, "#123456", "", " #654321 "]}"##);
        assert_eq!(kit.palette(), ["#123456", "#654321"]);
    }

    #[test]
    fn test_fenced_output_is_accepted() {
        let kit = kit("```json\n{\"palette\":[\"#000000\"]}\n```");
        assert_eq!(kit.primary_color(), "#000000");
    }

    #[test]
    fn test_logo_checks() {
        assert!(matches!(
            LogoImage::new(vec![1], "application/pdf"),
            Err(LogoError::NotAnImage(_))
        ));
        assert!(matches!(
            LogoImage::new(vec![], "image/png"),
            Err(LogoError::Empty)
        ));
        assert!(matches!(
            LogoImage::new(vec![0; MAX_LOGO_SIZE + 1], "image/png"),
            Err(LogoError::TooLarge { .. })
        ));
        assert!(LogoImage::new(vec![0; MAX_LOGO_SIZE], "image/png").is_ok());
    }

    #[test]
    fn test_sniff_detects_png() {
        let png = [
            0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0,
        ];
        let logo = LogoImage::sniff(png.to_vec()).unwrap();
        assert_eq!(logo.mime_type(), "image/png");
        assert!(logo.data_url().starts_with("data:image/png;base64,iVBORw0KGgo"));

        assert!(matches!(
            LogoImage::sniff(b"plain text".to_vec()),
            Err(LogoError::NotAnImage(_))
        ));
    }

    #[test]
    fn test_request_shape() {
        let body = serde_json::to_value(brand_kit_request(&logo())).unwrap();
        let parts = &body["contents"][0]["parts"];
        assert_eq!(parts[0]["inlineData"]["mimeType"], "image/png");
        assert_eq!(parts[0]["inlineData"]["data"], "iVBORw==");
        assert!(parts[1]["text"].as_str().unwrap().contains("palette"));

        let config = &body["generationConfig"];
        assert_eq!(config["responseMimeType"], "application/json");
        let schema = &config["responseSchema"];
        assert_eq!(schema["type"], "OBJECT");
        assert_eq!(schema["properties"]["palette"]["type"], "ARRAY");
        assert_eq!(schema["properties"]["palette"]["items"]["type"], "STRING");
        assert_eq!(
            schema["propertyOrdering"],
            serde_json::json!(["palette", "brandName", "heroTitle"])
        );
    }

    #[test]
    fn test_begin_without_logo() {
        let mut session = BrandKitSession::default();
        assert!(!session.can_generate());
        assert!(matches!(session.begin(), Err(BrandKitError::UploadMissing)));
        assert_eq!(session.error(), Some("Please upload a logo first."));
        assert!(!session.is_busy());
    }

    #[test]
    fn test_second_begin_is_rejected_while_busy() {
        let mut session = BrandKitSession::default();
        session.upload(logo());
        let (ticket, _) = session.begin().unwrap();
        assert!(session.is_busy());
        assert!(matches!(session.begin(), Err(BrandKitError::Busy)));

        let update =
            session.finish(ticket, Ok(kit(r##"{"palette":["#010101"]}"##)));
        assert_eq!(update.unwrap().primary_color.as_deref(), Some("#010101"));
        assert!(!session.is_busy());
        assert_eq!(session.palette(), ["#010101"]);
    }

    #[test]
    fn test_failure_sets_message_and_clears_busy() {
        let mut session = BrandKitSession::default();
        session.upload(logo());
        let (ticket, _) = session.begin().unwrap();

        let update =
            session.finish(ticket, Err(GenerationFailure::EmptyPalette));
        assert_eq!(update, None);
        assert!(!session.is_busy());
        assert_eq!(
            session.error(),
            Some("Could not generate brand kit. Please try another image.")
        );

        session.dismiss_error();
        assert_eq!(session.error(), None);
        assert!(session.can_generate());
    }

    #[test]
    fn test_result_for_replaced_logo_is_discarded() {
        let mut session = BrandKitSession::default();
        session.upload(logo());
        let (ticket, _) = session.begin().unwrap();

        session.upload(logo());
        // the old request still occupies the slot until it lands
        assert!(session.is_busy());

        let update =
            session.finish(ticket, Ok(kit(r##"{"palette":["#ffffff"]}"##)));
        assert_eq!(update, None);
        assert!(session.palette().is_empty());
        assert!(session.can_generate());
    }

    #[test]
    fn test_cancelled_result_is_discarded() {
        let mut session = BrandKitSession::default();
        session.upload(logo());
        let (stale, _) = session.begin().unwrap();
        session.cancel();
        assert!(!session.is_busy());

        let (fresh, _) = session.begin().unwrap();
        assert_ne!(stale, fresh);
        assert_eq!(
            session.finish(stale, Ok(kit(r##"{"palette":["#000001"]}"##))),
            None
        );
        assert!(session.is_busy());
        assert!(
            session
                .finish(fresh, Ok(kit(r##"{"palette":["#000002"]}"##)))
                .is_some()
        );
    }

    #[test]
    fn test_swatch_selection() {
        let mut session = BrandKitSession::default();
        session.upload(logo());
        let (ticket, _) = session.begin().unwrap();
        session.finish(ticket, Ok(kit(r##"{"palette":["#1","#2","#3"]}"##)));

        let update = session.select_generated("#2");
        assert_eq!(update, CustomizationUpdate::primary_color("#2"));
        assert_eq!(session.palette().len(), 3);

        let update = session.select_manual(PRESET_COLORS[0]);
        assert_eq!(update.primary_color.as_deref(), Some("#ef4444"));
        assert_eq!(update.brand_name, None);
        assert!(session.palette().is_empty());
    }

    #[test]
    fn test_upload_clears_palette_and_error() {
        let mut session = BrandKitSession::default();
        session.upload(logo());
        let (ticket, _) = session.begin().unwrap();
        session.finish(ticket, Ok(kit(r##"{"palette":["#1"]}"##)));
        session.reject_upload(LogoError::Empty);
        assert!(session.error().is_some());

        session.upload(logo());
        assert!(session.palette().is_empty());
        assert_eq!(session.error(), None);
    }

    #[test]
    fn test_error_chain_lists_causes() {
        let error =
            BrandKitError::GenerationFailed(GenerationFailure::EmptyPalette);
        assert_eq!(
            ErrorChain(&error).to_string(),
            "Could not generate brand kit. Please try another image.: \
             model returned no palette"
        );
    }
}
