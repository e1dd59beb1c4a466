mod errors;
mod generate;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use payloads::brand_kit::LogoImage;
use test_helpers::mock::{CannedResponse, png_logo};
use test_helpers::{TEST_API_KEY, spawn_model};

#[tokio::test]
async fn brand_kit_request_shape() -> anyhow::Result<()> {
    let model = spawn_model(CannedResponse::brand_kit()).await;
    let logo = LogoImage::sniff(png_logo())?;

    model.client.generate_brand_kit(&logo).await?;

    let requests = model.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.path, "/v1beta/models/gemini-test:generateContent");
    assert_eq!(request.api_key.as_deref(), Some(TEST_API_KEY));

    let parts = &request.body["contents"][0]["parts"];
    assert_eq!(parts[0]["inlineData"]["mimeType"], "image/png");
    assert_eq!(parts[0]["inlineData"]["data"], STANDARD.encode(png_logo()));
    assert!(parts[1]["text"].as_str().unwrap_or_default().contains("logo"));

    let config = &request.body["generationConfig"];
    assert_eq!(config["responseMimeType"], "application/json");
    assert_eq!(config["responseSchema"]["type"], "OBJECT");

    Ok(())
}
