use std::net::TcpListener;
use std::time::Duration;

use payloads::brand_kit::{GenerationFailure, LogoImage, brand_kit_request};
use payloads::{ClientError, GenAiClient};
use test_helpers::mock::{CannedResponse, png_logo};
use test_helpers::{assert_status_code, spawn_model};

#[tokio::test]
async fn api_error_message_is_extracted() -> anyhow::Result<()> {
    let model = spawn_model(CannedResponse::error(
        400,
        "API key not valid. Please pass a valid API key.",
    ))
    .await;
    let body = brand_kit_request(&LogoImage::sniff(png_logo())?);

    let result = model.client.generate_content(&body).await;
    match result {
        Err(ClientError::APIError(code, message)) => {
            assert_eq!(code.as_u16(), 400);
            assert_eq!(
                message,
                "API key not valid. Please pass a valid API key."
            );
        }
        other => panic!("Expected APIError, got {other:?}"),
    }

    Ok(())
}

#[tokio::test]
async fn plain_error_body_is_kept() -> anyhow::Result<()> {
    let model = spawn_model(CannedResponse::raw(503, "overloaded")).await;
    let body = brand_kit_request(&LogoImage::sniff(png_logo())?);

    let result = model.client.generate_content(&body).await;
    if let Err(ClientError::APIError(_, message)) = &result {
        assert_eq!(message, "overloaded");
    }
    assert_status_code(result, 503);

    Ok(())
}

#[tokio::test]
async fn slow_answer_times_out() -> anyhow::Result<()> {
    let model = spawn_model(
        CannedResponse::brand_kit().delayed(Duration::from_secs(5)),
    )
    .await;
    let timeout = Duration::from_millis(200);
    let client = model.client_with_timeout(timeout);
    let logo = LogoImage::sniff(png_logo())?;

    let result = client.generate_brand_kit(&logo).await;
    match result {
        Err(GenerationFailure::TimedOut(limit)) => assert_eq!(limit, timeout),
        other => panic!("Expected a timeout, got {other:?}"),
    }

    Ok(())
}

#[tokio::test]
async fn unreachable_service_is_a_network_error() -> anyhow::Result<()> {
    let port = TcpListener::bind("127.0.0.1:0")?.local_addr()?.port();
    let client = GenAiClient::builder()
        .api_key("key")
        .base_url(format!("http://127.0.0.1:{port}/v1beta"))
        .build()?;
    let logo = LogoImage::sniff(png_logo())?;

    let result = client.generate_brand_kit(&logo).await;
    assert!(matches!(
        result,
        Err(GenerationFailure::Client(ClientError::Network(_)))
    ));

    Ok(())
}
