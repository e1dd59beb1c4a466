use payloads::brand_kit::{BrandKitSession, GenerationFailure, LogoImage};
use payloads::{ClientError, CustomizationState};
use test_helpers::mock::{CannedResponse, png_logo};
use test_helpers::spawn_model;

#[tokio::test]
async fn generated_kit_updates_customization() -> anyhow::Result<()> {
    let model = spawn_model(CannedResponse::brand_kit()).await;
    let mut state = CustomizationState::default();
    let mut session = BrandKitSession::default();
    session.upload(LogoImage::sniff(png_logo())?);

    let (ticket, logo) = session.begin()?;
    let result = model.client.generate_brand_kit(&logo).await;
    let update = session.finish(ticket, result).expect("update applied");
    state.apply(update);

    assert_eq!(state.primary_color, "#111111");
    assert_eq!(state.brand_name, "Acme");
    assert_eq!(state.hero_title, "Stay Better");
    assert_eq!(session.palette(), ["#111111", "#222222"]);
    assert!(!session.is_busy());

    Ok(())
}

#[tokio::test]
async fn empty_palette_leaves_state_unchanged() -> anyhow::Result<()> {
    let model = spawn_model(CannedResponse::text(r#"{"palette":[]}"#)).await;
    let state = CustomizationState::default();
    let mut session = BrandKitSession::default();
    session.upload(LogoImage::sniff(png_logo())?);

    let (ticket, logo) = session.begin()?;
    let result = model.client.generate_brand_kit(&logo).await;
    assert!(matches!(result, Err(GenerationFailure::EmptyPalette)));

    assert_eq!(session.finish(ticket, result), None);
    assert_eq!(state, CustomizationState::default());
    assert_eq!(
        session.error(),
        Some("Could not generate brand kit. Please try another image.")
    );
    assert!(!session.is_busy());

    Ok(())
}

#[tokio::test]
async fn partial_kit_keeps_names() -> anyhow::Result<()> {
    let model =
        spawn_model(CannedResponse::text(r##"{"palette":["#0f766e"]}"##))
            .await;
    let logo = LogoImage::sniff(png_logo())?;

    let kit = model.client.generate_brand_kit(&logo).await?;
    let state = CustomizationState::default().applied(kit.update());

    assert_eq!(state.primary_color, "#0f766e");
    assert_eq!(state.brand_name, CustomizationState::default().brand_name);
    assert_eq!(state.hero_title, CustomizationState::default().hero_title);

    Ok(())
}

#[tokio::test]
async fn non_json_answer_is_malformed() -> anyhow::Result<()> {
    let model = spawn_model(CannedResponse::text("I like this logo!")).await;
    let logo = LogoImage::sniff(png_logo())?;

    let result = model.client.generate_brand_kit(&logo).await;
    assert!(matches!(result, Err(GenerationFailure::Malformed(_))));

    Ok(())
}

#[tokio::test]
async fn answer_without_candidates() -> anyhow::Result<()> {
    let model = spawn_model(CannedResponse::raw(200, r#"{"candidates":[]}"#))
        .await;
    let logo = LogoImage::sniff(png_logo())?;

    let result = model.client.generate_brand_kit(&logo).await;
    assert!(matches!(
        result,
        Err(GenerationFailure::Client(ClientError::EmptyResponse))
    ));

    Ok(())
}
