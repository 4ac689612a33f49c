use std::sync::Arc;

use ecwid_api_client::auth::{CredentialsProvider, EnvCredentials};
use ecwid_api_client::legacy::LegacyClient;
use ecwid_api_client::rest::EcwidClient;
use ecwid_api_client::types::Query;

fn live_tests_enabled() -> bool {
    std::env::var("ECWID_LIVE_TESTS").ok().as_deref() == Some("1")
}

#[tokio::test]
#[ignore]
async fn live_orders_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let credentials = match EnvCredentials::try_from_env() {
        Some(creds) => creds,
        None => return Ok(()),
    };
    let client = EcwidClient::builder()
        .credentials(Arc::new(credentials))
        .build()?;

    let page = client.search_orders(&Query::new().limit(5)).await?;
    assert!(page.items.len() <= 5);

    Ok(())
}

#[tokio::test]
#[ignore]
async fn live_legacy_orders_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let credentials = match EnvCredentials::try_from_env() {
        Some(creds) if creds.get_credentials().expose_order_key().is_some() => creds,
        _ => return Ok(()),
    };
    let client = LegacyClient::builder()
        .credentials(Arc::new(credentials))
        .build()?;

    let page = client.search_orders(&Query::new().limit(5)).await?;
    assert!(page.items.len() <= 5);

    Ok(())
}
