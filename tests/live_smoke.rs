use spiritex_client::ExchangeClientBuilder;
use spiritex_client::auth::EnvCredentials;

fn live_tests_enabled() -> bool {
    std::env::var("SPIRITEX_LIVE_TESTS").ok().as_deref() == Some("1")
}

#[tokio::test]
#[ignore]
async fn live_session_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let builder = match ExchangeClientBuilder::from_env() {
        Some(builder) => builder,
        None => return Ok(()),
    };
    let credentials = match EnvCredentials::try_from_env() {
        Some(creds) => creds,
        None => return Ok(()),
    };
    let client = builder.build();

    let _info = client.server().get_server_info(None).await?;
    let user = client.authenticate_with(&credentials).await?;
    assert!(user.is_some());

    let accounts = client.accounts().list(None).await?;
    assert!(accounts.is_some());

    Ok(())
}
