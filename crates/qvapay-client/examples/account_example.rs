/*
[INPUT]:  QVAPAY_EMAIL / QVAPAY_PASSWORD (or QVAPAY_AUTH_TOKEN)
[OUTPUT]: Account profile, latest transactions and merchant apps
[POS]:    Examples - authenticated account queries
[UPDATE]: When the login flow or account endpoints change
*/

use qvapay_client::*;
use tracing_subscriber::EnvFilter;

/// Example: Log in and inspect the account
///
/// A token from `QVAPAY_AUTH_TOKEN` skips the login step.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== QvaPay Account Example ===\n");

    let client = QvaPayClient::with_config(ClientConfig::from_env())?;

    if client.auth_token().is_none() {
        let email = std::env::var("QVAPAY_EMAIL")?;
        let password = std::env::var("QVAPAY_PASSWORD")?;

        println!("Logging in as {}...", email);
        match client.auth().login(&LoginParams::new(email, password)).await {
            Ok(login) => println!("✓ Logged in as {}", login.me.username),
            Err(QvaPayError::TwoFactorRequired { info }) => {
                println!("✗ Second factor required: {}", info);
                println!("  Submit the code with client.auth().two_factor_check(code)");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }
    }

    let me = client.user().me().await?;
    println!("\n✓ {} ({}) balance: {}", me.name, me.username, me.balance);

    println!("\nQuerying latest paid transactions...");
    let filter = TransactionFilter {
        status: Some(TransactionStatus::Paid),
        ..Default::default()
    };
    match client.transactions().latest(Some(&filter)).await {
        Ok(transactions) => {
            for tx in transactions.iter().take(5) {
                println!("  {} {} {} [{}]", tx.created_at, tx.amount, tx.description, tx.status);
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying merchant apps...");
    match client.app().get_all().await {
        Ok(apps) => {
            for app in &apps.apps {
                println!("  {} {} (active: {})", app.uuid, app.name, app.active);
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    client.auth().logout().await?;
    println!("\n✓ Logged out");
    Ok(())
}
