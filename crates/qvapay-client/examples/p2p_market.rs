/*
[INPUT]:  Optional currency code (e.g., "USDT")
[OUTPUT]: Public P2P market data (averages, operation counts, open offers)
[POS]:    Examples - public P2P queries
[UPDATE]: When adding new P2P market endpoints
*/

use qvapay_client::*;
use tracing_subscriber::EnvFilter;

/// Example: Query the P2P market (no authentication required)
///
/// Run with `RUST_LOG=qvapay_client=debug QVAPAY_DEBUG=1` to see request diagnostics.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== QvaPay P2P Market Example ===\n");

    let client = QvaPayClient::with_config(ClientConfig::from_env())?;
    println!("✓ HTTP client created for {}\n", client.base_url());

    let currency = std::env::args()
        .nth(1)
        .map(|code| code.parse::<EnabledCurrency>())
        .transpose()?
        .unwrap_or(EnabledCurrency::Usdt);

    println!("Querying weekly average...");
    match client.p2p().weekly_average().await {
        Ok(average) => println!("✓ {} ({}): {}", average.name, average.tick, average.average),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying completed pair averages for {}...", currency);
    match client.p2p().completed_pairs_averages(Some(currency)).await {
        Ok(averages) => println!(
            "✓ buy {:.4} / sell {:.4} over {} offers",
            averages.average_buy,
            averages.average_sell,
            averages.offers.len()
        ),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying operation counts...");
    match client.p2p().public_operations_count().await {
        Ok(count) => println!("✓ {} buy / {} sell", count.buy, count.sell),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying open sell offers for {}...", currency);
    let params = GetOffersParams {
        offer_type: Some(OfferType::Sell),
        coin: Some(currency.to_string()),
        ..Default::default()
    };
    match client.p2p().get_offers(Some(&params)).await {
        Ok(page) => {
            println!("✓ {} offers (page {}/{})", page.total, page.current_page, page.last_page);
            for offer in page.data.iter().take(5) {
                println!("  {} {} -> {} [{}]", offer.coin, offer.amount, offer.receive, offer.status);
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ P2P market example complete");
    Ok(())
}
