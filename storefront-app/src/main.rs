use anyhow::Context;
use storefront_catalog::DiscountTier;
use storefront_core::UserService;
use storefront_store::{Config, InMemoryUserStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load config")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let service = UserService::new(InMemoryUserStore::new());

    let id = service.create_user("Alice", "alice@example.com").await?;
    if let Some(user) = service.get_user(&id.to_string()).await? {
        tracing::info!("Created user {} ({})", user.name, user.id);
    }

    let price = 100.0;
    for tier in DiscountTier::ALL {
        let discount = config.pricing.discount(price, tier.label());
        tracing::info!("Discount on {:.2} for {}: {:.2}", price, tier.label(), discount);
    }

    Ok(())
}
