use sun_graphql::config::AppConfig;
use sun_graphql::seed;
use sun_graphql::store::Repositories;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Initialize logging with explicit filter to suppress sqlx debug logs
    use env_logger::{Builder, Env};
    use log::LevelFilter;

    Builder::from_env(Env::default().default_filter_or("info"))
        .filter_module("sqlx", LevelFilter::Warn)
        .init();

    println!("Sun: GraphQL content server");

    let config = AppConfig::load()?;
    println!(
        "Configuration loaded: server={}:{}, storage={:?}",
        config.server.host, config.server.port, config.storage.backend
    );

    let repositories = Repositories::from_config(&config).await?;
    println!("Repositories ready");

    // Load seed data for demonstration (optional)
    if std::env::var("LOAD_SEED_DATA").unwrap_or_default() == "true" {
        println!("Loading seed data...");
        seed::load_seed_data(&repositories).await?;
        println!("Seed data loaded successfully");
    }

    sun_graphql::run_server(sun_graphql::build_app(&repositories, &config), &config).await?;

    Ok(())
}
