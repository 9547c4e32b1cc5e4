use rgen_studio::{
    logger::{self, LoggerConfig},
    server, Config,
};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv_loaded = dotenv::dotenv().is_ok();

    logger::init_with_config(LoggerConfig::from_env())?;

    if dotenv_loaded {
        log::info!("✅ .env file loaded successfully");
    } else {
        log::warn!("⚠️  No .env file found, using system environment variables");
    }

    let config = Config::from_env();
    if config.backend.api_key.is_none() {
        log::warn!("⚠️  IMAGE_API_KEY is not set, requests will be sent without authorization");
    }

    logger::log_startup_info(
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        &config.host,
        config.port_or_default(),
    );
    logger::log_config_info(&config);

    if let Err(e) = server::run(config).await {
        log::error!("❌ Server failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}
