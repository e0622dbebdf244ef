use clap::Parser;
use ham_prefix::core::ConfigProvider;
use ham_prefix::utils::logger;
use ham_prefix::{CliConfig, HamNutClient, LookupEngine};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose, config.json_logs);

    tracing::info!("Starting hamprefix CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    let client = match HamNutClient::new(&settings) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("❌ Could not build HTTP client: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    let call_sign = config.call_sign(&settings);
    let engine = LookupEngine::new(client);

    match engine.lookup(call_sign, settings.field()).await {
        Ok(projection) => {
            tracing::debug!("Lookup for {:?} succeeded", call_sign);
            println!("{}", projection);
        }
        Err(e) => {
            tracing::error!(
                "❌ Lookup for {:?} failed: {} (Category: {:?})",
                call_sign,
                e,
                e.category()
            );
            println!("Failed to get ham radio prefix info.");
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
