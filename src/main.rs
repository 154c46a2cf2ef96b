use booking_slots::utils::{logger, validation::Validate};
use booking_slots::{BookingEngine, CliConfig, FileConfig, HttpBookingApi};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting booking-slots availability check");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Some(path) = config.config.clone() {
        match FileConfig::from_file(&path) {
            Ok(file) => config.apply_file(&file),
            Err(e) => {
                tracing::error!("❌ Could not load config file {}: {}", path, e);
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        }
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let api = HttpBookingApi::new(config.base_url.clone());
    let engine = BookingEngine::new(api);

    match engine.check_availability(&config.date, &config.services).await {
        Ok(report) => {
            tracing::info!("✅ Availability check completed");
            print!("{}", report.render_text());
            if report.has_selectable_slot() {
                tracing::info!("Free slots found for {}", report.date);
            }
        }
        Err(e) => {
            tracing::error!("❌ Availability check failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
