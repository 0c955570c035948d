use anyhow::Result;
use clap::Parser;
use forgify::utils::error::ErrorSeverity;
use forgify::utils::{logger, validation::Validate};
use forgify::{
    CliConfig, ConvertEngine, DeckPipeline, LocalStorage, MoxfieldSource, Settings,
};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting forgify");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // --set-path persists the save directory and exits without fetching.
    if let Some(dir) = &config.set_path {
        let settings = Settings {
            savepath: dir.clone(),
        };
        if let Err(e) = settings.save(&config.config) {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
        println!("savepath changed to: {}", dir);
        return Ok(());
    }

    let settings = match Settings::load_or_default(&config.config) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!(
                "⚠️ {} - falling back to the default savepath",
                e.user_friendly_message()
            );
            Settings::default()
        }
    };

    let run_config = match config.resolve(&settings) {
        Ok(run_config) => run_config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let source =
        match MoxfieldSource::with_base_url(&config.api_base, Duration::from_secs(config.timeout)) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(1);
            }
        };
    let storage = LocalStorage::new(run_config.savepath.clone());
    let pipeline = DeckPipeline::new(source, storage, run_config);

    let engine = ConvertEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Deck conversion completed successfully!");
            tracing::info!("📁 Deck saved to: {}", output_path);
            println!("✅ Deck conversion completed successfully!");
        }
        Err(e) => {
            tracing::error!(
                "❌ Deck conversion failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
