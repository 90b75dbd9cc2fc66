use clap::Parser;
use small_greeter::utils::logger;
use small_greeter::{CliConfig, Dialogue, GreetingSettings, LineConsole, SystemClock};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 設定需要先載入，日誌等級可能寫在設定檔裡
    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            logger::init_cli_logger(config.verbose, None);
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    init_logging(&config, &settings);
    tracing::debug!("CLI config: {:?}", config);
    tracing::info!(
        "Comparing against birth year {}",
        settings.reference_birth_year
    );

    let mut dialogue = Dialogue::new(
        LineConsole::stdio(),
        SystemClock,
        settings.dialogue_settings(),
    );

    if let Err(e) = dialogue.greet() {
        tracing::error!("❌ Dialogue failed: {} (Severity: {:?})", e, e.severity());
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    Ok(())
}

fn init_logging(config: &CliConfig, settings: &GreetingSettings) {
    let level = settings.log_level.as_deref();
    if settings.log_json {
        logger::init_json_logger(config.verbose, level);
    } else {
        logger::init_cli_logger(config.verbose, level);
    }
}
