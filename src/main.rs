use anyhow::Context;
use clap::Parser;
use std::io;
use zesty_zomato::utils::error::{ErrorSeverity, ZomatoError};
use zesty_zomato::utils::{logger, validation::Validate};
use zesty_zomato::{CliConfig, Console, LocalStorage, Restaurant, Session, Settings};

fn exit_code(e: &ZomatoError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(e: &ZomatoError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(e).max(1));
}

fn load_settings(cli: &CliConfig) -> Settings {
    let settings = cli.resolve().unwrap_or_else(|e| fail(&e));
    if let Err(e) = settings.validate() {
        fail(&e);
    }
    settings
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();
    let settings = load_settings(&cli);

    logger::init_cli_logger(&settings.log_level, settings.log_format);
    tracing::info!("Starting zesty-zomato");
    tracing::debug!("Settings: {:?}", settings);

    let storage = LocalStorage::new(settings.data_dir.clone());
    let mut restaurant = Restaurant::open(storage, &settings);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock());
    let mut session = Session::new(&mut restaurant, console);

    if let Err(e) = session.run() {
        tracing::error!(
            "Session ended with an error: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        return Err(e).with_context(|| format!("data directory {}", settings.data_dir));
    }

    Ok(())
}
