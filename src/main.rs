use ccrm::app::bootstrap;
use ccrm::core::ConfigProvider;
use ccrm::utils::{logger, validation::Validate};
use ccrm::{CliConfig, LocalStorage, MenuApp, TomlConfig};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting ccrm CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("!! {}", e.user_friendly_message());
        eprintln!("   Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let result = match cli.config.clone() {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path);
            match TomlConfig::from_file(&path).and_then(|c| {
                c.validate()?;
                Ok(c)
            }) {
                Ok(config) => run_session(config),
                Err(e) => Err(e),
            }
        }
        None => run_session(cli),
    };

    if let Err(e) = result {
        tracing::error!("Session failed: {} (Severity: {:?})", e, e.severity());
        tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("!! {}", e.user_friendly_message());
        eprintln!("   Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ccrm::utils::error::ErrorSeverity::Low => 0,
            ccrm::utils::error::ErrorSeverity::Medium => 2,
            ccrm::utils::error::ErrorSeverity::High => 1,
            ccrm::utils::error::ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn run_session<C: ConfigProvider>(config: C) -> ccrm::Result<()> {
    let storage = LocalStorage::new(config.data_folder().to_string());
    let seed = config.seed_sample_data();

    let mut app = MenuApp::new(storage, config);
    if seed {
        bootstrap::populate_initial_data(&mut app.students, &mut app.catalog)?;
    }

    let stdin = std::io::stdin();
    app.run(&mut stdin.lock())
}
