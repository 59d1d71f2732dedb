use clap::Parser;
use pack2csv::config::toml_config::TomlConfig;
use pack2csv::core::ConfigProvider;
use pack2csv::utils::error::ErrorSeverity;
use pack2csv::utils::{logger, validation::Validate};
use pack2csv::{CliConfig, ConvertEngine, LocalStorage, SubmissionPipeline};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting pack2csv");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match cli.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let config = match TomlConfig::from_file(&path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML");
                    std::process::exit(1);
                }
            };

            let monitor_enabled = cli.monitor || config.monitoring_enabled();
            run(config, monitor_enabled)
        }
        None => {
            let monitor_enabled = cli.monitor;
            run(cli, monitor_enabled)
        }
    }
}

fn run<C>(config: C, monitor_enabled: bool) -> anyhow::Result<()>
where
    C: ConfigProvider + Validate,
{
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = SubmissionPipeline::new(storage, config);
    let engine = ConvertEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run() {
        Ok(output_path) => {
            tracing::info!("✅ Conversion completed successfully!");
            tracing::info!("📁 Output saved to: {}", output_path);
            println!("✅ Conversion completed successfully!");
            println!("📁 Output saved to: {}", output_path);
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ Conversion failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }
}
