use clap::Parser;
use thai_baht_text::core::demo::{evaluate, run_demo};
use thai_baht_text::core::report::{mismatches, render};
use thai_baht_text::utils::{logger, validation::Validate};
use thai_baht_text::{CliConfig, Conversion, Result};

fn convert_all(config: &CliConfig) -> Result<Vec<Conversion>> {
    if config.demo {
        tracing::info!("🎬 Running built-in examples");
        return run_demo();
    }

    config
        .amounts
        .iter()
        .map(|amount| evaluate(amount, None, config.integer))
        .collect()
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let records = match convert_all(&config) {
        Ok(records) => records,
        Err(e) => {
            tracing::error!(
                "❌ Conversion failed: {} (Category: {:?})",
                e,
                e.category()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    print!("{}", render(&records, config.format)?);

    let failed = mismatches(&records);
    if failed > 0 {
        tracing::warn!("⚠️ {} of {} examples did not match", failed, records.len());
        std::process::exit(1);
    }

    tracing::info!("✅ Converted {} amount(s)", records.len());
    Ok(())
}
