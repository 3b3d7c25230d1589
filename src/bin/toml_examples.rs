use anyhow::Context;
use clap::Parser;
use thai_baht_text::core::report::{mismatches, render};
use thai_baht_text::utils::{logger, validation::Validate};
use thai_baht_text::{ExamplesConfig, OutputFormat};

#[derive(Parser)]
#[command(name = "toml-examples")]
#[command(about = "Convert the amounts listed in a TOML file and check the expected readings")]
struct Args {
    /// Path to TOML examples file
    #[arg(short, long, default_value = "baht-examples.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the output format from the file
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Dry run - list the examples without converting them
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("📁 Loading examples from: {}", args.config);

    // 載入 TOML 範例
    let config = match ExamplesConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load examples file '{}': {}", args.config, e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Examples validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    if let Some(title) = config.title() {
        tracing::info!("📋 {}", title);
    }

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No conversion will occur");
        for case in &config.examples {
            println!("{}", case.amount);
        }
        return Ok(());
    }

    let records = config
        .run()
        .with_context(|| format!("converting examples from {}", args.config))?;

    let format = args.format.unwrap_or_else(|| config.output_format());
    print!("{}", render(&records, format)?);

    let failed = mismatches(&records);
    if failed > 0 {
        tracing::warn!("⚠️ {} of {} examples did not match", failed, records.len());
        std::process::exit(1);
    }

    tracing::info!("✅ All {} examples converted", records.len());
    Ok(())
}
