use clap::Parser;
use team_rsvp::core::report;
use team_rsvp::core::{ConfigProvider, OutputFormat};
use team_rsvp::utils::{logger, validation::Validate};
use team_rsvp::{LocalStorage, RsvpIntake, RsvpRegistry, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-rsvp")]
#[command(about = "RSVP tally driven by a TOML event file")]
struct Args {
    /// Path to TOML event file
    #[arg(short, long, default_value = "rsvp.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the report format from the config
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Emit logs as JSON on stderr
    #[arg(long)]
    json_logs: bool,

    /// Dry run - show what would be submitted without tallying
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日誌
    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting TOML-based RSVP tally");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");
    display_config_summary(&config);

    // CSV 路徑相對於設定檔所在目錄
    let config_dir = std::path::Path::new(&args.config)
        .parent()
        .map(|dir| dir.to_path_buf())
        .unwrap_or_default();
    let intake = RsvpIntake::from_config(&config, LocalStorage::new(config_dir));

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No submissions will be tallied");
        let submissions = intake.collect()?;
        println!("Would submit {} RSVP(s):", submissions.len());
        for (i, row) in submissions.iter().enumerate() {
            match row {
                Ok(raw) => println!("  {}. {} = {}", i + 1, raw.name, raw.response),
                Err(e) => println!("  {}. ⚠️  {}", i + 1, e),
            }
        }
        return Ok(());
    }

    let format = args.format.unwrap_or_else(|| config.output_format());
    let mut registry = RsvpRegistry::new();

    let outcome = intake.run(&mut registry).and_then(|report| match config.output_path() {
        Some(path) => {
            let storage = LocalStorage::new(path);
            let file_name = report::write_report(&storage, &report, format)?;
            println!("📁 Report saved to: {}/{}", path, file_name);
            Ok(())
        }
        None => {
            print!("{}", report::render(&report, format)?);
            Ok(())
        }
    });

    if let Err(e) = outcome {
        tracing::error!(
            "❌ RSVP intake failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        std::process::exit(e.severity().exit_code());
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    tracing::info!("📋 Event: {}", config.event_title());
    if let Some(description) = &config.event.description {
        tracing::info!("   {}", description);
    }
    tracing::info!(
        "📥 Inline RSVPs: {}, CSV inputs: {}",
        config.rsvp.len(),
        config.input_files().len()
    );
    tracing::info!(
        "📤 Output: {} ({:?}), strict: {}",
        config.output_path().unwrap_or("stdout"),
        config.output_format(),
        config.strict()
    );
}
