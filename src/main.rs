use clap::Parser;
use team_rsvp::core::report;
use team_rsvp::core::ConfigProvider;
use team_rsvp::utils::error::RsvpError;
use team_rsvp::utils::{logger, validation::Validate};
use team_rsvp::{CliConfig, LocalStorage, RsvpIntake, RsvpRegistry};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting team-rsvp CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let intake = RsvpIntake::from_config(&config, LocalStorage::current_dir());
    let mut registry = RsvpRegistry::new();

    let result = intake.run(&mut registry).and_then(|report| {
        match config.output_path() {
            Some(path) => {
                let storage = LocalStorage::new(path);
                let file_name = report::write_report(&storage, &report, config.output_format())?;
                tracing::info!("📁 Report saved to: {}/{}", path, file_name);
                println!("📁 Report saved to: {}/{}", path, file_name);
            }
            None => print!("{}", report::render(&report, config.output_format())?),
        }
        Ok(report)
    });

    match result {
        Ok(report) => {
            if !report.rejected.is_empty() {
                eprintln!(
                    "⚠️  {} submission(s) were rejected",
                    report.rejected.len()
                );
            }
        }
        Err(e) => exit_with(&e),
    }

    Ok(())
}

fn exit_with(e: &RsvpError) -> ! {
    tracing::error!(
        "❌ RSVP intake failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    std::process::exit(e.severity().exit_code());
}
