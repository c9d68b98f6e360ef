use clap::Parser;
use small_kit::app::commands::build_engine;
use small_kit::utils::logger;
use small_kit::CliConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(config.verbose, config.json_logs);

    tracing::info!("Starting small-kit CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let result = async { build_engine(&config.command)?.run().await }.await;

    match result {
        Ok(outputs) => {
            for output in outputs {
                for line in output.lines {
                    println!("{}", line);
                }
            }
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ small-kit failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = e.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
