use clap::Parser;
use next_pow2::core::pow2;
use next_pow2::utils::logger;
use next_pow2::CliConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting next-pow2");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match pow2::run(&config) {
        Ok(result) => {
            tracing::info!("✅ Next power of two for {}: {}", config.size, result);

            // stdout 只輸出計算結果
            println!("{}", result);
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!("❌ Computation failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
