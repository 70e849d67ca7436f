use anyhow::Context;
use clap::Parser;
use intake_roi::core::{self_check, PageSettings};
use intake_roi::utils::error::ErrorSeverity;
use intake_roi::utils::{logger, validation::Validate};
use intake_roi::{CalculatorSession, CliConfig, PageConfig, RoiError};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting intake-roi calculator");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let page = match load_page_config(config.config.as_deref()) {
        Ok(page) => page,
        Err(e) => exit_with(&e),
    };

    if page.smooth_scroll_enabled() {
        tracing::debug!("Smooth scrolling enabled for page anchors");
    }

    if config.self_check {
        let report = self_check::run_and_log();
        for result in &report.results {
            let mark = if result.passed { "✅" } else { "❌" };
            println!("{} {}", mark, result.description);
        }
        return Ok(());
    }

    // 啟動時執行自我檢查，失敗只記錄不中斷
    if !config.skip_self_check {
        self_check::run_and_log();
    }

    let session = match CalculatorSession::new(&page) {
        Ok(session) => session,
        Err(e) => exit_with(&e),
    };
    let report = session.run(config.case_value.as_deref(), config.extra_clients.as_deref());

    if config.json {
        let json = report.to_json().context("rendering JSON output")?;
        println!("{}", json);
    } else {
        print!("{}", report.render_text());
    }

    Ok(())
}

fn load_page_config(path: Option<&str>) -> intake_roi::Result<PageConfig> {
    let page = match path {
        Some(path) => {
            tracing::info!("📁 Loading page configuration from: {}", path);
            PageConfig::from_file(path)?
        }
        None => PageConfig::default(),
    };
    page.validate()?;
    Ok(page)
}

fn exit_with(e: &RoiError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
