use car_ratings::adapters::http;
use car_ratings::utils::{logger, validation::Validate};
use car_ratings::{load_dataset, CliConfig, CsvRecordSource, Dashboard, DashboardError, LocalStorage};
use clap::Parser;
use std::sync::Arc;

fn exit_with(e: &DashboardError) -> ! {
    tracing::error!(
        "❌ Startup failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

// 單執行緒 runtime：每個控制項事件同步重算，不需要背景工作
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    logger::init_cli_logger(cli.verbose, config.logging.format);

    tracing::info!("Starting car-ratings dashboard");
    if cli.verbose {
        tracing::debug!("Resolved config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    // 資料只在啟動時載入一次，之後唯讀共享
    let source = CsvRecordSource::new(LocalStorage::current_dir(), config.data.path.clone());
    let dataset = match load_dataset(&source).await {
        Ok(dataset) => Arc::new(dataset),
        Err(e) => exit_with(&e),
    };

    let dashboard = Arc::new(Dashboard::new(dataset, config.chart.clone()));

    let listener = match tokio::net::TcpListener::bind(config.bind_address()).await {
        Ok(listener) => listener,
        Err(e) => exit_with(&DashboardError::from(e)),
    };

    if let Err(e) = http::serve(listener, dashboard, http::shutdown_signal()).await {
        exit_with(&e);
    }
}
