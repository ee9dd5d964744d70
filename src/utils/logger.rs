use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

fn env_filter(verbose: bool) -> EnvFilter {
    let default = if verbose {
        "car_ratings=debug,info"
    } else {
        "car_ratings=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

pub fn init_cli_logger(verbose: bool, format: LogFormat) {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(env_filter(verbose));

    match format {
        LogFormat::Compact => registry.with(fmt_layer.compact()).init(),
        LogFormat::Json => registry.with(fmt_layer.json()).init(),
    }
}
