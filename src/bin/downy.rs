use anyhow::Result;
use downy::config::Config;

fn main() -> Result<()> {
    if let Ok(filter) = std::env::var("DOWNY_LOG") {
        tracing_subscriber::fmt()
            .with_env_filter(filter.as_str())
            .with_writer(std::io::stderr)
            .init();
    }

    let config = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!("using default config: {:#}", e);
            eprintln!("Warning: {:#}. Using the default configuration.", e);
            Config::default()
        }
    };

    downy::session::run(&config)
}
