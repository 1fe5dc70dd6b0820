use anyhow::Result;
use shiftbook::commands::Cli;
use shiftbook::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()))
            .with_writer(std::io::stderr)
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    Cli::menu().await
}
