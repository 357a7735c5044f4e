use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod domain;
mod platform;
mod services;

pub use cli::{Cli, Commands};
pub use config::Settings;
pub use domain::constants::MISSING_KEY_ERROR;
pub use platform::HttpChannelApi;
pub use services::diagnostics::{run_diagnostics, DiagnosticsRequest};
pub use services::output::{print_one, print_report};
pub use services::reference::classify;
pub use services::resolver::resolve;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut settings = Settings::from_env()?;
    if let Some(base) = cli.api_base.clone().filter(|b| !b.is_empty()) {
        settings.api_base = base;
    }

    commands::handle_probe_commands(&cli, &settings)
}
