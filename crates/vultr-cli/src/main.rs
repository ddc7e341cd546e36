//! vultr-cli binary entrypoint.

use std::io;
use std::process::ExitCode;

use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use vultr_api::HttpTransport;
use vultr_cli::CliError;
use vultr_cli::app;
use vultr_cli::config::{Environment, Settings};

/// Environment variable holding the log filter. Logging is off when unset.
const LOG_ENV: &str = "VULTR_CLI_LOG";

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("error: failed to create async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    let env = Environment::from_process();
    let cancel = CancellationToken::new();

    let code = runtime.block_on(async {
        tokio::spawn(app::cancel_on_signal(cancel.clone()));
        let mut stdout = io::stdout().lock();
        let mut stderr = io::stderr().lock();
        app::run(std::env::args_os(), &env, connect, cancel, &mut stdout, &mut stderr).await
    });

    ExitCode::from(code)
}

fn connect(settings: &Settings) -> Result<HttpTransport, CliError> {
    HttpTransport::new(settings.api_key.clone())
        .map_err(|e| CliError::Config(format!("unable to create HTTP client: {e}")))
}
