//! One invocation of the CLI, from argv to exit status.
//!
//! The pipeline is parse, validate positional arguments, resolve settings,
//! connect, check authentication, then run the leaf. Every stage can fail
//! with a [`CliError`], which is reported once on stderr. Output reaches
//! stdout only after the leaf has rendered it completely.

use std::ffi::OsString;
use std::io::Write;

use clap::FromArgMatches;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use vultr_api::{ApiClient, Transport};

use crate::base::ExecutionBase;
use crate::cli::{self, Cli, Leaf};
use crate::config::{self, Environment, Settings};
use crate::error::{self, CliError};

/// Run one invocation and return its exit status.
///
/// `connect` builds the transport once settings are known, so tests can
/// substitute a fake for the HTTP transport.
pub async fn run<I, S, T, F>(
    argv: I,
    env: &Environment,
    connect: F,
    cancel: CancellationToken,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> u8
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
    T: Transport,
    F: FnOnce(&Settings) -> Result<T, CliError>,
{
    let matches = match cli::command().try_get_matches_from(argv) {
        Ok(matches) => matches,
        // Help and version are successful exits.
        Err(e) if !e.use_stderr() => {
            return match write!(stdout, "{}", e.render()) {
                Ok(()) => 0,
                Err(io) => error::report(&CliError::Io(io), stderr),
            };
        }
        Err(e) => return error::report(&CliError::Clap(e), stderr),
    };

    let result = match invoke(&matches, env, connect, cancel).await {
        Ok(text) => stdout
            .write_all(text.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(CliError::from),
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            debug!(error = %e, "Invocation failed");
            error::report(&e, stderr)
        }
    }
}

async fn invoke<T, F>(
    matches: &clap::ArgMatches,
    env: &Environment,
    connect: F,
    cancel: CancellationToken,
) -> Result<String, CliError>
where
    T: Transport,
    F: FnOnce(&Settings) -> Result<T, CliError>,
{
    let cli = Cli::from_arg_matches(matches)?;
    let leaf = Leaf::from_matches(matches);

    cli.command
        .arg_rule()
        .check(&leaf.args)
        .map_err(|message| CliError::Usage {
            message: message.to_string(),
            usage: leaf.usage(),
        })?;

    let settings = config::resolve(&cli.global, env)?;
    let transport = connect(&settings)?;

    let auth_present = settings.auth_present();
    let mut base = ExecutionBase::new(
        ApiClient::new(transport),
        cancel,
        leaf.args,
        leaf.options,
        auth_present,
    );
    base.set_output(settings.output);

    if cli.command.requires_auth() {
        base.require_auth()?;
    }

    debug!(command = %leaf.path.join(" "), output = %base.output(), "Executing command");
    cli.command.execute(&base).await
}

/// Cancel `token` on Ctrl-C or, on Unix, SIGTERM.
///
/// A handler that cannot be installed is logged and never fires.
pub async fn cancel_on_signal(token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            debug!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                debug!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
        () = token.cancelled() => return,
    }

    debug!("Signal received, cancelling");
    token.cancel();
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use serde_json::json;
    use vultr_api::Method;
    use vultr_api::fake::FakeTransport;

    struct Outcome {
        code: u8,
        stdout: String,
        stderr: String,
    }

    async fn invoke_with(fake: &Arc<FakeTransport>, env: &Environment, argv: &[&str]) -> Outcome {
        invoke_cancellable(fake, env, argv, CancellationToken::new()).await
    }

    async fn invoke_cancellable(
        fake: &Arc<FakeTransport>,
        env: &Environment,
        argv: &[&str],
        cancel: CancellationToken,
    ) -> Outcome {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let transport = Arc::clone(fake);
        let code = run(
            argv.iter().copied(),
            env,
            move |_: &Settings| Ok(transport),
            cancel,
            &mut stdout,
            &mut stderr,
        )
        .await;
        Outcome {
            code,
            stdout: String::from_utf8_lossy(&stdout).into_owned(),
            stderr: String::from_utf8_lossy(&stderr).into_owned(),
        }
    }

    fn keyed() -> Environment {
        Environment {
            api_key: Some("test-key".into()),
            home: None,
        }
    }

    fn anonymous() -> Environment {
        Environment::default()
    }

    #[tokio::test]
    async fn missing_api_key_makes_no_calls() {
        let fake = Arc::new(FakeTransport::new());
        let out = invoke_with(&fake, &anonymous(), &["vultr-cli", "account", "info"]).await;

        assert_eq!(out.code, 1);
        assert!(out.stderr.contains("API key"), "{}", out.stderr);
        assert!(out.stdout.is_empty());
        assert_eq!(fake.call_count(), 0);
    }

    #[tokio::test]
    async fn public_catalogue_needs_no_key() {
        let fake = Arc::new(FakeTransport::new().respond(
            Method::Get,
            "/regions",
            200,
            json!({"regions": [], "meta": {"total": 0, "links": {"next": "", "prev": ""}}}),
        ));
        let out = invoke_with(&fake, &anonymous(), &["vultr-cli", "regions", "list"]).await;

        assert_eq!(out.code, 0, "{}", out.stderr);
        assert_eq!(fake.call_count(), 1);
    }

    #[tokio::test]
    async fn empty_list_renders_placeholder_and_footer() {
        let fake = Arc::new(FakeTransport::new().respond(
            Method::Get,
            "/backups",
            200,
            json!({"backups": [], "meta": {"total": 0, "links": {"next": "", "prev": ""}}}),
        ));
        let out = invoke_with(&fake, &keyed(), &["vultr-cli", "backups", "list"]).await;

        assert_eq!(out.code, 0, "{}", out.stderr);
        let lines: Vec<_> = out.stdout.lines().collect();
        assert_eq!(lines[0], "ID  DATE CREATED  DESCRIPTION  SIZE  STATUS");
        assert_eq!(lines[1], "---  ---  ---  ---  ---");
        assert_eq!(lines[2], "======================================");
        assert!(lines.iter().any(|l| l.starts_with("TOTAL") && l.ends_with('0')));
        assert!(out.stderr.is_empty());
    }

    #[tokio::test]
    async fn empty_list_without_meta_has_no_footer() {
        let fake = Arc::new(FakeTransport::new().respond(
            Method::Get,
            "/backups",
            200,
            json!({"backups": [], "meta": null}),
        ));
        let out = invoke_with(&fake, &keyed(), &["vultr-cli", "backups", "list"]).await;

        assert_eq!(out.code, 0, "{}", out.stderr);
        assert_eq!(
            out.stdout,
            "ID  DATE CREATED  DESCRIPTION  SIZE  STATUS\n---  ---  ---  ---  ---\n"
        );
    }

    #[tokio::test]
    async fn json_list_carries_items_and_meta() {
        let fake = Arc::new(FakeTransport::new().respond(
            Method::Get,
            "/backups",
            200,
            json!({
                "backups": [{"id": "b-1", "description": "nightly", "size": 10, "status": "complete"}],
                "meta": {"total": 1, "links": {"next": "n", "prev": ""}}
            }),
        ));
        let out = invoke_with(&fake, &keyed(), &["vultr-cli", "backups", "list", "-o", "json"]).await;

        assert_eq!(out.code, 0, "{}", out.stderr);
        let doc: serde_json::Value = serde_json::from_str(&out.stdout).expect("valid JSON");
        assert_eq!(doc["backups"][0]["id"], "b-1");
        assert_eq!(doc["meta"]["total"], 1);
        assert_eq!(doc["meta"]["links"]["next"], "n");
    }

    #[tokio::test]
    async fn yaml_output_from_flag() {
        let fake = Arc::new(FakeTransport::new().respond(
            Method::Get,
            "/backups/b-1",
            200,
            json!({"backup": {"id": "b-1", "status": "complete"}}),
        ));
        let out = invoke_with(
            &fake,
            &keyed(),
            &["vultr-cli", "backups", "get", "b-1", "--output", "yaml"],
        )
        .await;

        assert_eq!(out.code, 0, "{}", out.stderr);
        let doc: serde_yaml::Value = serde_yaml::from_str(&out.stdout).expect("valid YAML");
        assert_eq!(doc["backup"]["id"].as_str(), Some("b-1"));
    }

    #[tokio::test]
    async fn paging_flags_reach_the_request() {
        let fake = Arc::new(FakeTransport::new().respond(
            Method::Get,
            "/instances",
            200,
            json!({"instances": []}),
        ));
        let out = invoke_with(
            &fake,
            &keyed(),
            &["vultr-cli", "instance", "list", "--per-page", "5", "--cursor", "abc"],
        )
        .await;

        assert_eq!(out.code, 0, "{}", out.stderr);
        let requests = fake.requests();
        assert_eq!(
            requests[0].query,
            vec![
                ("per_page".to_string(), "5".to_string()),
                ("cursor".to_string(), "abc".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn missing_id_is_a_usage_error_before_auth() {
        let fake = Arc::new(FakeTransport::new());
        let out = invoke_with(&fake, &anonymous(), &["vultr-cli", "backups", "get"]).await;

        assert_eq!(out.code, 1);
        assert!(out.stderr.starts_with("error: please provide a backup ID"));
        assert!(out.stderr.contains("Usage:"));
        assert_eq!(fake.call_count(), 0);
    }

    #[tokio::test]
    async fn nested_resource_needs_two_arguments() {
        let fake = Arc::new(FakeTransport::new());
        let out = invoke_with(&fake, &keyed(), &["vultr-cli", "dns", "record", "get", "example.com"]).await;

        assert_eq!(out.code, 1);
        assert!(out.stderr.contains("please provide a domain and record ID"));
        assert_eq!(fake.call_count(), 0);
    }

    #[tokio::test]
    async fn image_sources_are_exclusive() {
        let fake = Arc::new(FakeTransport::new());
        let base = ["vultr-cli", "instance", "create", "--region", "ewr", "--plan", "vc2"];

        let both = [&base[..], &["--app", "1", "--os", "2"]].concat();
        let out = invoke_with(&fake, &keyed(), &both).await;
        assert_eq!(out.code, 1);
        assert!(out.stderr.contains("cannot be used with"), "{}", out.stderr);

        let out = invoke_with(&fake, &keyed(), &base).await;
        assert_eq!(out.code, 1);
        assert!(out.stderr.contains("required"), "{}", out.stderr);

        assert_eq!(fake.call_count(), 0);
    }

    #[tokio::test]
    async fn one_image_source_reaches_the_api() {
        let fake = Arc::new(FakeTransport::new().respond(
            Method::Post,
            "/instances",
            202,
            json!({"instance": {"id": "i-1", "status": "pending"}}),
        ));
        let out = invoke_with(
            &fake,
            &keyed(),
            &["vultr-cli", "instance", "create", "--region", "ewr", "--plan", "vc2", "--os", "387"],
        )
        .await;

        assert_eq!(out.code, 0, "{}", out.stderr);
        assert!(out.stdout.contains("i-1"));
        let requests = fake.requests();
        assert_eq!(requests.len(), 1);
        let body = requests[0].body.as_ref().expect("body");
        assert_eq!(body["os_id"], 387);
        assert!(body.get("app_id").is_none());
    }

    #[tokio::test]
    async fn api_error_is_reported_with_context() {
        let fake = Arc::new(FakeTransport::new().respond(
            Method::Get,
            "/backups",
            401,
            json!({"error": "Invalid API token.", "status": 401}),
        ));
        let out = invoke_with(&fake, &keyed(), &["vultr-cli", "backups", "list"]).await;

        assert_eq!(out.code, 1);
        assert_eq!(
            out.stderr,
            "error: error retrieving backup list: Invalid API token. (HTTP 401)\n"
        );
        assert!(out.stdout.is_empty());
    }

    #[tokio::test]
    async fn delete_renders_message() {
        let fake = Arc::new(FakeTransport::new().respond_empty(Method::Delete, "/instances/i-1", 204));
        let out = invoke_with(&fake, &keyed(), &["vultr-cli", "instance", "destroy", "i-1", "-o", "json"]).await;

        assert_eq!(out.code, 0, "{}", out.stderr);
        let doc: serde_json::Value = serde_json::from_str(&out.stdout).expect("valid JSON");
        assert_eq!(doc["message"], "instance has been deleted");
    }

    #[tokio::test]
    async fn malformed_node_pool_makes_no_calls() {
        let fake = Arc::new(FakeTransport::new());
        let out = invoke_with(
            &fake,
            &keyed(),
            &[
                "vultr-cli", "k8s", "create", "--region", "ewr", "--version", "v1.29",
                "--node-pools", "quantity:3,label:w",
            ],
        )
        .await;

        assert_eq!(out.code, 1);
        assert!(out.stderr.contains("invalid value for --node-pools"));
        assert_eq!(fake.call_count(), 0);
    }

    #[tokio::test]
    async fn unknown_output_format_is_a_config_error() {
        let fake = Arc::new(FakeTransport::new());
        let out = invoke_with(&fake, &keyed(), &["vultr-cli", "backups", "list", "-o", "xml"]).await;

        assert_eq!(out.code, 1);
        assert!(out.stderr.contains("unknown output format"));
        assert_eq!(fake.call_count(), 0);
    }

    #[tokio::test]
    async fn cancellation_stops_the_call() {
        let fake = Arc::new(FakeTransport::hanging());
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            trigger.cancel();
        });

        let out = invoke_cancellable(&fake, &keyed(), &["vultr-cli", "instance", "list"], cancel).await;

        assert_eq!(out.code, 1);
        assert_eq!(out.stderr, "error: operation cancelled\n");
        assert!(out.stdout.is_empty());
        assert_eq!(fake.call_count(), 1);
    }

    #[tokio::test]
    async fn version_goes_to_stdout() {
        let fake = Arc::new(FakeTransport::new());
        let out = invoke_with(&fake, &anonymous(), &["vultr-cli", "--version"]).await;

        assert_eq!(out.code, 0);
        assert!(out.stdout.contains(env!("CARGO_PKG_VERSION")));
        assert!(out.stderr.is_empty());
    }
}
