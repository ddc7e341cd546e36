//! Per-invocation execution context shared by every leaf command.

use std::future::Future;

use tokio_util::sync::CancellationToken;
use tracing::debug;
use vultr_api::{ApiClient, ApiError, ListOptions, Transport};

use crate::error::CliError;
use crate::output::{Format, Renderable, Renderer};

/// Positional-argument contract of a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgRule {
    /// The leaf takes no positional arguments of its own.
    Any,
    /// Exactly this many arguments, with the message shown otherwise.
    Exact(usize, &'static str),
}

impl ArgRule {
    /// Check `args` against the rule.
    ///
    /// # Errors
    ///
    /// Returns the rule's message when the count is wrong.
    pub fn check(self, args: &[String]) -> Result<(), &'static str> {
        match self {
            Self::Exact(n, message) if args.len() != n => Err(message),
            _ => Ok(()),
        }
    }
}

/// Context built once by the pre-run and threaded into the leaf.
///
/// There is no shared slot for request bodies. Each leaf builds its
/// create or update value as a local from its own parsed flags and hands
/// it straight to the client call.
#[derive(Debug)]
pub struct ExecutionBase<T> {
    client: ApiClient<T>,
    cancel: CancellationToken,
    args: Vec<String>,
    options: ListOptions,
    output: Format,
    auth_present: bool,
}

impl<T: Transport> ExecutionBase<T> {
    /// Create the context.
    #[must_use]
    pub const fn new(
        client: ApiClient<T>,
        cancel: CancellationToken,
        args: Vec<String>,
        options: ListOptions,
        auth_present: bool,
    ) -> Self {
        Self {
            client,
            cancel,
            args,
            options,
            output: Format::Table,
            auth_present,
        }
    }

    /// API client.
    #[must_use]
    pub const fn client(&self) -> &ApiClient<T> {
        &self.client
    }

    /// Cancellation context of the invocation.
    #[must_use]
    pub const fn cancel_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Positional arguments.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Positional argument `index`, empty if absent.
    ///
    /// Leaves only call this for indices their [`ArgRule`] guarantees.
    #[must_use]
    pub fn arg(&self, index: usize) -> &str {
        self.args.get(index).map_or("", String::as_str)
    }

    /// Paging options for list leaves.
    #[must_use]
    pub const fn list_options(&self) -> &ListOptions {
        &self.options
    }

    /// Output mode.
    #[must_use]
    pub const fn output(&self) -> Format {
        self.output
    }

    /// Set the output mode.
    pub fn set_output(&mut self, output: Format) {
        self.output = output;
    }

    /// Whether an API key was configured.
    #[must_use]
    pub const fn auth_present(&self) -> bool {
        self.auth_present
    }

    /// Fail unless an API key was configured.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Config`] when no API key is present.
    pub fn require_auth(&self) -> Result<(), CliError> {
        if self.auth_present {
            return Ok(());
        }
        Err(CliError::Config(
            "API key not configured: set VULTR_API_KEY, pass --api-key, or add api-key to the config file"
                .into(),
        ))
    }

    /// Await one API call, wrapping failures with `context`.
    ///
    /// The call is abandoned as soon as the cancellation token fires.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Cancelled`] on cancellation and
    /// [`CliError::Api`] when the call fails.
    pub async fn call<R, F>(&self, context: &'static str, request: F) -> Result<R, CliError>
    where
        F: Future<Output = Result<R, ApiError>>,
    {
        tokio::select! {
            biased;
            () = self.cancel.cancelled() => {
                debug!(context, "Request cancelled");
                Err(CliError::Cancelled)
            }
            result = request => result.map_err(|source| CliError::Api { context, source }),
        }
    }

    /// Render `value` in the configured output mode.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render<R: Renderable + ?Sized>(&self, value: &R) -> Result<String, CliError> {
        Renderer::new(self.output).render(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use vultr_api::fake::FakeTransport;
    use vultr_api::{Method, Page};

    fn base(fake: FakeTransport, auth_present: bool) -> ExecutionBase<FakeTransport> {
        ExecutionBase::new(
            ApiClient::new(fake),
            CancellationToken::new(),
            vec!["abc".into()],
            ListOptions::default(),
            auth_present,
        )
    }

    #[test]
    fn arg_rule_exact() {
        let rule = ArgRule::Exact(2, "please provide a domain and record ID");
        assert_eq!(rule.check(&["a".into()]), Err("please provide a domain and record ID"));
        assert!(rule.check(&["a".into(), "b".into()]).is_ok());
        assert!(ArgRule::Any.check(&[]).is_ok());
    }

    #[test]
    fn arg_defaults_to_empty() {
        let base = base(FakeTransport::new(), true);
        assert_eq!(base.arg(0), "abc");
        assert_eq!(base.arg(1), "");
    }

    #[test]
    fn require_auth_mentions_api_key() {
        let err = base(FakeTransport::new(), false)
            .require_auth()
            .expect_err("no key");
        assert!(err.to_string().contains("API key"));
    }

    #[test]
    fn output_is_writable() {
        let mut base = base(FakeTransport::new(), true);
        assert_eq!(base.output(), Format::Table);
        base.set_output(Format::Yaml);
        assert_eq!(base.output(), Format::Yaml);
    }

    #[tokio::test]
    async fn call_wraps_api_errors() {
        let base = base(FakeTransport::new(), true);
        let err = base
            .call("error retrieving backup", base.client().get_backup("abc"))
            .await
            .expect_err("404");
        assert!(matches!(err, CliError::Api { context: "error retrieving backup", .. }));
        assert!(err.to_string().starts_with("error retrieving backup: not found"));
    }

    #[tokio::test]
    async fn call_returns_on_cancel() {
        let base = base(FakeTransport::hanging(), true);
        let token = base.cancel_token().clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            token.cancel();
        });

        let err = base
            .call("error retrieving backup", base.client().get_backup("abc"))
            .await
            .expect_err("cancelled");
        assert!(matches!(err, CliError::Cancelled));
        assert_eq!(base.client().transport().call_count(), 1);
    }

    #[tokio::test]
    async fn call_passes_through_success() {
        let fake = FakeTransport::new().respond(
            Method::Get,
            "/backups",
            200,
            serde_json::json!({"backups": [], "meta": null}),
        );
        let base = base(fake, true);
        let page: Page<_> = base
            .call("error retrieving backup list", base.client().list_backups(base.list_options()))
            .await
            .expect("list");
        assert!(page.items.is_empty());
    }
}
