//! Client configuration: endpoints, poll delay, verbose logging.

use std::fmt;
use std::time::Duration;

/// Default developer appId sent with `createTask` and `feedbackTask`
/// when none is configured.
pub const DEFAULT_APP_ID: &str = "6B27D516-3A6F-4E13-9DED-F517295F5F89";

/// Default delay between two `getTaskResult` polls.
pub const DEFAULT_POLL_DELAY: Duration = Duration::from_millis(2500);

/// The two recognized CapSolver API hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiEndpoint {
    /// `https://api.capsolver.com`
    #[default]
    Main,
    /// `https://api-stable.capsolver.com`
    Stable,
}

impl ApiEndpoint {
    /// Returns the base URL for this endpoint.
    pub fn base_url(&self) -> &'static str {
        match self {
            ApiEndpoint::Main => "https://api.capsolver.com",
            ApiEndpoint::Stable => "https://api-stable.capsolver.com",
        }
    }
}

impl fmt::Display for ApiEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base_url())
    }
}

/// Immutable per-client settings.
///
/// Built once by [`CapSolverBuilder`](crate::CapSolverBuilder); every
/// default is resolved at that point, so the values read here are final
/// for the lifetime of the client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    client_key: String,
    app_id: String,
    api_url: ApiEndpoint,
    delay: Duration,
    verbose: bool,
    verbose_identifier: Option<String>,
}

impl ClientConfig {
    /// Create a config with the given key and every other setting at its
    /// default.
    pub fn new(client_key: impl Into<String>) -> Self {
        Self {
            client_key: client_key.into(),
            app_id: DEFAULT_APP_ID.to_string(),
            api_url: ApiEndpoint::default(),
            delay: DEFAULT_POLL_DELAY,
            verbose: false,
            verbose_identifier: None,
        }
    }

    pub(crate) fn set_app_id(&mut self, app_id: String) {
        self.app_id = app_id;
    }

    pub(crate) fn set_api_url(&mut self, api_url: ApiEndpoint) {
        self.api_url = api_url;
    }

    pub(crate) fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    pub(crate) fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    pub(crate) fn set_verbose_identifier(&mut self, identifier: Option<String>) {
        self.verbose_identifier = identifier;
    }

    /// The account's API key, sent with every request.
    pub fn client_key(&self) -> &str {
        &self.client_key
    }

    /// The developer appId sent with `createTask` and `feedbackTask`.
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// The API host requests go to.
    pub fn api_url(&self) -> ApiEndpoint {
        self.api_url
    }

    /// Delay between two polls of a pending job.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether progress lines are emitted while solving.
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Label prefixed to progress lines, for telling concurrent client
    /// instances apart.
    pub fn verbose_identifier(&self) -> Option<&str> {
        self.verbose_identifier.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls() {
        assert_eq!(ApiEndpoint::Main.base_url(), "https://api.capsolver.com");
        assert_eq!(
            ApiEndpoint::Stable.base_url(),
            "https://api-stable.capsolver.com"
        );
        assert_eq!(ApiEndpoint::default(), ApiEndpoint::Main);
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new("CAI-test");
        assert_eq!(config.client_key(), "CAI-test");
        assert_eq!(config.app_id(), DEFAULT_APP_ID);
        assert_eq!(config.api_url(), ApiEndpoint::Main);
        assert_eq!(config.delay(), Duration::from_millis(2500));
        assert!(!config.verbose());
        assert!(config.verbose_identifier().is_none());
    }
}
