use crate::core::normalizer::CanonicalQuery;
use std::env;

/// Solve prefix on the fixed remote origin, used when the client runs
/// packaged inside a browser-extension host.
const EXTENSION_URL_BASE: &str = "https://game24.flamebots.org/game24/solve/";

/// Root-relative solve prefix, used when the client is served by the same
/// origin as the solving service.
const HOSTED_URL_BASE: &str = "/game24/solve/";

/// Environment variable carrying the extension host's runtime id. Any
/// non-empty value means we are running packaged.
const EXTENSION_MARKER: &str = "GAME24_EXTENSION_ID";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentContext {
    Extension,
    Hosted,
}

impl DeploymentContext {
    /// Detects the deployment context from the ambient environment. Absence
    /// of the marker is the normal hosted case, not a failure.
    pub fn detect() -> Self {
        match env::var(EXTENSION_MARKER) {
            Ok(id) if !id.is_empty() => DeploymentContext::Extension,
            _ => DeploymentContext::Hosted,
        }
    }
}

/// URL prefix under which solve requests are issued. Resolved once at
/// startup and immutable for the life of the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointBase {
    url_base: String,
}

impl EndpointBase {
    pub fn resolve(context: DeploymentContext) -> Self {
        let url_base = match context {
            DeploymentContext::Extension => EXTENSION_URL_BASE,
            DeploymentContext::Hosted => HOSTED_URL_BASE,
        };
        Self {
            url_base: url_base.to_string(),
        }
    }

    /// Builds a base from an explicit prefix, e.g. the CLI `--endpoint`
    /// override or a mock server in tests.
    pub fn from_url(url_base: impl Into<String>) -> Self {
        Self {
            url_base: url_base.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.url_base
    }

    /// Builds the request target `<base>/<query>/`: exactly one slash
    /// between base and query regardless of whether the base already ends
    /// with one, and a trailing slash after the query.
    pub fn join(&self, query: &CanonicalQuery) -> String {
        format!("{}/{}/", self.url_base.trim_end_matches('/'), query)
    }
}
