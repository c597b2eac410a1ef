pub mod environment;

use crate::config::environment::{DeploymentContext, EndpointBase};
use crate::utils::error::Result;
use crate::utils::validation::{validate_endpoint, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "game24-client")]
#[command(about = "Fetches 24-game solutions from a remote solving service")]
pub struct CliConfig {
    /// Numbers to solve for, separated by commas and/or whitespace
    pub numbers: String,

    /// Explicit endpoint prefix, overriding deployment-context detection
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Force the packaged-extension context instead of detecting it
    #[arg(long)]
    pub extension: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Resolution order: explicit override, forced context, ambient
    /// detection.
    pub fn endpoint_base(&self) -> EndpointBase {
        if let Some(endpoint) = &self.endpoint {
            return EndpointBase::from_url(endpoint.clone());
        }

        let context = if self.extension {
            DeploymentContext::Extension
        } else {
            DeploymentContext::detect()
        };
        EndpointBase::resolve(context)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(endpoint) = &self.endpoint {
            validate_endpoint("endpoint", endpoint)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(endpoint: Option<&str>, extension: bool) -> CliConfig {
        CliConfig {
            numbers: "1,2,3,4".to_string(),
            endpoint: endpoint.map(str::to_string),
            extension,
            verbose: false,
        }
    }

    #[test]
    fn test_explicit_endpoint_wins_over_context() {
        let base = config(Some("http://localhost:8000/solve/"), true).endpoint_base();
        assert_eq!(base.as_str(), "http://localhost:8000/solve/");
    }

    #[test]
    fn test_forced_extension_context() {
        let base = config(None, true).endpoint_base();
        assert_eq!(base, EndpointBase::resolve(DeploymentContext::Extension));
    }

    #[test]
    fn test_validate_rejects_bad_override() {
        assert!(config(Some("not a url"), false).validate().is_err());
        assert!(config(Some("/game24/solve/"), false).validate().is_ok());
        assert!(config(None, false).validate().is_ok());
    }
}
