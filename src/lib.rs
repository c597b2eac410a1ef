pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::environment::{DeploymentContext, EndpointBase};
pub use crate::config::CliConfig;
pub use crate::core::normalizer::CanonicalQuery;
pub use crate::core::solver::{SolveOutcome, SolverClient};
pub use crate::domain::model::SolutionSet;
pub use crate::domain::ports::Solver;
pub use crate::utils::error::{Result, SolverError};
