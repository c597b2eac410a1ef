pub mod normalizer;
pub mod solver;

pub use crate::domain::model::{SolutionSet, SolveResponse};
pub use crate::domain::ports::Solver;
pub use crate::utils::error::Result;
