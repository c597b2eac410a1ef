use serde::{Deserialize, Serialize};

/// Ordered list of solution expressions for one query. Empty is a
/// first-class value: the caller cannot tell "no solutions exist" apart
/// from "the request failed", by design.
pub type SolutionSet = Vec<String>;

/// Success payload returned by the solving service. The service also sends
/// `input` and `solution_count`; only the solutions array matters here, and
/// a payload without it is malformed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveResponse {
    pub solutions: SolutionSet,
}
