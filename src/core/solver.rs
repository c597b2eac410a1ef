use crate::config::environment::EndpointBase;
use crate::core::normalizer::CanonicalQuery;
use crate::domain::model::{SolutionSet, SolveResponse};
use crate::domain::ports::Solver;
use crate::utils::error::{Result, SolverError};
use reqwest::Client;

/// Every way a solve attempt can end. Callers of [`SolverClient::solve`]
/// only ever see the flattened [`SolutionSet`]; the variants exist for
/// logging and tests.
#[derive(Debug)]
pub enum SolveOutcome {
    /// The service answered with a payload carrying the solutions field.
    Solved(SolutionSet),
    /// 2xx response whose payload does not carry a solutions array of
    /// strings. Treated as "no solutions".
    Malformed,
    /// Connection error, timeout, undecodable body or non-2xx status.
    TransportFailed(SolverError),
    /// Nothing numeric survived normalization; no request was issued.
    SkippedEmptyInput,
}

impl SolveOutcome {
    /// Flattens to the boundary-facing contract: everything that is not a
    /// solved payload becomes the empty set.
    pub fn into_solutions(self) -> SolutionSet {
        match self {
            SolveOutcome::Solved(solutions) => solutions,
            _ => SolutionSet::new(),
        }
    }
}

/// Client for the remote 24-game solving service.
///
/// Holds only the HTTP client and the resolved endpoint base, both immutable
/// after construction, so overlapping solve calls are independent.
pub struct SolverClient {
    client: Client,
    base: EndpointBase,
}

impl SolverClient {
    pub fn new(base: EndpointBase) -> Self {
        Self {
            client: Client::new(),
            base,
        }
    }

    pub fn url_base(&self) -> &str {
        self.base.as_str()
    }

    /// Resolves raw user input to an ordered list of solution expressions.
    ///
    /// Never fails outward: degenerate input short-circuits without a
    /// request, and transport failures or malformed payloads flatten to an
    /// empty list after being logged.
    pub async fn solve(&self, raw: &str) -> SolutionSet {
        let outcome = self.solve_detailed(raw).await;
        match &outcome {
            SolveOutcome::Solved(solutions) => {
                tracing::debug!("Fetched {} solutions", solutions.len());
            }
            SolveOutcome::Malformed => {
                tracing::warn!("Solver response carried no solutions field, treating as empty");
            }
            SolveOutcome::TransportFailed(err) => {
                tracing::error!("Failed to fetch solutions: {}", err);
            }
            SolveOutcome::SkippedEmptyInput => {
                tracing::debug!("Nothing numeric to solve, skipping request");
            }
        }
        outcome.into_solutions()
    }

    /// Same operation as [`solve`](Self::solve) but with the failure reason
    /// still attached.
    pub async fn solve_detailed(&self, raw: &str) -> SolveOutcome {
        let Some(query) = CanonicalQuery::parse(raw) else {
            return SolveOutcome::SkippedEmptyInput;
        };

        let url = self.base.join(&query);
        tracing::debug!("Requesting solutions from: {}", url);

        match self.fetch(&url).await {
            Ok(Some(solutions)) => SolveOutcome::Solved(solutions),
            Ok(None) => SolveOutcome::Malformed,
            Err(err) => SolveOutcome::TransportFailed(err),
        }
    }

    /// Single idempotent GET against the built target. `Ok(None)` marks a
    /// successful response with the wrong shape.
    async fn fetch(&self, url: &str) -> Result<Option<SolutionSet>> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        tracing::debug!("Solver response status: {}", status);
        if !status.is_success() {
            return Err(SolverError::HttpStatusError(status));
        }

        // The service sends extra fields (input, solution_count) next to
        // solutions; deserializing through SolveResponse ignores them.
        let payload: serde_json::Value = response.json().await?;
        match serde_json::from_value::<SolveResponse>(payload) {
            Ok(body) => Ok(Some(body.solutions)),
            Err(_) => Ok(None),
        }
    }
}

#[async_trait::async_trait]
impl Solver for SolverClient {
    async fn solve(&self, raw: &str) -> SolutionSet {
        SolverClient::solve(self, raw).await
    }
}
