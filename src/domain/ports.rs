use crate::domain::model::SolutionSet;
use async_trait::async_trait;

/// Seam between a presentation layer and the solving backend.
///
/// The single operation never fails outward: every call eventually yields a
/// [`SolutionSet`], possibly empty, and issues at most one outbound request.
#[async_trait]
pub trait Solver: Send + Sync {
    async fn solve(&self, raw: &str) -> SolutionSet;
}
