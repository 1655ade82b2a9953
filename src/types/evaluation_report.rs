use std::fmt;
use std::time::Duration;

use super::verdict::Verdict;

/// Detailed evaluation report returned by
/// [`RuleChain::evaluate_detailed()`](super::chain::RuleChain::evaluate_detailed).
///
/// Contains the chain verdict, the link that decided it, the answer of every
/// link visited in order, and the wall-clock duration of the walk.
#[derive(Debug, Clone)]
#[must_use]
pub struct EvaluationReport {
    verdict: Verdict,
    decided_by: String,
    visited: Vec<(String, Verdict)>,
    duration: Duration,
}

impl EvaluationReport {
    pub(crate) fn new(
        verdict: Verdict,
        decided_by: String,
        visited: Vec<(String, Verdict)>,
        duration: Duration,
    ) -> Self {
        Self {
            verdict,
            decided_by,
            visited,
            duration,
        }
    }

    /// The chain verdict, same as [`RuleChain::run()`](super::chain::RuleChain::run).
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Name of the link whose answer became the chain verdict.
    #[must_use]
    pub fn decided_by(&self) -> &str {
        &self.decided_by
    }

    /// Each visited link with the raw verdict its rule returned, in walk order.
    ///
    /// The terminal link's raw answer may be `Incomplete` even though the
    /// chain verdict never is.
    #[must_use]
    pub fn visited(&self) -> &[(String, Verdict)] {
        &self.visited
    }

    /// Names of links that deferred to their successor.
    #[must_use]
    pub fn deferred(&self) -> Vec<&str> {
        self.visited
            .iter()
            .filter(|(name, _)| *name != self.decided_by)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Wall-clock duration of the walk.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "verdict: {} by {}", self.verdict, self.decided_by)?;
        let visited: Vec<String> = self
            .visited
            .iter()
            .map(|(name, v)| format!("{name}={v}"))
            .collect();
        write!(f, ", visited: [{}]", visited.join(", "))?;
        write!(f, ", duration: {:?}", self.duration)?;
        Ok(())
    }
}
