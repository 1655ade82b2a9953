use std::fmt;

use super::property_bag::PropertyBag;
use super::verdict::Verdict;
use super::view_node::ViewNode;

/// One accessibility rule: the collection half and the evaluation half of a
/// chain link.
///
/// A rule only ever sees its own predicate. Delegation to the next, more
/// general rule is done by the [`RuleChain`](super::RuleChain) that owns it.
pub trait Rule: fmt::Debug + Send + Sync {
    /// Stable identifier, unique within a chain.
    fn name(&self) -> &str;

    /// Whether this rule may close a chain.
    fn role(&self) -> LinkRole {
        LinkRole::Intermediate
    }

    /// Write the properties this rule owns. Must not touch other keys.
    fn collect(&self, node: &ViewNode, props: &mut PropertyBag);

    /// Decide from collected properties. Intermediate rules return
    /// [`Verdict::Incomplete`] to defer.
    fn run(&self, props: &PropertyBag) -> Verdict;
}

/// Position a rule is allowed to take in a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkRole {
    /// Has a successor and may defer to it.
    Intermediate,
    /// Closes the chain and must answer `Pass` or `Fail`.
    Terminal,
}

/// Which definitive verdicts an intermediate link may return early.
///
/// The terminal link is always authoritative regardless of policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ShortCircuit {
    /// Specific positive evidence is trusted; a missing signal defers.
    #[default]
    EarlyPass,
    /// Specific negative evidence is trusted; a positive signal defers.
    EarlyFail,
    /// Any definitive intermediate verdict stops the walk.
    Either,
}

impl ShortCircuit {
    /// Whether an intermediate link answering `verdict` ends the walk.
    #[must_use]
    pub fn stops_at(self, verdict: Verdict) -> bool {
        match (self, verdict) {
            (_, Verdict::Incomplete) => false,
            (ShortCircuit::EarlyPass, Verdict::Pass) | (ShortCircuit::EarlyFail, Verdict::Fail) => {
                true
            }
            (ShortCircuit::Either, _) => true,
            _ => false,
        }
    }
}

impl fmt::Display for ShortCircuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShortCircuit::EarlyPass => write!(f, "early_pass"),
            ShortCircuit::EarlyFail => write!(f, "early_fail"),
            ShortCircuit::Either => write!(f, "either"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn early_pass_only_stops_on_pass() {
        let p = ShortCircuit::EarlyPass;
        assert!(p.stops_at(Verdict::Pass));
        assert!(!p.stops_at(Verdict::Fail));
        assert!(!p.stops_at(Verdict::Incomplete));
    }

    #[test]
    fn early_fail_only_stops_on_fail() {
        let p = ShortCircuit::EarlyFail;
        assert!(!p.stops_at(Verdict::Pass));
        assert!(p.stops_at(Verdict::Fail));
        assert!(!p.stops_at(Verdict::Incomplete));
    }

    #[test]
    fn either_stops_on_any_definitive() {
        let p = ShortCircuit::Either;
        assert!(p.stops_at(Verdict::Pass));
        assert!(p.stops_at(Verdict::Fail));
        assert!(!p.stops_at(Verdict::Incomplete));
    }

    #[test]
    fn default_is_early_pass() {
        assert_eq!(ShortCircuit::default(), ShortCircuit::EarlyPass);
    }
}
