use thiserror::Error;

/// Structural problems found while assembling a [`RuleChain`](super::RuleChain).
#[derive(Debug, Error)]
pub enum ChainError {
    #[error("rule chain has no links")]
    EmptyChain,

    #[error("last link '{last}' is not a terminal rule; it would delegate into nothing")]
    MissingTerminal { last: String },

    #[error("terminal rule '{rule}' at position {position} is followed by more links")]
    TerminalNotLast { rule: String, position: usize },

    #[error("duplicate link '{name}' in rule chain")]
    DuplicateLink { name: String },
}

/// A node that could not be handed to a rule chain at all.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("rule chain '{chain}' was invoked without a view node")]
    MissingNode { chain: String },
}

#[derive(Debug, Error)]
#[error("unknown verdict code '{input}'")]
pub struct ParseVerdictError {
    pub input: String,
}

#[derive(Debug, Error)]
#[error("unknown property name '{input}'")]
pub struct ParsePropertyNameError {
    pub input: String,
}
