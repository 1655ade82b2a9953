mod chain;
mod error;
mod evaluation_report;
mod property;
mod property_bag;
mod rule;
mod verdict;
mod view_node;

pub(crate) use chain::ChainLink;
pub use chain::{RuleChain, RuleChainBuilder};
pub use error::{ChainError, CheckError, ParsePropertyNameError, ParseVerdictError};
pub use evaluation_report::EvaluationReport;
pub use property::{PropertyName, PropertyValue};
pub use property_bag::PropertyBag;
pub use rule::{LinkRole, Rule, ShortCircuit};
pub use verdict::Verdict;
pub use view_node::ViewNode;
