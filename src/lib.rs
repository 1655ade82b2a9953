//! Accessibility rule chains for UI view trees.
//!
//! A [`RuleChain`] runs in two phases over one [`ViewNode`]: every link
//! collects facts into a [`PropertyBag`], then links are evaluated from most
//! specific to most general until one settles on a [`Verdict`].
//!
//! ```
//! use viewcheck::{Verdict, ViewNode, rules};
//!
//! let chain = rules::check_box_name().unwrap();
//! let node = ViewNode::new(rules::class_names::CHECKBOX).with_text("Enable notifications");
//! assert_eq!(chain.check(Some(&node)).unwrap(), Some(Verdict::Pass));
//! ```

mod compile;
mod error;
mod evaluate;
pub mod rules;
mod types;

pub use error::ViewCheckError;
pub use types::{
    ChainError, CheckError, EvaluationReport, LinkRole, ParsePropertyNameError,
    ParseVerdictError, PropertyBag, PropertyName, PropertyValue, Rule, RuleChain,
    RuleChainBuilder, ShortCircuit, Verdict, ViewNode,
};
