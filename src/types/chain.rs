use std::fmt;
use std::sync::Arc;

use super::error::{ChainError, CheckError};
use super::evaluation_report::EvaluationReport;
use super::property_bag::PropertyBag;
use super::rule::{Rule, ShortCircuit};
use super::verdict::Verdict;
use super::view_node::ViewNode;

/// Builder for constructing a [`RuleChain`].
///
/// Links are added from most specific to most general; the last one must be a
/// terminal rule. Structure is validated once, in [`build()`](Self::build).
///
/// # Example
///
/// ```
/// use viewcheck::RuleChainBuilder;
/// use viewcheck::rules::{CheckBoxName, ModifiableViewName, ViewName, class_names};
///
/// let chain = RuleChainBuilder::new("check_box_name")
///     .applies_to(class_names::CHECKBOX)
///     .link(CheckBoxName)
///     .link(ModifiableViewName)
///     .link(ViewName)
///     .build()
///     .unwrap();
/// assert_eq!(chain.len(), 3);
/// ```
#[derive(Debug)]
pub struct RuleChainBuilder {
    name: String,
    links: Vec<Arc<dyn Rule>>,
    tail: Option<Arc<ChainLink>>,
    policy: ShortCircuit,
    target_class: Option<String>,
}

impl RuleChainBuilder {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            links: Vec::new(),
            tail: None,
            policy: ShortCircuit::default(),
            target_class: None,
        }
    }

    /// Start a chain whose links are placed in front of `base`'s links.
    ///
    /// The new chain shares `base`'s links rather than copying them. It inherits
    /// the policy and class scope of `base` unless overridden.
    #[must_use]
    pub fn extending(name: &str, base: &RuleChain) -> Self {
        Self {
            name: name.to_owned(),
            links: Vec::new(),
            tail: Some(Arc::clone(&base.head)),
            policy: base.policy,
            target_class: base.target_class.clone(),
        }
    }

    /// Append a rule after the links added so far.
    #[must_use]
    pub fn link(self, rule: impl Rule + 'static) -> Self {
        self.link_shared(Arc::new(rule))
    }

    /// Append a rule that is already shared with other chains.
    #[must_use]
    pub fn link_shared(mut self, rule: Arc<dyn Rule>) -> Self {
        self.links.push(rule);
        self
    }

    /// Set the short-circuit policy for intermediate links.
    #[must_use]
    pub fn policy(mut self, policy: ShortCircuit) -> Self {
        self.policy = policy;
        self
    }

    /// Restrict the chain to nodes of one view class.
    #[must_use]
    pub fn applies_to(mut self, class_name: &str) -> Self {
        self.target_class = Some(class_name.to_owned());
        self
    }

    /// Validate and wire the links into an immutable `RuleChain`.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError`] if the chain is empty, does not end in a
    /// terminal rule, has a terminal rule before its end, or repeats a link.
    pub fn build(self) -> Result<RuleChain, ChainError> {
        crate::compile::compile(
            self.name,
            self.links,
            self.tail,
            self.policy,
            self.target_class,
        )
    }
}

/// One node of the linked list: a rule and the rule it delegates to.
#[derive(Debug)]
pub(crate) struct ChainLink {
    pub(crate) rule: Arc<dyn Rule>,
    pub(crate) next: Option<Arc<ChainLink>>,
}

/// Unlinks successors one at a time so long chains do not recurse on drop.
/// Stops at the first successor still shared with another chain.
impl Drop for ChainLink {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(link) = next {
            match Arc::try_unwrap(link) {
                Ok(mut inner) => next = inner.next.take(),
                Err(_) => break,
            }
        }
    }
}

impl ChainLink {
    pub(crate) fn iter(self: &Arc<Self>) -> impl Iterator<Item = &Arc<ChainLink>> {
        std::iter::successors(Some(self), |link| link.next.as_ref())
    }
}

/// A validated rule chain. Immutable, thread-safe and designed to live behind
/// `Arc`; every evaluation brings its own [`PropertyBag`].
#[derive(Debug, Clone)]
pub struct RuleChain {
    pub(crate) name: String,
    pub(crate) head: Arc<ChainLink>,
    pub(crate) policy: ShortCircuit,
    pub(crate) target_class: Option<String>,
}

impl RuleChain {
    /// Collect every link's properties from `node` into `props`.
    ///
    /// Links collect from most specific to most general, so a general link
    /// overwrites a key a specific link wrote before it.
    pub fn collect(&self, node: &ViewNode, props: &mut PropertyBag) {
        crate::evaluate::collect(&self.head, node, props);
    }

    /// Evaluate a bag populated by [`collect()`](Self::collect).
    ///
    /// Never returns [`Verdict::Incomplete`].
    pub fn run(&self, props: &PropertyBag) -> Verdict {
        crate::evaluate::run(&self.head, self.policy, props)
    }

    /// Collect and run against a fresh bag.
    ///
    /// Returns `Ok(None)` when the chain is scoped to a different view class.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::MissingNode`] when no node is supplied.
    pub fn check(&self, node: Option<&ViewNode>) -> Result<Option<Verdict>, CheckError> {
        let node = node.ok_or_else(|| CheckError::MissingNode {
            chain: self.name.clone(),
        })?;
        if !self.is_applicable(node) {
            tracing::trace!(chain = %self.name, class = %node.class_name, "chain not applicable");
            return Ok(None);
        }
        let mut props = PropertyBag::new();
        self.collect(node, &mut props);
        Ok(Some(self.run(&props)))
    }

    /// Evaluate with a per-link trace and timing.
    pub fn evaluate_detailed(&self, props: &PropertyBag) -> EvaluationReport {
        crate::evaluate::evaluate_detailed(&self.head, self.policy, props)
    }

    /// Whether `node` is of the class this chain is scoped to. Unscoped
    /// chains apply to every node.
    #[must_use]
    pub fn is_applicable(&self, node: &ViewNode) -> bool {
        self.target_class
            .as_deref()
            .is_none_or(|class| class == node.class_name)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn policy(&self) -> ShortCircuit {
        self.policy
    }

    #[must_use]
    pub fn target_class(&self) -> Option<&str> {
        self.target_class.as_deref()
    }

    /// Link names from most specific to the terminal rule.
    #[must_use]
    pub fn link_names(&self) -> Vec<&str> {
        self.head.iter().map(|link| link.rule.name()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.head.iter().count()
    }

    /// Always `false`: [`build()`](RuleChainBuilder::build) rejects empty
    /// chains, so every chain has at least its terminal link. Provided to pair
    /// with [`len()`](Self::len).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for RuleChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RuleChain({}: {}, policy {})",
            self.name,
            self.link_names().join(" -> "),
            self.policy,
        )
    }
}
