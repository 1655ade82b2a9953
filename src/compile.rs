use std::collections::HashSet;
use std::sync::Arc;

use crate::types::{ChainLink, LinkRole};
use crate::{ChainError, Rule, RuleChain, ShortCircuit};

pub(crate) fn compile(
    name: String,
    links: Vec<Arc<dyn Rule>>,
    tail: Option<Arc<ChainLink>>,
    policy: ShortCircuit,
    target_class: Option<String>,
) -> Result<RuleChain, ChainError> {
    let count = {
        // Full link order, own links first, then the shared tail.
        let mut rules: Vec<&dyn Rule> = links.iter().map(|r| r.as_ref()).collect();
        if let Some(tail) = &tail {
            rules.extend(tail.iter().map(|link| link.rule.as_ref()));
        }
        check_duplicates(&rules)?;
        check_terminal(&rules)?;
        rules.len()
    };

    let mut next = tail;
    for rule in links.into_iter().rev() {
        next = Some(Arc::new(ChainLink { rule, next }));
    }
    let head = next.ok_or(ChainError::EmptyChain)?;

    tracing::debug!(chain = %name, links = count, %policy, "rule chain built");

    Ok(RuleChain {
        name,
        head,
        policy,
        target_class,
    })
}

fn check_duplicates(rules: &[&dyn Rule]) -> Result<(), ChainError> {
    let mut seen = HashSet::new();
    for rule in rules {
        if !seen.insert(rule.name()) {
            return Err(ChainError::DuplicateLink {
                name: rule.name().to_owned(),
            });
        }
    }
    Ok(())
}

/// Exactly one terminal rule, in last position.
fn check_terminal(rules: &[&dyn Rule]) -> Result<(), ChainError> {
    let Some((last, rest)) = rules.split_last() else {
        return Err(ChainError::EmptyChain);
    };
    if let Some(position) = rest.iter().position(|r| r.role() == LinkRole::Terminal) {
        return Err(ChainError::TerminalNotLast {
            rule: rest[position].name().to_owned(),
            position,
        });
    }
    if last.role() != LinkRole::Terminal {
        return Err(ChainError::MissingTerminal {
            last: last.name().to_owned(),
        });
    }
    Ok(())
}
