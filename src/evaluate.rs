use std::sync::Arc;
use std::time::Instant;

use crate::types::ChainLink;
use crate::{EvaluationReport, PropertyBag, ShortCircuit, Verdict, ViewNode};

/// Each link writes its own properties, then hands the bag to its successor.
pub(crate) fn collect(head: &Arc<ChainLink>, node: &ViewNode, props: &mut PropertyBag) {
    for link in head.iter() {
        link.rule.collect(node, props);
        tracing::trace!(rule = link.rule.name(), props = props.len(), "collected");
    }
}

pub(crate) fn run(head: &Arc<ChainLink>, policy: ShortCircuit, props: &PropertyBag) -> Verdict {
    for link in head.iter() {
        let answer = link.rule.run(props);
        if link.next.is_none() {
            return settle_terminal(link, answer);
        }
        if policy.stops_at(answer) {
            tracing::debug!(rule = link.rule.name(), verdict = %answer, "decided early");
            return answer;
        }
        tracing::trace!(rule = link.rule.name(), verdict = %answer, "deferred");
    }

    // A built chain always ends in a terminal link, which settles above.
    Verdict::Fail
}

pub(crate) fn evaluate_detailed(
    head: &Arc<ChainLink>,
    policy: ShortCircuit,
    props: &PropertyBag,
) -> EvaluationReport {
    let start = Instant::now();
    let mut visited = Vec::new();

    for link in head.iter() {
        let answer = link.rule.run(props);
        visited.push((link.rule.name().to_owned(), answer));

        let verdict = match link.next {
            None => Some(settle_terminal(link, answer)),
            Some(_) if policy.stops_at(answer) => Some(answer),
            Some(_) => None,
        };
        if let Some(verdict) = verdict {
            return EvaluationReport::new(
                verdict,
                link.rule.name().to_owned(),
                visited,
                start.elapsed(),
            );
        }
    }

    // A built chain always ends in a terminal link, which settles above.
    EvaluationReport::new(Verdict::Fail, String::new(), visited, start.elapsed())
}

/// The last link has nobody to defer to: no evidence of compliance is a failure.
fn settle_terminal(link: &ChainLink, answer: Verdict) -> Verdict {
    if answer == Verdict::Incomplete {
        tracing::warn!(
            rule = link.rule.name(),
            "terminal rule returned INCOMPLETE; reporting FAIL"
        );
        return Verdict::Fail;
    }
    tracing::debug!(rule = link.rule.name(), verdict = %answer, "decided by terminal");
    answer
}
