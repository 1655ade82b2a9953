use proptest::prelude::*;
use viewcheck::{
    LinkRole, PropertyBag, Rule, RuleChainBuilder, ShortCircuit, Verdict, ViewNode,
};

/// Answers a fixed verdict regardless of the bag.
#[derive(Debug)]
struct Fixed {
    name: String,
    role: LinkRole,
    answer: Verdict,
}

impl Rule for Fixed {
    fn name(&self) -> &str {
        &self.name
    }

    fn role(&self) -> LinkRole {
        self.role
    }

    fn collect(&self, _node: &ViewNode, _props: &mut PropertyBag) {}

    fn run(&self, _props: &PropertyBag) -> Verdict {
        self.answer
    }
}

fn arb_verdict() -> impl Strategy<Value = Verdict> {
    prop_oneof![
        Just(Verdict::Pass),
        Just(Verdict::Fail),
        Just(Verdict::Incomplete),
    ]
}

fn arb_policy() -> impl Strategy<Value = ShortCircuit> {
    prop_oneof![
        Just(ShortCircuit::EarlyPass),
        Just(ShortCircuit::EarlyFail),
        Just(ShortCircuit::Either),
    ]
}

/// Build a chain of fixed links: `intermediates` then one terminal.
fn build(
    intermediates: &[Verdict],
    terminal: Verdict,
    policy: ShortCircuit,
) -> viewcheck::RuleChain {
    let mut builder = RuleChainBuilder::new("generated").policy(policy);
    for (i, answer) in intermediates.iter().enumerate() {
        builder = builder.link(Fixed {
            name: format!("link{i}"),
            role: LinkRole::Intermediate,
            answer: *answer,
        });
    }
    builder
        .link(Fixed {
            name: "terminal".to_owned(),
            role: LinkRole::Terminal,
            answer: terminal,
        })
        .build()
        .unwrap()
}

/// Reference walk: first intermediate the policy stops at, else the terminal.
fn expected(intermediates: &[Verdict], terminal: Verdict, policy: ShortCircuit) -> Verdict {
    intermediates
        .iter()
        .copied()
        .find(|v| policy.stops_at(*v))
        .unwrap_or(match terminal {
            Verdict::Incomplete => Verdict::Fail,
            other => other,
        })
}

proptest! {
    /// Length-1 chains never answer `Incomplete`.
    #[test]
    fn single_link_is_definitive(terminal in arb_verdict(), policy in arb_policy()) {
        let chain = build(&[], terminal, policy);
        prop_assert!(chain.run(&PropertyBag::new()).is_definitive());
    }

    /// Any chain matches the reference walk.
    #[test]
    fn walk_matches_reference(
        intermediates in prop::collection::vec(arb_verdict(), 0..8),
        terminal in arb_verdict(),
        policy in arb_policy(),
    ) {
        let chain = build(&intermediates, terminal, policy);
        let want = expected(&intermediates, terminal, policy);

        prop_assert_eq!(chain.run(&PropertyBag::new()), want);
        prop_assert_eq!(chain.evaluate_detailed(&PropertyBag::new()).verdict(), want);
    }

    /// Under the default policy an intermediate link never fails on its own.
    #[test]
    fn early_pass_never_fails_early(
        intermediates in prop::collection::vec(arb_verdict(), 1..8),
        terminal in arb_verdict(),
    ) {
        let chain = build(&intermediates, terminal, ShortCircuit::EarlyPass);
        let report = chain.evaluate_detailed(&PropertyBag::new());

        if report.verdict() == Verdict::Fail {
            prop_assert_eq!(report.decided_by(), "terminal");
        }
    }

    /// The report visits links in order and stops at the deciding one.
    #[test]
    fn report_trace_is_a_prefix(
        intermediates in prop::collection::vec(arb_verdict(), 0..8),
        terminal in arb_verdict(),
        policy in arb_policy(),
    ) {
        let chain = build(&intermediates, terminal, policy);
        let report = chain.evaluate_detailed(&PropertyBag::new());
        let names = chain.link_names();

        let visited: Vec<&str> = report.visited().iter().map(|(n, _)| n.as_str()).collect();
        prop_assert_eq!(&names[..visited.len()], &visited[..]);
        prop_assert_eq!(visited.last().copied(), Some(report.decided_by()));
    }
}

#[test]
fn long_chain_walks_and_drops_without_recursion() {
    let links = 200_000;
    let intermediates = vec![Verdict::Incomplete; links];
    let chain = build(&intermediates, Verdict::Pass, ShortCircuit::EarlyPass);
    assert_eq!(chain.len(), links + 1);

    let mut props = PropertyBag::new();
    chain.collect(&ViewNode::new("android.widget.CheckBox"), &mut props);
    assert_eq!(chain.run(&props), Verdict::Pass);
    assert_eq!(chain.evaluate_detailed(&props).decided_by(), "terminal");

    drop(chain);
}
