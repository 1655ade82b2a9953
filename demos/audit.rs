use tracing_subscriber::EnvFilter;
use viewcheck::rules::{self, class_names};
use viewcheck::{PropertyBag, ViewNode};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let chain = rules::check_box_name().expect("failed to build rule chain");
    println!("{chain}");

    let nodes = [
        ViewNode::new(class_names::CHECKBOX).with_text("Enable notifications"),
        ViewNode::new(class_names::CHECKBOX).with_labeled_by("wifi_label"),
        ViewNode::new(class_names::CHECKBOX).with_content_description("Mute"),
        ViewNode::new(class_names::CHECKBOX).with_text(""),
        ViewNode::new(class_names::SWITCH).with_text("Dark mode"),
    ];

    for node in &nodes {
        if !chain.is_applicable(node) {
            println!("{}: not applicable", node.class_name);
            continue;
        }
        // One bag per node.
        let mut props = PropertyBag::new();
        chain.collect(node, &mut props);
        println!("{}", chain.evaluate_detailed(&props));
    }
}
