use crate::model::Step;
use crate::view::{el, Node};
use std::collections::BTreeSet;

mod model;
pub use model::{StepNode, StepTree};

/// Render a step sequence into a nested, depth-tagged tree.
///
/// Output order matches input order at every level. Composite steps keep
/// their own text at `depth` and render their substeps at `depth + 1`.
/// An empty sequence renders to an empty tree.
///
/// # Examples
///
/// ```
/// use recipe_book::{render_steps, Step};
///
/// let steps = vec![
///     Step::instruction("Boil pasta"),
///     Step::composite("Prepare sauce", vec![Step::instruction("Heat butter")]),
/// ];
/// let tree = render_steps(&steps, 0);
/// assert_eq!(tree.count(), 3);
/// assert_eq!(tree.depth_levels(), vec![0, 1]);
/// ```
pub fn render_steps(steps: &[Step], depth: usize) -> StepTree {
    let nodes = steps
        .iter()
        .map(|step| match step {
            Step::Instruction(text) => StepNode::leaf(text.clone(), depth),
            Step::Composite { text, substeps } => {
                StepNode::composite(text.clone(), depth, render_steps(substeps, depth + 1))
            }
        })
        .collect();

    StepTree { depth, nodes }
}

impl StepTree {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of rendered entries, leaves and composites alike.
    pub fn count(&self) -> usize {
        self.flatten().len()
    }

    /// Pre-order `(depth, text)` listing of every entry.
    pub fn flatten(&self) -> Vec<(usize, &str)> {
        let mut out = Vec::new();
        self.collect(&mut out);
        out
    }

    fn collect<'a>(&'a self, out: &mut Vec<(usize, &'a str)>) {
        for node in &self.nodes {
            out.push((node.depth, node.text.as_str()));
            if let Some(substeps) = &node.substeps {
                substeps.collect(out);
            }
        }
    }

    /// Distinct depths present in the tree, ascending.
    pub fn depth_levels(&self) -> Vec<usize> {
        self.flatten()
            .into_iter()
            .map(|(depth, _)| depth)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Display node: a `<ul>` whose items carry a `level-N` class. A
    /// composite item holds its text followed by a nested `<ul>`.
    pub fn to_node(&self) -> Node {
        el("ul").children(self.nodes.iter().map(|node| {
            let item = el("li")
                .class("step")
                .class(&format!("level-{}", node.depth))
                .text(node.text.as_str());
            match &node.substeps {
                Some(substeps) => item.child(substeps.to_node()),
                None => item,
            }
        }))
    }
}
