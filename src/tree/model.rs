use serde::Serialize;

/// Rendered, depth-tagged form of a step sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepTree {
    /// Nesting depth of every node in this list
    pub depth: usize,
    /// Rendered steps in input order
    pub nodes: Vec<StepNode>,
}

/// One rendered step: a leaf instruction, or a composite's own text plus the
/// rendering of its substeps one level deeper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepNode {
    pub text: String,
    pub depth: usize,
    /// Present only for composite steps
    pub substeps: Option<StepTree>,
}

impl StepNode {
    pub(crate) fn leaf(text: String, depth: usize) -> Self {
        StepNode {
            text,
            depth,
            substeps: None,
        }
    }

    pub(crate) fn composite(text: String, depth: usize, substeps: StepTree) -> Self {
        StepNode {
            text,
            depth,
            substeps: Some(substeps),
        }
    }
}
