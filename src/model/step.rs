use serde::{Deserialize, Serialize};

/// One instruction in a recipe's procedure.
///
/// On the wire a step is either a bare string or an object with `text` and
/// `substeps`, which may nest to any depth:
///
/// ```yaml
/// steps:
///   - Boil pasta
///   - text: Prepare sauce
///     substeps:
///       - Heat butter
///       - text: Add cream and cheese
///         substeps: [Stir, Simmer]
/// ```
///
/// Any other shape fails deserialization, so a catalog with a malformed step
/// is rejected when it is loaded rather than half-rendered later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Step {
    Instruction(String),
    Composite { text: String, substeps: Vec<Step> },
}

impl Step {
    pub fn instruction(text: impl Into<String>) -> Self {
        Step::Instruction(text.into())
    }

    pub fn composite(text: impl Into<String>, substeps: Vec<Step>) -> Self {
        Step::Composite {
            text: text.into(),
            substeps,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Step::Instruction(text) => text,
            Step::Composite { text, .. } => text,
        }
    }

    /// Nested steps; empty for a plain instruction.
    pub fn substeps(&self) -> &[Step] {
        match self {
            Step::Instruction(_) => &[],
            Step::Composite { substeps, .. } => substeps,
        }
    }
}

impl From<&str> for Step {
    fn from(text: &str) -> Self {
        Step::Instruction(text.to_string())
    }
}
