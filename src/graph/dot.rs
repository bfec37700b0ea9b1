//! DOT text output.

use super::{GraphDescription, GraphError, GraphRenderer};
use std::fmt::Write;

/// Renders a description as a Graphviz `digraph`.
///
/// One node statement per state, then one edge statement per transition,
/// each in registration order. Unguarded edges get an empty label. The output
/// depends only on the description, so it is stable across runs.
///
/// # Example
///
/// ```rust
/// use hookfsm::builder::MachineBuilder;
///
/// let machine = MachineBuilder::<()>::new("door")
///     .add_states(["closed", "open"])?
///     .add_transition("closed", "open")?
///     .build_shared();
///
/// assert_eq!(
///     machine.describe().to_dot(),
///     "digraph door {\n  closed;\n  open;\n  closed -> open [label=\"\"];\n}\n"
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct DotRenderer;

impl DotRenderer {
    pub fn render_dot(&self, graph: &GraphDescription) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(out, "digraph {} {{", id(&graph.name));
        for node in &graph.nodes {
            let _ = writeln!(out, "  {};", id(&node.name));
        }
        for edge in &graph.edges {
            let _ = writeln!(
                out,
                "  {} -> {} [label=\"{}\"];",
                id(&edge.from),
                id(&edge.to),
                escape(edge.label.as_deref().unwrap_or(""))
            );
        }
        out.push_str("}\n");
        out
    }
}

impl GraphRenderer for DotRenderer {
    type Output = String;

    fn render(&self, graph: &GraphDescription) -> Result<String, GraphError> {
        Ok(self.render_dot(graph))
    }
}

/// Bare identifiers pass through, anything else is quoted.
fn id(name: &str) -> String {
    let mut chars = name.chars();
    let plain = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if plain {
        name.to_string()
    } else {
        format!("\"{}\"", escape(name))
    }
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
