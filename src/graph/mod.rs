//! Graph export for external renderers.
//!
//! [`GraphDescription`] is a plain node/edge listing of a definition. The
//! engine never renders images itself; a [`GraphRenderer`] turns the
//! description into whatever an outside tool consumes.

mod dot;
mod json;

pub use dot::DotRenderer;
pub use json::JsonRenderer;

use crate::core::Definition;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A state in the exported graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
}

/// A transition in the exported graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// `"<from>-><to>"`
    pub key: String,
    pub from: String,
    pub to: String,
    /// Guard label, `None` for an unguarded edge.
    pub label: Option<String>,
}

/// Nodes and edges of a machine, both in registration order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDescription {
    pub name: String,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl GraphDescription {
    pub fn from_definition<C>(definition: &Definition<C>) -> Self {
        let nodes = definition
            .states()
            .iter()
            .map(|s| Node {
                name: s.name().to_string(),
            })
            .collect();

        let edges = definition
            .transitions()
            .iter()
            .map(|t| Edge {
                key: t.key.clone(),
                from: t.from.clone(),
                to: t.to.clone(),
                label: t.guard_label().map(str::to_string),
            })
            .collect();

        Self {
            name: definition.name().to_string(),
            nodes,
            edges,
        }
    }

    /// Render as a DOT digraph.
    pub fn to_dot(&self) -> String {
        DotRenderer.render_dot(self)
    }

    pub fn to_json(&self) -> Result<String, GraphError> {
        JsonRenderer::default().render(self)
    }
}

/// Errors raised while rendering a graph.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("JSON rendering failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Turns a graph description into a renderer-specific output.
pub trait GraphRenderer {
    type Output;

    fn render(&self, graph: &GraphDescription) -> Result<Self::Output, GraphError>;
}
