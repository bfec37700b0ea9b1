//! JSON output.

use super::{GraphDescription, GraphError, GraphRenderer};

/// Serializes a description with `serde_json`.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonRenderer {
    pub pretty: bool,
}

impl GraphRenderer for JsonRenderer {
    type Output = String;

    fn render(&self, graph: &GraphDescription) -> Result<String, GraphError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(graph)?
        } else {
            serde_json::to_string(graph)?
        };
        Ok(json)
    }
}
