//! Construction-time machine configuration.

use serde::{Deserialize, Serialize};

/// Order in which hooks fire around an accepted state change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookOrder {
    /// Enter and exit hooks both fire on the entered state:
    /// global enter, state enter, (commit), state exit, global exit.
    #[default]
    Visit,

    /// Exit hooks fire on the state being left, then enter hooks on the
    /// entered state: state exit, global exit, (commit), global enter,
    /// state enter. The exit half is skipped when there is no previous state.
    Handover,
}

/// Machine-wide settings.
///
/// # Example
///
/// ```rust
/// use hookfsm::builder::{HookOrder, MachineConfig};
///
/// let config: MachineConfig = serde_json::from_str(r#"{"name": "order"}"#).unwrap();
/// assert_eq!(config.name, "order");
/// assert_eq!(config.hook_order, HookOrder::Visit);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Used as the graph name and in log fields.
    pub name: String,
    pub hook_order: HookOrder,
}

impl MachineConfig {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn hook_order(mut self, order: HookOrder) -> Self {
        self.hook_order = order;
        self
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            name: "fsm".to_string(),
            hook_order: HookOrder::default(),
        }
    }
}
