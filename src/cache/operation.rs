//! Operation Type Module
//!
//! Closed set of AI operation categories used to pick a TTL bucket and to
//! break down cache statistics.

use std::fmt;

use serde::{Deserialize, Serialize};

// == Operation Type ==
/// Category of the AI operation whose output is cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    /// Conversational crop-assistant replies
    Chat,
    /// Crop disease / pest diagnosis results
    Diagnosis,
    /// Crop and field planning recommendations
    Planning,
    /// Anything else; uses the default TTL
    General,
}

impl OperationType {
    /// Every operation type, in reporting order.
    pub const ALL: [OperationType; 4] = [
        OperationType::Chat,
        OperationType::Diagnosis,
        OperationType::Planning,
        OperationType::General,
    ];

    /// Parses a label leniently. Unknown labels fall back to `General`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "chat" => OperationType::Chat,
            "diagnosis" | "diagnose" => OperationType::Diagnosis,
            "planning" | "plan" => OperationType::Planning,
            _ => OperationType::General,
        }
    }

    /// Lower-case label used in keys and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Chat => "chat",
            OperationType::Diagnosis => "diagnosis",
            OperationType::Planning => "planning",
            OperationType::General => "general",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
