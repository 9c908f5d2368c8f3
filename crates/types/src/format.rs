//! Value-domain formats of declared types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the values of a declared type are represented in the state vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeFormat {
    /// Raw integer, no chunk table.
    Direct,
    /// Integer within a bounded range.
    Range,
    /// Index into an open chunk table.
    Chunk,
    /// Index into a closed chunk table.
    Enum,
    /// Boolean.
    Bool,
    /// Three-valued boolean.
    Trilean,
    /// Signed 32-bit integer.
    Sint32,
}

impl TypeFormat {
    /// Wire code of this format.
    pub fn code(self) -> i64 {
        match self {
            TypeFormat::Direct => 0,
            TypeFormat::Range => 1,
            TypeFormat::Chunk => 2,
            TypeFormat::Enum => 3,
            TypeFormat::Bool => 4,
            TypeFormat::Trilean => 5,
            TypeFormat::Sint32 => 6,
        }
    }

    /// Parse a wire code.
    pub fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            0 => TypeFormat::Direct,
            1 => TypeFormat::Range,
            2 => TypeFormat::Chunk,
            3 => TypeFormat::Enum,
            4 => TypeFormat::Bool,
            5 => TypeFormat::Trilean,
            6 => TypeFormat::Sint32,
            _ => return None,
        })
    }

    /// Whether values of this format are chunk indices.
    pub fn uses_chunks(self) -> bool {
        matches!(self, TypeFormat::Chunk | TypeFormat::Enum)
    }
}

impl fmt::Display for TypeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TypeFormat::Direct => "direct",
            TypeFormat::Range => "range",
            TypeFormat::Chunk => "chunk",
            TypeFormat::Enum => "enum",
            TypeFormat::Bool => "bool",
            TypeFormat::Trilean => "trilean",
            TypeFormat::Sint32 => "sint32",
        };
        write!(f, "{name}")
    }
}
