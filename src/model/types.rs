//! Static registry of parameter type tags.
//!
//! Maps each tag accepted in `type` fields to its display name and storage
//! width in bytes. Rendering prints the literal tag, so the registry is used
//! for listing and checking only.

use std::fmt;
use std::str::FromStr;

/// A registered parameter type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamType {
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Int8,
    Int16,
    Int32,
    Int64,
    X8,
    X16,
    X32,
    X64,
    Double,
    Float,
    String,
    Data,
    Bool,
}

impl ParamType {
    /// Every registered type, in registry order.
    pub const ALL: [ParamType; 17] = [
        Self::Uint8,
        Self::Uint16,
        Self::Uint32,
        Self::Uint64,
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::X8,
        Self::X16,
        Self::X32,
        Self::X64,
        Self::Double,
        Self::Float,
        Self::String,
        Self::Data,
        Self::Bool,
    ];

    /// Tag as written in the input document.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::X8 => "x8",
            Self::X16 => "x16",
            Self::X32 => "x32",
            Self::X64 => "x64",
            Self::Double => "double",
            Self::Float => "float",
            Self::String => "string",
            Self::Data => "data",
            Self::Bool => "bool",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Uint8 => "UINT8",
            Self::Uint16 => "UINT16",
            Self::Uint32 => "UINT32",
            Self::Uint64 => "UINT64",
            Self::Int8 => "INT8",
            Self::Int16 => "INT16",
            Self::Int32 => "INT32",
            Self::Int64 => "INT64",
            Self::X8 => "X8",
            Self::X16 => "X16",
            Self::X32 => "X32",
            Self::X64 => "X64",
            Self::Double => "DOUBLE",
            Self::Float => "FLOAT",
            Self::String => "STRING",
            Self::Data => "DATA",
            Self::Bool => "BOOL",
        }
    }

    /// Width in bytes, or `None` for variable-length types (`string`, `data`).
    pub fn width(self) -> Option<usize> {
        match self {
            Self::Uint8 | Self::Int8 | Self::X8 | Self::Bool => Some(1),
            Self::Uint16 | Self::Int16 | Self::X16 => Some(2),
            Self::Uint32 | Self::Int32 | Self::X32 | Self::Float => Some(4),
            Self::Uint64 | Self::Int64 | Self::X64 | Self::Double => Some(8),
            Self::String | Self::Data => None,
        }
    }

    /// Exact, case-sensitive tag lookup.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.tag() == tag)
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown parameter type '{0}'")]
pub struct UnknownTypeTag(pub String);

impl FromStr for ParamType {
    type Err = UnknownTypeTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| UnknownTypeTag(s.to_string()))
    }
}
