//! Member data shared by the registry, the export pipeline, and the emitters.

use serde::ser::{Serialize, Serializer};

/// A scalar value exported to the frontend. Class constants may be null;
/// backed enumeration cases are always int or string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberValue {
    Int(i64),
    Str(String),
    Null,
}

impl MemberValue {
    /// TypeScript type used for this value in declaration output. Null widens
    /// to `string`.
    pub fn ts_type(&self) -> &'static str {
        match self {
            MemberValue::Int(_) => "number",
            MemberValue::Str(_) | MemberValue::Null => "string",
        }
    }
}

impl Serialize for MemberValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            MemberValue::Int(value) => serializer.serialize_i64(*value),
            MemberValue::Str(value) => serializer.serialize_str(value),
            MemberValue::Null => serializer.serialize_unit(),
        }
    }
}

/// One name/value pair of an export entry, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub value: MemberValue,
}

impl Member {
    pub fn new(name: impl Into<String>, value: MemberValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// An enumeration case as registered by a host crate. A case without an
/// explicit backing value gets one synthesized by the naming policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumCase {
    pub name: String,
    pub value: Option<MemberValue>,
}

impl EnumCase {
    pub fn unit(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    pub fn int(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value: Some(MemberValue::Int(value)),
        }
    }

    pub fn string(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(MemberValue::Str(value.into())),
        }
    }
}

/// A class constant as registered by a host crate, including inherited ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantField {
    pub name: String,
    pub value: MemberValue,
}

impl ConstantField {
    pub fn int(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value: MemberValue::Int(value),
        }
    }

    pub fn string(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: MemberValue::Str(value.into()),
        }
    }

    pub fn null(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: MemberValue::Null,
        }
    }
}
