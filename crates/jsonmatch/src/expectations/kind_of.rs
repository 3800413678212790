use serde_json::Value;

use super::Expectation;
use crate::{error::ConstructionError, types::JsonType};

/// A value of a given JSON type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindOf {
    ty: JsonType,
}

impl KindOf {
    #[must_use]
    pub fn new(ty: JsonType) -> Self {
        Self { ty }
    }

    /// Build from a type name such as `"string"` or `"integer"`.
    ///
    /// # Errors
    ///
    /// If `name` is not a JSON type.
    pub fn from_name(name: &str) -> Result<Self, ConstructionError> {
        name.parse().map(KindOf::new)
    }

    #[must_use]
    pub fn json_type(&self) -> JsonType {
        self.ty
    }
}

impl Expectation for KindOf {
    fn is_satisfied_by(&self, value: &Value) -> bool {
        self.ty.matches(value)
    }
}
