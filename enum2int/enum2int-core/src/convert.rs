//! Null-preserving conversion of a dynamic enum value to its ordinal.

use std::sync::Arc;

use crate::{
    error::ConvertError,
    index::EnumIndexMap,
    lookup::{EnumLookup, MissPolicy},
    value::Value,
};

/// Converts the value of one column. Implemented by [`EnumConverter`] and by
/// any `Fn(&Value) -> Result<Value, ConvertError>`.
pub trait ValueConverter {
    fn convert(&self, value: &Value) -> Result<Value, ConvertError>;
}

impl<F> ValueConverter for F
where
    F: Fn(&Value) -> Result<Value, ConvertError>,
{
    fn convert(&self, value: &Value) -> Result<Value, ConvertError> {
        self(value)
    }
}

/// Maps `Null` to `Null` and `String(symbol)` to `Int(ordinal)`.
#[derive(Debug, Clone)]
pub struct EnumConverter<P = MissPolicy> {
    lookup: EnumLookup<P>,
}

impl EnumConverter {
    /// Converter using the default [`unknown_enum`](crate::unknown_enum) policy.
    pub fn from_map(map: Arc<EnumIndexMap>) -> Self {
        Self::new(EnumLookup::new(map))
    }
}

impl<P> EnumConverter<P>
where
    P: Fn(&str) -> ConvertError,
{
    pub fn new(lookup: EnumLookup<P>) -> Self {
        Self { lookup }
    }

    /// `Null` → `None`, `String(s)` → `Some(s)`, anything else is
    /// [`ConvertError::InvalidInput`].
    pub fn to_nullable_str<'v>(&self, value: &'v Value) -> Result<Option<&'v str>, ConvertError> {
        value.try_str()
    }

    /// `None` passes through; a lookup failure is returned, never swallowed.
    pub fn to_nullable_ordinal(&self, symbol: Option<&str>) -> Result<Option<i32>, ConvertError> {
        symbol.map(|s| self.lookup.lookup(s)).transpose()
    }

    pub fn ordinal_to_value(&self, ordinal: Option<i32>) -> Value {
        Value::from(ordinal)
    }
}

impl<P> ValueConverter for EnumConverter<P>
where
    P: Fn(&str) -> ConvertError,
{
    fn convert(&self, value: &Value) -> Result<Value, ConvertError> {
        let symbol = self.to_nullable_str(value)?;
        let ordinal = self.to_nullable_ordinal(symbol)?;
        Ok(self.ordinal_to_value(ordinal))
    }
}
