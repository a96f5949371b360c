//! Derive a symbol → ordinal map from an enum nested in a record schema.

use std::collections::HashMap;

use crate::{
    error::IndexError,
    schema::{FieldDef, RecordDef, TypeDef},
};

/// Symbol → ordinal map built from an enum's declared symbol order.
///
/// Ordinals run `0..N` in declaration order. The map is never mutated after
/// construction; share it behind an `Arc` across pipelines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnumIndexMap(HashMap<String, i32>);

impl EnumIndexMap {
    pub fn from_symbols<S: AsRef<str>>(symbols: impl IntoIterator<Item = S>) -> Self {
        Self(
            symbols
                .into_iter()
                .zip(0..)
                .map(|(symbol, ordinal)| (symbol.as_ref().to_string(), ordinal))
                .collect(),
        )
    }

    pub fn get(&self, symbol: &str) -> Option<i32> {
        self.0.get(symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Build the [`EnumIndexMap`] for `column` of the top-level record `schema`.
///
/// Fails with [`IndexError::InvalidSchema`] when `schema` is not a record,
/// [`IndexError::FieldMissing`] when the record has no such field and
/// [`IndexError::InvalidField`] when the field is not an enum.
pub fn enum_index(schema: &TypeDef, column: &str) -> Result<EnumIndexMap, IndexError> {
    match schema {
        TypeDef::Record(record) => record_enum_index(record, column),
        other => Err(IndexError::InvalidSchema {
            found: other.type_name().to_string(),
        }),
    }
}

pub fn record_enum_index(record: &RecordDef, column: &str) -> Result<EnumIndexMap, IndexError> {
    let field = record
        .field(column)
        .ok_or_else(|| IndexError::FieldMissing {
            record: record.name.clone(),
            field: column.to_string(),
        })?;
    field_enum_index(field)
}

fn field_enum_index(field: &FieldDef) -> Result<EnumIndexMap, IndexError> {
    field
        .data_type
        .as_enum()
        .map(|def| EnumIndexMap::from_symbols(&def.symbols))
        .ok_or_else(|| IndexError::InvalidField {
            field: field.name.clone(),
            found: field.data_type.type_name().to_string(),
        })
}
