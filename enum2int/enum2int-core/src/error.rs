//! Error types for map construction and record conversion.

use crate::value::Record;

/// Error returned while deriving an [`EnumIndexMap`](crate::EnumIndexMap) from a schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    /// The top-level schema is not a record type.
    #[error("invalid schema: expected a record at the top level, found {found}")]
    InvalidSchema { found: String },

    /// The named field exists but its type is not an enum.
    #[error("invalid field '{field}': expected an enum, found {found}")]
    InvalidField { field: String, found: String },

    /// The record has no field with the requested name.
    #[error("field '{field}' missing from record '{record}'")]
    FieldMissing { record: String, field: String },
}

/// Error returned while converting a single column value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// The value is neither null nor of the expected type.
    #[error("invalid input: expected {expected}, found {found}")]
    InvalidInput {
        expected: &'static str,
        found: &'static str,
    },

    /// The symbol has no entry in the enum map.
    #[error("unknown enum value: {symbol}")]
    UnknownEnum { symbol: String },
}

/// Error item emitted by [`EnumColumnTransform`](crate::EnumColumnTransform).
#[derive(Debug, thiserror::Error)]
pub enum StreamError<E> {
    /// The target column of one record failed to convert.
    ///
    /// `record` is the best-effort output: every other field is intact and the
    /// target column is `Null`. The stream keeps going after this item.
    #[error("failed to convert column '{column}': {source}")]
    Convert {
        column: String,
        record: Record,
        #[source]
        source: ConvertError,
    },

    /// The upstream sequence failed. This is always the last item.
    #[error(transparent)]
    Upstream(E),
}

impl<E> StreamError<E> {
    /// Best-effort record paired with a conversion failure, if any.
    pub fn into_record(self) -> Option<Record> {
        match self {
            StreamError::Convert { record, .. } => Some(record),
            StreamError::Upstream(_) => None,
        }
    }

    pub fn is_upstream(&self) -> bool {
        matches!(self, StreamError::Upstream(_))
    }
}
