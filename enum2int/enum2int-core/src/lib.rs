//! Format-independent core types for `enum2int`.
//!
//! This crate derives a symbol → ordinal [`EnumIndexMap`] from a schema
//! ([`TypeDef`]) and rewrites one column of a lazy [`Record`] stream from
//! enum symbols to their ordinals via [`EnumColumnTransform`].

mod convert;
mod error;
mod index;
mod lookup;
mod schema;
mod transform;
mod value;

pub use convert::{EnumConverter, ValueConverter};
pub use error::{ConvertError, IndexError, StreamError};
pub use index::{EnumIndexMap, enum_index, record_enum_index};
pub use lookup::{EnumLookup, MissPolicy, unknown_enum};
pub use schema::{EnumDef, FieldDef, RecordDef, TypeDef};
pub use transform::{EnumColumnExt, EnumColumnTransform};
pub use value::{Record, Value};
