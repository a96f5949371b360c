//! Avro adapter for the enum2int pipeline.
//!
//! - [`EnumSchemaIndex`] parses an Avro schema once and derives
//!   [`EnumIndexMap`](enum2int_core::EnumIndexMap)s for any of its enum columns.
//! - [`AvroRecordReader`] decodes an object container file into a lazy stream
//!   of [`Record`](enum2int_core::Record)s.
//! - [`AvroRecordWriter`] encodes records back into a container with a chosen
//!   [`CodecName`] and block length.

mod codec;
mod error;
mod reader;
mod schema;
mod value;
mod writer;

pub use codec::{
    BLOB_SIZE_MAX_DEFAULT, BLOCK_LENGTH_DEFAULT, CodecName, DecodeConfig, EncodeConfig,
};
pub use error::AvroError;
pub use reader::AvroRecordReader;
pub use schema::{EnumSchemaIndex, parse_schema, schema_to_enum_index, schema_to_type_def};
pub use value::{from_avro_value, to_avro_value};
pub use writer::AvroRecordWriter;
