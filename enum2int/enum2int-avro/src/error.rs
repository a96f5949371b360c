//! Error types for the Avro adapter.

use enum2int_core::IndexError;

/// Errors produced while parsing schemas or reading and writing containers.
#[derive(Debug, thiserror::Error)]
pub enum AvroError {
    /// Schema text is not a valid Avro schema.
    #[error("failed to parse schema: {source}")]
    SchemaParse {
        #[source]
        source: apache_avro::Error,
    },

    /// Named type references in the schema could not be resolved.
    #[error("failed to resolve schema names: {source}")]
    SchemaResolve {
        #[source]
        source: apache_avro::Error,
    },

    /// The enum column could not be indexed.
    #[error(transparent)]
    Index(#[from] IndexError),

    /// The object container header could not be read.
    #[error("failed to open container: {source}")]
    ContainerOpen {
        #[source]
        source: apache_avro::Error,
    },

    /// A datum in the container could not be decoded or converted.
    #[error("failed to decode datum #{index}: {source}")]
    Decode {
        index: u64,
        #[source]
        source: apache_avro::Error,
    },

    /// A top-level datum decoded to something other than a record.
    #[error("datum #{index} is not a record (found {found})")]
    NotARecord { index: u64, found: &'static str },

    /// A record could not be encoded against the writer schema.
    #[error("failed to encode record #{index}: {source}")]
    Encode {
        index: u64,
        #[source]
        source: apache_avro::Error,
    },

    /// A buffered block could not be flushed to the output.
    #[error("failed to flush block: {source}")]
    Flush {
        #[source]
        source: apache_avro::Error,
    },

    /// The codec identifier is not one of the supported names.
    #[error("unknown codec '{0}' (expected null, deflate, snappy, zstandard, bzip2 or xz)")]
    UnknownCodec(String),
}
