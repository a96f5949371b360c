//! Lazy record stream over an Avro object container.

use std::{io::Read, iter::FusedIterator};

use apache_avro::{Reader, Schema, types::Value as AvroValue};
use enum2int_core::Record;
use tracing::debug;

use crate::{codec::DecodeConfig, error::AvroError, value::from_avro_fields};

/// Decodes an object container into `Result<Record, AvroError>` items.
///
/// Items come out in container order. The first error is yielded once and
/// ends the stream; the underlying reader is not polled again.
pub struct AvroRecordReader<'a, R> {
    inner: Reader<'a, R>,
    decoded: u64,
    done: bool,
}

impl<'a, R: Read> AvroRecordReader<'a, R> {
    /// Read the container header with the default [`DecodeConfig`].
    pub fn new(input: R) -> Result<Self, AvroError> {
        Self::with_config(input, &DecodeConfig::default())
    }

    /// Read the container header, applying `config` first.
    ///
    /// The allocation limit is process-wide in `apache_avro` and can only be
    /// set once; later calls keep the first value.
    pub fn with_config(input: R, config: &DecodeConfig) -> Result<Self, AvroError> {
        let effective = apache_avro::max_allocation_bytes(config.blob_size_max);
        if effective != config.blob_size_max {
            debug!(
                requested = config.blob_size_max,
                effective, "allocation limit already set"
            );
        }

        let inner = Reader::new(input).map_err(|source| AvroError::ContainerOpen { source })?;
        debug!(schema = %inner.writer_schema().canonical_form(), "opened container");

        Ok(Self {
            inner,
            decoded: 0,
            done: false,
        })
    }

    pub fn writer_schema(&self) -> &Schema {
        self.inner.writer_schema()
    }

    fn to_record(&self, value: AvroValue) -> Result<Record, AvroError> {
        match value {
            AvroValue::Record(fields) => {
                from_avro_fields(fields).map_err(|source| AvroError::Decode {
                    index: self.decoded,
                    source,
                })
            }
            other => Err(AvroError::NotARecord {
                index: self.decoded,
                found: avro_kind(&other),
            }),
        }
    }
}

impl<R: Read> Iterator for AvroRecordReader<'_, R> {
    type Item = Result<Record, AvroError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let item = match self.inner.next() {
            None => {
                self.done = true;
                debug!(decoded = self.decoded, "reached end of container");
                return None;
            }
            Some(Ok(value)) => self.to_record(value),
            Some(Err(source)) => Err(AvroError::Decode {
                index: self.decoded,
                source,
            }),
        };
        self.decoded += 1;
        self.done = item.is_err();
        Some(item)
    }
}

impl<R: Read> FusedIterator for AvroRecordReader<'_, R> {}

fn avro_kind(value: &AvroValue) -> &'static str {
    match value {
        AvroValue::Null => "null",
        AvroValue::Boolean(_) => "boolean",
        AvroValue::Int(_) => "int",
        AvroValue::Long(_) => "long",
        AvroValue::Float(_) => "float",
        AvroValue::Double(_) => "double",
        AvroValue::Bytes(_) => "bytes",
        AvroValue::String(_) => "string",
        AvroValue::Fixed(_, _) => "fixed",
        AvroValue::Enum(_, _) => "enum",
        AvroValue::Union(_, _) => "union",
        AvroValue::Array(_) => "array",
        AvroValue::Map(_) => "map",
        AvroValue::Record(_) => "record",
        _ => "logical",
    }
}
