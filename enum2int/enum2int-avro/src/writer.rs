//! Record encoder producing an Avro object container.

use std::io::Write;

use apache_avro::{Schema, Writer};
use enum2int_core::{Record, Value};
use tracing::debug;

use crate::{codec::EncodeConfig, error::AvroError, value::to_avro_value};

/// Encodes records against a writer schema into an object container.
///
/// A block is flushed every `block_length` records. `apache_avro` may also
/// cut a block early once its buffer outgrows its own byte limit, so
/// `block_length` is an upper bound per block.
pub struct AvroRecordWriter<'a, W: Write> {
    schema: &'a Schema,
    inner: Writer<'a, W>,
    block_length: usize,
    pending: usize,
    written: u64,
}

impl<'a, W: Write> AvroRecordWriter<'a, W> {
    pub fn new(schema: &'a Schema, output: W) -> Self {
        Self::with_config(schema, output, &EncodeConfig::default())
    }

    pub fn with_config(schema: &'a Schema, output: W, config: &EncodeConfig) -> Self {
        debug!(
            codec = %config.codec,
            block_length = config.block_length,
            "creating container writer"
        );
        Self {
            schema,
            inner: Writer::with_codec(schema, output, config.codec.to_codec()),
            block_length: config.block_length.max(1),
            pending: 0,
            written: 0,
        }
    }

    /// Append one record, flushing the block when it is full.
    pub fn write(&mut self, record: Record) -> Result<(), AvroError> {
        // Resolution picks union branches and enum indexes that the generic
        // value does not carry.
        let index = self.written;
        let value = to_avro_value(Value::Record(record))
            .resolve(self.schema)
            .map_err(|source| AvroError::Encode { index, source })?;
        self.inner
            .append(value)
            .map_err(|source| AvroError::Encode { index, source })?;
        self.written += 1;
        self.pending += 1;

        if self.pending >= self.block_length {
            self.flush()?;
        }
        Ok(())
    }

    /// Encode every record of `items`, stopping at the first error.
    ///
    /// Returns the number of records written by this call.
    pub fn write_stream<I, E>(&mut self, items: I) -> Result<u64, E>
    where
        I: IntoIterator<Item = Result<Record, E>>,
        E: From<AvroError>,
    {
        let start = self.written;
        for item in items {
            self.write(item?)?;
        }
        Ok(self.written - start)
    }

    /// Write out the buffered records as one block.
    pub fn flush(&mut self) -> Result<(), AvroError> {
        if self.pending == 0 {
            return Ok(());
        }
        let bytes = self
            .inner
            .flush()
            .map_err(|source| AvroError::Flush { source })?;
        debug!(records = self.pending, bytes, "flushed block");
        self.pending = 0;
        Ok(())
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    /// Number of records appended so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Flush the last block and return the underlying output.
    pub fn finish(mut self) -> Result<W, AvroError> {
        self.flush()?;
        self.inner
            .into_inner()
            .map_err(|source| AvroError::Flush { source })
    }
}
