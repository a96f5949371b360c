use std::{io::Write, path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Args;
use enum2int_avro::{
    AvroRecordReader, AvroRecordWriter, BLOB_SIZE_MAX_DEFAULT, BLOCK_LENGTH_DEFAULT, CodecName,
    DecodeConfig, EncodeConfig, EnumSchemaIndex, parse_schema,
};
use enum2int_core::{EnumColumnExt, EnumConverter};
use tracing::{debug, info, warn};

use super::EnumColumnArgs;
use crate::source::{Input, open_output, read_schema};

#[derive(Args)]
pub struct ConvertArgs {
    #[command(flatten)]
    column: EnumColumnArgs,

    /// Schema file used to write the output container
    #[arg(long, env = "ENV_SCHEMA_FILENAME")]
    schema: PathBuf,

    /// Input container (stdin if not specified)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output codec: null | deflate | snappy | zstandard | bzip2 | xz
    #[arg(long, env = "ENV_CODEC", default_value_t = CodecName::Null, value_parser = parse_codec)]
    codec: CodecName,

    /// Records per output block
    #[arg(
        long,
        env = "ENV_BLOCK_LENGTH",
        default_value_t = BLOCK_LENGTH_DEFAULT,
        value_parser = parse_block_length
    )]
    block_length: usize,

    /// Largest single bytes/string value the decoder will allocate
    #[arg(long, default_value_t = BLOB_SIZE_MAX_DEFAULT)]
    blob_size_max: usize,

    /// Drop records whose enum column cannot be mapped instead of failing
    #[arg(long)]
    skip_invalid: bool,
}

impl ConvertArgs {
    pub fn run(self) -> Result<()> {
        let column = self.column.column.as_str();
        let limit = self.column.schema_size_max;

        let enum_text = read_schema(&self.column.enum_schema, limit)?;
        let map = EnumSchemaIndex::parse(&enum_text)
            .context("invalid enum schema")?
            .index(column)
            .with_context(|| format!("cannot index column '{column}'"))?;
        info!(column, symbols = map.len(), "built enum index");

        let output_text = read_schema(&self.schema, limit)?;
        let output_schema = parse_schema(&output_text).context("invalid output schema")?;

        let input = Input::open(self.input.as_deref())?;
        let reader = AvroRecordReader::with_config(
            input.reader(),
            &DecodeConfig {
                blob_size_max: self.blob_size_max,
            },
        )?;
        let mut writer = AvroRecordWriter::with_config(
            &output_schema,
            open_output(self.output.as_deref())?,
            &EncodeConfig {
                block_length: self.block_length,
                codec: self.codec,
            },
        );

        let converter = EnumConverter::from_map(Arc::new(map));
        let mut skipped = 0u64;
        for (index, item) in reader.map_enum_column(column, converter).enumerate() {
            match item {
                Ok(record) => writer.write(record)?,
                Err(e) if self.skip_invalid && !e.is_upstream() => {
                    skipped += 1;
                    warn!(index, error = %e, "skipped record");
                    if let Some(record) = e.into_record() {
                        debug!(index, ?record, "dropped best-effort record");
                    }
                }
                Err(e) => return Err(e).with_context(|| format!("record #{index}")),
            }
        }

        let written = writer.written();
        writer.finish()?.flush()?;
        info!(written, skipped, "done");
        Ok(())
    }
}

fn parse_codec(raw: &str) -> Result<CodecName, String> {
    raw.parse().map_err(|e: enum2int_avro::AvroError| e.to_string())
}

fn parse_block_length(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("block length must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
