use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Args;
use enum2int_avro::EnumSchemaIndex;

use super::EnumColumnArgs;
use crate::source::read_schema;

#[derive(Args)]
pub struct IndexArgs {
    #[command(flatten)]
    column: EnumColumnArgs,
}

impl IndexArgs {
    pub fn run(self) -> Result<()> {
        let text = read_schema(&self.column.enum_schema, self.column.schema_size_max)?;
        let index = EnumSchemaIndex::parse(&text).context("invalid enum schema")?;
        let map = index
            .index(&self.column.column)
            .with_context(|| format!("cannot index column '{}'", self.column.column))?;

        let mut entries: Vec<_> = map.iter().collect();
        entries.sort_by_key(|&(_, ordinal)| ordinal);

        let mut out = io::stdout().lock();
        for (symbol, ordinal) in entries {
            writeln!(out, "{ordinal}\t{symbol}")?;
        }
        Ok(())
    }
}
