use std::{
    fs,
    io::{self, BufReader, BufWriter, Read, Write},
    path::Path,
};

use anyhow::{Context, Result, bail};
use memmap2::Mmap;

/// Read a schema file, refusing files larger than `limit` bytes.
pub fn read_schema(path: &Path, limit: u64) -> Result<String> {
    let file =
        fs::File::open(path).with_context(|| format!("failed to open {}", path.display()))?;

    let mut text = String::new();
    file.take(limit.saturating_add(1))
        .read_to_string(&mut text)
        .with_context(|| format!("failed to read {}", path.display()))?;

    if text.len() as u64 > limit {
        bail!(
            "schema file {} exceeds the {limit} byte limit",
            path.display()
        );
    }
    Ok(text)
}

/// Container input: a memory-mapped file or stdin.
pub enum Input {
    Stdin,
    Mapped(Mmap),
}

impl Input {
    pub fn open(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::Stdin);
        };
        let file =
            fs::File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        let mmap = unsafe { Mmap::map(&file) }
            .with_context(|| format!("failed to map {}", path.display()))?;
        Ok(Self::Mapped(mmap))
    }

    pub fn reader(&self) -> Box<dyn Read + '_> {
        match self {
            Self::Stdin => Box::new(BufReader::new(io::stdin().lock())),
            Self::Mapped(mmap) => Box::new(&mmap[..]),
        }
    }
}

pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(
            fs::File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}
