use std::{fmt, str::FromStr};

use apache_avro::Codec;

use crate::error::AvroError;

/// Default upper bound for a single decoded bytes/string allocation.
pub const BLOB_SIZE_MAX_DEFAULT: usize = 1_048_576;

/// Default number of records grouped into one container block.
pub const BLOCK_LENGTH_DEFAULT: usize = 100;

/// Compression codecs an object container can be written with.
/// <https://avro.apache.org/docs/1.11.1/specification/#required-codecs>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CodecName {
    /// No compression (`null`)
    #[default]
    Null,
    /// DEFLATE, RFC 1951 (`deflate`)
    Deflate,
    /// Snappy with a CRC32 trailer (`snappy`)
    Snappy,
    /// Zstandard (`zstandard`)
    Zstandard,
    /// bzip2 (`bzip2`)
    Bzip2,
    /// xz / LZMA2 (`xz`)
    Xz,
}

impl CodecName {
    pub const ALL: [CodecName; 6] = [
        Self::Null,
        Self::Deflate,
        Self::Snappy,
        Self::Zstandard,
        Self::Bzip2,
        Self::Xz,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Deflate => "deflate",
            Self::Snappy => "snappy",
            Self::Zstandard => "zstandard",
            Self::Bzip2 => "bzip2",
            Self::Xz => "xz",
        }
    }

    /// The matching `apache_avro` codec.
    pub fn to_codec(self) -> Codec {
        match self {
            Self::Null => Codec::Null,
            Self::Deflate => Codec::Deflate,
            Self::Snappy => Codec::Snappy,
            Self::Zstandard => Codec::Zstandard,
            Self::Bzip2 => Codec::Bzip2,
            Self::Xz => Codec::Xz,
        }
    }
}

impl FromStr for CodecName {
    type Err = AvroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| AvroError::UnknownCodec(s.to_string()))
    }
}

impl fmt::Display for CodecName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings for [`AvroRecordReader`](crate::AvroRecordReader).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeConfig {
    pub blob_size_max: usize,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            blob_size_max: BLOB_SIZE_MAX_DEFAULT,
        }
    }
}

/// Settings for [`AvroRecordWriter`](crate::AvroRecordWriter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeConfig {
    /// Records per container block; a block is flushed once this many are buffered.
    pub block_length: usize,
    pub codec: CodecName,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            block_length: BLOCK_LENGTH_DEFAULT,
            codec: CodecName::Null,
        }
    }
}
