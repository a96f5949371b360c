pub mod convert;
pub mod index;

use std::path::PathBuf;

use clap::Args;

pub const SCHEMA_SIZE_MAX_DEFAULT: u64 = 1_048_576;

/// Where the enum definition comes from.
#[derive(Args)]
pub struct EnumColumnArgs {
    /// Schema file declaring the enum column
    #[arg(long, env = "ENV_ENUM_SCHEMA_FILENAME")]
    pub enum_schema: PathBuf,

    /// Name of the enum column to map
    #[arg(short, long, env = "ENV_ENUM_COL_NAME")]
    pub column: String,

    /// Largest schema file accepted, in bytes
    #[arg(long, default_value_t = SCHEMA_SIZE_MAX_DEFAULT)]
    pub schema_size_max: u64,
}
