use crate::utils::error::Result;
use std::path::PathBuf;

/// File-side seam used by the export and backup adapters. Everything here is
/// synchronous; the core has no I/O of its own.
pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
    fn base_path(&self) -> PathBuf;
}

/// Configuration seam. Implemented by both the CLI flags and the TOML file.
pub trait ConfigProvider: Send + Sync {
    fn data_folder(&self) -> &str;
    fn max_credits(&self) -> u32;
    fn seed_sample_data(&self) -> bool;
}
