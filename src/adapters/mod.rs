// Adapters layer: concrete implementations for the file-side ports
// (local storage, CSV export, folder backup).

pub mod backup;
pub mod export;
pub mod storage;

pub use storage::LocalStorage;
