pub mod config;
pub mod csv;
pub mod files;
pub mod kv;

pub use config::{load_config, save_config, AppConfig, CONFIG_FILE};
pub use csv::parse_csv;
pub use files::{ensure_dir, init_local_data_dir, resolve_data_dir};
pub use kv::{FileKvStore, KeyValueStore};
#[cfg(test)]
pub use kv::MemoryKvStore;
