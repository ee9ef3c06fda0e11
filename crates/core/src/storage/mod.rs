pub mod entry_store;
#[cfg(not(target_arch = "wasm32"))]
pub mod file;
pub mod format;
pub mod memory;
pub mod traits;
