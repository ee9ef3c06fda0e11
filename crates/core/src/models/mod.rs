pub mod entry;
pub mod mood;
pub mod settings;
pub mod summary;
pub mod weather;
