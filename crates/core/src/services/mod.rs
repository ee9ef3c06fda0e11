pub mod index_service;
pub mod summary_service;
