//! Platform-agnostic storage adapters for front-ends without their own store.

mod json_file_store;

pub use json_file_store::JsonFileStore;
