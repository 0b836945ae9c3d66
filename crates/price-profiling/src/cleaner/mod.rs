//! Column cleaning and feature derivation.
//!
//! This module provides functionality for:
//! - Normalizing the free-text `OpSys` column into a fixed category set
//! - Deriving the `Storage Type` column from the `Memory` description

mod os;
mod storage;

pub use os::{OsCategory, normalize_os_column};
pub use storage::{derive_storage_column, storage_sample, storage_type_of};
