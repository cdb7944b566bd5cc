//! # Storage backend clients
//!
//! This module contains storage clients which implement [`StoreClient`] using
//! various backends.
//!
//! [`StoreClient`]: crate::store::interface::StoreClient

pub mod json_file;
