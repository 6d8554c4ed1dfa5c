//! memo-core - Core library for Memo Pad
//!
//! This crate contains the models, REST client, offline store, and the
//! controller logic shared by Memo Pad front ends.

pub mod api;
pub mod backend;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod models;
pub mod presentation;
pub mod prompt;
pub mod state;
pub mod storage;
pub mod util;

#[cfg(test)]
mod test_support;

pub use error::{Error, Result};
pub use models::{Memo, MemoDraft, MemoId};
