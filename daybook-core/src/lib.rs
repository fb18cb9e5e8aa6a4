//! Core types for daybook.
//!
//! - `Store` maps calendar days (`DateKey`) to ordered to-do `Entry` lists
//! - `storage` and `repository` persist the whole store under one string key
//! - `planner` is the session object a front end drives
//! - `month` lays out a month grid for rendering marked days

pub mod config;
pub mod constants;
pub mod date_key;
pub mod entry;
pub mod error;
pub mod month;
pub mod planner;
pub mod repository;
pub mod storage;
pub mod store;

pub use date_key::DateKey;
pub use entry::{Entry, EntryId};
pub use error::{DaybookError, DaybookResult};
pub use store::Store;
