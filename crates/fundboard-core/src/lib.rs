pub mod activity;
pub mod config;
pub mod cost;
pub mod date;
pub mod error;
pub mod format;
pub mod index;
pub mod io;
pub mod lenient;
pub mod milestone;
pub mod paths;
pub mod plan;
pub mod resource;
pub mod risk;
pub mod summary;
pub mod task;
pub mod timeline;
pub mod types;

pub use error::{FundboardError, Result};
