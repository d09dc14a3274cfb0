pub mod cases;
pub mod client;
pub mod config;
pub mod error;
pub mod report;
pub mod runner;
pub mod schema;

pub use error::{AppError, Result};
