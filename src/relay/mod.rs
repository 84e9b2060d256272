pub mod error;
pub mod handler;
