pub mod cors;
pub mod encode;
pub mod fetch;
