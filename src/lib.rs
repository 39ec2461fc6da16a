pub mod analyzer;
pub mod api;
pub mod calculator;
pub mod config;
pub mod digits;
pub mod error;
pub mod layouts;
pub mod profiles;
// cmd and reports are modules of the binary crate (main.rs).
