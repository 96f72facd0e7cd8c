// The binary entry point is main.rs; the library exposes the module tree to
// integration tests and criterion benchmarks.

pub mod app;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod logging;
pub mod session;
pub mod ui;
