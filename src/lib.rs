// Library target exists solely for the integration tests.
// The binary entry point is main.rs; this file re-declares the module tree so
// that tests can drive the editor headlessly via `ted::app::Editor` over a
// TestBackend. Most code is only exercised through the binary, so suppress
// dead_code warnings.
#![allow(dead_code)]

pub mod actions;
pub mod app;
pub mod config;
pub mod dialog;
pub mod event;
pub mod menu;
pub mod screen;
pub mod session;
pub mod ui;
