//! Unit tests for the reach CLI
//!
//! These tests use mocked ports and run fast without external I/O.

mod architecture;
mod connection_info_service;
mod context_service;
mod property_tests;
