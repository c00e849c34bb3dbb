//! Integration tests for participant-upload
//!
//! These tests run the upload client against a real local HTTP server.

pub mod promotion_run_tests;
pub mod upload_scenario_tests;
