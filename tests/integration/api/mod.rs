//! API integration tests
//!
//! Integration tests for the auth gate and API endpoints

mod auth_test;
mod middleware_test;
