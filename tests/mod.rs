//! Test suite for the sports hub
//!
//! This module organizes all tests

pub mod common;
pub mod property;
