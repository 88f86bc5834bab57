//! Property-based tests

mod route_proptest;
