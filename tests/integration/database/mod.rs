//! Database integration tests (require `DATABASE_URL`)

mod resources_test;
