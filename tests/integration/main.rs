//! Integration tests against an in-memory database

mod common;
mod service_tests;
