//! Shared fixtures for integration tests.

#![allow(dead_code)]

pub mod schema_fixtures;
pub mod xml_fixtures;
