//! Sample file parser tests
