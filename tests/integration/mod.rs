//! Integration tests for end-to-end functionality
//!
//! Tests for:
//! - Loading files from disk into the display
//! - Error surfacing and dataset preservation
