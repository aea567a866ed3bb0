//! Test module organization
//!
//! This module re-exports test helpers for use in test files.

mod helpers;

#[allow(unused_imports)]
pub use helpers::{
    build_test_config, SAMPLE_AUTHOR, SAMPLE_CONTENT, SAMPLE_SOURCE_URL, SAMPLE_TAGS,
};
