//! Integration tests for the selector.
//!
//! These drive [`crate::SelectorApp`] through its public operations with an
//! in-memory store and a scripted frontend.

mod property_tests;
mod support;
