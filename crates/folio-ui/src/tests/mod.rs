//! Behavioral tests for the UI layer
//!
//! BDD-style given/when/then names. These run natively: they exercise
//! route tables, content, and the pure helpers components are built on.

pub mod navigation_behaviors;
