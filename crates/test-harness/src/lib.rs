//! Test harness for sculpture generation.
//!
//! Provides programmatic tools for scripting generate / recolor / remove
//! workflows, verifying the invariants at every step, and producing
//! diagnostic text.
//!
//! # Key Components
//!
//! - [`SculptureBuilder`]: fluent API over the real message dispatch path
//! - [`oracle`]: verification functions returning pass/fail verdicts
//! - [`report`]: structured text scene descriptions
//! - [`helpers`]: error type, pattern constructors, screen-space math

pub mod helpers;
pub mod oracle;
pub mod report;
pub mod workflow;

pub use helpers::HarnessError;
pub use oracle::OracleVerdict;
pub use report::SceneReport;
pub use workflow::SculptureBuilder;
