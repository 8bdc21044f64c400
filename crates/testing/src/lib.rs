//! Testing utilities for Gap Score
//!
//! This crate provides testing utilities including:
//! - Builder patterns for test results and suites
//! - Fixtures with realistic, randomized test names
//! - Proptest strategies for suites with a known failure count
//! - Helpers that write suites to temporary results files
//!
//! # Examples
//!
//! ```
//! use gap_score_testing::{builders::*, fixtures::*};
//! use gap_score_domain::TestCategory;
//!
//! // Sixteen passing and two failing tests
//! let suite = create_suite(16, 2);
//! assert_eq!(suite.len(), 18);
//!
//! // Build a custom suite
//! let suite = SuiteBuilder::new()
//!     .passed_in(TestCategory::Security, 3)
//!     .failed("rejects_expired_token", "expected 401, got 200")
//!     .build();
//! assert_eq!(suite.len(), 4);
//! ```

pub mod builders;
pub mod fixtures;
pub mod strategies;

// Re-export commonly used types
pub use builders::*;
pub use fixtures::*;

// Re-export testing dependencies for convenience
pub use fake;
pub use proptest;
