//! Soft assertions for verification scripts
//!
//! Run many independent checks, keep going past failures, then raise a single
//! error that lists every failed check in the order it ran.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  SoftAssertions (one per test case / session)              │
//! │    ├── equals, includes, is_true, ... -> record failure    │
//! │    ├── strict().<check>() -> Result, raises on failure     │
//! │    └── assert_all() -> Result<(), AssertionError>          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  check      predicates over Value, FailureRecord           │
//! │  value      closed value model with deep equality          │
//! │  report     rendering + JSON report files                  │
//! │  shared     Arc<Mutex<..>> handle for cross-thread use     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ```no_run
//! use softcheck::SoftAssertions;
//!
//! fn checkout_page() -> Result<(), softcheck::AssertionError> {
//!     let mut sa = SoftAssertions::new();
//!     sa.equals("Cart", "Cart", "page title");
//!     sa.greater_than(3, 0, "item count");
//!     sa.strict().is_true(true, "checkout button enabled")?;
//!     sa.assert_all()
//! }
//! ```

pub mod accumulator;
pub mod check;
pub mod config;
pub mod error;
pub mod report;
pub mod shared;
pub mod value;

pub use accumulator::{SoftAssertions, Strict};
pub use check::{Check, FailureRecord};
pub use config::SoftAssertConfig;
pub use error::{AssertionError, Error, Result};
pub use report::AssertionReport;
pub use shared::SharedSoftAssertions;
pub use value::Value;
