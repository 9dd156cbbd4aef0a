//! The soft-assertion accumulator
//!
//! Soft checks record failures and keep going; nothing is raised until
//! [`SoftAssertions::assert_all`] drains the pending list. The [`Strict`] view
//! runs the same predicates but raises on the first failure, folding in every
//! soft failure recorded before it.

use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::check::{self, Check, FailureRecord, Verdict};
use crate::config::SoftAssertConfig;
use crate::error::AssertionError;
use crate::report::AssertionReport;
use crate::value::Value;

/// Accumulates failed checks for one verification session
#[derive(Debug)]
pub struct SoftAssertions {
    session_id: Uuid,
    config: SoftAssertConfig,
    pending: Vec<FailureRecord>,
}

impl Default for SoftAssertions {
    fn default() -> Self {
        Self::new()
    }
}

impl SoftAssertions {
    /// Create an accumulator with default configuration
    pub fn new() -> Self {
        Self::with_config(SoftAssertConfig::default())
    }

    pub fn with_config(config: SoftAssertConfig) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            config,
            pending: Vec::new(),
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn config(&self) -> &SoftAssertConfig {
        &self.config
    }

    /// Failures recorded since the last drain, in check order
    pub fn pending(&self) -> &[FailureRecord] {
        &self.pending
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Snapshot the pending failures without draining them
    pub fn report(&self) -> AssertionReport {
        AssertionReport::new(self.session_id, self.pending.clone())
    }

    /// Strict view: every check raises as soon as it fails
    pub fn strict(&mut self) -> Strict<'_> {
        Strict { inner: self }
    }

    /// Drain the pending list and raise one error covering all of it.
    ///
    /// The list is empty afterwards whether or not an error is returned, so a
    /// second call with no new failures always succeeds.
    pub fn assert_all(&mut self) -> Result<(), AssertionError> {
        if self.pending.is_empty() {
            info!("All soft assertions passed");
            return Ok(());
        }

        let report = AssertionReport::new(self.session_id, std::mem::take(&mut self.pending));

        if let Some(dir) = &self.config.report_dir {
            if let Err(e) = report.write_json(dir) {
                warn!("Failed to write assertion report to {}: {}", dir.display(), e);
            }
        }

        error!("{} soft assertion(s) failed", report.total_failures);
        Err(AssertionError::new(
            report.total_failures,
            report.render(&self.config.banner, &self.config.marker),
        ))
    }

    /// Record the verdict; returns whether the check passed
    fn record(&mut self, check: Check, description: &str, verdict: Verdict) -> bool {
        match verdict {
            Verdict::Pass => {
                if self.config.log_passes {
                    debug!("✓ [{}] {}", check, description);
                }
                true
            }
            Verdict::Fail { expected, actual } => {
                let failure = FailureRecord::new(check, description, expected, actual);
                error!("✗ {}", failure.message);
                self.pending.push(failure);
                false
            }
        }
    }

    pub fn equals(
        &mut self,
        actual: impl Into<Value>,
        expected: impl Into<Value>,
        description: &str,
    ) {
        let verdict = check::equals(&actual.into(), &expected.into());
        self.record(Check::Equals, description, verdict);
    }

    pub fn not_equal(
        &mut self,
        actual: impl Into<Value>,
        expected: impl Into<Value>,
        description: &str,
    ) {
        let verdict = check::not_equal(&actual.into(), &expected.into());
        self.record(Check::NotEqual, description, verdict);
    }

    /// Substring for strings, membership for arrays, key presence for objects
    pub fn includes(
        &mut self,
        actual: impl Into<Value>,
        expected: impl Into<Value>,
        description: &str,
    ) {
        let verdict = check::includes(&actual.into(), &expected.into());
        self.record(Check::Includes, description, verdict);
    }

    /// Passes only for the boolean `true`, not for other truthy values
    pub fn is_true(&mut self, value: impl Into<Value>, description: &str) {
        let verdict = check::is_true(&value.into());
        self.record(Check::IsTrue, description, verdict);
    }

    pub fn is_false(&mut self, value: impl Into<Value>, description: &str) {
        let verdict = check::is_false(&value.into());
        self.record(Check::IsFalse, description, verdict);
    }

    pub fn greater_than(
        &mut self,
        actual: impl Into<Value>,
        expected: impl Into<Value>,
        description: &str,
    ) {
        let verdict = check::greater_than(&actual.into(), &expected.into());
        self.record(Check::GreaterThan, description, verdict);
    }

    pub fn is_less_than(
        &mut self,
        actual: impl Into<Value>,
        expected: impl Into<Value>,
        description: &str,
    ) {
        let verdict = check::is_less_than(&actual.into(), &expected.into());
        self.record(Check::IsLessThan, description, verdict);
    }

    pub fn not_null(&mut self, value: impl Into<Value>, description: &str) {
        let verdict = check::not_null(&value.into());
        self.record(Check::NotNull, description, verdict);
    }

    pub fn is_null(&mut self, value: impl Into<Value>, description: &str) {
        let verdict = check::is_null(&value.into());
        self.record(Check::IsNull, description, verdict);
    }

    /// `Null` counts as defined; only [`Value::Absent`] fails
    pub fn is_defined(&mut self, value: impl Into<Value>, description: &str) {
        let verdict = check::is_defined(&value.into());
        self.record(Check::IsDefined, description, verdict);
    }

    pub fn is_undefined(&mut self, value: impl Into<Value>, description: &str) {
        let verdict = check::is_undefined(&value.into());
        self.record(Check::IsUndefined, description, verdict);
    }

    /// NaN is not a number here
    pub fn is_number(&mut self, value: impl Into<Value>, description: &str) {
        let verdict = check::is_number(&value.into());
        self.record(Check::IsNumber, description, verdict);
    }

    pub fn is_string(&mut self, value: impl Into<Value>, description: &str) {
        let verdict = check::is_string(&value.into());
        self.record(Check::IsString, description, verdict);
    }
}

/// Checks that raise immediately on failure.
///
/// A failing strict check records itself, then drains the accumulator exactly
/// like [`SoftAssertions::assert_all`], so the error lists every earlier soft
/// failure followed by this one.
pub struct Strict<'a> {
    inner: &'a mut SoftAssertions,
}

impl Strict<'_> {
    fn enforce(
        &mut self,
        check: Check,
        description: &str,
        verdict: Verdict,
    ) -> Result<(), AssertionError> {
        if self.inner.record(check, description, verdict) {
            Ok(())
        } else {
            self.inner.assert_all()
        }
    }

    pub fn equals(
        &mut self,
        actual: impl Into<Value>,
        expected: impl Into<Value>,
        description: &str,
    ) -> Result<(), AssertionError> {
        let verdict = check::equals(&actual.into(), &expected.into());
        self.enforce(Check::Equals, description, verdict)
    }

    pub fn not_equal(
        &mut self,
        actual: impl Into<Value>,
        expected: impl Into<Value>,
        description: &str,
    ) -> Result<(), AssertionError> {
        let verdict = check::not_equal(&actual.into(), &expected.into());
        self.enforce(Check::NotEqual, description, verdict)
    }

    pub fn includes(
        &mut self,
        actual: impl Into<Value>,
        expected: impl Into<Value>,
        description: &str,
    ) -> Result<(), AssertionError> {
        let verdict = check::includes(&actual.into(), &expected.into());
        self.enforce(Check::Includes, description, verdict)
    }

    pub fn is_true(
        &mut self,
        value: impl Into<Value>,
        description: &str,
    ) -> Result<(), AssertionError> {
        let verdict = check::is_true(&value.into());
        self.enforce(Check::IsTrue, description, verdict)
    }

    pub fn is_false(
        &mut self,
        value: impl Into<Value>,
        description: &str,
    ) -> Result<(), AssertionError> {
        let verdict = check::is_false(&value.into());
        self.enforce(Check::IsFalse, description, verdict)
    }

    pub fn greater_than(
        &mut self,
        actual: impl Into<Value>,
        expected: impl Into<Value>,
        description: &str,
    ) -> Result<(), AssertionError> {
        let verdict = check::greater_than(&actual.into(), &expected.into());
        self.enforce(Check::GreaterThan, description, verdict)
    }

    pub fn is_less_than(
        &mut self,
        actual: impl Into<Value>,
        expected: impl Into<Value>,
        description: &str,
    ) -> Result<(), AssertionError> {
        let verdict = check::is_less_than(&actual.into(), &expected.into());
        self.enforce(Check::IsLessThan, description, verdict)
    }

    pub fn not_null(
        &mut self,
        value: impl Into<Value>,
        description: &str,
    ) -> Result<(), AssertionError> {
        let verdict = check::not_null(&value.into());
        self.enforce(Check::NotNull, description, verdict)
    }

    pub fn is_null(
        &mut self,
        value: impl Into<Value>,
        description: &str,
    ) -> Result<(), AssertionError> {
        let verdict = check::is_null(&value.into());
        self.enforce(Check::IsNull, description, verdict)
    }

    pub fn is_defined(
        &mut self,
        value: impl Into<Value>,
        description: &str,
    ) -> Result<(), AssertionError> {
        let verdict = check::is_defined(&value.into());
        self.enforce(Check::IsDefined, description, verdict)
    }

    pub fn is_undefined(
        &mut self,
        value: impl Into<Value>,
        description: &str,
    ) -> Result<(), AssertionError> {
        let verdict = check::is_undefined(&value.into());
        self.enforce(Check::IsUndefined, description, verdict)
    }

    pub fn is_number(
        &mut self,
        value: impl Into<Value>,
        description: &str,
    ) -> Result<(), AssertionError> {
        let verdict = check::is_number(&value.into());
        self.enforce(Check::IsNumber, description, verdict)
    }

    pub fn is_string(
        &mut self,
        value: impl Into<Value>,
        description: &str,
    ) -> Result<(), AssertionError> {
        let verdict = check::is_string(&value.into());
        self.enforce(Check::IsString, description, verdict)
    }
}
