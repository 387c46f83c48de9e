//! Pass/fail check report model.

use serde::Serialize;

/// The advisory pass/fail checks evaluated against a projection.
///
/// Each check is independent and order-insensitive; all four are
/// evaluated and reported on every run. A failing check never affects the
/// process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Projected pretax employee total reaches the base deferral limit.
    pub maxed_pretax_deferral: bool,
    /// The deferral limit is never hit, or is hit within the last two pay
    /// periods of the year, so no employer true-up is left on the table.
    pub avoided_true_up: bool,
    /// Projected contribution rate over base wages reaches the employer's
    /// maximum match rate.
    pub maxed_employer_match: bool,
    /// Projected after-tax total fills the remaining aggregate-limit room.
    pub maxed_after_tax: bool,
}

impl CheckReport {
    /// The checks as `(name, passed)` pairs in reporting order.
    pub fn entries(&self) -> [(&'static str, bool); 4] {
        [
            ("Maxed pretax deferral", self.maxed_pretax_deferral),
            ("Avoided true-up", self.avoided_true_up),
            ("Maxed employer match", self.maxed_employer_match),
            ("Maxed after-tax", self.maxed_after_tax),
        ]
    }
}
