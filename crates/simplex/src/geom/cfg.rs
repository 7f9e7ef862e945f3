//! Tolerance defaults for simplex geometry (internal).
//!
//! Policy
//! - Defaults are fixed constants to avoid tolerance juggling during normal
//!   development. Adjustments are rare; if needed later we can make these
//!   configurable behind a small `Config` without changing call sites broadly.

/// Slack for hull-membership checks on recovered barycentric weights.
pub(crate) const MEMBER_EPS: f64 = 1e-9;
/// Determinant threshold below which the embedding counts as degenerate.
pub(crate) const DEGEN_EPS: f64 = 1e-12;
