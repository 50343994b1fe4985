//! Localization analysis passes over extracted document facts.
//!
//! - [`scorer`] — additive localization-readiness score with letter grade.
//! - [`signals`] — first-time-global vs actively-expanding posture detection.
//! - [`tier`] — four-band market-expansion tier with static metadata.
//! - [`evidence`] — human-readable evidence summary for a scan.
//!
//! Every pass is a pure function over its input; none touches I/O or shared
//! state, so they can run in any order and repeatedly on the same facts.

pub mod evidence;
pub mod scorer;
pub mod signals;
pub mod tier;
