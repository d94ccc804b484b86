//! Deterministic fixed-point mathematics layer.
//!
//! All simulation state (positions, speeds, audio levels) uses binary
//! fixed-point arithmetic so that a given input sequence replays to the
//! exact same output sequence on every platform. No floating point is
//! involved anywhere in the per-tick path.

use fixed::types::I20F12;

pub mod trig;
pub use self::trig::{cos_deg, sin_deg};

/// Fixed-point number type used throughout the simulation.
///
/// I20F12 format: 20 bits for the integer part, 12 bits for the fractional
/// part (resolution ~0.000244). Largement suffisant pour des positions
/// bornées à quelques centaines d'unités.
pub type Fx = I20F12;
