//! Synthetic value producers for column anonymization.
//!
//! Each [`GeneratorKind`] is a tagged variant describing the shape of the
//! substitute value for one column; [`GeneratorKind::generate`] draws a
//! fresh value from an explicitly injected RNG, so runs are seedable and
//! no ambient random state is involved.

pub mod kinds;

pub use kinds::GeneratorKind;
