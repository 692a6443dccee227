//! Approximant selection and template annotation.

mod annotator;
mod approximant;

pub use annotator::Annotator;
pub use approximant::{Approximant, ApproximantRange, ModelClass, select_approximant};
