//! Numerical routines: polynomial least squares and cubic interpolation.

pub mod poly;
pub mod spline;
