//! External data transformation.

pub mod calc;
