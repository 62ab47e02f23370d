//! Utils module split into submodules

mod errors;
mod validation;

pub use errors::UtilsError;
pub use validation::validate_range;

#[cfg(test)]
mod tests;
