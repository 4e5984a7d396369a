pub mod eval;
pub mod generate;
pub mod kinds;
pub mod literal;

#[cfg(test)]
mod eval_tests;
#[cfg(test)]
mod generate_tests;
