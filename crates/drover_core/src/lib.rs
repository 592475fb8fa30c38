pub mod problem;
pub mod selector;
pub mod solver;
mod utils;

#[cfg(test)]
pub(crate) mod test_utils;
