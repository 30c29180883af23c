pub mod domain;
pub mod error;
pub mod infra;
pub mod logging;
pub mod ui;
pub mod usecase;

pub use error::ConsoleError;

#[cfg(test)]
mod tests;
