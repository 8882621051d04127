//! Command implementations for the cricket database CLI
//!
//! Each handler performs one repository operation, prints the result, and
//! returns whether the operation succeeded.

pub mod batting;
pub mod bowling;
pub mod common;
pub mod dashboard;
pub mod matches;
pub mod players;
pub mod teams;

#[cfg(test)]
mod tests;
