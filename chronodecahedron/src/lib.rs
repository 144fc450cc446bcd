#![cfg_attr(not(test), no_std)]

pub mod config;
pub use config::*;

pub mod error;
pub use error::*;

pub mod outputs;
pub use outputs::*;

pub mod sensor;
pub use sensor::*;

#[cfg(test)]
mod tests;
