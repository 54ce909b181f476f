//! Compute (Nova) resource packages

pub mod servers;
