//! Board-agnostic core logic for the Pinscope input reporter
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (input pin, serial transmitter)
//! - Pin descriptor table for the monitored inputs
//! - Sampler with the high→0 / low→1 inversion
//! - Periodic reporter owning the last-report timestamp

#![no_std]
#![deny(unsafe_code)]

pub mod reporter;
pub mod sampler;
pub mod traits;
