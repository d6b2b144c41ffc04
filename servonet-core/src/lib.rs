//! Board-agnostic support logic for Servonet controller boards
//!
//! This crate contains the board glue that does not depend on specific
//! hardware implementations:
//!
//! - Capability traits (millisecond clock, periodic process)
//! - Uptime tracking across hardware counter wraparounds
//! - The logical-to-physical analog channel map
//!
//! Everything here is host-testable; the firmware crate binds it to the
//! RP2040 and the Embassy executor.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod analog;
pub mod traits;
pub mod uptime;
