//! rusty-forms validation predicates
//!
//! Pure Rust checks shared by `rusty-forms` schemas. Compatible with both std
//! and no_std environments.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod email;
pub mod string;

pub use email::*;
pub use string::*;
