//! Core types shared by every satchel crate.
//!
//! This crate holds the pieces the containers and sessions agree on:
//! - Error taxonomy: [`SatchelError`] and the [`SatchelResult`] alias
//! - Wall-clock timestamps: [`Timestamp`]
//!
//! Containers never depend on each other; they all depend on this crate.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod time;

pub use error::{SatchelError, SatchelResult};
pub use time::Timestamp;
