//! Release-channel and OS base/system identifiers
//!
//! This crate normalizes and validates the identifiers that describe where
//! an installable artifact comes from and what it runs on:
//!
//! - [`Channel`]: a `track/risk/branch` release channel, e.g. `20.04/stable`
//! - [`Base`]: an OS pinned to a channel, e.g. ubuntu + `20.04/stable`
//! - [`System`]: a base or, alternatively, a resource-identified image
//!
//! Everything is a pure, synchronous string-to-value transformation; the
//! only process-wide state is the read-only legacy [`series`] registry,
//! built once on first use.

pub mod base;
pub mod channel;
pub mod error;
pub mod os;
pub mod series;
pub mod system;

pub use base::Base;
pub use channel::{Channel, ChannelMatch, Risk, RISKS};
pub use error::{OsBaseError, Result};
pub use os::Os;
pub use system::System;
