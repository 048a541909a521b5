//! Store release channels
//!
//! A channel identifies a release line of an installable artifact as a
//! `track/risk/branch` triple, e.g. `20.04/stable` or `1.0/beta/hotfix-1`.
//!
//! # Concepts
//!
//! - **Track**: a release line (often a version prefix), independent of
//!   stability. Empty means the default track, displayed as `latest`.
//! - **Risk**: the stability tier within a track (stable, candidate, beta,
//!   edge).
//! - **Branch**: a short-lived sub-channel layered on a track/risk pair.
//!
//! Parsing happens in two steps: [`Channel::parse_verbatim`] splits a raw
//! string into its segments without defaults, and [`Channel::clean`]
//! normalizes the result (default track collapsed, missing risk defaulted to
//! stable, display name derived). [`resolve`] and [`resolve_pinned`] compute
//! the effective channel for an update, and [`Channel::match_against`]
//! checks a requested channel against a candidate.

mod matcher;
mod parse;
mod resolve;
mod risk;
mod types;

pub use matcher::ChannelMatch;
pub use parse::full;
pub use resolve::{resolve, resolve_pinned};
pub use risk::{Risk, RISKS};
pub use types::Channel;
