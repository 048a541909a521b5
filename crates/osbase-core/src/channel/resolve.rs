//! Channel resolution against a current channel or a pinned track

use super::risk::Risk;
use super::types::Channel;
use crate::error::{OsBaseError, Result};

/// Resolve `new_channel` with respect to `current`.
///
/// A risk-only or risk/branch-only update inherits the track of `current`;
/// anything track-qualified replaces it wholesale. Assumes `current` is
/// parseable when both strings are non-empty.
pub fn resolve(current: &str, new_channel: &str) -> Result<String> {
    if new_channel.is_empty() {
        return Ok(current.to_string());
    }
    if current.is_empty() {
        return Ok(new_channel.to_string());
    }
    let channel = Channel::parse_verbatim(current)?;
    let first = new_channel.split('/').next().unwrap_or_default();
    if Risk::is_risk_name(first) && !channel.track.is_empty() {
        // risk/branch inherits the track if any
        return Ok(format!("{}/{new_channel}", channel.track));
    }
    Ok(new_channel.to_string())
}

/// Resolve `new_channel` with respect to a pinned track.
///
/// `new_channel` can only be risk/branch-only (which inherits the pin) or
/// carry the pinned track itself; moving to a different track fails with
/// [`OsBaseError::PinnedTrackSwitch`].
pub fn resolve_pinned(track: &str, new_channel: &str) -> Result<String> {
    if track.is_empty() {
        return Ok(new_channel.to_string());
    }
    let pinned = match Channel::parse_verbatim(track) {
        Ok(ch) if ch.verbatim_track_only() => ch,
        _ => {
            return Err(OsBaseError::InvalidPinnedTrack {
                track: track.to_string(),
            })
        }
    };
    if new_channel.is_empty() {
        return Ok(track.to_string());
    }
    let track_prefix = format!("{}/", pinned.track);
    let first = new_channel.split('/').next().unwrap_or_default();
    if Risk::is_risk_name(first) {
        // risk/branch inherits the pinned track
        return Ok(format!("{track_prefix}{new_channel}"));
    }
    if new_channel != track && !new_channel.starts_with(&track_prefix) {
        return Err(OsBaseError::PinnedTrackSwitch);
    }
    Ok(new_channel.to_string())
}
