//! Compatibility matching between a requested and a candidate channel

use super::types::Channel;

/// Which fields match between a requested and a candidate channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChannelMatch {
    pub track: bool,
    pub risk: bool,
}

impl ChannelMatch {
    pub fn full(&self) -> bool {
        self.track && self.risk
    }
}

impl std::fmt::Display for ChannelMatch {
    /// Renders as `"track:risk"`, `"track"`, `"risk"` or `""`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut matching = Vec::new();
        if self.track {
            matching.push("track");
        }
        if self.risk {
            matching.push("risk");
        }
        write!(f, "{}", matching.join(":"))
    }
}

impl Channel {
    /// Match this channel, as the requested one, against a candidate.
    ///
    /// Tracks match on exact equality. Risk matches when the requested risk
    /// is at least as permissive as the candidate's, so a stable request
    /// never matches an edge candidate but an edge request matches stable.
    /// An unknown risk ranks as the -1 sentinel on either side: it can only
    /// risk-match another unknown.
    pub fn match_against(&self, candidate: &Channel) -> ChannelMatch {
        ChannelMatch {
            track: self.track == candidate.track,
            risk: self.risk.level() >= candidate.risk.level(),
        }
    }
}
