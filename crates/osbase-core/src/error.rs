use thiserror::Error;

#[derive(Debug, Error)]
pub enum OsBaseError {
    #[error("channel name cannot be empty")]
    EmptyChannel,

    #[error("channel name has too many components: {channel}")]
    TooManyComponents { channel: String },

    #[error("invalid risk in channel name: {channel}")]
    InvalidRisk { channel: String },

    #[error("invalid track in channel name: {channel}")]
    InvalidTrack { channel: String },

    #[error("invalid branch in channel name: {channel}")]
    InvalidBranch { channel: String },

    #[error("invalid channel: {channel}")]
    InvalidChannel { channel: String },

    #[error("invalid pinned track: {track}")]
    InvalidPinnedTrack { track: String },

    #[error("cannot switch pinned track")]
    PinnedTrackSwitch,

    #[error("{reason} not valid")]
    NotValid { reason: String },

    #[error("invalid base string {input:?}: {source}")]
    InvalidBaseString {
        input: String,
        #[source]
        source: Box<OsBaseError>,
    },

    #[error("invalid system string {input:?}: {source}")]
    InvalidSystemString {
        input: String,
        #[source]
        source: Box<OsBaseError>,
    },
}

pub type Result<T> = std::result::Result<T, OsBaseError>;

impl OsBaseError {
    pub fn not_valid(reason: impl Into<String>) -> Self {
        Self::NotValid {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_base(input: &str, source: OsBaseError) -> Self {
        Self::InvalidBaseString {
            input: input.to_string(),
            source: Box::new(source),
        }
    }

    pub(crate) fn invalid_system(input: &str, source: OsBaseError) -> Self {
        Self::InvalidSystemString {
            input: input.to_string(),
            source: Box::new(source),
        }
    }
}
