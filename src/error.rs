use crate::diagnostics::Warning;
use crate::types::Mpls;
use std::fmt::Display;

/// A fatal decoding error.
///
/// Once one of these is raised the [`Reader`] that produced it is poisoned
/// and every later read returns the same error.
///
/// [`Reader`]: ../reader/struct.Reader.html
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The buffer does not start with the `MPLS` magic.
    #[error("not an MPLS file: expected it to start with \"MPLS\", found {found:?}")]
    NotAnMplsFile { found: String },

    /// A fixed-width field ran past the end of the buffer.
    #[error("truncated input at offset {offset}: wanted {wanted} bytes, {available} available")]
    Truncated {
        offset: usize,
        wanted: usize,
        available: usize,
    },

    /// A seek target fell outside of the buffer.
    #[error("seek to {target} is outside of the {len}-byte buffer")]
    SeekOutOfRange { target: i128, len: usize },
}

/// The decoder stage a fatal error occurred in.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Stage {
    Header,
    AppInfo,
    PlayList,
    Marks,
    Done,
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Header => "header",
            Stage::AppInfo => "AppInfoPlayList",
            Stage::PlayList => "PlayList",
            Stage::Marks => "PlayListMark",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

/// A fatal decode, together with everything that was decoded before it.
///
/// `partial` is not authoritative: records after the fault keep their
/// default values, and the record the fault happened in may be half filled.
#[derive(Debug, thiserror::Error)]
#[error("failed to decode MPLS ({stage})")]
pub struct DecodeFailure {
    #[source]
    pub error: DecodeError,
    pub stage: Stage,
    pub partial: Mpls,
    pub warnings: Vec<Warning>,
}

/// The error type of the [`Mpls::from`] and [`Mpls::parse`] methods.
///
/// [`Mpls::from`]: ../types/struct.Mpls.html#method.from
/// [`Mpls::parse`]: ../types/struct.Mpls.html#method.parse
#[derive(Debug, thiserror::Error)]
pub enum MplsError {
    /// An I/O error occurred while reading the playlist.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    /// Failed to decode the byte stream as valid MPLS.
    #[error(transparent)]
    ParseError(#[from] Box<DecodeFailure>),
}

impl From<DecodeFailure> for MplsError {
    fn from(failure: DecodeFailure) -> Self {
        MplsError::ParseError(Box::new(failure))
    }
}
