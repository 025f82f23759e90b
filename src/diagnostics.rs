use crate::error::DecodeError;
use std::fmt::Display;

/// The kind of length-prefixed record a diagnostic refers to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Record {
    AppInfoPlayList,
    PlayList,
    PlayItem,
    SubPlayItem,
    SubPath,
    StreamNumberTable,
    StreamEntry,
    StreamAttributes,
    PlayListMark,
}

impl Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Record::AppInfoPlayList => "AppInfoPlayList",
            Record::PlayList => "PlayList",
            Record::PlayItem => "PlayItem",
            Record::SubPlayItem => "SubPlayItem",
            Record::SubPath => "SubPath",
            Record::StreamNumberTable => "STN table",
            Record::StreamEntry => "stream entry",
            Record::StreamAttributes => "stream attributes",
            Record::PlayListMark => "PlayListMark",
        };
        f.write_str(name)
    }
}

/// A non-fatal format deviation found while decoding.
///
/// Decoding always continues after a warning, using whatever values were
/// read. Offsets are absolute positions in the input buffer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Warning {
    /// The version following the `MPLS` magic is not one this crate knows.
    #[error("unsupported MPLS version {version:?}, decoding may be unreliable")]
    UnsupportedVersion { version: String },

    /// A clip reference whose codec literal is not `M2TS`.
    #[error("clip {file_name:?} at offset {offset} has codec {codec_id:?}, expected \"M2TS\"")]
    FormatDrift {
        offset: usize,
        file_name: String,
        codec_id: String,
    },

    /// A stream attributes block with a coding type this crate can't lay out.
    #[error("unrecognized stream coding type {coding_type:#04X} at offset {offset}")]
    UnknownEncoding { offset: usize, coding_type: u8 },

    /// A record did not end where its declared length said it would.
    #[error("{record} is not aligned: started at {start}, ended at {actual}, expected {expected}")]
    AlignmentDrift {
        record: Record,
        start: usize,
        expected: usize,
        actual: usize,
    },

    /// The decoder jumped to the declared PlayList offset after the
    /// AppInfoPlayList ended somewhere else.
    #[error("resynchronized from offset {from} to the declared PlayList start {to}")]
    Resynchronized { from: usize, to: usize },

    /// The PlayList ended somewhere other than the declared mark offset.
    #[error("PlayList ended at {actual}, but the PlayListMark section is declared at {expected}")]
    SectionOffsetMismatch { expected: usize, actual: usize },

    /// The PlayListMark section could not be decoded and was left out.
    #[error("skipped the PlayListMark section at offset {offset}: {error}")]
    MarksSkipped { offset: usize, error: DecodeError },
}

/// An ordered collection of the warnings raised during one decode.
///
/// Every warning is also emitted as a `tracing` event at `WARN` level.
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, warning: Warning) {
        tracing::warn!("{}", warning);
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}
