use crate::diagnostics::{Diagnostics, Record, Warning};
use crate::error::{DecodeError, DecodeFailure, Stage};
use crate::reader::Reader;
use crate::types::Mpls;
use std::io::SeekFrom;

mod app_info;
mod clip;
mod mark;
mod play_item;
mod play_list;
mod stream;

const MAGIC: &str = "MPLS";
const KNOWN_VERSIONS: [&str; 2] = ["0200", "0300"];

type Result<T> = std::result::Result<T, DecodeError>;

/// A successfully decoded playlist and the warnings raised on the way.
#[derive(Debug, Clone)]
pub struct Decoded {
    pub mpls: Mpls,
    pub warnings: Vec<Warning>,
}

/// Decodes a complete MPLS file.
///
/// Format deviations that don't prevent decoding are returned as
/// [`Warning`]s next to the playlist. Fatal errors return a
/// [`DecodeFailure`] that still holds the partially decoded playlist.
///
/// [`Warning`]: diagnostics/enum.Warning.html
/// [`DecodeFailure`]: error/struct.DecodeFailure.html
pub fn decode(input: &[u8]) -> std::result::Result<Decoded, DecodeFailure> {
    let mut decoder = Decoder::new(input);
    let mut mpls = Mpls::default();
    match decoder.mpls(&mut mpls) {
        Ok(()) => Ok(Decoded {
            mpls,
            warnings: decoder.diag.into_warnings(),
        }),
        Err(error) => {
            tracing::debug!(stage = %decoder.stage, "decode failed: {}", error);
            Err(DecodeFailure {
                error,
                stage: decoder.stage,
                partial: mpls,
                warnings: decoder.diag.into_warnings(),
            })
        }
    }
}

/// The reader and the diagnostics of a single decode pass.
pub(crate) struct Decoder<'a> {
    pub(crate) r: Reader<'a>,
    pub(crate) diag: Diagnostics,
    stage: Stage,
}

impl<'a> Decoder<'a> {
    pub(crate) fn new(input: &'a [u8]) -> Self {
        Decoder {
            r: Reader::new(input),
            diag: Diagnostics::new(),
            stage: Stage::Header,
        }
    }

    fn enter(&mut self, stage: Stage) {
        tracing::debug!(offset = self.r.position(), "entering {}", stage);
        self.stage = stage;
    }

    /// Reports a record that didn't end at `start + len`. The cursor is left
    /// where it is.
    pub(crate) fn check_alignment(&mut self, record: Record, start: usize, len: usize) {
        let actual = self.r.position();
        let expected = start + len;
        if actual != expected {
            self.diag.push(Warning::AlignmentDrift {
                record,
                start,
                expected,
                actual,
            });
        }
    }

    /// Decodes `count` records into `out`.
    ///
    /// Each record is pushed even if decoding it failed, so the partial
    /// tree keeps whatever was read before the fault.
    pub(crate) fn sequence<T, F>(&mut self, out: &mut Vec<T>, count: usize, mut f: F) -> Result<()>
    where
        T: Default,
        F: FnMut(&mut Self, &mut T) -> Result<()>,
    {
        out.reserve(count);
        for _ in 0..count {
            let mut value = T::default();
            let res = f(self, &mut value);
            out.push(value);
            res?;
        }
        Ok(())
    }

    fn header(&mut self, mpls: &mut Mpls) -> Result<()> {
        let magic = self.r.read_exact(8)?;
        let file_type = String::from_utf8_lossy(&magic[..4]).into_owned();
        if file_type != MAGIC {
            return Err(DecodeError::NotAnMplsFile { found: file_type });
        }
        mpls.file_type = file_type;
        mpls.version = String::from_utf8_lossy(&magic[4..]).into_owned();
        if !KNOWN_VERSIONS.contains(&mpls.version.as_str()) {
            self.diag.push(Warning::UnsupportedVersion {
                version: mpls.version.clone(),
            });
        }

        mpls.play_list_start = self.r.read_u32()?;
        mpls.play_list_mark_start = self.r.read_u32()?;
        mpls.extension_data_start = self.r.read_u32()?;
        tracing::debug!(
            play_list = mpls.play_list_start,
            marks = mpls.play_list_mark_start,
            ext = mpls.extension_data_start,
            "section offsets"
        );
        // reserved
        self.r.skip(20)
    }

    fn mpls(&mut self, mpls: &mut Mpls) -> Result<()> {
        self.header(mpls)?;

        self.enter(Stage::AppInfo);
        self.app_info_play_list(&mut mpls.app_info_play_list)?;

        let play_list_start = mpls.play_list_start as usize;
        let pos = self.r.position();
        if pos != play_list_start {
            self.diag.push(Warning::Resynchronized {
                from: pos,
                to: play_list_start,
            });
            self.r.seek(SeekFrom::Start(play_list_start as u64))?;
        }

        self.enter(Stage::PlayList);
        self.play_list(&mut mpls.play_list)?;

        let mark_start = mpls.play_list_mark_start as usize;
        let pos = self.r.position();
        if pos != mark_start {
            self.diag.push(Warning::SectionOffsetMismatch {
                expected: mark_start,
                actual: pos,
            });
        }

        if pos == mark_start && mark_start != 0 && mark_start.saturating_add(4) <= self.r.len() {
            self.enter(Stage::Marks);
            self.marks(&mut mpls.marks);
        }

        self.enter(Stage::Done);
        Ok(())
    }
}
