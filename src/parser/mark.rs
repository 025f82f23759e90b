use super::{Decoder, Result};
use crate::diagnostics::{Record, Warning};
use crate::types::{MarkType, PlayItemRef, PlayListMark, TimeStamp};

impl Decoder<'_> {
    fn play_list_mark(&mut self) -> Result<PlayListMark> {
        self.r.skip(1)?;
        let mark_type = MarkType::from(self.r.read_u8()?);
        let play_item = PlayItemRef(self.r.read_u16()?);
        let time_stamp = TimeStamp(self.r.read_i32()?);
        let entry_es_pid = self.r.read_u16()?;
        let duration = match self.r.read_i32()? {
            0 => None,
            t => Some(TimeStamp(t)),
        };
        Ok(PlayListMark {
            mark_type,
            play_item,
            time_stamp,
            entry_es_pid,
            duration,
        })
    }

    /// Decodes the mark section into `marks`. A fault inside it rewinds the
    /// reader and is reported as a warning, leaving `marks` untouched.
    pub(crate) fn marks(&mut self, marks: &mut Vec<PlayListMark>) {
        let saved = self.r.clone();
        let offset = self.r.position();
        let mut decoded = Vec::new();
        match self.play_list_marks(&mut decoded) {
            Ok(()) => *marks = decoded,
            Err(error) => {
                self.r = saved;
                self.diag.push(Warning::MarksSkipped { offset, error });
            }
        }
    }

    pub(crate) fn play_list_marks(&mut self, marks: &mut Vec<PlayListMark>) -> Result<()> {
        let len = self.r.read_u32()?;
        let start = self.r.position();
        let count = self.r.read_u16()?;
        tracing::debug!(count, "PlayListMark");

        marks.reserve(count as usize);
        for _ in 0..count {
            marks.push(self.play_list_mark()?);
        }

        self.check_alignment(Record::PlayListMark, start, len as usize);
        Ok(())
    }
}
