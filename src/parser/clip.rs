use super::{Decoder, Result};
use crate::diagnostics::Warning;
use crate::types::Clip;

const CODEC_M2TS: &str = "M2TS";

impl Decoder<'_> {
    /// Reads the fixed 9-byte clip reference: a 5-character file name and a
    /// 4-character codec id. The STC id, where one follows, is left to the
    /// caller.
    pub(crate) fn clip(&mut self, clip: &mut Clip) -> Result<()> {
        let offset = self.r.position();
        clip.file_name = self.r.read_string(5)?;
        clip.codec_id = self.r.read_string(4)?;
        if clip.codec_id != CODEC_M2TS {
            self.diag.push(Warning::FormatDrift {
                offset,
                file_name: clip.file_name.clone(),
                codec_id: clip.codec_id.clone(),
            });
        }
        Ok(())
    }

    pub(crate) fn clip_with_stc_id(&mut self, clip: &mut Clip) -> Result<()> {
        self.clip(clip)?;
        clip.stc_id = Some(self.r.read_u8()?);
        Ok(())
    }
}
