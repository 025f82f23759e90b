use super::{Decoder, Result};
use crate::diagnostics::Record;
use crate::types::{AppInfoPlayList, PlayListFlags, PlaybackType, UserOperations};

impl Decoder<'_> {
    pub(crate) fn app_info_play_list(&mut self, app_info: &mut AppInfoPlayList) -> Result<()> {
        app_info.len = self.r.read_u32()?;
        let start = self.r.position();
        self.r.skip(1)?;
        app_info.playback_type = PlaybackType::from(self.r.read_u8()?);
        app_info.playback_count = self.r.read_u16()?;
        app_info.user_opt_mask = UserOperations(self.r.read_u64()?);
        app_info.flags = PlayListFlags(self.r.read_u16()?);

        self.check_alignment(Record::AppInfoPlayList, start, app_info.len as usize);
        Ok(())
    }
}
