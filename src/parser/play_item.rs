use super::{Decoder, Result};
use crate::diagnostics::Record;
use crate::types::{
    AngleFlags, PlayItem, StillMode, SubPlayItem, SyncPoint, TimeStamp, UserOperations,
};

impl Decoder<'_> {
    pub(crate) fn play_item(&mut self, item: &mut PlayItem) -> Result<()> {
        self.item(item, None)
    }

    pub(crate) fn sub_play_item(&mut self, sub: &mut SubPlayItem) -> Result<()> {
        self.item(&mut sub.item, Some(&mut sub.sync))
    }

    // PlayItem and SubPlayItem share one layout; a sub play item carries a
    // sync point between the still info and the angle block.
    fn item(&mut self, item: &mut PlayItem, sync: Option<&mut SyncPoint>) -> Result<()> {
        let record = if sync.is_some() {
            Record::SubPlayItem
        } else {
            Record::PlayItem
        };
        item.len = self.r.read_u16()?;
        let start = self.r.position();
        tracing::trace!(offset = start, len = item.len, "{}", record);

        self.clip(&mut item.clip)?;
        item.flags = self.r.read_u16()?;
        item.clip.stc_id = Some(self.r.read_u8()?);
        item.in_time = TimeStamp(self.r.read_i32()?);
        item.out_time = TimeStamp(self.r.read_i32()?);
        item.user_opt_mask = UserOperations(self.r.read_u64()?);
        item.random_access_flag = self.r.read_u8()?;
        item.still_mode = StillMode::from(self.r.read_u8()?);
        if item.still_mode.has_still_time() {
            item.still_time = Some(self.r.read_u16()?);
        }

        if let Some(sync) = sync {
            sync.play_item_id = self.r.read_u16()?;
            sync.start_of_play_item = self.r.read_u32()?;
        }

        if item.is_multi_angle() {
            item.angle_count = self.r.read_u8()?;
            item.angle_flags = AngleFlags(self.r.read_u8()?);
            self.sequence(
                &mut item.angles,
                item.angle_count as usize,
                Self::clip_with_stc_id,
            )?;
        }

        self.stream_number_table(&mut item.stream_number_table)?;

        self.check_alignment(record, start, item.len as usize);
        Ok(())
    }
}
