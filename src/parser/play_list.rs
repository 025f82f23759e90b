use super::{Decoder, Result};
use crate::diagnostics::Record;
use crate::types::{PlayList, SubPath, SubPathType};

impl Decoder<'_> {
    pub(crate) fn sub_path(&mut self, sub_path: &mut SubPath) -> Result<()> {
        sub_path.len = self.r.read_u32()?;
        let start = self.r.position();
        sub_path.sub_path_type = SubPathType::from(self.r.read_u8()?);
        sub_path.flags = self.r.read_u16()?;
        self.r.skip(1)?;
        sub_path.play_item_count = self.r.read_u8()?;

        self.sequence(
            &mut sub_path.play_items,
            sub_path.play_item_count as usize,
            Self::sub_play_item,
        )?;

        self.check_alignment(Record::SubPath, start, sub_path.len as usize);
        Ok(())
    }

    pub(crate) fn play_list(&mut self, play_list: &mut PlayList) -> Result<()> {
        play_list.len = self.r.read_u32()?;
        let start = self.r.position();
        self.r.skip(2)?;
        play_list.play_item_count = self.r.read_u16()?;
        play_list.sub_path_count = self.r.read_u16()?;
        tracing::debug!(
            play_items = play_list.play_item_count,
            sub_paths = play_list.sub_path_count,
            "PlayList"
        );

        self.sequence(
            &mut play_list.play_items,
            play_list.play_item_count as usize,
            Self::play_item,
        )?;
        self.sequence(
            &mut play_list.sub_paths,
            play_list.sub_path_count as usize,
            Self::sub_path,
        )?;

        self.check_alignment(Record::PlayList, start, play_list.len as usize);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::diagnostics::{Record, Warning};
    use crate::parser::Decoder;
    use crate::types::*;

    const EMPTY_STN: [u8; 16] = [0, 14, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];

    fn item(name: &[u8; 5], sync: bool) -> Vec<u8> {
        let mut body = name.to_vec();
        body.extend_from_slice(b"M2TS");
        body.extend_from_slice(&[0x00, 0x00, 0x00]);
        body.extend_from_slice(&0i32.to_be_bytes());
        body.extend_from_slice(&45_000i32.to_be_bytes());
        body.extend_from_slice(&[0; 8]);
        body.extend_from_slice(&[0x00, 0x00]);
        if sync {
            body.extend_from_slice(&[0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
        }
        body.extend_from_slice(&EMPTY_STN);

        let mut v = (body.len() as u16).to_be_bytes().to_vec();
        v.extend(body);
        v
    }

    #[test]
    fn play_items_then_sub_paths() {
        let mut sub_path_body = vec![0x05, 0x00, 0x01, 0x00, 0x01];
        sub_path_body.extend(item(b"00100", true));
        let mut sub_path = (sub_path_body.len() as u32).to_be_bytes().to_vec();
        sub_path.extend(sub_path_body);

        let mut body = vec![0x00, 0x00, 0x00, 0x02, 0x00, 0x01];
        body.extend(item(b"00055", false));
        body.extend(item(b"00059", false));
        body.extend(sub_path);
        let mut data = (body.len() as u32).to_be_bytes().to_vec();
        data.extend(body);

        let mut d = Decoder::new(&data);
        let mut play_list = PlayList::default();
        d.play_list(&mut play_list).unwrap();

        assert_eq!(play_list.play_item_count, 2);
        assert_eq!(play_list.sub_path_count, 1);
        let names: Vec<&str> = play_list
            .play_items
            .iter()
            .map(|p| p.clip.file_name.as_str())
            .collect();
        assert_eq!(names, &["00055", "00059"]);

        let sub_path = &play_list.sub_paths[0];
        assert_eq!(sub_path.sub_path_type, SubPathType::OutOfMuxSynchronous);
        assert!(sub_path.is_repeat());
        assert_eq!(sub_path.play_item_count, 1);
        assert_eq!(sub_path.play_items[0].item.clip.file_name, "00100");

        assert_eq!(d.r.position(), data.len());
        assert!(d.diag.is_empty());
    }

    #[test]
    fn sub_path_length_drift() {
        let mut data = 4u32.to_be_bytes().to_vec();
        data.extend_from_slice(&[0x02, 0x00, 0x00, 0x00, 0x00]);

        let mut d = Decoder::new(&data);
        let mut sub_path = SubPath::default();
        d.sub_path(&mut sub_path).unwrap();

        assert_eq!(sub_path.sub_path_type, SubPathType::PrimaryAudioSlideshow);
        assert_eq!(
            d.diag.warnings(),
            &[Warning::AlignmentDrift {
                record: Record::SubPath,
                start: 4,
                expected: 8,
                actual: 9,
            }]
        );
    }

    #[test]
    fn truncated_play_item_is_kept() {
        let mut body = vec![0x00, 0x00, 0x00, 0x02, 0x00, 0x00];
        body.extend(item(b"00055", false));
        let second = item(b"00059", false);
        body.extend_from_slice(&second[..12]);
        let mut data = (body.len() as u32).to_be_bytes().to_vec();
        data.extend(body);

        let mut d = Decoder::new(&data);
        let mut play_list = PlayList::default();

        assert!(d.play_list(&mut play_list).is_err());
        assert_eq!(play_list.play_items.len(), 2);
        assert_eq!(play_list.play_items[1].clip.file_name, "00059");
        assert_eq!(play_list.play_items[1].clip.stc_id, None);
    }
}
