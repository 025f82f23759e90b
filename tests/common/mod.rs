//! Builders for synthetic MPLS files.
#![allow(dead_code)]

pub const TICKS: i32 = 45_000;

pub fn video_stream(pid: u16) -> Vec<u8> {
    let mut v = vec![0x03, 0x01];
    v.extend_from_slice(&pid.to_be_bytes());
    v.extend_from_slice(&[0x05, 0x1B, 0x61, 0x00, 0x00, 0x00]);
    v
}

pub fn audio_stream(pid: u16, lang: &[u8; 3]) -> Vec<u8> {
    let mut v = vec![0x03, 0x01];
    v.extend_from_slice(&pid.to_be_bytes());
    v.extend_from_slice(&[0x05, 0x86, 0x61]);
    v.extend_from_slice(lang);
    v
}

pub fn pg_stream(pid: u16, lang: &[u8; 3]) -> Vec<u8> {
    let mut v = vec![0x03, 0x01];
    v.extend_from_slice(&pid.to_be_bytes());
    v.extend_from_slice(&[0x05, 0x90]);
    v.extend_from_slice(lang);
    v.push(0x00);
    v
}

/// One PlayItem or SubPlayItem.
pub struct Item {
    name: String,
    codec: String,
    in_time: i32,
    out_time: i32,
    angles: Vec<String>,
    sync: Option<(u16, u32)>,
    // video, audio, pg, ig
    streams: [Vec<Vec<u8>>; 4],
}

pub fn item(name: &str, in_time: i32, out_time: i32) -> Item {
    Item {
        name: name.into(),
        codec: "M2TS".into(),
        in_time,
        out_time,
        angles: Vec::new(),
        sync: None,
        streams: Default::default(),
    }
}

impl Item {
    pub fn codec(mut self, codec: &str) -> Self {
        self.codec = codec.into();
        self
    }

    pub fn angle(mut self, name: &str) -> Self {
        self.angles.push(name.into());
        self
    }

    pub fn sync(mut self, play_item_id: u16, start: u32) -> Self {
        self.sync = Some((play_item_id, start));
        self
    }

    pub fn video(mut self, stream: Vec<u8>) -> Self {
        self.streams[0].push(stream);
        self
    }

    pub fn audio(mut self, stream: Vec<u8>) -> Self {
        self.streams[1].push(stream);
        self
    }

    pub fn pg(mut self, stream: Vec<u8>) -> Self {
        self.streams[2].push(stream);
        self
    }

    fn stream_number_table(&self) -> Vec<u8> {
        let mut body = vec![0x00, 0x00];
        for list in self.streams.iter() {
            body.push(list.len() as u8);
        }
        body.extend_from_slice(&[0, 0, 0]);
        body.extend_from_slice(&[0; 5]);
        for stream in self.streams.iter().flatten() {
            body.extend_from_slice(stream);
        }

        let mut v = (body.len() as u16).to_be_bytes().to_vec();
        v.extend(body);
        v
    }

    pub fn encode(&self) -> Vec<u8> {
        let multi_angle = !self.angles.is_empty();
        let mut body = self.name.as_bytes().to_vec();
        body.extend_from_slice(self.codec.as_bytes());
        let flags: u16 = if multi_angle { 1 << 3 } else { 0 };
        body.extend_from_slice(&flags.to_be_bytes());
        body.push(0x00);
        body.extend_from_slice(&self.in_time.to_be_bytes());
        body.extend_from_slice(&self.out_time.to_be_bytes());
        body.extend_from_slice(&[0; 8]);
        body.extend_from_slice(&[0x00, 0x00]);
        if let Some((id, start)) = self.sync {
            body.extend_from_slice(&id.to_be_bytes());
            body.extend_from_slice(&start.to_be_bytes());
        }
        if multi_angle {
            body.push(self.angles.len() as u8);
            body.push(0x00);
            for angle in self.angles.iter() {
                body.extend_from_slice(angle.as_bytes());
                body.extend_from_slice(b"M2TS");
                body.push(0x00);
            }
        }
        body.extend(self.stream_number_table());

        let mut v = (body.len() as u16).to_be_bytes().to_vec();
        v.extend(body);
        v
    }
}

pub fn sub_path(sub_path_type: u8, items: &[Item]) -> Vec<u8> {
    let mut body = vec![sub_path_type, 0x00, 0x00, 0x00, items.len() as u8];
    for item in items {
        body.extend(item.encode());
    }
    let mut v = (body.len() as u32).to_be_bytes().to_vec();
    v.extend(body);
    v
}

/// A whole MPLS file: header, AppInfoPlayList, PlayList and, if any marks
/// were added, a PlayListMark section.
pub struct MplsBuilder {
    version: [u8; 4],
    play_items: Vec<Item>,
    sub_paths: Vec<Vec<u8>>,
    marks: Vec<(u8, u16, i32)>,
}

impl MplsBuilder {
    pub fn new() -> Self {
        MplsBuilder {
            version: *b"0200",
            play_items: Vec::new(),
            sub_paths: Vec::new(),
            marks: Vec::new(),
        }
    }

    pub fn version(mut self, version: &[u8; 4]) -> Self {
        self.version = *version;
        self
    }

    pub fn play_item(mut self, item: Item) -> Self {
        self.play_items.push(item);
        self
    }

    pub fn sub_path(mut self, sub_path: Vec<u8>) -> Self {
        self.sub_paths.push(sub_path);
        self
    }

    pub fn chapter(mut self, play_item: u16, time: i32) -> Self {
        self.marks.push((0x01, play_item, time));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut play_list = vec![0x00, 0x00];
        play_list.extend_from_slice(&(self.play_items.len() as u16).to_be_bytes());
        play_list.extend_from_slice(&(self.sub_paths.len() as u16).to_be_bytes());
        for item in self.play_items.iter() {
            play_list.extend(item.encode());
        }
        for sub_path in self.sub_paths.iter() {
            play_list.extend_from_slice(sub_path);
        }

        let play_list_start: u32 = 40 + 4 + 14;
        let mark_start = play_list_start + 4 + play_list.len() as u32;

        let mut v = b"MPLS".to_vec();
        v.extend_from_slice(&self.version);
        v.extend_from_slice(&play_list_start.to_be_bytes());
        v.extend_from_slice(&mark_start.to_be_bytes());
        v.extend_from_slice(&0u32.to_be_bytes());
        v.extend_from_slice(&[0; 20]);

        // AppInfoPlayList
        v.extend_from_slice(&14u32.to_be_bytes());
        v.extend_from_slice(&[0x00, 0x01, 0x00, 0x00]);
        v.extend_from_slice(&[0; 8]);
        v.extend_from_slice(&[0x40, 0x00]);

        v.extend_from_slice(&(play_list.len() as u32).to_be_bytes());
        v.extend(play_list);

        if !self.marks.is_empty() {
            let len = 2 + 14 * self.marks.len() as u32;
            v.extend_from_slice(&len.to_be_bytes());
            v.extend_from_slice(&(self.marks.len() as u16).to_be_bytes());
            for (mark_type, play_item, time) in self.marks.iter() {
                v.push(0x00);
                v.push(*mark_type);
                v.extend_from_slice(&play_item.to_be_bytes());
                v.extend_from_slice(&time.to_be_bytes());
                v.extend_from_slice(&[0xFF, 0xFF]);
                v.extend_from_slice(&0u32.to_be_bytes());
            }
        }
        v
    }
}
