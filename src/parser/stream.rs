use super::{Decoder, Result};
use crate::diagnostics::{Record, Warning};
use crate::types::{
    AudioFormat, CharacterCode, CodingType, ColorSpace, DynamicRange, FrameRate,
    FrameRateFraction, PrimaryStream, SampleRate, SecondaryAudioStream, SecondaryStream,
    SecondaryVideoStream, StreamAttributes, StreamEntry, StreamEntryRef, StreamNumberTable,
    StreamRef, StreamType, SubClipRef, SubPathRef, VideoFormat,
};

fn video_format(n: u8) -> (VideoFormat, FrameRate) {
    let video_format = match (n & 0xF0) >> 4 {
        0x1 => VideoFormat::Interlaced480,
        0x2 => VideoFormat::Interlaced576,
        0x3 => VideoFormat::Progressive480,
        0x4 => VideoFormat::Interlaced1080,
        0x5 => VideoFormat::Progressive720,
        0x6 => VideoFormat::Progressive1080,
        0x7 => VideoFormat::Progressive576,
        0x8 => VideoFormat::Progressive2160,
        _ => VideoFormat::Unknown,
    };
    let fraction = |numerator, denominator| {
        Some(FrameRateFraction {
            numerator,
            denominator,
        })
    };
    let frame_rate = match n & 0x0F {
        0x1 => fraction(24_000, 1_001),
        0x2 => fraction(24, 1),
        0x3 => fraction(25, 1),
        0x4 => fraction(30_000, 1_001),
        0x6 => fraction(50, 1),
        0x7 => fraction(60_000, 1_001),
        _ => None,
    };
    (video_format, frame_rate)
}

fn dyn_range_col_space(n: u8) -> (DynamicRange, ColorSpace) {
    let dyn_range = match (n & 0xF0) >> 4 {
        0x0 => DynamicRange::Sdr,
        0x1 => DynamicRange::Hdr10,
        0x2 => DynamicRange::DolbyVision,
        _ => DynamicRange::Unknown,
    };
    let color_space = match n & 0x0F {
        0x1 => ColorSpace::BT709,
        0x2 => ColorSpace::BT2020,
        _ => ColorSpace::Unknown,
    };
    (dyn_range, color_space)
}

fn audio_format(n: u8) -> (AudioFormat, SampleRate) {
    let audio_format = match (n & 0xF0) >> 4 {
        0x1 => AudioFormat::Mono,
        0x2 => AudioFormat::DualMono,
        0x3 => AudioFormat::Stereo,
        0x6 => AudioFormat::Multichannel,
        0xC => AudioFormat::StereoAndMultichannel,
        _ => AudioFormat::Unknown,
    };
    let sample_rate = match n & 0x0F {
        0x1 => SampleRate::One(48_000),
        0x4 => SampleRate::One(96_000),
        0x5 => SampleRate::One(192_000),
        0xC => SampleRate::Two(48_000, 192_000),
        0xE => SampleRate::Two(48_000, 96_000),
        _ => SampleRate::Unknown,
    };
    (audio_format, sample_rate)
}

fn char_code(n: u8) -> CharacterCode {
    match n {
        0x1 => CharacterCode::Utf8,
        0x2 => CharacterCode::Utf16BE,
        0x3 => CharacterCode::ShiftJIS,
        0x4 => CharacterCode::EucKr,
        0x5 => CharacterCode::Gb18030,
        0x6 => CharacterCode::EucCn,
        0x7 => CharacterCode::Big5,
        _ => CharacterCode::Unknown,
    }
}

impl Decoder<'_> {
    pub(crate) fn stream_entry(&mut self, entry: &mut StreamEntry) -> Result<()> {
        entry.len = self.r.read_u8()?;
        let start = self.r.position();
        entry.stream_type = self.r.read_u8()?;
        entry.refs = match entry.stream_type {
            0x1 => StreamEntryRef::PlayItem {
                pid: StreamRef(self.r.read_u16()?),
            },
            0x2 | 0x4 => {
                let sub_path = SubPathRef(self.r.read_u8()?);
                let sub_clip = SubClipRef(self.r.read_u8()?);
                let pid = StreamRef(self.r.read_u16()?);
                StreamEntryRef::SubPathClip {
                    sub_path,
                    sub_clip,
                    pid,
                }
            }
            0x3 => {
                let sub_path = SubPathRef(self.r.read_u8()?);
                let pid = StreamRef(self.r.read_u16()?);
                StreamEntryRef::SubPath { sub_path, pid }
            }
            _ => StreamEntryRef::Unknown,
        };
        self.check_alignment(Record::StreamEntry, start, entry.len as usize);
        Ok(())
    }

    pub(crate) fn stream_attrs(&mut self, attrs: &mut StreamAttributes) -> Result<()> {
        attrs.len = self.r.read_u8()?;
        let start = self.r.position();
        let coding_type = self.r.read_u8()?;
        attrs.coding_type = CodingType::from(coding_type);
        attrs.stream_type = match attrs.coding_type {
            CodingType::Mpeg1Video | CodingType::Mpeg2Video | CodingType::Vc1 | CodingType::H264 => {
                let (v, f) = video_format(self.r.read_u8()?);
                self.r.skip(3)?;
                StreamType::SdrVideo(v, f)
            }
            CodingType::Hevc => {
                let (v, f) = video_format(self.r.read_u8()?);
                let (d, c) = dyn_range_col_space(self.r.read_u8()?);
                self.r.skip(2)?;
                StreamType::HdrVideo(v, f, d, c)
            }
            CodingType::Mpeg1Audio
            | CodingType::Mpeg2Audio
            | CodingType::Lpcm
            | CodingType::Ac3
            | CodingType::Dts
            | CodingType::TrueHd
            | CodingType::Ac3Plus
            | CodingType::DtsHd
            | CodingType::DtsHdMaster
            | CodingType::Ac3PlusSecondary
            | CodingType::DtsHdSecondary => {
                let (a, s) = audio_format(self.r.read_u8()?);
                let lang = self.r.read_string(3)?;
                StreamType::Audio(a, s, lang)
            }
            CodingType::PresentationGraphics | CodingType::InteractiveGraphics => {
                let lang = self.r.read_string(3)?;
                self.r.skip(1)?;
                StreamType::Graphics(lang)
            }
            CodingType::TextSubtitle => {
                let c = char_code(self.r.read_u8()?);
                let lang = self.r.read_string(3)?;
                StreamType::Text(lang, c)
            }
            CodingType::Unknown(_) => {
                self.diag.push(Warning::UnknownEncoding {
                    offset: start,
                    coding_type,
                });
                StreamType::Unknown
            }
        };
        self.check_alignment(Record::StreamAttributes, start, attrs.len as usize);
        Ok(())
    }

    pub(crate) fn primary_stream(&mut self, stream: &mut PrimaryStream) -> Result<()> {
        self.stream_entry(&mut stream.entry)?;
        self.stream_attrs(&mut stream.attrs)
    }

    // the reference ids are padded to an even count
    pub(crate) fn secondary_stream(&mut self, stream: &mut SecondaryStream) -> Result<()> {
        stream.ref_count = self.r.read_u8()?;
        stream.ref_ids = self.r.read_exact(stream.ref_count as usize)?.to_vec();
        if stream.ref_count % 2 != 0 {
            self.r.skip(1)?;
        }
        Ok(())
    }

    pub(crate) fn secondary_audio_stream(&mut self, stream: &mut SecondaryAudioStream) -> Result<()> {
        self.primary_stream(&mut stream.stream)?;
        self.secondary_stream(&mut stream.extra)
    }

    pub(crate) fn secondary_video_stream(&mut self, stream: &mut SecondaryVideoStream) -> Result<()> {
        self.primary_stream(&mut stream.stream)?;
        self.secondary_stream(&mut stream.extra)?;
        self.secondary_stream(&mut stream.pip)
    }

    pub(crate) fn stream_number_table(&mut self, stn: &mut StreamNumberTable) -> Result<()> {
        stn.len = self.r.read_u16()?;
        let start = self.r.position();
        tracing::trace!(offset = start, len = stn.len, "STN table");
        self.r.skip(2)?;

        let counts = &mut stn.counts;
        counts.primary_video = self.r.read_u8()?;
        counts.primary_audio = self.r.read_u8()?;
        counts.primary_pg = self.r.read_u8()?;
        counts.primary_ig = self.r.read_u8()?;
        counts.secondary_audio = self.r.read_u8()?;
        counts.secondary_video = self.r.read_u8()?;
        counts.pip_pg = self.r.read_u8()?;
        self.r.skip(5)?;

        let counts = stn.counts;
        self.sequence(
            &mut stn.primary_video_streams,
            counts.primary_video as usize,
            Self::primary_stream,
        )?;
        self.sequence(
            &mut stn.primary_audio_streams,
            counts.primary_audio as usize,
            Self::primary_stream,
        )?;
        self.sequence(
            &mut stn.primary_pg_streams,
            counts.primary_pg as usize,
            Self::primary_stream,
        )?;
        self.sequence(
            &mut stn.primary_ig_streams,
            counts.primary_ig as usize,
            Self::primary_stream,
        )?;
        self.sequence(
            &mut stn.secondary_audio_streams,
            counts.secondary_audio as usize,
            Self::secondary_audio_stream,
        )?;
        self.sequence(
            &mut stn.secondary_video_streams,
            counts.secondary_video as usize,
            Self::secondary_video_stream,
        )?;
        // pip_pg has no stream list of its own

        self.check_alignment(Record::StreamNumberTable, start, stn.len as usize);
        Ok(())
    }
}
