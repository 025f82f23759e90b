use crate::error::MplsError;
use crate::parser::decode;
use std::{
    fmt::{Debug, Display},
    io::Read,
    time::Duration,
};

/// The movie playlist.
///
/// See the [crate-level docs] for high-level documentation about how to use this type.
///
/// [crate-level docs]: ../index.html
#[derive(Debug, Clone, Default)]
pub struct Mpls {
    /// The file type tag, always `"MPLS"` for a successfully decoded file.
    pub file_type: String,
    /// The format version, e.g. `"0200"` or `"0300"`.
    pub version: String,
    pub play_list_start: u32,
    pub play_list_mark_start: u32,
    pub extension_data_start: u32,
    pub app_info_play_list: AppInfoPlayList,
    pub play_list: PlayList,
    /// Chapter and link marks. Empty if the file has no mark section.
    pub marks: Vec<PlayListMark>,
}

/// Represents a playlist's angle.
///
/// "Angles", as they are called, are just a variation of a playlist where one
/// or more segments are swapped out for different ones. The overall number of
/// segments, however, is always the same for all angles.
///
/// You can use the [`segments`] method to retrieve the playlist segments
/// associated with this angle.
///
/// [`segments`]: #method.segments
#[derive(Copy, Clone, Debug)]
pub struct Angle<'mpls> {
    /// The angle index in this playlist.
    pub index: u8,
    mpls: &'mpls Mpls,
}

impl Display for Angle<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.index)
    }
}

impl Mpls {
    /// Attempts to parse a movie playlist from the given reader.
    ///
    /// Warnings raised along the way are logged through `tracing` and then
    /// dropped; use [`decode`] to keep them.
    ///
    /// [`decode`]: ../fn.decode.html
    ///
    /// # Examples
    /// ```no_run
    /// # fn main() -> std::io::Result<()> {
    /// use std::fs::File;
    /// use mpls_inspect::Mpls;
    ///
    /// let file = File::open("00800.mpls")?;
    /// let mpls = Mpls::from(file).expect("failed to parse MPLS file.");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from<R: Read>(mut reader: R) -> Result<Mpls, MplsError> {
        let bytes = {
            let mut buffer = Vec::new();
            reader.read_to_end(&mut buffer)?;
            buffer
        };

        Mpls::parse(&bytes)
    }

    /// Parses a movie playlist from an in-memory buffer.
    pub fn parse(bytes: &[u8]) -> Result<Mpls, MplsError> {
        decode(bytes).map(|d| d.mpls).map_err(MplsError::from)
    }

    /// Gets all of the movie's angles.
    ///
    /// This method will always return at least one element if the playlist
    /// has any play items, since it counts the main feature as an angle
    /// regardless of whether the movie contains any additional angles.
    pub fn angles(&self) -> Vec<Angle> {
        self.play_list
            .play_items
            .iter()
            .map(|p| p.angles.len() + 1)
            .max()
            .map(|n| {
                (0..n)
                    .map(|i| Angle {
                        index: i as u8,
                        mpls: self,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The playback duration of the main path, summed over all play items.
    pub fn duration(&self) -> Duration {
        self.play_list.play_items.iter().map(PlayItem::duration).sum()
    }

    /// The clip file names of the main angle, in playback order.
    pub fn segment_map(&self) -> Vec<&str> {
        self.play_list
            .play_items
            .iter()
            .map(|p| p.clip.file_name.as_str())
            .collect()
    }

    /// Whether any play item, angle or sub path refers to the given clip
    /// file name (e.g. `"00055"`).
    pub fn references_clip(&self, file_name: &str) -> bool {
        let main = self
            .play_list
            .play_items
            .iter()
            .flat_map(|p| p.clips());
        let sub = self
            .play_list
            .sub_paths
            .iter()
            .flat_map(|s| s.play_items.iter())
            .flat_map(|s| s.item.clips());
        main.chain(sub).any(|c| c.file_name == file_name)
    }

    /// The entry-point marks, i.e. the playlist's chapters.
    pub fn chapters(&self) -> Vec<&PlayListMark> {
        self.marks
            .iter()
            .filter(|m| matches!(m.mark_type, MarkType::EntryPoint))
            .collect()
    }
}

impl Angle<'_> {
    /// Gets all segments for this angle.
    pub fn segments(&self) -> Vec<&Clip> {
        let play_items = &self.mpls.play_list.play_items;
        let mut clips: Vec<&Clip> = Vec::with_capacity(play_items.len());
        for play_item in play_items.iter() {
            let clip = play_item.clip_for_angle(self);
            clips.push(clip);
        }
        clips
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum PlaybackType {
    #[default]
    Standard,
    Random,
    Shuffle,
    Unknown(u8),
}

impl From<u8> for PlaybackType {
    fn from(n: u8) -> Self {
        match n {
            0x1 => PlaybackType::Standard,
            0x2 => PlaybackType::Random,
            0x3 => PlaybackType::Shuffle,
            n => PlaybackType::Unknown(n),
        }
    }
}

#[derive(Debug, Copy, Clone, Default)]
pub struct AppInfoPlayList {
    pub len: u32,
    pub playback_type: PlaybackType,
    pub playback_count: u16,
    pub user_opt_mask: UserOperations,
    pub flags: PlayListFlags,
}

/// A remote-control operation that a disc can forbid during playback.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UserOperation {
    ChapterSearch = 0,
    TimeSearch,
    SkipToNextPoint,
    SkipBackToPreviousPoint,
    ForwardPlay,
    BackwardPlay,
    Play,
    Stop,
    PauseOn,
    PauseOff,
    StillOff,
    Resume,
    MoveUpSelectedButton,
    MoveDownSelectedButton,
    MoveLeftSelectedButton,
    MoveRightSelectedButton,
    SelectButton,
    ActivateButton,
    SelectAndActivate,
    AudioChange,
    PgTextstChange,
    AngleChange,
    PopupOn,
    PopupOff,
    SelectMenuLanguage,
}

/// The user-operation mask. A set bit means the operation is masked.
#[derive(Copy, Clone, Default, PartialEq, Eq)]
pub struct UserOperations(pub u64);

impl UserOperations {
    pub fn is_masked(&self, op: UserOperation) -> bool {
        self.0 & (1 << op as u64) != 0
    }
}

impl Debug for UserOperations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "UserOperations({:#018x})", self.0)
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct PlayListFlags(pub u16);

impl PlayListFlags {
    pub fn is_random_access(&self) -> bool {
        self.0 & 0x1 != 0
    }

    pub fn is_audio_mix_app(&self) -> bool {
        self.0 & 0x2 != 0
    }

    pub fn lossless_may_bypass_mixer(&self) -> bool {
        self.0 & 0x4 != 0
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlayList {
    pub len: u32,
    pub play_item_count: u16,
    pub sub_path_count: u16,
    pub play_items: Vec<PlayItem>,
    pub sub_paths: Vec<SubPath>,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum StillMode {
    #[default]
    None,
    Timed,
    Infinite,
    Unknown(u8),
}

impl StillMode {
    /// Whether this mode is followed by a still time on the wire.
    ///
    /// Every non-zero mode carries the field, but only [`StillMode::Timed`]
    /// (0x01) gives it a meaningful value; for `Infinite` it is ignored.
    pub fn has_still_time(&self) -> bool {
        !matches!(self, StillMode::None)
    }
}

impl From<u8> for StillMode {
    fn from(n: u8) -> Self {
        match n {
            0x0 => StillMode::None,
            0x1 => StillMode::Timed,
            0x2 => StillMode::Infinite,
            n => StillMode::Unknown(n),
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct AngleFlags(pub u8);

impl AngleFlags {
    pub fn is_different_audios(&self) -> bool {
        self.0 & 0x2 != 0
    }

    pub fn is_seamless_angle_change(&self) -> bool {
        self.0 & 0x1 != 0
    }
}

/// One entry of the main path (or, wrapped in a [`SubPlayItem`], of a sub path).
///
/// [`SubPlayItem`]: struct.SubPlayItem.html
#[derive(Debug, Clone, Default)]
pub struct PlayItem {
    pub len: u16,
    pub clip: Clip,
    pub flags: u16,
    pub in_time: TimeStamp,
    pub out_time: TimeStamp,
    pub user_opt_mask: UserOperations,
    pub random_access_flag: u8,
    pub still_mode: StillMode,
    pub still_time: Option<u16>,
    pub angle_count: u8,
    pub angle_flags: AngleFlags,
    pub angles: Vec<Clip>,
    pub stream_number_table: StreamNumberTable,
}

impl PlayItem {
    pub const MULTI_ANGLE: u16 = 1 << 3;

    pub fn is_multi_angle(&self) -> bool {
        self.flags & Self::MULTI_ANGLE != 0
    }

    /// The time between in and out point, or zero if the item runs backwards.
    pub fn duration(&self) -> Duration {
        let ticks = i64::from(self.out_time.0) - i64::from(self.in_time.0);
        TimeStamp::ticks_to_duration(ticks)
    }

    pub fn clip_for_angle(&self, angle: &Angle) -> &Clip {
        match angle.index {
            0 => &self.clip,
            i => {
                let idx = i.saturating_sub(1) as usize;
                match self.angles.get(idx) {
                    Some(c) => c,
                    None => &self.clip,
                }
            }
        }
    }

    /// The main clip followed by all angle clips.
    pub fn clips(&self) -> impl Iterator<Item = &Clip> {
        std::iter::once(&self.clip).chain(self.angles.iter())
    }
}

/// Where a sub play item is synchronized to the main path.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct SyncPoint {
    pub play_item_id: u16,
    pub start_of_play_item: u32,
}

#[derive(Debug, Clone, Default)]
pub struct SubPlayItem {
    pub sync: SyncPoint,
    pub item: PlayItem,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum SubPathType {
    #[default]
    Reserved,
    PrimaryAudioSlideshow,
    InteractiveGraphicsMenu,
    TextSubtitle,
    OutOfMuxSynchronous,
    OutOfMuxAsynchronousPip,
    InMuxSynchronousPip,
    StereoscopicVideo,
    Unknown(u8),
}

impl From<u8> for SubPathType {
    fn from(n: u8) -> Self {
        match n {
            0x0 | 0x1 => SubPathType::Reserved,
            0x2 => SubPathType::PrimaryAudioSlideshow,
            0x3 => SubPathType::InteractiveGraphicsMenu,
            0x4 => SubPathType::TextSubtitle,
            0x5 => SubPathType::OutOfMuxSynchronous,
            0x6 => SubPathType::OutOfMuxAsynchronousPip,
            0x7 => SubPathType::InMuxSynchronousPip,
            0x8 => SubPathType::StereoscopicVideo,
            n => SubPathType::Unknown(n),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SubPath {
    pub len: u32,
    pub sub_path_type: SubPathType,
    pub flags: u16,
    pub play_item_count: u8,
    pub play_items: Vec<SubPlayItem>,
}

impl SubPath {
    pub fn is_repeat(&self) -> bool {
        self.flags & 0x1 != 0
    }
}

/// A clip file, also known as a segment.
///
/// This identifies the playable stream file. `file_name` consists of 5 numbers
/// (e.g. "00055"), and `codec_id` of 4 letters which will usually be "M2TS" on
/// blu-rays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clip {
    pub file_name: String,
    pub codec_id: String,
    pub stc_id: Option<u8>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PlayListMark {
    pub mark_type: MarkType,
    pub play_item: PlayItemRef,
    pub time_stamp: TimeStamp,
    pub entry_es_pid: u16,
    pub duration: Option<TimeStamp>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MarkType {
    EntryPoint,
    LinkPoint,
    Unknown(u8),
}

impl From<u8> for MarkType {
    fn from(n: u8) -> Self {
        match n {
            0x1 => MarkType::EntryPoint,
            0x2 => MarkType::LinkPoint,
            n => MarkType::Unknown(n),
        }
    }
}

/// The seven stream counts that head a [`StreamNumberTable`].
///
/// [`StreamNumberTable`]: struct.StreamNumberTable.html
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct StreamCounts {
    pub primary_video: u8,
    pub primary_audio: u8,
    pub primary_pg: u8,
    pub primary_ig: u8,
    pub secondary_audio: u8,
    pub secondary_video: u8,
    /// Picture-in-picture PG streams. Counted, but no list follows for them.
    pub pip_pg: u8,
}

#[derive(Debug, Clone, Default)]
pub struct StreamNumberTable {
    pub len: u16,
    pub counts: StreamCounts,
    pub primary_video_streams: Vec<PrimaryStream>,
    pub primary_audio_streams: Vec<PrimaryStream>,
    pub primary_pg_streams: Vec<PrimaryStream>,
    pub primary_ig_streams: Vec<PrimaryStream>,
    pub secondary_audio_streams: Vec<SecondaryAudioStream>,
    pub secondary_video_streams: Vec<SecondaryVideoStream>,
}

/// A media stream within a [`Clip`].
///
/// [`Clip`]: struct.Clip.html
#[derive(Debug, Clone, Default)]
pub struct PrimaryStream {
    pub entry: StreamEntry,
    pub attrs: StreamAttributes,
}

/// A list of stream reference ids, padded to an even byte count on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecondaryStream {
    pub ref_count: u8,
    pub ref_ids: Vec<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct SecondaryAudioStream {
    pub stream: PrimaryStream,
    pub extra: SecondaryStream,
}

#[derive(Debug, Clone, Default)]
pub struct SecondaryVideoStream {
    pub stream: PrimaryStream,
    pub extra: SecondaryStream,
    pub pip: SecondaryStream,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamEntry {
    pub len: u8,
    pub stream_type: u8,
    pub refs: StreamEntryRef,
}

impl StreamEntry {
    pub fn pid(&self) -> Option<StreamRef> {
        match self.refs {
            StreamEntryRef::PlayItem { pid }
            | StreamEntryRef::SubPathClip { pid, .. }
            | StreamEntryRef::SubPath { pid, .. } => Some(pid),
            StreamEntryRef::Unknown => None,
        }
    }
}

/// Where a stream's packets are found, depending on the entry's type tag.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum StreamEntryRef {
    /// Type 1: a stream of the play item's own clip.
    PlayItem { pid: StreamRef },
    /// Types 2 and 4: a stream of a sub path's clip.
    SubPathClip {
        sub_path: SubPathRef,
        sub_clip: SubClipRef,
        pid: StreamRef,
    },
    /// Type 3: a stream of a sub path multiplexed with the main clip.
    SubPath { sub_path: SubPathRef, pid: StreamRef },
    #[default]
    Unknown,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SubPathRef(pub u8);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SubClipRef(pub u8);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PlayItemRef(pub u16);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StreamRef(pub u16);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StreamAttributes {
    pub len: u8,
    pub coding_type: CodingType,
    pub stream_type: StreamType,
}

/// The stream coding type tag of a [`StreamAttributes`] block.
///
/// [`StreamAttributes`]: struct.StreamAttributes.html
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CodingType {
    Mpeg1Video,
    Mpeg2Video,
    Vc1,
    H264,
    Hevc,
    Mpeg1Audio,
    Mpeg2Audio,
    Lpcm,
    Ac3,
    Dts,
    TrueHd,
    Ac3Plus,
    DtsHd,
    DtsHdMaster,
    Ac3PlusSecondary,
    DtsHdSecondary,
    PresentationGraphics,
    InteractiveGraphics,
    TextSubtitle,
    Unknown(u8),
}

impl Default for CodingType {
    fn default() -> Self {
        CodingType::Unknown(0)
    }
}

impl From<u8> for CodingType {
    fn from(n: u8) -> Self {
        match n {
            0x01 => CodingType::Mpeg1Video,
            0x02 => CodingType::Mpeg2Video,
            0xEA => CodingType::Vc1,
            0x1B => CodingType::H264,
            0x24 => CodingType::Hevc,
            0x03 => CodingType::Mpeg1Audio,
            0x04 => CodingType::Mpeg2Audio,
            0x80 => CodingType::Lpcm,
            0x81 => CodingType::Ac3,
            0x82 => CodingType::Dts,
            0x83 => CodingType::TrueHd,
            0x84 => CodingType::Ac3Plus,
            0x85 => CodingType::DtsHd,
            0x86 => CodingType::DtsHdMaster,
            0xA1 => CodingType::Ac3PlusSecondary,
            0xA2 => CodingType::DtsHdSecondary,
            0x90 => CodingType::PresentationGraphics,
            0x91 => CodingType::InteractiveGraphics,
            0x92 => CodingType::TextSubtitle,
            n => CodingType::Unknown(n),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum StreamType {
    SdrVideo(VideoFormat, FrameRate),
    HdrVideo(VideoFormat, FrameRate, DynamicRange, ColorSpace),
    Audio(AudioFormat, SampleRate, LanguageCode),
    Graphics(LanguageCode),
    Text(LanguageCode, CharacterCode),
    #[default]
    Unknown,
}

impl StreamType {
    pub fn language(&self) -> Option<&str> {
        match self {
            StreamType::Audio(_, _, l) | StreamType::Graphics(l) | StreamType::Text(l, _) => {
                Some(l.as_str())
            }
            _ => None,
        }
    }
}

pub type LanguageCode = String;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CharacterCode {
    Utf8,
    Utf16BE,
    ShiftJIS,
    EucKr,
    Gb18030,
    EucCn,
    Big5,
    Unknown,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AudioFormat {
    Mono,
    DualMono,
    Stereo,
    Multichannel,
    StereoAndMultichannel,
    Unknown,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SampleRate {
    One(u32),
    Two(u32, u32),
    Unknown,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VideoFormat {
    Interlaced480,
    Interlaced576,
    Interlaced1080,
    Progressive480,
    Progressive576,
    Progressive720,
    Progressive1080,
    Progressive2160,
    Unknown,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DynamicRange {
    Sdr,
    Hdr10,
    DolbyVision,
    Unknown,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ColorSpace {
    BT709,
    BT2020,
    Unknown,
}

pub type FrameRate = Option<FrameRateFraction>;

/// A video frame rate, represented as a fraction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FrameRateFraction {
    pub numerator: i32,
    pub denominator: i32,
}

impl FrameRateFraction {
    /// Returns the fraction's value as an `f64`.
    pub fn fps(&self) -> f64 {
        (self.numerator as f64) / (self.denominator as f64)
    }
}

/// A time stamp, relative to some System Time Clock sequence, expressed in 45 KHz.
///
/// To get a floating-point value in seconds, you can use the [`seconds`] method.
///
/// [`seconds`]: #method.seconds
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeStamp(pub i32);

impl TimeStamp {
    pub const TICKS_PER_SECOND: i64 = 45_000;

    /// Returns this time stamp in units of seconds.
    pub fn seconds(&self) -> f64 {
        (self.0 as f64) / (Self::TICKS_PER_SECOND as f64)
    }

    /// Converts a tick count into a `Duration`, clamping negative counts to zero.
    pub fn ticks_to_duration(ticks: i64) -> Duration {
        if ticks <= 0 {
            return Duration::ZERO;
        }
        let ticks = ticks as u64;
        let per_sec = Self::TICKS_PER_SECOND as u64;
        Duration::from_secs(ticks / per_sec)
            + Duration::from_nanos((ticks % per_sec) * 1_000_000_000 / per_sec)
    }
}

impl Debug for TimeStamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimeStamp")
            .field("raw", &self.0)
            .field("secs", &self.seconds())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(file_name: &str, in_time: i32, out_time: i32, angles: &[&str]) -> PlayItem {
        PlayItem {
            clip: Clip {
                file_name: file_name.into(),
                codec_id: "M2TS".into(),
                stc_id: Some(0),
            },
            in_time: TimeStamp(in_time),
            out_time: TimeStamp(out_time),
            angles: angles
                .iter()
                .map(|a| Clip {
                    file_name: (*a).into(),
                    codec_id: "M2TS".into(),
                    stc_id: Some(0),
                })
                .collect(),
            ..PlayItem::default()
        }
    }

    #[test]
    fn duration_sums_play_items() {
        let mut mpls = Mpls::default();
        mpls.play_list.play_items = vec![
            item("00055", 0, 45_000 * 60, &[]),
            item("00059", 90_000, 90_000 + 22_500, &[]),
        ];

        assert_eq!(mpls.duration(), Duration::from_millis(60_500));
        assert_eq!(mpls.segment_map(), vec!["00055", "00059"]);
    }

    #[test]
    fn backwards_item_counts_as_zero() {
        let p = item("00001", 1_000, 500, &[]);
        assert_eq!(p.duration(), Duration::ZERO);
    }

    #[test]
    fn angles_and_segments() {
        let mut mpls = Mpls::default();
        mpls.play_list.play_items = vec![
            item("00081", 0, 1, &[]),
            item("00082", 0, 1, &["00083", "00084"]),
            item("00086", 0, 1, &[]),
        ];

        let angles = mpls.angles();
        assert_eq!(angles.len(), 3);

        let names = |a: &Angle| -> Vec<String> {
            a.segments().iter().map(|c| c.file_name.clone()).collect()
        };
        assert_eq!(names(&angles[0]), vec!["00081", "00082", "00086"]);
        assert_eq!(names(&angles[2]), vec!["00081", "00084", "00086"]);
        assert!(mpls.references_clip("00083"));
        assert!(!mpls.references_clip("00099"));
    }

    #[test]
    fn no_play_items_no_angles() {
        assert!(Mpls::default().angles().is_empty());
    }

    #[test]
    fn user_operation_bits() {
        let mask = UserOperations(0b101);
        assert!(mask.is_masked(UserOperation::ChapterSearch));
        assert!(!mask.is_masked(UserOperation::TimeSearch));
        assert!(mask.is_masked(UserOperation::SkipToNextPoint));
    }

    #[test]
    fn chapters_are_entry_points() {
        let mark = |mark_type| PlayListMark {
            mark_type,
            play_item: PlayItemRef(0),
            time_stamp: TimeStamp(0),
            entry_es_pid: 0xFFFF,
            duration: None,
        };
        let mpls = Mpls {
            marks: vec![
                mark(MarkType::EntryPoint),
                mark(MarkType::LinkPoint),
                mark(MarkType::EntryPoint),
            ],
            ..Mpls::default()
        };
        assert_eq!(mpls.chapters().len(), 2);
    }
}
