use crate::error::DecodeError;
use nom::{
    bytes::complete::take,
    number::complete::{be_i32, be_u16, be_u32, be_u64, be_u8},
    IResult,
};
use std::io::SeekFrom;

/// A sequential reader over an in-memory MPLS buffer.
///
/// The reader is error-sticky: after the first failed operation it keeps
/// the error and every later call returns it again without touching the
/// position. Decoders can therefore chain reads with `?` and inspect
/// [`error`] once at the end.
///
/// [`error`]: #method.error
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
    poison: Option<DecodeError>,
}

impl<'a> Reader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Reader {
            data,
            pos: 0,
            poison: None,
        }
    }

    /// The current absolute offset into the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    /// The error this reader was poisoned with, if any.
    pub fn error(&self) -> Option<&DecodeError> {
        self.poison.as_ref()
    }

    fn check(&self) -> Result<(), DecodeError> {
        match &self.poison {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    fn fail(&mut self, err: DecodeError) -> DecodeError {
        self.poison = Some(err.clone());
        err
    }

    // Runs a nom parser over the unread input and advances past whatever it
    // consumed. `wanted` is only used to describe a failure.
    fn parse<T, F>(&mut self, wanted: usize, parser: F) -> Result<T, DecodeError>
    where
        F: FnOnce(&'a [u8]) -> IResult<&'a [u8], T>,
    {
        self.check()?;
        let data: &'a [u8] = self.data;
        let input = &data[self.pos..];
        match parser(input) {
            Ok((rest, value)) => {
                self.pos += input.len() - rest.len();
                Ok(value)
            }
            Err(_) => Err(self.fail(DecodeError::Truncated {
                offset: self.pos,
                wanted,
                available: input.len(),
            })),
        }
    }

    /// Returns the next `n` bytes.
    pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        self.parse(n, take(n))
    }

    /// Reads `n` bytes as a string. Bytes that are not valid UTF-8 are
    /// replaced rather than rejected.
    pub fn read_string(&mut self, n: usize) -> Result<String, DecodeError> {
        let bytes = self.read_exact(n)?;
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        self.parse(1, be_u8)
    }

    pub fn read_u16(&mut self) -> Result<u16, DecodeError> {
        self.parse(2, be_u16)
    }

    pub fn read_u32(&mut self) -> Result<u32, DecodeError> {
        self.parse(4, be_u32)
    }

    pub fn read_i32(&mut self) -> Result<i32, DecodeError> {
        self.parse(4, be_i32)
    }

    pub fn read_u64(&mut self) -> Result<u64, DecodeError> {
        self.parse(8, be_u64)
    }

    /// Moves the cursor and returns the new absolute position.
    ///
    /// Seeking to exactly the end of the buffer is allowed, anything beyond
    /// it (or before the start) poisons the reader.
    pub fn seek(&mut self, pos: SeekFrom) -> Result<usize, DecodeError> {
        self.check()?;
        let target: i128 = match pos {
            SeekFrom::Start(n) => n as i128,
            SeekFrom::Current(n) => self.pos as i128 + n as i128,
            SeekFrom::End(n) => self.data.len() as i128 + n as i128,
        };
        if target < 0 || target > self.data.len() as i128 {
            return Err(self.fail(DecodeError::SeekOutOfRange {
                target,
                len: self.data.len(),
            }));
        }
        self.pos = target as usize;
        Ok(self.pos)
    }

    /// Skips `n` reserved bytes.
    ///
    /// Unlike a bare [`seek`], running out of input here is reported as
    /// truncation since the skipped bytes belong to a mandatory field.
    ///
    /// [`seek`]: #method.seek
    pub fn skip(&mut self, n: usize) -> Result<(), DecodeError> {
        self.read_exact(n).map(|_| ())
    }
}
