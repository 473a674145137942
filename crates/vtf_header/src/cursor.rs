//! Bounds-checked sequential reader over a finite byte source
//!

use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Read, Seek, SeekFrom};

use crate::error::{Error, Result};

/// Little-endian cursor over a seekable stream.
///
/// The stream length is captured once at construction so every read and skip can be
/// bounds-checked up front, turning short reads into [`Error::TruncatedInput`] instead of
/// bare IO errors. Only forward movement is supported.
pub struct ByteCursor<R> {
    reader: R,
    position: u64,
    length: u64,
}

impl<R: Read + Seek> ByteCursor<R> {
    /// Wrap a stream, measuring its length and rewinding to the start.
    pub fn new(mut reader: R) -> Result<ByteCursor<R>> {
        let length = reader.seek(SeekFrom::End(0))?;
        reader.seek(SeekFrom::Start(0))?;

        Ok(ByteCursor {
            reader,
            position: 0,
            length,
        })
    }

    /// Current absolute offset in the stream.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Bytes left between the current position and the end of the stream.
    pub fn remaining(&self) -> u64 {
        self.length - self.position
    }

    fn ensure(&self, needed: u64) -> Result<()> {
        if self.remaining() < needed {
            return Err(Error::TruncatedInput {
                offset: self.position,
                needed,
                remaining: self.remaining(),
            });
        }
        Ok(())
    }

    /// Read exactly `count` bytes.
    pub fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        self.ensure(count as u64)?;

        let mut buffer = vec![0u8; count];
        self.reader.read_exact(&mut buffer)?;
        self.position += count as u64;

        Ok(buffer)
    }

    /// Advance `count` bytes without materializing them.
    pub fn skip(&mut self, count: u64) -> Result<()> {
        self.ensure(count)?;

        self.reader.seek(SeekFrom::Current(count as i64))?;
        self.position += count;

        Ok(())
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.ensure(1)?;
        let value = self.reader.read_u8()?;
        self.position += 1;
        Ok(value)
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        self.ensure(2)?;
        let value = self.reader.read_i16::<LittleEndian>()?;
        self.position += 2;
        Ok(value)
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        self.ensure(4)?;
        let value = self.reader.read_i32::<LittleEndian>()?;
        self.position += 4;
        Ok(value)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        self.ensure(4)?;
        let value = self.reader.read_u32::<LittleEndian>()?;
        self.position += 4;
        Ok(value)
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        self.ensure(4)?;
        let value = self.reader.read_f32::<LittleEndian>()?;
        self.position += 4;
        Ok(value)
    }
}
