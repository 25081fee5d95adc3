use crate::{CorruptKind, ResourceError, Result};

/// Big-endian cursor over a resource stream.
///
/// Every read is bounds-checked; running off the end yields
/// [`CorruptKind::UnexpectedEof`] at the offset where the read started.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    pub fn is_at_end(&self) -> bool {
        self.remaining() == 0
    }

    /// A corrupt-stream error at the current position.
    pub fn corrupt(&self, kind: CorruptKind) -> ResourceError {
        ResourceError::corrupt(self.position, kind)
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N]> {
        let bytes = self.read_bytes(N)?;
        let mut out = [0; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        if self.remaining() < len {
            return Err(self.corrupt(CorruptKind::UnexpectedEof {
                needed: len - self.remaining(),
            }));
        }
        let bytes = &self.data[self.position..self.position + len];
        self.position += len;
        Ok(bytes)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take::<1>()?[0])
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    /// Any non-zero byte is true.
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(i16::from_be_bytes(self.take()?))
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(u16::from_be_bytes(self.take()?))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(i32::from_be_bytes(self.take()?))
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(f32::from_bits(u32::from_be_bytes(self.take()?)))
    }

    /// A 16-bit count that must not be negative.
    pub fn read_count(&mut self) -> Result<usize> {
        let start = self.position;
        let count = self.read_i16()?;
        usize::try_from(count)
            .map_err(|_| ResourceError::corrupt(start, CorruptKind::NegativeCount(count.into())))
    }

    /// An 8-bit count that must not be negative.
    pub fn read_small_count(&mut self) -> Result<usize> {
        let start = self.position;
        let count = self.read_i8()?;
        usize::try_from(count)
            .map_err(|_| ResourceError::corrupt(start, CorruptKind::NegativeCount(count.into())))
    }

    /// A 32-bit length that must not be negative.
    pub fn read_len(&mut self) -> Result<usize> {
        let start = self.position;
        let len = self.read_i32()?;
        usize::try_from(len)
            .map_err(|_| ResourceError::corrupt(start, CorruptKind::NegativeCount(len)))
    }

    /// A byte block prefixed by its 32-bit length.
    pub fn read_blob(&mut self) -> Result<Vec<u8>> {
        let len = self.read_len()?;
        Ok(self.read_bytes(len)?.to_vec())
    }

    /// A string prefixed by its unsigned 16-bit byte length, in Java's
    /// modified UTF-8: NUL is `C0 80` and supplementary characters are
    /// stored as surrogate pairs.
    pub fn read_utf(&mut self) -> Result<String> {
        let len = usize::from(self.read_u16()?);
        let start = self.position;
        let bytes = self.read_bytes(len)?;
        cesu8::from_java_cesu8(bytes)
            .map(|text| text.into_owned())
            .map_err(|_| ResourceError::corrupt(start, CorruptKind::InvalidUtf8))
    }
}

#[cfg(test)]
#[path = "tests/reader_tests.rs"]
mod tests;
