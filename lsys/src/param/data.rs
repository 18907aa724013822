use super::{fatal, ParameterKind, ParameterSet, CHAR_SIZE, FLOAT_SIZE, INT_SIZE};
use crate::{LsysError, LsysResult};

/// Concrete parameter values of one symbol
///
/// The buffer holds all chars, then all ints, then all floats, then all
/// custom blobs. Ints and floats are stored little-endian so the bytes are
/// the same on every platform. A fresh buffer is all zeroes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterData {
    set: ParameterSet,
    custom_width: u8,
    bytes: Vec<u8>,
}

impl ParameterData {
    pub fn new(set: ParameterSet, custom_width: u8) -> Self {
        Self {
            set,
            custom_width,
            bytes: vec![0; set.required_data_size(custom_width)],
        }
    }

    pub fn set(&self) -> ParameterSet {
        self.set
    }

    pub fn custom_width(&self) -> u8 {
        self.custom_width
    }

    /// The raw encoded buffer
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn width(&self, kind: ParameterKind) -> usize {
        match kind {
            ParameterKind::Char => CHAR_SIZE,
            ParameterKind::Int => INT_SIZE,
            ParameterKind::Float => FLOAT_SIZE,
            ParameterKind::Custom => self.custom_width as usize,
        }
    }

    /// Byte offset of parameter `index` of `kind`, checked against the set
    fn offset(&self, kind: ParameterKind, index: u8) -> LsysResult<usize> {
        let count = self.set.count(kind);
        if index >= count {
            return Err(LsysError::ParameterOutOfBounds { kind, index, count });
        }
        let group_start: usize = ParameterKind::ALL
            .iter()
            .take_while(|k| **k != kind)
            .map(|k| self.set.count(*k) as usize * self.width(*k))
            .sum();
        Ok(group_start + index as usize * self.width(kind))
    }

    fn read<const N: usize>(&self, at: usize) -> [u8; N] {
        let mut out = [0u8; N];
        out.copy_from_slice(&self.bytes[at..at + N]);
        out
    }

    pub fn try_get_char(&self, index: u8) -> LsysResult<u8> {
        let at = self.offset(ParameterKind::Char, index)?;
        Ok(self.bytes[at])
    }

    pub fn try_get_int(&self, index: u8) -> LsysResult<i32> {
        let at = self.offset(ParameterKind::Int, index)?;
        Ok(i32::from_le_bytes(self.read(at)))
    }

    pub fn try_get_float(&self, index: u8) -> LsysResult<f32> {
        let at = self.offset(ParameterKind::Float, index)?;
        Ok(f32::from_le_bytes(self.read(at)))
    }

    /// A copy of the custom blob at `index`
    pub fn try_get_custom(&self, index: u8) -> LsysResult<Vec<u8>> {
        let at = self.offset(ParameterKind::Custom, index)?;
        Ok(self.bytes[at..at + self.custom_width as usize].to_vec())
    }

    pub fn try_set_char(&mut self, value: u8, index: u8) -> LsysResult<()> {
        let at = self.offset(ParameterKind::Char, index)?;
        self.bytes[at] = value;
        Ok(())
    }

    pub fn try_set_int(&mut self, value: i32, index: u8) -> LsysResult<()> {
        let at = self.offset(ParameterKind::Int, index)?;
        self.bytes[at..at + INT_SIZE].copy_from_slice(&value.to_le_bytes());
        Ok(())
    }

    pub fn try_set_float(&mut self, value: f32, index: u8) -> LsysResult<()> {
        let at = self.offset(ParameterKind::Float, index)?;
        self.bytes[at..at + FLOAT_SIZE].copy_from_slice(&value.to_le_bytes());
        Ok(())
    }

    pub fn try_set_custom(&mut self, value: &[u8], index: u8) -> LsysResult<()> {
        let at = self.offset(ParameterKind::Custom, index)?;
        if value.len() != self.custom_width as usize {
            return Err(LsysError::CustomWidthMismatch {
                expected: self.custom_width,
                actual: value.len(),
            });
        }
        self.bytes[at..at + value.len()].copy_from_slice(value);
        Ok(())
    }

    /// Copy the encoded bytes of one parameter from `source` into this buffer
    ///
    /// Both sides use the same kind, so the value keeps its exact bit pattern.
    /// Custom blobs additionally need equal widths on both sides.
    pub fn try_copy_from(
        &mut self,
        source: &ParameterData,
        kind: ParameterKind,
        source_index: u8,
        index: u8,
    ) -> LsysResult<()> {
        let from = source.offset(kind, source_index)?;
        let to = self.offset(kind, index)?;
        let width = self.width(kind);
        if source.width(kind) != width {
            return Err(LsysError::CustomWidthMismatch {
                expected: self.custom_width,
                actual: source.width(kind),
            });
        }
        self.bytes[to..to + width].copy_from_slice(&source.bytes[from..from + width]);
        Ok(())
    }

    /// # Panics
    ///
    /// Panics if `index` is not below the declared char count.
    #[track_caller]
    pub fn get_char(&self, index: u8) -> u8 {
        fatal(self.try_get_char(index))
    }

    /// # Panics
    ///
    /// Panics if `index` is not below the declared int count.
    #[track_caller]
    pub fn get_int(&self, index: u8) -> i32 {
        fatal(self.try_get_int(index))
    }

    /// # Panics
    ///
    /// Panics if `index` is not below the declared float count.
    #[track_caller]
    pub fn get_float(&self, index: u8) -> f32 {
        fatal(self.try_get_float(index))
    }

    /// # Panics
    ///
    /// Panics if `index` is not below the declared custom count.
    #[track_caller]
    pub fn get_custom(&self, index: u8) -> Vec<u8> {
        fatal(self.try_get_custom(index))
    }

    #[track_caller]
    pub fn set_char(&mut self, value: u8, index: u8) {
        fatal(self.try_set_char(value, index))
    }

    #[track_caller]
    pub fn set_int(&mut self, value: i32, index: u8) {
        fatal(self.try_set_int(value, index))
    }

    #[track_caller]
    pub fn set_float(&mut self, value: f32, index: u8) {
        fatal(self.try_set_float(value, index))
    }

    /// # Panics
    ///
    /// Panics on an out of bounds `index`, or when `value` is not exactly
    /// [`custom_width`](Self::custom_width) bytes long.
    #[track_caller]
    pub fn set_custom(&mut self, value: &[u8], index: u8) {
        fatal(self.try_set_custom(value, index))
    }
}
