//! Voice record decoding

use core::fmt;

use crate::error::VoiceError;
use crate::tables::CARRIERS;
use crate::{FB_AL_OFFSET, NAME_LEN, NAME_OFFSET, OPERATOR_COUNT, VOICE_SIZE};

// Register group offsets (add operator_offset(op))
const DT_MUL: usize = 1;
const TL: usize = 5;
const KS_AR: usize = 9;
const AM_DR: usize = 13;
const SR: usize = 17;
const SL_RR: usize = 21;

/// Position of operator `op` inside a 4-byte register group
///
/// Voices store operators in OPN slot order (1, 3, 2, 4), so the two low
/// bits of the operator index are swapped.
#[inline]
pub const fn operator_offset(op: usize) -> usize {
    ((op & 1) << 1) | ((op & 2) >> 1)
}

/// One 32-byte MUCOM88 voice record
///
/// The record is never modified after construction; every accessor masks the
/// relevant bits out of the raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceRecord {
    bytes: [u8; VOICE_SIZE],
}

impl VoiceRecord {
    /// Wrap raw record bytes
    pub const fn new(bytes: [u8; VOICE_SIZE]) -> Self {
        Self { bytes }
    }

    /// Read a record from the start of `data`
    ///
    /// Bytes past the first 32 are ignored.
    pub fn from_slice(data: &[u8]) -> Result<Self, VoiceError> {
        let bytes = data
            .get(..VOICE_SIZE)
            .and_then(|head| <[u8; VOICE_SIZE]>::try_from(head).ok())
            .ok_or(VoiceError::TooSmall { len: data.len() })?;
        Ok(Self { bytes })
    }

    /// Raw record bytes
    pub fn as_bytes(&self) -> &[u8; VOICE_SIZE] {
        &self.bytes
    }

    /// Algorithm (0-7)
    #[inline]
    pub fn algorithm(&self) -> u8 {
        self.bytes[FB_AL_OFFSET] & 7
    }

    /// Operator 1 self-feedback (0-7)
    #[inline]
    pub fn feedback(&self) -> u8 {
        (self.bytes[FB_AL_OFFSET] >> 3) & 7
    }

    /// Name bytes, including any zero padding
    pub fn raw_name_bytes(&self) -> &[u8] {
        &self.bytes[NAME_OFFSET..NAME_OFFSET + NAME_LEN]
    }

    /// Decoded and trimmed voice name
    pub fn name(&self) -> String {
        crate::name::decode_name(self.raw_name_bytes())
    }

    /// View of operator `op` (0-3)
    ///
    /// # Panics
    /// Panics if `op` is 4 or greater.
    pub fn operator(&self, op: usize) -> Operator<'_> {
        assert!(op < OPERATOR_COUNT, "operator index {op} out of range");
        Operator {
            bytes: &self.bytes,
            index: op,
        }
    }

    /// All four operators, OP1 first
    pub fn operators(&self) -> impl Iterator<Item = Operator<'_>> {
        (0..OPERATOR_COUNT).map(move |op| self.operator(op))
    }

    /// Whether operator `op` is an output stage for this voice's algorithm
    pub fn is_carrier(&self, op: usize) -> bool {
        CARRIERS[self.algorithm() as usize][op]
    }
}

impl From<[u8; VOICE_SIZE]> for VoiceRecord {
    fn from(bytes: [u8; VOICE_SIZE]) -> Self {
        Self::new(bytes)
    }
}

impl fmt::Display for VoiceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {:?}", self.name())?;
        writeln!(f, "  Algorithm {}", self.algorithm())?;
        writeln!(f, "  Feedback  {}", self.feedback())?;
        for op in self.operators() {
            writeln!(f, "  Op.{}", op.index() + 1)?;
            writeln!(f, "    Attack R.   {:2}", op.attack_rate())?;
            writeln!(f, "    Decay R.    {:2}", op.decay_rate())?;
            writeln!(f, "    Sustain R.  {:2}", op.sustain_rate())?;
            writeln!(f, "    Release R.  {:2}", op.release_rate())?;
            writeln!(f, "    Sus.Level   {:2}", op.sustain_level())?;
            writeln!(f, "    Total Level {:2}", op.total_level())?;
            writeln!(f, "    KeyScale R. {:2}", op.key_scale())?;
            writeln!(f, "    Multiple    {:2}", op.multiple())?;
            writeln!(f, "    Detune      {:2}", op.detune())?;
            writeln!(f, "    AM          {:2}", op.amplitude_modulation())?;
        }
        Ok(())
    }
}

/// Borrowed view of a single operator's registers
#[derive(Debug, Clone, Copy)]
pub struct Operator<'a> {
    bytes: &'a [u8; VOICE_SIZE],
    index: usize,
}

impl Operator<'_> {
    #[inline]
    fn reg(&self, group: usize) -> u8 {
        self.bytes[group + operator_offset(self.index)]
    }

    /// Operator index (0-3)
    pub fn index(&self) -> usize {
        self.index
    }

    /// Frequency multiple (0-15)
    pub fn multiple(&self) -> u8 {
        self.reg(DT_MUL) & 15
    }

    /// Detune (0-7, 4-7 are the negative direction)
    pub fn detune(&self) -> u8 {
        (self.reg(DT_MUL) >> 4) & 7
    }

    /// Total level (0-127, 127 is silent)
    pub fn total_level(&self) -> u8 {
        self.reg(TL) & 127
    }

    /// Attack rate (0-31)
    pub fn attack_rate(&self) -> u8 {
        self.reg(KS_AR) & 31
    }

    /// Key scale (0-3)
    pub fn key_scale(&self) -> u8 {
        self.reg(KS_AR) >> 6
    }

    /// First decay rate (0-31)
    pub fn decay_rate(&self) -> u8 {
        self.reg(AM_DR) & 31
    }

    /// Amplitude modulation enable (0-1)
    pub fn amplitude_modulation(&self) -> u8 {
        self.reg(AM_DR) >> 7
    }

    /// Sustain (second decay) rate (0-31)
    pub fn sustain_rate(&self) -> u8 {
        self.reg(SR) & 31
    }

    /// Release rate (0-15)
    pub fn release_rate(&self) -> u8 {
        self.reg(SL_RR) & 15
    }

    /// Sustain level (0-15)
    pub fn sustain_level(&self) -> u8 {
        self.reg(SL_RR) >> 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Record with a distinct marker in the register byte for each operator
    fn marked_record(group: usize, values: [u8; 4]) -> VoiceRecord {
        let mut bytes = [0u8; VOICE_SIZE];
        for (op, value) in values.iter().enumerate() {
            bytes[group + operator_offset(op)] = *value;
        }
        VoiceRecord::new(bytes)
    }

    #[test]
    fn test_operator_offset_interleave() {
        assert_eq!(operator_offset(0), 0);
        assert_eq!(operator_offset(1), 2);
        assert_eq!(operator_offset(2), 1);
        assert_eq!(operator_offset(3), 3);
    }

    #[test]
    fn test_operator_byte_offsets() {
        // (operator, DT/MUL, TL, KS/AR, AM/DR, SR, SL/RR)
        let expected = [
            (0, 1, 5, 9, 13, 17, 21),
            (1, 3, 7, 11, 15, 19, 23),
            (2, 2, 6, 10, 14, 18, 22),
            (3, 4, 8, 12, 16, 20, 24),
        ];
        for (op, dt_mul, tl, ks_ar, am_dr, sr, sl_rr) in expected {
            let mut bytes = [0u8; VOICE_SIZE];
            bytes[dt_mul] = 0x35;
            bytes[tl] = 0x7F;
            bytes[ks_ar] = 0xDF;
            bytes[am_dr] = 0x9E;
            bytes[sr] = 0x1D;
            bytes[sl_rr] = 0xA7;
            let record = VoiceRecord::new(bytes);

            for other in (0..OPERATOR_COUNT).filter(|o| *o != op) {
                let o = record.operator(other);
                assert_eq!(o.multiple(), 0, "operator {other} leaked from {op}");
                assert_eq!(o.total_level(), 0);
                assert_eq!(o.sustain_level(), 0);
            }

            let o = record.operator(op);
            assert_eq!(o.multiple(), 5);
            assert_eq!(o.detune(), 3);
            assert_eq!(o.total_level(), 127);
            assert_eq!(o.attack_rate(), 31);
            assert_eq!(o.key_scale(), 3);
            assert_eq!(o.decay_rate(), 30);
            assert_eq!(o.amplitude_modulation(), 1);
            assert_eq!(o.sustain_rate(), 29);
            assert_eq!(o.release_rate(), 7);
            assert_eq!(o.sustain_level(), 10);
        }
    }

    #[test]
    fn test_masks_ignore_unused_bits() {
        let record = marked_record(DT_MUL, [0xFF; 4]);
        let op = record.operator(0);
        assert_eq!(op.multiple(), 15);
        assert_eq!(op.detune(), 7);

        let record = marked_record(TL, [0xFF; 4]);
        assert_eq!(record.operator(1).total_level(), 127);

        let record = marked_record(SR, [0xFF; 4]);
        assert_eq!(record.operator(2).sustain_rate(), 31);
    }

    #[test]
    fn test_algorithm_and_feedback() {
        let mut bytes = [0u8; VOICE_SIZE];
        bytes[FB_AL_OFFSET] = 0b1110_1101;
        let record = VoiceRecord::new(bytes);
        assert_eq!(record.algorithm(), 5);
        assert_eq!(record.feedback(), 5);
    }

    #[test]
    fn test_field_ranges_exhaustive_bytes() {
        for value in 0..=255u8 {
            let record = VoiceRecord::new([value; VOICE_SIZE]);
            assert!(record.algorithm() <= 7);
            assert!(record.feedback() <= 7);
            for op in record.operators() {
                assert!(op.multiple() <= 15);
                assert!(op.detune() <= 7);
                assert!(op.total_level() <= 127);
                assert!(op.attack_rate() <= 31);
                assert!(op.key_scale() <= 3);
                assert!(op.decay_rate() <= 31);
                assert!(op.amplitude_modulation() <= 1);
                assert!(op.sustain_rate() <= 31);
                assert!(op.release_rate() <= 15);
                assert!(op.sustain_level() <= 15);
            }
        }
    }

    #[test]
    fn test_from_slice() {
        let data = [7u8; 40];
        let record = VoiceRecord::from_slice(&data).unwrap();
        assert_eq!(record.as_bytes(), &[7u8; VOICE_SIZE]);

        let short = VoiceRecord::from_slice(&data[..31]);
        assert_eq!(short, Err(VoiceError::TooSmall { len: 31 }));
    }

    #[test]
    fn test_raw_name_bytes() {
        let mut bytes = [0u8; VOICE_SIZE];
        bytes[NAME_OFFSET..].copy_from_slice(b"PIANO1");
        let record = VoiceRecord::new(bytes);
        assert_eq!(record.raw_name_bytes(), b"PIANO1");
        assert_eq!(record.name(), "PIANO1");
    }

    #[test]
    fn test_is_carrier() {
        let mut bytes = [0u8; VOICE_SIZE];
        bytes[FB_AL_OFFSET] = 4;
        let record = VoiceRecord::new(bytes);
        let carriers: Vec<bool> = (0..4).map(|op| record.is_carrier(op)).collect();
        assert_eq!(carriers, [false, true, false, true]);
    }

    #[test]
    #[should_panic]
    fn test_operator_out_of_range() {
        let record = VoiceRecord::new([0; VOICE_SIZE]);
        let _ = record.operator(4);
    }

    #[test]
    fn test_display_dump() {
        let mut bytes = [0u8; VOICE_SIZE];
        bytes[FB_AL_OFFSET] = (3 << 3) | 2;
        bytes[NAME_OFFSET..NAME_OFFSET + 4].copy_from_slice(b"BASS");
        bytes[KS_AR] = 31;
        let dump = VoiceRecord::new(bytes).to_string();

        assert!(dump.starts_with("Name: \"BASS\"\n  Algorithm 2\n  Feedback  3\n  Op.1\n"));
        assert!(dump.contains("    Attack R.   31\n"));
        assert_eq!(dump.matches("  Op.").count(), 4);
    }
}
