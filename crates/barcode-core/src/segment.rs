use crate::bit_buffer::BitBuffer;
use crate::error::BarcodeError;
use crate::segment_mode::Mode;
use crate::ALPHANUMERIC_CHARSET;

/// A chunk of input data tagged with the QR mode it will be encoded under.
/// Created by the caller, consumed once by the encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSegment {
    Numeric(String),
    AlphaNumeric(String),
    Byte8Bit(Vec<u8>),
    /// Already-packed 13-bit Shift-JIS double-byte units.
    Kanji(Vec<u16>),
    /// An ECI designator; `bits` holds its pre-built 1/2/3-byte payload.
    Eci { assign_value: u32, bits: Vec<bool> },
}

impl DataSegment {
    /// Builds a numeric-mode segment from a string of decimal digits.
    pub fn numeric(text: &str) -> Result<Self, BarcodeError> {
        if !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BarcodeError::InvalidDigits);
        }
        Ok(DataSegment::Numeric(text.to_string()))
    }

    /// Builds an alphanumeric-mode segment. Accepts `0-9`, `A-Z`, space, and
    /// `$%*+-./:`.
    pub fn alphanumeric(text: &str) -> Result<Self, BarcodeError> {
        for c in text.chars() {
            if !ALPHANUMERIC_CHARSET.contains(c) {
                let mut buf = [0u8; 4];
                let byte = c.encode_utf8(&mut buf).as_bytes()[0];
                return Err(BarcodeError::InvalidCharacter {
                    byte,
                    symbology_name: "QR AlphaNumeric",
                });
            }
        }
        Ok(DataSegment::AlphaNumeric(text.to_string()))
    }

    /// Builds a byte-mode segment. Every byte value is acceptable.
    pub fn bytes(data: &[u8]) -> Self {
        DataSegment::Byte8Bit(data.to_vec())
    }

    /// Builds a Kanji-mode segment from raw Shift-JIS bytes, per the QR
    /// specification's Kanji packing rule: each double-byte unit in one of
    /// the two valid Shift-JIS bands is folded to a 13-bit value.
    pub fn from_shift_jis(data: &[u8]) -> Result<Self, BarcodeError> {
        if data.len() % 2 != 0 {
            return Err(BarcodeError::InvalidCharacter {
                byte: *data.last().unwrap(),
                symbology_name: "QR Kanji",
            });
        }
        let mut units = Vec::with_capacity(data.len() / 2);
        for pair in data.chunks_exact(2) {
            let c = (u16::from(pair[0]) << 8) | u16::from(pair[1]);
            let folded = match c {
                0x8140..=0x9FFC => c - 0x8140,
                0xE040..=0xEBBF => c - 0xC140,
                _ => {
                    return Err(BarcodeError::InvalidCharacter {
                        byte: pair[0],
                        symbology_name: "QR Kanji",
                    })
                }
            };
            let packed = (folded >> 8) * 0xC0 + (folded & 0xFF);
            units.push(packed);
        }
        Ok(DataSegment::Kanji(units))
    }

    /// Builds an Extended Channel Interpretation designator segment.
    ///
    /// # Panics
    /// Panics if `assign_value >= 1_000_000`; ECI assignments are defined up
    /// to that bound.
    pub fn make_eci(assign_value: u32) -> Self {
        let mut bb = BitBuffer::new();
        if assign_value < (1 << 7) {
            bb.put(assign_value, 8);
        } else if assign_value < (1 << 14) {
            bb.put(0b10, 2);
            bb.put(assign_value, 14);
        } else if assign_value < 1_000_000 {
            bb.put(0b110, 3);
            bb.put(assign_value, 21);
        } else {
            panic!("ECI assignment value out of range");
        }
        let bits = (0..bb.length_in_bits())
            .map(|i| (bb.get_byte(i / 8) >> (7 - i % 8)) & 1 != 0)
            .collect();
        DataSegment::Eci { assign_value, bits }
    }

    /// Returns a list of zero or more segments that together represent
    /// `text`, switching between numeric/alphanumeric/byte mode to minimize
    /// the size of the bit stream.
    pub fn make_segments(text: &str) -> Vec<Self> {
        if text.is_empty() {
            return vec![];
        }
        if text.bytes().all(|b| b.is_ascii_digit()) {
            vec![DataSegment::Numeric(text.to_string())]
        } else if text.chars().all(|c| ALPHANUMERIC_CHARSET.contains(c)) {
            vec![DataSegment::AlphaNumeric(text.to_string())]
        } else {
            vec![DataSegment::bytes(text.as_bytes())]
        }
    }

    /// The mode this segment will be encoded under.
    pub fn mode(&self) -> Mode {
        match self {
            DataSegment::Numeric(_) => Mode::Numeric,
            DataSegment::AlphaNumeric(_) => Mode::AlphaNumeric,
            DataSegment::Byte8Bit(_) => Mode::Byte8Bit,
            DataSegment::Kanji(_) => Mode::Kanji,
            DataSegment::Eci { .. } => Mode::Eci,
        }
    }

    /// Count of source characters/bytes before bit-packing: digits for
    /// numeric, characters for alphanumeric, bytes for 8-bit, double-bytes
    /// for Kanji, zero for ECI.
    pub fn logical_length(&self) -> usize {
        match self {
            DataSegment::Numeric(s) => s.len(),
            DataSegment::AlphaNumeric(s) => s.chars().count(),
            DataSegment::Byte8Bit(b) => b.len(),
            DataSegment::Kanji(units) => units.len(),
            DataSegment::Eci { .. } => 0,
        }
    }

    /// Bit cost of this segment's payload alone, excluding the mode
    /// indicator and character-count-indicator fields.
    pub fn payload_bit_length(&self) -> usize {
        match self {
            DataSegment::Numeric(s) => {
                let n = s.len();
                (n / 3) * 10
                    + match n % 3 {
                        0 => 0,
                        1 => 4,
                        2 => 7,
                        _ => unreachable!(),
                    }
            }
            DataSegment::AlphaNumeric(s) => {
                let n = s.chars().count();
                (n / 2) * 11 + if n % 2 == 1 { 6 } else { 0 }
            }
            DataSegment::Byte8Bit(b) => b.len() * 8,
            DataSegment::Kanji(units) => units.len() * 13,
            DataSegment::Eci { bits, .. } => bits.len(),
        }
    }

    /// Appends this segment's mode-specific payload bits to `buffer`. Does
    /// not write the mode indicator or character count — those are the
    /// caller's responsibility.
    pub fn write(&self, buffer: &mut BitBuffer) {
        match self {
            DataSegment::Numeric(s) => {
                let digits: Vec<u8> = s.bytes().map(|b| b - b'0').collect();
                for group in digits.chunks(3) {
                    let value = group.iter().fold(0u32, |acc, &d| acc * 10 + u32::from(d));
                    let bits = match group.len() {
                        3 => 10,
                        2 => 7,
                        1 => 4,
                        _ => unreachable!(),
                    };
                    buffer.put(value, bits);
                }
            }
            DataSegment::AlphaNumeric(s) => {
                let indices: Vec<usize> = s
                    .chars()
                    .map(|c| ALPHANUMERIC_CHARSET.find(c).expect("validated at construction"))
                    .collect();
                for pair in indices.chunks(2) {
                    if pair.len() == 2 {
                        let value = 45 * pair[0] as u32 + pair[1] as u32;
                        buffer.put(value, 11);
                    } else {
                        buffer.put(pair[0] as u32, 6);
                    }
                }
            }
            DataSegment::Byte8Bit(data) => {
                for &b in data {
                    buffer.put(u32::from(b), 8);
                }
            }
            DataSegment::Kanji(units) => {
                for &u in units {
                    buffer.put(u32::from(u), 13);
                }
            }
            DataSegment::Eci { bits, .. } => {
                for &bit in bits {
                    buffer.put(u32::from(bit), 1);
                }
            }
        }
    }
}

#[cfg(test)]
mod should {
    use super::*;

    fn bits_string(bb: &BitBuffer) -> String {
        (0..bb.length_in_bits())
            .map(|i| if (bb.get_byte(i / 8) >> (7 - i % 8)) & 1 != 0 { '1' } else { '0' })
            .collect()
    }

    #[test]
    fn reject_non_digit_characters_in_numeric_mode() {
        assert_eq!(DataSegment::numeric("12a3"), Err(BarcodeError::InvalidDigits));
    }

    #[test]
    fn reject_unencodable_characters_in_alphanumeric_mode() {
        assert!(DataSegment::alphanumeric("abc").is_err());
    }

    #[test]
    fn encode_eight_digits_as_ten_ten_and_seven_bit_groups() {
        // S3: "01234567" groups into "012" (12 -> 10 bits), "345" (345 -> 10
        // bits), "67" (67 -> 7 bits).
        let seg = DataSegment::numeric("01234567").unwrap();
        let mut bb = BitBuffer::new();
        seg.write(&mut bb);
        assert_eq!(bb.length_in_bits(), 27);
        assert_eq!(bits_string(&bb), format!("{:010b}{:010b}{:07b}", 12, 345, 67));
    }

    #[test]
    fn encode_alphanumeric_pairs_per_s4() {
        // S4: "AC-42" -> (A,C)=45*10+12=462 in 11 bits, (-,4)=45*41+4=1849 in
        // 11 bits, lone '2'=2 in 6 bits.
        let seg = DataSegment::alphanumeric("AC-42").unwrap();
        let mut bb = BitBuffer::new();
        seg.write(&mut bb);
        assert_eq!(bb.length_in_bits(), 11 + 11 + 6);
        assert_eq!(bits_string(&bb), format!("{:011b}{:011b}{:06b}", 462, 1849, 2));
    }

    #[test]
    fn make_segments_picks_the_narrowest_mode_automatically() {
        assert!(matches!(DataSegment::make_segments("12345")[0], DataSegment::Numeric(_)));
        assert!(matches!(DataSegment::make_segments("HELLO WORLD")[0], DataSegment::AlphaNumeric(_)));
        assert!(matches!(DataSegment::make_segments("hello")[0], DataSegment::Byte8Bit(_)));
        assert!(DataSegment::make_segments("").is_empty());
    }

    #[test]
    fn eci_round_trips_through_make_eci() {
        let seg = DataSegment::make_eci(3);
        assert_eq!(seg.logical_length(), 0);
        assert_eq!(seg.payload_bit_length(), 8);
    }
}
