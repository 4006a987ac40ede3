use crate::version::Version;

/// Identifies how a `DataSegment`'s payload bits are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Numeric,
    AlphaNumeric,
    Byte8Bit,
    Kanji,
    /// Extended Channel Interpretation designator. Not one of the four
    /// content modes, but its character-count-indicator width is always
    /// zero, so it slots into the same table.
    Eci,
}

impl Mode {
    /// The 4-bit mode indicator written ahead of every segment.
    pub fn indicator(self) -> u32 {
        use Mode::*;
        match self {
            Numeric => 0x1,
            AlphaNumeric => 0x2,
            Byte8Bit => 0x4,
            Kanji => 0x8,
            Eci => 0x7,
        }
    }

    /// Width, in bits, of the character-count-indicator field for this mode
    /// at the given QR version.
    pub fn count_indicator_width(self, version: Version) -> u8 {
        use Mode::*;
        let band = match version.value() {
            1..=9 => 0,
            10..=26 => 1,
            27..=40 => 2,
            v => unreachable!("Version is range-checked to [1, 40], got {v}"),
        };
        match self {
            Numeric => [10, 12, 14][band],
            AlphaNumeric => [9, 11, 13][band],
            Byte8Bit => [8, 16, 16][band],
            Kanji => [8, 10, 12][band],
            Eci => 0,
        }
    }
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn pick_the_narrow_band_for_versions_one_through_nine() {
        assert_eq!(Mode::Numeric.count_indicator_width(Version::new(1)), 10);
        assert_eq!(Mode::Byte8Bit.count_indicator_width(Version::new(9)), 8);
    }

    #[test]
    fn pick_the_middle_band_for_versions_ten_through_twentysix() {
        assert_eq!(Mode::AlphaNumeric.count_indicator_width(Version::new(10)), 11);
        assert_eq!(Mode::Kanji.count_indicator_width(Version::new(26)), 10);
    }

    #[test]
    fn pick_the_wide_band_for_versions_twentyseven_through_forty() {
        assert_eq!(Mode::Numeric.count_indicator_width(Version::new(27)), 14);
        assert_eq!(Mode::Byte8Bit.count_indicator_width(Version::new(40)), 16);
    }
}
