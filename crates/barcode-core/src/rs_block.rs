//! Per-version, per-error-correction-level Reed-Solomon block geometry.

use crate::code_ecc::ErrorCorrectionLevel;
use crate::version::Version;

/// One block of a QR symbol's codeword stream: so many data codewords
/// followed by so many error-correction codewords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RSBlock {
    pub total_codeword_count: usize,
    pub data_codeword_count: usize,
}

static ECC_CODEWORDS_PER_BLOCK: [[i8; 41]; 4] = [
    // Low
    [
        -1, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28,
        30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ],
    // Medium
    [
        -1, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ],
    // Quartile
    [
        -1, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30,
        30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ],
    // High
    [
        -1, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ],
];

static NUM_ERROR_CORRECTION_BLOCKS: [[i8; 41]; 4] = [
    // Low
    [
        -1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12,
        13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ],
    // Medium
    [
        -1, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ],
    // Quartile
    [
        -1, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27,
        29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ],
    // High
    [
        -1, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32,
        35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ],
];

fn table_get(table: &'static [[i8; 41]; 4], version: Version, ec: ErrorCorrectionLevel) -> usize {
    table[ec.ordinal()][usize::from(version.value())] as usize
}

/// Total raw data modules available at this version, remainder bits
/// included, before the format/version/finder/alignment overhead is
/// subtracted further into error-correction-codeword counts.
pub fn num_raw_data_modules(version: Version) -> usize {
    let ver = usize::from(version.value());
    let mut result = (16 * ver + 128) * ver + 64;
    if ver >= 2 {
        let num_align = ver / 7 + 2;
        result -= (25 * num_align - 10) * num_align - 55;
        if ver >= 7 {
            result -= 36;
        }
    }
    debug_assert!((208..=29648).contains(&result));
    result
}

/// Number of 8-bit codewords reserved for the caller's data, with error
/// correction and remainder bits excluded.
pub fn num_data_codewords(version: Version, ec: ErrorCorrectionLevel) -> usize {
    num_raw_data_modules(version) / 8
        - table_get(&ECC_CODEWORDS_PER_BLOCK, version, ec) * table_get(&NUM_ERROR_CORRECTION_BLOCKS, version, ec)
}

/// The block layout — count and per-block split between data and ECC
/// codewords — for this version/error-correction-level pair.
pub fn rs_blocks(version: Version, ec: ErrorCorrectionLevel) -> Vec<RSBlock> {
    let num_blocks = table_get(&NUM_ERROR_CORRECTION_BLOCKS, version, ec);
    let block_ecc_len = table_get(&ECC_CODEWORDS_PER_BLOCK, version, ec);
    let raw_codewords = num_raw_data_modules(version) / 8;
    let num_short_blocks = num_blocks - raw_codewords % num_blocks;
    let short_block_len = raw_codewords / num_blocks;

    (0..num_blocks)
        .map(|i| {
            let total = short_block_len + usize::from(i >= num_short_blocks);
            RSBlock {
                total_codeword_count: total,
                data_codeword_count: total - block_ecc_len,
            }
        })
        .collect()
}

/// Degree of the ECC polynomial for each block at this version/level —
/// the number of Reed-Solomon codewords appended per block.
pub fn ecc_codewords_per_block(version: Version, ec: ErrorCorrectionLevel) -> usize {
    table_get(&ECC_CODEWORDS_PER_BLOCK, version, ec)
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn match_the_known_version_one_low_geometry() {
        let blocks = rs_blocks(Version::new(1), ErrorCorrectionLevel::Low);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].data_codeword_count, 19);
        assert_eq!(blocks[0].total_codeword_count, 26);
    }

    #[test]
    fn split_into_short_and_long_blocks_for_larger_versions() {
        let blocks = rs_blocks(Version::new(5), ErrorCorrectionLevel::Quartile);
        assert_eq!(blocks.len(), 4);
        let data_counts: Vec<usize> = blocks.iter().map(|b| b.data_codeword_count).collect();
        assert!(data_counts.windows(2).all(|w| (w[1] as i64 - w[0] as i64).abs() <= 1));
    }

    #[test]
    fn data_codeword_total_matches_num_data_codewords() {
        let version = Version::new(10);
        let ec = ErrorCorrectionLevel::Medium;
        let blocks = rs_blocks(version, ec);
        let total: usize = blocks.iter().map(|b| b.data_codeword_count).sum();
        assert_eq!(total, num_data_codewords(version, ec));
    }
}
