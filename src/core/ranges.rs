//! The fixed table of code-point ranges treated as emoji.

use std::ops::RangeInclusive;

/// Ordered list of inclusive code-point ranges.
///
/// Ranges are disjoint, so a code point belongs to at most one of them.
#[derive(Debug, Clone, Copy)]
pub struct EmojiRangeTable(&'static [RangeInclusive<u32>]);

/// Every code point removed by the filter.
pub const EMOJI_RANGES: EmojiRangeTable = EmojiRangeTable(&[
    0x1F600..=0x1F64F, // Emoticons
    0x1F300..=0x1F5FF, // Misc symbols and pictographs
    0x1F680..=0x1F6FF, // Transport and map
    0x1F1E0..=0x1F1FF, // Regional indicators (flags)
    0x2600..=0x26FF,   // Misc symbols
    0x2700..=0x27BF,   // Dingbats
    0x1F900..=0x1F9FF, // Supplemental symbols and pictographs
    0x1FA70..=0x1FAFF, // Symbols and pictographs extended-A
    0x231A..=0x231B,
    0x2328..=0x2328,
    0x23E9..=0x23F3,
    0x23F8..=0x23FA,
    0x2B05..=0x2B07,
    0x2B1B..=0x2B1C,
    0x2B50..=0x2B55,
    0x3030..=0x3030,
    0x303D..=0x303D,
    0x3297..=0x3299,
    0xFE0F..=0xFE0F, // Variation selector-16
    0x200D..=0x200D, // Zero width joiner
]);

impl EmojiRangeTable {
    pub fn ranges(&self) -> &'static [RangeInclusive<u32>] {
        self.0
    }

    pub fn contains(&self, c: char) -> bool {
        let code_point = u32::from(c);
        self.0.iter().any(|range| range.contains(&code_point))
    }
}
