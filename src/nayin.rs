// 🎵 Nayin Resolver - 納音 of the 60-year cycle
//
// Epoch: 1924 = 甲子 = cycle offset 0. Each Nayin spans two consecutive years,
// so the 60-year cycle has 30 labels:
//
//   index = ((year - 1924) mod 60) / 2
//
// Years before 1924 have no Nayin here; the cycle is not run backwards.

use crate::element::Element;
use serde::Serialize;

/// First year of the supported cycle (甲子)
pub const NAYIN_EPOCH_YEAR: i32 = 1924;

/// The 30 Nayin labels in cycle order (index 0 = 1924/1925)
pub const NAYIN_TABLE: [&str; 30] = [
    "海中金", "爐中火", "大林木", "路旁土", "劍鋒金", "山頭火",
    "澗下水", "城頭土", "白蠟金", "楊柳木", "泉中水", "屋上土",
    "霹靂火", "松柏木", "長流水", "砂中金", "山下火", "平地木",
    "壁上土", "金箔金", "覆燈火", "天河水", "大驛土", "釵釧金",
    "桑柘木", "大溪水", "沙中土", "天上火", "石榴木", "大海水",
];

/// Heavenly stems (天干)
pub const HEAVENLY_STEMS: [char; 10] = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];

/// Earthly branches (地支)
pub const EARTHLY_BRANCHES: [char; 12] = [
    '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
];

/// Nayin - One of the 30 labels, resolved for a year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Nayin {
    /// Position in NAYIN_TABLE (0..30)
    pub index: u8,
    pub label: &'static str,
}

impl Nayin {
    pub fn from_index(index: u8) -> Option<Nayin> {
        NAYIN_TABLE.get(index as usize).map(|&label| Nayin { index, label })
    }

    /// Final glyph of the label, e.g. "金" for 海中金
    pub fn last_glyph(&self) -> &'static str {
        self.label
            .char_indices()
            .last()
            .map(|(i, _)| &self.label[i..])
            .unwrap_or(self.label)
    }

    /// Element named by the final glyph
    pub fn element(&self) -> Option<Element> {
        self.last_glyph().chars().next().and_then(Element::from_glyph)
    }
}

/// Offset of a year within the 60-year cycle, or None before the epoch
pub fn cycle_offset(year: i32) -> Option<u8> {
    if year < NAYIN_EPOCH_YEAR {
        return None;
    }
    Some(((year - NAYIN_EPOCH_YEAR) % 60) as u8)
}

/// Nayin for a Gregorian year
pub fn nayin_for_year(year: i32) -> Option<Nayin> {
    let offset = cycle_offset(year)?;
    Nayin::from_index(offset / 2)
}

/// Stem-branch name of a year, e.g. "庚午" for 1990
pub fn sexagenary_name(year: i32) -> Option<String> {
    let offset = cycle_offset(year)? as usize;
    let stem = HEAVENLY_STEMS[offset % 10];
    let branch = EARTHLY_BRANCHES[offset % 12];
    Some([stem, branch].iter().collect())
}
