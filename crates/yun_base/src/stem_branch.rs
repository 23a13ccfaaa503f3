//! Heavenly Stems (天干), Earthly Branches (地支) and the 60-pair cycle.
//!
//! Stem index runs 0-9 (甲..癸), branch index 0-11 (子..亥). Cycle entry
//! `i` pairs stem `i mod 10` with branch `i mod 12`; since lcm(10, 12) = 60
//! each combination occurs once per cycle.

use serde::Serialize;

use crate::element::{Element, Polarity};
use crate::zodiac::Animal;

/// The 10 Heavenly Stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in order (index 0 = Jia).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

impl Stem {
    /// Stem at `index mod 10`.
    pub const fn from_index(index: u8) -> Self {
        ALL_STEMS[(index % 10) as usize]
    }

    /// 0-based index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Jia => "jia",
            Self::Yi => "yi",
            Self::Bing => "bing",
            Self::Ding => "ding",
            Self::Wu => "wu",
            Self::Ji => "ji",
            Self::Geng => "geng",
            Self::Xin => "xin",
            Self::Ren => "ren",
            Self::Gui => "gui",
        }
    }

    /// Stems pair up by element: Jia/Yi wood, Bing/Ding fire, and so on.
    pub const fn element(self) -> Element {
        Element::from_index(self.index() / 2)
    }

    /// Even stems are yang, odd stems yin.
    pub const fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }
}

/// The 12 Earthly Branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in order (index 0 = Zi).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

impl Branch {
    /// Branch at `index mod 12`.
    pub const fn from_index(index: u8) -> Self {
        ALL_BRANCHES[(index % 12) as usize]
    }

    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Zi => "zi",
            Self::Chou => "chou",
            Self::Yin => "yin",
            Self::Mao => "mao",
            Self::Chen => "chen",
            Self::Si => "si",
            Self::Wu => "wu",
            Self::Wei => "wei",
            Self::Shen => "shen",
            Self::You => "you",
            Self::Xu => "xu",
            Self::Hai => "hai",
        }
    }

    /// Zodiac animal of the branch (子 = Rat .. 亥 = Pig).
    pub const fn animal(self) -> Animal {
        Animal::from_index(self.index())
    }

    /// Native element of the branch.
    pub const fn element(self) -> Element {
        match self {
            Self::Zi | Self::Hai => Element::Water,
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Shen | Self::You => Element::Metal,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => Element::Earth,
        }
    }

    /// Even branches are yang, odd branches yin.
    pub const fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }
}

/// One position of the sexagenary cycle: a stem paired with a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Cycle entry at `index mod 60`.
    pub const fn from_cycle_index(index: u8) -> Self {
        let (stem, branch) = SEXAGENARY_CYCLE[(index % 60) as usize];
        Self {
            stem: Stem::from_index(stem),
            branch: Branch::from_index(branch),
        }
    }

    /// Position in the 60-cycle, or `None` for a stem/branch of mixed
    /// parity (such pairs never occur in the cycle).
    pub fn cycle_index(self) -> Option<u8> {
        SEXAGENARY_CYCLE
            .iter()
            .position(|&(s, b)| s == self.stem.index() && b == self.branch.index())
            .map(|i| i as u8)
    }

    /// Two-glyph name, e.g. `甲子`.
    pub fn glyphs(self) -> String {
        format!("{}{}", self.stem.glyph(), self.branch.glyph())
    }

    /// Romanized name, e.g. `jia-zi`.
    pub fn pinyin(self) -> String {
        format!("{}-{}", self.stem.pinyin(), self.branch.pinyin())
    }
}

const fn build_cycle() -> [(u8, u8); 60] {
    let mut cycle = [(0u8, 0u8); 60];
    let mut i = 0;
    while i < 60 {
        cycle[i] = ((i % 10) as u8, (i % 12) as u8);
        i += 1;
    }
    cycle
}

/// `(stem_index, branch_index)` for each of the 60 cycle positions.
pub const SEXAGENARY_CYCLE: [(u8, u8); 60] = build_cycle();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_attributes() {
        assert_eq!(Stem::Jia.element(), Element::Wood);
        assert_eq!(Stem::Yi.polarity(), Polarity::Yin);
        assert_eq!(Stem::Wu.element(), Element::Earth);
        assert_eq!(Stem::Geng.element(), Element::Metal);
        assert_eq!(Stem::Gui.element(), Element::Water);
        assert_eq!(Stem::Gui.polarity(), Polarity::Yin);
    }

    #[test]
    fn branch_attributes() {
        assert_eq!(Branch::Zi.element(), Element::Water);
        assert_eq!(Branch::Zi.animal(), Animal::Rat);
        assert_eq!(Branch::Wei.element(), Element::Earth);
        assert_eq!(Branch::Wei.animal(), Animal::Goat);
        assert_eq!(Branch::Hai.polarity(), Polarity::Yin);
        assert_eq!(Branch::Shen.polarity(), Polarity::Yang);
    }

    #[test]
    fn indices_roundtrip() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(Stem::from_index(i as u8), *s);
            assert_eq!(s.index() as usize, i);
        }
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(Branch::from_index(i as u8), *b);
            assert_eq!(b.index() as usize, i);
        }
    }

    #[test]
    fn cycle_pairs_are_unique() {
        for i in 0..60 {
            for j in (i + 1)..60 {
                assert_ne!(SEXAGENARY_CYCLE[i], SEXAGENARY_CYCLE[j], "{i} vs {j}");
            }
        }
    }

    #[test]
    fn cycle_endpoints() {
        assert_eq!(Pillar::from_cycle_index(0).glyphs(), "甲子");
        assert_eq!(Pillar::from_cycle_index(59).glyphs(), "癸亥");
        assert_eq!(Pillar::from_cycle_index(60), Pillar::from_cycle_index(0));
    }

    #[test]
    fn cycle_index_roundtrip() {
        for i in 0..60u8 {
            assert_eq!(Pillar::from_cycle_index(i).cycle_index(), Some(i));
        }
        assert_eq!(Pillar::new(Stem::Jia, Branch::Chou).cycle_index(), None);
    }

    #[test]
    fn pinyin_name() {
        assert_eq!(Pillar::from_cycle_index(6).pinyin(), "geng-wu");
    }
}
