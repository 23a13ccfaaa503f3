//! The Five Elements (五行) and yin/yang polarity.
//!
//! Generating cycle: Wood → Fire → Earth → Metal → Water → Wood.
//! Overcoming cycle: Wood → Earth → Water → Fire → Metal → Wood.

use serde::Serialize;

/// One of the five phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 elements in canonical order (index 0 = Wood).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

/// Yin/yang polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "yang",
            Self::Yin => "yin",
        }
    }
}

impl Element {
    /// Lowercase English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::Fire => "fire",
            Self::Earth => "earth",
            Self::Metal => "metal",
            Self::Water => "water",
        }
    }

    /// Chinese glyph.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// 0-based index (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Element at `index mod 5`.
    pub const fn from_index(index: u8) -> Self {
        ALL_ELEMENTS[(index % 5) as usize]
    }

    /// Parse a lowercase or capitalized English name, or the Chinese glyph.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        ALL_ELEMENTS
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(name) || e.glyph() == name)
    }

    /// The element this one generates (child in the 相生 cycle).
    pub const fn generates(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The element that generates this one (parent in the 相生 cycle).
    pub const fn generated_by(self) -> Self {
        Self::from_index(self.index() + 4)
    }

    /// The element this one overcomes (相剋).
    pub const fn overcomes(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// The element that overcomes this one.
    pub const fn overcome_by(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Static lucky-attribute profile of this element.
    pub fn profile(self) -> &'static ElementProfile {
        &ELEMENT_PROFILES[self.index() as usize]
    }

    /// Calendar months associated with this element.
    pub const fn lucky_months(self) -> &'static [u32] {
        match self {
            Self::Wood => &[1, 2],
            Self::Fire => &[4, 5],
            Self::Earth => &[3, 6, 9],
            Self::Metal => &[7, 8],
            Self::Water => &[10, 11],
        }
    }
}

/// Colors, numbers, directions and seasons attributed to an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementProfile {
    pub colors: &'static [&'static str],
    pub numbers: &'static [u32],
    pub directions: &'static [&'static str],
    pub seasons: &'static [&'static str],
}

static ELEMENT_PROFILES: [ElementProfile; 5] = [
    // Wood
    ElementProfile {
        colors: &["green", "blue", "turquoise"],
        numbers: &[3, 4],
        directions: &["east", "southeast"],
        seasons: &["spring"],
    },
    // Fire
    ElementProfile {
        colors: &["red", "orange", "purple", "pink"],
        numbers: &[2, 7],
        directions: &["south", "southeast"],
        seasons: &["summer"],
    },
    // Earth
    ElementProfile {
        colors: &["yellow", "brown", "beige", "gold"],
        numbers: &[5, 8],
        directions: &["northeast", "southwest", "center"],
        seasons: &["late summer"],
    },
    // Metal
    ElementProfile {
        colors: &["white", "silver", "gold", "gray"],
        numbers: &[6, 7],
        directions: &["west", "northwest"],
        seasons: &["autumn"],
    },
    // Water
    ElementProfile {
        colors: &["black", "blue", "dark blue"],
        numbers: &[1, 6],
        directions: &["north"],
        seasons: &["winter"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, e) in ALL_ELEMENTS.iter().enumerate() {
            assert_eq!(e.index() as usize, i);
        }
    }

    #[test]
    fn generating_cycle() {
        assert_eq!(Element::Wood.generates(), Element::Fire);
        assert_eq!(Element::Fire.generates(), Element::Earth);
        assert_eq!(Element::Earth.generates(), Element::Metal);
        assert_eq!(Element::Metal.generates(), Element::Water);
        assert_eq!(Element::Water.generates(), Element::Wood);
    }

    #[test]
    fn overcoming_cycle() {
        assert_eq!(Element::Wood.overcomes(), Element::Earth);
        assert_eq!(Element::Fire.overcomes(), Element::Metal);
        assert_eq!(Element::Earth.overcomes(), Element::Water);
        assert_eq!(Element::Metal.overcomes(), Element::Wood);
        assert_eq!(Element::Water.overcomes(), Element::Fire);
    }

    #[test]
    fn inverse_relations() {
        for e in ALL_ELEMENTS {
            assert_eq!(e.generates().generated_by(), e);
            assert_eq!(e.overcomes().overcome_by(), e);
        }
    }

    #[test]
    fn from_name_variants() {
        assert_eq!(Element::from_name("wood"), Some(Element::Wood));
        assert_eq!(Element::from_name("Metal"), Some(Element::Metal));
        assert_eq!(Element::from_name("水"), Some(Element::Water));
        assert_eq!(Element::from_name("aether"), None);
    }

    #[test]
    fn month_table_covers_one_to_three_months() {
        for e in ALL_ELEMENTS {
            let n = e.lucky_months().len();
            assert!((1..=3).contains(&n), "{e:?} has {n} months");
        }
    }
}
