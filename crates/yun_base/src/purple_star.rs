//! Purple Star (紫微斗數): the 14 major stars, 12 palaces, and a simplified
//! star-to-palace placement.
//!
//! The placement here is an approximation. A full chart positions the Life
//! Palace from the lunar month and birth hour and places 紫微 from the lunar
//! day and the five-element bureau; that needs lunisolar calendar data this
//! crate does not carry. Instead the primary star of palace `i` is
//! `(day mod 12 + i) mod 14` and the secondary star sits 5 positions further.

use serde::Serialize;
use tracing::warn;
use yun_time::BirthData;

use crate::element::Element;

/// Role of a star in a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StarNature {
    Primary,
    Secondary,
    Auxiliary,
}

impl StarNature {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Auxiliary => "auxiliary",
        }
    }
}

/// A catalogued star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Star {
    /// Chinese name, e.g. `紫微星`.
    pub name: &'static str,
    /// Romanized name, e.g. `Zi Wei`.
    pub romanization: &'static str,
    pub element: Element,
    pub nature: StarNature,
    pub keywords: &'static [&'static str],
}

impl Star {
    pub fn has_keyword(&self, keyword: &str) -> bool {
        self.keywords.contains(&keyword)
    }
}

const fn major(
    name: &'static str,
    romanization: &'static str,
    element: Element,
    keywords: &'static [&'static str],
) -> Star {
    Star {
        name,
        romanization,
        element,
        nature: StarNature::Primary,
        keywords,
    }
}

/// The 14 major stars (十四主星) in placement order.
pub static MAJOR_STARS: [Star; 14] = [
    major("紫微星", "Zi Wei", Element::Earth, &["emperor", "authority", "wisdom", "leadership"]),
    major("天機星", "Tian Ji", Element::Wood, &["intelligence", "strategy", "wisdom", "cleverness"]),
    major("太陽星", "Tai Yang", Element::Fire, &["sun", "masculine", "fame", "paternal"]),
    major("武曲星", "Wu Qu", Element::Metal, &["finance", "determination", "military", "wealth"]),
    major("天府星", "Tian Fu", Element::Earth, &["treasury", "stability", "conservation", "prosperity"]),
    major("天同星", "Tian Tong", Element::Water, &["kindness", "pleasure", "easy-going", "fortunate"]),
    major("廉貞星", "Lian Zhen", Element::Fire, &["integrity", "justice", "strictness", "romance"]),
    major("太陰星", "Tai Yin", Element::Water, &["moon", "feminine", "arts", "maternal"]),
    major("貪狼星", "Tan Lang", Element::Wood, &["desire", "ambition", "talent", "material"]),
    major("巨門星", "Ju Men", Element::Water, &["gate", "hidden", "secret", "controversy"]),
    major("天相星", "Tian Xiang", Element::Water, &["minister", "diplomat", "loyalty", "support"]),
    major("天梁星", "Tian Liang", Element::Earth, &["pillar", "protection", "wisdom", "nurturing"]),
    major("七殺星", "Qi Sha", Element::Metal, &["military", "power", "danger", "heroism"]),
    major("破軍星", "Po Jun", Element::Water, &["destruction", "rebellion", "change", "transformation"]),
];

/// The full star catalog.
pub fn stars() -> &'static [Star] {
    &MAJOR_STARS
}

/// Find a star by exact Chinese name, exact romanization, or a substring of
/// the Chinese name (so `紫微` finds `紫微星`). Blank queries match nothing.
pub fn find_star(query: &str) -> Option<&'static Star> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    let found = MAJOR_STARS
        .iter()
        .find(|s| s.name == query || s.romanization == query || s.name.contains(query));
    if found.is_none() {
        warn!(query, "no star matches");
    }
    found
}

/// The 12 palaces (十二宮) in chart order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Palace {
    Life,
    Siblings,
    Spouse,
    Children,
    Wealth,
    Health,
    Travel,
    Friends,
    Career,
    Property,
    Fortune,
    Parents,
}

/// All 12 palaces in chart order (index 0 = Life).
pub const ALL_PALACES: [Palace; 12] = [
    Palace::Life,
    Palace::Siblings,
    Palace::Spouse,
    Palace::Children,
    Palace::Wealth,
    Palace::Health,
    Palace::Travel,
    Palace::Friends,
    Palace::Career,
    Palace::Property,
    Palace::Fortune,
    Palace::Parents,
];

/// Description and life areas of a palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PalaceInfo {
    pub palace: Palace,
    pub description: &'static str,
    pub areas: &'static [&'static str],
}

impl Palace {
    pub const fn index(self) -> u8 {
        match self {
            Self::Life => 0,
            Self::Siblings => 1,
            Self::Spouse => 2,
            Self::Children => 3,
            Self::Wealth => 4,
            Self::Health => 5,
            Self::Travel => 6,
            Self::Friends => 7,
            Self::Career => 8,
            Self::Property => 9,
            Self::Fortune => 10,
            Self::Parents => 11,
        }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Life => "命宮",
            Self::Siblings => "兄弟宮",
            Self::Spouse => "夫妻宮",
            Self::Children => "子女宮",
            Self::Wealth => "財帛宮",
            Self::Health => "疾厄宮",
            Self::Travel => "遷移宮",
            Self::Friends => "交友宮",
            Self::Career => "官祿宮",
            Self::Property => "田宅宮",
            Self::Fortune => "福德宮",
            Self::Parents => "父母宮",
        }
    }

    /// Look up by glyph (`命宮`) or English variant name (`life`).
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        ALL_PALACES.into_iter().find(|p| {
            p.glyph() == name || format!("{p:?}").eq_ignore_ascii_case(name)
        })
    }

    pub fn info(self) -> &'static PalaceInfo {
        &PALACE_INFO[self.index() as usize]
    }
}

/// Descriptions of all 12 palaces.
pub fn palace_info() -> &'static [PalaceInfo; 12] {
    &PALACE_INFO
}

static PALACE_INFO: [PalaceInfo; 12] = [
    PalaceInfo {
        palace: Palace::Life,
        description: "Self Palace - Life, personality, physical body",
        areas: &["self", "personality", "health", "early life"],
    },
    PalaceInfo {
        palace: Palace::Siblings,
        description: "Siblings Palace - Brothers, sisters, colleagues",
        areas: &["siblings", "colleagues", "support network"],
    },
    PalaceInfo {
        palace: Palace::Spouse,
        description: "Spouse Palace - Marriage, romantic relationships",
        areas: &["marriage", "partnership", "romance"],
    },
    PalaceInfo {
        palace: Palace::Children,
        description: "Children Palace - Children, progeny, creativity",
        areas: &["children", "creativity", "talents"],
    },
    PalaceInfo {
        palace: Palace::Wealth,
        description: "Wealth Palace - Money, finances, possessions",
        areas: &["wealth", "finances", "income"],
    },
    PalaceInfo {
        palace: Palace::Health,
        description: "Health Palace - Health, illnesses, accidents",
        areas: &["health", "illness", "well-being"],
    },
    PalaceInfo {
        palace: Palace::Travel,
        description: "Travel Palace - Travel, external affairs, reputation",
        areas: &["travel", "external affairs", "reputation"],
    },
    PalaceInfo {
        palace: Palace::Friends,
        description: "Friends Palace - Friends, subordinates, social circle",
        areas: &["friends", "subordinates", "social network"],
    },
    PalaceInfo {
        palace: Palace::Career,
        description: "Career Palace - Career, job, education",
        areas: &["career", "job", "education", "achievements"],
    },
    PalaceInfo {
        palace: Palace::Property,
        description: "Property Palace - Home, property, ancestors",
        areas: &["home", "property", "ancestral blessings"],
    },
    PalaceInfo {
        palace: Palace::Fortune,
        description: "Fortune Palace - Fortune, happiness, spiritual",
        areas: &["fortune", "happiness", "spiritual life"],
    },
    PalaceInfo {
        palace: Palace::Parents,
        description: "Parents Palace - Parents, lineage, boss",
        areas: &["parents", "boss", "authority figures"],
    },
];

/// Offset of the secondary star from the primary in [`MAJOR_STARS`].
pub const SECONDARY_STAR_OFFSET: usize = 5;

/// Stars placed in one palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PalaceAssignment {
    pub palace: Palace,
    /// `[primary, secondary]`.
    pub stars: [&'static Star; 2],
}

impl PalaceAssignment {
    pub fn primary(&self) -> &'static Star {
        self.stars[0]
    }

    pub fn secondary(&self) -> &'static Star {
        self.stars[1]
    }
}

/// Place two major stars in each palace. Only the birth day is used.
pub fn calculate_palaces(birth: &BirthData) -> [PalaceAssignment; 12] {
    let start = (birth.day % 12) as usize;
    let n = MAJOR_STARS.len();
    ALL_PALACES.map(|palace| {
        let i = palace.index() as usize;
        PalaceAssignment {
            palace,
            stars: [
                &MAJOR_STARS[(start + i) % n],
                &MAJOR_STARS[(start + i + SECONDARY_STAR_OFFSET) % n],
            ],
        }
    })
}

/// Natural-language reading of one palace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PalaceReading {
    pub palace: Palace,
    pub summary: String,
    pub analysis: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Keyword groups probed on the primary star, each with its suggestion.
const SUGGESTION_RULES: [(&[&str], &str); 4] = [
    (&["wealth", "finance"], "Focus on financial planning and asset accumulation"),
    (&["career", "authority"], "Career advancement through leadership and recognition"),
    (&["relationship", "marriage"], "Relationships require attention and nurturing"),
    (&["health"], "Prioritize health and preventive care"),
];

/// Interpret a palace from its stars. The first star is treated as primary.
pub fn interpret_palace(palace: Palace, stars: &[&Star]) -> PalaceReading {
    let Some(main) = stars.first() else {
        return PalaceReading {
            palace,
            summary: format!("{}: No major star influences", palace.glyph()),
            analysis: vec![
                "Primary star: None".into(),
                "Element: Unknown".into(),
                "Keywords: N/A".into(),
            ],
            suggestions: Vec::new(),
        };
    };

    let suggestions = SUGGESTION_RULES
        .iter()
        .filter(|(keys, _)| keys.iter().any(|k| main.has_keyword(k)))
        .map(|(_, text)| (*text).to_string())
        .collect();

    PalaceReading {
        palace,
        summary: format!("{}: {} influences", palace.glyph(), main.name),
        analysis: vec![
            format!("Primary star: {} ({})", main.name, main.nature.name()),
            format!("Element: {}", main.element.name()),
            format!("Keywords: {}", main.keywords.join(", ")),
        ],
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_fourteen_primary_stars() {
        assert_eq!(stars().len(), 14);
        assert!(stars().iter().all(|s| s.nature == StarNature::Primary));
        assert_eq!(MAJOR_STARS[0].name, "紫微星");
        assert_eq!(MAJOR_STARS[13].romanization, "Po Jun");
    }

    #[test]
    fn find_star_by_name_romanization_and_substring() {
        assert_eq!(find_star("紫微星").map(|s| s.romanization), Some("Zi Wei"));
        assert_eq!(find_star("Tai Yin").map(|s| s.name), Some("太陰星"));
        assert_eq!(find_star("天機").map(|s| s.name), Some("天機星"));
        assert!(find_star("").is_none());
        assert!(find_star("   ").is_none());
        assert!(find_star("Nonexistent").is_none());
    }

    #[test]
    fn palace_lookup() {
        assert_eq!(Palace::from_name("命宮"), Some(Palace::Life));
        assert_eq!(Palace::from_name("career"), Some(Palace::Career));
        assert_eq!(Palace::from_name("nowhere"), None);
        for (i, p) in ALL_PALACES.iter().enumerate() {
            assert_eq!(p.index() as usize, i);
            assert_eq!(p.info().palace, *p);
        }
    }

    #[test]
    fn placement_follows_birth_day() {
        let birth = BirthData::new(1990, 8, 15, 14);
        let chart = calculate_palaces(&birth);
        // 15 mod 12 = 3 -> 武曲星 in the Life palace, 貪狼星 as secondary.
        assert_eq!(chart[0].palace, Palace::Life);
        assert_eq!(chart[0].primary().name, "武曲星");
        assert_eq!(chart[0].secondary().name, "貪狼星");
        // Wraps past the end of the catalog.
        assert_eq!(chart[11].primary().name, "紫微星");
        assert_eq!(chart[11].secondary().name, "天同星");
    }

    #[test]
    fn placement_depends_only_on_day() {
        let a = calculate_palaces(&BirthData::new(1950, 1, 7, 0));
        let b = calculate_palaces(&BirthData::new(2020, 12, 19, 23));
        assert_eq!(a, b);
    }

    #[test]
    fn wealth_star_suggests_financial_planning() {
        let wu_qu = find_star("Wu Qu").unwrap();
        let reading = interpret_palace(Palace::Wealth, &[wu_qu]);
        assert_eq!(reading.summary, "財帛宮: 武曲星 influences");
        assert_eq!(reading.analysis[1], "Element: metal");
        assert_eq!(
            reading.suggestions,
            vec!["Focus on financial planning and asset accumulation".to_string()]
        );
    }

    #[test]
    fn authority_star_suggests_career() {
        let zi_wei = find_star("Zi Wei").unwrap();
        let reading = interpret_palace(Palace::Career, &[zi_wei]);
        assert_eq!(reading.suggestions.len(), 1);
        assert!(reading.suggestions[0].starts_with("Career advancement"));
    }

    #[test]
    fn empty_palace_reading() {
        let reading = interpret_palace(Palace::Health, &[]);
        assert!(reading.summary.contains("No major star"));
        assert!(reading.suggestions.is_empty());
    }
}
