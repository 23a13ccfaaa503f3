//! Five Elements balance, lucky attributes, chart compatibility and timing.
//!
//! All scoring here is a fixed heuristic over the generating (相生) and
//! overcoming (相剋) cycles; nothing depends on external state.

use std::fmt::{Display, Formatter};

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::element::{ALL_ELEMENTS, Element};
use crate::pillars::{BirthChart, element_counts};
use crate::zodiac::Animal;

/// Number of stem/branch glyphs in a chart.
const GLYPHS_PER_CHART: f64 = 8.0;

/// Percentage at or above which an element counts as strong.
pub const STRONG_THRESHOLD_PCT: f64 = 30.0;
/// Percentage at or above which an element counts as balanced.
pub const BALANCED_THRESHOLD_PCT: f64 = 15.0;

/// Qualitative strength of one element within a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Strong,
    Balanced,
    Weak,
}

impl Strength {
    /// Classify a percentage share. Boundaries are inclusive on the upper class.
    pub fn from_percentage(pct: f64) -> Self {
        if pct >= STRONG_THRESHOLD_PCT {
            Self::Strong
        } else if pct >= BALANCED_THRESHOLD_PCT {
            Self::Balanced
        } else {
            Self::Weak
        }
    }
}

/// Share of one element in a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElementBalance {
    pub element: Element,
    pub count: u8,
    /// Percentage of the 8 glyphs, in [0, 100].
    pub percentage: f64,
    pub strength: Strength,
}

/// Balance entries for all five elements, in element order.
pub fn element_balance(chart: &BirthChart) -> [ElementBalance; 5] {
    let counts = element_counts(chart);
    ALL_ELEMENTS.map(|element| {
        let count = counts.get(element);
        let percentage = f64::from(count) / GLYPHS_PER_CHART * 100.0;
        ElementBalance {
            element,
            count,
            percentage,
            strength: Strength::from_percentage(percentage),
        }
    })
}

fn glyphs_with(balance: &[ElementBalance], strength: Strength) -> Vec<&'static str> {
    balance
        .iter()
        .filter(|b| b.strength == strength)
        .map(|b| b.element.glyph())
        .collect()
}

/// Glyphs of the strong elements.
pub fn strengths(balance: &[ElementBalance]) -> Vec<&'static str> {
    glyphs_with(balance, Strength::Strong)
}

/// Glyphs of the weak elements (those needing support).
pub fn weaknesses(balance: &[ElementBalance]) -> Vec<&'static str> {
    glyphs_with(balance, Strength::Weak)
}

/// Lucky attributes for a Day Master.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LuckyElements {
    pub colors: Vec<&'static str>,
    /// Ascending, no duplicates.
    pub numbers: Vec<u32>,
    pub directions: Vec<&'static str>,
    pub months: Vec<u32>,
}

fn push_unique<T: PartialEq + Copy>(dst: &mut Vec<T>, src: &[T]) {
    for item in src {
        if !dst.contains(item) {
            dst.push(*item);
        }
    }
}

/// Union of the attributes of the element that generates `day_master` and
/// the element `day_master` overcomes. Months come from the Day Master itself.
pub fn lucky_elements(day_master: Element) -> LuckyElements {
    let mut lucky = LuckyElements {
        colors: Vec::new(),
        numbers: Vec::new(),
        directions: Vec::new(),
        months: day_master.lucky_months().to_vec(),
    };

    for element in [day_master.generated_by(), day_master.overcomes()] {
        let profile = element.profile();
        push_unique(&mut lucky.colors, profile.colors);
        push_unique(&mut lucky.numbers, profile.numbers);
        push_unique(&mut lucky.directions, profile.directions);
    }
    lucky.numbers.sort_unstable();
    lucky
}

/// Four-way bucket of a compatibility score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityLevel {
    Excellent,
    Good,
    Challenging,
    Difficult,
}

impl CompatibilityLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            70.. => Self::Excellent,
            50..=69 => Self::Good,
            30..=49 => Self::Challenging,
            _ => Self::Difficult,
        }
    }

    pub const fn summary(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent compatibility",
            Self::Good => "Good compatibility",
            Self::Challenging => "Challenging compatibility",
            Self::Difficult => "Difficult compatibility",
        }
    }
}

impl Display for CompatibilityLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.summary())
    }
}

/// Result of comparing two charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartCompatibility {
    /// Clamped to [0, 100].
    pub score: u8,
    pub level: CompatibilityLevel,
    pub summary: &'static str,
    pub details: Vec<String>,
}

const COMPAT_BASE: i32 = 50;
const SAME_ELEMENT: i32 = 10;
const GENERATING: i32 = 15;
const OVERCOMING: i32 = -10;
const SIX_HARMONY: i32 = 20;
const SIX_CONFLICT: i32 = -15;

fn stem_interaction(a: Element, b: Element) -> (i32, String) {
    if a == b {
        return (SAME_ELEMENT, "Same Day Master element - mutual understanding".into());
    }
    if a.generates() == b {
        return (GENERATING, format!("{} generates {} - giving relationship", a.name(), b.name()));
    }
    if b.generates() == a {
        return (GENERATING, format!("{} generates {} - supportive relationship", b.name(), a.name()));
    }
    if a.overcomes() == b {
        return (OVERCOMING, format!("{} overcomes {} - potential tension", a.name(), b.name()));
    }
    if b.overcomes() == a {
        return (OVERCOMING, format!("{} overcomes {} - potential tension", b.name(), a.name()));
    }
    (0, "Neutral element relationship".into())
}

fn branch_interaction(a: Animal, b: Animal) -> (i32, String) {
    if a.six_harmony() == b {
        (SIX_HARMONY, format!("Six Harmony: {} + {}", a.name(), b.name()))
    } else if a.six_conflict() == b {
        (SIX_CONFLICT, format!("Six Conflict: {} + {} - challenging", a.name(), b.name()))
    } else {
        (0, format!("Neutral: {} + {}", a.name(), b.name()))
    }
}

/// Score two charts by day-stem element and day-branch animal interactions.
///
/// Starts at 50; same element +10, generating either way +15, overcoming
/// either way −10; Six Harmony branches +20, Six Conflict −15.
pub fn check_compatibility(a: &BirthChart, b: &BirthChart) -> ChartCompatibility {
    let (stem_score, stem_detail) = stem_interaction(a.day.stem.element(), b.day.stem.element());
    let (branch_score, branch_detail) =
        branch_interaction(a.day.branch.animal(), b.day.branch.animal());

    let score = (COMPAT_BASE + stem_score + branch_score).clamp(0, 100) as u8;
    let level = CompatibilityLevel::from_score(score);
    ChartCompatibility {
        score,
        level,
        summary: level.summary(),
        details: vec![stem_detail, branch_detail],
    }
}

/// Kind of undertaking a date is being chosen for.
///
/// Accepted for future differentiation; scoring currently ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Purpose {
    #[default]
    Business,
    Marriage,
    Travel,
    Construction,
}

pub const ALL_PURPOSES: [Purpose; 4] = [
    Purpose::Business,
    Purpose::Marriage,
    Purpose::Travel,
    Purpose::Construction,
];

impl Purpose {
    /// Case-insensitive lookup by [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        ALL_PURPOSES
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Business => "business",
            Self::Marriage => "marriage",
            Self::Travel => "travel",
            Self::Construction => "construction",
        }
    }
}

/// Outcome of a date-selection (择日) check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimingAdvice {
    pub score: u8,
    pub recommended: Vec<NaiveDate>,
    pub reason: String,
    pub purpose: Purpose,
}

const TIMING_BASE: i32 = 50;
const TIMING_SUPPORT: i32 = 20;
const TIMING_DRAIN: i32 = -10;

/// Element governing a calendar month (1-12) for date selection.
pub const fn month_element(month: u32) -> Element {
    match month {
        1 | 2 | 12 => Element::Water,
        3 | 4 => Element::Wood,
        5 | 6 => Element::Fire,
        7 | 8 | 11 => Element::Metal,
        _ => Element::Earth,
    }
}

/// Score a target date for a Day Master. Only the date's month matters.
///
/// +20 when the month element equals the Day Master or generates it,
/// −10 when the Day Master overcomes the month element.
pub fn best_timing(date: NaiveDate, day_master: Element, purpose: Purpose) -> TimingAdvice {
    let month_el = month_element(date.month());
    let (delta, reason) = if month_el == day_master || month_el == day_master.generated_by() {
        (TIMING_SUPPORT, format!("Month element ({}) supports Day Master", month_el.name()))
    } else if month_el == day_master.overcomes() {
        (
            TIMING_DRAIN,
            format!("Month element ({}) is overcome by Day Master - energy is spent", month_el.name()),
        )
    } else {
        (0, format!("Month element ({}) is neutral to Day Master", month_el.name()))
    };

    TimingAdvice {
        score: (TIMING_BASE + delta) as u8,
        recommended: vec![date],
        reason,
        purpose,
    }
}

/// One suggestion per weak element, plus a note when 3+ elements are strong.
pub fn recommendations(balance: &[ElementBalance]) -> Vec<String> {
    let mut recs: Vec<String> = balance
        .iter()
        .filter(|b| b.strength == Strength::Weak)
        .map(|b| {
            let profile = b.element.profile();
            let numbers: Vec<String> = profile.numbers.iter().map(u32::to_string).collect();
            format!(
                "Strengthen {}: Use {} colors, numbers {}",
                b.element.name(),
                profile.colors.join("/"),
                numbers.join(", ")
            )
        })
        .collect();

    let strong = balance.iter().filter(|b| b.strength == Strength::Strong).count();
    if strong >= 3 {
        recs.push("Strong chart - you have good foundation, focus on timing".into());
    }
    recs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stem_branch::{Branch, Pillar, Stem};

    fn chart_with_day(stem: Stem, branch: Branch) -> BirthChart {
        let filler = Pillar::new(Stem::Jia, Branch::Zi);
        BirthChart {
            year: filler,
            month: filler,
            day: Pillar::new(stem, branch),
            hour: filler,
            day_master: stem.element(),
        }
    }

    fn balance_of(levels: [Strength; 5]) -> Vec<ElementBalance> {
        ALL_ELEMENTS
            .iter()
            .zip(levels)
            .map(|(&element, strength)| ElementBalance {
                element,
                count: 0,
                percentage: 0.0,
                strength,
            })
            .collect()
    }

    #[test]
    fn strength_thresholds_inclusive() {
        assert_eq!(Strength::from_percentage(30.0), Strength::Strong);
        assert_eq!(Strength::from_percentage(29.9), Strength::Balanced);
        assert_eq!(Strength::from_percentage(15.0), Strength::Balanced);
        assert_eq!(Strength::from_percentage(14.9), Strength::Weak);
        assert_eq!(Strength::from_percentage(0.0), Strength::Weak);
    }

    #[test]
    fn lucky_for_wood() {
        let l = lucky_elements(Element::Wood);
        assert_eq!(l.numbers, vec![1, 5, 6, 8]);
        assert_eq!(
            l.colors,
            vec!["black", "blue", "dark blue", "yellow", "brown", "beige", "gold"]
        );
        assert_eq!(l.directions, vec!["north", "northeast", "southwest", "center"]);
        assert_eq!(l.months, vec![1, 2]);
    }

    #[test]
    fn lucky_numbers_deduplicated() {
        // Water: metal {6,7} ∪ fire {2,7}
        assert_eq!(lucky_elements(Element::Water).numbers, vec![2, 6, 7]);
    }

    #[test]
    fn lucky_colors_deduplicated() {
        // Fire: wood {green, blue, turquoise} ∪ metal {white, silver, gold, gray}
        let l = lucky_elements(Element::Fire);
        assert_eq!(l.colors.len(), 7);
        // Metal: earth ∪ wood
        let l = lucky_elements(Element::Metal);
        assert_eq!(l.directions, vec!["northeast", "southwest", "center", "east", "southeast"]);
    }

    #[test]
    fn compatibility_same_element_and_harmony() {
        // 甲子 vs 乙丑: wood/wood (+10), Rat/Ox harmony (+20)
        let a = chart_with_day(Stem::Jia, Branch::Zi);
        let b = chart_with_day(Stem::Yi, Branch::Chou);
        let c = check_compatibility(&a, &b);
        assert_eq!(c.score, 80);
        assert_eq!(c.level, CompatibilityLevel::Excellent);
        assert_eq!(c.details.len(), 2);
    }

    #[test]
    fn compatibility_overcoming_and_conflict() {
        // 庚 metal vs 甲 wood (−10), Rat vs Horse (−15)
        let a = chart_with_day(Stem::Geng, Branch::Zi);
        let b = chart_with_day(Stem::Jia, Branch::Wu);
        let c = check_compatibility(&a, &b);
        assert_eq!(c.score, 25);
        assert_eq!(c.level, CompatibilityLevel::Difficult);
        assert_eq!(c.summary, "Difficult compatibility");
    }

    #[test]
    fn compatibility_generating_neutral_branch() {
        // 壬 water generates 甲 wood (+15), Rat vs Tiger neutral
        let a = chart_with_day(Stem::Ren, Branch::Zi);
        let b = chart_with_day(Stem::Jia, Branch::Yin);
        let c = check_compatibility(&a, &b);
        assert_eq!(c.score, 65);
        assert_eq!(c.level, CompatibilityLevel::Good);
        assert!(c.details[0].contains("water generates wood"));
    }

    #[test]
    fn compatibility_level_buckets() {
        assert_eq!(CompatibilityLevel::from_score(100), CompatibilityLevel::Excellent);
        assert_eq!(CompatibilityLevel::from_score(70), CompatibilityLevel::Excellent);
        assert_eq!(CompatibilityLevel::from_score(50), CompatibilityLevel::Good);
        assert_eq!(CompatibilityLevel::from_score(30), CompatibilityLevel::Challenging);
        assert_eq!(CompatibilityLevel::from_score(29), CompatibilityLevel::Difficult);
    }

    #[test]
    fn timing_supported_month() {
        // March is wood; wood Day Master → supported
        let date = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let t = best_timing(date, Element::Wood, Purpose::Business);
        assert_eq!(t.score, 70);
        assert_eq!(t.recommended, vec![date]);
    }

    #[test]
    fn timing_generator_month() {
        // January is water, which generates wood
        let date = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
        assert_eq!(best_timing(date, Element::Wood, Purpose::Travel).score, 70);
    }

    #[test]
    fn timing_overcome_month() {
        // September is earth; wood overcomes earth
        let date = NaiveDate::from_ymd_opt(2026, 9, 10).unwrap();
        assert_eq!(best_timing(date, Element::Wood, Purpose::Marriage).score, 40);
    }

    #[test]
    fn timing_neutral_month() {
        // May is fire; wood generates fire → neither rule applies
        let date = NaiveDate::from_ymd_opt(2026, 5, 10).unwrap();
        assert_eq!(best_timing(date, Element::Wood, Purpose::Construction).score, 50);
    }

    #[test]
    fn timing_ignores_purpose() {
        let date = NaiveDate::from_ymd_opt(2026, 7, 1).unwrap();
        let a = best_timing(date, Element::Water, Purpose::Business);
        let b = best_timing(date, Element::Water, Purpose::Marriage);
        assert_eq!(a.score, b.score);
        assert_eq!(a.reason, b.reason);
    }

    #[test]
    fn timing_advice_serializes_dates_as_iso() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let advice = best_timing(date, Element::Water, Purpose::Travel);
        let json = serde_json::to_value(&advice).unwrap();
        assert_eq!(json["recommended"][0], "2026-10-18");
        assert_eq!(json["purpose"], "travel");
        assert_eq!(json["score"], 50);
    }

    #[test]
    fn purpose_names() {
        assert_eq!(Purpose::from_name("Marriage"), Some(Purpose::Marriage));
        assert_eq!(Purpose::from_name(" travel "), Some(Purpose::Travel));
        assert_eq!(Purpose::from_name("party"), None);
    }

    #[test]
    fn month_element_table() {
        let expected = [
            Element::Water,
            Element::Water,
            Element::Wood,
            Element::Wood,
            Element::Fire,
            Element::Fire,
            Element::Metal,
            Element::Metal,
            Element::Earth,
            Element::Earth,
            Element::Metal,
            Element::Water,
        ];
        for (i, e) in expected.iter().enumerate() {
            assert_eq!(month_element(i as u32 + 1), *e);
        }
    }

    #[test]
    fn recommendations_for_weak_elements() {
        use Strength::*;
        let recs = recommendations(&balance_of([Weak, Balanced, Balanced, Strong, Weak]));
        assert_eq!(
            recs,
            vec![
                "Strengthen wood: Use green/blue/turquoise colors, numbers 3, 4".to_string(),
                "Strengthen water: Use black/blue/dark blue colors, numbers 1, 6".to_string(),
            ]
        );
    }

    #[test]
    fn recommendations_strong_chart_note() {
        use Strength::*;
        let recs = recommendations(&balance_of([Strong, Strong, Strong, Balanced, Balanced]));
        assert_eq!(recs, vec!["Strong chart - you have good foundation, focus on timing"]);
    }

    #[test]
    fn strengths_and_weaknesses_glyphs() {
        use Strength::*;
        let b = balance_of([Weak, Weak, Balanced, Strong, Weak]);
        assert_eq!(strengths(&b), vec!["金"]);
        assert_eq!(weaknesses(&b), vec!["木", "火", "水"]);
    }
}
