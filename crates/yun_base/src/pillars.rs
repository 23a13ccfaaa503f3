//! Four Pillars (八字): year, month, day and hour stem-branch pairs.
//!
//! Epoch: cycle position 0 (甲子) is CE year 4. Month and hour pillars use
//! fixed-offset formulas rather than solar-term or true-solar-time cuts, so
//! births near a solar-term boundary can land one month off a full almanac.
//!
//! Inputs are not range-checked here. Out-of-range fields wrap through the
//! modular arithmetic and still yield a well-formed chart; validate with
//! [`BirthData::validate`] first if that matters.

use serde::Serialize;
use yun_time::{BirthData, julian_day_number};

use crate::element::{ALL_ELEMENTS, Element};
use crate::stem_branch::{Branch, Pillar, Stem};

/// CE year whose year pillar is 甲子 (cycle position 0).
pub const YEAR_PILLAR_EPOCH: i32 = 4;

/// How the hour-pillar stem is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HourStemMode {
    /// Stem index equals the hour branch index.
    #[default]
    Simplified,
    /// Traditional 五鼠遁 rule: stem = (day stem mod 5) × 2 + branch, mod 10.
    DayStem,
}

/// Knobs for [`four_pillars_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PillarOptions {
    pub hour_stem: HourStemMode,
}

/// A computed Four Pillars chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthChart {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
    /// Element of the day stem (日主).
    pub day_master: Element,
}

impl BirthChart {
    /// Pillars in year, month, day, hour order.
    pub fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }
}

/// Per-element tally of the 8 stem/branch glyphs of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ElementCounts {
    /// Indexed by `Element::index()`.
    pub counts: [u8; 5],
}

impl ElementCounts {
    pub fn get(&self, element: Element) -> u8 {
        self.counts[element.index() as usize]
    }

    /// Always 8 for a real chart.
    pub fn total(&self) -> u8 {
        self.counts.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Element, u8)> + '_ {
        ALL_ELEMENTS.into_iter().map(|e| (e, self.get(e)))
    }
}

/// Position of `year` in the 60-year cycle.
pub fn year_cycle_index(year: i32) -> u8 {
    (i64::from(year) - i64::from(YEAR_PILLAR_EPOCH)).rem_euclid(60) as u8
}

/// Year pillar for a CE year.
pub fn year_pillar(year: i32) -> Pillar {
    Pillar::from_cycle_index(year_cycle_index(year))
}

/// Month pillar: stem = (year stem × 2 + month) mod 10, branch = (month + 1) mod 12.
pub fn month_pillar(year: i32, month: u32) -> Pillar {
    let year_stem = u64::from(year_pillar(year).stem.index());
    let month = u64::from(month);
    let stem = (year_stem * 2 + month) % 10;
    let branch = (month + 1) % 12;
    Pillar::new(Stem::from_index(stem as u8), Branch::from_index(branch as u8))
}

/// Day pillar from the Julian Day Number: cycle index = (JDN − 1) mod 60.
pub fn day_pillar(year: i32, month: u32, day: u32) -> Pillar {
    let jdn = julian_day_number(year, month as i32, day as i32);
    Pillar::from_cycle_index((jdn - 1).rem_euclid(60) as u8)
}

/// Branch index of the double-hour containing `hour` (23:00-00:59 → 子).
pub fn hour_branch_index(hour: u32) -> u8 {
    ((u64::from(hour) + 1) / 2 % 12) as u8
}

/// Hour pillar. `day_stem` is only consulted in [`HourStemMode::DayStem`].
pub fn hour_pillar(hour: u32, day_stem: Stem, mode: HourStemMode) -> Pillar {
    let branch = hour_branch_index(hour);
    let stem = match mode {
        HourStemMode::Simplified => branch,
        HourStemMode::DayStem => ((day_stem.index() % 5) * 2 + branch) % 10,
    };
    Pillar::new(Stem::from_index(stem), Branch::from_index(branch))
}

/// Compute the chart with default options.
pub fn four_pillars(birth: &BirthData) -> BirthChart {
    four_pillars_with(birth, PillarOptions::default())
}

/// Compute the chart with explicit options.
pub fn four_pillars_with(birth: &BirthData, options: PillarOptions) -> BirthChart {
    let year = year_pillar(birth.year);
    let month = month_pillar(birth.year, birth.month);
    let day = day_pillar(birth.year, birth.month, birth.day);
    let hour = hour_pillar(birth.hour, day.stem, options.hour_stem);

    BirthChart {
        year,
        month,
        day,
        hour,
        day_master: day.stem.element(),
    }
}

/// Count each element across the 4 stems and 4 branches.
pub fn element_counts(chart: &BirthChart) -> ElementCounts {
    let mut counts = ElementCounts::default();
    for pillar in chart.pillars() {
        counts.counts[pillar.stem.element().index() as usize] += 1;
        counts.counts[pillar.branch.element().index() as usize] += 1;
    }
    counts
}
