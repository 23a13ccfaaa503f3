//! Composite readings built from the chart, balance and zodiac derivations.
//!
//! Unlike the raw calculators in `yun_base`, every function here taking
//! [`BirthData`] range-checks it first and fails with
//! [`TimeError::InvalidBirthData`](yun_time::TimeError::InvalidBirthData).

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;
use yun_base::{
    Animal, BirthChart, ChartCompatibility, Element, ElementBalance, LuckyElements,
    PillarOptions, Purpose, TimingAdvice, ZodiacSign, check_compatibility, element_balance,
    four_pillars_with, recommendations, strengths, weaknesses, zodiac_sign,
};
use yun_time::BirthData;

use crate::error::YunError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReadingKind {
    FourPillars,
}

/// Everything a reading was derived from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingDetails {
    pub chart: BirthChart,
    pub day_master: Element,
    pub zodiac_sign: ZodiacSign,
    pub element_balance: [ElementBalance; 5],
    pub strengths: Vec<&'static str>,
    pub weaknesses: Vec<&'static str>,
    pub lucky_elements: LuckyElements,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LuckReading {
    #[serde(rename = "type")]
    pub kind: ReadingKind,
    pub summary: String,
    pub details: ReadingDetails,
    pub recommendations: Vec<String>,
}

/// One-line reading: `{animal}年 {day master}日主，{strong}旺，{weak}需補。`
pub fn summary_line(animal: Animal, day_master: Element, strong: &[&str], weak: &[&str]) -> String {
    format!(
        "{}年 {}日主，{}旺，{}需補。",
        animal.name(),
        day_master.name(),
        strong.join("、"),
        weak.join("、")
    )
}

/// Validate and compute the Four Pillars chart.
pub fn analyze_birth(birth: &BirthData) -> Result<BirthChart, YunError> {
    analyze_birth_with(birth, PillarOptions::default())
}

pub fn analyze_birth_with(
    birth: &BirthData,
    options: PillarOptions,
) -> Result<BirthChart, YunError> {
    birth.validate()?;
    let chart = four_pillars_with(birth, options);
    debug!(
        birth = %birth,
        year = %chart.year.glyphs(),
        month = %chart.month.glyphs(),
        day = %chart.day.glyphs(),
        hour = %chart.hour.glyphs(),
        "computed four pillars"
    );
    Ok(chart)
}

/// Full reading with default pillar options.
pub fn read(birth: &BirthData) -> Result<LuckReading, YunError> {
    read_with(birth, PillarOptions::default())
}

pub fn read_with(birth: &BirthData, options: PillarOptions) -> Result<LuckReading, YunError> {
    let chart = analyze_birth_with(birth, options)?;
    let balance = element_balance(&chart);
    let zodiac = zodiac_sign(birth.year);
    let strong = strengths(&balance);
    let weak = weaknesses(&balance);

    let summary = summary_line(zodiac.animal, chart.day_master, &strong, &weak);
    let recommendations = recommendations(&balance);

    Ok(LuckReading {
        kind: ReadingKind::FourPillars,
        summary,
        details: ReadingDetails {
            chart,
            day_master: chart.day_master,
            zodiac_sign: zodiac,
            element_balance: balance,
            strengths: strong,
            weaknesses: weak,
            lucky_elements: yun_base::lucky_elements(chart.day_master),
        },
        recommendations,
    })
}

/// Compare two births by their day pillars.
pub fn compatibility(a: &BirthData, b: &BirthData) -> Result<ChartCompatibility, YunError> {
    let chart_a = analyze_birth(a)?;
    let chart_b = analyze_birth(b)?;
    let result = check_compatibility(&chart_a, &chart_b);
    debug!(score = result.score, level = ?result.level, "chart compatibility");
    Ok(result)
}

pub fn best_timing(date: NaiveDate, day_master: Element, purpose: Purpose) -> TimingAdvice {
    yun_base::best_timing(date, day_master, purpose)
}

pub fn lucky_elements(day_master: Element) -> LuckyElements {
    yun_base::lucky_elements(day_master)
}

#[cfg(test)]
mod tests {
    use super::*;
    use yun_base::HourStemMode;
    use yun_time::TimeError;

    #[test]
    fn reference_summary() {
        let reading = read(&BirthData::new(1990, 8, 15, 14)).unwrap();
        assert_eq!(reading.kind, ReadingKind::FourPillars);
        assert_eq!(reading.summary, "Horse年 water日主，金旺，木、火、水需補。");
        assert_eq!(reading.details.day_master, Element::Water);
        assert_eq!(reading.details.strengths, vec!["金"]);
        assert_eq!(reading.recommendations.len(), 3);
    }

    #[test]
    fn summary_with_no_strong_elements() {
        let line = summary_line(Animal::Rat, Element::Wood, &[], &["火"]);
        assert_eq!(line, "Rat年 wood日主，旺，火需補。");
    }

    #[test]
    fn out_of_range_input_is_rejected() {
        for bad in [
            BirthData::new(1990, 13, 1, 0),
            BirthData::new(1990, 2, 30, 0),
            BirthData::new(1990, 1, 1, 24),
        ] {
            let err = read(&bad).unwrap_err();
            assert!(matches!(err, YunError::Time(TimeError::InvalidBirthData(_))), "{bad}");
        }
    }

    #[test]
    fn options_reach_the_chart() {
        let birth = BirthData::new(1990, 8, 15, 14);
        let options = PillarOptions {
            hour_stem: HourStemMode::DayStem,
        };
        let simple = analyze_birth(&birth).unwrap();
        let traditional = analyze_birth_with(&birth, options).unwrap();
        assert_ne!(simple.hour.stem, traditional.hour.stem);
    }

    #[test]
    fn reading_carries_the_validated_chart() {
        let birth = BirthData::new(1990, 8, 15, 14);
        let options = PillarOptions {
            hour_stem: HourStemMode::DayStem,
        };
        let reading = read_with(&birth, options).unwrap();
        assert_eq!(reading.details.chart, analyze_birth_with(&birth, options).unwrap());
    }

    #[test]
    fn extreme_year_reads_without_overflow() {
        for year in [i32::MIN, i32::MAX] {
            let reading = read(&BirthData::new(year, 1, 1, 0)).unwrap();
            assert_eq!(reading.details.chart.hour.branch, yun_base::Branch::Zi);
        }
    }

    #[test]
    fn compatibility_with_self() {
        let birth = BirthData::new(1990, 8, 15, 12);
        let result = compatibility(&birth, &birth).unwrap();
        assert_eq!(result.score, 60);
    }

    #[test]
    fn reading_serializes_with_type_tag() {
        let reading = read(&BirthData::new(1990, 8, 15, 14)).unwrap();
        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(json["type"], "four-pillars");
        assert_eq!(json["details"]["dayMaster"], "water");
        assert_eq!(json["details"]["zodiacSign"]["animal"], "Horse");
    }
}
