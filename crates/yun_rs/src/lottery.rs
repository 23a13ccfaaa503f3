//! Entertainment-only lottery picks seeded from a birth chart.
//!
//! Candidate numbers come from the zodiac animal, the Day Master's lucky
//! elements, the element of the current double-hour and a few universal
//! numbers. Half of each pick is drawn from those candidates plus the game's
//! hot list; the rest is uniform random. The random source is injected so
//! callers can seed it.

use chrono::{Local, Timelike};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use tracing::debug;
use yun_base::{
    BirthChart, Element, ElementCounts, element_counts, hour_branch_index, lucky_elements,
    zodiac_sign,
};
use yun_time::BirthData;

use crate::config::{LOTTO_649, LOTTO_MAX, LotteryConfig};
use crate::error::YunError;
use crate::reading::analyze_birth;

/// Numbers added to every candidate pool.
pub const UNIVERSAL_LUCKY: [u32; 3] = [8, 6, 9];

/// Element buckets indexed by `branch mod 5`.
const HOUR_ELEMENTS: [Element; 5] = [
    Element::Water,
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
];

/// Which game suits the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LotteryType {
    #[serde(rename = "649")]
    Lotto649,
    #[serde(rename = "max")]
    Max,
    #[serde(rename = "either")]
    Either,
}

impl LotteryType {
    /// Earth-heavy charts (5+ earth glyphs) get 6/49; fire plus water
    /// totalling 5+ gets Max; anything else is either.
    pub fn for_counts(counts: &ElementCounts) -> Self {
        if counts.get(Element::Earth) >= 5 {
            Self::Lotto649
        } else if counts.get(Element::Fire) + counts.get(Element::Water) >= 5 {
            Self::Max
        } else {
            Self::Either
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Lotto649 => "Lotto 6/49",
            Self::Max => "Lotto Max",
            Self::Either => "Either - pick based on jackpot",
        }
    }

    pub const fn reason(self) -> &'static str {
        match self {
            Self::Lotto649 => {
                "Your chart is Earth-dominant (stable). Lotto 6/49 suits your steady fortune."
            }
            Self::Max => {
                "Your chart has dynamic Fire/Water energy. Lotto Max matches your volatile fortune."
            }
            Self::Either => {
                "Your chart is balanced. Both lotteries work, pick based on jackpot size."
            }
        }
    }
}

/// Double-hour branch and its element bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourInfluence {
    pub branch: u8,
    pub element: Element,
}

pub fn current_hour_influence(hour: u32) -> HourInfluence {
    let branch = hour_branch_index(hour);
    HourInfluence {
        branch,
        element: HOUR_ELEMENTS[(branch % 5) as usize],
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LotteryNumbers {
    /// Lotto 6/49 pick.
    pub main: Vec<u32>,
    /// Lotto Max pick.
    pub max: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LotteryRecommendation {
    pub lottery_type: LotteryType,
    pub reason: &'static str,
    pub numbers: LotteryNumbers,
    /// Human-readable origin of each group of candidates.
    pub sources: Vec<String>,
    pub influence: HourInfluence,
}

fn join_numbers(numbers: &[u32]) -> String {
    numbers.iter().map(u32::to_string).collect::<Vec<_>>().join(", ")
}

/// Candidate numbers for a chart plus a description of where they came from.
/// May contain duplicates and out-of-range values.
pub fn candidate_numbers(
    birth_year: i32,
    chart: &BirthChart,
    influence: HourInfluence,
) -> (Vec<u32>, Vec<String>) {
    let mut numbers = Vec::new();
    let mut sources = Vec::with_capacity(3);

    let sign = zodiac_sign(birth_year);
    let animal_numbers = sign.animal.lucky_attributes().numbers;
    numbers.extend_from_slice(animal_numbers);
    sources.push(format!("Zodiac ({}): {}", sign.animal.name(), join_numbers(animal_numbers)));

    let day_master = lucky_elements(chart.day_master).numbers;
    sources.push(format!(
        "Day Master ({}): {}",
        chart.day_master.name(),
        join_numbers(&day_master)
    ));
    numbers.extend(day_master);

    let hour = lucky_elements(influence.element).numbers;
    sources.push(format!(
        "Current Hour ({}): {}",
        influence.element.name(),
        join_numbers(&hour)
    ));
    numbers.extend(hour);

    numbers.extend_from_slice(&UNIVERSAL_LUCKY);
    (numbers, sources)
}

/// Draw `game.count` distinct numbers in the game's range, ascending.
///
/// Up to half come from the shuffled union of in-range `lucky` numbers and
/// the game's hot list; the rest are uniform draws skipping duplicates.
/// A game with an inverted range yields an empty pick.
pub fn generate_numbers<R: Rng>(
    lucky: &[u32],
    game: &LotteryConfig,
    rng: &mut R,
) -> Vec<u32> {
    let count = game.count.min(game.span());

    let mut pool: Vec<u32> = Vec::new();
    for &n in lucky.iter().chain(game.hot_numbers) {
        if game.contains(n) && !pool.contains(&n) {
            pool.push(n);
        }
    }
    pool.shuffle(rng);
    pool.truncate((count / 2).min(pool.len()));

    let mut picks = pool;
    while picks.len() < count {
        let n = rng.random_range(game.min..=game.max);
        if !picks.contains(&n) {
            picks.push(n);
        }
    }
    picks.sort_unstable();
    picks
}

/// Recommend a game and draw numbers for both games.
///
/// `hour_now` is the local wall-clock hour used for the hour influence.
pub fn recommend_lottery<R: Rng>(
    birth: &BirthData,
    hour_now: u32,
    rng: &mut R,
) -> Result<LotteryRecommendation, YunError> {
    let chart = analyze_birth(birth)?;
    let lottery_type = LotteryType::for_counts(&element_counts(&chart));
    let influence = current_hour_influence(hour_now);
    let (candidates, sources) = candidate_numbers(birth.year, &chart, influence);

    let numbers = LotteryNumbers {
        main: generate_numbers(&candidates, &LOTTO_649, rng),
        max: generate_numbers(&candidates, &LOTTO_MAX, rng),
    };
    debug!(?lottery_type, ?numbers, "lottery recommendation");

    Ok(LotteryRecommendation {
        lottery_type,
        reason: lottery_type.reason(),
        numbers,
        sources,
        influence,
    })
}

/// [`recommend_lottery`] with the local clock and the thread-local RNG.
pub fn recommend_lottery_now(birth: &BirthData) -> Result<LotteryRecommendation, YunError> {
    recommend_lottery(birth, Local::now().hour(), &mut rand::rng())
}
