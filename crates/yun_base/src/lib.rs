//! Chinese metaphysics derivations built on civil-calendar inputs.
//!
//! This crate provides:
//! - Heavenly Stem / Earthly Branch tables and the 60-pair sexagenary cycle
//! - Four Pillars (八字) charts from birth data
//! - Five Elements balance, lucky attributes, compatibility and date selection
//! - Zodiac animal resolution and pairwise animal compatibility
//! - A simplified Purple Star (紫微斗數) palace placement
//!
//! Every calculation here is total over its typed inputs. Range validation
//! of birth data belongs to the caller (see `yun_time::BirthData::validate`).

pub mod element;
pub mod five_elements;
pub mod pillars;
pub mod purple_star;
pub mod stem_branch;
pub mod zodiac;

pub use element::{ALL_ELEMENTS, Element, ElementProfile, Polarity};
pub use five_elements::{
    ALL_PURPOSES, ChartCompatibility, CompatibilityLevel, ElementBalance, LuckyElements, Purpose,
    Strength, TimingAdvice, best_timing, check_compatibility, element_balance, lucky_elements,
    month_element, recommendations, strengths, weaknesses,
};
pub use pillars::{
    BirthChart, ElementCounts, HourStemMode, PillarOptions, day_pillar, element_counts,
    four_pillars, four_pillars_with, hour_branch_index, hour_pillar, month_pillar, year_pillar,
};
pub use purple_star::{
    ALL_PALACES, MAJOR_STARS, Palace, PalaceAssignment, PalaceInfo, PalaceReading, Star,
    StarNature, calculate_palaces, find_star, interpret_palace, palace_info, stars,
};
pub use stem_branch::{ALL_BRANCHES, ALL_STEMS, Branch, Pillar, SEXAGENARY_CYCLE, Stem};
pub use zodiac::{
    ALL_ANIMALS, Animal, AnimalLuck, THREE_HARMONY_TRIADS, ZodiacCompatibility, ZodiacRelation,
    ZodiacSign, lucky_attributes_by_name, year_element, zodiac_animal, zodiac_compatibility,
    zodiac_sign,
};
