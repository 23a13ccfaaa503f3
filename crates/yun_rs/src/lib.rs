//! Convenience facade over the yun calculators.
//!
//! Validates birth data before handing it to `yun_base`, composes full
//! readings, produces lottery picks, and stores the user's profile.
//!
//! # Quick start
//!
//! ```rust
//! use yun_rs::*;
//!
//! let birth = BirthData::new(1990, 8, 15, 14);
//! let reading = read(&birth).unwrap();
//! assert!(reading.summary.starts_with("Horse年"));
//! ```

pub mod config;
pub mod error;
pub mod lottery;
pub mod profile;
pub mod reading;

pub use config::{LOTTO_649, LOTTO_MAX, LotteryConfig, YunConfig};
pub use error::YunError;
pub use lottery::{
    HourInfluence, LotteryNumbers, LotteryRecommendation, LotteryType, current_hour_influence,
    generate_numbers, recommend_lottery, recommend_lottery_now,
};
pub use profile::{JsonFileStore, MemoryStore, ProfileStore, UserProfile};
pub use reading::{
    LuckReading, ReadingDetails, ReadingKind, analyze_birth, analyze_birth_with, best_timing,
    compatibility, lucky_elements, read, read_with,
};

// Re-export the types callers pass in or get back, so depending on
// yun_rs alone is enough.
pub use yun_base::{
    Animal, BirthChart, ChartCompatibility, CompatibilityLevel, Element, ElementBalance,
    HourStemMode, LuckyElements, Palace, PillarOptions, Purpose, Star, Strength, TimingAdvice,
    ZodiacCompatibility, ZodiacSign,
};
pub use yun_time::{BirthData, CivilDate, TimeError, parse_hour};
