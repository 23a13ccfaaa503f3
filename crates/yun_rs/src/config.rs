//! Runtime configuration: profile location, CLI defaults and lottery games.

use std::env;
use std::path::PathBuf;

use yun_base::{HourStemMode, PillarOptions};
use yun_time::DEFAULT_TIMEZONE;

/// Environment variable overriding the directory holding `profile.json`.
pub const YUN_HOME_ENV: &str = "YUN_HOME";
/// Profile file name inside the profile directory.
pub const PROFILE_FILE_NAME: &str = "profile.json";
/// Hour used when no birth time is given.
pub const DEFAULT_HOUR: u32 = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YunConfig {
    pub profile_path: PathBuf,
    pub default_timezone: String,
    pub default_hour: u32,
    pub hour_stem: HourStemMode,
}

impl Default for YunConfig {
    fn default() -> Self {
        Self {
            profile_path: home_dir().join(".yun").join(PROFILE_FILE_NAME),
            default_timezone: DEFAULT_TIMEZONE.to_string(),
            default_hour: DEFAULT_HOUR,
            hour_stem: HourStemMode::default(),
        }
    }
}

impl YunConfig {
    /// Defaults, with the profile directory taken from `YUN_HOME` when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(dir) = env::var_os(YUN_HOME_ENV).filter(|v| !v.is_empty()) {
            config.profile_path = PathBuf::from(dir).join(PROFILE_FILE_NAME);
        }
        config
    }

    pub fn with_profile_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.profile_path = path.into();
        self
    }

    pub fn with_hour_stem(mut self, mode: HourStemMode) -> Self {
        self.hour_stem = mode;
        self
    }

    pub fn pillar_options(&self) -> PillarOptions {
        PillarOptions {
            hour_stem: self.hour_stem,
        }
    }
}

fn home_dir() -> PathBuf {
    env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_default()
}

/// One lottery game: pick `count` distinct numbers from `min..=max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LotteryConfig {
    pub label: &'static str,
    pub count: usize,
    pub min: u32,
    pub max: u32,
    /// Frequently drawn numbers mixed into the candidate pool.
    pub hot_numbers: &'static [u32],
}

impl LotteryConfig {
    pub fn contains(&self, n: u32) -> bool {
        (self.min..=self.max).contains(&n)
    }

    /// Number of distinct values in the range; zero when `min > max`.
    pub fn span(&self) -> usize {
        if self.min > self.max {
            0
        } else {
            (self.max - self.min) as usize + 1
        }
    }
}

pub const LOTTO_649: LotteryConfig = LotteryConfig {
    label: "Lotto 6/49",
    count: 6,
    min: 1,
    max: 49,
    hot_numbers: &[27, 3, 33, 44, 49, 43, 15, 21, 13, 16, 28, 30, 40, 45, 34, 31],
};

pub const LOTTO_MAX: LotteryConfig = LotteryConfig {
    label: "Lotto Max",
    count: 7,
    min: 1,
    max: 50,
    hot_numbers: &[2, 11, 14, 18, 19, 38, 25, 20],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = YunConfig::default();
        assert_eq!(config.default_hour, 12);
        assert_eq!(config.default_timezone, "Asia/Hong_Kong");
        assert_eq!(config.hour_stem, HourStemMode::Simplified);
        assert!(config.profile_path.ends_with(".yun/profile.json"));
    }

    #[test]
    fn builder_overrides() {
        let config = YunConfig::default()
            .with_profile_path("/tmp/p.json")
            .with_hour_stem(HourStemMode::DayStem);
        assert_eq!(config.profile_path, PathBuf::from("/tmp/p.json"));
        assert_eq!(config.pillar_options().hour_stem, HourStemMode::DayStem);
    }

    #[test]
    fn games_have_room_for_their_picks() {
        for game in [LOTTO_649, LOTTO_MAX] {
            assert!(game.span() >= game.count);
            assert!(game.hot_numbers.iter().all(|&n| game.contains(n)));
        }
        assert_eq!(LOTTO_649.span(), 49);
        assert!(!LOTTO_MAX.contains(51));
    }

    #[test]
    fn inverted_range_is_empty() {
        let game = LotteryConfig { min: 10, max: 5, ..LOTTO_649 };
        assert_eq!(game.span(), 0);
        assert!(!game.contains(7));
        let single = LotteryConfig { min: 5, max: 5, ..LOTTO_649 };
        assert_eq!(single.span(), 1);
    }
}
