//! Single-record user profile storage.
//!
//! The on-disk format is pretty-printed JSON with camelCase keys:
//! `{"name", "birthDate", "birthTime", "birthplace", "timezone", "createdAt"}`.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use yun_time::{BirthData, CivilDate, DEFAULT_TIMEZONE};

use crate::config::YunConfig;
use crate::error::YunError;

/// Birthplace recorded when none is given.
pub const UNKNOWN_BIRTHPLACE: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    /// `YYYY-MM-DD`.
    pub birth_date: String,
    /// Hour of day, 0-23.
    pub birth_time: u32,
    pub birthplace: String,
    pub timezone: String,
    /// RFC 3339 UTC timestamp.
    pub created_at: String,
}

impl UserProfile {
    /// New profile stamped with the current time. A blank birthplace is
    /// recorded as [`UNKNOWN_BIRTHPLACE`].
    pub fn new(name: impl Into<String>, date: CivilDate, hour: u32, birthplace: &str) -> Self {
        let birthplace = birthplace.trim();
        Self {
            name: name.into(),
            birth_date: date.to_string(),
            birth_time: hour,
            birthplace: if birthplace.is_empty() {
                UNKNOWN_BIRTHPLACE.to_string()
            } else {
                birthplace.to_string()
            },
            timezone: DEFAULT_TIMEZONE.to_string(),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    /// Birth data described by this profile, range-checked.
    pub fn birth_data(&self) -> Result<BirthData, YunError> {
        let date: CivilDate = self
            .birth_date
            .parse()
            .map_err(|_| YunError::InvalidProfile(format!("birth date '{}'", self.birth_date)))?;
        let birth = date
            .at_hour(self.birth_time)
            .with_timezone(self.timezone.clone());
        birth
            .validate()
            .map_err(|e| YunError::InvalidProfile(e.to_string()))?;
        Ok(birth)
    }
}

/// Storage for the one saved profile.
pub trait ProfileStore {
    /// `Ok(None)` when nothing is saved.
    fn load(&self) -> Result<Option<UserProfile>, YunError>;

    fn save(&mut self, profile: &UserProfile) -> Result<(), YunError>;

    /// Remove the saved profile. Returns whether one existed.
    fn delete(&mut self) -> Result<bool, YunError>;

    fn exists(&self) -> bool;

    /// Like [`load`](Self::load), but a missing profile is an error.
    fn require(&self) -> Result<UserProfile, YunError> {
        self.load()?.ok_or(YunError::NoProfile)
    }
}

/// Profile kept in a JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &YunConfig) -> Self {
        Self::new(config.profile_path.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProfileStore for JsonFileStore {
    fn load(&self) -> Result<Option<UserProfile>, YunError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no profile file");
            return Ok(None);
        }
        let text = fs::read_to_string(&self.path).map_err(|e| YunError::io(&self.path, e))?;
        Ok(Some(serde_json::from_str(&text)?))
    }

    fn save(&mut self, profile: &UserProfile) -> Result<(), YunError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| YunError::io(dir, e))?;
        }
        let text = serde_json::to_string_pretty(profile)?;
        fs::write(&self.path, text).map_err(|e| YunError::io(&self.path, e))?;
        info!(path = %self.path.display(), name = %profile.name, "profile saved");
        Ok(())
    }

    fn delete(&mut self) -> Result<bool, YunError> {
        if !self.path.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.path).map_err(|e| YunError::io(&self.path, e))?;
        info!(path = %self.path.display(), "profile deleted");
        Ok(true)
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}

/// In-memory store, for tests and embedding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    profile: Option<UserProfile>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(profile: UserProfile) -> Self {
        Self {
            profile: Some(profile),
        }
    }
}

impl ProfileStore for MemoryStore {
    fn load(&self) -> Result<Option<UserProfile>, YunError> {
        Ok(self.profile.clone())
    }

    fn save(&mut self, profile: &UserProfile) -> Result<(), YunError> {
        self.profile = Some(profile.clone());
        Ok(())
    }

    fn delete(&mut self) -> Result<bool, YunError> {
        Ok(self.profile.take().is_some())
    }

    fn exists(&self) -> bool {
        self.profile.is_some()
    }
}
