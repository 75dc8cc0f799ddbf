use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::scheduler::SchedError;

/// Identifiant fort pour un membre de la rotation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Politique de rotation : liste ordonnée, relève périodique à partir d'un instant fixe.
///
/// L'intervalle est signé pour que `0` ou une valeur négative arrive jusqu'à
/// [`RotationPolicy::validate`] et soit signalé comme politique invalide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationPolicy {
    pub users: Vec<UserId>,
    pub handover_start_at: DateTime<Utc>,
    pub handover_interval_days: i64,
}

impl RotationPolicy {
    pub fn new<I, U>(users: I, handover_start_at: DateTime<Utc>, handover_interval_days: i64) -> Self
    where
        I: IntoIterator<Item = U>,
        U: Into<UserId>,
    {
        Self {
            users: users.into_iter().map(Into::into).collect(),
            handover_start_at,
            handover_interval_days,
        }
    }

    pub fn validate(&self) -> Result<(), SchedError> {
        if self.users.is_empty() {
            return Err(SchedError::InvalidPolicy("users must not be empty"));
        }
        if self.handover_interval_days <= 0 {
            return Err(SchedError::InvalidPolicy(
                "handover_interval_days must be > 0",
            ));
        }
        Ok(())
    }

    /// Durée d'un créneau. N'a de sens qu'après [`RotationPolicy::validate`].
    pub fn interval(&self) -> Result<Duration, SchedError> {
        Duration::try_days(self.handover_interval_days).ok_or(SchedError::TimeOverflow)
    }
}

/// Fenêtre demandée, semi-ouverte `[from, until)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub from: DateTime<Utc>,
    pub until: DateTime<Utc>,
}

impl TimeWindow {
    pub fn new(from: DateTime<Utc>, until: DateTime<Utc>) -> Result<Self, SchedError> {
        let window = Self { from, until };
        window.validate()?;
        Ok(window)
    }

    pub fn validate(&self) -> Result<(), SchedError> {
        if self.from >= self.until {
            return Err(SchedError::InvalidWindow);
        }
        Ok(())
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.from <= at && at < self.until
    }
}

/// Surcharge manuelle : force `user` d'astreinte sur `[start_at, end_at)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideEntry {
    pub user: UserId,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
}

impl OverrideEntry {
    pub fn new<U: Into<UserId>>(user: U, start_at: DateTime<Utc>, end_at: DateTime<Utc>) -> Self {
        Self {
            user: user.into(),
            start_at,
            end_at,
        }
    }

    pub fn validate(&self) -> Result<(), SchedError> {
        if self.end_at <= self.start_at {
            return Err(SchedError::InvalidOverride {
                user: self.user.to_string(),
                start_at: self.start_at,
                end_at: self.end_at,
            });
        }
        Ok(())
    }
}

/// Entrée du planning (créneau de base ou résultat final), intervalle `[start_at, end_at)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub user: UserId,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
}

impl ScheduleEntry {
    pub fn new<U: Into<UserId>>(user: U, start_at: DateTime<Utc>, end_at: DateTime<Utc>) -> Self {
        Self {
            user: user.into(),
            start_at,
            end_at,
        }
    }

    /// Durée en minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end_at - self.start_at).num_minutes()
    }

    pub fn is_active_at(&self, at: DateTime<Utc>) -> bool {
        self.start_at <= at && at < self.end_at
    }
}
