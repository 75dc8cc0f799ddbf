mod check;
mod overlay;
mod rotation;
mod types;
mod util;

pub use types::{MergeOptions, OverridePrecedence, SchedError, Violation, ViolationKind};

use crate::model::{OverrideEntry, RotationPolicy, ScheduleEntry, TimeWindow};
use chrono::{DateTime, Duration, Utc};

/// Scheduler : encapsule une politique de rotation validée.
///
/// Sans état mutable : chaque appel recalcule une frise neuve à partir des entrées.
#[derive(Debug, Clone)]
pub struct Scheduler {
    policy: RotationPolicy,
}

impl Scheduler {
    /// Valide la politique une fois pour toutes.
    pub fn new(policy: RotationPolicy) -> Result<Self, SchedError> {
        policy.validate()?;
        policy.interval()?;
        Ok(Self { policy })
    }

    /// Créneaux de base intersectant `window`, tronqués à ses bornes.
    pub fn expand(&self, window: &TimeWindow) -> Result<Vec<ScheduleEntry>, SchedError> {
        expand(&self.policy, window)
    }

    /// Planning final : rotation puis surcharges.
    pub fn render(
        &self,
        window: &TimeWindow,
        overrides: &[OverrideEntry],
        opts: MergeOptions,
    ) -> Result<Vec<ScheduleEntry>, SchedError> {
        // validation complète avant tout calcul
        window.validate()?;
        for o in overrides {
            o.validate()?;
        }
        let base = self.expand(window)?;
        let entries = merge(&base, overrides, opts)?;
        debug_assert!(check_timeline(&entries, window).is_empty());
        Ok(entries)
    }

    /// Entrée couvrant l'instant `at`, surcharges comprises.
    pub fn on_call_at(
        &self,
        at: DateTime<Utc>,
        overrides: &[OverrideEntry],
        opts: MergeOptions,
    ) -> Result<ScheduleEntry, SchedError> {
        let until = at
            .checked_add_signed(Duration::seconds(1))
            .ok_or(SchedError::TimeOverflow)?;
        let window = TimeWindow::new(at, until)?;
        self.render(&window, overrides, opts)?
            .into_iter()
            .find(|e| e.is_active_at(at))
            .ok_or(SchedError::InvalidWindow)
    }
}

/// Déroule `policy` sur `window`.
pub fn expand(policy: &RotationPolicy, window: &TimeWindow) -> Result<Vec<ScheduleEntry>, SchedError> {
    rotation::expand(policy, window)
}

/// Applique `overrides` sur une frise de base triée.
pub fn merge(
    base: &[ScheduleEntry],
    overrides: &[OverrideEntry],
    opts: MergeOptions,
) -> Result<Vec<ScheduleEntry>, SchedError> {
    overlay::merge(base, overrides, opts)
}

/// Détecte les anomalies de frise (tri, chevauchement, trou, débordement).
pub fn check_timeline(entries: &[ScheduleEntry], window: &TimeWindow) -> Vec<Violation> {
    check::check_timeline(entries, window)
}
