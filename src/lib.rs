#![forbid(unsafe_code)]
//! Relève — calcul de planning d'astreinte tournant, sans base de données.
//!
//! - Rotation périodique : liste fixe, relève tous les N jours à partir d'un instant.
//! - Surcharges manuelles prioritaires sur la rotation.
//! - Frise triée, sans chevauchement, couvrant exactement `[from, until)`.
//! - Tout en UTC ; parsing RFC3339 ; affichage local en dehors de la lib.

#[cfg(feature = "server")]
pub mod api;
pub mod io;
pub mod model;
pub mod palette;
pub mod render;
pub mod scheduler;

pub use model::{OverrideEntry, RotationPolicy, ScheduleEntry, TimeWindow, UserId};
pub use render::{EntryRenderer, TextRenderer};
pub use scheduler::{
    check_timeline, expand, merge, MergeOptions, OverridePrecedence, SchedError, Scheduler,
    Violation, ViolationKind,
};
