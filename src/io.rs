use crate::model::{OverrideEntry, RotationPolicy, ScheduleEntry};
use crate::scheduler::SchedError;
use anyhow::{bail, Context};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Instant RFC3339 (`Z` ou décalage explicite), ramené en UTC.
pub fn parse_instant(raw: &str) -> anyhow::Result<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        bail!("empty instant");
    }
    raw.parse::<DateTime<Utc>>()
        .with_context(|| format!("invalid RFC3339 instant: {raw}"))
}

/// Décode un document JSON ; toute erreur de structure devient `MalformedInput`.
pub fn from_json<T: DeserializeOwned>(data: &[u8]) -> Result<T, SchedError> {
    serde_json::from_slice(data).map_err(|e| SchedError::MalformedInput(e.to_string()))
}

fn read_json<T: DeserializeOwned, P: AsRef<Path>>(path: P, what: &str) -> anyhow::Result<T> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    from_json(&data).with_context(|| format!("parsing {what} {}", path.display()))
}

/// Politique de rotation : `{users, handover_start_at, handover_interval_days}`
pub fn load_policy<P: AsRef<Path>>(path: P) -> anyhow::Result<RotationPolicy> {
    read_json(path, "schedule")
}

/// Surcharges : tableau de `{user, start_at, end_at}`
pub fn load_overrides<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<OverrideEntry>> {
    read_json(path, "overrides")
}

/// Frise déjà calculée (sortie d'un `render` précédent)
pub fn load_entries<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<ScheduleEntry>> {
    read_json(path, "entries")
}

/// Export JSON des entrées (jolie mise en forme), écrit de manière atomique.
pub fn write_entries_json<P: AsRef<Path>>(path: P, entries: &[ScheduleEntry]) -> anyhow::Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_vec_pretty(entries)?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
    tmp.write_all(&json)?;
    tmp.write_all(b"\n")?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)
        .with_context(|| format!("atomic rename to {}", path.display()))?;
    Ok(())
}

/// Export CSV des entrées: header `user,start_at,end_at,duration_minutes,color`
#[cfg(feature = "csv")]
pub fn export_entries_csv<P: AsRef<Path>>(path: P, entries: &[ScheduleEntry]) -> anyhow::Result<()> {
    use chrono::SecondsFormat;
    use csv::WriterBuilder;

    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["user", "start_at", "end_at", "duration_minutes", "color"])?;
    let mut minutes = itoa::Buffer::new();
    for e in entries {
        let start = e.start_at.to_rfc3339_opts(SecondsFormat::AutoSi, true);
        let end = e.end_at.to_rfc3339_opts(SecondsFormat::AutoSi, true);
        w.write_record([
            e.user.as_str(),
            start.as_str(),
            end.as_str(),
            minutes.format(e.duration_minutes()),
            crate::palette::user_color(&e.user),
        ])?;
    }
    w.flush()?;
    Ok(())
}
