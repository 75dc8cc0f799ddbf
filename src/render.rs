use crate::model::ScheduleEntry;
use chrono::SecondsFormat;

/// Permet de customiser le rendu d'une frise (texte, tableau, etc.).
pub trait EntryRenderer {
    fn render(&self, entries: &[ScheduleEntry]) -> String;
}

/// Une ligne par entrée : `user | début → fin | durée`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextRenderer;

impl EntryRenderer for TextRenderer {
    fn render(&self, entries: &[ScheduleEntry]) -> String {
        let width = entries
            .iter()
            .map(|e| e.user.as_str().chars().count())
            .max()
            .unwrap_or(0);
        let mut out = String::new();
        for e in entries {
            out.push_str(&format!(
                "{user:<width$} | {start} → {end} | {duration}\n",
                user = e.user.as_str(),
                start = e.start_at.to_rfc3339_opts(SecondsFormat::AutoSi, true),
                end = e.end_at.to_rfc3339_opts(SecondsFormat::AutoSi, true),
                duration = human_duration(e.duration_minutes()),
            ));
        }
        out
    }
}

fn human_duration(minutes: i64) -> String {
    let (days, rest) = (minutes / (24 * 60), minutes % (24 * 60));
    let (hours, mins) = (rest / 60, rest % 60);
    match (days, hours, mins) {
        (0, 0, m) => format!("{m}m"),
        (0, h, 0) => format!("{h}h"),
        (0, h, m) => format!("{h}h{m:02}"),
        (d, 0, 0) => format!("{d}d"),
        (d, h, 0) => format!("{d}d{h}h"),
        (d, h, m) => format!("{d}d{h}h{m:02}"),
    }
}
