use crate::model::OverrideEntry;
use chrono::{DateTime, Duration, Utc};

pub(super) fn overlaps(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// Intersection de `[start, end)` avec `[lo, hi)`, `None` si vide.
pub(super) fn clip(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    lo: DateTime<Utc>,
    hi: DateTime<Utc>,
) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let s = start.max(lo);
    let e = end.min(hi);
    (s < e).then_some((s, e))
}

/// Début du créneau d'index `k` : `origin + k * interval`.
///
/// Hors de la plage chrono, sature à `MIN_UTC` (avant l'origine) ou `MAX_UTC` (après).
pub(super) fn shift_start(origin: DateTime<Utc>, interval: Duration, k: i64) -> DateTime<Utc> {
    i32::try_from(k)
        .ok()
        .and_then(|k| interval.checked_mul(k))
        .and_then(|offset| origin.checked_add_signed(offset))
        .unwrap_or(if k < 0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        })
}

/// Index du créneau contenant `at` (division entière arrondie vers -inf).
///
/// La borne exacte d'un créneau appartient au créneau qui y commence.
pub(super) fn shift_index(origin: DateTime<Utc>, interval: Duration, at: DateTime<Utc>) -> i64 {
    let step = interval.num_milliseconds();
    let mut k = (at - origin).num_milliseconds().div_euclid(step);
    // la troncature à la milliseconde peut décaler d'un créneau
    while shift_start(origin, interval, k) > at {
        k -= 1;
    }
    while shift_start(origin, interval, k + 1) <= at {
        k += 1;
    }
    k
}

/// Index dans la liste d'utilisateurs, toujours positif même pour `k < 0`.
pub(super) fn rotation_slot(k: i64, len: usize) -> usize {
    k.rem_euclid(len as i64) as usize
}

/// Tri stable par début croissant : à égalité, l'ordre d'entrée est conservé.
pub(super) fn sorted_overrides(overrides: &[OverrideEntry]) -> Vec<&OverrideEntry> {
    let mut sorted: Vec<&OverrideEntry> = overrides.iter().collect();
    sorted.sort_by_key(|o| o.start_at);
    sorted
}

/// Parties de `[start, end)` non couvertes par `taken` (trié, disjoint).
pub(super) fn subtract<I>(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    taken: I,
) -> Vec<(DateTime<Utc>, DateTime<Utc>)>
where
    I: IntoIterator<Item = (DateTime<Utc>, DateTime<Utc>)>,
{
    let mut out = Vec::new();
    let mut cursor = start;
    for (s, e) in taken {
        if e <= cursor || s >= end {
            continue;
        }
        if s > cursor {
            out.push((cursor, s));
        }
        cursor = cursor.max(e);
        if cursor >= end {
            break;
        }
    }
    if cursor < end {
        out.push((cursor, end));
    }
    out
}
