use super::{types::SchedError, util, MergeOptions, OverridePrecedence};
use crate::model::{OverrideEntry, ScheduleEntry, UserId};
use chrono::{DateTime, Utc};

/// Segment de surcharge après arbitrage : disjoint des autres segments.
#[derive(Debug, Clone)]
struct Segment<'a> {
    user: &'a UserId,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

pub(super) fn merge(
    base: &[ScheduleEntry],
    overrides: &[OverrideEntry],
    opts: MergeOptions,
) -> Result<Vec<ScheduleEntry>, SchedError> {
    for o in overrides {
        o.validate()?;
    }
    if overrides.is_empty() {
        return Ok(base.to_vec());
    }

    let segments = resolve(overrides, opts.precedence);
    let mut out = Vec::with_capacity(base.len() + 2 * segments.len());

    for entry in base {
        let hits: Vec<&Segment> = segments
            .iter()
            .filter(|s| util::overlaps(s.start, s.end, entry.start_at, entry.end_at))
            .collect();

        if hits.is_empty() {
            out.push(entry.clone());
            continue;
        }

        let mut cursor = entry.start_at;
        for seg in hits {
            let Some((start, end)) = util::clip(seg.start, seg.end, entry.start_at, entry.end_at)
            else {
                continue;
            };
            if start > cursor {
                out.push(ScheduleEntry::new(entry.user.clone(), cursor, start));
            }
            out.push(ScheduleEntry::new(seg.user.clone(), start, end));
            cursor = cursor.max(end);
        }
        if cursor < entry.end_at {
            out.push(ScheduleEntry::new(entry.user.clone(), cursor, entry.end_at));
        }
    }

    out.retain(|e| e.start_at < e.end_at);
    tracing::debug!(
        base = base.len(),
        overrides = overrides.len(),
        segments = segments.len(),
        entries = out.len(),
        "overrides merged"
    );
    Ok(out)
}

/// Arbitre les surcharges entre elles : le résultat est trié et sans chevauchement.
fn resolve(overrides: &[OverrideEntry], precedence: OverridePrecedence) -> Vec<Segment<'_>> {
    let mut segments: Vec<Segment> = Vec::with_capacity(overrides.len());

    for o in util::sorted_overrides(overrides) {
        match precedence {
            OverridePrecedence::LatestWins => {
                let mut kept = Vec::with_capacity(segments.len() + 2);
                for seg in segments.drain(..) {
                    if !util::overlaps(seg.start, seg.end, o.start_at, o.end_at) {
                        kept.push(seg);
                        continue;
                    }
                    for (start, end) in util::subtract(seg.start, seg.end, [(o.start_at, o.end_at)]) {
                        kept.push(Segment { user: seg.user, start, end });
                    }
                }
                kept.push(Segment {
                    user: &o.user,
                    start: o.start_at,
                    end: o.end_at,
                });
                segments = kept;
            }
            OverridePrecedence::EarliestWins => {
                let taken: Vec<_> = segments.iter().map(|s| (s.start, s.end)).collect();
                for (start, end) in util::subtract(o.start_at, o.end_at, taken) {
                    segments.push(Segment { user: &o.user, start, end });
                }
            }
        }
        segments.sort_by_key(|s| s.start);
    }

    tracing::trace!(segments = segments.len(), ?precedence, "overrides resolved");
    segments
}
