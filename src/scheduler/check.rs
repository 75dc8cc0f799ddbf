use super::{util, Violation, ViolationKind};
use crate::model::{ScheduleEntry, TimeWindow};

/// Vérifie qu'une frise est triée, disjointe et couvre exactement `window`.
pub(super) fn check_timeline(entries: &[ScheduleEntry], window: &TimeWindow) -> Vec<Violation> {
    let mut out = Vec::new();

    let Some(first) = entries.first() else {
        out.push(Violation {
            kind: ViolationKind::Gap,
            index: 0,
            at: window.from,
        });
        return out;
    };

    if first.start_at > window.from {
        out.push(Violation {
            kind: ViolationKind::Gap,
            index: 0,
            at: window.from,
        });
    }

    for (idx, e) in entries.iter().enumerate() {
        if e.start_at >= e.end_at {
            out.push(Violation {
                kind: ViolationKind::Empty,
                index: idx,
                at: e.start_at,
            });
        }
        if !window.contains(e.start_at) || e.end_at > window.until {
            out.push(Violation {
                kind: ViolationKind::OutOfWindow,
                index: idx,
                at: e.start_at,
            });
        }
    }

    // fin la plus tardive atteinte jusqu'ici
    let mut reach = first.end_at;
    for (idx, pair) in entries.windows(2).enumerate() {
        let [a, b] = pair else { continue };
        let index = idx + 1;
        if b.start_at < a.start_at {
            out.push(Violation {
                kind: ViolationKind::Unsorted,
                index,
                at: b.start_at,
            });
        } else if util::overlaps(a.start_at, a.end_at, b.start_at, b.end_at) {
            out.push(Violation {
                kind: ViolationKind::Overlap,
                index,
                at: b.start_at,
            });
        } else if reach < b.start_at {
            out.push(Violation {
                kind: ViolationKind::Gap,
                index,
                at: reach,
            });
        }
        reach = reach.max(b.end_at);
    }

    if reach < window.until {
        out.push(Violation {
            kind: ViolationKind::Gap,
            index: entries.len(),
            at: reach,
        });
    }

    out
}
