use super::{types::SchedError, util};
use crate::model::{RotationPolicy, ScheduleEntry, TimeWindow};

/// Déroule la rotation sur `window` : un créneau par index, tronqué aux bornes.
pub(super) fn expand(
    policy: &RotationPolicy,
    window: &TimeWindow,
) -> Result<Vec<ScheduleEntry>, SchedError> {
    policy.validate()?;
    window.validate()?;

    let origin = policy.handover_start_at;
    let interval = policy.interval()?;
    let total = policy.users.len();

    let first = util::shift_index(origin, interval, window.from);
    let mut k = first;
    let mut raw_start = util::shift_start(origin, interval, k);
    let mut out = Vec::new();

    while raw_start < window.until {
        let raw_end = util::shift_start(origin, interval, k + 1);
        if let Some((start, end)) = util::clip(raw_start, raw_end, window.from, window.until) {
            let user = policy.users[util::rotation_slot(k, total)].clone();
            out.push(ScheduleEntry::new(user, start, end));
        }
        k += 1;
        raw_start = raw_end;
    }

    tracing::debug!(shifts = out.len(), first_index = first, "rotation expanded");
    Ok(out)
}
