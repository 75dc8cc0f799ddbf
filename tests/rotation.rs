#![forbid(unsafe_code)]
use chrono::{DateTime, Duration, TimeZone, Utc};
use releve::{check_timeline, expand, RotationPolicy, SchedError, Scheduler, TimeWindow};

fn at(d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, d, h, 0, 0).unwrap()
}

fn weekly(users: &[&str]) -> RotationPolicy {
    RotationPolicy::new(users.iter().copied(), at(7, 17), 7)
}

fn spans(entries: &[releve::ScheduleEntry]) -> Vec<(&str, DateTime<Utc>, DateTime<Utc>)> {
    entries
        .iter()
        .map(|e| (e.user.as_str(), e.start_at, e.end_at))
        .collect()
}

#[test]
fn aligned_window_yields_whole_shifts() {
    let window = TimeWindow::new(at(7, 17), at(21, 17)).unwrap();
    let entries = expand(&weekly(&["alice", "bob"]), &window).unwrap();
    assert_eq!(
        spans(&entries),
        vec![
            ("alice", at(7, 17), at(14, 17)),
            ("bob", at(14, 17), at(21, 17)),
        ]
    );
}

#[test]
fn mid_shift_window_truncates_without_shifting_users() {
    let window = TimeWindow::new(at(10, 9), at(18, 0)).unwrap();
    let entries = expand(&weekly(&["alice", "bob"]), &window).unwrap();
    assert_eq!(
        spans(&entries),
        vec![
            ("alice", at(10, 9), at(14, 17)),
            ("bob", at(14, 17), at(18, 0)),
        ]
    );
}

#[test]
fn boundary_instant_belongs_to_the_shift_starting_there() {
    let window = TimeWindow::new(at(14, 17), at(14, 18)).unwrap();
    let entries = expand(&weekly(&["alice", "bob"]), &window).unwrap();
    assert_eq!(spans(&entries), vec![("bob", at(14, 17), at(14, 18))]);
}

#[test]
fn until_on_boundary_excludes_next_shift() {
    let window = TimeWindow::new(at(8, 0), at(14, 17)).unwrap();
    let entries = expand(&weekly(&["alice", "bob"]), &window).unwrap();
    assert_eq!(spans(&entries), vec![("alice", at(8, 0), at(14, 17))]);
}

#[test]
fn rotation_extends_before_handover_start() {
    let policy = weekly(&["alice", "bob", "carol"]);
    let window = TimeWindow::new(at(7, 17) - Duration::days(14), at(7, 17)).unwrap();
    let entries = expand(&policy, &window).unwrap();
    let users: Vec<&str> = entries.iter().map(|e| e.user.as_str()).collect();
    // k = -2 -> bob, k = -1 -> carol
    assert_eq!(users, vec!["bob", "carol"]);
    assert!(check_timeline(&entries, &window).is_empty());
}

#[test]
fn long_window_cycles_through_users() {
    let policy = RotationPolicy::new(["a", "b", "c"], at(1, 0), 1);
    let window = TimeWindow::new(at(1, 12), at(8, 12)).unwrap();
    let entries = expand(&policy, &window).unwrap();
    let users: Vec<&str> = entries.iter().map(|e| e.user.as_str()).collect();
    assert_eq!(users, vec!["a", "b", "c", "a", "b", "c", "a", "b"]);
    assert_eq!(entries.first().unwrap().start_at, at(1, 12));
    assert_eq!(entries.last().unwrap().end_at, at(8, 12));
}

#[test]
fn empty_users_is_invalid_policy() {
    let policy = RotationPolicy::new(Vec::<&str>::new(), at(7, 17), 7);
    let window = TimeWindow::new(at(7, 17), at(8, 17)).unwrap();
    assert!(matches!(expand(&policy, &window), Err(SchedError::InvalidPolicy(_))));
    assert!(matches!(Scheduler::new(policy), Err(SchedError::InvalidPolicy(_))));
}

#[test]
fn non_positive_interval_is_invalid_policy() {
    for days in [0, -7] {
        let policy = RotationPolicy::new(["alice"], at(7, 17), days);
        let window = TimeWindow::new(at(7, 17), at(8, 17)).unwrap();
        assert!(matches!(expand(&policy, &window), Err(SchedError::InvalidPolicy(_))));
    }
}

#[test]
fn reversed_or_empty_window_is_invalid() {
    assert!(matches!(TimeWindow::new(at(8, 0), at(8, 0)), Err(SchedError::InvalidWindow)));
    let reversed = TimeWindow { from: at(9, 0), until: at(8, 0) };
    assert!(matches!(
        expand(&weekly(&["alice"]), &reversed),
        Err(SchedError::InvalidWindow)
    ));
}

#[test]
fn structurally_invalid_policy_is_malformed_input() {
    let err = releve::io::from_json::<RotationPolicy>(br#"{"users": "alice"}"#).unwrap_err();
    assert!(matches!(err, SchedError::MalformedInput(_)));
    let negative: RotationPolicy = releve::io::from_json(
        br#"{"users": ["alice"], "handover_start_at": "2025-11-07T17:00:00Z", "handover_interval_days": -1}"#,
    )
    .unwrap();
    assert!(matches!(negative.validate(), Err(SchedError::InvalidPolicy(_))));
}

#[test]
fn very_long_interval_extends_before_handover_start() {
    let origin = at(7, 17);
    let policy = RotationPolicy::new(["alice", "bob"], origin, 100_000_000);
    let window = TimeWindow::new(origin - Duration::days(1), origin + Duration::days(1)).unwrap();
    let entries = expand(&policy, &window).unwrap();
    assert_eq!(
        spans(&entries),
        vec![
            ("bob", origin - Duration::days(1), origin),
            ("alice", origin, origin + Duration::days(1)),
        ]
    );
}
