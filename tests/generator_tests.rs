mod common;
use chrono::NaiveDate;
use common::{small_roster, start};
use rtimesheet::core::calendar::days_in_month;
use rtimesheet::core::generator::{Schedule, generate, team_roles};
use rtimesheet::errors::AppError;
use rtimesheet::models::{Roster, ShiftCode, ShiftRecord, ShiftRole, Team};
use std::collections::HashMap;

fn record<'a>(records: &'a [ShiftRecord], worker: &str, day: u32) -> &'a ShiftRecord {
    records
        .iter()
        .find(|r| r.worker == worker && r.day == day)
        .expect("record present")
}

/// Worker name → team, for the default roster.
fn team_of(roster: &Roster) -> HashMap<String, Team> {
    roster
        .workers()
        .iter()
        .map(|w| (w.name.clone(), w.team))
        .collect()
}

#[test]
fn test_one_record_per_worker_and_day() {
    let roster = Roster::default();

    for (year, month) in [(2025, 12), (2026, 1), (2026, 2), (2026, 4), (2028, 2)] {
        let records = generate(year, month, &roster, start()).expect("generate");
        let days = days_in_month(year, month).expect("days");

        assert_eq!(records.len(), roster.len() * days as usize);

        for w in roster.workers() {
            let mut worker_days: Vec<u32> = records
                .iter()
                .filter(|r| r.worker == w.name)
                .map(|r| r.day)
                .collect();
            worker_days.sort_unstable();
            assert_eq!(worker_days, (1..=days).collect::<Vec<_>>());
        }
    }
}

#[test]
fn test_leap_february_has_29_days() {
    let records = generate(2028, 2, &small_roster(), start()).expect("generate");
    assert_eq!(records.len(), 4 * 29);
}

#[test]
fn test_days_before_start_are_empty_for_everyone() {
    let records = generate(2026, 1, &Roster::default(), start()).expect("generate");

    for r in records.iter().filter(|r| r.day < 5) {
        assert_eq!(r.hours, 0, "{} day {}", r.worker, r.day);
        assert_eq!(r.code, ShiftCode::Empty);
        assert_eq!(r.code.as_str(), "");
        assert!(r.label.is_empty());
    }
}

#[test]
fn test_month_before_start_is_entirely_inert() {
    let records = generate(2025, 12, &Roster::default(), start()).expect("generate");
    assert!(
        records
            .iter()
            .all(|r| r.hours == 0 && r.code == ShiftCode::Empty)
    );
}

#[test]
fn test_first_active_day_example() {
    let roster = Roster::default();
    let records = generate(2026, 1, &roster, start()).expect("generate");

    for w in roster.members(Team::Team1) {
        let r = record(&records, &w.name, 5);
        assert_eq!((r.hours, r.code, r.label.as_str()), (12, ShiftCode::Long12, "I (07-19)"));
    }
    for w in roster.members(Team::Team2) {
        let r = record(&records, &w.name, 5);
        assert_eq!((r.hours, r.code, r.label.as_str()), (12, ShiftCode::Long12, "II (19-07)"));
    }
    for w in roster.members(Team::Team3) {
        let r = record(&records, &w.name, 5);
        assert_eq!((r.hours, r.code), (0, ShiftCode::Rest));
        assert!(r.label.is_empty());
    }
    // Monday
    for w in roster.members(Team::Regular) {
        let r = record(&records, &w.name, 5);
        assert_eq!((r.hours, r.code, r.label.as_str()), (10, ShiftCode::Long10, "(07-17)"));
    }
}

#[test]
fn test_block_roles() {
    use ShiftRole::*;
    assert_eq!(team_roles(0), [Morning, Night, Free]);
    assert_eq!(team_roles(4), [Morning, Night, Free]);
    assert_eq!(team_roles(5), [Night, Free, Morning]);
    assert_eq!(team_roles(9), [Night, Free, Morning]);
    assert_eq!(team_roles(10), [Free, Morning, Night]);
    assert_eq!(team_roles(14), [Free, Morning, Night]);
}

#[test]
fn test_rotation_gives_each_role_five_days_in_any_15_day_window() {
    let roster = small_roster();
    let teams = team_of(&roster);

    // Feb 1 2026 is day 27 of the rotation: the window starts mid-cycle.
    let records = generate(2026, 2, &roster, start()).expect("generate");

    let mut counts: HashMap<(Team, &str), u32> = HashMap::new();
    for day in 1..=15 {
        let mut roles_today = Vec::new();

        for r in records.iter().filter(|r| r.day == day) {
            let team = teams[&r.worker];
            if !team.is_rotating() {
                continue;
            }
            let role = match (r.code, r.label.as_str()) {
                (ShiftCode::Long12, "I (07-19)") => "morning",
                (ShiftCode::Long12, "II (19-07)") => "night",
                (ShiftCode::Rest, "") => "free",
                other => panic!("unexpected rotating record {other:?}"),
            };
            *counts.entry((team, role)).or_default() += 1;
            roles_today.push(role);
        }

        roles_today.sort_unstable();
        assert_eq!(roles_today, vec!["free", "morning", "night"], "day {day}");
    }

    for team in Team::ROTATING {
        for role in ["morning", "night", "free"] {
            assert_eq!(counts[&(team, role)], 5, "{team:?} {role}");
        }
    }
}

#[test]
fn test_team_members_share_the_same_record() {
    let roster = Roster::default();
    let records = generate(2026, 3, &roster, start()).expect("generate");

    for team in Team::ALL {
        let members: Vec<_> = roster.members(team).collect();
        for day in 1..=31 {
            let first = record(&records, &members[0].name, day);
            for m in &members[1..] {
                let r = record(&records, &m.name, day);
                assert_eq!((r.hours, r.code, &r.label), (first.hours, first.code, &first.label));
            }
        }
    }
}

#[test]
fn test_regular_staff_alternate_saturdays_and_rest_on_sundays() {
    let roster = small_roster();

    // Jan 2026: Saturdays 10, 17, 24, 31; Sundays 11, 18, 25.
    let jan = generate(2026, 1, &roster, start()).expect("generate");
    let worked: Vec<u32> = [10, 17, 24, 31]
        .iter()
        .map(|d| record(&jan, "Dino", *d).hours)
        .collect();
    assert_eq!(worked, vec![10, 0, 10, 0]);

    for d in [17, 31] {
        assert_eq!(record(&jan, "Dino", d).code, ShiftCode::Rest);
    }
    for d in [11, 18, 25] {
        let r = record(&jan, "Dino", d);
        assert_eq!((r.hours, r.code), (0, ShiftCode::Rest));
    }

    // Alternation holds for every pair of consecutive Saturdays later on.
    let mut saturdays = Vec::new();
    for month in 2..=12 {
        let records = generate(2026, month, &roster, start()).expect("generate");
        for r in records.iter().filter(|r| r.worker == "Dino") {
            match r.date.format("%a").to_string().as_str() {
                "Sat" => saturdays.push(r.hours),
                "Sun" => assert_eq!((r.hours, r.code), (0, ShiftCode::Rest)),
                _ => assert_eq!((r.hours, r.code), (10, ShiftCode::Long10)),
            }
        }
    }
    for pair in saturdays.windows(2) {
        assert_ne!(pair[0], pair[1]);
        assert!(pair.contains(&10) && pair.contains(&0));
    }
}

#[test]
fn test_generation_is_deterministic() {
    let roster = Roster::default();
    let a = generate(2026, 7, &roster, start()).expect("generate");
    let b = generate(2026, 7, &roster, start()).expect("generate");
    assert_eq!(a, b);
}

#[test]
fn test_record_order_is_day_then_team() {
    let roster = small_roster();
    let records = generate(2026, 1, &roster, start()).expect("generate");

    let first_day: Vec<&str> = records[..4].iter().map(|r| r.worker.as_str()).collect();
    assert_eq!(first_day, vec!["Ana", "Boris", "Cvijeta", "Dino"]);
    assert!(records.windows(2).all(|w| w[0].day <= w[1].day));
    assert_eq!(
        records[0].date,
        NaiveDate::from_ymd_opt(2026, 1, 1).expect("date")
    );
}

#[test]
fn test_configurable_start_date() {
    let roster = small_roster();
    let later = NaiveDate::from_ymd_opt(2026, 1, 20).expect("date");
    let records = generate(2026, 1, &roster, later).expect("generate");

    assert_eq!(record(&records, "Ana", 19).code, ShiftCode::Empty);
    assert_eq!(record(&records, "Ana", 20).label, "I (07-19)");
    assert_eq!(record(&records, "Cvijeta", 20).code, ShiftCode::Rest);
}

#[test]
fn test_invalid_period_is_rejected() {
    let roster = small_roster();
    assert!(matches!(
        generate(2026, 13, &roster, start()),
        Err(AppError::InvalidMonth(13))
    ));
    assert!(matches!(
        generate(2026, 0, &roster, start()),
        Err(AppError::InvalidMonth(0))
    ));
    assert!(matches!(
        generate(26, 1, &roster, start()),
        Err(AppError::InvalidYear(26))
    ));
}

#[test]
fn test_schedule_keeps_its_period() {
    let schedule = Schedule::build(2026, 2, &small_roster(), start()).expect("build");
    assert_eq!((schedule.year, schedule.month, schedule.days_in_month), (2026, 2, 28));
    assert_eq!(schedule.records_for("Dino").count(), 28);
}

#[test]
fn test_roster_rejects_duplicate_names() {
    use rtimesheet::models::Worker;
    let err = Roster::new(vec![
        Worker::new("Ana", "a", Team::Team1),
        Worker::new("Ana", "b", Team::Team2),
    ])
    .unwrap_err();
    assert!(matches!(err, AppError::DuplicateWorker(name) if name == "Ana"));
}

#[test]
fn test_default_roster_has_four_workers_per_team() {
    let roster = Roster::default();
    assert_eq!(roster.len(), 16);
    for team in Team::ALL {
        assert_eq!(roster.members(team).count(), 4);
    }
}

#[test]
fn test_days_in_month() {
    for (year, month, days) in [
        (2026, 1, 31),
        (2026, 2, 28),
        (2026, 4, 30),
        (2026, 12, 31),
        (2028, 2, 29),
        (2000, 2, 29),
        (2100, 2, 28),
        (9999, 12, 31),
    ] {
        assert_eq!(days_in_month(year, month).expect("days"), days, "{year}-{month}");
    }
    assert!(matches!(days_in_month(2026, 13), Err(AppError::InvalidMonth(13))));
}

#[test]
fn test_roster_rejects_empty_list() {
    assert!(matches!(Roster::new(Vec::new()), Err(AppError::EmptyRoster)));
}
