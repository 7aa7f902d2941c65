mod common;
use common::{small_roster, start};
use rtimesheet::cli::commands::session::run;
use rtimesheet::config::Config;
use rtimesheet::core::PayrollSession;
use rtimesheet::core::overtime::{coerce_overtime, parse_assignment};
use rtimesheet::errors::AppError;
use rtimesheet::models::Roster;
use std::io::Cursor;

fn generated() -> PayrollSession {
    let mut session = PayrollSession::new(Roster::default(), start(), 2026, 1).expect("session");
    session.regenerate().expect("regenerate");
    session
}

#[test]
fn test_coerce_overtime() {
    assert_eq!(coerce_overtime("3.5"), 3.5);
    assert_eq!(coerce_overtime(" 2 "), 2.0);
    assert_eq!(coerce_overtime("3.5h"), 3.5);
    assert_eq!(coerce_overtime(".5"), 0.5);
    assert_eq!(coerce_overtime(""), 0.0);
    assert_eq!(coerce_overtime("   "), 0.0);
    assert_eq!(coerce_overtime("abc"), 0.0);
    assert_eq!(coerce_overtime("-4"), 0.0);
    assert_eq!(coerce_overtime("Infinity"), 0.0);
}

#[test]
fn test_parse_assignment() {
    let a = parse_assignment("Mile Vucina:5=3.5").expect("parse");
    assert_eq!(a.worker, "Mile Vucina");
    assert_eq!(a.day, 5);
    assert_eq!(a.raw_value, "3.5");

    let reset = parse_assignment("Mile Vucina:5=").expect("parse");
    assert_eq!(reset.raw_value, "");

    for bad in ["Mile Vucina 5 3.5", "Mile Vucina:x=1", ":5=1", "Mile Vucina=1"] {
        assert!(
            matches!(parse_assignment(bad), Err(AppError::InvalidAssignment(_))),
            "{bad}"
        );
    }
}

#[test]
fn test_overtime_edit_and_reset() {
    let mut session = generated();
    let before = session.pivot().expect("pivot");
    let mile_before = before.row("Mile Vucina").expect("row").total_overtime;

    assert_eq!(session.set_overtime("Mile Vucina", 5, "3.5").expect("set"), 3.5);
    let pivot = session.pivot().expect("pivot");
    let mile = pivot.row("Mile Vucina").expect("row");
    assert_eq!(mile.day(5).overtime, 3.5);
    assert_eq!(mile.total_overtime, mile_before + 3.5);

    assert_eq!(session.set_overtime("Mile Vucina", 5, "").expect("set"), 0.0);
    let pivot = session.pivot().expect("pivot");
    let mile = pivot.row("Mile Vucina").expect("row");
    assert_eq!(mile.day(5).overtime, 0.0);
    assert_eq!(mile.total_overtime, mile_before);
}

#[test]
fn test_invalid_overtime_text_counts_as_zero() {
    let mut session = generated();
    session.set_overtime("Aner Mrgan", 3, "2").expect("set");
    session.set_overtime("Aner Mrgan", 3, "lots").expect("set");
    assert_eq!(session.overtime().get("Aner Mrgan", 3), 0.0);
}

#[test]
fn test_totals_stay_consistent_across_edits() {
    let mut session = generated();
    let edits = [
        ("Mile Vucina", 5, "3.5"),
        ("Mile Vucina", 6, "1"),
        ("Bakir Behmen", 31, "2.5"),
        ("Mile Vucina", 5, "2"),
        ("Bakir Behmen", 31, ""),
    ];

    for (worker, day, value) in edits {
        session.set_overtime(worker, day, value).expect("set");

        let pivot = session.pivot().expect("pivot");
        for row in &pivot.rows {
            let hours: u32 = row.days.values().map(|c| c.hours).sum();
            let ot: f64 = row.days.values().map(|c| c.overtime).sum();
            assert_eq!(row.total_hours, hours);
            assert_eq!(row.total_overtime, ot);
        }
    }

    let pivot = session.pivot().expect("pivot");
    assert_eq!(pivot.row("Mile Vucina").expect("row").total_overtime, 3.0);
    assert_eq!(pivot.row("Bakir Behmen").expect("row").total_overtime, 0.0);
}

#[test]
fn test_regenerate_clears_overtime() {
    let mut session = generated();
    session.set_overtime("Mile Vucina", 5, "3.5").expect("set");
    session.set_overtime("Aner Mrgan", 12, "1").expect("set");
    assert_eq!(session.overtime().len(), 2);

    session.regenerate().expect("regenerate");

    assert!(session.overtime().is_empty());
    let pivot = session.pivot().expect("pivot");
    assert_eq!(pivot.total_overtime(), 0.0);
    assert_eq!(pivot.row("Mile Vucina").expect("row").position, "vozač - UTOVARIVAČ");
}

#[test]
fn test_nothing_before_first_generation() {
    let mut session =
        PayrollSession::new(small_roster(), start(), 2026, 1).expect("session");

    assert!(!session.is_generated());
    assert!(session.records().is_empty());
    assert!(session.pivot().is_none());
    assert!(session.summary().is_none());
    assert!(session.chart().is_empty());
    assert!(matches!(
        session.set_overtime("Ana", 5, "1"),
        Err(AppError::NotGenerated)
    ));
}

#[test]
fn test_set_overtime_rejects_unknown_worker_and_day() {
    let mut session = generated();
    assert!(matches!(
        session.set_overtime("Nobody", 5, "1"),
        Err(AppError::UnknownWorker(_))
    ));
    assert!(matches!(
        session.set_overtime("Mile Vucina", 32, "1"),
        Err(AppError::InvalidDay { day: 32, days_in_month: 31 })
    ));
    assert!(matches!(
        session.set_overtime("Mile Vucina", 0, "1"),
        Err(AppError::InvalidDay { .. })
    ));
}

#[test]
fn test_period_change_applies_on_regenerate() {
    let mut session = generated();
    session.set_period(2026, 2).expect("period");

    // Still January until regenerated.
    let pivot = session.pivot().expect("pivot");
    assert_eq!((pivot.month, pivot.days_in_month), (1, 31));

    session.regenerate().expect("regenerate");
    let pivot = session.pivot().expect("pivot");
    assert_eq!((pivot.month, pivot.days_in_month), (2, 28));
    assert_eq!(session.records().len(), 16 * 28);
}

#[test]
fn test_invalid_period_is_rejected_and_kept() {
    let mut session = generated();
    assert!(matches!(
        session.set_period(2026, 13),
        Err(AppError::InvalidMonth(13))
    ));
    assert!(matches!(
        session.set_period(99, 1),
        Err(AppError::InvalidYear(99))
    ));
    assert_eq!(session.period(), (2026, 1));
}

#[test]
fn test_session_log_records_operations() {
    let mut session = generated();
    session.set_overtime("Mile Vucina", 5, "3.5").expect("set");
    session.set_period(2026, 3).expect("period");

    let ops: Vec<&str> = session
        .log()
        .entries()
        .iter()
        .map(|e| e.operation.as_str())
        .collect();
    assert_eq!(ops, vec!["generate", "overtime", "period"]);

    let rendered = session.log().render();
    assert!(rendered.contains("Mile Vucina, day 5"));
    assert!(rendered.contains("Overtime set to 3.5"));
}

#[test]
fn test_session_from_default_config() {
    let session = PayrollSession::from_config(&Config::default()).expect("session");
    assert_eq!(session.period(), (2026, 1));
    assert_eq!(session.start_date(), start());
    assert_eq!(session.roster().len(), 16);
}

#[test]
fn test_interactive_session_script() {
    let mut session =
        PayrollSession::new(small_roster(), start(), 2026, 1).expect("session");

    let script = "\
show
ot Ana:5=3.5
generate
ot Ana:5=3.5
ot Boris:6=abc
bogus
period 2026 2
summary
quit
ot Ana:6=1
";
    run(&mut session, &mut Cursor::new(script)).expect("run");

    // The first `ot` failed (not generated), the one after `quit` never ran.
    assert_eq!(session.overtime().get("Ana", 5), 3.5);
    assert_eq!(session.overtime().get("Boris", 6), 0.0);
    assert_eq!(session.overtime().get("Ana", 6), 0.0);
    assert_eq!(session.period(), (2026, 2));
    assert_eq!(session.pivot().expect("pivot").month, 1);
}

#[test]
fn test_overtime_total_per_worker_matches_pivot() {
    let mut session = generated();
    session.set_overtime("Mile Vucina", 5, "3.5").expect("set");
    session.set_overtime("Mile Vucina", 9, "1.5").expect("set");
    session.set_overtime("Aner Mrgan", 9, "2").expect("set");

    let pivot = session.pivot().expect("pivot");
    for name in ["Mile Vucina", "Aner Mrgan", "Bakir Behmen"] {
        assert_eq!(
            session.overtime().total_for(name),
            pivot.row(name).expect("row").total_overtime,
            "{name}"
        );
    }
    assert_eq!(session.overtime().total_for("Mile Vucina"), 5.0);
}

#[test]
fn test_year_options_from_config() {
    let mut session = PayrollSession::from_config(&Config::default()).expect("session");
    assert_eq!(session.year_options(), &[2025, 2026, 2027]);
    assert!(session.is_offered_year(2027));
    assert!(!session.is_offered_year(2030));

    // still a valid selection, only outside the offered list
    session.set_period(2030, 1).expect("period");
    assert_eq!(session.period(), (2030, 1));

    let plain = PayrollSession::new(small_roster(), start(), 2026, 1).expect("session");
    assert!(plain.year_options().is_empty());
    assert!(plain.is_offered_year(2030));
}
