//! Aggregation of the flat shift records into the per-worker pivot table.

use crate::core::generator::Schedule;
use crate::models::{DayCell, OvertimeMap, Pivot, PivotRow, Roster, ShiftRecord};
use std::collections::{BTreeMap, HashMap};

/// Build the pivot for a generated month.
///
/// Returns `None` when `records` is empty (nothing generated yet). Every
/// roster worker gets a row with all days 1..=`days_in_month` zeroed, then
/// each record overwrites its day slot and adds to the totals. A second
/// record for the same (worker, day) overwrites the slot but its predecessor
/// stays counted in the totals; the generator never emits such duplicates.
/// Records for workers outside the roster or days outside the month are
/// skipped.
pub fn build_pivot(
    year: i32,
    month: u32,
    records: &[ShiftRecord],
    overtime: &OvertimeMap,
    roster: &Roster,
    days_in_month: u32,
) -> Option<Pivot> {
    if records.is_empty() {
        return None;
    }

    let mut rows: Vec<PivotRow> = roster
        .ordered()
        .into_iter()
        .map(|w| PivotRow {
            name: w.name.clone(),
            position: w.position.clone(),
            team: w.team,
            days: (1..=days_in_month)
                .map(|d| (d, DayCell::default()))
                .collect::<BTreeMap<_, _>>(),
            total_hours: 0,
            total_overtime: 0.0,
        })
        .collect();

    let index: HashMap<String, usize> = rows
        .iter()
        .enumerate()
        .map(|(i, r)| (r.name.clone(), i))
        .collect();

    for rec in records {
        if rec.day == 0 || rec.day > days_in_month {
            continue;
        }
        let Some(&i) = index.get(&rec.worker) else {
            continue;
        };

        let ot = overtime.get(&rec.worker, rec.day);
        let row = &mut rows[i];

        row.days.insert(
            rec.day,
            DayCell {
                hours: rec.hours,
                code: rec.code,
                label: rec.label.clone(),
                overtime: ot,
            },
        );
        row.total_hours += rec.hours;
        row.total_overtime += ot;
    }

    Some(Pivot {
        year,
        month,
        days_in_month,
        rows,
    })
}

/// Pivot of a generated [`Schedule`] using its own period.
pub fn pivot_schedule(schedule: &Schedule, overtime: &OvertimeMap, roster: &Roster) -> Option<Pivot> {
    build_pivot(
        schedule.year,
        schedule.month,
        &schedule.records,
        overtime,
        roster,
        schedule.days_in_month,
    )
}
