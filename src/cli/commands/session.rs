use crate::cli::commands::{select_period, year_list};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::PayrollSession;
use crate::core::overtime::parse_assignment;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, ExportLogic};
use crate::models::Team;
use crate::ui::messages::{error, info, success, warning};
use crate::ui::views::{render_summary, render_timesheet, use_color};
use crate::utils::date::period_title;
use crate::utils::formatting::fmt_hours;
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  period <YEAR> <MONTH>        select a period (regenerate to apply)
  generate                     generate the selected month, clears overtime
  ot <NAME>:<DAY>=<VALUE>      set overtime hours (empty or invalid value = 0)
  show [team1|team2|team3|regular]
  summary                      totals and hours-by-worker chart
  export <csv|json|xlsx> [FILE] [--force]
  log                          session operation log
  help
  quit
";

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Session { period } = cmd {
        let mut session = PayrollSession::from_config(cfg)?;
        select_period(
            &mut session,
            period.year.unwrap_or(cfg.default_year),
            period.month.unwrap_or(cfg.default_month),
        )?;

        let stdin = io::stdin();
        run(&mut session, &mut stdin.lock())?;
    }
    Ok(())
}

/// Line-oriented loop over `input` until `quit` or end of input.
///
/// A failing command prints its error and the loop continues.
pub fn run<R: BufRead>(session: &mut PayrollSession, input: &mut R) -> AppResult<()> {
    let (year, month) = session.period();
    info(format!(
        "Session for {} ({} workers). Type `help` for commands.",
        period_title(year, month),
        session.roster().len()
    ));
    if !session.year_options().is_empty() {
        info(format!("Years: {}", year_list(session.year_options())));
    }

    loop {
        print!("> ");
        io::stdout().flush().ok();

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match execute(session, line, input) {
            Ok(true) => continue,
            Ok(false) => break,
            Err(e) => error(e),
        }
    }

    Ok(())
}

/// Run one command line. `Ok(false)` ends the session.
fn execute<R: BufRead>(session: &mut PayrollSession, line: &str, input: &mut R) -> AppResult<bool> {
    let (cmd, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    match cmd {
        "quit" | "exit" => return Ok(false),

        "help" => {
            print!("{HELP}");
            if !session.year_options().is_empty() {
                println!("Years: {}", year_list(session.year_options()));
            }
        }

        "period" => {
            let mut parts = rest.split_whitespace();
            let year = parts
                .next()
                .and_then(|y| y.parse::<i32>().ok())
                .ok_or_else(|| AppError::Other(format!("usage: period <YEAR> <MONTH> ({rest})")))?;
            let month = parts
                .next()
                .and_then(|m| m.parse::<u32>().ok())
                .ok_or_else(|| AppError::Other(format!("usage: period <YEAR> <MONTH> ({rest})")))?;

            select_period(session, year, month)?;
            info(format!(
                "Selected {}. Run `generate` to rebuild the schedule.",
                period_title(year, month)
            ));
        }

        "generate" => {
            let schedule = session.regenerate()?;
            success(format!(
                "Schedule generated for {} ({} records)",
                period_title(schedule.year, schedule.month),
                schedule.records.len()
            ));
        }

        "ot" => {
            let a = parse_assignment(rest)?;
            let hours = session.set_overtime(&a.worker, a.day, &a.raw_value)?;
            success(format!(
                "Overtime {}, day {}: {}h",
                a.worker,
                a.day,
                fmt_hours(hours)
            ));
        }

        "show" => {
            let team = if rest.is_empty() {
                None
            } else {
                Some(Team::from_code(rest).ok_or_else(|| AppError::InvalidTeam(rest.to_string()))?)
            };

            match session.pivot() {
                Some(pivot) => print!("{}", render_timesheet(&pivot, team, use_color())),
                None => not_generated(),
            }
        }

        "summary" => match session.pivot() {
            Some(pivot) => print!("{}", render_summary(&pivot)),
            None => not_generated(),
        },

        "export" => {
            let mut args = rest.split_whitespace().collect::<Vec<_>>();
            let force = args.iter().any(|a| *a == "--force" || *a == "-f");
            args.retain(|a| *a != "--force" && *a != "-f");

            let format = args
                .first()
                .and_then(|f| ExportFormat::from_code(f))
                .ok_or_else(|| AppError::Export(format!("usage: export <csv|json|xlsx> [FILE] ({rest})")))?;

            let pivot = session.pivot();
            if let Some(path) =
                ExportLogic::export(pivot.as_ref(), format, args.get(1).copied(), force, input)?
            {
                session.log_mut().record(
                    "export",
                    format.as_str(),
                    &format!("Exported to {}", path.display()),
                );
            }
        }

        "log" => session.log().print(),

        other => warning(format!("Unknown command '{other}'. Type `help`.")),
    }

    Ok(true)
}

fn not_generated() {
    warning("Select month and year, then run `generate` to create the schedule.");
}
