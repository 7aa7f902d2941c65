use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rTimesheet
/// CLI application to generate shift schedules and monthly payroll timesheets
#[derive(Parser)]
#[command(
    name = "rtimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Rotating shift schedules and monthly payroll timesheets with overtime",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom rosters)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Period selection shared by the schedule commands.
#[derive(Args, Clone, Debug, Default)]
pub struct PeriodArgs {
    /// Year (YYYY); defaults to `default_year` from the configuration
    #[arg(long, short = 'y')]
    pub year: Option<i32>,

    /// Month (1-12); defaults to `default_month` from the configuration
    #[arg(long, short = 'm')]
    pub month: Option<u32>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// List the generated shift records of a month
    Schedule {
        #[command(flatten)]
        period: PeriodArgs,

        #[arg(long, help = "Only records of this worker")]
        worker: Option<String>,

        #[arg(long, help = "Only records of this day of the month")]
        day: Option<u32>,
    },

    /// Show the monthly timesheet grouped by team
    Timesheet {
        #[command(flatten)]
        period: PeriodArgs,

        #[arg(long, help = "Only this team: team1, team2, team3 or regular")]
        team: Option<String>,

        #[arg(
            long = "ot",
            value_name = "NAME:DAY=VALUE",
            help = "Overtime hours for one worker and day (repeatable)"
        )]
        overtime: Vec<String>,
    },

    /// Show month totals and the hours-by-worker chart
    Summary {
        #[command(flatten)]
        period: PeriodArgs,

        #[arg(long = "ot", value_name = "NAME:DAY=VALUE")]
        overtime: Vec<String>,
    },

    /// Export the monthly timesheet
    Export {
        #[command(flatten)]
        period: PeriodArgs,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(
            long,
            value_name = "FILE",
            help = "Output file (default: payroll_<year>_<month>.<ext>)"
        )]
        file: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,

        #[arg(long = "ot", value_name = "NAME:DAY=VALUE")]
        overtime: Vec<String>,
    },

    /// Interactive session: generate, edit overtime, show and export
    Session {
        #[command(flatten)]
        period: PeriodArgs,
    },
}
