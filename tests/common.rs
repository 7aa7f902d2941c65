#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rtimesheet::models::{Roster, Team, Worker};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rts() -> Command {
    let mut cmd = cargo_bin_cmd!("rtimesheet");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Program start date of the production configuration.
pub fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 5).expect("valid start date")
}

/// Config path inside the system temp dir; any existing file is removed so
/// the CLI runs on defaults unless the test writes one.
pub fn temp_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimesheet.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Temporary output file path inside tempdir, removed beforehand
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// One worker per team.
pub fn small_roster() -> Roster {
    Roster::new(vec![
        Worker::new("Ana", "operater", Team::Team1),
        Worker::new("Boris", "vozač", Team::Team2),
        Worker::new("Cvijeta", "vozač", Team::Team3),
        Worker::new("Dino", "vagar", Team::Regular),
    ])
    .expect("unique names")
}
