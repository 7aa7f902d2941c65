use super::team::Team;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    pub name: String,
    pub position: String,
    pub team: Team,
}

impl Worker {
    pub fn new(name: &str, position: &str, team: Team) -> Self {
        Self {
            name: name.to_string(),
            position: position.to_string(),
            team,
        }
    }
}

/// Fixed set of workers the generator and the pivot builder work on.
///
/// Names are unique; they are the key of every shift record and overtime entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Roster {
    workers: Vec<Worker>,
}

impl Roster {
    /// Rejects an empty list and duplicate names.
    pub fn new(workers: Vec<Worker>) -> AppResult<Self> {
        if workers.is_empty() {
            return Err(AppError::EmptyRoster);
        }

        let mut seen = HashSet::new();
        for w in &workers {
            if !seen.insert(w.name.as_str()) {
                return Err(AppError::DuplicateWorker(w.name.clone()));
            }
        }
        Ok(Self { workers })
    }

    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&Worker> {
        self.workers.iter().find(|w| w.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Members of one team, in roster order.
    pub fn members(&self, team: Team) -> impl Iterator<Item = &Worker> {
        self.workers.iter().filter(move |w| w.team == team)
    }

    /// Workers grouped team1, team2, team3, regular.
    pub fn ordered(&self) -> Vec<&Worker> {
        Team::ALL.iter().flat_map(|t| self.members(*t)).collect()
    }
}

impl<'de> Deserialize<'de> for Roster {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let workers = Vec::<Worker>::deserialize(deserializer)?;
        Roster::new(workers).map_err(serde::de::Error::custom)
    }
}

impl Default for Roster {
    /// Production roster: four workers per team.
    fn default() -> Self {
        const BASE_OPERATOR: &str = "operater na bazi";
        const LOADER: &str = "vozač - UTOVARIVAČ";
        const MIXER: &str = "vozač - MIKSER";

        let workers = vec![
            Worker::new("Slaviša Jovičić", BASE_OPERATOR, Team::Team1),
            Worker::new("Mile Vucina", LOADER, Team::Team1),
            Worker::new("Dragan Raguž", MIXER, Team::Team1),
            Worker::new("Denis Marković", MIXER, Team::Team1),
            Worker::new("Bakir Behmen", BASE_OPERATOR, Team::Team2),
            Worker::new("Dražen Proleta", MIXER, Team::Team2),
            Worker::new("Danko Perić", MIXER, Team::Team2),
            Worker::new("Seldin Selman", LOADER, Team::Team2),
            Worker::new("Srđan Cvijović", BASE_OPERATOR, Team::Team3),
            Worker::new("Marko Radisic", LOADER, Team::Team3),
            Worker::new("Radivoje Gordić", MIXER, Team::Team3),
            Worker::new("Mirnel Koso", MIXER, Team::Team3),
            Worker::new("Firzet Selman", "pomoćni radnik", Team::Regular),
            Worker::new("Srećko Kundačina", "vagar", Team::Regular),
            Worker::new("Aner Mrgan", MIXER, Team::Regular),
            Worker::new("Nikola Kovačević", MIXER, Team::Regular),
        ];

        Self { workers }
    }
}
