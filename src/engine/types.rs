use crate::model::Roster;
use std::collections::HashSet;
use thiserror::Error;

/// Paramètres d'une planification hebdomadaire.
#[derive(Debug, Clone)]
pub struct PlanConfig {
    /// Jours, dans l'ordre de parcours du moteur.
    pub days: Vec<String>,
    /// Créneaux, dans l'ordre de parcours (préférence puis alternatives).
    pub shifts: Vec<String>,
    pub max_days_per_week: u32,
    pub min_per_shift: usize,
    pub max_per_shift: usize,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            days: [
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
                "Sunday",
            ]
            .map(str::to_owned)
            .to_vec(),
            shifts: ["Morning", "Afternoon", "Evening"].map(str::to_owned).to_vec(),
            max_days_per_week: 5,
            min_per_shift: 2,
            max_per_shift: 3,
        }
    }
}

impl PlanConfig {
    /// Valide bornes et listes de labels avant toute planification.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.days.is_empty() {
            return Err(PlanError::EmptyDays);
        }
        if self.shifts.is_empty() {
            return Err(PlanError::EmptyShifts);
        }
        if self.min_per_shift > self.max_per_shift {
            return Err(PlanError::StaffingBounds {
                min: self.min_per_shift,
                max: self.max_per_shift,
            });
        }
        if let Some(label) = first_duplicate(&self.days).or_else(|| first_duplicate(&self.shifts))
        {
            return Err(PlanError::DuplicateLabel(label));
        }
        Ok(())
    }

    /// Vérifie que l'équipe est cohérente avec la configuration : noms
    /// uniques, préférences connues.
    pub fn check_roster(&self, roster: &Roster) -> Result<(), PlanError> {
        let mut seen = HashSet::new();
        for worker in &roster.workers {
            if !seen.insert(worker.name.as_str()) {
                return Err(PlanError::DuplicateWorker(worker.name.clone()));
            }
            if !self.shifts.contains(&worker.preferred_shift) {
                return Err(PlanError::UnknownPreference {
                    worker: worker.name.clone(),
                    shift: worker.preferred_shift.clone(),
                });
            }
        }
        Ok(())
    }
}

fn first_duplicate(labels: &[String]) -> Option<String> {
    let mut seen = HashSet::new();
    for label in labels {
        if !seen.insert(label.as_str()) {
            return Some(label.clone());
        }
    }
    None
}

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("invalid staffing bounds: min {min} exceeds max {max}")]
    StaffingBounds { min: usize, max: usize },
    #[error("day list cannot be empty")]
    EmptyDays,
    #[error("shift list cannot be empty")]
    EmptyShifts,
    #[error("duplicate label: {0}")]
    DuplicateLabel(String),
    #[error("duplicate worker name: {0}")]
    DuplicateWorker(String),
    #[error("unknown preferred shift {shift:?} for worker {worker:?}")]
    UnknownPreference { worker: String, shift: String },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Créneau resté sous l'effectif minimal après la passe 2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortfall {
    pub day: String,
    pub shift: String,
    pub staffed: usize,
    pub required: usize,
}

/// Bilan d'une planification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanReport {
    pub shortfalls: Vec<Shortfall>,
}

impl PlanReport {
    pub fn fully_staffed(&self) -> bool {
        self.shortfalls.is_empty()
    }
}
