#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Membre du personnel à planifier.
///
/// Le compteur de jours et les affectations par jour ne sont mutés que par la
/// primitive d'affectation du moteur, d'un seul geste avec la grille.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Worker {
    pub name: String,
    pub preferred_shift: String,
    #[cfg_attr(feature = "serde", serde(default))]
    days_worked: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    assignments: BTreeMap<String, String>,
}

impl Worker {
    pub fn new<N: Into<String>, P: Into<String>>(name: N, preferred_shift: P) -> Self {
        Self {
            name: name.into(),
            preferred_shift: preferred_shift.into(),
            days_worked: 0,
            assignments: BTreeMap::new(),
        }
    }

    /// Vrai si le jour est encore libre et le plafond hebdomadaire non atteint.
    pub fn can_work(&self, day: &str, max_days_per_week: u32) -> bool {
        !self.assignments.contains_key(day) && self.days_worked < max_days_per_week
    }

    /// Créneau affecté pour `day`, s'il y en a un.
    pub fn assignment_for(&self, day: &str) -> Option<&str> {
        self.assignments.get(day).map(String::as_str)
    }

    /// Nombre de jours affectés cette semaine.
    pub fn days_worked(&self) -> u32 {
        self.days_worked
    }

    pub fn assignments(&self) -> &BTreeMap<String, String> {
        &self.assignments
    }

    pub(crate) fn assign(&mut self, day: &str, shift: &str) {
        self.assignments.insert(day.to_owned(), shift.to_owned());
        self.days_worked += 1;
    }
}

/// Équipe complète, dans l'ordre de passage de la passe 1.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Roster {
    pub workers: Vec<Worker>,
}

impl Roster {
    pub fn from_workers(workers: Vec<Worker>) -> Self {
        Self { workers }
    }

    pub fn find_by_name<'a>(&'a self, name: &str) -> Option<&'a Worker> {
        self.workers.iter().find(|w| w.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }
}
