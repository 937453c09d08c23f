#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Grille hebdomadaire : jour → créneau → noms affectés, dans l'ordre
/// d'affectation. Toutes les cases existent dès la construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeekGrid {
    days: Vec<String>,
    shifts: Vec<String>,
    cells: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

impl WeekGrid {
    pub fn new(days: &[String], shifts: &[String]) -> Self {
        let cells = days
            .iter()
            .map(|day| {
                let row = shifts
                    .iter()
                    .map(|shift| (shift.clone(), Vec::new()))
                    .collect();
                (day.clone(), row)
            })
            .collect();
        Self {
            days: days.to_vec(),
            shifts: shifts.to_vec(),
            cells,
        }
    }

    /// Jours dans l'ordre calendaire configuré.
    pub fn days(&self) -> &[String] {
        &self.days
    }

    /// Créneaux dans l'ordre déclaré.
    pub fn shifts(&self) -> &[String] {
        &self.shifts
    }

    /// Noms affectés à une case ; vide si les labels sont inconnus.
    pub fn cell(&self, day: &str, shift: &str) -> &[String] {
        self.cells
            .get(day)
            .and_then(|row| row.get(shift))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn staffed(&self, day: &str, shift: &str) -> usize {
        self.cell(day, shift).len()
    }

    /// Nombre de jours où `name` apparaît dans la grille.
    pub fn days_assigned(&self, name: &str) -> usize {
        self.days
            .iter()
            .filter(|day| {
                self.shifts
                    .iter()
                    .any(|shift| self.cell(day, shift).iter().any(|n| n == name))
            })
            .count()
    }

    pub(crate) fn push(&mut self, day: &str, shift: &str, name: String) {
        if let Some(cell) = self.cells.get_mut(day).and_then(|row| row.get_mut(shift)) {
            cell.push(name);
        }
    }
}
