mod backfill;
mod picker;
mod preference;
mod types;

pub use picker::{CandidatePicker, RandomPicker};
pub use types::{PlanConfig, PlanError, PlanReport, Shortfall};

use crate::grid::WeekGrid;
use crate::model::Roster;

/// Moteur d'affectation : encapsule la grille en cours de remplissage.
///
/// Un moteur correspond à une seule planification hebdomadaire ; la grille
/// n'est jamais remise à zéro entre deux appels.
#[derive(Debug)]
pub struct Engine {
    config: PlanConfig,
    grid: WeekGrid,
    picker: Box<dyn CandidatePicker>,
}

impl Engine {
    /// Construit un moteur avec le tirage aléatoire par défaut.
    pub fn new(config: PlanConfig) -> Result<Self, PlanError> {
        Self::with_picker(config, Box::new(RandomPicker::from_entropy()))
    }

    /// Construit un moteur avec une source d'aléa fournie.
    pub fn with_picker(
        config: PlanConfig,
        picker: Box<dyn CandidatePicker>,
    ) -> Result<Self, PlanError> {
        config.validate()?;
        let grid = WeekGrid::new(&config.days, &config.shifts);
        Ok(Self {
            config,
            grid,
            picker,
        })
    }

    pub fn config(&self) -> &PlanConfig {
        &self.config
    }

    pub fn grid(&self) -> &WeekGrid {
        &self.grid
    }

    /// Récupère la grille finale en consommant le moteur.
    pub fn into_grid(self) -> WeekGrid {
        self.grid
    }

    /// Déroule la semaine complète : passe 1 puis passe 2, jour par jour.
    ///
    /// Les créneaux restés sous l'effectif minimal sont listés dans le
    /// rapport ; la couverture partielle est un résultat normal, pas une
    /// erreur.
    pub fn plan(&mut self, roster: &mut Roster) -> Result<PlanReport, PlanError> {
        self.config.check_roster(roster)?;

        // clone pour itérer sans emprunt simultané du moteur
        let days = self.config.days.clone();
        let mut shortfalls = Vec::new();
        for day in &days {
            self.preference_pass(roster, day);
            shortfalls.extend(self.backfill_pass(roster, day));
        }
        Ok(PlanReport { shortfalls })
    }

    /// Passe 1 : place chaque membre disponible sur son créneau préféré,
    /// sinon sur la première alternative avec de la place. Déterministe,
    /// dans l'ordre de l'équipe.
    pub fn preference_pass(&mut self, roster: &mut Roster, day: &str) {
        preference::preference_pass(self, roster, day);
    }

    /// Passe 2 : complète chaque créneau jusqu'à l'effectif minimal en
    /// tirant au sort parmi les membres encore disponibles. Retourne les
    /// créneaux restés sous le minimum.
    pub fn backfill_pass(&mut self, roster: &mut Roster, day: &str) -> Vec<Shortfall> {
        backfill::backfill_pass(self, roster, day)
    }
}
