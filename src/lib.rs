#![forbid(unsafe_code)]
//! Roulement — bibliothèque de planification de roulements hebdomadaires (sans BD).
//!
//! - Affectation en deux passes : préférences d'abord, puis effectif minimal.
//! - Bornes d'effectif par créneau, plafond de jours travaillés par semaine.
//! - Jours et créneaux configurables, en listes ordonnées explicites.
//! - Aléa injectable pour des tirages rejouables en test.

pub mod engine;
pub mod grid;
#[cfg(feature = "serde")]
pub mod io;
pub mod model;
pub mod render;

pub use engine::{
    CandidatePicker, Engine, PlanConfig, PlanError, PlanReport, RandomPicker, Shortfall,
};
pub use grid::WeekGrid;
pub use model::{Roster, Worker};
pub use render::{GridRenderer, TextGrid};
