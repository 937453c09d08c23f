use super::Engine;
use crate::model::{Roster, Worker};

pub(super) fn preference_pass(engine: &mut Engine, roster: &mut Roster, day: &str) {
    if !engine.config.days.iter().any(|d| d == day) {
        return;
    }

    for worker in roster.workers.iter_mut() {
        if !worker.can_work(day, engine.config.max_days_per_week) {
            continue;
        }

        let preferred = worker.preferred_shift.clone();
        if engine.grid.staffed(day, &preferred) < engine.config.max_per_shift {
            engine.place(worker, day, &preferred);
            continue;
        }

        // préférence pleine : première alternative avec de la place
        let alternate = engine
            .config
            .shifts
            .iter()
            .find(|shift| {
                shift.as_str() != preferred
                    && engine.grid.staffed(day, shift) < engine.config.max_per_shift
            })
            .cloned();

        if let Some(shift) = alternate {
            engine.place(worker, day, &shift);
        }
        // sinon : membre laissé libre, repêchable en passe 2
    }
}

impl Engine {
    /// Primitive d'affectation : met à jour le membre et la grille d'un même
    /// geste. Capacité et disponibilité sont à la charge de l'appelant.
    pub(super) fn place(&mut self, worker: &mut Worker, day: &str, shift: &str) {
        worker.assign(day, shift);
        self.grid.push(day, shift, worker.name.clone());
    }
}
