use super::{types::Shortfall, Engine};
use crate::model::Roster;

pub(super) fn backfill_pass(engine: &mut Engine, roster: &mut Roster, day: &str) -> Vec<Shortfall> {
    let mut shortfalls = Vec::new();
    if !engine.config.days.iter().any(|d| d == day) {
        return shortfalls;
    }

    let shifts = engine.config.shifts.clone();
    for shift in &shifts {
        while engine.grid.staffed(day, shift) < engine.config.min_per_shift {
            // vivier reconstruit à chaque tour : une affectation change la
            // disponibilité immédiatement
            let candidates: Vec<usize> = roster
                .workers
                .iter()
                .enumerate()
                .filter(|(_, worker)| worker.can_work(day, engine.config.max_days_per_week))
                .map(|(idx, _)| idx)
                .collect();

            if candidates.is_empty() {
                break;
            }

            let chosen = candidates[engine.picker.pick(candidates.len())];
            let worker = &mut roster.workers[chosen];
            engine.place(worker, day, shift);
        }

        let staffed = engine.grid.staffed(day, shift);
        if staffed < engine.config.min_per_shift {
            #[cfg(feature = "logging")]
            tracing::warn!(
                %day,
                %shift,
                staffed,
                required = engine.config.min_per_shift,
                "effectif minimal non atteint"
            );
            shortfalls.push(Shortfall {
                day: day.to_owned(),
                shift: shift.clone(),
                staffed,
                required: engine.config.min_per_shift,
            });
        }
    }

    shortfalls
}
