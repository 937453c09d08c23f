use crate::grid::WeekGrid;
use crate::model::Worker;
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import d'équipe depuis CSV: header `name,preferred_shift`
pub fn import_workers_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Worker>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        let preferred = rec.get(1).context("missing preferred_shift")?.trim();
        if name.is_empty() || preferred.is_empty() {
            bail!("invalid worker row (empty)");
        }
        out.push(Worker::new(name, preferred));
    }
    Ok(out)
}

/// Export JSON de la grille (jolie mise en forme)
pub fn export_grid_json<P: AsRef<Path>>(path: P, grid: &WeekGrid) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(grid)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV de la grille: header `day,shift,workers` (noms séparés par `;`)
pub fn export_grid_csv<P: AsRef<Path>>(path: P, grid: &WeekGrid) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["day", "shift", "workers"])?;
    for day in grid.days() {
        for shift in grid.shifts() {
            let workers = grid.cell(day, shift).join(";");
            w.write_record([day.as_str(), shift.as_str(), workers.as_str()])?;
        }
    }
    w.flush()?;
    Ok(())
}
