use crate::grid::WeekGrid;

/// Permet de customiser le rendu de la grille (terminal, mail, etc.).
pub trait GridRenderer {
    fn render(&self, grid: &WeekGrid) -> String;
}

/// Rendu texte brut : un bloc par jour, "No Staff" pour les cases vides.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextGrid;

impl GridRenderer for TextGrid {
    fn render(&self, grid: &WeekGrid) -> String {
        let blocks: Vec<String> = grid
            .days()
            .iter()
            .map(|day| {
                let mut lines = vec![format!("{day}:")];
                for shift in grid.shifts() {
                    let cell = grid.cell(day, shift);
                    let staff = if cell.is_empty() {
                        "No Staff".to_string()
                    } else {
                        cell.join(", ")
                    };
                    lines.push(format!("  {shift:<10}: {staff}"));
                }
                lines.join("\n")
            })
            .collect();
        blocks.join("\n\n")
    }
}
