//! Plain-text rendering of a game frame.
//!
//! A frame has three parts: the two positions, the initial path listing with
//! a `<-` marker on the ghost's progress along it, and the maze with the
//! ghost, pac-man, and the remaining path drawn over it.

use std::fmt::Write;

use gc_core::Position;
use gc_grid::Cell;
use gc_sim::GameView;

// ── Legend ────────────────────────────────────────────────────────────────────

/// Glyphs used to draw the maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Legend {
    pub free:  char,
    pub wall:  char,
    pub ghost: char,
    pub pacman: char,
    pub path:  char,
}

impl Legend {
    /// Pure-ASCII glyphs for terminals without box-drawing characters.
    pub const fn ascii() -> Self {
        Self { free: '.', wall: '#', ghost: 'G', pacman: 'P', path: '*' }
    }
}

impl Default for Legend {
    fn default() -> Self {
        Self { free: '·', wall: '█', ghost: 'F', pacman: 'P', path: '*' }
    }
}

// ── TextRenderer ──────────────────────────────────────────────────────────────

/// Renders [`GameView`]s to strings.  Stateless apart from its legend.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer {
    pub legend: Legend,
}

impl TextRenderer {
    pub fn new(legend: Legend) -> Self {
        Self { legend }
    }

    /// Full frame: header, positions, initial path listing, and maze.
    pub fn render_frame(&self, view: &GameView<'_>) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = writeln!(out, "\n=== Game state ===");
        let _ = writeln!(out, "Ghost: {}", view.ghost);
        let _ = writeln!(out, "Pac-Man: {}", view.target);

        let _ = writeln!(out, "\nShortest path found:");
        out.push_str(&self.render_path_listing(view));

        let _ = writeln!(out, "\nMaze:");
        out.push_str(&self.render_maze(view));
        out
    }

    /// One `i: (x, y)` line per initial-path entry.  The entry whose index is
    /// `initial_len - remaining_len` is suffixed with ` <-`: on an unchanged
    /// target that is the ghost's current cell.
    pub fn render_path_listing(&self, view: &GameView<'_>) -> String {
        let initial = view.initial_path.positions();
        let marker = initial.len().checked_sub(view.remaining_path().len());

        let mut out = String::new();
        for (i, pos) in initial.iter().enumerate() {
            let suffix = if marker == Some(i) { " <-" } else { "" };
            let _ = writeln!(out, "{i}: {pos}{suffix}");
        }
        out
    }

    /// The maze, one line per row, cells separated by a single space.
    ///
    /// Remaining-path cells are drawn with the path glyph except under the
    /// ghost and pac-man.  Pac-man is drawn over the ghost.
    pub fn render_maze(&self, view: &GameView<'_>) -> String {
        let remaining = view.remaining_path();
        let mut out = String::with_capacity(view.grid.len() * 4);

        for (y, row) in view.grid.rows().enumerate() {
            let line: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(x, &cell)| {
                    let pos = Position::new(x as i32, y as i32);
                    self.glyph(pos, cell, view, remaining).to_string()
                })
                .collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        out
    }

    /// Legend block describing every glyph.
    pub fn legend(&self) -> String {
        let l = &self.legend;
        format!(
            "\nLegend:\n\
             {} - free\n\
             {} - wall\n\
             {} - ghost\n\
             {} - pac-man\n\
             {} - shortest path\n\
             ========================\n",
            l.free, l.wall, l.ghost, l.pacman, l.path,
        )
    }

    fn glyph(&self, pos: Position, cell: Cell, view: &GameView<'_>, remaining: &[Position]) -> char {
        if pos == view.target {
            self.legend.pacman
        } else if pos == view.ghost {
            self.legend.ghost
        } else if remaining.contains(&pos) {
            self.legend.path
        } else {
            match cell {
                Cell::Free => self.legend.free,
                Cell::Wall => self.legend.wall,
            }
        }
    }
}
