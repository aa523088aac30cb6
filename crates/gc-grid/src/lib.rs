//! `gc-grid` — maze grid, maze loading, and shortest-path search.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`grid`]    | `Cell`, `Grid` (rectangular free/wall occupancy grid)       |
//! | [`loader`]  | `load_grid_csv`, `load_grid_reader`, `parse_grid_str`       |
//! | [`search`]  | `PathFinder` trait, `Path`, `BfsPathFinder`                 |
//! | [`error`]   | `GridError`, `GridResult<T>`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod grid;
pub mod loader;
pub mod search;

#[cfg(test)]
mod tests;

pub use error::{GridError, GridResult};
pub use grid::{Cell, Grid};
pub use loader::{load_grid_csv, load_grid_reader, parse_grid_str};
pub use search::{BfsPathFinder, Path, PathFinder};
