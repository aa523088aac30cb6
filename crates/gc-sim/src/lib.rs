//! `gc-sim` — pursuer and tick loop for the ghost_chase workspace.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.max_ticks:
//!   ① Drive    — TargetDriver may move the target (validated).
//!   ② Plan     — BFS from ghost to target, from scratch.
//!   ③ Step     — ghost moves to path[1] if the path has one.
//!   ④ Observe  — GameObserver hooks receive a TickReport and a GameView.
//!   (stop early on capture when config.stop_on_catch)
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gc_core::Position;
//! use gc_grid::Grid;
//! use gc_sim::{Game, NoopObserver, StationaryTarget};
//!
//! let grid = Grid::from_rows(&[[0u8, 0, 0]])?;
//! let mut game = Game::new(grid, Position::new(0, 0), Position::new(2, 0))?;
//! game.run(&mut StationaryTarget, &mut NoopObserver)?;
//! assert!(game.is_caught());
//! ```

pub mod builder;
pub mod driver;
pub mod error;
pub mod game;
pub mod ghost;
pub mod observer;


pub use builder::GameBuilder;
pub use driver::{RandomWalkTarget, ScriptedTarget, StationaryTarget, TargetDriver};
pub use error::{Actor, SimError, SimResult};
pub use game::{Game, GameStats};
pub use ghost::Ghost;
pub use observer::{GameObserver, GameView, NoopObserver, RunSummary, TickReport};
