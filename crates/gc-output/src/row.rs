//! Plain data row written by trace backends.

use gc_sim::TickReport;

/// One tick of the chase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceRow {
    pub tick:     u64,
    pub ghost_x:  i32,
    pub ghost_y:  i32,
    pub target_x: i32,
    pub target_y: i32,
    /// Length of the path planned this tick; 0 means no path.
    pub path_len: usize,
    pub moved:    bool,
}

impl From<&TickReport> for TraceRow {
    fn from(r: &TickReport) -> Self {
        Self {
            tick:     r.tick.0,
            ghost_x:  r.ghost.x,
            ghost_y:  r.ghost.y,
            target_x: r.target.x,
            target_y: r.target.y,
            path_len: r.path_len,
            moved:    r.moved,
        }
    }
}
