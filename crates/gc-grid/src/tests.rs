//! Unit tests for gc-grid.
//!
//! All tests use small hand-written mazes.

#[cfg(test)]
mod helpers {
    use std::collections::VecDeque;

    use gc_core::Position;
    use crate::Grid;

    /// The maze the chase demo ships with.
    ///
    /// ```text
    /// 0 0 0 0 0 0
    /// 0 1 1 0 1 0
    /// 0 0 0 0 0 0
    /// 0 1 1 1 0 0
    /// 0 0 0 0 0 0
    /// ```
    pub fn demo_maze() -> Grid {
        Grid::from_rows(&[
            [0u8, 0, 0, 0, 0, 0],
            [0, 1, 1, 0, 1, 0],
            [0, 0, 0, 0, 0, 0],
            [0, 1, 1, 1, 0, 0],
            [0, 0, 0, 0, 0, 0],
        ])
        .unwrap()
    }

    /// Two free regions separated by a full wall column.
    pub fn split_maze() -> Grid {
        Grid::from_rows(&[
            [0u8, 0, 1, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 1, 0, 0],
        ])
        .unwrap()
    }

    /// Independent distance oracle: level-synchronised BFS returning the
    /// number of moves from `from` to every cell (`None` = unreachable).
    pub fn distances(grid: &Grid, from: Position) -> Vec<Option<usize>> {
        let mut dist = vec![None; grid.len()];
        let Some(start) = grid.index_of(from) else { return dist };
        if !grid.is_passable(from) {
            return dist;
        }
        dist[start] = Some(0);
        let mut frontier = VecDeque::from([from]);
        let mut level = 0;
        while !frontier.is_empty() {
            level += 1;
            let mut next = VecDeque::new();
            for p in frontier {
                for d in [(0, 1), (1, 0), (0, -1), (-1, 0)] {
                    let n = Position::new(p.x + d.0, p.y + d.1);
                    if grid.is_passable(n) {
                        let i = grid.index_of(n).unwrap();
                        if dist[i].is_none() {
                            dist[i] = Some(level);
                            next.push_back(n);
                        }
                    }
                }
            }
            frontier = next;
        }
        dist
    }

    pub fn all_positions(grid: &Grid) -> Vec<Position> {
        (0..grid.len()).map(|i| grid.position_of(i)).collect()
    }
}

// ── Grid model ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod grid {
    use gc_core::Position;
    use crate::{Cell, Grid, GridError};

    #[test]
    fn dimensions() {
        let g = super::helpers::demo_maze();
        assert_eq!(g.width(), 6);
        assert_eq!(g.height(), 5);
        assert_eq!(g.len(), 30);
        assert_eq!(g.free_cells(), 30 - 6);
    }

    #[test]
    fn cells_indexed_by_column_then_row() {
        let g = Grid::from_rows(&[[0u8, 1], [0, 0]]).unwrap();
        assert_eq!(g.cell(Position::new(1, 0)), Some(Cell::Wall));
        assert_eq!(g.cell(Position::new(0, 1)), Some(Cell::Free));
        assert!(!g.is_passable(Position::new(1, 0)));
        assert!(g.is_passable(Position::new(1, 1)));
    }

    #[test]
    fn out_of_bounds_never_passable() {
        let g = super::helpers::demo_maze();
        for p in [
            Position::new(-1, 0),
            Position::new(0, -1),
            Position::new(-3, -3),
            Position::new(6, 0),
            Position::new(0, 5),
            Position::new(6, 5),
            Position::new(i32::MAX, 0),
            Position::new(0, i32::MIN),
        ] {
            assert!(!g.is_passable(p), "{p} should not be passable");
            assert_eq!(g.cell(p), None);
            assert_eq!(g.index_of(p), None);
        }
    }

    #[test]
    fn index_roundtrip() {
        let g = super::helpers::demo_maze();
        for i in 0..g.len() {
            assert_eq!(g.index_of(g.position_of(i)), Some(i));
        }
    }

    #[test]
    fn ragged_rejected() {
        let rows = vec![vec![0u8, 0, 0], vec![0, 0], vec![0, 0, 0]];
        let err = Grid::from_rows(&rows).unwrap_err();
        assert!(matches!(err, GridError::Ragged { row: 1, expected: 3, got: 2 }), "{err}");
    }

    #[test]
    fn empty_rejected() {
        let none: Vec<Vec<u8>> = vec![];
        assert!(matches!(Grid::from_rows(&none), Err(GridError::Empty)));
        let zero_width: Vec<Vec<u8>> = vec![vec![]];
        assert!(matches!(Grid::from_rows(&zero_width), Err(GridError::Empty)));
        assert!(matches!(Grid::open(0, 3), Err(GridError::Empty)));
    }

    #[test]
    fn invalid_marker_rejected() {
        let err = Grid::from_rows(&[[0u8, 2, 0]]).unwrap_err();
        assert!(matches!(err, GridError::InvalidCell { x: 1, y: 0, value: 2 }));
    }

    #[test]
    fn from_cells_matches_from_rows() {
        let a = Grid::from_cells(vec![
            vec![Cell::Free, Cell::Wall],
            vec![Cell::Free, Cell::Free],
        ])
        .unwrap();
        let b = Grid::from_rows(&[[0u8, 1], [0, 0]]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn display_prints_markers() {
        let g = Grid::from_rows(&[[0u8, 1], [1, 0]]).unwrap();
        assert_eq!(g.to_string(), "01\n10\n");
    }

    #[test]
    fn passable_neighbors_skip_walls_and_edges() {
        let g = super::helpers::demo_maze();
        let n: Vec<_> = g.passable_neighbors(Position::new(0, 0)).collect();
        // Up and left are off-grid.
        assert_eq!(n, vec![Position::new(1, 0), Position::new(0, 1)]);
        let n: Vec<_> = g.passable_neighbors(Position::new(1, 0)).collect();
        // (1, 1) below is a wall.
        assert_eq!(n, vec![Position::new(2, 0), Position::new(0, 0)]);
    }
}

// ── Loaders ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::{Cursor, Write};

    use gc_core::Position;
    use crate::{GridError, load_grid_csv, load_grid_reader, parse_grid_str};

    #[test]
    fn csv_reader() {
        let g = load_grid_reader(Cursor::new("0,0,0\n1, 1 ,0\n0,0,0\n")).unwrap();
        assert_eq!((g.width(), g.height()), (3, 3));
        assert!(!g.is_passable(Position::new(1, 1)));
        assert!(g.is_passable(Position::new(2, 1)));
    }

    #[test]
    fn csv_ragged_names_row() {
        let err = load_grid_reader(Cursor::new("0,0,0\n0,0\n")).unwrap_err();
        assert!(matches!(err, GridError::Ragged { row: 1, .. }), "{err}");
    }

    #[test]
    fn csv_bad_field() {
        let err = load_grid_reader(Cursor::new("0,x,0\n")).unwrap_err();
        assert!(matches!(err, GridError::Parse(_)), "{err}");
    }

    #[test]
    fn csv_bad_marker() {
        let err = load_grid_reader(Cursor::new("0,3,0\n")).unwrap_err();
        assert!(matches!(err, GridError::InvalidCell { value: 3, .. }), "{err}");
    }

    #[test]
    fn csv_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("maze.csv");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "0,1").unwrap();
        writeln!(f, "0,0").unwrap();
        drop(f);

        let g = load_grid_csv(&path).unwrap();
        assert_eq!(g, super::grid_from("01\n00"));
    }

    #[test]
    fn csv_missing_file_is_io() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = load_grid_csv(&dir.path().join("missing.csv")).unwrap_err();
        assert!(matches!(err, GridError::Io(_)));
    }

    #[test]
    fn text_forms() {
        let a = parse_grid_str("\n  0#.\n  1..\n\n").unwrap();
        let b = parse_grid_str("010\n100").unwrap();
        assert_eq!(a, b);
        assert!(matches!(parse_grid_str("0x0"), Err(GridError::Parse(_))));
        assert!(matches!(parse_grid_str("000\n00"), Err(GridError::Ragged { .. })));
        assert!(matches!(parse_grid_str("   \n"), Err(GridError::Empty)));
    }
}

#[cfg(test)]
fn grid_from(text: &str) -> crate::Grid {
    crate::parse_grid_str(text).unwrap()
}

// ── BFS path search ───────────────────────────────────────────────────────────

#[cfg(test)]
mod search {
    use gc_core::Position;
    use crate::{BfsPathFinder, Grid, Path, PathFinder};

    fn find(grid: &Grid, from: (i32, i32), to: (i32, i32)) -> Path {
        BfsPathFinder.find_path(grid, from.into(), to.into())
    }

    #[test]
    fn self_path_is_single_position() {
        let g = super::helpers::demo_maze();
        let p = find(&g, (3, 2), (3, 2));
        assert_eq!(p.positions(), &[Position::new(3, 2)]);
        assert_eq!(p.steps(), 0);
        assert_eq!(p.next_step(), None);
    }

    #[test]
    fn straight_corridor() {
        let g = Grid::open(3, 1).unwrap();
        let p = find(&g, (0, 0), (2, 0));
        assert_eq!(
            p.positions(),
            &[Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)]
        );
        assert_eq!(p.next_step(), Some(Position::new(1, 0)));
    }

    #[test]
    fn wall_forces_detour() {
        let g = Grid::from_rows(&[[0u8, 0, 0], [1, 1, 0], [0, 0, 0]]).unwrap();
        let p = find(&g, (0, 0), (0, 2));
        // Around the wall through (2, 1): six moves, not the Manhattan two.
        assert_eq!(p.steps(), 6);
        assert_eq!(p.len(), 7);
        assert!(p.contains(Position::new(2, 1)));
        assert!(p.is_valid_on(&g));
        assert!(p.steps() > Position::new(0, 0).manhattan(Position::new(0, 2)) as usize);
    }

    #[test]
    fn unreachable_region_gives_empty() {
        let g = super::helpers::split_maze();
        let p = find(&g, (0, 0), (4, 2));
        assert!(p.is_empty());
        assert_eq!(p.next_step(), None);
        assert_eq!(p.steps(), 0);
    }

    #[test]
    fn wall_or_off_grid_target_gives_empty() {
        let g = super::helpers::demo_maze();
        assert!(find(&g, (0, 0), (1, 1)).is_empty());
        assert!(find(&g, (0, 0), (-1, 0)).is_empty());
        assert!(find(&g, (0, 0), (6, 4)).is_empty());
    }

    #[test]
    fn wall_or_off_grid_start_gives_empty() {
        let g = super::helpers::demo_maze();
        assert!(find(&g, (1, 1), (0, 0)).is_empty());
        assert!(find(&g, (-1, 0), (0, 0)).is_empty());
    }

    #[test]
    fn tie_break_prefers_up_right_down_left() {
        let g = Grid::open(3, 3).unwrap();
        // From the top-left corner, right is expanded before down.
        let p = find(&g, (0, 0), (1, 1));
        assert_eq!(p.next_step(), Some(Position::new(1, 0)));
        // From the bottom-right corner, up is expanded before left.
        let p = find(&g, (2, 2), (1, 1));
        assert_eq!(p.next_step(), Some(Position::new(2, 1)));
    }

    #[test]
    fn demo_maze_initial_route() {
        let g = super::helpers::demo_maze();
        let p = find(&g, (5, 0), (2, 4));
        assert_eq!(p.start(), Some(Position::new(5, 0)));
        assert_eq!(p.goal(), Some(Position::new(2, 4)));
        assert_eq!(p.steps(), 7);
        assert_eq!(p.next_step(), Some(Position::new(5, 1)));
        assert!(p.is_valid_on(&g));
    }

    #[test]
    fn lengths_match_distance_oracle() {
        for g in [
            super::helpers::demo_maze(),
            super::helpers::split_maze(),
            Grid::from_rows(&[[0u8, 0, 0], [1, 1, 0], [0, 0, 0]]).unwrap(),
            super::grid_from("0000\n0110\n0010\n1000"),
        ] {
            let all = super::helpers::all_positions(&g);
            for &from in &all {
                let dist = super::helpers::distances(&g, from);
                for &to in &all {
                    let path = BfsPathFinder.find_path(&g, from, to);
                    if from == to {
                        assert_eq!(path.len(), 1);
                        continue;
                    }
                    match dist[g.index_of(to).unwrap()] {
                        Some(d) => {
                            assert_eq!(path.steps(), d, "{from} -> {to}");
                            assert_eq!(path.start(), Some(from));
                            assert_eq!(path.goal(), Some(to));
                            assert!(path.is_valid_on(&g), "{from} -> {to}: {path:?}");
                        }
                        None => assert!(path.is_empty(), "{from} -> {to}: {path:?}"),
                    }
                }
            }
        }
    }

    #[test]
    fn path_helpers() {
        let p = Path::from(vec![Position::new(0, 0), Position::new(0, 1)]);
        assert_eq!(p.start(), Some(Position::new(0, 0)));
        assert_eq!(p.goal(), Some(Position::new(0, 1)));
        assert_eq!(p.into_positions().len(), 2);
        assert!(Path::empty().is_empty());
        assert!(Path::empty().is_valid_on(&Grid::open(1, 1).unwrap()));
    }
}
