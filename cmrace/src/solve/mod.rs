//! The three search engines and their shared traversal loop.
//!
//! All disciplines run the exact same step: pop an entry, skip it when its
//! position was already expanded (lazy deletion), otherwise mark it visited
//! and push the walkable unvisited neighbors with extended path snapshots.
//! Only the [`Frontier`] ordering differs.

pub mod frontier;

use std::{
    fmt,
    time::{Duration, Instant},
};

use hashbrown::HashSet;

use crate::{
    board::{Board, LocateError, Tile},
    dims::Dims,
};
use frontier::{BestFirstFrontier, Frontier, QueueFrontier, StackFrontier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Discipline {
    Dfs,
    Bfs,
    BestFirst,
}

impl Discipline {
    pub const ALL: [Discipline; 3] = [Discipline::Dfs, Discipline::Bfs, Discipline::BestFirst];

    pub fn label(self) -> &'static str {
        match self {
            Discipline::Dfs => "DFS",
            Discipline::Bfs => "BFS",
            Discipline::BestFirst => "best-first",
        }
    }

    fn frontier(self, goal: Dims) -> Box<dyn Frontier> {
        match self {
            Discipline::Dfs => Box::new(StackFrontier::default()),
            Discipline::Bfs => Box::new(QueueFrontier::default()),
            Discipline::BestFirst => Box::new(BestFirstFrontier::new(goal)),
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One discovered position together with its own full ancestry from start.
/// Paths are copied on extension, never shared between entries.
#[derive(Debug, Clone)]
pub struct FrontierEntry {
    pub pos: Dims,
    pub path: Vec<Dims>,
}

/// Outcome of a run that reached the exit.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub discipline: Discipline,
    /// Start to exit, each position orthogonally adjacent to its predecessor.
    pub path: Vec<Dims>,
    /// Every expanded position in visit order; index + 1 is its visit number.
    pub visited: Vec<Dims>,
    pub elapsed: Duration,
}

#[derive(Debug, Clone)]
pub enum Step {
    /// A new position was expanded, exploration continues.
    Visited(Dims),
    /// The exit was expanded; this is the final step.
    Found(RunResult),
    /// The frontier drained without reaching the exit. Not an error: the
    /// generator only guarantees local reachability around the markers.
    Exhausted,
}

/// A single exploration of one board under one discipline.
///
/// Owns its board copy, frontier and visited set, so three solvers of the
/// same maze never contaminate each other. Drive it with [`Solver::step`]
/// (one visit per call, for animation) or [`Solver::run`] (to completion).
pub struct Solver {
    board: Board,
    discipline: Discipline,
    frontier: Box<dyn Frontier>,
    visited: HashSet<Dims>,
    visited_order: Vec<Dims>,
    current_path: Vec<Dims>,
    goal: Dims,
    started: Instant,
    done: bool,
}

impl Solver {
    pub fn new(board: Board, discipline: Discipline) -> Result<Self, LocateError> {
        let (start, goal) = board.locate()?;

        let mut frontier = discipline.frontier(goal);
        frontier.push(FrontierEntry {
            pos: start,
            path: vec![start],
        });

        Ok(Self {
            board,
            discipline,
            frontier,
            visited: HashSet::new(),
            visited_order: Vec::new(),
            current_path: Vec::new(),
            goal,
            started: Instant::now(),
            done: false,
        })
    }

    pub fn discipline(&self) -> Discipline {
        self.discipline
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn goal(&self) -> Dims {
        self.goal
    }

    pub fn visited_order(&self) -> &[Dims] {
        &self.visited_order
    }

    /// Path of the most recently expanded position.
    pub fn current_path(&self) -> &[Dims] {
        &self.current_path
    }

    pub fn head(&self) -> Option<Dims> {
        self.visited_order.last().copied()
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Expands exactly one new position, or reports the final outcome.
    pub fn step(&mut self) -> Step {
        if self.done {
            return Step::Exhausted;
        }

        while let Some(entry) = self.frontier.pop() {
            if !self.visited.insert(entry.pos) {
                continue;
            }

            self.visited_order.push(entry.pos);
            self.current_path = entry.path;

            if entry.pos == self.goal {
                self.done = true;
                return Step::Found(RunResult {
                    discipline: self.discipline,
                    path: self.current_path.clone(),
                    visited: self.visited_order.clone(),
                    elapsed: self.started.elapsed(),
                });
            }

            for neighbor in self.board.neighbors(entry.pos) {
                let walkable = self
                    .board
                    .get(neighbor)
                    .is_some_and(|tile| tile.is_walkable());
                if walkable && !self.visited.contains(&neighbor) {
                    let mut path = self.current_path.clone();
                    path.push(neighbor);
                    self.frontier.push(FrontierEntry {
                        pos: neighbor,
                        path,
                    });
                }
            }

            return Step::Visited(entry.pos);
        }

        self.done = true;
        Step::Exhausted
    }

    /// Runs to completion, calling `on_visit(position, path, visited)` once
    /// per newly expanded position, the exit included. The callback renders
    /// synchronously; pacing is the caller's business.
    pub fn run(
        mut self,
        mut on_visit: impl FnMut(Dims, &[Dims], &[Dims]),
    ) -> Option<RunResult> {
        loop {
            match self.step() {
                Step::Visited(pos) => on_visit(pos, &self.current_path, &self.visited_order),
                Step::Found(result) => {
                    on_visit(self.goal, &self.current_path, &self.visited_order);
                    return Some(result);
                }
                Step::Exhausted => return None,
            }
        }
    }

    /// Runs to completion without an observer.
    pub fn solve(self) -> Option<RunResult> {
        self.run(|_, _, _| {})
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{generate, seeded_rng};

    // 5x5, walls only on the border, start (1,1), exit (3,3).
    const OPEN: &str = "5\n11111\n1e001\n10001\n100x1\n11111\n";

    // Solid wall ring between the start region and the exit's.
    const SPLIT: &str = "7\n1111111\n1e00111\n1000111\n1111111\n1110001\n11100x1\n1111111\n";

    fn run(text: &str, discipline: Discipline) -> Option<RunResult> {
        let board = Board::parse(text).unwrap();
        Solver::new(board, discipline).unwrap().solve()
    }

    fn assert_valid_path(board: &Board, result: &RunResult) {
        let (start, exit) = board.locate().unwrap();
        let path = &result.path;

        assert_eq!(*path.first().unwrap(), start);
        assert_eq!(*path.last().unwrap(), exit);
        for pair in path.windows(2) {
            assert_eq!(pair[0].manhattan(pair[1]), 1, "path not contiguous");
        }

        let mut seen = HashSet::new();
        assert!(path.iter().all(|pos| seen.insert(*pos)), "path repeats");
    }

    #[test]
    fn all_disciplines_solve_the_open_board() {
        let board = Board::parse(OPEN).unwrap();
        for discipline in Discipline::ALL {
            let result = run(OPEN, discipline).unwrap();
            assert_eq!(result.discipline, discipline);
            assert_valid_path(&board, &result);
        }
    }

    #[test]
    fn bfs_finds_a_shortest_path_on_the_open_board() {
        let result = run(OPEN, Discipline::Bfs).unwrap();
        // (1,1) to (3,3) needs 4 edges, so 5 positions.
        assert_eq!(result.path.len(), 5);
        // 9 interior cells at most.
        assert!(result.visited.len() <= 9);
    }

    #[test]
    fn bfs_path_is_never_longer_than_the_others() {
        for seed in 0..30 {
            let mut rng = seeded_rng(Some(seed));
            let board = generate(15, 0.3, &mut rng).unwrap();

            let solve = |discipline| {
                Solver::new(board.clone(), discipline)
                    .unwrap()
                    .solve()
            };

            let Some(bfs) = solve(Discipline::Bfs) else {
                continue; // exit unreachable on this seed, nothing to compare
            };
            let dfs = solve(Discipline::Dfs).unwrap();
            let best = solve(Discipline::BestFirst).unwrap();

            assert!(bfs.path.len() <= dfs.path.len(), "seed {seed}");
            assert!(bfs.path.len() <= best.path.len(), "seed {seed}");

            for result in [&bfs, &dfs, &best] {
                assert_valid_path(&board, result);
            }
        }
    }

    #[test]
    fn reruns_visit_identically() {
        let mut rng = seeded_rng(Some(3));
        let board = generate(15, 0.3, &mut rng).unwrap();

        for discipline in Discipline::ALL {
            let a = Solver::new(board.clone(), discipline).unwrap().solve();
            let b = Solver::new(board.clone(), discipline).unwrap().solve();

            match (a, b) {
                (Some(a), Some(b)) => {
                    assert_eq!(a.visited, b.visited);
                    assert_eq!(a.path, b.path);
                }
                (None, None) => {}
                _ => panic!("rerun disagreed on solvability"),
            }
        }
    }

    #[test]
    fn split_board_exhausts_every_frontier() {
        for discipline in Discipline::ALL {
            assert!(run(SPLIT, discipline).is_none(), "{discipline}");
        }
    }

    #[test]
    fn on_visit_fires_once_per_visited_position() {
        let board = Board::parse(OPEN).unwrap();
        let (_, exit) = board.locate().unwrap();

        let mut calls = Vec::new();
        let result = Solver::new(board, Discipline::Bfs)
            .unwrap()
            .run(|pos, path, visited| {
                calls.push(pos);
                assert_eq!(*path.last().unwrap(), pos);
                assert_eq!(visited.len(), calls.len());
            })
            .unwrap();

        assert_eq!(calls, result.visited);
        assert_eq!(*calls.last().unwrap(), exit);
    }

    #[test]
    fn visit_sequence_numbers_are_dense() {
        let result = run(OPEN, Discipline::Dfs).unwrap();
        let mut seen = HashSet::new();
        for pos in &result.visited {
            assert!(seen.insert(*pos), "{pos:?} visited twice");
        }
    }
}
