//! Explicit-stack depth-first search for the longest path.

use tinyvec::ArrayVec;
use trailgrid_core::{Grid, Position, rules};

use crate::BranchOrder;

type Candidates = ArrayVec<[Position; 8]>;

/// One level of the search: the ordered moves out of a path cell and how many
/// of them have been entered.
#[derive(Debug)]
struct Frame {
    candidates: Candidates,
    next: usize,
}

/// Mutable state of one solve.
///
/// The visited matrix and path buffer are allocated once and updated in place;
/// leaving a frame restores both. A cell is only expanded while the cells still
/// reachable from it could make the path strictly longer than the best one.
#[derive(Debug)]
pub(crate) struct Search<'a> {
    grid: &'a Grid,
    order: BranchOrder,
    total: usize,
    visited: Vec<bool>,
    path: Vec<Position>,
    frames: Vec<Frame>,
    best: Vec<Position>,
    nodes: u64,
    // flood fill scratch
    reached: Vec<bool>,
    queue: Vec<Position>,
}

impl<'a> Search<'a> {
    pub(crate) fn new(grid: &'a Grid, order: BranchOrder) -> Self {
        let total = grid.size().cell_count();
        Self {
            grid,
            order,
            total,
            visited: vec![false; total],
            path: Vec::with_capacity(total),
            frames: Vec::with_capacity(total),
            best: Vec::with_capacity(total),
            nodes: 0,
            reached: vec![false; total],
            queue: Vec::with_capacity(total),
        }
    }

    /// Runs the search from `start` and returns the best path and node count.
    pub(crate) fn run(mut self, start: Position) -> (Vec<Position>, u64) {
        self.enter(start);
        loop {
            // no path can be longer than the cell count
            if self.best.len() >= self.total {
                break;
            }
            let Some(frame) = self.frames.last_mut() else {
                break;
            };
            if let Some(&next) = frame.candidates.get(frame.next) {
                frame.next += 1;
                self.enter(next);
            } else {
                self.frames.pop();
                self.leave();
            }
        }
        (self.best, self.nodes)
    }

    fn enter(&mut self, pos: Position) {
        self.nodes += 1;
        self.visited[pos.index(self.grid.size())] = true;
        self.path.push(pos);

        // strictly longer only: the first path found at a length is kept
        if self.path.len() > self.best.len() {
            self.best.clone_from(&self.path);
        }

        let candidates = if self.path.len() < self.total && self.can_improve(pos) {
            self.ordered_moves(pos)
        } else {
            Candidates::new()
        };
        self.frames.push(Frame {
            candidates,
            next: 0,
        });
    }

    fn leave(&mut self) {
        if let Some(pos) = self.path.pop() {
            self.visited[pos.index(self.grid.size())] = false;
        }
    }

    /// Whether extending the path from `tail` can still beat the best path.
    ///
    /// The path can grow by at most the number of unvisited cells connected to
    /// `tail` through legal steps, so subtrees that cannot exceed the best
    /// length are skipped without changing which path is found.
    fn can_improve(&mut self, tail: Position) -> bool {
        let size = self.grid.size();
        self.reached.clone_from(&self.visited);
        self.queue.clear();
        self.queue.push(tail);
        let mut reachable = 0;
        while let Some(cell) = self.queue.pop() {
            for to in cell.neighbors(size) {
                let index = to.index(size);
                if !self.reached[index] && rules::is_legal_step(self.grid, cell, to) {
                    self.reached[index] = true;
                    reachable += 1;
                    self.queue.push(to);
                }
            }
        }
        self.path.len() + reachable > self.best.len()
    }

    fn is_open(&self, from: Position, to: Position) -> bool {
        !self.visited[to.index(self.grid.size())] && rules::is_legal_step(self.grid, from, to)
    }

    fn moves(&self, from: Position) -> Candidates {
        from.neighbors(self.grid.size())
            .filter(|&to| self.is_open(from, to))
            .collect()
    }

    fn ordered_moves(&self, from: Position) -> Candidates {
        let moves = self.moves(from);
        if self.order.is_neighbor_order() {
            return moves;
        }
        let mut keyed: ArrayVec<[(usize, Position); 8]> = moves
            .iter()
            .map(|&to| (self.moves(to).len(), to))
            .collect();
        // stable: equal counts keep neighbour order
        keyed.sort_by_key(|&(onward, _)| onward);
        keyed.iter().map(|&(_, to)| to).collect()
    }
}
