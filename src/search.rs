/*
 * Copyright (c) 2017-2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! Augmenting path search in the residual network.
//!
//! The search is a breadth-first-search that only follows arcs with positive
//! residual capacity. Neighbors are visited in ascending node order, hence
//! among several shortest paths the first one found in this order is
//! returned. The search stops as soon as the sink has been reached.
//!
//! # Example
//!
//! ```
//! use rs_flow::Network;
//! use rs_flow::search::{path_from_predecessors, AugmentingPath};
//!
//! let net = Network::from_capacities(&[
//!     [0, 1, 1, 0],
//!     [0, 0, 0, 1],
//!     [0, 0, 0, 1],
//!     [0, 0, 0, 0],
//! ]).unwrap();
//!
//! let mut search = AugmentingPath::new(net.num_nodes());
//! assert!(search.find(&net, 0, 3));
//!
//! let path: Vec<_> = path_from_predecessors(search.predecessors(), 0, 3).collect();
//! assert_eq!(path, vec![(1, 3), (0, 1)]);
//! ```

use crate::num::traits::{NumAssign, Signed};
use crate::Network;

use std::collections::VecDeque;

/// Breadth-first-search for augmenting paths.
///
/// The data structures are kept between searches.
pub struct AugmentingPath {
    pred: Vec<Option<usize>>,
    visited: Vec<bool>,
    queue: VecDeque<usize>,
}

impl AugmentingPath {
    /// Create search data structures for a network with `n` nodes.
    pub fn new(n: usize) -> Self {
        AugmentingPath {
            pred: vec![None; n],
            visited: vec![false; n],
            queue: VecDeque::with_capacity(n),
        }
    }

    /// Search a path from `src` to `snk` with positive residual capacity.
    ///
    /// Returns `true` if the sink has been reached. In this case the
    /// predecessor of each node on the path is available via
    /// [`AugmentingPath::pred`].
    pub fn find<F>(&mut self, net: &Network<F>, src: usize, snk: usize) -> bool
    where
        F: NumAssign + Signed + Ord + Copy,
    {
        let n = net.num_nodes();
        debug_assert_eq!(n, self.pred.len());

        self.pred.fill(None);
        self.visited.fill(false);
        self.queue.clear();

        self.visited[src] = true;
        self.queue.push_back(src);
        while let Some(u) = self.queue.pop_front() {
            for v in 0..n {
                if !self.visited[v] && net.residual(u, v) > F::zero() {
                    self.pred[v] = Some(u);
                    self.visited[v] = true;
                    self.queue.push_back(v);
                    if v == snk {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Return the predecessor of `v` in the last search.
    pub fn pred(&self, v: usize) -> Option<usize> {
        self.pred[v]
    }

    /// Return the predecessors of all nodes in the last search.
    pub fn predecessors(&self) -> &[Option<usize>] {
        &self.pred
    }

    /// Return whether `v` has been reached in the last search.
    pub fn is_visited(&self, v: usize) -> bool {
        self.visited[v]
    }
}

/// Compute a path from a predecessor array.
///
/// The iterator returns the arcs `(u, v)` of the path from `src` to `dst`
/// starting with the last one. The predecessor chain from `dst` must reach
/// `src`.
pub fn path_from_predecessors(pred: &[Option<usize>], src: usize, dst: usize) -> PathIter<'_> {
    PathIter { pred, src, cur: dst }
}

/// Iterator over the arcs of a path given by predecessors.
pub struct PathIter<'a> {
    pred: &'a [Option<usize>],
    src: usize,
    cur: usize,
}

impl<'a> Iterator for PathIter<'a> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<(usize, usize)> {
        if self.cur == self.src {
            return None;
        }
        let v = self.cur;
        let u = self.pred[v]?;
        self.cur = u;
        Some((u, v))
    }
}

/// Return the labels of the nodes on the path from `src` to `dst`.
///
/// Used for trace output.
pub(crate) fn path_labels(pred: &[Option<usize>], src: usize, dst: usize) -> String {
    let n = pred.len();
    let mut nodes: Vec<_> = path_from_predecessors(pred, src, dst).map(|(_, v)| v).collect();
    nodes.push(src);
    nodes
        .iter()
        .rev()
        .map(|&u| crate::table::node_label(u, n))
        .collect::<Vec<_>>()
        .join(" -> ")
}
