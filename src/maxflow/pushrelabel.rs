// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! This module implements a push relabel algorithm for solving max
//! flow problems.
//!
//! This is the plain variant without heuristics: the inner nodes with
//! positive excess are discharged in round-robin order until no node has
//! positive excess anymore.
//!
//! # Example
//!
//! ```
//! use rs_flow::Network;
//! use rs_flow::maxflow::{edmondskarp, pushrelabel};
//!
//! let mut net = Network::from_capacities(&[
//!     [0, 15, 0, 10, 0, 0],
//!     [0, 0, 6, 7, 0, 0],
//!     [0, 0, 0, 0, 2, 5],
//!     [0, 0, 11, 0, 4, 0],
//!     [0, 0, 4, 0, 0, 20],
//!     [0, 0, 0, 0, 0, 0],
//! ]).unwrap();
//! let mut copy = net.clone();
//!
//! assert_eq!(pushrelabel(&mut net), 11);
//! assert_eq!(edmondskarp(&mut copy), 11);
//! assert!(net.is_feasible());
//!
//! let mincut = net.mincut();
//! assert_eq!(net.cut_capacity(&mincut), 11);
//! ```

use crate::num::traits::{NumAssign, Signed};
use crate::table::{node_label, Table};
use crate::Network;

use log::{debug, log_enabled, trace, Level};
use std::cmp::min;
use std::fmt::Display;

/// The push-relabel algorithm.
///
/// This struct contains all algorithmic working data.
pub struct PushRelabel<'a, F> {
    /// The network the flow problem is solved on.
    net: &'a mut Network<F>,
    /// The current height of each node.
    height: Vec<usize>,
    /// The excess of flow of each node.
    excess: Vec<F>,
    /// The next neighbor to be considered by a discharge.
    seen: Vec<usize>,
    /// The flow value.
    value: F,
    /// The number of push operations performed during the algorithm.
    pub cnt_push: usize,
    /// The number of relabel operations performed during the algorithm.
    pub cnt_relabel: usize,
}

impl<'a, F> PushRelabel<'a, F>
where
    F: NumAssign + Signed + Ord + Copy + Display,
{
    /// Return a new push-relabel algorithm data structure for the network `net`.
    pub fn new(net: &'a mut Network<F>) -> Self {
        let n = net.num_nodes();
        PushRelabel {
            net,
            height: vec![0; n],
            excess: vec![F::zero(); n],
            seen: vec![0; n],
            value: F::zero(),
            cnt_push: 0,
            cnt_relabel: 0,
        }
    }

    /// Return a reference to the underlying network.
    pub fn as_network(&self) -> &Network<F> {
        self.net
    }

    /// Return the flow value.
    ///
    /// The function returns 0 if the flow has not been computed, yet.
    pub fn value(&self) -> F {
        self.value
    }

    /// Return the current height of node `u`.
    pub fn height(&self, u: usize) -> usize {
        self.height[u]
    }

    /// Return the current excess of node `u`.
    pub fn excess(&self, u: usize) -> F {
        self.excess[u]
    }

    /// Run the push-relabel algorithm from the source to the sink.
    ///
    /// All flow on the network is removed first.
    pub fn solve(&mut self) {
        let n = self.net.num_nodes();
        let src = self.net.source();
        let snk = self.net.sink();
        assert_ne!(src, snk, "Source and sink node must not be equal");

        self.cnt_push = 0;
        self.cnt_relabel = 0;
        self.init_preflow(src);

        // source and sink are never discharged
        let inner: Vec<usize> = (0..n).filter(|&u| u != src && u != snk).collect();
        while inner.iter().any(|&u| self.excess[u] > F::zero()) {
            for &u in &inner {
                if self.excess[u] > F::zero() {
                    self.discharge(u);
                }
            }
        }

        self.value = (0..n).fold(F::zero(), |acc, v| acc + self.net.flow(v, snk));
        debug!(
            "Push-relabel finished with {} pushes and {} relabels",
            self.cnt_push, self.cnt_relabel
        );
    }

    /// Return the minimal cut associated with the last maximum flow.
    pub fn mincut(&self) -> Vec<usize> {
        self.net.mincut()
    }

    /// Initialize preflow algorithm.
    ///
    /// All edges leaving the source node are saturated, the source's
    /// height is set to `n`, all other heights are set to `0`.
    fn init_preflow(&mut self, src: usize) {
        let n = self.net.num_nodes();
        self.net.reset();
        self.height.fill(0);
        self.excess.fill(F::zero());
        self.seen.fill(0);

        // send maximal flow out of source
        for v in (0..n).filter(|&v| v != src) {
            let ub = self.net.capacity(src, v);
            if ub > F::zero() {
                self.net.push(src, v, ub);
                self.excess[v] += ub;
                self.excess[src] -= ub;
            }
        }

        self.height[src] = n;
    }

    /// Push flow from `u` to `v`.
    ///
    /// The push is admissible if `u` is higher than `v` and the arc `(u,v)`
    /// has residual capacity. The amount of flow is bounded by the excess
    /// of `u`.
    fn push(&mut self, u: usize, v: usize) {
        let df = min(self.excess[u], self.net.residual(u, v));

        debug_assert!(self.height[u] > self.height[v]);
        debug_assert!(df > F::zero());

        self.net.push(u, v, df);
        self.excess[u] -= df;
        self.excess[v] += df;
        self.cnt_push += 1;

        trace!(
            "push {} from {} to {}",
            df,
            node_label(u, self.height.len()),
            node_label(v, self.height.len())
        );
    }

    /// The relabel operation.
    ///
    /// Lifts `u` to one above its lowest neighbor in the residual network.
    /// This is only valid if no push from `u` is possible.
    fn relabel(&mut self, u: usize) {
        let n = self.net.num_nodes();
        debug_assert!(self.excess[u] > F::zero());
        debug_assert!((0..n).all(|v| self.net.residual(u, v).is_zero() || self.height[v] >= self.height[u]));

        // A node with positive excess always has a residual arc back towards
        // the node the excess came from.
        let h_neighbor = (0..n)
            .filter(|&v| self.net.residual(u, v) > F::zero())
            .map(|v| self.height[v])
            .min();
        debug_assert!(h_neighbor.is_some());

        if let Some(h) = h_neighbor {
            self.height[u] = h + 1;
        }
        self.cnt_relabel += 1;

        trace!("relabel {} to height {}", node_label(u, n), self.height[u]);
        if log_enabled!(Level::Trace) {
            let net = &*self.net;
            trace!("Flow:\n{}", Table::new(n, |u, v| net.flow(u, v)));
        }
    }

    /// Discharges node `u`.
    ///
    /// This function does a sequence of push and relabel operations for an
    /// active node `u` until its excess reaches 0. The neighbors are
    /// scanned starting at the saved position `seen[u]`.
    fn discharge(&mut self, u: usize) {
        let n = self.net.num_nodes();
        while self.excess[u] > F::zero() {
            if self.seen[u] < n {
                let v = self.seen[u];
                if self.net.residual(u, v) > F::zero() && self.height[u] > self.height[v] {
                    self.push(u, v);
                } else {
                    self.seen[u] += 1;
                }
            } else {
                self.relabel(u);
                self.seen[u] = 0;
            }
        }
    }
}

/// Solve the maxflow problem using the push-relabel algorithm.
///
/// The function computes a maximum flow from the source to the sink of `net`
/// and returns its value. The flow remains on the network.
pub fn pushrelabel<F>(net: &mut Network<F>) -> F
where
    F: NumAssign + Signed + Ord + Copy + Display,
{
    let mut maxflow = PushRelabel::new(net);
    maxflow.solve();
    maxflow.value()
}
