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

//! This module implements the max flow algorithm of Edmonds-Karp.
//!
//! The algorithm repeatedly searches a shortest augmenting path in the
//! residual network and pushes the bottleneck capacity along it until the
//! sink cannot be reached anymore.
//!
//! # Example
//!
//! ```
//! use rs_flow::Network;
//! use rs_flow::maxflow::edmondskarp;
//!
//! //      a
//! //   3 /|\ 2
//! //    s 1 t
//! //   2 \v/ 3
//! //      b
//! let mut net = Network::<i32>::new(4);
//! net.add_edge(0, 1, 3);
//! net.add_edge(0, 2, 2);
//! net.add_edge(1, 3, 2);
//! net.add_edge(2, 3, 3);
//! net.add_edge(1, 2, 1);
//!
//! let value = edmondskarp(&mut net);
//! assert_eq!(value, 5);
//! assert_eq!(net.flow(1, 2), 1);
//! assert_eq!(net.flow(2, 1), -1);
//! assert!(net.is_feasible());
//!
//! assert_eq!(net.mincut(), vec![0]);
//! ```

use crate::num::traits::{NumAssign, Signed};
use crate::search::{path_from_predecessors, path_labels, AugmentingPath};
use crate::table::Table;
use crate::Network;

use log::{debug, log_enabled, trace, Level};
use std::cmp::min;
use std::fmt::Display;

/// Max-flow algorithm of Edmonds and Karp.
pub struct EdmondsKarp<'a, F> {
    net: &'a mut Network<F>,
    search: AugmentingPath,
    value: F,
    niter: usize,
}

impl<'a, F> EdmondsKarp<'a, F>
where
    F: NumAssign + Signed + Ord + Copy + Display,
{
    /// Create a new Edmonds-Karp algorithm instance for a network.
    pub fn new(net: &'a mut Network<F>) -> Self {
        let n = net.num_nodes();
        EdmondsKarp {
            net,
            search: AugmentingPath::new(n),
            value: F::zero(),
            niter: 0,
        }
    }

    /// Return the underlying network.
    pub fn as_network(&self) -> &Network<F> {
        self.net
    }

    /// Return the value of the latest computed maximum flow.
    pub fn value(&self) -> F {
        self.value
    }

    /// Return the number of augmentations of the latest run.
    pub fn num_iterations(&self) -> usize {
        self.niter
    }

    /// Compute a maximum flow from the source to the sink.
    ///
    /// All flow on the network is removed first.
    pub fn solve(&mut self) {
        let src = self.net.source();
        let snk = self.net.sink();
        assert_ne!(src, snk, "Source and sink node must not be equal");

        self.net.reset();
        self.value = F::zero();
        self.niter = 0;

        while self.search.find(self.net, src, snk) {
            self.niter += 1;
            let pred = self.search.predecessors();

            // compute augmentation value
            let df = path_from_predecessors(pred, src, snk)
                .map(|(u, v)| self.net.residual(u, v))
                .fold(None, |df: Option<F>, r| Some(df.map_or(r, |df| min(df, r))))
                .unwrap_or_else(F::zero);

            debug_assert!(df > F::zero());

            debug!(
                "Iteration {}: augmenting path [{}] with flow {}",
                self.niter,
                path_labels(pred, src, snk),
                df
            );

            // now augment the flow
            for (u, v) in path_from_predecessors(pred, src, snk) {
                self.net.push(u, v, df);
            }

            self.value += df;

            if log_enabled!(Level::Trace) {
                let net = &*self.net;
                trace!(
                    "Residual network:\n{}",
                    Table::new(net.num_nodes(), |u, v| net.residual(u, v))
                );
            }
        }
    }

    /// Return the minimal cut associated with the last maximum flow.
    pub fn mincut(&self) -> Vec<usize> {
        self.net.mincut()
    }
}

/// Solve the maxflow problem using the algorithm of Edmonds-Karp.
///
/// The function computes a maximum flow from the source to the sink of `net`
/// and returns its value. The flow remains on the network.
pub fn edmondskarp<F>(net: &mut Network<F>) -> F
where
    F: NumAssign + Signed + Ord + Copy + Display,
{
    let mut maxflow = EdmondsKarp::new(net);
    maxflow.solve();
    maxflow.value()
}

#[cfg(test)]
mod tests {
    use super::{edmondskarp, EdmondsKarp};
    use crate::Network;

    #[test]
    fn test_edmondskarp() {
        let mut net = Network::from_capacities(&[
            [0, 16, 13, 0, 0, 0],
            [0, 0, 10, 12, 0, 0],
            [0, 4, 0, 0, 14, 0],
            [0, 0, 9, 0, 0, 20],
            [0, 0, 0, 7, 0, 4],
            [0, 0, 0, 0, 0, 0],
        ])
        .unwrap();

        assert_eq!(edmondskarp(&mut net), 23);
        assert!(net.is_feasible());
        assert_eq!(net.value(), 23);

        let cut = net.mincut();
        assert_eq!(net.cut_capacity(&cut), 23);
    }

    #[test]
    fn test_backward_flow() {
        // the second path must cancel the flow on a -> c
        let mut net = Network::from_capacities(&[
            [0, 1, 1, 0, 0, 0],
            [0, 0, 0, 1, 1, 0],
            [0, 0, 0, 1, 0, 0],
            [0, 0, 0, 0, 0, 1],
            [0, 0, 0, 0, 0, 1],
            [0, 0, 0, 0, 0, 0],
        ])
        .unwrap();
        let mut ek = EdmondsKarp::new(&mut net);
        ek.solve();
        assert_eq!(ek.value(), 2);
        assert_eq!(ek.num_iterations(), 2);
        assert!(ek.as_network().is_feasible());
        assert_eq!(ek.as_network().flow(1, 3), 0);
        assert_eq!(ek.as_network().flow(3, 1), 0);
    }

    #[test]
    fn test_no_path() {
        let mut net = Network::from_capacities(&[[0, 10, 0, 0], [0, 0, 0, 0], [0, 0, 0, 10], [0, 0, 0, 0]]).unwrap();
        assert_eq!(edmondskarp(&mut net), 0);
        assert_eq!(net.mincut(), vec![0, 1]);
    }

    #[test]
    fn test_rerun() {
        let mut net = Network::from_capacities(&[
            [0, 10, 10, 0, 0],
            [0, 0, 4, 8, 0],
            [0, 0, 0, 9, 0],
            [0, 0, 0, 0, 10],
            [0, 0, 0, 0, 0],
        ])
        .unwrap();
        assert_eq!(edmondskarp(&mut net), 10);
        let first = net.clone();
        assert_eq!(edmondskarp(&mut net), 10);
        for u in 0..5 {
            for v in 0..5 {
                assert_eq!(first.edge(u, v), net.edge(u, v));
            }
        }
    }

    #[test]
    #[should_panic]
    fn test_single_node() {
        let mut net = Network::<i32>::new(1);
        edmondskarp(&mut net);
    }
}
