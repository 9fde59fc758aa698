/*
 * Copyright (c) 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Successive shortest augmenting paths.
//!
//! Flow is sent along cheapest source-sink paths of the residual network
//! (computed by Moore-Bellman-Ford, because cancelling flow has negative
//! cost) until the target amount of flow has been sent.
//!
//! # Example
//!
//! ```
//! use rs_flow::Network;
//! use rs_flow::mcf::min_cost_flow;
//!
//! // s -> a -> t costs 2 per unit, s -> b -> t costs 6 per unit
//! let mut net = Network::from_capacities(&[
//!     [0, 4, 4, 0],
//!     [0, 0, 0, 4],
//!     [0, 0, 0, 4],
//!     [0, 0, 0, 0],
//! ]).unwrap().with_costs(&[
//!     [0, 1, 3, 0],
//!     [0, 0, 0, 1],
//!     [0, 0, 0, 3],
//!     [0, 0, 0, 0],
//! ]).unwrap();
//!
//! assert_eq!(min_cost_flow(&mut net, 6), Ok(Some(20)));
//! assert_eq!(net.flow(1, 3), 4);
//! assert_eq!(net.flow(2, 3), 2);
//!
//! // the maximum flow is 8
//! assert_eq!(min_cost_flow(&mut net, 9), Ok(None));
//! ```

use super::SolutionState;
use crate::error::{Error, Result};
use crate::num::traits::{NumAssign, Signed};
use crate::search::{path_from_predecessors, path_labels};
use crate::shortestpath::moorebellmanford;
use crate::table::Table;
use crate::Network;

use log::{debug, log_enabled, trace, Level};
use std::cmp::min;
use std::fmt::Display;

/// Min-cost-flow by successive shortest paths.
pub struct SuccessiveShortestPath<'a, F> {
    net: &'a mut Network<F>,
    /// Total cost of the current flow.
    value: F,
    /// Amount of flow sent so far.
    flow_value: F,
    niter: usize,
    solution_state: SolutionState,
}

impl<'a, F> SuccessiveShortestPath<'a, F>
where
    F: NumAssign + Signed + Ord + Copy + Display,
{
    pub fn new(net: &'a mut Network<F>) -> Self {
        SuccessiveShortestPath {
            net,
            value: F::zero(),
            flow_value: F::zero(),
            niter: 0,
            solution_state: SolutionState::Unknown,
        }
    }

    pub fn as_network(&self) -> &Network<F> {
        self.net
    }

    /// Return the total cost of the flow.
    ///
    /// This is only meaningful if the last call to `solve` returned
    /// `SolutionState::Optimal`.
    pub fn value(&self) -> F {
        self.value
    }

    /// Return the amount of flow sent by the last call to `solve`.
    pub fn flow_value(&self) -> F {
        self.flow_value
    }

    pub fn num_iterations(&self) -> usize {
        self.niter
    }

    pub fn solution_state(&self) -> SolutionState {
        self.solution_state
    }

    /// Send `target` units of flow from the source to the sink at minimal
    /// cost.
    ///
    /// All flow on the network is removed first. Returns
    /// `SolutionState::Infeasible` if the sink cannot be reached before the
    /// target has been sent. A negative cycle in the residual network is an
    /// error.
    pub fn solve(&mut self, target: F) -> Result<SolutionState> {
        assert!(target >= F::zero(), "Target flow must not be negative");
        let src = self.net.source();
        let snk = self.net.sink();
        assert_ne!(src, snk, "Source and sink node must not be equal");

        self.solution_state = SolutionState::Unknown;
        if !self.net.has_costs() {
            return Err(Error::MissingCosts);
        }

        self.net.reset();
        self.value = F::zero();
        self.flow_value = F::zero();
        self.niter = 0;

        while self.flow_value < target {
            let (pred, dist) = moorebellmanford::residual(self.net, src)?;

            if dist[snk].is_none() {
                debug!(
                    "Sink unreachable after sending {} of {} units of flow",
                    self.flow_value, target
                );
                self.solution_state = SolutionState::Infeasible;
                return Ok(self.solution_state);
            }

            let net = &*self.net;
            let arcs: Vec<_> = path_from_predecessors(&pred, src, snk)
                .filter_map(|(u, v)| net.residual_arc(u, v).map(|(cap, cost)| (u, v, cap, cost)))
                .collect();

            // compute augmentation value, but do not exceed the target
            let df = arcs.iter().fold(target - self.flow_value, |df, &(_, _, cap, _)| min(df, cap));
            debug_assert!(df > F::zero());

            for &(u, v, _, cost) in &arcs {
                self.value += df * cost;
                self.net.push(u, v, df);
            }

            self.flow_value += df;
            self.niter += 1;

            debug!(
                "Iteration {}: path [{}] added flow {}, total flow {}, total cost {}",
                self.niter,
                path_labels(&pred, src, snk),
                df,
                self.flow_value,
                self.value
            );
            if log_enabled!(Level::Trace) {
                let net = &*self.net;
                trace!("Flow:\n{}", Table::new(net.num_nodes(), |u, v| net.flow(u, v)));
            }
        }

        self.solution_state = SolutionState::Optimal;
        Ok(self.solution_state)
    }
}

/// Solve a min-cost-flow problem by successive shortest paths.
///
/// Sends `target` units of flow from the source to the sink of `net` and
/// returns the total cost, or `None` if the target cannot be reached. The
/// flow remains on the network.
pub fn min_cost_flow<F>(net: &mut Network<F>, target: F) -> Result<Option<F>>
where
    F: NumAssign + Signed + Ord + Copy + Display,
{
    let mut ssp = SuccessiveShortestPath::new(net);
    match ssp.solve(target)? {
        SolutionState::Optimal => Ok(Some(ssp.value())),
        _ => Ok(None),
    }
}
