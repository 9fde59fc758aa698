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

//! Dense capacitated networks.
//!
//! A [`Network`] on `n` nodes stores one [`EdgeState`] for every ordered
//! pair of nodes. Node `0` is the source, node `n - 1` is the sink. The
//! capacities and costs are set once, the residual capacities and flows are
//! mutated by the flow algorithms through [`Network::push`].
//!
//! # Example
//!
//! ```
//! use rs_flow::Network;
//!
//! let mut net = Network::<i32>::new(3);
//! net.add_edge(0, 1, 4);
//! net.add_edge(1, 2, 3);
//!
//! net.push(0, 1, 3);
//! net.push(1, 2, 3);
//!
//! assert_eq!(net.value(), 3);
//! assert_eq!(net.flow(1, 0), -3);
//! assert_eq!(net.residual(0, 1), 1);
//! assert_eq!(net.residual(1, 0), 3);
//! assert!(net.is_feasible());
//! ```

use crate::error::{Error, Result};
use crate::num::traits::{NumAssign, Signed};

use std::collections::VecDeque;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// The state of an ordered node pair `(u, v)`.
///
/// An absent edge has capacity 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct EdgeState<F> {
    /// Maximal flow admissible from `u` to `v`.
    pub capacity: F,
    /// Per-unit cost (0 if the network has no costs).
    pub cost: F,
    /// Remaining capacity from `u` to `v`.
    pub residual: F,
    /// Net flow from `u` to `v`.
    pub flow: F,
}

/// A network with dense edge storage.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Network<F> {
    n: usize,
    /// Edge states in row major order.
    edges: Vec<EdgeState<F>>,
    /// Whether a cost matrix is attached.
    has_costs: bool,
}

impl<F> Network<F>
where
    F: NumAssign + Signed + Ord + Copy,
{
    /// Create a network with `n` nodes and no edges.
    pub fn new(n: usize) -> Self {
        assert!(n > 0, "A network must have at least one node");
        Network {
            n,
            edges: vec![
                EdgeState {
                    capacity: F::zero(),
                    cost: F::zero(),
                    residual: F::zero(),
                    flow: F::zero(),
                };
                n * n
            ],
            has_costs: false,
        }
    }

    /// Create a network from a square capacity matrix.
    ///
    /// The number of nodes is the number of rows. The residual capacities
    /// are initialized with the capacities, all flows are zero.
    pub fn from_capacities<R>(rows: &[R]) -> Result<Self>
    where
        R: AsRef<[F]>,
    {
        if rows.is_empty() {
            return Err(Error::Dimension {
                what: "capacity",
                expected: 1,
                found: 0,
            });
        }
        check_square::<F, R>(rows, rows.len(), "capacity")?;
        let mut net = Network::new(rows.len());
        for (u, row) in rows.iter().enumerate() {
            for (v, &cap) in row.as_ref().iter().enumerate() {
                if cap < F::zero() {
                    return Err(Error::NegativeCapacity { u, v });
                }
                net.add_edge(u, v, cap);
            }
        }
        Ok(net)
    }

    /// Attach a cost matrix.
    ///
    /// The network has costs afterwards, even if all entries are zero.
    pub fn set_costs<R>(&mut self, rows: &[R]) -> Result<()>
    where
        R: AsRef<[F]>,
    {
        check_square::<F, R>(rows, self.n, "cost")?;
        for (u, row) in rows.iter().enumerate() {
            for (v, &c) in row.as_ref().iter().enumerate() {
                self.edges[u * self.n + v].cost = c;
            }
        }
        self.has_costs = true;
        Ok(())
    }

    /// Builder style variant of [`Network::set_costs`].
    pub fn with_costs<R>(mut self, rows: &[R]) -> Result<Self>
    where
        R: AsRef<[F]>,
    {
        self.set_costs(rows)?;
        Ok(self)
    }

    /// Set the cost of a single edge.
    ///
    /// This attaches a cost matrix to the network if there was none, all
    /// other costs are then 0.
    pub fn set_cost(&mut self, u: usize, v: usize, cost: F) {
        let i = self.index(u, v);
        self.edges[i].cost = cost;
        self.has_costs = true;
    }

    /// Remove the cost matrix.
    pub fn clear_costs(&mut self) {
        for e in &mut self.edges {
            e.cost = F::zero();
        }
        self.has_costs = false;
    }

    /// Set the capacity of edge `(u,v)`.
    ///
    /// The residual capacity of `(u,v)` is set to the same value. Any
    /// previous capacity is overwritten.
    pub fn add_edge(&mut self, u: usize, v: usize, capacity: F) {
        assert!(capacity >= F::zero(), "Capacity of edge ({},{}) must not be negative", u, v);
        let i = self.index(u, v);
        self.edges[i].capacity = capacity;
        self.edges[i].residual = capacity;
    }

    /// Return whether a cost matrix is attached.
    pub fn has_costs(&self) -> bool {
        self.has_costs
    }

    /// Return the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.n
    }

    /// Return the source node.
    pub fn source(&self) -> usize {
        0
    }

    /// Return the sink node.
    pub fn sink(&self) -> usize {
        self.n - 1
    }

    /// Return the state of edge `(u,v)`.
    pub fn edge(&self, u: usize, v: usize) -> &EdgeState<F> {
        &self.edges[self.index(u, v)]
    }

    pub fn capacity(&self, u: usize, v: usize) -> F {
        self.edge(u, v).capacity
    }

    pub fn cost(&self, u: usize, v: usize) -> F {
        self.edge(u, v).cost
    }

    pub fn residual(&self, u: usize, v: usize) -> F {
        self.edge(u, v).residual
    }

    pub fn flow(&self, u: usize, v: usize) -> F {
        self.edge(u, v).flow
    }

    /// Send `df` units of flow from `u` to `v`.
    ///
    /// The residual capacity of `(u,v)` decreases by `df` and the one of
    /// `(v,u)` increases by `df`. The flow stays antisymmetric.
    pub fn push(&mut self, u: usize, v: usize, df: F) {
        let uv = self.index(u, v);
        let vu = self.index(v, u);
        self.edges[uv].residual -= df;
        self.edges[vu].residual += df;
        self.edges[uv].flow += df;
        self.edges[vu].flow -= df;
    }

    /// Remove all flow.
    ///
    /// The residual capacities are recomputed from the capacities.
    pub fn reset(&mut self) {
        for e in &mut self.edges {
            e.residual = e.capacity;
            e.flow = F::zero();
        }
    }

    /// Return the net amount of flow leaving the source.
    pub fn value(&self) -> F {
        let s = self.source();
        (0..self.n).fold(F::zero(), |acc, v| acc + self.flow(s, v))
    }

    /// Return the net amount of flow entering node `u`.
    pub fn excess(&self, u: usize) -> F {
        (0..self.n).fold(F::zero(), |acc, w| acc + self.flow(w, u))
    }

    /// Return the residual capacity and cost of arc `(u,v)`.
    ///
    /// If there is flow on `(v,u)` the arc cancels that flow: its capacity is
    /// the flow on `(v,u)` and its cost is `-cost(v,u)`. Otherwise the arc is
    /// a forward arc with cost `cost(u,v)`. Arcs without residual capacity
    /// return `None`.
    pub fn residual_arc(&self, u: usize, v: usize) -> Option<(F, F)> {
        let back = self.flow(v, u);
        if back > F::zero() {
            Some((back, -self.cost(v, u)))
        } else {
            let r = self.residual(u, v);
            if r > F::zero() {
                Some((r, self.cost(u, v)))
            } else {
                None
            }
        }
    }

    /// Return the nodes reachable from the source in the residual network.
    ///
    /// After a maximum flow computation these nodes form a minimal cut.
    pub fn mincut(&self) -> Vec<usize> {
        let mut seen = vec![false; self.n];
        let mut queue = VecDeque::with_capacity(self.n);
        seen[self.source()] = true;
        queue.push_back(self.source());
        while let Some(u) = queue.pop_front() {
            for v in 0..self.n {
                if !seen[v] && self.residual(u, v) > F::zero() {
                    seen[v] = true;
                    queue.push_back(v);
                }
            }
        }
        (0..self.n).filter(|&u| seen[u]).collect()
    }

    /// Return the total capacity of the edges leaving the node set `cut`.
    pub fn cut_capacity(&self, cut: &[usize]) -> F {
        let mut inside = vec![false; self.n];
        for &u in cut {
            inside[u] = true;
        }
        let mut cap = F::zero();
        for u in (0..self.n).filter(|&u| inside[u]) {
            for v in (0..self.n).filter(|&v| !inside[v]) {
                cap += self.capacity(u, v);
            }
        }
        cap
    }

    /// Return whether the current flow is a feasible flow.
    ///
    /// This checks antisymmetry, capacity bounds, the relation between
    /// residual capacities and flows and flow conservation at all nodes
    /// except source and sink.
    pub fn is_feasible(&self) -> bool {
        for u in 0..self.n {
            for v in 0..self.n {
                let e = self.edge(u, v);
                if e.flow != -self.flow(v, u) {
                    return false;
                }
                if e.flow > e.capacity || e.residual < F::zero() {
                    return false;
                }
                if e.residual != e.capacity - e.flow {
                    return false;
                }
            }
        }
        (0..self.n)
            .filter(|&u| u != self.source() && u != self.sink())
            .all(|u| self.excess(u).is_zero())
    }

    fn index(&self, u: usize, v: usize) -> usize {
        assert!(
            u < self.n && v < self.n,
            "Edge ({},{}) out of range for network with {} nodes",
            u,
            v,
            self.n
        );
        u * self.n + v
    }
}

fn check_square<F, R>(rows: &[R], n: usize, what: &'static str) -> Result<()>
where
    R: AsRef<[F]>,
{
    if rows.len() != n {
        return Err(Error::Dimension {
            what,
            expected: n,
            found: rows.len(),
        });
    }
    for (u, row) in rows.iter().enumerate() {
        let len = row.as_ref().len();
        if len != n {
            return Err(Error::RowLength { what, row: u, expected: n, found: len });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Network;
    use crate::error::Error;

    #[test]
    fn test_add_edge_overwrites() {
        let mut net = Network::<i32>::new(3);
        net.add_edge(0, 1, 5);
        net.add_edge(0, 1, 2);
        assert_eq!(net.capacity(0, 1), 2);
        assert_eq!(net.residual(0, 1), 2);
        assert_eq!(net.flow(0, 1), 0);
    }

    #[test]
    #[should_panic]
    fn test_add_edge_out_of_range() {
        let mut net = Network::<i32>::new(3);
        net.add_edge(0, 3, 1);
    }

    #[test]
    fn test_push_keeps_residual_relation() {
        let mut net = Network::<i32>::new(3);
        net.add_edge(0, 1, 4);
        net.add_edge(1, 0, 2);
        net.push(0, 1, 3);
        assert_eq!(net.flow(0, 1), 3);
        assert_eq!(net.flow(1, 0), -3);
        assert_eq!(net.residual(0, 1), 1);
        assert_eq!(net.residual(1, 0), 5);
        assert_eq!(
            net.residual(0, 1) + net.residual(1, 0),
            net.capacity(0, 1) + net.capacity(1, 0)
        );
    }

    #[test]
    fn test_reset() {
        let mut net = Network::from_capacities(&[[0, 3, 0], [0, 0, 3], [0, 0, 0]]).unwrap();
        net.push(0, 1, 2);
        net.push(1, 2, 2);
        assert_eq!(net.value(), 2);
        net.reset();
        assert_eq!(net.value(), 0);
        assert_eq!(net.residual(0, 1), 3);
        assert_eq!(net.residual(1, 0), 0);
    }

    #[test]
    fn test_costs_presence() {
        let mut net = Network::from_capacities(&[vec![0, 1], vec![0, 0]]).unwrap();
        assert!(!net.has_costs());
        net.set_costs(&[vec![0, 0], vec![0, 0]]).unwrap();
        assert!(net.has_costs());
        net.clear_costs();
        assert!(!net.has_costs());
        net.set_cost(0, 1, 7);
        assert!(net.has_costs());
        assert_eq!(net.cost(0, 1), 7);
    }

    #[test]
    fn test_bad_matrices() {
        assert_eq!(
            Network::<i32>::from_capacities(&[vec![0, 1], vec![0]]).unwrap_err(),
            Error::RowLength {
                what: "capacity",
                row: 1,
                expected: 2,
                found: 1
            }
        );
        assert_eq!(
            Network::<i32>::from_capacities(&[vec![0, -1], vec![0, 0]]).unwrap_err(),
            Error::NegativeCapacity { u: 0, v: 1 }
        );
        let net = Network::<i32>::new(2);
        assert!(matches!(
            net.with_costs(&[vec![0, 1, 2]]),
            Err(Error::Dimension { what: "cost", .. })
        ));
    }

    #[test]
    fn test_residual_arc() {
        let mut net = Network::<i32>::new(3);
        net.add_edge(0, 1, 4);
        net.set_cost(0, 1, 5);
        assert_eq!(net.residual_arc(0, 1), Some((4, 5)));
        assert_eq!(net.residual_arc(1, 0), None);
        net.push(0, 1, 3);
        assert_eq!(net.residual_arc(0, 1), Some((1, 5)));
        assert_eq!(net.residual_arc(1, 0), Some((3, -5)));
    }

    #[test]
    fn test_mincut() {
        let mut net = Network::from_capacities(&[[0, 2, 0], [0, 0, 1], [0, 0, 0]]).unwrap();
        net.push(0, 1, 1);
        net.push(1, 2, 1);
        let cut = net.mincut();
        assert_eq!(cut, vec![0, 1]);
        assert_eq!(net.cut_capacity(&cut), 1);
        assert!(net.is_feasible());
    }

    #[test]
    fn test_infeasible_flow() {
        let mut net = Network::from_capacities(&[[0, 2, 0], [0, 0, 1], [0, 0, 0]]).unwrap();
        net.push(0, 1, 2);
        assert!(!net.is_feasible());
    }
}
