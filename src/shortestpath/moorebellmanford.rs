// Copyright (c) 2016-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

#![allow(clippy::type_complexity)]

use crate::error::{Error, Result};
use crate::num::traits::{NumAssign, Signed};
use crate::Network;

/// The shortest-path algorithm by Moore-Bellman-Ford on a dense digraph.
///
/// The digraph has the nodes `0..n`. The function `arc(u, v)` returns the
/// weight of arc `(u,v)` or `None` if there is no such arc. Loops are
/// ignored. Weights may be negative.
///
/// The function returns a triple. The first element is the vector of the
/// predecessor of each (reachable) node, the second element is the vector
/// of distances from `src` (`None` for unreachable nodes). The third element
/// is a node on a negative cycle if it exists, otherwise it is `None`.
///
/// # Example
///
/// ```
/// use rs_flow::shortestpath::moorebellmanford;
///
/// let mut weights = [[None; 7]; 7];
/// for &(u,v,w) in [(0,1,-8), (1,4,-3), (2,0,2), (2,1,1), (2,5,-3), (3,1,0), (3,2,5),
///                  (4,3,8), (5,3,-1), (6,3,4), (6,4,6), (6,5,3)].iter()
/// {
///     weights[u][v] = Some(w);
/// }
///
/// let (pred, dist, cycle) = moorebellmanford::dense(7, 6, |u, v| weights[u][v]);
/// assert_eq!(cycle, None);
/// assert_eq!(pred[6], None);
/// assert_eq!(dist[6], Some(0));
/// for &(u,p) in [(0,2), (1,0), (2,3), (4,1), (5,6)].iter() {
///     assert_eq!(pred[u], Some(p));
/// }
/// ```
pub fn dense<W, A>(n: usize, src: usize, arc: A) -> (Vec<Option<usize>>, Vec<Option<W>>, Option<usize>)
where
    W: NumAssign + Ord + Copy,
    A: Fn(usize, usize) -> Option<W>,
{
    let mut pred = vec![None; n];
    let mut dist = vec![None; n];

    dist[src] = Some(W::zero());

    for i in 0..n {
        let mut changed = false;
        for u in 0..n {
            // skip source nodes that have not been seen, yet
            let du = match dist[u] {
                Some(du) => du,
                None => continue,
            };

            for v in (0..n).filter(|&v| v != u) {
                let w = match arc(u, v) {
                    Some(w) => w,
                    None => continue,
                };

                let newdist = du + w;
                if dist[v].map_or(true, |dv| newdist < dv) {
                    dist[v] = Some(newdist);
                    pred[v] = Some(u);
                    changed = true;

                    if i + 1 == n {
                        // walk back into the cycle
                        let mut c = v;
                        for _ in 0..n {
                            if let Some(p) = pred[c] {
                                c = p;
                            }
                        }
                        return (pred, dist, Some(c));
                    }
                }
            }
        }
        if !changed {
            break;
        }
    }

    (pred, dist, None)
}

/// Shortest paths in the residual network of `net` w.r.t. the edge costs.
///
/// Only arcs with positive residual capacity are used, see
/// [`Network::residual_arc`] for their costs. Returns the predecessors and
/// distances from `src` or [`Error::NegativeCycle`] if the residual network
/// contains a negative cycle reachable from `src`.
pub fn residual<F>(net: &Network<F>, src: usize) -> Result<(Vec<Option<usize>>, Vec<Option<F>>)>
where
    F: NumAssign + Signed + Ord + Copy,
{
    let (pred, dist, cycle) = dense(net.num_nodes(), src, |u, v| net.residual_arc(u, v).map(|(_, c)| c));
    match cycle {
        Some(u) => Err(Error::NegativeCycle(u)),
        None => Ok((pred, dist)),
    }
}
