// Copyright (c) 2016-2021 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Some common network classes.
//!
//! All networks have the source `0` and the sink `n - 1`.

use crate::num::traits::{NumAssign, Signed};
use crate::Network;

use rand::seq::SliceRandom;
use rand::Rng;

/// Returns a path `0 -> 1 -> ... -> n-1` with capacity `cap` on each edge.
pub fn path<F>(n: usize, cap: F) -> Network<F>
where
    F: NumAssign + Signed + Ord + Copy,
{
    let mut net = Network::new(n);
    for u in 1..n {
        net.add_edge(u - 1, u, cap);
    }
    net
}

/// Returns the complete acyclic network on `n` nodes.
///
/// There is an edge `(u,v)` with capacity `cap` for all `u < v`.
pub fn complete<F>(n: usize, cap: F) -> Network<F>
where
    F: NumAssign + Signed + Ord + Copy,
{
    let mut net = Network::new(n);
    for u in 0..n {
        for v in u + 1..n {
            net.add_edge(u, v, cap);
        }
    }
    net
}

/// Returns a diamond with two source-sink paths.
///
/// The path `s -> a -> t` has cost `cheap` per edge and unit, the path `s ->
/// b -> t` has cost `costly`. All edges have capacity `cap`.
///
/// ```
/// use rs_flow::classes;
/// use rs_flow::mcf::min_cost_flow;
///
/// let mut net = classes::diamond(5, 1, 2);
/// assert_eq!(min_cost_flow(&mut net, 5), Ok(Some(10)));
/// assert_eq!(min_cost_flow(&mut net, 7), Ok(Some(18)));
/// assert_eq!(min_cost_flow(&mut net, 11), Ok(None));
/// ```
pub fn diamond<F>(cap: F, cheap: F, costly: F) -> Network<F>
where
    F: NumAssign + Signed + Ord + Copy,
{
    let mut net = Network::new(4);
    for &(u, v, c) in &[(0, 1, cheap), (1, 3, cheap), (0, 2, costly), (2, 3, costly)] {
        net.add_edge(u, v, cap);
        net.set_cost(u, v, c);
    }
    net
}

/// Returns a random network on `n` nodes.
///
/// `n^2 / 2` distinct edges `(u,v)` with `u != v` that do not leave the sink
/// get a capacity and a cost drawn uniformly from `1..=100`. For `n == 2`
/// there is only one candidate edge, which is then used. The network
/// has costs unless `n == 1`.
pub fn random<R>(rng: &mut R, n: usize) -> Network<i64>
where
    R: Rng + ?Sized,
{
    let mut cells = Vec::with_capacity(n * n);
    for u in 0..n.saturating_sub(1) {
        for v in (0..n).filter(|&v| v != u) {
            cells.push((u, v));
        }
    }

    let mut net = Network::new(n);
    for &(u, v) in cells.choose_multiple(rng, n * n / 2) {
        net.add_edge(u, v, rng.gen_range(1..=100));
        net.set_cost(u, v, rng.gen_range(1..=100));
    }
    net
}

#[cfg(test)]
mod tests {
    use super::{complete, diamond, path, random};
    use crate::maxflow::{edmondskarp, pushrelabel};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_path() {
        let mut net = path(5, 3);
        assert_eq!(net.num_nodes(), 5);
        assert_eq!((0..4).filter(|&u| net.capacity(u, u + 1) == 3).count(), 4);
        assert_eq!(edmondskarp(&mut net), 3);
    }

    #[test]
    fn test_complete() {
        let mut net = complete(5, 1);
        assert_eq!(net.capacity(3, 1), 0);
        assert_eq!(net.capacity(1, 3), 1);
        assert_eq!(pushrelabel(&mut net), 4);
    }

    #[test]
    fn test_diamond() {
        let net = diamond(4, 1, 3);
        assert!(net.has_costs());
        assert_eq!(net.cost(0, 2), 3);
        assert_eq!(net.cost(1, 2), 0);
    }

    #[test]
    fn test_random() {
        let mut rng = StdRng::seed_from_u64(42);
        for &n in &[4, 7, 10] {
            let net = random(&mut rng, n);
            assert!(net.has_costs());
            let mut nedges = 0;
            for u in 0..n {
                assert_eq!(net.capacity(u, u), 0);
                assert_eq!(net.capacity(n - 1, u), 0);
                for v in 0..n {
                    let c = net.capacity(u, v);
                    if c > 0 {
                        nedges += 1;
                        assert!(c <= 100);
                        assert!((1..=100).contains(&net.cost(u, v)));
                    } else {
                        assert_eq!(net.cost(u, v), 0);
                    }
                }
            }
            assert_eq!(nedges, n * n / 2);
        }
    }

    #[test]
    fn test_random_small() {
        let mut rng = StdRng::seed_from_u64(1);
        let net = random(&mut rng, 2);
        assert!(net.capacity(0, 1) > 0);
        assert!(net.has_costs());
        let net = random(&mut rng, 1);
        assert_eq!(net.num_nodes(), 1);
        assert!(!net.has_costs());
    }
}
