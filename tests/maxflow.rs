/*
 * Copyright (c) 2020, 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

use rs_flow::classes;
use rs_flow::matfile;
use rs_flow::maxflow::{edmondskarp, pushrelabel, EdmondsKarp, PushRelabel};
use rs_flow::Network;

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;

const TESTS: &[(&str, i64)] = &[
    ("tests/flow/network1.txt", 5),
    ("tests/flow/network2.txt", 23),
    ("tests/flow/network3.txt", 11),
];

fn check_flow(net: &Network<i64>, value: i64) {
    let n = net.num_nodes();
    for u in 0..n {
        for v in 0..n {
            assert_eq!(net.flow(u, v), -net.flow(v, u));
            assert!(net.flow(u, v) <= net.capacity(u, v));
            assert_eq!(net.residual(u, v), net.capacity(u, v) - net.flow(u, v));
        }
    }
    for u in 1..n - 1 {
        assert_eq!(net.excess(u), 0);
    }
    assert_eq!(net.value(), value);
    assert_eq!(net.excess(n - 1), value);
    assert_eq!(net.cut_capacity(&net.mincut()), value);
}

#[test]
fn test_edmondskarp() -> Result<(), Box<dyn Error>> {
    for &(file, expected) in TESTS {
        let mut net = matfile::read_from_file::<_, i64>(file)?;
        assert_eq!(edmondskarp(&mut net), expected);
        check_flow(&net, expected);
    }

    Ok(())
}

#[test]
fn test_pushrelabel() -> Result<(), Box<dyn Error>> {
    for &(file, expected) in TESTS {
        let mut net = matfile::read_from_file::<_, i64>(file)?;
        let mut pr = PushRelabel::new(&mut net);
        pr.solve();
        assert_eq!(pr.value(), expected);
        assert!(pr.cnt_push > 0);
        check_flow(pr.as_network(), expected);
    }

    Ok(())
}

#[test]
fn test_random() {
    let mut rng = StdRng::seed_from_u64(1_234_567);
    for n in 2..15 {
        for _ in 0..5 {
            let mut net = classes::random(&mut rng, n);
            let mut copy = net.clone();

            let value = edmondskarp(&mut net);
            check_flow(&net, value);
            assert_eq!(pushrelabel(&mut copy), value);
            check_flow(&copy, value);
        }
    }
}

#[test]
fn test_rerun() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut net = classes::random(&mut rng, 8);

    let mut ek = EdmondsKarp::new(&mut net);
    ek.solve();
    let value = ek.value();
    let niter = ek.num_iterations();
    let first = ek.as_network().clone();

    ek.solve();
    assert_eq!(ek.value(), value);
    assert_eq!(ek.num_iterations(), niter);
    for u in 0..8 {
        for v in 0..8 {
            assert_eq!(ek.as_network().edge(u, v), first.edge(u, v));
        }
    }

    let mut pr = PushRelabel::new(&mut net);
    pr.solve();
    let first = pr.as_network().clone();
    pr.solve();
    assert_eq!(pr.value(), value);
    for u in 0..8 {
        for v in 0..8 {
            assert_eq!(pr.as_network().edge(u, v), first.edge(u, v));
        }
    }
}

#[test]
fn test_classes() {
    let mut net = classes::path(6, 9);
    assert_eq!(edmondskarp(&mut net), 9);
    assert_eq!(pushrelabel(&mut net), 9);

    let mut net = classes::complete(7, 2);
    assert_eq!(edmondskarp(&mut net), 12);
    assert_eq!(pushrelabel(&mut net), 12);
}
