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

use time::OffsetDateTime;

use rustop::opts;

use rand::rngs::StdRng;
use rand::SeedableRng;

use rs_flow::classes;
use rs_flow::maxflow::{edmondskarp, pushrelabel};
use rs_flow::mcf::min_cost_flow;

use std::error::Error;

/// Return the running time of `f` in seconds.
fn measure<T, R: FnOnce() -> T>(f: R) -> f64 {
    let tstart = OffsetDateTime::now_utc();
    f();
    let tend = OffsetDateTime::now_utc();
    (tend - tstart).as_seconds_f64()
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let (args, _) = opts! {
        synopsis "Measure the worst running time of the flow algorithms on random networks.";
        opt num:usize=100, desc:"Number of random networks per size.";
        opt seed:u64=0, desc:"Seed of the random number generator.";
        param sizes:Vec<usize>, desc:"Network sizes (default: 10 20 40 100).";
    }
    .parse_or_exit();

    let sizes = if args.sizes.is_empty() {
        vec![10, 20, 40, 100]
    } else {
        args.sizes
    };
    let mut rng = StdRng::seed_from_u64(args.seed);

    println!("{:>6} {:>12} {:>12} {:>12}", "n", "ek", "pr", "mcf");
    for n in sizes {
        let (mut t_ek, mut t_pr, mut t_mcf) = (0.0f64, 0.0f64, 0.0f64);
        for _ in 0..args.num {
            let net = classes::random(&mut rng, n);

            let mut ek_net = net.clone();
            t_ek = t_ek.max(measure(|| edmondskarp(&mut ek_net)));

            let mut pr_net = net.clone();
            t_pr = t_pr.max(measure(|| pushrelabel(&mut pr_net)));
            assert_eq!(ek_net.value(), pr_net.value());

            // half of the maximum flow
            let target = ek_net.value() / 2;
            let mut mcf_net = net;
            let mut result = Ok(None);
            t_mcf = t_mcf.max(measure(|| result = min_cost_flow(&mut mcf_net, target)));
            result?;
        }
        println!("{:>6} {:>12.6} {:>12.6} {:>12.6}", n, t_ek, t_pr, t_mcf);
    }

    Ok(())
}
