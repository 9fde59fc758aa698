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

use rs_flow::matfile;
use rs_flow::maxflow::{edmondskarp, EdmondsKarp, PushRelabel};
use rs_flow::mcf::{SolutionState, SuccessiveShortestPath};
use rs_flow::table::Table;
use rs_flow::Network;

use std::error::Error;

/// Run `f` `num` times and print the elapsed time.
fn timed<T, R>(num: usize, mut f: R) -> T
where
    R: FnMut() -> T,
{
    let tstart = OffsetDateTime::now_utc();
    let mut result = f();
    for _ in 1..num {
        result = f();
    }
    let tend = OffsetDateTime::now_utc();
    println!("Time: {}", (tend - tstart).as_seconds_f64());
    result
}

fn print_network(net: &Network<i64>) {
    let n = net.num_nodes();
    println!("Capacities:\n{}", Table::new(n, |u, v| net.capacity(u, v)));
    if net.has_costs() {
        println!("Costs:\n{}", Table::new(n, |u, v| net.cost(u, v)));
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let (args, _) = opts! {
        synopsis "Solve a flow problem given as capacity (and cost) matrix file.";
        opt algorithm:Option<String>, desc:"The algorithm: ek (default), pr or mcf.";
        opt target:Option<i64>, desc:"Target flow of mcf (default: the maximum flow).";
        opt num:usize=1, desc:"Number of times the algorithm is repeated.";
        opt quiet:bool, desc:"Do not print tables.";
        param file:String, desc:"Instance file name";
    }
    .parse_or_exit();

    let tstart = OffsetDateTime::now_utc();
    let mut net = matfile::read_from_file::<_, i64>(&args.file)?;
    let tend = OffsetDateTime::now_utc();
    println!("Time: {}", (tend - tstart).as_seconds_f64());
    println!("  number of nodes: {}", net.num_nodes());
    println!("  costs: {}", if net.has_costs() { "YES" } else { "NO" });
    if !args.quiet {
        print_network(&net);
    }

    match args.algorithm.as_deref().unwrap_or("ek") {
        "ek" => {
            let mut ek = EdmondsKarp::new(&mut net);
            timed(args.num, || ek.solve());
            println!("Maximal flow with Edmonds-Karp: {}", ek.value());
            println!("  number of augmentations: {}", ek.num_iterations());
            println!("  minimal cut: {:?}", ek.mincut());
        }
        "pr" => {
            let mut pr = PushRelabel::new(&mut net);
            timed(args.num, || pr.solve());
            println!("Maximal flow with push-relabel: {}", pr.value());
            println!("  number of pushes: {}", pr.cnt_push);
            println!("  number of relabels: {}", pr.cnt_relabel);
        }
        "mcf" => {
            let maxflow = edmondskarp(&mut net.clone());
            println!("The maximum flow is {}", maxflow);
            let target = args.target.unwrap_or(maxflow);

            let mut ssp = SuccessiveShortestPath::new(&mut net);
            match timed(args.num, || ssp.solve(target))? {
                SolutionState::Optimal => println!("Minimal cost of a flow of {}: {}", target, ssp.value()),
                _ => println!(
                    "A flow of {} cannot be reached (only {} units of flow sent)",
                    target,
                    ssp.flow_value()
                ),
            }
            println!("  number of iterations: {}", ssp.num_iterations());
        }
        alg => return Err(format!("unknown algorithm '{}', must be ek, pr or mcf", alg).into()),
    }

    assert!(net.is_feasible());
    if !args.quiet {
        println!("Flow:\n{}", Table::new(net.num_nodes(), |u, v| net.flow(u, v)));
    }

    Ok(())
}
