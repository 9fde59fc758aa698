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

#![cfg(feature = "serialize")]

use rs_flow::maxflow::edmondskarp;
use rs_flow::Network;

use std::error::Error;

#[test]
fn test_serialize() -> Result<(), Box<dyn Error>> {
    let mut net = Network::from_capacities(&[[0, 3, 2, 0], [0, 0, 1, 2], [0, 0, 0, 3], [0, 0, 0, 0]])?;
    net.set_cost(0, 1, 4);
    edmondskarp(&mut net);

    let json = serde_json::to_string(&net)?;
    let copy: Network<i32> = serde_json::from_str(&json)?;
    assert_eq!(copy.num_nodes(), 4);
    assert!(copy.has_costs());
    assert_eq!(copy.value(), 5);
    for u in 0..4 {
        for v in 0..4 {
            assert_eq!(copy.edge(u, v), net.edge(u, v));
        }
    }

    Ok(())
}
