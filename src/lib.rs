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

//#![forbid(unsafe_code)]

//! A library for maximum flow and minimum cost flow problems on dense
//! networks.
//!
//! A [`Network`] stores capacities (and optionally costs) for every ordered
//! pair of nodes. Node `0` is the source, the last node is the sink. The
//! flow algorithms operate directly on the network:
//!
//! - [`maxflow::edmondskarp`] augments along shortest paths,
//! - [`maxflow::pushrelabel`] is the generic push-relabel algorithm,
//! - [`mcf::min_cost_flow`] sends a given amount of flow along successive
//!   cheapest paths.
//!
//! # Example
//!
//! ```
//! use rs_flow::Network;
//! use rs_flow::maxflow::{edmondskarp, pushrelabel};
//!
//! let mut net = Network::from_capacities(&[
//!     [0, 3, 2, 0],
//!     [0, 0, 1, 2],
//!     [0, 0, 0, 3],
//!     [0, 0, 0, 0],
//! ]).unwrap();
//!
//! assert_eq!(edmondskarp(&mut net), 5);
//! assert_eq!(pushrelabel(&mut net), 5);
//! assert_eq!(net.value(), 5);
//! ```

mod num {
    pub use num_traits as traits;
}

pub mod error;
pub use self::error::{Error, Result};

// # Data structures

pub mod network;
pub use self::network::{EdgeState, Network};

/// Network classes
pub mod classes;

// # Algorithms

pub mod maxflow;
pub mod mcf;
pub mod search;
pub mod shortestpath;

// # Input and output

pub mod matfile;
pub mod table;
