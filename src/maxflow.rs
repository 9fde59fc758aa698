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

//! Maximum flow algorithms.
//!
//! All algorithms compute a maximum flow from the source (node `0`) to the
//! sink (node `n - 1`) of a [`Network`][crate::Network]. The final flow and
//! residual capacities are left on the network.

pub mod edmondskarp;
pub use self::edmondskarp::{edmondskarp, EdmondsKarp};

pub mod pushrelabel;
pub use self::pushrelabel::{pushrelabel, PushRelabel};
