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

//! Errors of network construction and flow algorithms.

use thiserror::Error;

/// Error of a network operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A matrix has the wrong number of rows.
    #[error("{what} matrix has {found} rows, expected {expected}")]
    Dimension {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    /// A matrix row has the wrong number of entries.
    #[error("row {row} of {what} matrix has {found} entries, expected {expected}")]
    RowLength {
        what: &'static str,
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A capacity is negative.
    #[error("negative capacity on edge ({u},{v})")]
    NegativeCapacity { u: usize, v: usize },
    /// A min-cost-flow algorithm was run on a network without costs.
    #[error("network has no cost matrix")]
    MissingCosts,
    /// The residual network contains a negative cycle through the node.
    #[error("negative cycle detected through node {0}")]
    NegativeCycle(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
