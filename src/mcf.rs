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

//! Minimum Cost Flow algorithms.
//!
//! The algorithms send a given amount of flow from the source to the sink of
//! a [`Network`][crate::Network] with costs at minimal total cost.

pub mod ssp;
pub use ssp::{min_cost_flow, SuccessiveShortestPath};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SolutionState {
    /// Unknown state, the problem has not been solved, yet
    Unknown,
    /// The target flow has been sent at minimal cost
    Optimal,
    /// The target flow cannot be sent, the sink became unreachable before
    Infeasible,
}
