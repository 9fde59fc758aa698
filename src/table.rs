/*
 * Copyright (c) 2017-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Drawing node matrices as text tables.
//!
//! Rows and columns are labelled `s` (source), `a`, `b`, ... and `t`
//! (sink). Zero cells are left blank.
//!
//! ```
//! use rs_flow::Network;
//! use rs_flow::table::Table;
//!
//! let net = Network::from_capacities(&[[0, 5, 0], [0, 0, 12], [0, 0, 0]]).unwrap();
//! let table = Table::new(net.num_nodes(), |u, v| net.capacity(u, v)).to_string();
//! assert_eq!(
//!     table,
//!     "┏━━━━━┳━━━━━┳━━━━━┳━━━━━━┓\n\
//!      ┃     ┃  s  ┃  a  ┃  t   ┃\n\
//!      ┣━━━━━╋━━━━━╋━━━━━╋━━━━━━┫\n\
//!      ┃  s  ┃     ┃  5  ┃      ┃\n\
//!      ┣━━━━━╋━━━━━╋━━━━━╋━━━━━━┫\n\
//!      ┃  a  ┃     ┃     ┃  12  ┃\n\
//!      ┣━━━━━╋━━━━━╋━━━━━╋━━━━━━┫\n\
//!      ┃  t  ┃     ┃     ┃      ┃\n\
//!      ┗━━━━━┻━━━━━┻━━━━━┻━━━━━━┛\n"
//! );
//! ```

use crate::num::traits::Zero;

use std::fmt;

/// Return the label of node `u` in a network with `n` nodes.
///
/// The source is `s`, the sink is `t`, inner nodes are lowercase letters
/// starting at `a`. Inner nodes beyond `z` are named `v<u>`.
pub fn node_label(u: usize, n: usize) -> String {
    if u == 0 {
        "s".to_string()
    } else if u + 1 == n {
        "t".to_string()
    } else if u <= 26 {
        ((b'a' + (u - 1) as u8) as char).to_string()
    } else {
        format!("v{}", u)
    }
}

/// A labelled `n x n` table.
pub struct Table {
    cells: Vec<Vec<String>>,
    /// Padding on each side of a cell.
    pub padding: usize,
}

impl Table {
    /// Create a table with the values `value(u, v)`.
    pub fn new<T, C>(n: usize, value: C) -> Self
    where
        T: fmt::Display + Zero,
        C: Fn(usize, usize) -> T,
    {
        let mut cells = Vec::with_capacity(n + 1);
        cells.push(
            std::iter::once(String::new())
                .chain((0..n).map(|v| node_label(v, n)))
                .collect(),
        );
        for u in 0..n {
            let mut row = Vec::with_capacity(n + 1);
            row.push(node_label(u, n));
            for v in 0..n {
                let x = value(u, v);
                row.push(if x.is_zero() { String::new() } else { x.to_string() });
            }
            cells.push(row);
        }
        Table { cells, padding: 2 }
    }

    fn line(&self, widths: &[usize], left: char, mid: char, right: char) -> String {
        let mut s = String::new();
        s.push(left);
        for (i, &w) in widths.iter().enumerate() {
            if i > 0 {
                s.push(mid);
            }
            s.extend(std::iter::repeat('━').take(w));
        }
        s.push(right);
        s
    }
}

impl fmt::Display for Table {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let ncols = self.cells[0].len();
        let widths: Vec<usize> = (0..ncols)
            .map(|j| {
                self.cells.iter().map(|row| row[j].chars().count()).max().unwrap_or(0) + 2 * self.padding
            })
            .collect();

        writeln!(fmt, "{}", self.line(&widths, '┏', '┳', '┓'))?;
        for (i, row) in self.cells.iter().enumerate() {
            write!(fmt, "┃")?;
            for (cell, &w) in row.iter().zip(&widths) {
                write!(fmt, "{:^width$}┃", cell, width = w)?;
            }
            writeln!(fmt)?;
            if i + 1 < self.cells.len() {
                writeln!(fmt, "{}", self.line(&widths, '┣', '╋', '┫'))?;
            }
        }
        writeln!(fmt, "{}", self.line(&widths, '┗', '┻', '┛'))
    }
}

#[cfg(test)]
mod tests {
    use super::{node_label, Table};

    #[test]
    fn test_labels() {
        assert_eq!(node_label(0, 4), "s");
        assert_eq!(node_label(1, 4), "a");
        assert_eq!(node_label(2, 4), "b");
        assert_eq!(node_label(3, 4), "t");
        assert_eq!(node_label(26, 40), "z");
        assert_eq!(node_label(27, 40), "v27");
    }

    #[test]
    fn test_negative_entries() {
        let table = Table::new(2, |u, v| if u == v { 0 } else if u < v { 3 } else { -3 }).to_string();
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[3], "┃  s  ┃      ┃  3  ┃");
        assert_eq!(lines[5], "┃  t  ┃  -3  ┃     ┃");
    }
}
