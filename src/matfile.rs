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

//! Reading and writing networks as plain matrix files.
//!
//! A matrix file must look as follows.
//!
//! 1. empty lines are allowed and ignored
//! 2. the first line contains the number of nodes `n > 0`
//! 3. the next `n` lines contain `n` whitespace separated capacities each
//!    (the row of node `u` contains the capacities of the edges `(u,v)`)
//! 4. if exactly `n` further lines follow, they contain the cost matrix in
//!    the same format; any other number of remaining lines means that the
//!    network has no costs
//!
//! ```
//! use rs_flow::matfile;
//!
//! let text = "3\n0 4 2\n0 0 3\n0 0 0\n";
//! let net = matfile::read::<_, i32>(text.as_bytes()).unwrap();
//! assert_eq!(net.num_nodes(), 3);
//! assert_eq!(net.capacity(0, 1), 4);
//! assert!(!net.has_costs());
//! ```

use crate::num::traits::{NumAssign, Signed};
use crate::Network;

use log::debug;
use std::fmt::Display;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};
use thiserror::Error;

/// Error when reading a matrix file.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("Format error on line {line}: {msg}")]
    Format { line: usize, msg: String },
    #[error("Data error on line {line}: {msg}")]
    Data { line: usize, msg: String },
    #[error(transparent)]
    Network(#[from] crate::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Iterates over the tokens in a line.
struct Tokens<'a> {
    it: SplitWhitespace<'a>,
    line: usize,
}

impl<'a> Tokens<'a> {
    fn number<T: FromStr>(&mut self) -> Result<T> {
        let tok = self.it.next().ok_or_else(|| Error::Format {
            line: self.line,
            msg: "expected number".to_string(),
        })?;
        tok.parse().map_err(|_| Error::Format {
            line: self.line,
            msg: format!("invalid number '{}'", tok),
        })
    }

    fn end(&mut self) -> Result<()> {
        match self.it.next() {
            None => Ok(()),
            Some(tok) => Err(Error::Format {
                line: self.line,
                msg: format!("unexpected token '{}' at end of line", tok),
            }),
        }
    }
}

/// Parse `n` lines of `n` numbers each.
fn read_matrix<F: FromStr>(lines: &[(usize, String)], n: usize, what: &str) -> Result<Vec<Vec<F>>> {
    let mut rows = Vec::with_capacity(n);
    for (line, text) in lines {
        let mut toks = Tokens {
            it: text.split_whitespace(),
            line: *line,
        };
        let row = (0..n)
            .map(|_| toks.number())
            .collect::<Result<Vec<F>>>()
            .map_err(|err| match err {
                Error::Format { line, msg } => Error::Format {
                    line,
                    msg: format!("{} row must contain {} numbers: {}", what, n, msg),
                },
                err => err,
            })?;
        toks.end()?;
        rows.push(row);
    }
    Ok(rows)
}

/// Read a network from a matrix file.
pub fn read<R, F>(r: R) -> Result<Network<F>>
where
    R: Read,
    F: NumAssign + Signed + Ord + Copy + FromStr,
{
    let mut lines = Vec::new();
    for (i, line) in BufReader::new(r).lines().enumerate() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push((i + 1, line));
        }
    }

    let (first, rest) = match lines.split_first() {
        Some(x) => x,
        None => {
            return Err(Error::Format {
                line: 0,
                msg: "unexpected end of file, expected number of nodes".to_string(),
            })
        }
    };

    let mut toks = Tokens {
        it: first.1.split_whitespace(),
        line: first.0,
    };
    let n: usize = toks.number()?;
    toks.end()?;
    if n == 0 {
        return Err(Error::Data {
            line: first.0,
            msg: "number of nodes must be positive".to_string(),
        });
    }

    if rest.len() < n {
        return Err(Error::Format {
            line: rest.last().map_or(first.0, |l| l.0),
            msg: format!("unexpected end of file, expected {} capacity rows, got {}", n, rest.len()),
        });
    }

    let (caplines, costlines) = rest.split_at(n);
    let capacities = read_matrix::<F>(caplines, n, "capacity")?;
    for (u, row) in capacities.iter().enumerate() {
        if let Some(v) = row.iter().position(|&c| c < F::zero()) {
            return Err(Error::Data {
                line: caplines[u].0,
                msg: format!("negative capacity on edge ({},{})", u, v),
            });
        }
    }

    let mut net = Network::from_capacities(&capacities)?;
    if costlines.len() == n {
        let costs = read_matrix::<F>(costlines, n, "cost")?;
        net.set_costs(&costs)?;
    } else if !costlines.is_empty() {
        debug!(
            "Ignoring {} lines after the capacity matrix (expected {} for costs)",
            costlines.len(),
            n
        );
    }

    Ok(net)
}

/// Read a network from the named matrix file.
pub fn read_from_file<P, F>(filename: P) -> Result<Network<F>>
where
    P: AsRef<Path>,
    F: NumAssign + Signed + Ord + Copy + FromStr,
{
    read(std::fs::File::open(filename)?)
}

/// Write a network as matrix file.
///
/// The cost matrix is only written if the network has costs.
pub fn write<W, F>(mut w: W, net: &Network<F>) -> io::Result<()>
where
    W: Write,
    F: NumAssign + Signed + Ord + Copy + Display,
{
    let n = net.num_nodes();
    writeln!(w, "{}", n)?;
    let mut write_matrix = |value: &dyn Fn(usize, usize) -> F| -> io::Result<()> {
        for u in 0..n {
            let row: Vec<String> = (0..n).map(|v| value(u, v).to_string()).collect();
            writeln!(w, "{}", row.join(" "))?;
        }
        Ok(())
    };
    write_matrix(&|u, v| net.capacity(u, v))?;
    if net.has_costs() {
        write_matrix(&|u, v| net.cost(u, v))?;
    }
    Ok(())
}

/// Write a network to the named matrix file.
pub fn write_to_file<P, F>(filename: P, net: &Network<F>) -> io::Result<()>
where
    P: AsRef<Path>,
    F: NumAssign + Signed + Ord + Copy + Display,
{
    write(&mut std::fs::File::create(filename)?, net)
}

#[cfg(test)]
mod tests {
    use super::{read, write, Error};

    #[test]
    fn parse_file_test() {
        let file = "4

0 3 2 0
0 0 1 2
0 0 0 3
0 0 0 0
0 1 2 0
0 0 1 4
0 0 0 1
0 0 0 0
";
        let net = read::<_, i32>(file.as_bytes()).unwrap();
        assert_eq!(net.num_nodes(), 4);
        assert!(net.has_costs());
        assert_eq!(net.capacity(0, 1), 3);
        assert_eq!(net.capacity(2, 3), 3);
        assert_eq!(net.residual(1, 3), 2);
        assert_eq!(net.cost(1, 3), 4);
        assert_eq!(net.cost(3, 0), 0);
    }

    #[test]
    fn parse_partial_costs() {
        // only one cost row, hence no costs at all
        let file = "2\n0 5\n0 0\n0 1\n";
        let net = read::<_, i64>(file.as_bytes()).unwrap();
        assert!(!net.has_costs());
        assert_eq!(net.capacity(0, 1), 5);
    }

    #[test]
    fn parse_errors() {
        match read::<_, i32>("".as_bytes()) {
            Err(Error::Format { .. }) => {}
            r => panic!("unexpected result {:?}", r),
        }
        match read::<_, i32>("0\n".as_bytes()) {
            Err(Error::Data { line: 1, .. }) => {}
            r => panic!("unexpected result {:?}", r),
        }
        match read::<_, i32>("2\n0 1\n0\n".as_bytes()) {
            Err(Error::Format { line: 3, .. }) => {}
            r => panic!("unexpected result {:?}", r),
        }
        match read::<_, i32>("2\n0 x\n0 0\n".as_bytes()) {
            Err(Error::Format { line: 2, .. }) => {}
            r => panic!("unexpected result {:?}", r),
        }
        match read::<_, i32>("2\n0 1 2\n0 0\n".as_bytes()) {
            Err(Error::Format { line: 2, .. }) => {}
            r => panic!("unexpected result {:?}", r),
        }
        match read::<_, i32>("2\n0 1\n".as_bytes()) {
            Err(Error::Format { line: 2, .. }) => {}
            r => panic!("unexpected result {:?}", r),
        }
        match read::<_, i32>("2\n0 1\n-1 0\n".as_bytes()) {
            Err(Error::Data { line: 3, .. }) => {}
            r => panic!("unexpected result {:?}", r),
        }
    }

    #[test]
    fn write_test_file() {
        let file = "3\n0 4 2\n0 0 3\n0 0 0\n0 1 1\n0 0 2\n0 0 0\n";
        let net = read::<_, i32>(file.as_bytes()).unwrap();
        let mut buf = vec![];
        write(&mut buf, &net).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), file);

        let mut net = net;
        net.clear_costs();
        let mut buf = vec![];
        write(&mut buf, &net).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "3\n0 4 2\n0 0 3\n0 0 0\n");
    }
}
