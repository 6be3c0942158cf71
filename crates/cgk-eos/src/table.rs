//! Tabulated T1 → temperature relation.
//!
//! The table pairs a log-uniform T1 column with the equilibrium temperature at
//! each sample. It is validated once when built and read-only afterwards, so a
//! single instance can be shared by every thread evaluating grid cells.

use std::sync::LazyLock;

use thiserror::Error;
use tracing::debug;

use crate::locator::LogGrid;
use crate::table_data::{NODES, T1_NODES, TEMPERATURE_NODES};

/// Relative tolerance between a stored T1 node and its nominal grid position.
const GRID_REL_TOL: f64 = 1e-6;

static REFERENCE: LazyLock<LookupTable> = LazyLock::new(|| {
    LookupTable::from_columns(&T1_NODES, &TEMPERATURE_NODES, LogGrid::REFERENCE)
        .expect("embedded ionization table must satisfy its invariants")
});

/// Errors raised while building a [`LookupTable`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    #[error("Column length mismatch: {t1} T1 values, {temperature} temperatures")]
    LengthMismatch { t1: usize, temperature: usize },

    #[error("Table needs at least 2 nodes, got {len}")]
    TooShort { len: usize },

    #[error("Grid declares {expected} nodes, table has {got}")]
    GridLength { expected: usize, got: usize },

    #[error("Non-finite {column} value at index {index}")]
    NonFinite { column: &'static str, index: usize },

    #[error("{column} column is not strictly increasing at index {index}")]
    NotIncreasing { column: &'static str, index: usize },

    #[error("Invalid grid: {what}")]
    InvalidGrid { what: &'static str },

    #[error("Grid step dlog = {dlog} is finer than the node tolerance")]
    StepTooFine { dlog: f64 },

    #[error("T1 node {index} = {value} is off the log grid (expected {expected})")]
    OffGrid {
        index: usize,
        value: f64,
        expected: f64,
    },
}

/// One sample of the table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableNode {
    /// Pressure over density in temperature units.
    pub t1: f64,
    /// Gas temperature [K].
    pub temperature: f64,
}

/// Immutable, validated T1 → temperature table on a log-uniform grid.
#[derive(Debug, Clone)]
pub struct LookupTable {
    nodes: Vec<TableNode>,
    grid: LogGrid,
}

impl LookupTable {
    /// Build a table from paired nodes, checking every invariant.
    pub fn new(nodes: Vec<TableNode>, grid: LogGrid) -> Result<Self, TableError> {
        let len = nodes.len();
        if len < 2 {
            return Err(TableError::TooShort { len });
        }
        if grid.len != len {
            return Err(TableError::GridLength {
                expected: grid.len,
                got: len,
            });
        }

        check_grid(&grid)?;

        for (index, node) in nodes.iter().enumerate() {
            if !node.t1.is_finite() {
                return Err(TableError::NonFinite { column: "T1", index });
            }
            if !node.temperature.is_finite() {
                return Err(TableError::NonFinite {
                    column: "temperature",
                    index,
                });
            }
        }

        for (offset, pair) in nodes.windows(2).enumerate() {
            let index = offset + 1;
            if pair[1].t1 <= pair[0].t1 {
                return Err(TableError::NotIncreasing { column: "T1", index });
            }
            if pair[1].temperature <= pair[0].temperature {
                return Err(TableError::NotIncreasing {
                    column: "temperature",
                    index,
                });
            }
        }

        for (index, node) in nodes.iter().enumerate() {
            // end nodes must sit exactly on the grid bounds
            let (expected, exact) = match index {
                0 => (grid.t1_min, true),
                i if i + 1 == len => (grid.t1_max, true),
                i => (grid.node(i), false),
            };
            let off = if exact {
                node.t1 != expected
            } else {
                (node.t1 - expected).abs() > GRID_REL_TOL * expected
            };
            if off {
                return Err(TableError::OffGrid {
                    index,
                    value: node.t1,
                    expected,
                });
            }
        }

        debug!(
            nodes = len,
            t1_min = grid.t1_min,
            t1_max = grid.t1_max,
            dlog = grid.dlog,
            "built ionization lookup table"
        );

        Ok(Self { nodes, grid })
    }

    /// Build a table from two index-aligned columns.
    pub fn from_columns(
        t1: &[f64],
        temperature: &[f64],
        grid: LogGrid,
    ) -> Result<Self, TableError> {
        if t1.len() != temperature.len() {
            return Err(TableError::LengthMismatch {
                t1: t1.len(),
                temperature: temperature.len(),
            });
        }
        let nodes = t1
            .iter()
            .zip(temperature)
            .map(|(&t1, &temperature)| TableNode { t1, temperature })
            .collect();
        Self::new(nodes, grid)
    }

    /// The embedded 801-node reference table, built on first use.
    pub fn reference() -> &'static LookupTable {
        &REFERENCE
    }

    /// All samples, in increasing T1 order.
    pub fn nodes(&self) -> &[TableNode] {
        &self.nodes
    }

    /// Sample `i`, if in range.
    pub fn node(&self, i: usize) -> Option<&TableNode> {
        self.nodes.get(i)
    }

    /// Log grid the T1 column was validated against.
    pub fn grid(&self) -> &LogGrid {
        &self.grid
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: construction rejects tables shorter than two nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Left index of the interval bracketing `t1`.
    ///
    /// The grid estimate is nudged by at most one step against the stored
    /// column, which carries rounding relative to the nominal grid. A value
    /// sitting exactly on an interior node gets that node as left end.
    #[inline]
    pub fn locate(&self, t1: f64) -> usize {
        let last = self.grid.last_interval();
        let i = self.grid.locate(t1);
        if i < last && t1 >= self.nodes[i + 1].t1 {
            i + 1
        } else if i > 0 && t1 < self.nodes[i].t1 {
            i - 1
        } else {
            i
        }
    }

    /// Linear interpolation of temperature in T1.
    ///
    /// Outside the tabulated range the first or last segment is extended.
    #[inline]
    pub fn interpolate(&self, t1: f64) -> f64 {
        let i = self.locate(t1);
        let lo = self.nodes[i];
        let hi = self.nodes[i + 1];
        lo.temperature + (hi.temperature - lo.temperature) * (t1 - lo.t1) / (hi.t1 - lo.t1)
    }
}

/// Reject grids on which a one-step correction cannot recover the bracket.
///
/// Stored nodes may stray `GRID_REL_TOL` from nominal, so adjacent tolerance
/// bands must not overlap: `10^dlog - 1 > 2 * GRID_REL_TOL`.
fn check_grid(grid: &LogGrid) -> Result<(), TableError> {
    if !(grid.t1_min.is_finite() && grid.t1_min > 0.0) {
        return Err(TableError::InvalidGrid {
            what: "t1_min must be positive and finite",
        });
    }
    let step = 10f64.powf(grid.dlog) - 1.0;
    if !(step > 2.0 * GRID_REL_TOL) {
        return Err(TableError::StepTooFine { dlog: grid.dlog });
    }
    let end = grid.node(grid.len - 1);
    if !((grid.t1_max - end).abs() <= GRID_REL_TOL * end) {
        return Err(TableError::InvalidGrid {
            what: "t1_max must be the last grid node",
        });
    }
    Ok(())
}

// Keeps the embedded columns and the reference grid in step.
const _: () = assert!(NODES == LogGrid::REFERENCE.len);


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn locate_brackets_inside_range(exp in 1.0_f64..9.0_f64) {
            let table = LookupTable::reference();
            let x = 10f64.powf(exp);
            prop_assume!(x < table.grid().t1_max);
            let i = table.locate(x);
            prop_assert!(i <= 799);
            prop_assert!(table.nodes()[i].t1 <= x, "x={} i={}", x, i);
            prop_assert!(x <= table.nodes()[i + 1].t1, "x={} i={}", x, i);
        }

        #[test]
        fn locate_brackets_on_perturbed_custom_grid(
            jitter in prop::collection::vec(-9.0e-7_f64..9.0e-7_f64, 7),
            exp in 0.0_f64..4.0_f64,
        ) {
            let grid = LogGrid { t1_min: 1.0, t1_max: 1.0e4, dlog: 0.5, len: 9 };
            let mut t1: Vec<f64> = (0..9).map(|i| grid.node(i)).collect();
            t1[0] = grid.t1_min;
            t1[8] = grid.t1_max;
            for (i, e) in jitter.iter().enumerate() {
                t1[i + 1] *= 1.0 + e;
            }
            let temperature: Vec<f64> = (0..9).map(|i| 10.0 + i as f64).collect();
            let table = LookupTable::from_columns(&t1, &temperature, grid).unwrap();

            let x = 10f64.powf(exp);
            prop_assume!(x < grid.t1_max);
            let i = table.locate(x);
            prop_assert!(t1[i] <= x && x <= t1[i + 1], "x={} i={}", x, i);
        }

        #[test]
        fn interpolation_stays_within_segment(exp in 1.0_f64..9.0_f64) {
            let table = LookupTable::reference();
            let x = 10f64.powf(exp);
            prop_assume!(x < table.grid().t1_max);
            let i = table.locate(x);
            let t = table.interpolate(x);
            prop_assert!(table.nodes()[i].temperature * (1.0 - f64::EPSILON) <= t);
            prop_assert!(t <= table.nodes()[i + 1].temperature * (1.0 + f64::EPSILON));
        }
    }
}
