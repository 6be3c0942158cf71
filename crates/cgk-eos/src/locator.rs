//! Constant-time interval location on a log-uniform grid.

/// Log10-uniform sampling of the T1 column.
///
/// Node `i` sits at `t1_min * 10^(i * dlog)`; the last node is `t1_max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogGrid {
    /// First node.
    pub t1_min: f64,
    /// Last node.
    pub t1_max: f64,
    /// Step in log10 units.
    pub dlog: f64,
    /// Number of nodes.
    pub len: usize,
}

impl LogGrid {
    /// Sampling of the reference ionization table: 1e1..1e9, 100 points per decade.
    pub const REFERENCE: LogGrid = LogGrid {
        t1_min: 10.0,
        t1_max: 1.0e9,
        dlog: 0.01,
        len: 801,
    };

    /// Nominal position of node `i`.
    pub fn node(&self, i: usize) -> f64 {
        self.t1_min * 10f64.powf(i as f64 * self.dlog)
    }

    /// Index of the last interval, `len - 2`.
    #[inline]
    pub fn last_interval(&self) -> usize {
        self.len.saturating_sub(2)
    }

    /// Left index `i` of the interval `[node(i), node(i+1)]` holding `x`.
    ///
    /// Values below `t1_min` clamp to the first interval and values at or
    /// above `t1_max` to the last one. `x` must be positive.
    #[inline]
    pub fn locate(&self, x: f64) -> usize {
        let last = self.last_interval();
        if x < self.t1_min {
            return 0;
        }
        if x >= self.t1_max {
            return last;
        }

        let pos = (x / self.t1_min).log10() / self.dlog;
        // pos >= 0 here, so the cast truncates toward floor
        (pos as usize).min(last)
    }
}
