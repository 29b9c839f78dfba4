use std::collections::BTreeMap;
use std::fmt;

/// Count, sum, min, max and average over a sequence of integers.
///
/// `sum` wraps on overflow instead of panicking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntStats {
    pub count: u64,
    pub sum: i64,
    pub min: i64,
    pub max: i64,
}

impl IntStats {
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum as f64 / self.count as f64
        }
    }

    fn accept(mut self, value: i64) -> Self {
        self.count += 1;
        self.sum = self.sum.wrapping_add(value);
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self
    }
}

impl Default for IntStats {
    fn default() -> Self {
        Self {
            count: 0,
            sum: 0,
            min: i64::MAX,
            max: i64::MIN,
        }
    }
}

impl FromIterator<i64> for IntStats {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        iter.into_iter().fold(IntStats::default(), IntStats::accept)
    }
}

impl fmt::Display for IntStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IntSummaryStatistics{{count={}, sum={}, min={}, average={:.6}, max={}}}",
            self.count,
            self.sum,
            self.min,
            self.average(),
            self.max
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StreamReport {
    pub even_squares: Vec<i64>,
    pub sum: i64,
    /// Keyed by "is even".
    pub partitioned: BTreeMap<bool, Vec<i64>>,
    pub stats: IntStats,
}

pub fn demonstrate() -> StreamReport {
    let numbers: Vec<i64> = (1..=10).collect();

    let even_squares: Vec<i64> = numbers
        .iter()
        .filter(|n| *n % 2 == 0)
        .map(|n| n * n)
        .collect();

    let sum: i64 = numbers.iter().sum();

    let (even, odd): (Vec<i64>, Vec<i64>) = numbers.iter().partition(|n| *n % 2 == 0);
    let partitioned = BTreeMap::from([(false, odd), (true, even)]);

    let stats: IntStats = numbers.iter().copied().collect();

    StreamReport {
        even_squares,
        sum,
        partitioned,
        stats,
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
