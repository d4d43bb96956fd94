//! The Monte Carlo sample set and the metrics derived from it.

use crate::{Error, Result};
use closed01::Closed01;

/// Statistic values of the individual Monte Carlo trials.
///
/// Never empty. Order only reflects generation and carries no statistical
/// meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleSet {
    samples: Vec<u64>,
}

impl SampleSet {
    pub fn new(samples: Vec<u64>) -> Result<SampleSet> {
        if samples.is_empty() {
            return Err(Error::InvalidTrialCount(0));
        }
        Ok(SampleSet { samples })
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.samples
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.samples.iter().copied()
    }

    pub fn into_vec(self) -> Vec<u64> {
        self.samples
    }

    pub fn min(&self) -> u64 {
        self.iter().min().unwrap_or(0)
    }

    pub fn max(&self) -> u64 {
        self.iter().max().unwrap_or(0)
    }

    pub fn mean(&self) -> f64 {
        self.iter().map(|x| x as f64).sum::<f64>() / self.len() as f64
    }

    /// Population variance.
    pub fn variance(&self) -> f64 {
        let mean = self.mean();
        self.iter()
            .map(|x| {
                let d = x as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / self.len() as f64
    }

    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// One-sided empirical p-value: the fraction of samples that are at least
    /// as large as `observed`.
    pub fn p_value(&self, observed: u64) -> Closed01<f64> {
        let hits = self.iter().filter(|&x| x >= observed).count();
        Closed01::new(hits as f64 / self.len() as f64)
    }

    /// Bins the samples into `bins` equal-width buckets spanning
    /// `[min, max]`. The maximum lands in the last bucket.
    pub fn histogram(&self, bins: usize) -> Result<Histogram> {
        if bins == 0 {
            return Err(Error::InvalidBinCount(bins));
        }
        let (min, max) = (self.min(), self.max());
        let width = (max - min) as f64 / bins as f64;
        let mut counts = vec![0usize; bins];
        for x in self.iter() {
            let bin = if width > 0.0 {
                (((x - min) as f64 / width) as usize).min(bins - 1)
            } else {
                0
            };
            counts[bin] += 1;
        }
        Ok(Histogram { min, width, counts })
    }
}

/// Equal-width histogram of a [`SampleSet`].
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub min: u64,
    /// Zero if all samples are equal, in which case everything is in bin 0.
    pub width: f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Lower edge of bin `i`.
    pub fn lower_edge(&self, i: usize) -> f64 {
        self.min as f64 + self.width * i as f64
    }
}

/// Expected overlap under a uniformly random relabeling of two undirected
/// graphs with `q1` and `q2` edges on `n` shared vertices: `4 q1 q2 / (n (n - 1))`.
///
/// Counts ordered positions, so it is directly comparable to the mean of a
/// [`SampleSet`] of symmetric 0/1 matrices.
pub fn expected_overlap(q1: u64, q2: u64, n: usize) -> Result<f64> {
    expected_position_overlap(2 * q1, 2 * q2, n)
}

/// Expected overlap under a uniformly random relabeling, given the entry
/// totals of two matrices with zero diagonal: `total1 total2 / (n (n - 1))`.
///
/// Holds for directed and weighted input. For symmetric 0/1 matrices it
/// equals [`expected_overlap`] of the undirected edge counts.
pub fn expected_position_overlap(total1: u64, total2: u64, n: usize) -> Result<f64> {
    if n <= 1 {
        return Err(Error::DegenerateInput { n });
    }
    let n = n as f64;
    Ok(total1 as f64 * total2 as f64 / (n * (n - 1.0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_expected_overlap() {
        assert_relative_eq!(
            400.0 / 380.0,
            expected_overlap(10, 10, 20).unwrap(),
            epsilon = 1e-12
        );
        assert_relative_eq!(1.0526, expected_overlap(10, 10, 20).unwrap(), epsilon = 1e-4);
        assert_eq!(Err(Error::DegenerateInput { n: 1 }), expected_overlap(0, 0, 1));
        assert_eq!(Err(Error::DegenerateInput { n: 0 }), expected_overlap(3, 3, 0));
    }

    #[test]
    fn test_expected_position_overlap() {
        // 60 arcs each on 30 vertices
        assert_relative_eq!(3600.0 / 870.0, expected_position_overlap(60, 60, 30).unwrap());
        assert_relative_eq!(
            expected_overlap(10, 7, 20).unwrap(),
            expected_position_overlap(20, 14, 20).unwrap()
        );
        assert_eq!(
            Err(Error::DegenerateInput { n: 1 }),
            expected_position_overlap(0, 0, 1)
        );
    }

    #[test]
    fn test_p_value() {
        let s = SampleSet::new(vec![0, 2, 4, 4, 6, 8, 2, 0]).unwrap();
        assert_eq!(1.0, s.p_value(0).get());
        assert_eq!(0.5, s.p_value(4).get());
        assert_eq!(0.125, s.p_value(7).get());
        assert_eq!(0.0, s.p_value(9).get());
    }

    #[test]
    fn test_empty_sample_set() {
        assert_eq!(Err(Error::InvalidTrialCount(0)), SampleSet::new(vec![]));
    }

    #[test]
    fn test_moments() {
        let s = SampleSet::new(vec![2, 4, 4, 4, 5, 5, 7, 9]).unwrap();
        assert_relative_eq!(5.0, s.mean());
        assert_relative_eq!(4.0, s.variance());
        assert_relative_eq!(2.0, s.std_dev());
        assert_eq!(2, s.min());
        assert_eq!(9, s.max());
    }

    #[test]
    fn test_histogram() {
        let s = SampleSet::new(vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 10]).unwrap();
        let h = s.histogram(5).unwrap();
        assert_eq!(2.0, h.width);
        assert_eq!(vec![2, 2, 2, 2, 2], h.counts);
        assert_eq!(4.0, h.lower_edge(2));

        let flat = SampleSet::new(vec![3, 3, 3]).unwrap().histogram(4).unwrap();
        assert_eq!(vec![3, 0, 0, 0], flat.counts);

        assert_eq!(Err(Error::InvalidBinCount(0)), s.histogram(0));
    }
}
