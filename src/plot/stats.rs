//! Descriptive statistics behind the distribution-style plots.

use std::f64::consts::PI;

/// Arithmetic mean; NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1 in the denominator).
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    var.sqrt()
}

/// Quantile of already sorted data with linear interpolation between ranks.
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}

/// First quartile, median and third quartile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quartiles {
    /// 25th percentile.
    pub q1: f64,
    /// 50th percentile.
    pub median: f64,
    /// 75th percentile.
    pub q3: f64,
}

impl Quartiles {
    /// Quartiles of `values`, `None` when empty.
    pub fn of(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let sorted = sorted_copy(values);
        Some(Self::of_sorted(&sorted))
    }

    fn of_sorted(sorted: &[f64]) -> Self {
        Self {
            q1: quantile(sorted, 0.25),
            median: quantile(sorted, 0.5),
            q3: quantile(sorted, 0.75),
        }
    }

    /// Interquartile range.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Box-and-whisker summary of one group.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSummary {
    /// Quartiles of the group.
    pub quartiles: Quartiles,
    /// Lowest datum within 1.5 IQR of the first quartile.
    pub whisker_low: f64,
    /// Highest datum within 1.5 IQR of the third quartile.
    pub whisker_high: f64,
    /// Data beyond the whiskers.
    pub outliers: Vec<f64>,
}

/// Whisker reach as a multiple of the IQR.
pub const WHISKER_IQR: f64 = 1.5;

impl BoxSummary {
    /// Summarise `values`, `None` when empty.
    pub fn of(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let sorted = sorted_copy(values);
        let quartiles = Quartiles::of_sorted(&sorted);
        let low_fence = quartiles.q1 - WHISKER_IQR * quartiles.iqr();
        let high_fence = quartiles.q3 + WHISKER_IQR * quartiles.iqr();

        let inside = || sorted.iter().copied().filter(|v| *v >= low_fence && *v <= high_fence);
        let whisker_low = inside().next().unwrap_or(quartiles.q1);
        let whisker_high = inside().last().unwrap_or(quartiles.q3);
        let outliers = sorted
            .iter()
            .copied()
            .filter(|v| *v < low_fence || *v > high_fence)
            .collect();

        Some(Self {
            quartiles,
            whisker_low,
            whisker_high,
            outliers,
        })
    }
}

/// Upper bound on the automatic bin count.
pub const MAX_AUTO_BINS: usize = 10_000;

/// Bin edges chosen like numpy's `bins="auto"`: the smaller of the
/// Freedman-Diaconis and Sturges widths.
///
/// Non-finite values are ignored. When the Freedman-Diaconis width would
/// need more than [`MAX_AUTO_BINS`] bins the Sturges width is used instead.
pub fn auto_bin_edges(values: &[f64]) -> Vec<f64> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return Vec::new();
    }
    let sorted = sorted_copy(&finite);
    let n = sorted.len() as f64;
    let (min, max) = (sorted[0], sorted[sorted.len() - 1]);
    let range = max - min;

    if range == 0.0 {
        // Half a unit either side, widened for magnitudes where that vanishes
        let pad = 0.5_f64.max(min.abs() * 1e-9);
        return vec![min - pad, max + pad];
    }

    let sturges = range / (n.log2() + 1.0);
    let iqr = quantile(&sorted, 0.75) - quantile(&sorted, 0.25);
    let fd = 2.0 * iqr / n.cbrt();

    let bins_for = |width: f64| -> usize {
        if width > 0.0 && width.is_finite() {
            ((range / width).ceil() as usize).max(1)
        } else {
            1
        }
    };
    let mut bins = bins_for(if fd > 0.0 { fd.min(sturges) } else { sturges });
    if bins > MAX_AUTO_BINS {
        bins = bins_for(sturges);
    }
    let bins = bins.min(MAX_AUTO_BINS);

    let step = range / bins as f64;
    let mut edges: Vec<f64> = (0..=bins).map(|i| min + step * i as f64).collect();
    edges[bins] = max;
    edges
}

/// Count `values` into the bins delimited by `edges`; the last bin is closed.
pub fn histogram(values: &[f64], edges: &[f64]) -> Vec<usize> {
    if edges.len() < 2 {
        return Vec::new();
    }
    let bins = edges.len() - 1;
    let first = edges[0];
    let span = edges[bins] - first;
    let mut counts = vec![0; bins];
    for &v in values {
        if !v.is_finite() || v < first || v > edges[bins] {
            continue;
        }
        let idx = ((v - first) * bins as f64 / span).floor() as usize;
        counts[idx.min(bins - 1)] += 1;
    }
    counts
}

/// Gaussian kernel density estimate.
#[derive(Debug, Clone)]
pub struct Kde {
    samples: Vec<f64>,
    /// Kernel standard deviation.
    pub bandwidth: f64,
}

impl Kde {
    /// Fit with Scott's rule; `None` when the data has no spread.
    pub fn fit(values: &[f64]) -> Option<Self> {
        let bandwidth = std_dev(values) * (values.len() as f64).powf(-0.2);
        if !(bandwidth.is_finite() && bandwidth > 0.0) {
            return None;
        }
        Some(Self {
            samples: values.to_vec(),
            bandwidth,
        })
    }

    /// Density at `x`.
    pub fn density(&self, x: f64) -> f64 {
        let norm = 1.0 / (self.samples.len() as f64 * self.bandwidth * (2.0 * PI).sqrt());
        self.samples
            .iter()
            .map(|s| (-0.5 * ((x - s) / self.bandwidth).powi(2)).exp())
            .sum::<f64>()
            * norm
    }

    /// Evaluate on `points` evenly spaced samples over `[lo, hi]`.
    pub fn curve(&self, lo: f64, hi: f64, points: usize) -> Vec<(f64, f64)> {
        if points < 2 {
            return vec![(lo, self.density(lo))];
        }
        let step = (hi - lo) / (points - 1) as f64;
        (0..points)
            .map(|i| {
                let x = lo + step * i as f64;
                (x, self.density(x))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quartiles_interpolate_linearly() {
        let q = Quartiles::of(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(q.q1, 1.75);
        assert_eq!(q.median, 2.5);
        assert_eq!(q.q3, 3.25);
        assert!(Quartiles::of(&[]).is_none());
    }

    #[test]
    fn box_summary_separates_outliers() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
        let summary = BoxSummary::of(&values).unwrap();
        assert_eq!(summary.whisker_low, 1.0);
        assert_eq!(summary.whisker_high, 5.0);
        assert_eq!(summary.outliers, vec![100.0]);
    }

    #[test]
    fn auto_bins_cover_the_data() {
        let edges = auto_bin_edges(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(edges, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(histogram(&[1.0, 2.0, 3.0, 4.0], &edges), vec![1, 1, 2]);
    }

    #[test]
    fn constant_data_gets_one_unit_bin() {
        let edges = auto_bin_edges(&[7.0, 7.0, 7.0]);
        assert_eq!(edges, vec![6.5, 7.5]);
        assert_eq!(histogram(&[7.0, 7.0, 7.0], &edges), vec![3]);
    }

    #[test]
    fn histogram_counts_every_value() {
        let values: Vec<f64> = (0..200).map(|i| (i as f64 * 0.37).sin() * 10.0).collect();
        let edges = auto_bin_edges(&values);
        let counts = histogram(&values, &edges);
        assert_eq!(counts.iter().sum::<usize>(), values.len());
    }

    #[test]
    fn far_outlier_keeps_bin_count_bounded() {
        let mut values: Vec<f64> = (0..1000).map(|i| i as f64 / 1000.0).collect();
        values.push(1e12);
        let edges = auto_bin_edges(&values);
        assert!(edges.len() - 1 <= MAX_AUTO_BINS);
        assert_eq!(edges.first(), Some(&0.0));
        assert_eq!(edges.last(), Some(&1e12));
        let counts = histogram(&values, &edges);
        assert_eq!(counts.iter().sum::<usize>(), values.len());
    }

    #[test]
    fn non_finite_values_are_skipped() {
        let values = [1.0, 2.0, f64::INFINITY, 3.0, f64::NAN, f64::NEG_INFINITY];
        let edges = auto_bin_edges(&values);
        assert_eq!(edges.first(), Some(&1.0));
        assert_eq!(edges.last(), Some(&3.0));
        assert_eq!(histogram(&values, &edges).iter().sum::<usize>(), 3);
        assert!(auto_bin_edges(&[f64::NAN, f64::INFINITY]).is_empty());
    }

    #[test]
    fn constant_large_values_get_a_real_bin() {
        let edges = auto_bin_edges(&[1e17, 1e17, 1e17]);
        assert_eq!(edges.len(), 2);
        assert!(edges[0] < 1e17 && 1e17 < edges[1]);
        assert_eq!(histogram(&[1e17, 1e17, 1e17], &edges), vec![3]);
    }

    #[test]
    fn kde_integrates_to_one() {
        let values = [1.0, 2.0, 2.5, 3.0, 7.0];
        let kde = Kde::fit(&values).unwrap();
        let curve = kde.curve(-20.0, 30.0, 2001);
        let dx = 50.0 / 2000.0;
        let area: f64 = curve.iter().map(|(_, d)| d * dx).sum();
        assert!((area - 1.0).abs() < 1e-3, "area = {}", area);
    }

    #[test]
    fn kde_needs_spread() {
        assert!(Kde::fit(&[2.0, 2.0]).is_none());
        assert!(Kde::fit(&[2.0]).is_none());
    }
}
