//! Scalar statistics used by the outlier detection and the charts.

/// Arithmetic mean. `None` on empty input.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (n − 1 denominator). Zero for fewer than two values.
pub fn std_dev(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    if n <= 1.0 {
        return 0.0;
    }
    let m = match mean(values) {
        Some(m) => m,
        None => return 0.0,
    };
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (n - 1.0);
    variance.sqrt()
}

/// The `q`-th quantile using R-7 linear interpolation.
///
/// R-7 is the default in pandas, NumPy, R and Excel: for sorted data of
/// length n the quantile sits at position `q * (n − 1)` and is linearly
/// interpolated between the two neighboring order statistics.
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    if values.is_empty() || !(0.0..=1.0).contains(&q) {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    if sorted.len() == 1 {
        return Some(sorted[0]);
    }

    let pos = q * (sorted.len() as f64 - 1.0);
    let idx = pos.floor() as usize;
    let frac = pos - idx as f64;
    let lo = sorted[idx];
    let hi = sorted[(idx + 1).min(sorted.len() - 1)];
    Some(lo + (hi - lo) * frac)
}

/// Gaussian kernel density estimate evaluated on an evenly spaced grid.
///
/// Bandwidth follows Silverman's rule of thumb,
/// `h = 0.9 * min(std, IQR / 1.34) * n^(-1/5)`, which is what seaborn
/// uses for its histogram overlays. Returns `(x, density)` pairs; empty
/// when the data is empty or degenerate.
pub fn gaussian_kde(values: &[f64], grid_points: usize) -> Vec<(f64, f64)> {
    if values.len() < 2 || grid_points < 2 {
        return Vec::new();
    }

    let n = values.len() as f64;
    let std = std_dev(values);
    let iqr = match (quantile(values, 0.75), quantile(values, 0.25)) {
        (Some(q3), Some(q1)) => q3 - q1,
        _ => 0.0,
    };

    let mut spread = std;
    if iqr > 0.0 {
        spread = spread.min(iqr / 1.34);
    }
    if spread <= 0.0 {
        // All values identical; a density curve carries no information.
        return Vec::new();
    }

    let bandwidth = 0.9 * spread * n.powf(-0.2);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let step = (max - min) / (grid_points as f64 - 1.0);

    let norm = 1.0 / (n * bandwidth * (2.0 * std::f64::consts::PI).sqrt());
    (0..grid_points)
        .map(|i| {
            let x = min + step * i as f64;
            let density = values
                .iter()
                .map(|v| {
                    let z = (x - v) / bandwidth;
                    (-0.5 * z * z).exp()
                })
                .sum::<f64>()
                * norm;
            (x, density)
        })
        .collect()
}
