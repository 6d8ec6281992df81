pub fn mean(data: &[f64]) -> Option<f64> {
    let sum = data.iter().sum::<f64>();
    let count = data.len();

    match count {
        positive if positive > 0 => Some(sum / count as f64),
        _ => None,
    }
}

/// Sample standard deviation (divisor `n - 1`). A single sample has no spread.
pub fn std_dev(data: &[f64]) -> Option<f64> {
    match (mean(data), data.len()) {
        (Some(_), 1) => Some(0.0),
        (Some(data_mean), count) => {
            let variance = data
                .iter()
                .map(|value| {
                    let diff = data_mean - *value;

                    diff * diff
                })
                .sum::<f64>()
                / (count - 1) as f64;

            Some(variance.sqrt())
        }
        _ => None,
    }
}

/// Least-squares slope of `data` against its 0-based index.
pub fn linear_slope(data: &[f64]) -> Option<f64> {
    let n = data.len();
    if n < 2 {
        return None;
    }

    let x_mean = (n - 1) as f64 / 2.0;
    let y_mean = mean(data)?;

    let (covariance, x_variance) = data.iter().enumerate().fold(
        (0.0, 0.0),
        |(cov, var), (i, y)| {
            let dx = i as f64 - x_mean;
            (cov + dx * (y - y_mean), var + dx * dx)
        },
    );

    Some(covariance / x_variance)
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}
