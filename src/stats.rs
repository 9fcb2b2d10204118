use anyhow::{bail, Result};

/// Element-wise arithmetic mean of equal-length series.
///
/// Every input must have the same length as the first one; a mismatch is an
/// error rather than a truncated result.
pub fn mean_series(inputs: &[&[f64]]) -> Result<Vec<f64>> {
    let Some(first) = inputs.first() else {
        bail!("cannot average an empty set of series");
    };

    let exp_len = first.len();
    for (i, input) in inputs.iter().enumerate() {
        let len = input.len();
        if len != exp_len {
            bail!("series {i} length must be {exp_len}, but is {len}");
        }
    }

    let count = inputs.len() as f64;
    let means = (0..exp_len)
        .map(|i| inputs.iter().map(|input| input[i]).sum::<f64>() / count)
        .collect();

    Ok(means)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perf_data::{DELETE, FAST_INSERT, GET, INSERT};

    const TOL: f64 = 1e-9;

    fn literal_means() -> Vec<f64> {
        mean_series(&[&INSERT, &FAST_INSERT, &DELETE, &GET]).unwrap()
    }

    #[test]
    fn test_mean_of_literal_series() {
        let means = literal_means();

        assert_eq!(means.len(), 8);
        assert!((means[0] - 2.915).abs() < TOL, "got {}", means[0]);
        assert!((means[7] - 3.2225).abs() < TOL, "got {}", means[7]);
    }

    #[test]
    fn test_mean_matches_every_index() {
        let means = literal_means();

        for i in 0..means.len() {
            let expected = (INSERT[i] + FAST_INSERT[i] + DELETE[i] + GET[i]) / 4.0;
            assert!((means[i] - expected).abs() < TOL, "index {i}");
        }
    }

    #[test]
    fn test_mean_is_deterministic() {
        assert_eq!(literal_means(), literal_means());
    }

    #[test]
    fn test_mismatched_lengths_fail() {
        let short = [1.0, 2.0, 3.0];
        let err = mean_series(&[&INSERT, &FAST_INSERT, &short, &GET]).unwrap_err();

        assert_eq!(err.to_string(), "series 2 length must be 8, but is 3");
    }

    #[test]
    fn test_empty_input_fails() {
        assert!(mean_series(&[]).is_err());
    }

    #[test]
    fn test_empty_series_give_empty_mean() {
        let empty: [f64; 0] = [];
        assert_eq!(mean_series(&[&empty, &empty]).unwrap(), Vec::<f64>::new());
    }
}
