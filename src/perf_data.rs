use crate::perf::Series;

/// B-tree degrees the interval tree benchmarks were run with.
pub const LABELS: [&str; 8] = ["2", "4", "8", "16", "32", "64", "128", "256"];
pub const POSITIONS: [u32; 8] = [1, 2, 3, 4, 5, 6, 7, 8];

pub const INSERT: [f64; 8] = [2.40, 1.39, 1.12, 1.01, 0.95, 0.93, 0.89, 0.90];
pub const FAST_INSERT: [f64; 8] = [2.17, 1.26, 1.03, 1.06, 0.89, 0.87, 0.83, 0.83];
pub const DELETE: [f64; 8] = [2.43, 1.56, 1.27, 1.18, 1.11, 1.07, 1.06, 1.08];
pub const GET: [f64; 8] = [4.66, 3.58, 3.39, 3.40, 3.66, 5.15, 5.87, 10.08];

pub fn measured_series() -> Vec<Series<'static>> {
    vec![
        Series::new("Insert", &INSERT),
        Series::new("FastInsert", &FAST_INSERT),
        Series::new("Delete", &DELETE),
        Series::new("Get", &GET),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_align_with_positions() {
        assert_eq!(LABELS.len(), 8);
        assert_eq!(POSITIONS.len(), 8);

        for (i, position) in POSITIONS.iter().enumerate() {
            assert_eq!(*position as usize, i + 1);
        }
        assert_eq!(LABELS[0], "2");
        assert_eq!(LABELS[7], "256");
    }

    #[test]
    fn test_measured_series_match_categories() {
        let series = measured_series();
        let names: Vec<_> = series.iter().map(|s| s.name).collect();

        assert_eq!(names, vec!["Insert", "FastInsert", "Delete", "Get"]);
        for s in &series {
            assert_eq!(s.len(), LABELS.len(), "{} length", s.name);
        }
    }
}
