#[derive(Debug, Clone, PartialEq)]
pub struct Series<'a> {
    pub name: &'a str,
    pub latencies: Vec<f64>,
}

impl<'a> Series<'a> {
    pub fn new(name: &'a str, latencies: &[f64]) -> Self {
        Self {
            name,
            latencies: latencies.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.latencies.len()
    }

    /// Pairs each latency with the category position at the same index.
    pub fn points<'b>(&'b self, positions: &'b [u32]) -> impl Iterator<Item = (f64, f64)> + 'b {
        positions
            .iter()
            .zip(self.latencies.iter())
            .map(|(x, latency)| (f64::from(*x), *latency))
    }
}
