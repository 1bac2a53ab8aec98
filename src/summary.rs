use ndarray::ArrayD;

/// Basic statistics of a state field over its finite entries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl Summary {
    pub fn of(values: &ArrayD<f64>) -> Option<Self> {
        let mut count = 0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;

        for &v in values.iter().filter(|v| v.is_finite()) {
            count += 1;
            min = min.min(v);
            max = max.max(v);
            sum += v;
        }

        if count == 0 {
            return None;
        }

        Some(Summary {
            count,
            min,
            max,
            mean: sum / count as f64,
        })
    }
}
