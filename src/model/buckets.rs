/// Per-tag scores split by address membership.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreBuckets {
    pub normal: Vec<f64>,
    pub abnormal: Vec<f64>,
}

impl ScoreBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `score` `count` times to the selected bucket.
    pub fn push(&mut self, abnormal: bool, score: f64, count: u64) {
        let bucket = if abnormal {
            &mut self.abnormal
        } else {
            &mut self.normal
        };
        bucket.extend(std::iter::repeat_n(score, count as usize));
    }

    fn len(&self) -> usize {
        self.normal.len() + self.abnormal.len()
    }

    /// Labels (`false` normal, `true` abnormal) and scores, normal samples first.
    pub fn labeled(&self) -> (Vec<bool>, Vec<f64>) {
        let mut labels = Vec::with_capacity(self.len());
        labels.resize(self.normal.len(), false);
        labels.resize(self.len(), true);

        let mut scores = Vec::with_capacity(self.len());
        scores.extend_from_slice(&self.normal);
        scores.extend_from_slice(&self.abnormal);
        (labels, scores)
    }
}
