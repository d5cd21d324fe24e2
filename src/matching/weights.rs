/// Composite weights for the four match criteria.
///
/// Fixed constants; they must sum to exactly 1.0. Course matching carries
/// the smallest share because accepted-course lists are the noisiest input.
pub const MATCH_WEIGHTS: Weights = Weights {
    skills: 0.30,
    experience: 0.25,
    education: 0.25,
    courses: 0.20,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub courses: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.education + self.courses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        assert!((MATCH_WEIGHTS.sum() - 1.0).abs() < 1e-9);
    }
}
