///Wrapper around the [`float_cmp::approx_eq!()`] macro for easy comparison of floats with a certain tolerance.
///Two FPAs are considered equal if they are within a certain tolerance of each other.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f64);

impl FPA {
    /// Absolute tolerance, on top of the default ulps-based one
    pub const EPSILON: f64 = 1e-9;
}

impl PartialEq<Self> for FPA {
    fn eq(&self, other: &Self) -> bool {
        float_cmp::approx_eq!(f64, self.0, other.0, epsilon = Self::EPSILON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_within_epsilon() {
        assert_eq!(FPA(0.0), FPA(FPA::EPSILON / 2.0));
        assert_eq!(FPA(0.1 + 0.2), FPA(0.3));
        assert_ne!(FPA(0.0), FPA(FPA::EPSILON * 2.0));
    }
}
