/// Sign tests on the scalars produced by perp-dot products.
///
/// Comparisons are exact; there is no tolerance band around zero.
pub trait IsZero {
    fn is_zero(&self) -> bool;
    fn lt_zero(&self) -> bool;
    fn le_zero(&self) -> bool;
    fn gt_zero(&self) -> bool;
}

impl IsZero for f64 {
    fn is_zero(&self) -> bool {
        *self == 0.
    }
    fn lt_zero(&self) -> bool {
        *self < 0.
    }
    fn le_zero(&self) -> bool {
        *self <= 0.
    }
    fn gt_zero(&self) -> bool {
        *self > 0.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signs() {
        assert!(IsZero::is_zero(&-0f64));
        assert!(IsZero::is_zero(&0f64));
        assert!((-1e-300f64).lt_zero());
        assert!(0f64.le_zero());
        assert!(!0f64.gt_zero());
        assert!(!f64::NAN.is_zero());
        assert!(!f64::NAN.gt_zero());
        assert!(!f64::NAN.lt_zero());
    }
}
