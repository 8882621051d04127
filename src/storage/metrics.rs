//! Derived batting and bowling rates

/// Runs scored per 100 balls faced; 0 when no balls were faced.
pub fn strike_rate(runs: u32, balls_faced: u32) -> f64 {
    if balls_faced > 0 {
        f64::from(runs) / f64::from(balls_faced) * 100.0
    } else {
        0.0
    }
}

/// Runs conceded per over bowled; 0 when no overs were bowled.
///
/// Overs are taken as a plain decimal, so `3.4` is three point four overs,
/// not three overs and four balls.
pub fn economy_rate(runs_conceded: u32, overs: f64) -> f64 {
    if overs > 0.0 {
        f64::from(runs_conceded) / overs
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strike_rate() {
        assert_eq!(strike_rate(50, 25), 200.0);
        assert_eq!(strike_rate(0, 12), 0.0);
        assert!((strike_rate(33, 40) - 82.5).abs() < 1e-9);
    }

    #[test]
    fn test_strike_rate_without_balls_faced() {
        assert_eq!(strike_rate(10, 0), 0.0);
    }

    #[test]
    fn test_economy_rate() {
        assert_eq!(economy_rate(24, 4.0), 6.0);
        assert!((economy_rate(31, 3.5) - 8.857142857).abs() < 1e-6);
    }

    #[test]
    fn test_economy_rate_without_overs() {
        assert_eq!(economy_rate(10, 0.0), 0.0);
        assert_eq!(economy_rate(10, -1.0), 0.0);
    }
}
