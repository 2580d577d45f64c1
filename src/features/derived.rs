//! Derived numeric features computed from a single record before encoding.

use super::rules::{AGE_BIN_EDGES, AGE_BIN_LABELS, DOMESTIC_COUNTRY, NIGHT_HOURS, WEB_DEVICE};
use serde::{Deserialize, Serialize};

/// `ln(1 + amount)`; 0 at amount 0.
pub fn amount_log(amount: f64) -> f64 {
    amount.ln_1p()
}

pub fn is_night(hour: i64) -> bool {
    NIGHT_HOURS.contains(&hour)
}

/// Exact, case-sensitive match against the domestic country.
pub fn is_cross_border(country: &str) -> bool {
    country != DOMESTIC_COUNTRY
}

pub fn is_web(device: &str) -> bool {
    device == WEB_DEVICE
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeBucket {
    #[serde(rename = "18-30")]
    Young,
    #[serde(rename = "31-45")]
    Adult,
    #[serde(rename = "46-60")]
    Middle,
    #[serde(rename = "60+")]
    Senior,
}

impl AgeBucket {
    const ALL: [AgeBucket; 4] = [
        AgeBucket::Young,
        AgeBucket::Adult,
        AgeBucket::Middle,
        AgeBucket::Senior,
    ];

    /// Bin `age` into `(lo, hi]` intervals over `AGE_BIN_EDGES`. Ages at or
    /// below the first edge, above the last, or NaN fall in no bucket.
    pub fn from_age(age: f64) -> Option<Self> {
        AGE_BIN_EDGES
            .windows(2)
            .position(|w| age > w[0] && age <= w[1])
            .map(|i| Self::ALL[i])
    }

    pub fn label(self) -> &'static str {
        AGE_BIN_LABELS[self as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_log_zero_and_monotonic() {
        assert_eq!(amount_log(0.0), 0.0);
        let amounts = [0.0, 0.5, 1.0, 10.0, 250.0, 1e6];
        for w in amounts.windows(2) {
            assert!(amount_log(w[0]) < amount_log(w[1]));
        }
        assert!((amount_log(std::f64::consts::E - 1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn night_window_is_zero_through_five() {
        for h in 0..=5 {
            assert!(is_night(h), "hour {h}");
        }
        for h in 6..=23 {
            assert!(!is_night(h), "hour {h}");
        }
    }

    #[test]
    fn out_of_range_hours_are_not_night() {
        assert!(!is_night(-1));
        assert!(!is_night(24));
    }

    #[test]
    fn cross_border_is_case_sensitive() {
        assert!(!is_cross_border("somalia"));
        assert!(is_cross_border("Somalia"));
        assert!(is_cross_border("kenya"));
        assert!(is_cross_border(""));
    }

    #[test]
    fn web_device_exact_match() {
        assert!(is_web("web"));
        assert!(!is_web("mobile"));
        assert!(!is_web("WEB"));
    }

    #[test]
    fn age_buckets_close_on_the_right() {
        assert_eq!(AgeBucket::from_age(18.0), None);
        assert_eq!(AgeBucket::from_age(18.5), Some(AgeBucket::Young));
        assert_eq!(AgeBucket::from_age(25.0), Some(AgeBucket::Young));
        assert_eq!(AgeBucket::from_age(30.0), Some(AgeBucket::Young));
        assert_eq!(AgeBucket::from_age(30.1), Some(AgeBucket::Adult));
        assert_eq!(AgeBucket::from_age(45.0), Some(AgeBucket::Adult));
        assert_eq!(AgeBucket::from_age(50.0), Some(AgeBucket::Middle));
        assert_eq!(AgeBucket::from_age(60.0), Some(AgeBucket::Middle));
        assert_eq!(AgeBucket::from_age(70.0), Some(AgeBucket::Senior));
        assert_eq!(AgeBucket::from_age(90.0), Some(AgeBucket::Senior));
        assert_eq!(AgeBucket::from_age(95.0), None);
        assert_eq!(AgeBucket::from_age(f64::NAN), None);
    }

    #[test]
    fn bucket_labels() {
        assert_eq!(AgeBucket::Young.label(), "18-30");
        assert_eq!(AgeBucket::Senior.label(), "60+");
    }
}
