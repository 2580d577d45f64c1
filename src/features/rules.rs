//! Fixed business rules baked into the trained model. Not configurable: changing
//! any of these changes the meaning of the feature vector.

/// The one country treated as domestic; everything else is cross-border.
pub const DOMESTIC_COUNTRY: &str = "somalia";

/// Device label that sets `is_web`.
pub const WEB_DEVICE: &str = "web";

/// Hours (inclusive) that count as night.
pub const NIGHT_HOURS: std::ops::RangeInclusive<i64> = 0..=5;

/// Age bin edges. Bins are open on the left and closed on the right.
pub const AGE_BIN_EDGES: [f64; 5] = [18.0, 30.0, 45.0, 60.0, 90.0];

/// Labels for the bins between consecutive `AGE_BIN_EDGES`.
pub const AGE_BIN_LABELS: [&str; 4] = ["18-30", "31-45", "46-60", "60+"];
