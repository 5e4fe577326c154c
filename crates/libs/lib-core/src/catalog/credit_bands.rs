//! # Credit-Score Bands
//!
//! Immutable table mapping credit-score ranges to named bands and their
//! display colors. Bands are contiguous and non-overlapping over the
//! supported score range (300-850).

use serde::Serialize;

/// Credit-score band descriptor.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CreditBand {
    /// Band name, e.g. `good`.
    pub name: &'static str,
    /// Lowest score in the band (inclusive).
    pub min: u16,
    /// Highest score in the band (inclusive).
    pub max: u16,
    /// Display color (hex).
    pub color: &'static str,
}

/// All bands, ordered from lowest to highest score.
pub const CREDIT_BANDS: &[CreditBand] = &[
    CreditBand {
        name: "poor",
        min: 300,
        max: 579,
        color: "#ef4444",
    },
    CreditBand {
        name: "fair",
        min: 580,
        max: 669,
        color: "#f59e0b",
    },
    CreditBand {
        name: "good",
        min: 670,
        max: 749,
        color: "#3b82f6",
    },
    CreditBand {
        name: "excellent",
        min: 750,
        max: 850,
        color: "#22c55e",
    },
];

/// Find the band containing `score`, if it falls in the supported range.
pub fn band_for_score(score: u16) -> Option<&'static CreditBand> {
    CREDIT_BANDS.iter().find(|b| score >= b.min && score <= b.max)
}
