//! # Loan Term Schedule
//!
//! Immutable ordered list of the installment terms offered at checkout,
//! with the APR attached to each term.

use serde::Serialize;

/// Loan term descriptor.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct LoanTerm {
    /// Repayment period in months.
    pub months: u8,
    /// Label shown in the term picker.
    pub label: &'static str,
    /// Annual percentage rate for this term.
    pub apr: f64,
}

/// Offered terms, ordered by repayment period.
pub const LOAN_TERMS: &[LoanTerm] = &[
    LoanTerm {
        months: 1,
        label: "1 Month",
        apr: 5.0,
    },
    LoanTerm {
        months: 3,
        label: "3 Months",
        apr: 8.5,
    },
    LoanTerm {
        months: 6,
        label: "6 Months",
        apr: 12.0,
    },
    LoanTerm {
        months: 12,
        label: "12 Months",
        apr: 18.0,
    },
];

/// Look up the term for a given repayment period.
pub fn term_for_months(months: u8) -> Option<&'static LoanTerm> {
    LOAN_TERMS.iter().find(|t| t.months == months)
}
