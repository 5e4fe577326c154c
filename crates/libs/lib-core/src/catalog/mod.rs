//! # Product Catalog
//!
//! Static product configuration: supported currencies, loan-term schedule,
//! and credit-score bands. These tables are immutable; anything dynamic
//! (rates per customer, limits) comes from the underwriting services, which
//! are out of scope here.

pub mod credit_bands;
pub mod currencies;
pub mod loan_terms;

pub use credit_bands::{band_for_score, CreditBand, CREDIT_BANDS};
pub use currencies::{currency, Currency, CURRENCIES};
pub use loan_terms::{term_for_months, LoanTerm, LOAN_TERMS};
