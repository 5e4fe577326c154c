//! # Supported Currencies
//!
//! Immutable table of the currencies the product can display and settle in,
//! keyed by currency code.

use serde::Serialize;

/// Currency descriptor.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Currency {
    /// Currency code, e.g. `KES` or `USDC`.
    pub code: &'static str,
    /// Display symbol.
    pub symbol: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// Number of decimal places for display and rounding.
    pub decimals: u8,
    /// Icon asset name served by the frontend.
    pub icon: &'static str,
}

/// All supported currencies.
pub const CURRENCIES: &[Currency] = &[
    Currency {
        code: "KES",
        symbol: "KSh",
        name: "Kenyan Shilling",
        decimals: 2,
        icon: "kes.svg",
    },
    Currency {
        code: "USDC",
        symbol: "$",
        name: "USD Coin",
        decimals: 6,
        icon: "usdc.svg",
    },
    Currency {
        code: "USDT",
        symbol: "$",
        name: "Tether USD",
        decimals: 6,
        icon: "usdt.svg",
    },
    Currency {
        code: "ETH",
        symbol: "Ξ",
        name: "Ether",
        decimals: 18,
        icon: "eth.svg",
    },
];

/// Look up a currency by code, case-insensitively.
pub fn currency(code: &str) -> Option<&'static Currency> {
    CURRENCIES.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(currency("kes"), currency("KES"));
        assert!(currency("usdc").is_some());
    }

    #[test]
    fn test_unknown_code_is_none() {
        assert!(currency("DOGE").is_none());
    }

    #[test]
    fn test_codes_are_unique() {
        for (i, a) in CURRENCIES.iter().enumerate() {
            for b in &CURRENCIES[i + 1..] {
                assert_ne!(a.code, b.code);
            }
        }
    }
}
