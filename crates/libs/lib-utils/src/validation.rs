//! # Validation Utilities
//!
//! Input validation helpers.

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate an EVM-style wallet address: `0x` prefix followed by 40 hex digits.
pub fn validate_evm_address(address: &str) -> Result<(), String> {
    let hex = address
        .strip_prefix("0x")
        .ok_or_else(|| "Wallet address must start with 0x".to_string())?;

    if hex.len() != 40 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err("Wallet address must be 40 hex digits".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_empty() {
        assert!(validate_not_empty("value", "field").is_ok());
        assert!(validate_not_empty("   ", "field").is_err());
    }

    #[test]
    fn test_evm_address_valid() {
        assert!(validate_evm_address("0x71C7656EC7ab88b098defB751B7401B5f6d8976F").is_ok());
    }

    #[test]
    fn test_evm_address_invalid() {
        assert!(validate_evm_address("71C7656EC7ab88b098defB751B7401B5f6d8976F").is_err());
        assert!(validate_evm_address("0x1234").is_err());
        assert!(validate_evm_address("0xZZC7656EC7ab88b098defB751B7401B5f6d8976F").is_err());
    }
}
