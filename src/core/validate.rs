//! Wallet form input validation.
//!
//! Every check returns a [`ValidationError`] that the form renders next to
//! the field.

use std::str::FromStr;

use alloy_primitives::Address;

use crate::config::AMOUNT_DECIMALS;
use crate::core::error::ValidationError;
use crate::utils::format::format_amount;
use crate::utils::log;

/// Validate a withdraw destination address.
///
/// All-lowercase and all-uppercase hex is accepted as is; mixed case must
/// carry a valid EIP-55 checksum.
pub fn validate_withdraw_address(input: &str) -> Result<Address, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ValidationError::EmptyAddress);
    }

    let hex = input
        .strip_prefix("0x")
        .ok_or(ValidationError::InvalidAddress)?;
    if hex.len() != 40 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ValidationError::InvalidAddress);
    }

    let has_lower = hex.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = hex.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        Address::parse_checksummed(input, None).map_err(|_| ValidationError::BadChecksum)
    } else {
        Address::from_str(input).map_err(|_| ValidationError::InvalidAddress)
    }
}

/// Parse a decimal amount into base units with `decimals` fractional digits.
pub fn parse_amount(input: &str, decimals: u32) -> Result<u128, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ValidationError::EmptyAmount);
    }

    let (whole, frac) = match input.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (input, ""),
    };
    let is_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if (whole.is_empty() && frac.is_empty()) || !is_digits(whole) || !is_digits(frac) {
        return Err(ValidationError::InvalidAmount);
    }
    if frac.len() > decimals as usize {
        return Err(ValidationError::TooManyDecimals(decimals));
    }

    let scale = 10u128.pow(decimals);
    let whole_units = if whole.is_empty() {
        0
    } else {
        whole
            .parse::<u128>()
            .ok()
            .and_then(|w| w.checked_mul(scale))
            .ok_or(ValidationError::InvalidAmount)?
    };
    let frac_units = if frac.is_empty() {
        0
    } else {
        let padded = format!("{:0<width$}", frac, width = decimals as usize);
        padded
            .parse::<u128>()
            .map_err(|_| ValidationError::InvalidAmount)?
    };

    let total = whole_units
        .checked_add(frac_units)
        .ok_or(ValidationError::InvalidAmount)?;
    if total == 0 {
        return Err(ValidationError::ZeroAmount);
    }
    Ok(total)
}

/// Validate a spend amount against the available balance (both in base units).
pub fn validate_amount(input: &str, balance: u128) -> Result<u128, ValidationError> {
    let amount = parse_amount(input, AMOUNT_DECIMALS)?;
    if amount > balance {
        return Err(ValidationError::InsufficientBalance(format_amount(
            balance,
            AMOUNT_DECIMALS,
        )));
    }
    Ok(amount)
}

/// Validate a swap pair and amount.
pub fn validate_swap(from: &str, to: &str, amount: &str, balance: u128) -> Result<u128, ValidationError> {
    if from == to {
        return Err(ValidationError::SameCurrency);
    }
    validate_amount(amount, balance)
}

/// Parse an API balance string into base units.
///
/// Digits past [`AMOUNT_DECIMALS`] are truncated, so the result never
/// exceeds the real balance. A malformed balance is logged and read as zero.
pub fn balance_units(balance: &str) -> u128 {
    let balance = balance.trim();
    let truncated = match balance.split_once('.') {
        Some((whole, frac))
            if frac.len() > AMOUNT_DECIMALS as usize && frac.bytes().all(|b| b.is_ascii_digit()) =>
        {
            format!("{}.{}", whole, &frac[..AMOUNT_DECIMALS as usize])
        }
        _ => balance.to_string(),
    };
    match parse_amount(&truncated, AMOUNT_DECIMALS) {
        Ok(units) => units,
        Err(ValidationError::ZeroAmount) => 0,
        Err(e) => {
            log::warn(&format!("unreadable balance {:?}: {}", balance, e));
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHECKSUMMED: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

    #[test]
    fn test_address_checksummed() {
        assert!(validate_withdraw_address(CHECKSUMMED).is_ok());
        assert!(validate_withdraw_address(&format!("  {}  ", CHECKSUMMED)).is_ok());
    }

    #[test]
    fn test_address_single_case() {
        let lower = CHECKSUMMED.to_lowercase();
        let upper = format!("0x{}", CHECKSUMMED[2..].to_uppercase());
        assert_eq!(
            validate_withdraw_address(&lower),
            validate_withdraw_address(CHECKSUMMED)
        );
        assert!(validate_withdraw_address(&upper).is_ok());
    }

    #[test]
    fn test_address_bad_checksum() {
        // Flip the case of the final letter.
        let broken = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAeD";
        assert_eq!(
            validate_withdraw_address(broken),
            Err(ValidationError::BadChecksum)
        );
    }

    #[test]
    fn test_address_malformed() {
        assert_eq!(
            validate_withdraw_address(""),
            Err(ValidationError::EmptyAddress)
        );
        assert_eq!(
            validate_withdraw_address("5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"),
            Err(ValidationError::InvalidAddress)
        );
        assert_eq!(
            validate_withdraw_address("0x1234"),
            Err(ValidationError::InvalidAddress)
        );
        assert_eq!(
            validate_withdraw_address("0xzzzzb6053f3e94c9b9a09f33669435e7ef1beaed"),
            Err(ValidationError::InvalidAddress)
        );
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1", 6), Ok(1_000_000));
        assert_eq!(parse_amount("1.5", 6), Ok(1_500_000));
        assert_eq!(parse_amount(".25", 6), Ok(250_000));
        assert_eq!(parse_amount("3.", 6), Ok(3_000_000));
        assert_eq!(parse_amount("0.000001", 6), Ok(1));
    }

    #[test]
    fn test_parse_amount_errors() {
        assert_eq!(parse_amount("", 6), Err(ValidationError::EmptyAmount));
        assert_eq!(parse_amount(".", 6), Err(ValidationError::InvalidAmount));
        assert_eq!(parse_amount("-1", 6), Err(ValidationError::InvalidAmount));
        assert_eq!(parse_amount("1.2.3", 6), Err(ValidationError::InvalidAmount));
        assert_eq!(parse_amount("abc", 6), Err(ValidationError::InvalidAmount));
        assert_eq!(
            parse_amount("0.0000001", 6),
            Err(ValidationError::TooManyDecimals(6))
        );
        assert_eq!(parse_amount("0.000", 6), Err(ValidationError::ZeroAmount));
    }

    #[test]
    fn test_validate_amount_balance() {
        let balance = 10_000_000; // 10.0
        assert_eq!(validate_amount("10", balance), Ok(10_000_000));
        assert_eq!(
            validate_amount("10.000001", balance),
            Err(ValidationError::InsufficientBalance("10".to_string()))
        );
    }

    #[test]
    fn test_balance_units_truncates_extra_decimals() {
        assert_eq!(balance_units("100.1234567"), 100_123_456);
        assert_eq!(balance_units("0.0000019"), 1);
        assert_eq!(balance_units("12.5"), 12_500_000);
        assert_eq!(balance_units("0"), 0);
        assert_eq!(balance_units("garbage"), 0);
        assert_eq!(balance_units("1.000000é"), 0);
        assert_eq!(validate_amount("100", balance_units("100.1234567")), Ok(100_000_000));
    }

    #[test]
    fn test_validate_swap() {
        assert_eq!(
            validate_swap("USDT", "USDT", "1", 5_000_000),
            Err(ValidationError::SameCurrency)
        );
        assert_eq!(validate_swap("USDT", "ETH", "1", 5_000_000), Ok(1_000_000));
    }
}
