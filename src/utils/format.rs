//! Formatting utilities for dates, addresses, and amounts.

use crate::config::eth_address;

/// Format a Unix timestamp as an ISO date (`YYYY-MM-DD`, UTC).
pub fn format_date_iso(timestamp: u64) -> String {
    let (year, month, day) = civil_from_days((timestamp / 86_400) as i64);
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Format a Unix timestamp as `YYYY-MM-DD HH:MM` (UTC).
pub fn format_datetime(timestamp: u64) -> String {
    let secs = timestamp % 86_400;
    format!(
        "{} {:02}:{:02}",
        format_date_iso(timestamp),
        secs / 3600,
        (secs % 3600) / 60
    )
}

/// Days since 1970-01-01 to a proleptic Gregorian (year, month, day).
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    // Shift the epoch to 0000-03-01 so leap days fall at the end of an era year.
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

/// Format Ethereum address for display (0x1234...5678).
pub fn format_eth_address(address: &str) -> String {
    if address.len() >= eth_address::FULL_LEN && address.is_ascii() {
        format!(
            "{}...{}",
            &address[..eth_address::PREFIX_LEN],
            &address[eth_address::SUFFIX_START..]
        )
    } else {
        address.to_string()
    }
}

/// Format an integer amount in base units as a decimal string.
///
/// Trailing fractional zeros are dropped (`1_500_000` with 6 decimals is
/// `"1.5"`).
pub fn format_amount(base_units: u128, decimals: u32) -> String {
    let scale = 10u128.pow(decimals);
    let whole = base_units / scale;
    let frac = base_units % scale;
    if frac == 0 {
        return whole.to_string();
    }
    let frac = format!("{:0width$}", frac, width = decimals as usize);
    format!("{}.{}", whole, frac.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_iso() {
        // Unix epoch
        assert_eq!(format_date_iso(0), "1970-01-01");
        // 2024-01-01 00:00:00 UTC = 1704067200
        assert_eq!(format_date_iso(1704067200), "2024-01-01");
        // 2024-02-29 (leap day)
        assert_eq!(format_date_iso(1709164800), "2024-02-29");
    }

    #[test]
    fn test_format_date_century_rules() {
        // 2000 is a leap year, 2100 is not
        assert_eq!(format_date_iso(951782400), "2000-02-29");
        assert_eq!(format_date_iso(4107542400), "2100-03-01");
    }

    #[test]
    fn test_format_datetime() {
        // 2024-01-01 13:05 UTC
        assert_eq!(format_datetime(1704067200 + 13 * 3600 + 5 * 60), "2024-01-01 13:05");
    }

    #[test]
    fn test_format_eth_address() {
        let addr = "0x1234567890abcdef1234567890abcdef12345678";
        assert_eq!(format_eth_address(addr), "0x1234...5678");
        assert_eq!(format_eth_address("short"), "short");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0, 6), "0");
        assert_eq!(format_amount(1_500_000, 6), "1.5");
        assert_eq!(format_amount(12_000_000, 6), "12");
        assert_eq!(format_amount(1, 6), "0.000001");
        assert_eq!(format_amount(42, 0), "42");
    }
}
