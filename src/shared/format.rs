//! Human-readable formatting for app metadata counters.
//!
//! Mirrors the display conventions of the Aptoide store listing: byte
//! counts collapse into binary-prefixed units, download counts into
//! K/M/B shorthand.

/// Unit ladder for byte counts. Values past the GB tier fall through to TB.
const BYTE_UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Converts a size in bytes into a human-readable representation.
///
/// Returns `None` when the size is missing or zero. Rounds half-to-even
/// at zero decimal places, e.g. `1048576` -> `"1 MB"`, `1536` -> `"2 KB"`.
pub fn format_size(bytes: Option<u64>) -> Option<String> {
    let bytes = match bytes {
        Some(b) if b > 0 => b,
        _ => return None,
    };

    let mut size = bytes as f64;
    for unit in BYTE_UNITS {
        if size < 1024.0 {
            return Some(format!("{size:.0} {unit}"));
        }
        size /= 1024.0;
    }

    Some(format!("{size:.0} TB"))
}

/// Converts a download count into shorthand notation (K, M, B).
///
/// Returns `None` when the count is missing or zero; counts below one
/// thousand are rendered exactly.
pub fn format_downloads(downloads: Option<u64>) -> Option<String> {
    let downloads = match downloads {
        Some(d) if d > 0 => d,
        _ => return None,
    };

    let formatted = if downloads >= 1_000_000_000 {
        format!("{:.0}B", downloads as f64 / 1e9)
    } else if downloads >= 1_000_000 {
        format!("{:.0}M", downloads as f64 / 1e6)
    } else if downloads >= 1_000 {
        format!("{:.0}K", downloads as f64 / 1e3)
    } else {
        downloads.to_string()
    };

    Some(formatted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_absent_or_zero() {
        assert_eq!(format_size(None), None);
        assert_eq!(format_size(Some(0)), None);
    }

    #[test]
    fn test_format_size_unit_tiers() {
        assert_eq!(format_size(Some(1)), Some("1 B".to_string()));
        assert_eq!(format_size(Some(1023)), Some("1023 B".to_string()));
        assert_eq!(format_size(Some(1024)), Some("1 KB".to_string()));
        assert_eq!(format_size(Some(1048576)), Some("1 MB".to_string()));
        assert_eq!(format_size(Some(20971520)), Some("20 MB".to_string()));
        assert_eq!(
            format_size(Some(3 * 1024 * 1024 * 1024)),
            Some("3 GB".to_string())
        );
        assert_eq!(format_size(Some(1u64 << 40)), Some("1 TB".to_string()));
    }

    #[test]
    fn test_format_size_caps_at_tb() {
        // No tier above TB: the remaining magnitude stays as-is.
        assert_eq!(format_size(Some(1u64 << 50)), Some("1024 TB".to_string()));
    }

    #[test]
    fn test_format_size_rounds_half_to_even() {
        assert_eq!(format_size(Some(1536)), Some("2 KB".to_string()));
        assert_eq!(format_size(Some(2560)), Some("2 KB".to_string()));
        assert_eq!(format_size(Some(3584)), Some("4 KB".to_string()));
    }

    #[test]
    fn test_format_downloads_absent_or_zero() {
        assert_eq!(format_downloads(None), None);
        assert_eq!(format_downloads(Some(0)), None);
    }

    #[test]
    fn test_format_downloads_exact_below_thousand() {
        assert_eq!(format_downloads(Some(1)), Some("1".to_string()));
        assert_eq!(format_downloads(Some(999)), Some("999".to_string()));
    }

    #[test]
    fn test_format_downloads_shorthand_tiers() {
        assert_eq!(format_downloads(Some(1_000)), Some("1K".to_string()));
        assert_eq!(format_downloads(Some(450_000)), Some("450K".to_string()));
        assert_eq!(format_downloads(Some(2_000_000)), Some("2M".to_string()));
        assert_eq!(
            format_downloads(Some(3_100_000_000)),
            Some("3B".to_string())
        );
    }

    #[test]
    fn test_format_downloads_rounds_half_to_even() {
        assert_eq!(format_downloads(Some(1_500)), Some("2K".to_string()));
        assert_eq!(format_downloads(Some(2_500)), Some("2K".to_string()));
    }

    #[test]
    fn test_format_downloads_stays_in_threshold_tier() {
        // The tier is picked from the raw count, so 999999 rounds within K.
        assert_eq!(format_downloads(Some(999_999)), Some("1000K".to_string()));
    }
}
