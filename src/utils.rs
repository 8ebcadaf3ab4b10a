/// Utility helpers for Streamfeed

/// Format an engagement counter the way the feed overlay displays it:
/// millions with one decimal, thousands rounded, everything else verbatim.
pub fn format_count(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.0}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_counts_print_verbatim() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
    }

    #[test]
    fn thousands_round_to_whole_k() {
        assert_eq!(format_count(1_000), "1K");
        assert_eq!(format_count(23_000), "23K");
        // Just below the million cutoff still renders in K.
        assert_eq!(format_count(999_999), "1000K");
    }

    #[test]
    fn millions_keep_one_decimal() {
        assert_eq!(format_count(1_000_000), "1.0M");
        assert_eq!(format_count(1_200_000), "1.2M");
    }
}
