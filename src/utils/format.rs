//! Human-readable sizes, durations and command lines

const BYTE_UNITS: [&str; 7] = ["B", "kB", "MB", "GB", "TB", "PB", "EB"];

/// Decimal byte units with three significant digits: `200 MB`, `1.5 GB`, `512 B`.
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1000 {
        return format!("{bytes} B");
    }

    let exponent = (((bytes as f64).log10() / 3.0).floor() as usize).min(BYTE_UNITS.len() - 1);
    let value = bytes as f64 / 1000f64.powi(exponent as i32);
    format!("{} {}", three_significant(value), BYTE_UNITS[exponent])
}

// value is in [1, 1000)
fn three_significant(value: f64) -> String {
    let integer_digits = if value >= 100.0 {
        3
    } else if value >= 10.0 {
        2
    } else {
        1
    };
    let rendered = format!("{:.*}", 3 - integer_digits, value);
    if rendered.contains('.') {
        rendered
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        rendered
    }
}

/// Compact duration showing at most `unit_count` units: `2h 30m`, `1m 5.2s`, `850ms`.
///
/// Zero-valued units are skipped; seconds keep one (floored) decimal digit.
pub fn format_duration_ms(ms: u64, unit_count: usize) -> String {
    if ms < 1000 {
        return format!("{ms}ms");
    }

    let days = ms / 86_400_000;
    let mut parts: Vec<String> = [
        (days / 365, "y"),
        (days % 365, "d"),
        (ms / 3_600_000 % 24, "h"),
        (ms / 60_000 % 60, "m"),
    ]
    .iter()
    .filter(|(value, _)| *value > 0)
    .map(|(value, unit)| format!("{value}{unit}"))
    .collect();

    let tenths = ms % 60_000 / 100;
    if tenths > 0 {
        let (whole, fraction) = (tenths / 10, tenths % 10);
        if fraction == 0 {
            parts.push(format!("{whole}s"));
        } else {
            parts.push(format!("{whole}.{fraction}s"));
        }
    }

    parts.truncate(unit_count.max(1));
    parts.join(" ")
}

/// Keep at most `max_chars` characters, ending in `...` when something was cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    const OMISSION: &str = "...";

    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(OMISSION.len());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(OMISSION);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, "0 B")]
    #[test_case(999, "999 B")]
    #[test_case(1000, "1 kB")]
    #[test_case(500_000, "500 kB")]
    #[test_case(1_234_567, "1.23 MB")]
    #[test_case(200_000_000, "200 MB")]
    #[test_case(1_500_000_000, "1.5 GB")]
    #[test_case(12_340_000_000, "12.3 GB")]
    fn bytes(input: u64, expected: &str) {
        assert_eq!(format_bytes(input), expected);
    }

    #[test_case(0, "0ms")]
    #[test_case(850, "850ms")]
    #[test_case(1_000, "1s")]
    #[test_case(1_500, "1.5s")]
    #[test_case(65_250, "1m 5.2s")]
    #[test_case(3_661_500, "1h 1m")]
    #[test_case(9_000_000, "2h 30m")]
    #[test_case(8_100_000, "2h 15m")]
    #[test_case(90_061_000, "1d 1h")]
    #[test_case(400 * 86_400_000, "1y 35d")]
    fn durations(input: u64, expected: &str) {
        assert_eq!(format_duration_ms(input, 2), expected);
    }

    #[test]
    fn duration_unit_count_limits_output() {
        assert_eq!(format_duration_ms(3_661_500, 3), "1h 1m 1.5s");
        assert_eq!(format_duration_ms(3_661_500, 0), "1h");
    }

    #[test]
    fn truncation_counts_the_omission() {
        assert_eq!(truncate_chars("short", 32), "short");
        let long = "x".repeat(40);
        let cut = truncate_chars(&long, 32);
        assert_eq!(cut.chars().count(), 32);
        assert!(cut.ends_with("..."));
    }
}
