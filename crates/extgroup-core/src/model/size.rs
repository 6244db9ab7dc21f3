/// Human-readable byte and file counts for summaries.
///
/// Binary multiples (1 KB = 1024 B), labelled with the short forms people
/// expect from a file tool.

const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

/// Format a byte count, e.g. `512 B`, `1.5 KB`, `2.00 GB`.
///
/// One decimal below a gigabyte, two at and above it.
pub fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    if unit >= 2 {
        format!("{value:.2} {}", UNITS[unit])
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}

/// Format a count with `,` thousands separators.
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_sizes_are_plain_bytes() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(500), "500 B");
        assert_eq!(format_size(1023), "1023 B");
    }

    #[test]
    fn kilobytes_and_megabytes_use_one_decimal() {
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(2500), "2.4 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
    }

    #[test]
    fn gigabytes_and_up_use_two_decimals() {
        assert_eq!(format_size(1 << 30), "1.00 GB");
        assert_eq!(format_size(1 << 40), "1.00 TB");
        assert_eq!(format_size(1 << 50), "1024.00 TB");
    }

    #[test]
    fn counts_get_thousands_separators() {
        assert_eq!(format_count(7), "7");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(12_345_678), "12,345,678");
    }
}
