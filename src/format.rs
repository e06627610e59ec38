// Display formatting for raw numeric samples
//
// All three functions are total: missing values ("no data") render as the
// fixed zero-value string instead of failing. Zero and absent are
// intentionally conflated by `format_bytes` and `format_frequency`.

const BYTE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Human-readable byte count with one decimal digit, e.g. `1536` -> "1.5 KB".
/// TB is a hard ceiling: values past 1024 TB stay in TB. Negative inputs are
/// not guarded and render in B as-is.
pub fn format_bytes(bytes: Option<f64>) -> String {
    let Some(bytes) = bytes else {
        return "0 B".to_string();
    };
    if bytes == 0.0 {
        return "0 B".to_string();
    }

    let mut size = bytes;
    let mut unit = 0;
    while size >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    format!("{:.1} {}", size, BYTE_UNITS[unit])
}

/// Percentage with one decimal digit, e.g. `42.567` -> "42.6%". No clamping:
/// out-of-range values pass through as-is.
pub fn format_percentage(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}%"),
        None => "0%".to_string(),
    }
}

/// Frequency in GHz with two decimal digits, e.g. `3.5` -> "3.50 GHz".
pub fn format_frequency(ghz: Option<f64>) -> String {
    match ghz {
        Some(g) if g != 0.0 => format!("{g:.2} GHz"),
        _ => "0 GHz".to_string(),
    }
}
