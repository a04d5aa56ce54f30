use time::OffsetDateTime;
use time::macros::format_description;

/// Format a byte count for the size column (B, KB, MB, GB)
pub fn format_size(bytes: u64) -> String {
    const UNITS: [(u64, &str, usize); 3] = [
        (1024 * 1024 * 1024, "GB", 2),
        (1024 * 1024, "MB", 1),
        (1024, "KB", 1),
    ];

    UNITS
        .iter()
        .find(|(scale, _, _)| bytes >= *scale)
        .map(|(scale, unit, precision)| {
            format!("{:.*} {}", *precision, bytes as f64 / *scale as f64, unit)
        })
        .unwrap_or_else(|| format!("{} B", bytes))
}

/// Format a modification time (Unix seconds) as YYYY-MM-DD; 0 means unknown
pub fn format_timestamp(timestamp: i64) -> String {
    if timestamp == 0 {
        return "unknown".to_string();
    }

    OffsetDateTime::from_unix_timestamp(timestamp)
        .ok()
        .and_then(|dt| dt.format(format_description!("[year]-[month]-[day]")).ok())
        .unwrap_or_else(|| "unknown".to_string())
}
