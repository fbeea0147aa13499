//! Formatting helpers for report output.

/// Formats milliseconds: below one second as "N ms", above as seconds.
#[must_use]
pub fn format_millis(millis: f64) -> String {
    if !millis.is_finite() || millis < 0.0 {
        return "?? ms".to_string();
    }
    let rounded = millis.round();
    if rounded < 1000.0 {
        format!("{rounded:.0} ms")
    } else {
        format!("{:.2} s", millis / 1000.0)
    }
}

/// Formats seconds as HH:MM:SS (e.g., 3725.0 -> "01:02:05"). Returns "??:??:??" for invalid inputs.
#[must_use]
pub fn format_duration_secs(seconds: f64) -> String {
    if seconds < 0.0 || !seconds.is_finite() {
        return "??:??:??".to_string();
    }

    let total_seconds = seconds as u64;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// "WxH", or "unknown" when either side is missing.
#[must_use]
pub fn format_resolution(width: Option<u32>, height: Option<u32>) -> String {
    match (width, height) {
        (Some(w), Some(h)) => format!("{w}x{h}"),
        _ => "unknown".to_string(),
    }
}

/// Frame rate with up to three decimals, trailing zeros dropped.
#[must_use]
pub fn format_fps(fps: Option<f64>) -> String {
    match fps {
        Some(f) if f.is_finite() && f > 0.0 => {
            let text = format!("{f:.3}");
            let text = text.trim_end_matches('0').trim_end_matches('.');
            format!("{text} fps")
        }
        _ => "unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_millis() {
        assert_eq!(format_millis(0.0), "0 ms");
        assert_eq!(format_millis(412.4), "412 ms");
        assert_eq!(format_millis(999.4), "999 ms");
        assert_eq!(format_millis(999.6), "1.00 s");
        assert_eq!(format_millis(1500.0), "1.50 s");
        assert_eq!(format_millis(f64::NAN), "?? ms");
    }

    #[test]
    fn test_format_duration_secs() {
        assert_eq!(format_duration_secs(3725.0), "01:02:05");
        assert_eq!(format_duration_secs(59.9), "00:00:59");
        assert_eq!(format_duration_secs(-1.0), "??:??:??");
    }

    #[test]
    fn test_format_resolution() {
        assert_eq!(format_resolution(Some(352), Some(288)), "352x288");
        assert_eq!(format_resolution(Some(352), None), "unknown");
    }

    #[test]
    fn test_format_fps() {
        assert_eq!(format_fps(Some(25.0)), "25 fps");
        assert_eq!(format_fps(Some(29.97)), "29.97 fps");
        assert_eq!(format_fps(Some(23.976023)), "23.976 fps");
        assert_eq!(format_fps(None), "unknown");
        assert_eq!(format_fps(Some(0.0)), "unknown");
    }
}
