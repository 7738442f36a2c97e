// Time-of-day utility functions
// Conversions between fractional hours and "HH:MM" strings

/// Parse an `"HH:MM"` string into fractional hours.
///
/// Returns `None` unless the input is exactly two numeric parts separated by
/// a colon, with hours in `0..=23` and minutes in `0..=59`.
pub fn parse_time_string(input: &str) -> Option<f32> {
    let (hours, minutes) = input.trim().split_once(':')?;

    if hours.is_empty()
        || minutes.is_empty()
        || !hours.chars().all(|c| c.is_ascii_digit())
        || !minutes.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }

    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;

    if hours > 23 || minutes > 59 {
        return None;
    }

    Some(hours as f32 + minutes as f32 / 60.0)
}

/// Format fractional hours as `"HH:MM"`
pub fn format_time(time: f32) -> String {
    let total_minutes = (time * 60.0).round() as i32;
    let hours = total_minutes.div_euclid(60);
    let minutes = total_minutes.rem_euclid(60);
    format!("{:02}:{:02}", hours, minutes)
}

/// Format a duration in hours as `"1h 30m"`, `"45m"` or `"2h"`
pub fn format_duration(duration: f32) -> String {
    let total_minutes = (duration * 60.0).round().max(0.0) as u32;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours == 0 {
        format!("{}m", minutes)
    } else if minutes == 0 {
        format!("{}h", hours)
    } else {
        format!("{}h {}m", hours, minutes)
    }
}
