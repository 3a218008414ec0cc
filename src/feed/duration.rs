use std::time::Duration;

/// Parses an `itunes:duration` value.
///
/// Accepts `H:M:S`, `M:S`, or a bare number of seconds. Returns `None` when
/// any component fails to parse; callers leave the target field untouched
/// in that case, so malformed durations degrade to "absent" instead of
/// failing the decode.
///
/// Components are not range-checked against each other: `"0:90"` is 90
/// seconds.
pub fn parse_duration(raw: &str) -> Option<Duration> {
    let raw = raw.trim();
    let parts: Vec<&str> = raw.split(':').collect();

    let seconds = match parts.as_slice() {
        [hours, minutes, seconds] => {
            component(hours)? * 3600 + component(minutes)? * 60 + component(seconds)?
        }
        [minutes, seconds] => component(minutes)? * 60 + component(seconds)?,
        _ => raw.parse::<u64>().ok()?,
    };

    Some(Duration::from_secs(seconds))
}

fn component(part: &str) -> Option<u64> {
    part.trim().parse::<u32>().ok().map(u64::from)
}
