//! The default time grammar used by duration arguments: one or more
//! `<amount><unit>` groups such as `500ms`, `30s` or `1h30m`.

use once_cell::sync::Lazy;
use regex::Regex;
use std::time::Duration;

static GROUP_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new("(?i)([0-9]+)(ms|s|m|h|d)").unwrap());
static FULL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new("(?i)^(?:[0-9]+(?:ms|s|m|h|d))+$").unwrap());

pub fn parse_duration(input: &str) -> Option<Duration> {
    if !FULL_REGEX.is_match(input) {
        return None;
    }

    let mut total = Duration::ZERO;
    for caps in GROUP_REGEX.captures_iter(input) {
        let amount: u64 = caps[1].parse().ok()?;
        let millis_per_unit: u64 = match caps[2].to_ascii_lowercase().as_str() {
            "ms" => 1,
            "s" => 1_000,
            "m" => 60_000,
            "h" => 3_600_000,
            "d" => 86_400_000,
            _ => unreachable!(),
        };
        let millis = amount.checked_mul(millis_per_unit)?;
        total = total.checked_add(Duration::from_millis(millis))?;
    }
    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_units() {
        assert_eq!(parse_duration("1ms"), Some(Duration::from_millis(1)));
        assert_eq!(parse_duration("1s"), Some(Duration::from_secs(1)));
        assert_eq!(parse_duration("1m"), Some(Duration::from_secs(60)));
        assert_eq!(parse_duration("1h"), Some(Duration::from_secs(3600)));
        assert_eq!(parse_duration("1d"), Some(Duration::from_secs(86400)));
    }

    #[test]
    fn combined_groups() {
        assert_eq!(parse_duration("1h30m"), Some(Duration::from_secs(5400)));
        assert_eq!(parse_duration("2S500MS"), Some(Duration::from_millis(2500)));
    }

    #[test]
    fn malformed() {
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("10"), None);
        assert_eq!(parse_duration("m"), None);
        assert_eq!(parse_duration("1w"), None);
        assert_eq!(parse_duration("1h 30m"), None);
        assert_eq!(parse_duration("-1s"), None);
    }

    #[test]
    fn overflow_is_rejected() {
        assert_eq!(parse_duration("99999999999999999999d"), None);
        assert_eq!(parse_duration("999999999999999d"), None);
    }
}
