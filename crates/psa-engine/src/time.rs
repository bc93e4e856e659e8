use chrono::{DateTime, Duration, Utc};

/// Format an elapsed span in descending units ("2 days, 3 hours").
///
/// Minutes are dropped once the span reaches a day and seconds once it
/// reaches an hour. Returns "Just now" when nothing is left to show.
pub fn humanize_duration(d: Duration) -> String {
    let total = d.num_seconds().max(0);

    let days = total / 86_400;
    let hours = (total / 3_600) % 24;
    let minutes = (total / 60) % 60;
    let seconds = total % 60;

    let mut parts = Vec::new();

    if days > 0 {
        parts.push(plural(days, "day"));
    }
    if hours > 0 {
        parts.push(plural(hours, "hour"));
    }
    if minutes > 0 && days == 0 {
        parts.push(plural(minutes, "minute"));
    }
    if seconds > 0 && hours == 0 && days == 0 {
        parts.push(plural(seconds, "second"));
    }

    if parts.is_empty() {
        return "Just now".to_string();
    }

    parts.join(", ")
}

/// Format a point in time as a coarse phrase relative to `now` ("3 days ago").
pub fn relative_time(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(at);

    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if elapsed < Duration::minutes(1) {
        "Just now".to_string()
    } else if elapsed < Duration::hours(1) {
        ago(minutes, "minute")
    } else if elapsed < Duration::days(1) {
        ago(hours, "hour")
    } else if elapsed < Duration::days(30) {
        if days == 1 {
            "Yesterday".to_string()
        } else {
            ago(days, "day")
        }
    } else if elapsed < Duration::days(365) {
        ago(days / 30, "month")
    } else {
        ago(days / 365, "year")
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

fn ago(count: i64, unit: &str) -> String {
    format!("{} ago", plural(count, unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(n: i64) -> Duration {
        Duration::seconds(n)
    }

    #[test]
    fn test_humanize_zero_is_just_now() {
        assert_eq!(humanize_duration(secs(0)), "Just now");
    }

    #[test]
    fn test_humanize_negative_is_just_now() {
        assert_eq!(humanize_duration(secs(-30)), "Just now");
    }

    #[test]
    fn test_humanize_seconds_only() {
        assert_eq!(humanize_duration(secs(1)), "1 second");
        assert_eq!(humanize_duration(secs(45)), "45 seconds");
    }

    #[test]
    fn test_humanize_minutes_and_seconds() {
        assert_eq!(humanize_duration(secs(125)), "2 minutes, 5 seconds");
    }

    #[test]
    fn test_humanize_hours_drop_seconds() {
        // 1h 1m 1s
        assert_eq!(humanize_duration(secs(3_661)), "1 hour, 1 minute");
    }

    #[test]
    fn test_humanize_days_drop_minutes() {
        // 2d 3h 4m 5s
        let d = secs(2 * 86_400 + 3 * 3_600 + 4 * 60 + 5);
        assert_eq!(humanize_duration(d), "2 days, 3 hours");
    }

    #[test]
    fn test_humanize_exact_day() {
        assert_eq!(humanize_duration(secs(86_400)), "1 day");
    }

    #[test]
    fn test_humanize_never_emits_zero_unit() {
        for n in (0..200_000).step_by(997) {
            let text = humanize_duration(secs(n));
            assert_eq!(text == "Just now", n == 0, "{} -> {}", n, text);
            if n == 0 {
                continue;
            }
            for part in text.split(", ") {
                let count: i64 = part.split(' ').next().unwrap().parse().unwrap();
                assert!(count > 0, "{} -> {}", n, text);
            }
        }
    }

    #[test]
    fn test_relative_buckets() {
        let now = Utc::now();
        let cases = [
            (45, "Just now"),
            (90, "1 minute ago"),
            (30 * 60, "30 minutes ago"),
            (3_600, "1 hour ago"),
            (5 * 3_600, "5 hours ago"),
            (86_400, "Yesterday"),
            (3 * 86_400, "3 days ago"),
            (30 * 86_400, "1 month ago"),
            (95 * 86_400, "3 months ago"),
            (365 * 86_400, "1 year ago"),
            (800 * 86_400, "2 years ago"),
        ];

        for (elapsed, expected) in cases {
            assert_eq!(
                relative_time(now - secs(elapsed), now),
                expected,
                "elapsed {}s",
                elapsed
            );
        }
    }

    #[test]
    fn test_relative_future_is_just_now() {
        let now = Utc::now();
        assert_eq!(relative_time(now + secs(600), now), "Just now");
    }
}
