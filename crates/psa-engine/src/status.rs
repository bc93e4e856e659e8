/// Semantic category derived from a container's raw status text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCategory {
    Running,
    Healthy,
    Unhealthy,
    Stopped,
    Created,
    Restarting,
    Unknown,
}

/// How much of the raw status to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMode {
    /// Uptime phrase only, health suffix removed
    Compact,
    /// Raw status as reported
    Full,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticStatus {
    pub category: StatusCategory,
    pub text: String,
}

/// Interpret a raw status such as "Up 3 hours (healthy)" or "Exited (1) 2 days ago".
///
/// "unhealthy" contains "healthy", so it has to be checked first.
pub fn interpret(raw: &str, mode: StatusMode) -> SemanticStatus {
    let status = raw.trim();

    let category = if status.starts_with("Up") {
        if status.contains("unhealthy") {
            StatusCategory::Unhealthy
        } else if status.contains("healthy") {
            StatusCategory::Healthy
        } else {
            StatusCategory::Running
        }
    } else if status.starts_with("Exited") {
        StatusCategory::Stopped
    } else if status.starts_with("Created") {
        StatusCategory::Created
    } else if status.starts_with("Restarting") {
        StatusCategory::Restarting
    } else {
        StatusCategory::Unknown
    };

    let text = match (category, mode) {
        (StatusCategory::Healthy | StatusCategory::Unhealthy, StatusMode::Compact) => {
            uptime_phrase(status)
        }
        _ => status,
    };

    SemanticStatus {
        category,
        text: text.to_string(),
    }
}

fn uptime_phrase(status: &str) -> &str {
    status.split(" (").next().unwrap_or(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_healthy_compact_strips_suffix() {
        let status = interpret("Up 3 hours (healthy)", StatusMode::Compact);
        assert_eq!(status.category, StatusCategory::Healthy);
        assert_eq!(status.text, "Up 3 hours");
    }

    #[test]
    fn test_healthy_full_keeps_suffix() {
        let status = interpret("Up 3 hours (healthy)", StatusMode::Full);
        assert_eq!(status.category, StatusCategory::Healthy);
        assert_eq!(status.text, "Up 3 hours (healthy)");
    }

    #[test]
    fn test_unhealthy_is_never_healthy() {
        for mode in [StatusMode::Compact, StatusMode::Full] {
            let status = interpret("Up 2 hours (unhealthy)", mode);
            assert_eq!(status.category, StatusCategory::Unhealthy);
        }
        assert_eq!(
            interpret("Up 2 hours (unhealthy)", StatusMode::Compact).text,
            "Up 2 hours"
        );
    }

    #[test]
    fn test_running_without_health() {
        let status = interpret("Up 5 minutes", StatusMode::Compact);
        assert_eq!(status.category, StatusCategory::Running);
        assert_eq!(status.text, "Up 5 minutes");
    }

    #[test]
    fn test_health_starting_is_running() {
        let status = interpret("Up 4 seconds (health: starting)", StatusMode::Compact);
        assert_eq!(status.category, StatusCategory::Running);
        assert_eq!(status.text, "Up 4 seconds (health: starting)");
    }

    #[test]
    fn test_lifecycle_prefixes() {
        let cases = [
            ("Exited (1) 2 days ago", StatusCategory::Stopped),
            ("Created", StatusCategory::Created),
            ("Restarting (1) 3 seconds ago", StatusCategory::Restarting),
            ("Paused", StatusCategory::Unknown),
            ("", StatusCategory::Unknown),
        ];

        for (raw, expected) in cases {
            let status = interpret(raw, StatusMode::Compact);
            assert_eq!(status.category, expected, "{}", raw);
            assert_eq!(status.text, raw);
        }
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let status = interpret("  Exited (0) 5 minutes ago \n", StatusMode::Full);
        assert_eq!(status.category, StatusCategory::Stopped);
        assert_eq!(status.text, "Exited (0) 5 minutes ago");
    }
}
