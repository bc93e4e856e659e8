use super::theme::Theme;
use owo_colors::Style;
use psa_engine::{SemanticStatus, StatusCategory};

pub fn marker(category: StatusCategory) -> Option<&'static str> {
    match category {
        StatusCategory::Running => Some("🟢"),
        StatusCategory::Healthy => Some("💚"),
        StatusCategory::Unhealthy => Some("🧡"),
        StatusCategory::Stopped => Some("🔴"),
        StatusCategory::Created => Some("🟡"),
        StatusCategory::Restarting => Some("🔥"),
        StatusCategory::Unknown => None,
    }
}

fn style(category: StatusCategory, theme: &Theme) -> Option<Style> {
    match category {
        StatusCategory::Running | StatusCategory::Healthy => Some(theme.running),
        StatusCategory::Unhealthy => Some(theme.unhealthy),
        StatusCategory::Stopped => Some(theme.stopped),
        StatusCategory::Created => Some(theme.created),
        StatusCategory::Restarting => Some(theme.restarting),
        StatusCategory::Unknown => None,
    }
}

/// "<marker> <styled text>", or the bare text for unknown states.
pub fn format_status(status: &SemanticStatus, theme: &Theme) -> String {
    match (marker(status.category), style(status.category, theme)) {
        (Some(marker), Some(style)) => format!("{} {}", marker, theme.paint(style, &status.text)),
        _ => status.text.clone(),
    }
}
