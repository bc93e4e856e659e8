use owo_colors::{OwoColorize, Style};
use std::fmt;

const DIVIDER_WIDTH: usize = 80;

/// Styles used by the renderer.
///
/// Built once per run and passed into the renderer; a plain theme renders
/// the same text without escape codes.
#[derive(Debug, Clone)]
pub struct Theme {
    enabled: bool,
    pub bold: Style,
    pub dim: Style,
    pub container_id: Style,
    pub name: Style,
    pub image: Style,
    pub command: Style,
    pub running: Style,
    pub stopped: Style,
    pub created: Style,
    pub unhealthy: Style,
    pub restarting: Style,
    pub port_public: Style,
    pub divider: Style,
}

impl Theme {
    pub fn colored() -> Self {
        Self {
            enabled: true,
            bold: Style::new().bold(),
            dim: Style::new().dimmed(),
            container_id: Style::new().truecolor(0x88, 0x88, 0x88),
            name: Style::new().bold().truecolor(0x5D, 0xAD, 0xE2),
            image: Style::new().truecolor(0x2E, 0xCC, 0x71),
            command: Style::new().dimmed().italic(),
            running: Style::new().truecolor(0x2E, 0xCC, 0x71),
            stopped: Style::new().truecolor(0xE7, 0x4C, 0x3C),
            created: Style::new().truecolor(0xF1, 0xC4, 0x0F),
            unhealthy: Style::new().truecolor(0xE6, 0x7E, 0x22),
            restarting: Style::new().bold().truecolor(0xC0, 0x39, 0x2B),
            port_public: Style::new().bold().truecolor(0xE6, 0x7E, 0x22),
            divider: Style::new().truecolor(0x33, 0x33, 0x33),
        }
    }

    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::colored()
        }
    }

    pub fn for_color(enabled: bool) -> Self {
        if enabled {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    pub fn paint<T: fmt::Display>(&self, style: Style, text: T) -> String {
        if self.enabled {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn divider(&self) -> String {
        self.paint(self.divider, "─".repeat(DIVIDER_WIDTH))
    }
}
