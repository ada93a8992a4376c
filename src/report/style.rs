//! Colour palette shared by the renderers.

use crate::grading::{DetailBand, ScoreTier};
use crate::summary::FileCategory;
use comfy_table::{Cell, Color};
use owo_colors::{OwoColorize, Style};

/// Applies colours when enabled; otherwise returns text untouched.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// Colour on unless disabled by config or `NO_COLOR`.
    pub fn new(color: bool) -> Self {
        let no_color = std::env::var_os("NO_COLOR").map_or(false, |v| !v.is_empty());
        Self {
            enabled: color && !no_color,
        }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn paint(&self, text: &str, style: Style) -> String {
        if self.enabled {
            format!("{}", text.style(style))
        } else {
            text.to_string()
        }
    }

    pub fn heading(&self, title: &str) -> String {
        self.paint(title, Style::new().bold().underline())
    }

    pub fn muted(&self, text: &str) -> String {
        self.paint(text, Style::new().dimmed())
    }

    pub fn folder(&self, text: &str) -> String {
        self.paint(text, Style::new().blue().bold())
    }

    pub fn category(&self, text: &str, category: FileCategory) -> String {
        self.paint(text, category_style(category))
    }

    /// Table cell coloured by category; comfy-table measures it correctly.
    pub fn category_cell(&self, text: &str, category: FileCategory) -> Cell {
        let cell = Cell::new(text);
        if !self.enabled {
            return cell;
        }
        cell.fg(match category {
            FileCategory::Pdf => Color::Cyan,
            FileCategory::Word => Color::Yellow,
            FileCategory::Image => Color::Magenta,
            FileCategory::TextCode => Color::Green,
            FileCategory::Other => Color::DarkGrey,
        })
    }

    /// Table cell coloured by rubric band.
    pub fn band_cell(&self, text: &str, band: DetailBand) -> Cell {
        let cell = Cell::new(text);
        if !self.enabled {
            return cell;
        }
        cell.fg(match band {
            DetailBand::Good => Color::Green,
            DetailBand::Fair => Color::Yellow,
            DetailBand::Poor => Color::Red,
        })
    }

    pub fn tier(&self, text: &str, tier: ScoreTier) -> String {
        let style = match tier {
            ScoreTier::Excellent => Style::new().bright_green().bold(),
            ScoreTier::Good => Style::new().green().bold(),
            ScoreTier::Fair => Style::new().yellow().bold(),
            ScoreTier::Poor => Style::new().red().bold(),
        };
        self.paint(text, style)
    }
}

fn category_style(category: FileCategory) -> Style {
    match category {
        FileCategory::Pdf => Style::new().cyan(),
        FileCategory::Word => Style::new().yellow(),
        FileCategory::Image => Style::new().magenta(),
        FileCategory::TextCode => Style::new().green(),
        FileCategory::Other => Style::new().dimmed(),
    }
}

/// Fixed-width bar, e.g. `██████░░░░` for 0.6 at width 10.
pub fn bar(ratio: f64, width: usize) -> String {
    let ratio = if ratio.is_finite() { ratio.clamp(0.0, 1.0) } else { 0.0 };
    let filled = (ratio * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Human-readable byte count.
pub fn human_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KiB", "MiB", "GiB", "TiB"];
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

/// Whole numbers without a trailing `.0`.
pub fn points(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}
