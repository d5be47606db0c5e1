//! Responsive layout.
//!
//! The terminal is classified once per frame; the scene uses the tier to
//! decide whether the info panel and controls line fit.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

/// Terminal size tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SizeTier {
    TooSmall,
    S, // 30x14+: play area only
    M, // 50x20+: narrow info panel
    L, // 80x30+: full info panel
}

const L_MIN_COLS: u16 = 80;
const L_MIN_ROWS: u16 = 30;
const M_MIN_COLS: u16 = 50;
const M_MIN_ROWS: u16 = 20;
const S_MIN_COLS: u16 = 30;
const S_MIN_ROWS: u16 = 14;

#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    pub width_tier: SizeTier,
    pub height_tier: SizeTier,
    /// min(width_tier, height_tier)
    pub tier: SizeTier,
    pub cols: u16,
    pub rows: u16,
}

impl LayoutContext {
    pub fn from_frame(frame: &Frame) -> Self {
        let size = frame.size();
        Self::from_size(size.width, size.height)
    }

    pub fn from_size(cols: u16, rows: u16) -> Self {
        let width_tier = classify(cols, L_MIN_COLS, M_MIN_COLS, S_MIN_COLS);
        let height_tier = classify(rows, L_MIN_ROWS, M_MIN_ROWS, S_MIN_ROWS);
        LayoutContext {
            width_tier,
            height_tier,
            tier: width_tier.min(height_tier),
            cols,
            rows,
        }
    }

    /// Width of the side panel; 0 hides it. Only width matters here.
    pub fn info_panel_width(&self) -> u16 {
        match self.width_tier {
            SizeTier::TooSmall | SizeTier::S => 0,
            SizeTier::M => 18,
            SizeTier::L => 24,
        }
    }

    /// Whether the status bar has room for its second (controls) line.
    pub fn status_bar_height(&self) -> u16 {
        if self.height_tier >= SizeTier::M {
            2
        } else {
            1
        }
    }
}

fn classify(val: u16, l: u16, m: u16, s: u16) -> SizeTier {
    if val >= l {
        SizeTier::L
    } else if val >= m {
        SizeTier::M
    } else if val >= s {
        SizeTier::S
    } else {
        SizeTier::TooSmall
    }
}

/// Shown instead of the game below the minimum size.
pub fn render_too_small(frame: &mut Frame, ctx: &LayoutContext) {
    let area = frame.size();
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            "Terminal too small",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "Need {}x{}, have {}x{}",
                S_MIN_COLS, S_MIN_ROWS, ctx.cols, ctx.rows
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, area);
}
