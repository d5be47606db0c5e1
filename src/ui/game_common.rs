//! Layout and widgets shared by the game screens.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Areas returned by [`create_game_layout`].
pub struct GameLayout {
    /// Play area, inside the outer border.
    pub content: Rect,
    /// Status bar under the play area (1 or 2 lines).
    pub status_bar: Rect,
    /// Side panel; zero-width when hidden.
    pub info_panel: Rect,
}

/// Outer border with the play area on the left and an optional info panel
/// on the right:
///
/// ```text
/// ┌─ Title ─────────────────────────┬─ Info ──────┐
/// │   [play area]                   │  [info]     │
/// │ [status bar]                    │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    status_height: u16,
    info_panel_width: u16,
) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(info_panel_width)])
        .split(inner);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(status_height)])
        .split(h_chunks[0]);

    GameLayout {
        content: v_chunks[0],
        status_bar: v_chunks[1],
        info_panel: h_chunks[1],
    }
}

/// Status message on the first line, `(key, action)` hints on the second
/// when the area has room for it.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }
        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Bordered side panel. Returns the inner area.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// A rect of `width`×`height` centered in `area`, clipped to it.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// One-line clickable label. Hovered buttons are drawn inverted. Returns the
/// area the button occupies so pointer events can be hit-tested against it.
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, hovered: bool) -> Rect {
    let text = format!("[ {} ]", label);
    let width = (text.chars().count() as u16).min(area.width);
    let rect = Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height.min(1));

    let style = if hovered {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    };
    frame.render_widget(Paragraph::new(Span::styled(text, style)), rect);
    rect
}

/// True when terminal cell (`col`, `row`) is inside `rect`.
pub fn rect_contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x && col < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_clips() {
        let area = Rect::new(10, 5, 20, 6);
        assert_eq!(centered_rect(area, 10, 2), Rect::new(15, 7, 10, 2));
        assert_eq!(centered_rect(area, 50, 50), area);
    }

    #[test]
    fn test_rect_contains_is_half_open() {
        let rect = Rect::new(4, 2, 3, 1);
        assert!(rect_contains(rect, 4, 2));
        assert!(rect_contains(rect, 6, 2));
        assert!(!rect_contains(rect, 7, 2));
        assert!(!rect_contains(rect, 5, 3));
    }
}
