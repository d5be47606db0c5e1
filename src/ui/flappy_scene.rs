//! Terminal rendering of a [`World`].
//!
//! The play area is drawn by sampling the world at the center of each
//! terminal cell, so the whole 288×512 world always fits whatever space the
//! layout hands us.

use super::game_common::{
    centered_rect, create_game_layout, render_button, render_info_panel_frame, render_status_bar,
};
use super::responsive::{render_too_small, LayoutContext, SizeTier};
use super::{Control, HudState, UiState};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use skyflap::core::assets::{LoadedAssets, Sprite};
use skyflap::flappy::{CrashCause, PillarSide, RunPhase, World};

const TITLE: &str = " Skyflap ";
/// Background columns between stars, in world pixels.
const STAR_SPACING: f64 = 24.0;

/// Draw one frame and record the clickable areas in `ui`.
pub fn render_game(
    frame: &mut Frame,
    world: &World,
    assets: &LoadedAssets,
    ui: &mut UiState,
    hud: &HudState,
) {
    ui.clear_hitboxes();

    let ctx = LayoutContext::from_frame(frame);
    if ctx.tier == SizeTier::TooSmall {
        render_too_small(frame, &ctx);
        return;
    }

    let area = frame.size();
    let layout = create_game_layout(
        frame,
        area,
        TITLE,
        border_color(world.phase()),
        ctx.status_bar_height(),
        ctx.info_panel_width(),
    );

    render_play_area(frame, layout.content, world, assets);
    ui.hitboxes.play_area = Some(layout.content);
    render_score(frame, layout.content, world, hud);

    match world.phase() {
        RunPhase::Idle => {
            let hovered = ui.hovered == Some(Control::Start);
            ui.hitboxes.start = Some(render_title_card(frame, layout.content, hovered));
        }
        RunPhase::Running => {}
        RunPhase::GameOver => {
            let hovered = ui.hovered == Some(Control::Resume);
            ui.hitboxes.resume = Some(render_game_over(frame, layout.content, world, hovered));
        }
    }

    render_status(frame, layout.status_bar, world);
    if layout.info_panel.width > 0 {
        render_info_panel(frame, layout.info_panel, world, hud);
    }
}

fn border_color(phase: RunPhase) -> Color {
    match phase {
        RunPhase::Idle => Color::Cyan,
        RunPhase::Running => Color::Green,
        RunPhase::GameOver => Color::Red,
    }
}

/// What occupies a sampled world point, front to back.
fn sample(world: &World, assets: &LoadedAssets, wx: f64, wy: f64, cell_h: f64) -> Option<Sprite> {
    let player = &world.player;
    if player.visible && player.bounds().contains_point(wx, wy) {
        return Some(assets.bird_frame(player.frame));
    }

    for pillar in &world.obstacles {
        let bounds = pillar.bounds();
        if !bounds.contains_point(wx, wy) {
            continue;
        }
        // The cell nearest the gap gets the cap glyph.
        let near_gap = match pillar.side {
            PillarSide::Bottom => wy - bounds.top() < cell_h,
            PillarSide::Top => bounds.bottom() - wy < cell_h,
        };
        return Some(if near_gap {
            assets.pillar_cap
        } else {
            assets.pillar
        });
    }

    if wy >= world.ground_top() {
        return Some(assets.ground);
    }

    None
}

/// Sparse starfield that scrolls with the parallax offset.
fn is_star(world: &World, wx: f64, row: usize) -> bool {
    let width = world.config.world.width;
    let shifted = (wx + world.background_offset).rem_euclid(width);
    let column = (shifted / STAR_SPACING).floor() as usize;
    (column * 7 + row * 3) % 11 == 0
}

fn render_play_area(frame: &mut Frame, area: Rect, world: &World, assets: &LoadedAssets) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let cell_w = world.config.world.width / width as f64;
    let cell_h = world.config.world.height / height as f64;

    // The bird is always at least one cell, even on tiny terminals.
    let bird_col = (world.player.x / cell_w).floor() as usize;
    let bird_row = (world.player.y / cell_h).floor() as usize;
    let bird = assets.bird_frame(world.player.frame);

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let wy = (row as f64 + 0.5) * cell_h;
        let mut spans = Vec::with_capacity(width);
        for col in 0..width {
            let wx = (col as f64 + 0.5) * cell_w;

            let sprite = if world.player.visible && row == bird_row && col == bird_col {
                Some(bird)
            } else {
                sample(world, assets, wx, wy, cell_h)
            };

            let span = match sprite {
                Some(sprite) => Span::styled(
                    sprite.glyph.to_string(),
                    Style::default().fg(sprite.color),
                ),
                None if is_star(world, wx, row) => Span::styled(
                    assets.background.glyph.to_string(),
                    Style::default().fg(assets.background.color),
                ),
                None => Span::raw(" "),
            };
            spans.push(span);
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_score(frame: &mut Frame, area: Rect, world: &World, hud: &HudState) {
    if world.phase() == RunPhase::Idle || area.height == 0 {
        return;
    }
    let style = if hud.point_flash_ms > 0 {
        Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    };
    let score = Paragraph::new(Span::styled(format!(" {} ", world.score()), style))
        .alignment(Alignment::Center);
    frame.render_widget(score, Rect { height: 1, ..area });
}

/// Title and start button. Returns the button hitbox.
fn render_title_card(frame: &mut Frame, area: Rect, hovered: bool) -> Rect {
    let card = centered_rect(area, 24, 4);
    frame.render_widget(Clear, card);

    let title = Paragraph::new(Line::from(Span::styled(
        "SKYFLAP",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, Rect { height: 1, ..card });

    let button_row = Rect {
        y: card.y + card.height.saturating_sub(2),
        height: 1,
        ..card
    };
    render_button(frame, button_row, "Start", hovered)
}

fn crash_text(cause: Option<CrashCause>) -> &'static str {
    match cause {
        Some(CrashCause::Obstacle) => "Hit a pillar",
        Some(CrashCause::Ground) => "Hit the ground",
        Some(CrashCause::Ceiling) => "Flew too high",
        None => "Crashed",
    }
}

/// Game-over modal. Returns the resume button hitbox.
fn render_game_over(frame: &mut Frame, area: Rect, world: &World, hovered: bool) -> Rect {
    let modal = centered_rect(area, 26, 8);
    frame.render_widget(Clear, modal);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let new_best = world.score() > 0 && world.score() == world.run.best_score;
    let mut lines = vec![
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            crash_text(world.run.crash),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(format!("Score {}  Best {}", world.score(), world.run.best_score)),
    ];
    if new_best {
        lines.push(Line::from(Span::styled(
            "New best!",
            Style::default().fg(Color::Yellow),
        )));
    }
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);

    let button_row = Rect {
        y: inner.y + inner.height.saturating_sub(1),
        height: 1,
        ..inner
    };
    render_button(frame, button_row, "Resume", hovered)
}

fn render_status(frame: &mut Frame, area: Rect, world: &World) {
    let (text, color) = match world.phase() {
        RunPhase::Idle => ("Press Space or click Start".to_string(), Color::Yellow),
        RunPhase::Running => (format!("Score: {}", world.score()), Color::Green),
        RunPhase::GameOver => ("Press Enter or click Resume".to_string(), Color::Red),
    };
    render_status_bar(
        frame,
        area,
        &text,
        color,
        &[("[Space]", "Flap"), ("[Enter]", "Resume"), ("[Q]", "Quit")],
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, world: &World, hud: &HudState) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::DarkGray));
    let phase = match world.phase() {
        RunPhase::Idle => "Ready",
        RunPhase::Running => "Flying",
        RunPhase::GameOver => "Crashed",
    };

    let lines = vec![
        Line::from(vec![
            label(" Score: "),
            Span::styled(
                world.score().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            label(" Best: "),
            Span::styled(
                world.run.best_score.to_string(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            label(" State: "),
            Span::styled(phase, Style::default().fg(border_color(world.phase()))),
        ]),
        Line::from(vec![
            label(" Runs: "),
            Span::raw(hud.runs.to_string()),
        ]),
        Line::from(vec![
            label(" Pillars: "),
            Span::styled(
                world.obstacles.len().to_string(),
                Style::default().fg(Color::Green),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
