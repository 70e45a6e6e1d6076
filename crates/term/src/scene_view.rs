//! SceneView: maps a core [`Scene`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! World units are scaled down to character cells (10 units per column and
//! 25 per row by default, so an 800x600 viewport fills 80x24 cells). Row 0
//! holds the HUD; the play area starts on row 1.

use crate::core::{DrawItem, DrawKind, Scene, SessionSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{RunOutcome, SessionPhase};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const SKY: Rgb = Rgb::new(18, 22, 38);
const HUD_ROWS: i32 = 1;

/// A lightweight terminal renderer for the runner.
pub struct SceneView {
    units_per_col: f64,
    units_per_row: f64,
}

impl Default for SceneView {
    fn default() -> Self {
        Self {
            units_per_col: 10.0,
            units_per_row: 25.0,
        }
    }
}

impl SceneView {
    pub fn new(units_per_col: f64, units_per_row: f64) -> Self {
        Self {
            units_per_col: units_per_col.max(1.0),
            units_per_row: units_per_row.max(1.0),
        }
    }

    /// Render a frame into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when
    /// the terminal size changes.
    pub fn render_into(&self, scene: &Scene, snap: &SessionSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        if snap.phase != SessionPhase::Idle {
            for item in &scene.items {
                self.draw_item(fb, item, snap.avatar_frame);
            }
        }

        let hud = CellStyle::new(Rgb::new(240, 240, 240), Rgb::new(0, 0, 0)).bold();
        fb.put_str(0, 0, &scene.hud, hud);

        self.draw_overlay(fb, snap);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, scene: &Scene, snap: &SessionSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(scene, snap, viewport, &mut fb);
        fb
    }

    /// Cell span `[start, end)` covered by a world-space interval.
    fn span(start: f64, len: f64, scale: f64) -> (i32, i32) {
        let a = (start / scale).floor();
        let b = ((start + len) / scale).ceil();
        let clamp = |v: f64| v.clamp(i32::MIN as f64 / 2.0, i32::MAX as f64 / 2.0) as i32;
        (clamp(a), clamp(b))
    }

    fn draw_item(&self, fb: &mut FrameBuffer, item: &DrawItem, avatar_frame: u8) {
        let (x0, x1) = Self::span(item.rect.x, item.rect.width, self.units_per_col);
        let (y0, y1) = Self::span(item.rect.y, item.rect.height, self.units_per_row);
        let (x, y, w, h) = (x0, y0 + HUD_ROWS, x1 - x0, y1 - y0);

        match item.kind {
            DrawKind::Background => {
                fb.fill_rect(x, y, w, h, ' ', CellStyle::new(SKY, SKY));
            }
            DrawKind::Platform => {
                let style = CellStyle::new(Rgb::new(120, 180, 90), SKY);
                fb.fill_rect(x, y, w, h, '█', style);
            }
            DrawKind::Obstacle => {
                let style = CellStyle::new(Rgb::new(230, 70, 60), SKY).bold();
                fb.fill_rect(x, y, w, h, '▲', style);
            }
            DrawKind::Goal => {
                let style = CellStyle::new(Rgb::new(250, 210, 70), SKY).bold();
                fb.fill_rect(x, y, w, h, '░', style);
                fb.put_str(x, y, "⚑", style);
            }
            DrawKind::Player => {
                let fg = match avatar_frame {
                    1 => Rgb::new(90, 170, 250),
                    2 => Rgb::new(110, 190, 255),
                    _ => Rgb::new(70, 150, 235),
                };
                fb.fill_rect(x, y, w, h, '█', CellStyle::new(fg, SKY));
            }
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot) {
        let score_line;
        let lines: Vec<&str> = match snap.phase {
            SessionPhase::Idle => vec![
                "TUI RUNNER",
                "",
                "Enter  start",
                "A/D    move",
                "W/Spc  jump",
                "P      pause",
                "Q      quit",
            ],
            SessionPhase::Running if snap.paused => vec!["PAUSED", "", "P  resume", "Esc  menu"],
            SessionPhase::Running => return,
            SessionPhase::GameOver | SessionPhase::LevelTransition => {
                let (title, score) = match snap.result {
                    Some(r) if r.outcome == RunOutcome::Won => ("YOU WIN!", r.score),
                    Some(r) => ("GAME OVER", r.score),
                    None => ("GAME OVER", snap.score),
                };
                score_line = format!("Final score: {score}");
                vec![title, "", &score_line, "", "R  play again", "Esc  menu"]
            }
        };

        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let box_w = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as i32 + 4;
        let box_h = lines.len() as i32 + 2;
        let left = (i32::from(fb.width()) - box_w) / 2;
        let top = (i32::from(fb.height()) - box_h) / 2;

        fb.fill_rect(left, top, box_w, box_h, ' ', style);
        for (i, line) in lines.iter().enumerate() {
            let lw = line.chars().count() as i32;
            fb.put_str(left + (box_w - lw) / 2, top + 1 + i as i32, line, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::level::Level;
    use crate::core::{compose, PlayerState};
    use crate::types::{Rect, RunResult, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};

    fn running_snapshot() -> SessionSnapshot {
        SessionSnapshot {
            phase: SessionPhase::Running,
            player: PlayerState::at(100.0, 300.0),
            ..SessionSnapshot::default()
        }
    }

    fn floor_level() -> Level {
        let mut level = Level::new(1, None, "floor");
        level.add_platform(Rect::new(0.0, 350.0, 400.0, 50.0));
        level
    }

    fn row(fb: &FrameBuffer, y: u16) -> String {
        (0..fb.width()).filter_map(|x| fb.get(x, y)).map(|c| c.ch).collect()
    }

    #[test]
    fn draws_player_and_platform_at_scaled_cells() {
        let snap = running_snapshot();
        let scene = compose(&floor_level(), &snap, VIEWPORT_WIDTH, VIEWPORT_HEIGHT);
        let fb = SceneView::default().render(&scene, &snap, Viewport::new(80, 25));

        assert!(row(&fb, 0).starts_with("Score: 0 | Level: 1"));
        // Player 100..150 x 300..350 -> cols 10..15, rows 12..14 (+1 HUD row).
        assert_eq!(fb.get(10, 13).map(|c| c.ch), Some('█'));
        assert_eq!(fb.get(14, 14).map(|c| c.ch), Some('█'));
        assert_eq!(fb.get(15, 13).map(|c| c.ch), Some(' '));
        // Platform 0..400 x 350..400 -> cols 0..40, rows 15..16.
        assert_eq!(fb.get(39, 15).map(|c| c.ch), Some('█'));
        assert_eq!(fb.get(40, 15).map(|c| c.ch), Some(' '));
    }

    #[test]
    fn scrolled_geometry_is_clipped() {
        let snap = SessionSnapshot {
            camera_x: 300.0,
            ..running_snapshot()
        };
        let scene = compose(&floor_level(), &snap, VIEWPORT_WIDTH, VIEWPORT_HEIGHT);
        let fb = SceneView::default().render(&scene, &snap, Viewport::new(80, 25));
        // Platform now spans screen x -300..100 -> cols 0..10.
        assert_eq!(fb.get(9, 15).map(|c| c.ch), Some('█'));
        assert_eq!(fb.get(10, 15).map(|c| c.ch), Some(' '));
    }

    #[test]
    fn overlays_follow_phase() {
        let view = SceneView::default();
        let vp = Viewport::new(80, 25);
        let level = floor_level();

        let contains = |snap: &SessionSnapshot, text: &str| {
            let scene = compose(&level, snap, VIEWPORT_WIDTH, VIEWPORT_HEIGHT);
            let fb = view.render(&scene, snap, vp);
            (0..fb.height()).any(|y| row(&fb, y).contains(text))
        };

        assert!(contains(&SessionSnapshot::default(), "TUI RUNNER"));
        assert!(!contains(&running_snapshot(), "PAUSED"));
        assert!(contains(&SessionSnapshot { paused: true, ..running_snapshot() }, "PAUSED"));

        let won = SessionSnapshot {
            phase: SessionPhase::LevelTransition,
            result: Some(RunResult {
                score: 300,
                level_number: 3,
                outcome: RunOutcome::Won,
            }),
            ..running_snapshot()
        };
        assert!(contains(&won, "YOU WIN!"));
        assert!(contains(&won, "Final score: 300"));

        let died = SessionSnapshot {
            phase: SessionPhase::GameOver,
            ..running_snapshot()
        };
        assert!(contains(&died, "GAME OVER"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let snap = running_snapshot();
        let scene = compose(&floor_level(), &snap, VIEWPORT_WIDTH, VIEWPORT_HEIGHT);
        let fb = SceneView::default().render(&scene, &snap, Viewport::new(3, 2));
        assert_eq!(fb.cells().len(), 6);
    }
}
