//! Run lifecycle: start, level progression, death, victory.

use tracing::{debug, info, trace};

use crate::camera::Camera;
use crate::config::ViewportSize;
use crate::level::{Level, LevelLoader, LevelSource};
use crate::physics::{self, StepOutcome};
use crate::player::PlayerState;
use crate::scene::{self, Scene};
use crate::snapshot::SessionSnapshot;
use crate::types::{
    InputEvent, RunOutcome, RunResult, SessionPhase, AVATAR_FRAMES, AVATAR_SWAP_DELAY, MAX_LEVELS,
    SCORE_PER_LEVEL,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeathCause {
    FellOut,
    HitObstacle,
}

/// Last transition, consumed by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionEvent {
    /// A level was cleared and the next one loaded
    LevelAdvanced { level_number: u8, score: u32 },
    Died { cause: DeathCause, result: RunResult },
    Won { result: RunResult },
}

/// Owns the player, camera and active level for one run at a time.
///
/// The host calls [`GameSession::tick`] once per frame and forwards input
/// through [`GameSession::handle_input`].
#[derive(Debug)]
pub struct GameSession<S> {
    loader: LevelLoader<S>,
    viewport: ViewportSize,
    phase: SessionPhase,
    paused: bool,
    /// Monotonic run id (increments on every new run).
    run_id: u32,
    level_number: u8,
    score: u32,
    level: Level,
    player: PlayerState,
    camera: Camera,
    tick_count: u64,
    avatar_frame: u8,
    avatar_ticks: u32,
    last_event: Option<SessionEvent>,
    result: Option<RunResult>,
}

impl<S: LevelSource> GameSession<S> {
    pub fn new(source: S, viewport: ViewportSize) -> Self {
        Self::with_loader(LevelLoader::new(source), viewport)
    }

    pub fn with_loader(loader: LevelLoader<S>, viewport: ViewportSize) -> Self {
        Self {
            loader,
            viewport,
            phase: SessionPhase::Idle,
            paused: false,
            run_id: 0,
            level_number: 1,
            score: 0,
            level: Level::default(),
            player: PlayerState::spawn(),
            camera: Camera::new(),
            tick_count: 0,
            avatar_frame: 1,
            avatar_ticks: 0,
            last_event: None,
            result: None,
        }
    }

    /// Begin a run unless one is already in progress.
    pub fn start(&mut self) {
        if self.phase == SessionPhase::Running {
            return;
        }
        self.begin_run();
    }

    /// Abandon whatever is happening and begin a fresh run.
    pub fn restart(&mut self) {
        self.begin_run();
    }

    /// Return to idle, discarding the current run.
    pub fn dismiss(&mut self) {
        if self.phase == SessionPhase::Idle {
            return;
        }
        debug!(run_id = self.run_id, "run dismissed");
        self.phase = SessionPhase::Idle;
        self.paused = false;
        self.player = PlayerState::spawn();
        self.camera.reset();
    }

    fn begin_run(&mut self) {
        self.run_id = self.run_id.wrapping_add(1);
        self.phase = SessionPhase::Running;
        self.paused = false;
        self.score = 0;
        self.level_number = 1;
        self.tick_count = 0;
        self.avatar_frame = 1;
        self.avatar_ticks = 0;
        self.last_event = None;
        self.result = None;
        self.player = PlayerState::spawn();
        self.enter_level();
        info!(run_id = self.run_id, "run started");
    }

    /// Load the current level number and put the player at its spawn point.
    fn enter_level(&mut self) {
        self.level = self.loader.load_numbered(self.level_number);
        self.player.respawn();
        self.camera.reset();
        info!(
            level_number = self.level_number,
            level_name = self.level.level_name(),
            level_width = self.level.level_width(),
            "level entered"
        );
    }

    /// Apply one input event. Returns true if it changed anything.
    ///
    /// Input is ignored outside a running session. While paused only the pause
    /// toggle, escape and key releases are accepted.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        if self.phase != SessionPhase::Running {
            return false;
        }
        match event {
            InputEvent::Pause => {
                self.paused = !self.paused;
                debug!(paused = self.paused, "pause toggled");
                true
            }
            InputEvent::Escape => {
                self.dismiss();
                true
            }
            InputEvent::MoveLeftRelease | InputEvent::MoveRightRelease => {
                self.player.apply_input(event)
            }
            _ if self.paused => false,
            _ => self.player.apply_input(event),
        }
    }

    /// Advance the simulation by one frame. Returns false when nothing ran
    /// (not running, or paused).
    pub fn tick(&mut self) -> bool {
        if self.phase != SessionPhase::Running || self.paused {
            return false;
        }
        self.tick_count = self.tick_count.wrapping_add(1);

        match physics::step(&mut self.player, &self.level, self.viewport.height) {
            StepOutcome::Continue => {
                self.camera
                    .update(self.player.x, self.viewport.width, self.level.level_width());
                self.advance_avatar();
                trace!(x = self.player.x, y = self.player.y, vy = self.player.vy, "tick");
            }
            StepOutcome::FellOut => self.game_over(DeathCause::FellOut),
            StepOutcome::HitObstacle => self.game_over(DeathCause::HitObstacle),
            StepOutcome::ReachedGoal => self.level_complete(),
        }
        true
    }

    fn advance_avatar(&mut self) {
        self.avatar_ticks += 1;
        if self.avatar_ticks >= AVATAR_SWAP_DELAY {
            self.avatar_ticks = 0;
            self.avatar_frame = self.avatar_frame % AVATAR_FRAMES + 1;
        }
    }

    fn game_over(&mut self, cause: DeathCause) {
        let result = self.finish(RunOutcome::Died);
        self.phase = SessionPhase::GameOver;
        self.last_event = Some(SessionEvent::Died { cause, result });
        info!(?cause, score = result.score, level_number = result.level_number, "run lost");
    }

    fn level_complete(&mut self) {
        self.score = self.score.saturating_add(SCORE_PER_LEVEL);
        self.phase = SessionPhase::LevelTransition;

        if self.level_number < MAX_LEVELS {
            self.level_number += 1;
            self.enter_level();
            self.phase = SessionPhase::Running;
            self.last_event = Some(SessionEvent::LevelAdvanced {
                level_number: self.level_number,
                score: self.score,
            });
        } else {
            let result = self.finish(RunOutcome::Won);
            self.last_event = Some(SessionEvent::Won { result });
            info!(score = result.score, "run won");
        }
    }

    fn finish(&mut self, outcome: RunOutcome) -> RunResult {
        let result = RunResult {
            score: self.score,
            level_number: self.level_number,
            outcome,
        };
        self.result = Some(result);
        result
    }

    /// Last transition since the previous call.
    pub fn take_last_event(&mut self) -> Option<SessionEvent> {
        self.last_event.take()
    }

    /// Final result of the run, once it has ended.
    pub fn result(&self) -> Option<RunResult> {
        self.result
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn run_id(&self) -> u32 {
        self.run_id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level_number(&self) -> u8 {
        self.level_number
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn loader(&self) -> &LevelLoader<S> {
        &self.loader
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.phase = self.phase;
        out.paused = self.paused;
        out.run_id = self.run_id;
        out.level_number = self.level_number;
        out.score = self.score;
        out.tick_count = self.tick_count;
        out.player = self.player;
        out.camera_x = self.camera.camera_x();
        out.target_camera_x = self.camera.target_camera_x();
        out.level_width = self.level.level_width();
        out.avatar_frame = self.avatar_frame;
        out.result = self.result;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut snap = SessionSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill `out` with this frame's drawable scene.
    pub fn scene_into(&self, out: &mut Scene) {
        let snap = self.snapshot();
        scene::compose_into(out, &self.level, &snap, self.viewport.width, self.viewport.height);
    }

    pub fn scene(&self) -> Scene {
        let mut out = Scene::new();
        self.scene_into(&mut out);
        out
    }
}
