//! Frame driver
//!
//! The host calls [`FrameDriver::frame`] once per display refresh and
//! [`FrameDriver::on_confirm`] from its keyboard handler. Both run on the
//! host's event loop, so input queued between frames is applied at the start
//! of the next one.

use crate::audio::{AudioDirector, AudioSink};
use crate::config::GameConfig;
use crate::consts::MAX_FRAME_MS;
use crate::renderer::{AssetStatus, Renderer, build_frame};
use crate::settings::Settings;
use crate::sim::{GamePhase, GameState, TickInput, tick};

/// Owns the game and its host collaborators
pub struct FrameDriver<R: Renderer, A: AudioSink, S: AssetStatus> {
    state: GameState,
    renderer: R,
    audio: A,
    assets: S,
    director: AudioDirector,
    input: TickInput,
    last_frame_ms: Option<f64>,
    last_phase: GamePhase,
}

impl<R: Renderer, A: AudioSink, S: AssetStatus> FrameDriver<R, A, S> {
    pub fn new(
        config: GameConfig,
        settings: Settings,
        seed: u64,
        renderer: R,
        mut audio: A,
        assets: S,
    ) -> Self {
        let director = AudioDirector::new(settings);
        director.configure(&mut audio);
        let state = GameState::new(config, seed);
        let last_phase = state.phase;
        Self {
            state,
            renderer,
            audio,
            assets,
            director,
            input: TickInput::default(),
            last_frame_ms: None,
            last_phase,
        }
    }

    /// Queue the confirm action for the next frame
    pub fn on_confirm(&mut self) {
        self.input.confirm = true;
    }

    /// Let the demo player drive
    pub fn set_autopilot(&mut self, enabled: bool) {
        self.input.autopilot = enabled;
    }

    pub fn update_settings(&mut self, settings: Settings) {
        self.director.update_settings(settings, &mut self.audio);
    }

    pub fn settings(&self) -> &Settings {
        self.director.settings()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Run one frame at host time `now_ms`: tick, play sounds, draw
    pub fn frame(&mut self, now_ms: f64) {
        let elapsed_ms = match self.last_frame_ms {
            Some(last) => ((now_ms - last).max(0.0) as f32).min(MAX_FRAME_MS),
            None => 0.0,
        };
        self.last_frame_ms = Some(now_ms);

        tick(&mut self.state, &self.input, elapsed_ms);

        // Clear one-shot inputs after processing
        self.input.confirm = false;

        for event in self.state.drain_events() {
            self.director.handle(event, &mut self.audio);
        }

        let phase = self.state.phase;
        if phase != self.last_phase {
            log::debug!("Phase {:?} -> {:?}", self.last_phase, phase);
            self.last_phase = phase;
        }

        let frame = build_frame(&self.state, &self.assets);
        self.renderer.draw(&frame);
    }
}
