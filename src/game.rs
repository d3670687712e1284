//! Fixed-cadence game loop
//!
//! Each iteration: poll input, run one simulation tick, present a frame, then
//! sleep for the fixed tick delay. Quit is only noticed at the top of an
//! iteration, so a tick in progress always finishes.

use std::time::Duration;

use crate::error::{RenderError, SetupError};
use crate::platform::{Controls, InputSource, Sleeper};
use crate::renderer::{Frame, RenderSink, build_frame};
use crate::settings::Settings;
use crate::sim::{ContactState, Level, MovementIntent, Player, SimParams, TickReport, tick};

/// Counters reported when the loop ends
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub ticks: u64,
    pub jumps: u64,
    pub respawns: u64,
    pub final_player: Player,
}

/// Simulation instance: owns the level and the player
#[derive(Debug, Clone)]
pub struct Game {
    params: SimParams,
    level: Level,
    player: Player,
    tick_delay: Duration,
    ticks: u64,
    jumps: u64,
    respawns: u64,
}

impl Game {
    /// Build a game from validated settings and the level they describe
    pub fn new(settings: &Settings) -> Result<Self, SetupError> {
        settings.validate()?;
        Ok(Self::with_level(settings, settings.build_level()))
    }

    /// Build a game around an explicit level. Settings must already be valid.
    pub fn with_level(settings: &Settings, level: Level) -> Self {
        let params = SimParams::from(settings);
        Self {
            params,
            level,
            player: Player::new(params.spawn),
            tick_delay: settings.tick_delay(),
            ticks: 0,
            jumps: 0,
            respawns: 0,
        }
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advance one tick with the given intent
    pub fn step(&mut self, intent: MovementIntent) -> TickReport {
        let before = self.player.contact_state();
        let report = tick(&mut self.player, &self.level, &intent, &self.params);
        self.ticks += 1;

        if report.jumped {
            self.jumps += 1;
        }
        if report.respawned {
            self.respawns += 1;
            log::debug!("tick {}: fell out of the world, respawned", self.ticks);
        }

        let after = self.player.contact_state();
        if before != after {
            log::trace!(
                "tick {}: {:?} -> {:?} ({:?})",
                self.ticks,
                before,
                after,
                report.resolution.vertical
            );
        }

        report
    }

    /// Draw requests for the current state
    pub fn frame(&self) -> Frame {
        build_frame(&self.level, &self.player, self.params.player_size)
    }

    /// Apply one input snapshot. Returns `None` when it asks to quit.
    pub fn handle(&mut self, controls: Controls) -> Option<TickReport> {
        if controls.quit {
            return None;
        }
        Some(self.step(controls.intent()))
    }

    /// Run until the input source reports quit
    pub fn run(
        &mut self,
        input: &mut impl InputSource,
        sink: &mut impl RenderSink,
        sleeper: &mut impl Sleeper,
    ) -> Result<RunSummary, RenderError> {
        log::info!(
            "Running with {} tiles, tick delay {:?}",
            self.level.len(),
            self.tick_delay
        );

        while self.handle(input.poll()).is_some() {
            sink.present(&self.frame())?;
            sleeper.sleep(self.tick_delay);
        }

        log::info!("Quit after {} ticks", self.ticks);
        Ok(self.summary())
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            ticks: self.ticks,
            jumps: self.jumps,
            respawns: self.respawns,
            final_player: self.player.clone(),
        }
    }

    pub fn contact_state(&self) -> ContactState {
        self.player.contact_state()
    }
}
