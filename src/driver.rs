//! Loop driver
//!
//! `SimulationContext` owns everything a running session needs: the match,
//! the settings it was built from, the running flag and the frame clock.
//! Frontends (browser canvas, headless) only present frames and report close
//! requests.

use crate::error::SimError;
use crate::renderer::{Vertex, build_scene};
use crate::settings::Settings;
use crate::sim::{Match, tick};

/// Loop state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Where frames go
pub trait Frontend {
    /// Polled once per iteration; true stops the loop
    fn close_requested(&mut self) -> bool;
    /// Show a finished frame
    fn present(&mut self, scene: &[Vertex]);
}

/// Fixed frame-rate cap.
///
/// Frames that arrive early are skipped. Late frames do not catch up: the
/// schedule restarts from the late frame instead of bursting.
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_secs: f64,
    next_frame: Option<f64>,
}

impl FrameClock {
    /// Early arrivals within this fraction of a frame still count as on time
    const SLACK: f64 = 0.1;

    pub fn new(fps: u32) -> Self {
        Self {
            frame_secs: 1.0 / fps.max(1) as f64,
            next_frame: None,
        }
    }

    /// Whether a frame may run at `now` (seconds). Claims the slot if so.
    pub fn tick(&mut self, now: f64) -> bool {
        match self.next_frame {
            Some(next) if now + self.frame_secs * Self::SLACK < next => false,
            Some(next) => {
                self.next_frame = Some(if now - next > self.frame_secs {
                    now + self.frame_secs
                } else {
                    next + self.frame_secs
                });
                true
            }
            None => {
                self.next_frame = Some(now + self.frame_secs);
                true
            }
        }
    }

    /// Seconds until the next slot opens
    pub fn until_next(&self, now: f64) -> f64 {
        self.next_frame.map_or(0.0, |next| (next - now).max(0.0))
    }
}

/// A simulation session
pub struct SimulationContext {
    pub settings: Settings,
    pub sim: Match,
    pub clock: FrameClock,
    state: LoopState,
    last_error: Option<SimError>,
}

impl SimulationContext {
    /// Validate settings, build the match and spawn its roster
    pub fn new(settings: Settings, seed: u64) -> Result<Self, SimError> {
        settings.validate()?;

        let mut sim = Match::new(settings.steering, seed);
        sim.pair_order = settings.pair_order;
        sim.spawn(settings.agents_per_team, settings.team_count)?;
        log::info!(
            "Match ready: {} teams x {} agents, seed {}",
            settings.team_count,
            settings.agents_per_team,
            seed
        );

        Ok(Self {
            clock: FrameClock::new(settings.target_fps),
            settings,
            sim,
            state: LoopState::Running,
            last_error: None,
        })
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Move to `Stopped`; later polls do nothing
    pub fn stop(&mut self) {
        if self.state == LoopState::Running {
            log::info!("Loop stopped after {} frames", self.sim.frame);
            self.state = LoopState::Stopped;
        }
    }

    /// The error that stopped the loop, if any
    pub fn take_error(&mut self) -> Option<SimError> {
        self.last_error.take()
    }

    /// Advance the simulation one frame and build its scene
    pub fn frame(&mut self) -> Result<Vec<Vertex>, SimError> {
        tick(&mut self.sim)?;
        build_scene(&self.sim, self.settings.show_heading)
    }

    /// One loop iteration at time `now` (seconds): honor a close request, run
    /// a frame if the clock allows it, present it.
    ///
    /// A frame error stops the loop; the error is kept for `take_error`.
    pub fn poll<F: Frontend>(&mut self, now: f64, frontend: &mut F) -> LoopState {
        if self.state == LoopState::Stopped {
            return self.state;
        }
        if frontend.close_requested() {
            log::info!("Close requested");
            self.stop();
            return self.state;
        }
        if !self.clock.tick(now) {
            return self.state;
        }

        match self.frame() {
            Ok(scene) => frontend.present(&scene),
            Err(e) => {
                log::error!("Frame {} failed: {}", self.sim.frame, e);
                self.last_error = Some(e);
                self.stop();
            }
        }
        self.state
    }
}

/// Frontend without a display: runs a fixed number of frames, then asks to
/// close
#[derive(Debug, Clone)]
pub struct HeadlessFrontend {
    frame_limit: u64,
    presented: u64,
    last_vertex_count: usize,
}

impl HeadlessFrontend {
    pub fn new(frame_limit: u64) -> Self {
        Self {
            frame_limit,
            presented: 0,
            last_vertex_count: 0,
        }
    }

    pub fn presented(&self) -> u64 {
        self.presented
    }
}

impl Frontend for HeadlessFrontend {
    fn close_requested(&mut self) -> bool {
        self.presented >= self.frame_limit
    }

    fn present(&mut self, scene: &[Vertex]) {
        self.presented += 1;
        if scene.len() != self.last_vertex_count {
            log::debug!("Scene now has {} vertices", scene.len());
            self.last_vertex_count = scene.len();
        }
    }
}

/// Run the loop on the current thread until it stops, sleeping between
/// frames to hold the frame-rate cap
#[cfg(not(target_arch = "wasm32"))]
pub fn run_blocking<F: Frontend>(
    ctx: &mut SimulationContext,
    frontend: &mut F,
) -> Result<(), SimError> {
    let start = std::time::Instant::now();
    while ctx.poll(start.elapsed().as_secs_f64(), frontend) == LoopState::Running {
        let wait = ctx.clock.until_next(start.elapsed().as_secs_f64());
        if wait > 0.0 {
            std::thread::sleep(std::time::Duration::from_secs_f64(wait));
        }
    }
    match ctx.take_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records presented frames and closes on demand
    #[derive(Default)]
    struct ScriptedFrontend {
        frames: Vec<usize>,
        close: bool,
    }

    impl Frontend for ScriptedFrontend {
        fn close_requested(&mut self) -> bool {
            self.close
        }

        fn present(&mut self, scene: &[Vertex]) {
            self.frames.push(scene.len());
        }
    }

    const FRAME: f64 = 1.0 / 60.0;

    #[test]
    fn test_clock_caps_rate() {
        let mut clock = FrameClock::new(60);
        assert!(clock.tick(0.0));
        assert!(!clock.tick(0.005));
        assert!(!clock.tick(0.010));
        assert!(clock.tick(FRAME));
        assert!(!clock.tick(FRAME + 0.001));
        assert!(clock.tick(2.0 * FRAME));
    }

    #[test]
    fn test_clock_does_not_burst_after_stall() {
        let mut clock = FrameClock::new(60);
        assert!(clock.tick(0.0));
        // A one second stall runs a single frame, then waits a full frame
        assert!(clock.tick(1.0));
        assert!(!clock.tick(1.001));
        assert!((clock.until_next(1.0) - FRAME).abs() < 1e-9);
    }

    #[test]
    fn test_clock_tolerates_early_jitter() {
        let mut clock = FrameClock::new(60);
        assert!(clock.tick(0.0));
        assert!(clock.tick(FRAME - 0.0005));
    }

    #[test]
    fn test_poll_runs_and_presents() {
        let mut ctx = SimulationContext::new(Settings::default(), 5).unwrap();
        let mut frontend = ScriptedFrontend::default();

        assert_eq!(ctx.poll(0.0, &mut frontend), LoopState::Running);
        assert_eq!(ctx.poll(0.001, &mut frontend), LoopState::Running);
        assert_eq!(ctx.poll(FRAME, &mut frontend), LoopState::Running);

        assert_eq!(frontend.frames.len(), 2);
        assert_eq!(ctx.sim.frame, 2);
    }

    #[test]
    fn test_close_request_stops() {
        let mut ctx = SimulationContext::new(Settings::default(), 5).unwrap();
        let mut frontend = ScriptedFrontend {
            close: true,
            ..Default::default()
        };
        assert_eq!(ctx.poll(0.0, &mut frontend), LoopState::Stopped);
        assert!(frontend.frames.is_empty());

        // Stopped is terminal
        frontend.close = false;
        assert_eq!(ctx.poll(1.0, &mut frontend), LoopState::Stopped);
        assert_eq!(ctx.sim.frame, 0);
        assert!(ctx.take_error().is_none());
    }

    #[test]
    fn test_frame_error_stops_and_reports() {
        let settings = Settings {
            team_count: 1,
            ..Default::default()
        };
        let mut ctx = SimulationContext::new(settings, 5).unwrap();
        let mut frontend = ScriptedFrontend::default();

        assert_eq!(ctx.poll(0.0, &mut frontend), LoopState::Stopped);
        assert!(frontend.frames.is_empty());
        assert_eq!(ctx.take_error(), Some(SimError::NoOpponent { agent_id: 0 }));
    }

    #[test]
    fn test_invalid_settings_fail_startup() {
        let settings = Settings {
            team_count: 7,
            ..Default::default()
        };
        assert!(matches!(
            SimulationContext::new(settings, 1),
            Err(SimError::TeamOutOfPalette { .. })
        ));
    }

    #[test]
    fn test_headless_closes_after_limit() {
        let settings = Settings {
            target_fps: 1000,
            ..Default::default()
        };
        let mut ctx = SimulationContext::new(settings, 11).unwrap();
        let mut frontend = HeadlessFrontend::new(5);

        run_blocking(&mut ctx, &mut frontend).unwrap();

        assert_eq!(frontend.presented(), 5);
        assert_eq!(ctx.sim.frame, 5);
        assert_eq!(ctx.state(), LoopState::Stopped);
        for a in &ctx.sim.agents {
            assert!(ctx.sim.field.contains(a.pos));
        }
    }
}
