//! Frame driver: runs one system tick per host frame

use crate::clock::FrameClock;
use crate::input::InputState;
use crate::system::{FrameInput, RuntimeSystem};
use hearth_core::{CameraOrientation, Result};
use std::cell::Cell;
use std::rc::Rc;

/// Cloneable stop flag shared between the driver and whoever owns the scene.
///
/// Not `Send`: the frame loop, input callbacks and teardown
/// all run on the host's event thread.
#[derive(Debug, Clone, Default)]
pub struct StopHandle {
    stopped: Rc<Cell<bool>>,
}

impl StopHandle {
    pub fn stop(&self) {
        self.stopped.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }
}

/// Outcome of one driver call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    /// The system ticked; the host should schedule another frame
    Continue,
    /// The driver was stopped; the host must not schedule more frames
    Stopped,
}

/// Drives a `RuntimeSystem` from the host's frame callback.
///
/// The host calls [`FrameDriver::frame`] once per rendered frame. There is no
/// hidden self-rescheduling: the host keeps calling until it gets
/// [`FrameStatus::Stopped`].
pub struct FrameDriver {
    pub clock: FrameClock,
    stop: StopHandle,
    frames: u64,
    initialized: bool,
    shut_down: bool,
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new(FrameClock::new())
    }
}

impl FrameDriver {
    pub fn new(clock: FrameClock) -> Self {
        Self {
            clock,
            stop: StopHandle::default(),
            frames: 0,
            initialized: false,
            shut_down: false,
        }
    }

    /// Handle that stops the driver from outside (scene teardown, window close)
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn stop(&self) {
        self.stop.stop();
    }

    pub fn is_stopped(&self) -> bool {
        self.stop.is_stopped()
    }

    /// Number of completed ticks
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Run one tick using the wall clock.
    pub fn frame<S: RuntimeSystem + ?Sized>(
        &mut self,
        system: &mut S,
        input: &InputState,
        camera: CameraOrientation,
    ) -> Result<FrameStatus> {
        if self.is_stopped() {
            self.finish(system)?;
            return Ok(FrameStatus::Stopped);
        }
        self.clock.tick();
        self.step(system, input, camera)
    }

    /// Run one tick with an externally measured elapsed time (still clamped).
    pub fn frame_with_delta<S: RuntimeSystem + ?Sized>(
        &mut self,
        elapsed: f64,
        system: &mut S,
        input: &InputState,
        camera: CameraOrientation,
    ) -> Result<FrameStatus> {
        if self.is_stopped() {
            self.finish(system)?;
            return Ok(FrameStatus::Stopped);
        }
        self.clock.advance(elapsed);
        self.step(system, input, camera)
    }

    /// Bounded loop for headless hosts: up to `frames` ticks of `dt` seconds.
    /// Returns the number of ticks actually run.
    pub fn run_frames<S: RuntimeSystem + ?Sized>(
        &mut self,
        frames: u32,
        dt: f64,
        system: &mut S,
        input: &InputState,
        camera: CameraOrientation,
    ) -> Result<u32> {
        let mut ran = 0;
        for _ in 0..frames {
            match self.frame_with_delta(dt, system, input, camera)? {
                FrameStatus::Continue => ran += 1,
                FrameStatus::Stopped => break,
            }
        }
        Ok(ran)
    }

    /// Stop and shut the system down now.
    pub fn shutdown<S: RuntimeSystem + ?Sized>(&mut self, system: &mut S) -> Result<()> {
        self.stop();
        self.finish(system)
    }

    fn step<S: RuntimeSystem + ?Sized>(
        &mut self,
        system: &mut S,
        input: &InputState,
        camera: CameraOrientation,
    ) -> Result<FrameStatus> {
        if !self.initialized {
            system.initialize()?;
            self.initialized = true;
            log::info!("{} initialized", system.name());
        }

        let frame = FrameInput { input, camera };
        system.update(&frame, self.clock.delta_time as f32)?;
        self.frames += 1;
        Ok(FrameStatus::Continue)
    }

    fn finish<S: RuntimeSystem + ?Sized>(&mut self, system: &mut S) -> Result<()> {
        if self.shut_down || !self.initialized {
            self.shut_down = true;
            return Ok(());
        }
        self.shut_down = true;
        system.shutdown()?;
        log::info!("{} shut down after {} frames", system.name(), self.frames);
        Ok(())
    }
}
