//! Frame loop bookkeeping: which frame is pending, and what happens to it
//! on resize and teardown.

use super::surface::Surface;
use super::{Engine, FrameStats};
use crate::error::Result;

/// Host primitive that calls back once before the next repaint.
pub trait FrameScheduler {
    type Handle: Copy + std::fmt::Debug;

    fn request_frame(&mut self) -> Result<Self::Handle>;
    fn cancel_frame(&mut self, handle: Self::Handle);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Uninitialized,
    Running,
    Reinitializing,
    Stopped,
}

/// Owns one engine and its pending frame request.
#[derive(Debug)]
pub struct AnimationDriver<S: FrameScheduler> {
    engine: Engine,
    scheduler: S,
    state: DriverState,
    pending: Option<S::Handle>,
}

impl<S: FrameScheduler> AnimationDriver<S> {
    pub fn new(engine: Engine, scheduler: S) -> Self {
        Self {
            engine,
            scheduler,
            state: DriverState::Uninitialized,
            pending: None,
        }
    }

    /// Populate the pool and schedule the first frame.
    pub fn start(&mut self, width: f64, height: f64) -> Result<()> {
        if self.state != DriverState::Uninitialized {
            log::debug!("start ignored in state {:?}", self.state);
            return Ok(());
        }
        self.engine.rebuild(width, height);
        self.schedule()?;
        self.state = DriverState::Running;
        Ok(())
    }

    /// Frame callback: step the engine and queue the next frame.
    pub fn on_frame<T: Surface + ?Sized>(&mut self, surface: &mut T) -> Result<Option<FrameStats>> {
        self.pending = None;
        if self.state != DriverState::Running {
            return Ok(None);
        }
        let stats = self.engine.step(surface);
        self.schedule()?;
        Ok(Some(stats))
    }

    /// Cancel the in-flight frame, then rebuild the pool for the new size.
    /// Only a running driver reacts; before `start` and after `stop` this
    /// does nothing.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<()> {
        if !matches!(self.state, DriverState::Running | DriverState::Reinitializing) {
            log::debug!("resize ignored in state {:?}", self.state);
            return Ok(());
        }
        self.cancel_pending();
        self.state = DriverState::Reinitializing;
        self.engine.rebuild(width, height);
        self.schedule()?;
        self.state = DriverState::Running;
        Ok(())
    }

    pub fn stop(&mut self) {
        self.cancel_pending();
        self.state = DriverState::Stopped;
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn pending(&self) -> Option<S::Handle> {
        self.pending
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    fn schedule(&mut self) -> Result<()> {
        let handle = self.scheduler.request_frame()?;
        self.pending = Some(handle);
        Ok(())
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
    }
}
