#![allow(dead_code)]

use flocks_site::engine::driver::FrameScheduler;
use flocks_site::engine::surface::{Rgba, Surface};
use flocks_site::{Result, SiteError};

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Clear { width: f64, height: f64 },
    Circle { x: f64, y: f64, radius: f64, color: Rgba },
    Line { x0: f64, y0: f64, x1: f64, y1: f64, width: f64, color: Rgba },
}

/// Surface that remembers every call.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn lines(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, Op::Line { .. })).count()
    }

    pub fn circles(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, Op::Circle { .. })).count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ops.push(Op::Clear { width, height });
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba) {
        self.ops.push(Op::Circle { x, y, radius, color });
    }

    fn stroke_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, width: f64, color: Rgba) {
        self.ops.push(Op::Line { x0, y0, x1, y1, width, color });
    }
}

/// Surface that discards everything.
pub struct NullSurface;

impl Surface for NullSurface {
    fn clear(&mut self, _: f64, _: f64) {}
    fn fill_circle(&mut self, _: f64, _: f64, _: f64, _: Rgba) {}
    fn stroke_line(&mut self, _: f64, _: f64, _: f64, _: f64, _: f64, _: Rgba) {}
}

/// Scheduler handing out increasing handles and logging cancellations.
#[derive(Debug, Default)]
pub struct FakeScheduler {
    pub next: u32,
    pub requested: Vec<u32>,
    pub cancelled: Vec<u32>,
    pub fail: bool,
}

impl FrameScheduler for FakeScheduler {
    type Handle = u32;

    fn request_frame(&mut self) -> Result<u32> {
        if self.fail {
            return Err(SiteError::Schedule("no frames".into()));
        }
        let handle = self.next;
        self.next += 1;
        self.requested.push(handle);
        Ok(handle)
    }

    fn cancel_frame(&mut self, handle: u32) {
        self.cancelled.push(handle);
    }
}
