//! # Post-mount Layout Stabilization / 挂载后布局稳定
//!
//! Some rendering engines recompute grid track sizes wrongly on re-renders
//! triggered by hover unless the root width is pinned right after layout.
//! [`PinWidthForOneFrame`] measures the root element in the next frame, pins
//! its width to that pixel value, and releases it to automatic sizing one frame
//! later. Targets without that problem use [`NoopStabilizer`].
//!
//! 某些渲染引擎在悬停触发的重新渲染中会错误地重新计算网格轨道尺寸，
//! 除非在布局后立即固定根元素的宽度。
//!
//! Frame callbacks only hold a weak reference to the element: if it is dropped
//! (unmounted) before a callback runs, the callback does nothing.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};
use tracing::trace;

/// The measurable root container.
pub trait LayoutElement {
    /// Current computed width in pixels.
    fn client_width(&self) -> f64;

    /// `Some(px)` pins the width; `None` returns it to automatic sizing.
    fn set_width(&mut self, width: Option<f64>);
}

/// Runs on the next frame, with access to the scheduler to chain another frame.
pub type FrameCallback = Box<dyn FnOnce(&mut dyn FrameScheduler)>;

/// "Next animation frame" scheduling.
pub trait FrameScheduler {
    fn request_frame(&mut self, callback: FrameCallback);
}

/// Hook run once right after the root is mounted.
pub trait LayoutStabilizer {
    fn on_mount(&self);
}

/// For targets that lay out correctly on their own.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStabilizer;

impl LayoutStabilizer for NoopStabilizer {
    fn on_mount(&self) {}
}

/// Pins the root width for exactly one frame using two chained frame callbacks.
pub struct PinWidthForOneFrame {
    root: Weak<RefCell<dyn LayoutElement>>,
    frames: Rc<RefCell<dyn FrameScheduler>>,
}

impl PinWidthForOneFrame {
    pub fn new(root: &Rc<RefCell<dyn LayoutElement>>, frames: Rc<RefCell<dyn FrameScheduler>>) -> Self {
        Self {
            root: Rc::downgrade(root),
            frames,
        }
    }
}

impl LayoutStabilizer for PinWidthForOneFrame {
    fn on_mount(&self) {
        let root = self.root.clone();
        self.frames.borrow_mut().request_frame(Box::new(move |frames: &mut dyn FrameScheduler| {
            let Some(element) = root.upgrade() else {
                trace!("Root element gone before width pin");
                return;
            };
            let width = element.borrow().client_width();
            element.borrow_mut().set_width(Some(width));
            trace!(width, "Pinned root width");

            frames.request_frame(Box::new(move |_: &mut dyn FrameScheduler| {
                if let Some(element) = root.upgrade() {
                    element.borrow_mut().set_width(None);
                    trace!("Released root width");
                }
            }));
        }));
    }
}

/// In-process frame loop: callbacks requested during a frame run on the next one.
#[derive(Default)]
pub struct FrameQueue {
    pending: VecDeque<FrameCallback>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Runs every callback that was due at the start of this frame. Returns how many ran.
    pub fn run_frame(&mut self) -> usize {
        let due: Vec<FrameCallback> = self.pending.drain(..).collect();
        let count = due.len();
        for callback in due {
            callback(self);
        }
        count
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self, callback: FrameCallback) {
        self.pending.push_back(callback);
    }
}
