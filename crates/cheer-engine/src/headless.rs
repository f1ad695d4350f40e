//! Headless host: a [`Platform`] with no window.
//!
//! Frames are recorded, not timed; the owner fires them explicitly with
//! [`HeadlessHost::fire_frame`], which retires the scheduled handle and runs
//! one engine tick. The shared [`HeadlessHost`] registry lets the
//! owner inspect pending frames and live resize listeners after the engine
//! has taken its platform by value. Rendering goes to a [`VectorSurface`].

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::engine::ParticleEngine;
use crate::host::{FrameHandle, ListenerId, Platform};
use crate::renderer::VectorSurface;

#[derive(Debug)]
struct Registry {
    viewport: (u32, u32),
    context_available: bool,
    listeners: HashSet<ListenerId>,
    next_listener: u32,
    pending_frames: HashSet<FrameHandle>,
    next_frame: i32,
    frames_requested: u64,
}

/// Shared view of the headless environment.
#[derive(Debug, Clone)]
pub struct HeadlessHost {
    registry: Rc<RefCell<Registry>>,
}

impl HeadlessHost {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                viewport: (width, height),
                context_available: true,
                listeners: HashSet::new(),
                next_listener: 1,
                pending_frames: HashSet::new(),
                next_frame: 1,
                frames_requested: 0,
            })),
        }
    }

    /// A host whose surface has no 2D context; engine construction fails.
    pub fn without_context(width: u32, height: u32) -> Self {
        let host = Self::new(width, height);
        host.registry.borrow_mut().context_available = false;
        host
    }

    /// A platform handle to pass to the engine.
    pub fn platform(&self) -> HeadlessPlatform {
        HeadlessPlatform {
            registry: Rc::clone(&self.registry),
        }
    }

    /// Change the reported viewport. The owner must still call `handle_resize`.
    pub fn set_viewport(&self, width: u32, height: u32) {
        self.registry.borrow_mut().viewport = (width, height);
    }

    /// Deliver the engine's scheduled frame: retire its handle, then tick.
    pub fn fire_frame(&self, engine: &mut ParticleEngine<HeadlessPlatform>) {
        if let Some(handle) = engine.pending_frame() {
            self.registry.borrow_mut().pending_frames.remove(&handle);
        }
        engine.on_frame();
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    /// Frames scheduled and not yet fired or cancelled.
    pub fn pending_frames(&self) -> usize {
        self.registry.borrow().pending_frames.len()
    }

    /// Total frames ever requested.
    pub fn frames_requested(&self) -> u64 {
        self.registry.borrow().frames_requested
    }
}

/// [`Platform`] implementation backed by a [`HeadlessHost`] registry.
#[derive(Debug)]
pub struct HeadlessPlatform {
    registry: Rc<RefCell<Registry>>,
}

impl Platform for HeadlessPlatform {
    type Surface = VectorSurface;

    fn acquire_surface(&mut self) -> Option<VectorSurface> {
        let reg = self.registry.borrow();
        if !reg.context_available {
            return None;
        }
        Some(VectorSurface::new(reg.viewport.0, reg.viewport.1))
    }

    fn viewport_size(&self) -> (u32, u32) {
        self.registry.borrow().viewport
    }

    fn add_resize_listener(&mut self) -> ListenerId {
        let mut reg = self.registry.borrow_mut();
        let id = ListenerId(reg.next_listener);
        reg.next_listener += 1;
        reg.listeners.insert(id);
        id
    }

    fn remove_resize_listener(&mut self, id: ListenerId) {
        self.registry.borrow_mut().listeners.remove(&id);
    }

    fn request_frame(&mut self) -> FrameHandle {
        let mut reg = self.registry.borrow_mut();
        let handle = FrameHandle(reg.next_frame);
        reg.next_frame = reg.next_frame.wrapping_add(1);
        reg.frames_requested += 1;
        reg.pending_frames.insert(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.registry.borrow_mut().pending_frames.remove(&handle);
    }
}
