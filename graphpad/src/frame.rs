/// Coalesces redraw requests: any number of mutations between two frames
/// produce a single redraw.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameScheduler {
    dirty: bool,
}

impl FrameScheduler {
    pub fn new() -> Self {
        FrameScheduler { dirty: true }
    }
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
    /// Run `redraw` if anything changed since the last frame. Returns whether
    /// it ran.
    pub fn run_frame(&mut self, redraw: impl FnOnce()) -> bool {
        if !self.dirty {
            return false;
        }
        self.dirty = false;
        redraw();
        true
    }
}
