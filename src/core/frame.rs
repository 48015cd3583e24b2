use super::timer::RateMeter;

const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Drives one tick at a time: update first, then render.
///
/// The host (winit) decides when a tick happens; this type only fixes the
/// order within it and keeps the frame counters.
#[derive(Debug)]
pub struct FrameLoop {
    frame_number: u64,
    time: f32,
    fps: RateMeter,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            frame_number: 0,
            time: 0.0,
            fps: RateMeter::new(FPS_UPDATE_INTERVAL),
        }
    }

    /// Run one tick. `update` always completes before `render` starts.
    pub fn tick<U, R, T>(&mut self, delta: f32, update: U, render: R) -> T
    where
        U: FnOnce(&FrameInfo),
        R: FnOnce(&FrameInfo) -> T,
    {
        self.tick_with(&mut (), delta, |_, f| update(f), |_, f| render(f))
    }

    /// Like [`tick`](Self::tick), but both phases get mutable access to `state`
    pub fn tick_with<S, U, R, T>(&mut self, state: &mut S, delta: f32, update: U, render: R) -> T
    where
        S: ?Sized,
        U: FnOnce(&mut S, &FrameInfo),
        R: FnOnce(&mut S, &FrameInfo) -> T,
    {
        self.time += delta;
        let frame = FrameInfo::new(self.frame_number, self.time, delta);
        self.frame_number += 1;

        if let Some(fps) = self.fps.tick(delta) {
            log::debug!("FPS: {:.1}", fps);
        }

        update(state, &frame);
        render(state, &frame)
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn update_runs_before_render() {
        let mut frame_loop = FrameLoop::new();
        let order = RefCell::new(Vec::new());

        frame_loop.tick(
            0.016,
            |_| order.borrow_mut().push("update"),
            |_| order.borrow_mut().push("render"),
        );

        assert_eq!(*order.borrow(), vec!["update", "render"]);
    }

    #[test]
    fn frames_are_numbered_and_timed() {
        let mut frame_loop = FrameLoop::new();

        let first = frame_loop.tick(0.5, |_| {}, |f| *f);
        let second = frame_loop.tick(0.25, |_| {}, |f| *f);

        assert_eq!(first, FrameInfo::new(0, 0.5, 0.5));
        assert_eq!(second, FrameInfo::new(1, 0.75, 0.25));
        assert_eq!(frame_loop.frame_number(), 2);
    }

    #[test]
    fn state_is_shared_between_phases() {
        let mut frame_loop = FrameLoop::new();
        let mut counter = 0u32;

        let seen = frame_loop.tick_with(
            &mut counter,
            0.1,
            |c, _| *c += 1,
            |c, _| {
                *c *= 10;
                *c
            },
        );

        assert_eq!(seen, 10);
        assert_eq!(counter, 10);
    }

    #[test]
    fn render_result_is_returned() {
        let mut frame_loop = FrameLoop::new();
        let result: Result<u64, String> = frame_loop.tick(0.1, |_| {}, |f| Ok(f.number));
        assert_eq!(result, Ok(0));
    }
}
