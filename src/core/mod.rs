pub mod clock;
pub mod controller;
pub mod frame;
pub mod input_adapter;
pub mod timer;

pub use clock::Clock;
pub use controller::{Button, Controller};
pub use frame::{FrameInfo, FrameLoop};
pub use input_adapter::{KeyInput, WinitController};
pub use timer::{Interval, RateMeter};
