//! Cube painting session state, shared by every frontend.
//!
//! [`PaintSession`] owns the cube and everything derived from it: the brush
//! color, the assembly animation, cell highlights, and recorded frames.
//! Frontends feed it [`InputEvent`]s and timer ticks, and read back
//! [`Snapshot`]s to draw.

mod animations;
mod export;
mod input;
mod render;
mod session;

pub use animations::{AssemblySequence, AssemblyTask, FlashMap};
pub use export::export_gif;
pub use input::InputEvent;
pub use render::NetRenderer;
pub use session::{PaintSession, SessionError, Snapshot, TickOutcome};
