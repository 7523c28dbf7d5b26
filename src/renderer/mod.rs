//! Render adapter
//!
//! Consumes simulation frames and produces backend-agnostic triangle lists.
//! Everything here is cosmetic: the simulation never depends on this module,
//! and a missing rendering surface never stops the tick loop.

pub mod shapes;
pub mod vertex;

pub use shapes::FrameBuilder;
pub use vertex::Vertex;
