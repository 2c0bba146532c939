//! Real-time viewfinder face-marker pipeline.
//!
//! A camera-rate frame stream is detected off the render thread, the
//! newest result is relayed across threads through a coalescing
//! mailbox, and markers are derived in view space one per face per
//! cycle. Structure follows a hexagonal layout: `domain` modules hold
//! interfaces and pure logic, `infrastructure` modules hold concrete
//! adapters; `shared` holds cross-cutting value types.

pub mod detection;
pub mod overlay;
pub mod pipeline;
pub mod session;
pub mod shared;
