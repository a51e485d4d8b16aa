// Port Layer - Interfaces for external collaborators

pub mod arrival_sampler; // For deterministic testing
pub mod event_sink;

// Re-exports
pub use arrival_sampler::{ArrivalSampler, UniformJitter};
pub use event_sink::{EventSink, TracingEventSink};
