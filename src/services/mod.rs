pub mod alloc_tracker;
pub mod memory_probe;

pub use alloc_tracker::TrackingAllocator;
pub use memory_probe::{MemoryProbe, MemorySample, SysinfoProbe};
