pub mod ping;

pub use ping::{MemoryUsage, PingResponse, PING_MESSAGE, PING_STATUS};
