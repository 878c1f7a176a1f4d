pub mod ping;

pub use ping::{bytes_to_megabytes, configure, PingHandler};
