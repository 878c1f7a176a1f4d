use serde::{Deserialize, Serialize};

pub const PING_STATUS: &str = "ok";
pub const PING_MESSAGE: &str = "Ping successful";

/// Memory usage of the current process, in megabytes rounded to 2 decimals
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MemoryUsage {
    pub heap_used: f64,
    pub rss: f64,
}

/// Body returned by the ping route. Built fresh for every request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PingResponse {
    /// Always "ok"
    pub status: String,
    /// Always "Ping successful"
    pub message: String,
    /// ISO-8601 UTC time the response was built, millisecond precision
    pub timestamp: String,
    pub memory: MemoryUsage,
}

impl PingResponse {
    pub fn new(timestamp: String, memory: MemoryUsage) -> Self {
        Self {
            status: PING_STATUS.to_string(),
            message: PING_MESSAGE.to_string(),
            timestamp,
            memory,
        }
    }
}
