use crate::services::alloc_tracker;
use std::sync::Mutex;
use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};

/// Raw memory counters of the current process, in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemorySample {
    pub heap_used_bytes: u64,
    pub rss_bytes: u64,
}

/// Source of live process memory statistics.
pub trait MemoryProbe: Send + Sync {
    fn sample(&self) -> MemorySample;
}

/// Reads the current process through sysinfo.
pub struct SysinfoProbe {
    system: Mutex<System>,
    pid: Option<Pid>,
}

impl SysinfoProbe {
    pub fn new() -> Self {
        let pid = match sysinfo::get_current_pid() {
            Ok(pid) => Some(pid),
            Err(e) => {
                log::warn!("Unable to resolve current PID, rss will read 0: {}", e);
                None
            }
        };

        Self {
            system: Mutex::new(System::new()),
            pid,
        }
    }

    fn rss_bytes(&self) -> u64 {
        let Some(pid) = self.pid else {
            return 0;
        };
        let Ok(mut sys) = self.system.lock() else {
            log::debug!("sysinfo state poisoned, reporting rss as 0");
            return 0;
        };

        sys.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[pid]),
            true,
            ProcessRefreshKind::nothing().with_memory(),
        );

        sys.process(pid).map(|p| p.memory()).unwrap_or(0)
    }
}

impl Default for SysinfoProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryProbe for SysinfoProbe {
    fn sample(&self) -> MemorySample {
        MemorySample {
            heap_used_bytes: alloc_tracker::heap_used().unwrap_or_else(data_segment_bytes),
            rss_bytes: self.rss_bytes(),
        }
    }
}

// statm: size resident shared text lib data dt, counted in pages
#[cfg(target_os = "linux")]
fn data_segment_bytes() -> u64 {
    const PAGE_SIZE: u64 = 4096;

    let content = match std::fs::read_to_string("/proc/self/statm") {
        Ok(content) => content,
        Err(e) => {
            log::debug!("Failed to read /proc/self/statm: {}", e);
            return 0;
        }
    };

    content
        .split_whitespace()
        .nth(5)
        .and_then(|pages| pages.parse::<u64>().ok())
        .map(|pages| pages * PAGE_SIZE)
        .unwrap_or(0)
}

#[cfg(not(target_os = "linux"))]
fn data_segment_bytes() -> u64 {
    0
}
