use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

static ALLOCATED: AtomicUsize = AtomicUsize::new(0);
static ENABLED: AtomicBool = AtomicBool::new(false);

/// Counting wrapper around the system allocator.
///
/// Install it in a binary and call `enable` to make `heapUsed` report live
/// heap bytes:
///
/// ```ignore
/// #[global_allocator]
/// static GLOBAL: heimdall::TrackingAllocator = heimdall::TrackingAllocator;
///
/// fn main() {
///     heimdall::TrackingAllocator::enable();
/// }
/// ```
///
/// Only call `enable` from the binary that declares it as `#[global_allocator]`;
/// otherwise the count covers just the allocations made through it directly.
pub struct TrackingAllocator;

impl TrackingAllocator {
    /// Marks the tracker as the process-wide allocator so probes read its count.
    pub fn enable() {
        ENABLED.store(true, Ordering::Relaxed);
    }
}

unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            ALLOCATED.fetch_add(layout.size(), Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc_zeroed(layout);
        if !ptr.is_null() {
            ALLOCATED.fetch_add(layout.size(), Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        ALLOCATED.fetch_sub(layout.size(), Ordering::Relaxed);
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = System.realloc(ptr, layout, new_size);
        if !new_ptr.is_null() {
            if new_size > layout.size() {
                ALLOCATED.fetch_add(new_size - layout.size(), Ordering::Relaxed);
            } else {
                ALLOCATED.fetch_sub(layout.size() - new_size, Ordering::Relaxed);
            }
        }
        new_ptr
    }
}

/// Live heap bytes, or `None` until `TrackingAllocator::enable` has been called.
pub fn heap_used() -> Option<u64> {
    if ENABLED.load(Ordering::Relaxed) {
        Some(ALLOCATED.load(Ordering::Relaxed) as u64)
    } else {
        None
    }
}
