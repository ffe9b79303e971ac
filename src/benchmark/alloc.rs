//! Counting global allocator
//!
//! Tracks live bytes, and separately live bytes held by large blocks, so a
//! measurement can report heap deltas. Install it in the binary with
//! `#[global_allocator]`; when it is not installed the counters stay at 0.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::constants::LARGE_ALLOCATION_THRESHOLD;

static ALLOCATED: AtomicUsize = AtomicUsize::new(0);
static LARGE_ALLOCATED: AtomicUsize = AtomicUsize::new(0);

/// System allocator wrapper that keeps live-byte counters
pub struct TrackingAllocator;

unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            record_alloc(layout.size());
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc_zeroed(layout) };
        if !ptr.is_null() {
            record_alloc(layout.size());
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        record_dealloc(layout.size());
        unsafe { System.dealloc(ptr, layout) };
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() {
            record_dealloc(layout.size());
            record_alloc(new_size);
        }
        new_ptr
    }
}

fn record_alloc(size: usize) {
    ALLOCATED.fetch_add(size, Ordering::Relaxed);
    if size >= LARGE_ALLOCATION_THRESHOLD {
        LARGE_ALLOCATED.fetch_add(size, Ordering::Relaxed);
    }
}

fn record_dealloc(size: usize) {
    ALLOCATED.fetch_sub(size, Ordering::Relaxed);
    if size >= LARGE_ALLOCATION_THRESHOLD {
        LARGE_ALLOCATED.fetch_sub(size, Ordering::Relaxed);
    }
}

/// Live bytes currently handed out through the tracking allocator
pub fn allocated_bytes() -> usize {
    ALLOCATED.load(Ordering::Relaxed)
}

/// Live bytes currently held in blocks at or above the large threshold
pub fn large_allocated_bytes() -> usize {
    LARGE_ALLOCATED.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_follow_direct_calls() {
        // The test harness does not install the allocator, so the counters
        // only move through these explicit calls.
        let before = allocated_bytes();
        let before_large = large_allocated_bytes();

        let small = Layout::from_size_align(64, 8).unwrap();
        let large = Layout::from_size_align(LARGE_ALLOCATION_THRESHOLD, 8).unwrap();

        unsafe {
            let a = TrackingAllocator.alloc(small);
            let b = TrackingAllocator.alloc(large);
            assert!(!a.is_null() && !b.is_null());

            assert!(allocated_bytes() >= before + 64 + LARGE_ALLOCATION_THRESHOLD);
            assert!(large_allocated_bytes() >= before_large + LARGE_ALLOCATION_THRESHOLD);

            TrackingAllocator.dealloc(a, small);
            TrackingAllocator.dealloc(b, large);
        }
    }
}
