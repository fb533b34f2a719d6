// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Periodic frame task

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Shortest accepted frame interval
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Handle to a running frame loop. Dropping it cancels the loop.
#[derive(Debug)]
pub struct FrameHandle {
    task: JoinHandle<()>,
    cancelled: Arc<AtomicBool>,
}

impl FrameHandle {
    /// Stop the loop. No tick starts after this returns.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
        self.task.abort();
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// True once the task has stopped running
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for FrameHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Call `tick` with an increasing frame number every `interval`.
///
/// The first tick fires immediately. Ticks missed because a frame ran long
/// are skipped, not replayed.
///
/// # Panics
///
/// Panics when called outside of a Tokio runtime.
pub fn spawn_frame_loop<F>(interval: Duration, mut tick: F) -> FrameHandle
where
    F: FnMut(u64) + Send + 'static,
{
    let cancelled = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cancelled);

    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval.max(MIN_INTERVAL));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut frame = 0u64;
        loop {
            ticker.tick().await;
            if flag.load(Ordering::Acquire) {
                break;
            }
            tick(frame);
            frame += 1;
        }
    });

    FrameHandle { task, cancelled }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicU64;

    fn counter() -> (Arc<AtomicU64>, impl FnMut(u64) + Send + 'static) {
        let count = Arc::new(AtomicU64::new(0));
        let inner = Arc::clone(&count);
        (count, move |_| {
            inner.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_at_interval() {
        let (count, tick) = counter();
        let handle = spawn_frame_loop(Duration::from_millis(16), tick);

        tokio::time::sleep(Duration::from_millis(16 * 10 + 8)).await;

        // Immediate first tick plus one per elapsed interval
        assert_eq!(count.load(Ordering::SeqCst), 11);
        handle.cancel();
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_ticks_after_cancel() {
        let (count, tick) = counter();
        let handle = spawn_frame_loop(Duration::from_millis(16), tick);

        tokio::time::sleep(Duration::from_millis(40)).await;
        handle.cancel();
        let seen = count.load(Ordering::SeqCst);

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(count.load(Ordering::SeqCst), seen);
        assert!(handle.is_cancelled());
        assert!(handle.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels() {
        let (count, tick) = counter();
        drop(spawn_frame_loop(Duration::from_millis(16), tick));

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
