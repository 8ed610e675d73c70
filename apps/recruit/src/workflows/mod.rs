// Front-end workflows: upload slots, job spec generation, interview question generation.
// All backend calls go through api_client::RecruitmentApi.

use std::sync::atomic::{AtomicBool, Ordering};

pub mod interview;
pub mod job_spec;
pub mod upload;

#[cfg(test)]
pub(crate) mod test_support;

/// Busy indicator for a workflow that allows one request in flight at a time.
#[derive(Debug, Default)]
pub struct BusyFlag(AtomicBool);

impl BusyFlag {
    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Marks the workflow busy, or returns `None` if it already is.
    fn try_enter(&self) -> Option<BusyGuard<'_>> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard(&self.0))
    }
}

/// Clears the flag on drop, so a failed or abandoned request never leaves it set.
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_busy_flag_is_exclusive_and_released_on_drop() {
        let flag = BusyFlag::default();
        assert!(!flag.is_busy());

        let guard = flag.try_enter().expect("first entry");
        assert!(flag.is_busy());
        assert!(flag.try_enter().is_none());

        drop(guard);
        assert!(!flag.is_busy());
        assert!(flag.try_enter().is_some());
    }
}
