use std::cell::Cell;
use std::marker::PhantomData;

thread_local! {
    static EXCLUDE_DEPTH: Cell<u32> = const { Cell::new(0) };
}

/// True while at least one `AutogradExcludeGuard` is alive on this thread,
/// i.e. the autograd layer has already stripped itself from the call.
pub fn autograd_excluded() -> bool {
    EXCLUDE_DEPTH.with(|depth| depth.get() > 0)
}

/// Marks the current thread as running below autograd. Guards nest.
pub struct AutogradExcludeGuard {
    // thread-local state: must be dropped on the thread that created it
    _not_send: PhantomData<*const ()>,
}

impl AutogradExcludeGuard {
    pub fn new() -> Self {
        EXCLUDE_DEPTH.with(|depth| depth.set(depth.get() + 1));
        Self {
            _not_send: PhantomData,
        }
    }
}

impl Drop for AutogradExcludeGuard {
    fn drop(&mut self) {
        EXCLUDE_DEPTH.with(|depth| depth.set(depth.get() - 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_scopes_exclusion() {
        assert!(!autograd_excluded());
        {
            let _outer = AutogradExcludeGuard::new();
            assert!(autograd_excluded());
            {
                let _inner = AutogradExcludeGuard::new();
                assert!(autograd_excluded());
            }
            assert!(autograd_excluded());
        }
        assert!(!autograd_excluded());
    }

    #[test]
    fn exclusion_is_per_thread() {
        let _guard = AutogradExcludeGuard::new();
        let other = std::thread::spawn(autograd_excluded).join().unwrap();
        assert!(!other);
    }
}
