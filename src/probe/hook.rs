use std::{
    cell::Cell,
    panic::{self, PanicHookInfo},
    sync::Once,
    thread,
};

thread_local! {
    static PROBING: Cell<bool> = const { Cell::new(false) };
}

static INSTALL: Once = Once::new();

/// Marks the current thread as running a probe until dropped.
///
/// While a guard is alive, assertion panics raised on this thread are not
/// printed. The hook that does this is installed on first use and chains to
/// whatever hook was set before, so panics anywhere else behave as usual.
/// Swapping hooks is not possible while the thread is unwinding, so a probe
/// that first runs from a destructor during a panic is not silenced.
pub(crate) struct ProbingGuard {
    was_probing: bool,
}

impl ProbingGuard {
    pub(crate) fn enter() -> Self {
        if !thread::panicking() {
            INSTALL.call_once(install);
        }
        Self {
            was_probing: PROBING.replace(true),
        }
    }
}

impl Drop for ProbingGuard {
    fn drop(&mut self) {
        PROBING.set(self.was_probing);
    }
}

fn install() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info: &PanicHookInfo<'_>| {
        if PROBING.get() && carries_message(info) {
            return;
        }
        previous(info)
    }));
}

fn carries_message(info: &PanicHookInfo<'_>) -> bool {
    let payload = info.payload();
    payload.is::<&str>() || payload.is::<String>()
}
