//! Paginator warnings with colored terminal output.
//!
//! A recovery path can fire repeatedly with the same report (for example a
//! navigation handler invoked with the same bad index on every click), so
//! every message is deduplicated: each unique component/message pair prints
//! at most once until the registry is cleared.

use std::collections::HashSet;
use std::sync::{Mutex, OnceLock};

/// ANSI escape for yellow terminal output.
const YELLOW: &str = "\x1b[33m";
/// ANSI escape resetting terminal attributes.
const RESET: &str = "\x1b[0m";

/// Registry of messages already printed.
fn registry() -> &'static Mutex<HashSet<String>> {
    static WARNED: OnceLock<Mutex<HashSet<String>>> = OnceLock::new();
    WARNED.get_or_init(|| Mutex::new(HashSet::new()))
}

/// Report a recoverable fault on stderr, at most once per unique message.
///
/// `component` names the subsystem the report comes from (`"nav"`,
/// `"config"`, ...). Returns `true` if the message was printed, `false` if
/// it was suppressed as a duplicate.
///
/// # Example
/// ```ignore
/// let _ = warn_once("nav", "went to invalid page: 7");
/// ```
///
/// # Panics
/// Panics if the registry mutex is poisoned.
pub fn warn_once(component: &str, message: &str) -> bool {
    let fresh = registry()
        .lock()
        .unwrap()
        .insert(format!("[{component}] {message}"));

    if fresh {
        eprintln!("{YELLOW}[Quire {component}] ⚠ {message}{RESET}");
    }
    fresh
}

/// Forget every recorded warning so it may print again.
///
/// Call when starting a fresh build cycle, where a repeat of an old report
/// is news again.
///
/// # Panics
/// Panics if the registry mutex is poisoned.
pub fn clear_warnings() {
    registry().lock().unwrap().clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: the registry is global, so separate #[test] functions
    // would race through clear_warnings.
    #[test]
    fn dedup_and_clear() {
        assert!(warn_once("test", "same report"));
        assert!(!warn_once("test", "same report"));
        // A different component makes the message unique again.
        assert!(warn_once("other", "same report"));

        clear_warnings();
        assert!(warn_once("test", "same report"));
    }
}
