use std::sync::atomic::{AtomicBool, Ordering};

use termcolor::{ColorChoice, StandardStream, WriteColor};

/// Set once cursor-restoring teardown has run, so it only runs once even if
/// both the signal handler and the normal exit path reach it.
static RESTORED: AtomicBool = AtomicBool::new(false);

/// Install a `Ctrl-C`/`SIGTERM` handler that restores the terminal cursor
/// and color state before the process exits.
///
/// The upstream C++ implementation traps six signals: `SIGINT`, `SIGTERM`,
/// `SIGSEGV`, `SIGILL`, `SIGABRT`, `SIGFPE`. This only traps the first two.
/// Rust's signal-handling story (the `signal-hook` crate's own
/// documentation, and `ctrlc`'s scope) explicitly does not support safely
/// registering a handler for a synchronous fault signal — the handler
/// would need to be async-signal-safe and unwind out of arbitrary program
/// state, which Rust's panic/unwind machinery cannot guarantee. A process
/// that takes SIGSEGV/SIGILL/SIGABRT/SIGFPE is already in an unrecoverable
/// state; restoring the cursor there is not worth the risk of the handler
/// itself faulting.
pub fn install_cursor_restore() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        restore_cursor();
        std::process::exit(130); // 128 + SIGINT
    })?;
    Ok(())
}

/// Hide the terminal cursor for the duration of the progress bar.
pub fn hide_cursor() {
    let mut stdout = StandardStream::stdout(ColorChoice::Never);
    let _ = write!(stdout, "\x1b[?25l");
}

/// Restore the terminal cursor and reset color state. Called from the
/// signal handler and from the normal end-of-process path; idempotent.
pub fn restore_cursor() {
    if RESTORED.swap(true, Ordering::SeqCst) {
        return;
    }
    let mut stdout = StandardStream::stdout(ColorChoice::Never);
    let _ = write!(stdout, "\x1b[?25h");
    let _ = stdout.reset();
}

/// RAII guard that restores the cursor on drop, covering normal returns
/// and unwinding panics alike. The signal handler covers the remaining
/// case (process killed by signal, which does not unwind).
pub struct CursorGuard;

impl CursorGuard {
    pub fn new() -> CursorGuard {
        hide_cursor();
        CursorGuard
    }
}

impl Default for CursorGuard {
    fn default() -> CursorGuard {
        CursorGuard::new()
    }
}

impl Drop for CursorGuard {
    fn drop(&mut self) {
        restore_cursor();
    }
}
