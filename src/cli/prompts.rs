//! User-facing messages on stderr.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::style::Stylize;
use passmint::pass::Strength;

static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Interactive prompts are skipped when quiet or when stdin is not a tty.
fn skip_prompt() -> bool {
    quiet() || unsafe { libc::isatty(0) != 1 }
}

/// Suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{}", msg.yellow());
    }
}

/// Always shown.
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Shown in place of a password when nothing could be generated.
pub fn placeholder() {
    eprintln!("{}", "(no characters available)".dark_grey());
    if !quiet() {
        eprintln!("Enable at least one character set, or allow ambiguous characters.");
    }
}

pub fn strength(score: u8) {
    if quiet() {
        return;
    }
    let strength = Strength::from_score(score);
    let label = match strength {
        Strength::Weak => strength.label().red(),
        Strength::Moderate => strength.label().yellow(),
        Strength::Strong => strength.label().green(),
        Strength::VeryStrong => strength.label().cyan(),
    };
    eprintln!("Strength: {score}/100 ({label})");
}

pub fn clipboard_copied() {
    if !quiet() {
        eprintln!("*** -COPIED TO CLIPBOARD- ***");
    }
}

/// Ask whether to print instead when the clipboard is unavailable.
/// Non-interactive runs fall back to printing without asking.
pub fn clipboard_fallback_prompt(err: &str) -> bool {
    if skip_prompt() {
        return true;
    }

    eprintln!("{}", format!("Clipboard unavailable: {err}").yellow());
    eprint!("Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }
    let input = input.trim().to_lowercase();
    if input.is_empty() || input == "y" || input == "yes" {
        return true;
    }

    eprintln!("Aborted.");
    false
}
