//! Transient user notices, printed with a colour and an icon.

use std::fmt;
use std::io::{self, BufRead, Write};

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn styled(color: &str, icon: &str, msg: impl fmt::Display) -> String {
    format!("{color}{BOLD}{icon} {RESET}{msg}")
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", styled(FG_BLUE, ICON_INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", styled(FG_GREEN, ICON_OK, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", styled(FG_YELLOW, ICON_WARN, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", styled(FG_RED, ICON_ERR, msg));
}

pub fn header<T: fmt::Display>(msg: T) {
    println!("{FG_BLUE}{BOLD}== {msg} =={RESET}\n");
}

/// Ask a yes/no question on stdin. Anything but `y`/`yes` means no.
pub fn confirm(prompt: &str) -> bool {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    confirm_with(prompt, &mut stdin.lock(), &mut stdout)
}

pub fn confirm_with<R: BufRead, W: Write>(prompt: &str, input: &mut R, output: &mut W) -> bool {
    let _ = writeln!(output, "{}", styled(FG_YELLOW, ICON_WARN, prompt));
    let _ = write!(output, "Confirm [y/N]: ");
    let _ = output.flush();

    let mut s = String::new();
    if input.read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
