//! Terminal logging with colored module prefixes.
//!
//! `log!` always prints, `debug!` only with `--verbose`. Both write to
//! stderr: stdout is reserved for command output (`build` JSON, `tree`).
//!
//! ```ignore
//! log!("build"; "wrote {}", path.display());
//! debug!("structure"; "scanning {}", dir.display());
//! ```

use owo_colors::{OwoColorize, Style};
use std::{
    io::{self, Write},
    sync::atomic::{AtomicBool, Ordering},
};

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

/// Print `[module] message` to stderr.
pub fn log(module: &str, message: &str) {
    let mut stderr = io::stderr().lock();
    write_line(&mut stderr, module, message).ok();
}

fn write_line(out: &mut impl Write, module: &str, message: &str) -> io::Result<()> {
    let prefix = format!("[{module}]");
    writeln!(out, "{} {message}", prefix.style(prefix_style(module)))?;
    out.flush()
}

/// Commands get blue/green, problems red/yellow, everything else magenta.
fn prefix_style(module: &str) -> Style {
    let style = Style::new().bold();
    match module.to_ascii_lowercase().as_str() {
        "check" | "tree" => style.bright_blue(),
        "build" | "init" => style.bright_green(),
        "error" => style.bright_red(),
        "warning" => style.bright_yellow(),
        "hint" => style.bright_cyan(),
        _ => style.bright_magenta(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_line_format() {
        let mut out = Vec::new();
        write_line(&mut out, "build", "wrote config.json").unwrap();
        let line = String::from_utf8(out).unwrap();
        assert!(line.contains("[build]"));
        assert!(line.ends_with(" wrote config.json\n"));
    }

    #[test]
    fn test_prefix_style_is_case_insensitive() {
        assert_eq!(
            format!("{:?}", prefix_style("Error")),
            format!("{:?}", prefix_style("error"))
        );
    }

    #[test]
    fn test_verbose_toggle() {
        set_verbose(true);
        assert!(is_verbose());
        set_verbose(false);
        assert!(!is_verbose());
    }
}
