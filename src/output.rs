use owo_colors::OwoColorize;

/// Small wrapper around stderr printing to provide consistent, colored
/// user-facing messages. Colors are enabled only when stderr is a TTY.
fn is_tty() -> bool {
    atty::is(atty::Stream::Stderr)
}

pub fn print_warn(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

/// Usage text goes to stderr unprefixed.
pub fn print_usage(text: &str) {
    eprint!("{}", text);
    if !text.ends_with('\n') {
        eprintln!();
    }
}
