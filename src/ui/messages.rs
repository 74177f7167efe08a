//! Colored, icon-prefixed console output.
//! Everything the tool reports to the user goes through these helpers:
//! progress on stdout, problems on stderr.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// How one kind of message is rendered.
struct Style {
    color: &'static str,
    icon: &'static str,
    to_stderr: bool,
}

const INFO: Style = Style {
    color: "\x1b[34m",
    icon: "ℹ️",
    to_stderr: false,
};
const SUCCESS: Style = Style {
    color: "\x1b[32m",
    icon: "✅",
    to_stderr: false,
};
const WARNING: Style = Style {
    color: "\x1b[33m",
    icon: "⚠️",
    to_stderr: true,
};
const ERROR: Style = Style {
    color: "\x1b[31m",
    icon: "❌",
    to_stderr: true,
};

fn emit<T: fmt::Display>(style: &Style, msg: T) {
    let line = format!("{}{}{} {}{}", style.color, BOLD, style.icon, RESET, msg);
    if style.to_stderr {
        eprintln!("{}", line);
    } else {
        println!("{}", line);
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(&INFO, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(&SUCCESS, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(&WARNING, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(&ERROR, msg);
}

/// Indented continuation line under a previous message.
pub fn detail<T: fmt::Display>(msg: T) {
    println!("     {}", msg);
}

/// Section banner, e.g. `======= Check-in =======`.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}======= {} ======={}", INFO.color, BOLD, msg, RESET);
}
