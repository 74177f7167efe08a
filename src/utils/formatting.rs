//! Formatting utilities used for CLI output.

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Keep only the first and last `keep` characters of a secret.
pub fn mask_secret(secret: &str, keep: usize) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= keep * 2 {
        return "*".repeat(chars.len());
    }

    let head: String = chars[..keep].iter().collect();
    let tail: String = chars[chars.len() - keep..].iter().collect();
    format!("{}...{}", head, tail)
}
