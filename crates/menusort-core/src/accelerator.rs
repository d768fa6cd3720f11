//! Keystroke to menu accelerator conversion.
//!
//! Keystrokes look like `cmd-shift-p` or `ctrl--`; accelerators look like `Command+Shift+P` and
//! let the native menu draw the proper modifier glyphs.

use regex::Regex;
use std::sync::OnceLock;

fn modifier_regexes() -> &'static [(Regex, &'static str); 4] {
    static RE: OnceLock<[(Regex, &'static str); 4]> = OnceLock::new();
    RE.get_or_init(|| {
        [
            (Regex::new(r"(?i)shift").expect("valid regex"), "Shift"),
            (Regex::new(r"(?i)cmd").expect("valid regex"), "Command"),
            (Regex::new(r"(?i)ctrl").expect("valid regex"), "Ctrl"),
            (Regex::new(r"(?i)alt").expect("valid regex"), "Alt"),
        ]
    })
}

/// Returns `None` for an empty keystroke.
pub fn accelerator_for_keystroke(keystroke: &str) -> Option<String> {
    if keystroke.is_empty() {
        return None;
    }

    let mut parts = split_keystroke(keystroke);
    let key = parts.pop()?.to_uppercase().replacen('+', "Plus", 1);

    let mut keys: Vec<String> = parts
        .into_iter()
        .map(|modifier| {
            modifier_regexes()
                .iter()
                .fold(modifier.to_string(), |acc, (re, replacement)| {
                    re.replace_all(&acc, *replacement).into_owned()
                })
        })
        .collect();
    keys.push(key);
    Some(keys.join("+"))
}

/// Splits on every `-` that is followed by another character, so a trailing `-` stays part of
/// the key (`ctrl--` is `ctrl` + `-`).
fn split_keystroke(keystroke: &str) -> Vec<&str> {
    let mut parts: Vec<&str> = Vec::new();
    let mut start = 0usize;
    let mut chars = keystroke.char_indices().peekable();
    while let Some((i, ch)) = chars.next() {
        if ch == '-' && chars.peek().is_some() {
            parts.push(&keystroke[start..i]);
            start = i + 1;
        }
    }
    parts.push(&keystroke[start..]);
    parts
}
