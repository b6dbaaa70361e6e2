//! Filename hygiene checks for the uploads folder.
//!
//! Spaces, parentheses and hyphens in image names have historically broken
//! downstream tooling, so the intake scan flags them. By default they are
//! warnings only; `strict_filenames` in the config turns them into refusals.

use regex::Regex;

/// Characters the intake scan advises against.
const DISCOURAGED: &str = r"[ ()\-]";

/// Return a human-readable advisory when the filename contains discouraged
/// characters, or None when the name is clean.
pub fn advisory(name: &str) -> Option<String> {
    let re = Regex::new(DISCOURAGED).expect("valid filename pattern");
    if !re.is_match(name) {
        return None;
    }

    let mut found: Vec<&str> = Vec::new();
    if name.contains(' ') {
        found.push("spaces");
    }
    if name.contains('(') || name.contains(')') {
        found.push("parentheses");
    }
    if name.contains('-') {
        found.push("hyphens");
    }
    Some(format!("contains {}", found.join(", ")))
}

/// Check the file extension against the configured allow-list
/// (case-insensitive, e.g. png/jpg/jpeg/gif).
pub fn extension_allowed(name: &str, allowed: &[String]) -> bool {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => {
            let ext = ext.to_lowercase();
            allowed.iter().any(|a| a.to_lowercase() == ext)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exts() -> Vec<String> {
        vec!["png".into(), "jpg".into(), "jpeg".into(), "gif".into()]
    }

    #[test]
    fn clean_name_has_no_advisory() {
        assert!(advisory("scan_0001.png").is_none());
    }

    #[test]
    fn discouraged_chars_are_reported() {
        let msg = advisory("my scan (1)-final.png").unwrap();
        assert!(msg.contains("spaces"));
        assert!(msg.contains("parentheses"));
        assert!(msg.contains("hyphens"));
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(extension_allowed("a.PNG", &exts()));
        assert!(extension_allowed("b.jpeg", &exts()));
        assert!(!extension_allowed("c.pdf", &exts()));
        assert!(!extension_allowed("noext", &exts()));
        assert!(!extension_allowed(".hidden", &exts()));
    }
}
