//! Notation text retrieval
//!
//! The compiler itself only sees plain text; this module supplies it,
//! either from a file or stdin, with optional markup stripping for pages
//! saved from a letter-notes site. Network retrieval stays outside the
//! program (`curl <url> | beepc --html ...`).

use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Read the raw notation document from a file, or stdin when absent
pub fn fetch_notation_text(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Extract the notation from a saved letter-notes web page
///
/// Letter-notes pages carry the score inside the first `<code>` element.
/// Takes that region (or the whole input if there is none), removes the
/// remaining tags, and trims surrounding whitespace.
pub fn extract_notation(page: &str) -> String {
    let region = match page.split_once("<code>") {
        Some((_, rest)) => rest.split("</code>").next().unwrap_or(rest),
        None => page,
    };
    strip_markup(region).trim().to_string()
}

/// Remove `<...>` tag spans from a markup fragment
fn strip_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;

    for c in text.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }

    out
}
