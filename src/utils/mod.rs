mod fetch_data;

pub use fetch_data::FetchData;

use web_sys::Document;

/// Returns the root [`Document`], or `None` outside of a browser window.
#[inline]
pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Upper-cases the first character of every whitespace-separated word in `s`.
///
/// This mirrors the CSS `text-transform: capitalize` rule. The remaining characters are left
/// untouched.
pub fn capitalize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut word_start = true;

    for c in s.chars() {
        if c.is_whitespace() {
            word_start = true;
            out.push(c);
        } else if word_start {
            word_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }

    out
}
