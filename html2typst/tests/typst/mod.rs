//! HTML → Typst translation tests
//!
//! One module per concern. Expected outputs are compared whole wherever the layout matters;
//! `contains` checks are used where only the presence of a fragment is the point.

mod debug;
mod kitchensink;
mod lists;
mod preservation;

use html2typst::translate_html_to_typst;

/// Production-mode translation.
pub(crate) fn typst(html: &str) -> String {
    translate_html_to_typst(html, false)
}

/// Debug-mode translation.
pub(crate) fn typst_debug(html: &str) -> String {
    translate_html_to_typst(html, true)
}
