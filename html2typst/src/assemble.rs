//! Output assembly
//!
//! Joins block fragments with exactly one blank line between them. Fragments are trimmed of
//! surrounding blank lines but their inside is left alone, so code fences keep every line
//! they were given. Blank-line collapsing is only applied to paragraph text.

/// Separator between two block fragments.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Join block fragments into the final document. The first line keeps its indentation, so a
/// document opening with an indented list item stays indented.
pub fn assemble<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    join(fragments).trim_end().to_string()
}

/// Join non-empty fragments with one blank line between consecutive ones.
pub(crate) fn join<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut output = String::new();
    for fragment in fragments {
        let fragment = trim_blank_lines(fragment.as_ref());
        if fragment.is_empty() {
            continue;
        }
        if !output.is_empty() {
            output.push_str(BLOCK_SEPARATOR);
        }
        output.push_str(fragment);
    }
    output
}

/// Normalize the text of a paragraph: surrounding whitespace removed, whitespace-only lines
/// emptied and runs of blank lines collapsed into one.
pub(crate) fn paragraph(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut previous_blank = false;
    for line in text.trim().split('\n') {
        let blank = line.trim().is_empty();
        if blank && previous_blank {
            continue;
        }
        if !output.is_empty() {
            output.push('\n');
        }
        if !blank {
            output.push_str(line);
        }
        previous_blank = blank;
    }
    output
}

/// Strip leading and trailing lines that hold only whitespace, plus trailing whitespace on
/// the last line. Indentation of the first non-blank line is kept.
fn trim_blank_lines(fragment: &str) -> &str {
    let trimmed_end = fragment.trim_end();
    let start = trimmed_end
        .char_indices()
        .take_while(|(_, c)| c.is_whitespace())
        .filter(|(_, c)| *c == '\n')
        .map(|(index, _)| index + 1)
        .last()
        .unwrap_or(0);
    &trimmed_end[start..]
}
