//! Section lexer for HDL source text.
//!
//! Strips `//` line comments, folds the source into one whitespace-joined
//! working string, and captures the text of each `Keyword: ...;` section.
//! Keywords are matched case-insensitively and sections may appear in any
//! order. A missing section yields an empty fragment; the parser decides
//! which sections are allowed to be empty.

/// The four raw section fragments plus the comment-free working text.
///
/// Fragments are trimmed and exclude the keyword, `:`, and terminating `;`.
/// `working_text` is the folded, comment-free source, kept for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    /// Raw text of the `Inputs` section.
    pub inputs: String,
    /// Raw text of the `Outputs` section.
    pub outputs: String,
    /// Raw text of the `Parts` section.
    pub parts: String,
    /// Raw text of the `Wires` section.
    pub wires: String,
    /// The comment-free, line-folded source text.
    pub working_text: String,
}

/// Splits HDL source into its four labeled sections.
pub fn sectioned(src: &str) -> Sections {
    let working_text = fold_lines(src);
    Sections {
        inputs: capture_section(&working_text, "inputs"),
        outputs: capture_section(&working_text, "outputs"),
        parts: capture_section(&working_text, "parts"),
        wires: capture_section(&working_text, "wires"),
        working_text,
    }
}

/// Removes `//` comments and joins lines with single spaces.
fn fold_lines(src: &str) -> String {
    let mut out = String::with_capacity(src.len());
    for line in src.lines() {
        let code = match line.find("//") {
            Some(pos) => &line[..pos],
            None => line,
        };
        out.push_str(code);
        out.push(' ');
    }
    out
}

/// Finds `keyword` (case-insensitive) followed by optional whitespace and
/// `:`, and returns the trimmed text up to the next `;`.
///
/// Returns an empty string if the keyword never appears or its section has
/// no terminating `;`.
fn capture_section(text: &str, keyword: &str) -> String {
    let bytes = text.as_bytes();
    let kw = keyword.as_bytes();
    let mut i = 0;
    while i + kw.len() <= bytes.len() {
        if bytes[i..i + kw.len()].eq_ignore_ascii_case(kw) {
            let mut j = i + kw.len();
            while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                j += 1;
            }
            if j < bytes.len() && bytes[j] == b':' {
                j += 1;
                let start = j;
                while j < bytes.len() && bytes[j] != b';' {
                    j += 1;
                }
                if j < bytes.len() {
                    return text[start..j].trim().to_string();
                }
                return String::new();
            }
        }
        i += 1;
    }
    String::new()
}
