//! Text translation from bracket tags to HTML.
//!
//! There is no parser here. A document goes through four whole-text
//! rewrites, in this order:
//!
//! 1. `<` and `>` become `&lt;` and `&gt;`
//! 2. every [`TagRule`](super::TagRule) of the table, one at a time
//! 3. `[href=` becomes `<a href="`
//! 4. every remaining `]` becomes `">`
//!
//! Step 4 assumes any bracket still present closes an href opener. A literal
//! `]` in ordinary text is rewritten as well.

use super::table::TagTable;

const HREF_OPEN_PATTERN: &str = "[href=";
const HREF_OPEN_REPLACEMENT: &str = "<a href=\"";
const TAG_CLOSE_PATTERN: &str = "]";
const TAG_CLOSE_REPLACEMENT: &str = "\">";

/// Translate a document using the standard table.
///
/// # Examples
///
/// ```
/// use bb2html::convert::translate;
///
/// assert_eq!(translate("[b]hi[/b]"), "<b>hi</b>");
/// assert_eq!(translate("a < b"), "a &lt; b");
/// ```
pub fn translate(text: &str) -> String {
    translate_with(&TagTable::standard(), text)
}

/// Translate a document using a caller supplied table.
pub fn translate_with(table: &TagTable, text: &str) -> String {
    let mut output = escape_angle_brackets(text);

    for rule in table.rules() {
        if output.contains(rule.pattern) {
            output = output.replace(rule.pattern, rule.replacement);
        }
    }

    rewrite_href_openers(&output)
}

// Must run before any rule inserts markup.
fn escape_angle_brackets(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}

fn rewrite_href_openers(text: &str) -> String {
    text.replace(HREF_OPEN_PATTERN, HREF_OPEN_REPLACEMENT)
        .replace(TAG_CLOSE_PATTERN, TAG_CLOSE_REPLACEMENT)
}
