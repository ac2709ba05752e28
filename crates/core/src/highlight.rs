//! Lightweight syntax highlighting for the Python snippets on the site.
//!
//! Strings and comments are swapped for placeholders before any other token
//! is wrapped, so keywords or numbers inside them are never highlighted. The
//! placeholders are restored last, comments first and strings second.

use std::sync::LazyLock;

use regex::{Captures, Regex};

pub const KEYWORDS: [&str; 24] = [
    "def", "class", "import", "from", "return", "if", "else", "elif", "for", "while", "print",
    "True", "False", "in", "and", "or", "not", "as", "None", "break", "continue", "pass", "lambda",
    "with",
];

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|err| panic!("invalid highlight pattern {pattern}: {err}"))
}

static STRING: LazyLock<Regex> = LazyLock::new(|| compile(r#""[^"\n]*"|'[^'\n]*'"#));
static COMMENT: LazyLock<Regex> = LazyLock::new(|| compile(r"#.*"));
static KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!(r"\b({})\b", KEYWORDS.join("|"))));
static FUNCTION: LazyLock<Regex> = LazyLock::new(|| compile(r"\b([a-zA-Z_]\w*)\("));
static NUMBER: LazyLock<Regex> = LazyLock::new(|| compile(r"\b(\d+\.?\d*)\b"));
static STRING_SLOT: LazyLock<Regex> = LazyLock::new(|| compile(r"___STR(\d+)___"));
static COMMENT_SLOT: LazyLock<Regex> = LazyLock::new(|| compile(r"___COM(\d+)___"));

/// Escape the characters that would otherwise open markup.
///
/// Quotes are left alone so string literals can still be found afterwards.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render `source` as HTML with `<span class="token …">` wrappers.
#[must_use]
pub fn highlight(source: &str) -> String {
    let html = escape_html(source);

    let mut strings: Vec<String> = Vec::new();
    let html = STRING.replace_all(&html, |caps: &Captures<'_>| {
        strings.push(caps[0].to_owned());
        format!("___STR{}___", strings.len() - 1)
    });

    let mut comments: Vec<String> = Vec::new();
    let html = COMMENT.replace_all(&html, |caps: &Captures<'_>| {
        comments.push(caps[0].to_owned());
        format!("___COM{}___", comments.len() - 1)
    });

    let html = KEYWORD.replace_all(&html, r#"<span class="token keyword">${1}</span>"#);
    let html = FUNCTION.replace_all(&html, r#"<span class="token function">${1}</span>("#);
    let html = NUMBER.replace_all(&html, r#"<span class="token number">${1}</span>"#);

    let html = restore(&COMMENT_SLOT, &html, &comments, "comment");
    restore(&STRING_SLOT, &html, &strings, "string")
}

fn restore(slot: &Regex, html: &str, saved: &[String], class: &str) -> String {
    slot.replace_all(html, |caps: &Captures<'_>| {
        let original = caps[1]
            .parse::<usize>()
            .ok()
            .and_then(|index| saved.get(index));
        match original {
            Some(text) => format!(r#"<span class="token {class}">{text}</span>"#),
            None => caps[0].to_owned(),
        }
    })
    .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_keywords_and_calls() {
        assert_eq!(
            highlight("def add(a, b):"),
            r#"<span class="token keyword">def</span> <span class="token function">add</span>(a, b):"#
        );
    }

    #[test]
    fn keyword_call_is_not_double_wrapped() {
        assert_eq!(
            highlight("print(x)"),
            r#"<span class="token keyword">print</span>(x)"#
        );
    }

    #[test]
    fn keywords_inside_strings_are_left_alone() {
        assert_eq!(
            highlight(r#"print("if 1 in x")"#),
            r#"<span class="token keyword">print</span>(<span class="token string">"if 1 in x"</span>)"#
        );
    }

    #[test]
    fn hash_inside_string_is_not_a_comment() {
        assert_eq!(
            highlight("s = '#tag'"),
            r#"s = <span class="token string">'#tag'</span>"#
        );
    }

    #[test]
    fn comments_hide_their_contents() {
        assert_eq!(
            highlight("x = 1  # return 2\ny = 3.5"),
            "x = <span class=\"token number\">1</span>  \
             <span class=\"token comment\"># return 2</span>\n\
             y = <span class=\"token number\">3.5</span>"
        );
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            highlight("a < b"),
            "a &lt; b"
        );
        assert_eq!(escape_html("<b>&</b>"), "&lt;b&gt;&amp;&lt;/b&gt;");
    }

    #[test]
    fn plain_identifiers_pass_through() {
        assert_eq!(highlight("value = other"), "value = other");
    }
}
