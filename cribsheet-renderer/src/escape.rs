//! LaTeX escaping for user-supplied text.
//!
//! Two sequential passes, and the order is load-bearing:
//!
//! 1. `\` becomes `\textbackslash{}`, so the backslashes written by the
//!    second pass are never re-escaped;
//! 2. each remaining reserved character gets its escaped form, braces before
//!    tilde and caret so the braces inside `\textasciitilde{}` and
//!    `\textasciicircum{}` stay intact.
//!
//! A consequence of the pass order: the braces introduced in pass 1 are
//! themselves escaped by pass 2, so a lone `\` comes out as
//! `\textbackslash\{\}`. Do not merge the passes into a single scan.

/// Reserved characters and their replacements, applied in this order after
/// the backslash pass.
const RESERVED: &[(char, &str)] = &[
    ('&', "\\&"),
    ('%', "\\%"),
    ('$', "\\$"),
    ('#', "\\#"),
    ('_', "\\_"),
    ('{', "\\{"),
    ('}', "\\}"),
    ('~', "\\textasciitilde{}"),
    ('^', "\\textasciicircum{}"),
];

/// Neutralize every character LaTeX treats specially, so embedded user text
/// can never alter document structure.
///
/// Applied to every piece of user-supplied text (item label, item content,
/// sheet title) before it reaches the template.
pub fn escape(raw: &str) -> String {
    let mut escaped = raw.replace('\\', "\\textbackslash{}");
    for &(ch, replacement) in RESERVED {
        escaped = escaped.replace(ch, replacement);
    }
    escaped
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("x & y", "x \\& y")]
    #[case("50% off", "50\\% off")]
    #[case("$5", "\\$5")]
    #[case("#1 rule", "\\#1 rule")]
    #[case("a_b", "a\\_b")]
    #[case("{group}", "\\{group\\}")]
    #[case("~user", "\\textasciitilde{}user")]
    #[case("a^2", "a\\textasciicircum{}2")]
    fn reserved_characters_get_escaped(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(escape(raw), expected);
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(escape("slope m = dy/dx"), "slope m = dy/dx");
        assert_eq!(escape(""), "");
    }

    #[test]
    fn backslash_pass_runs_first() {
        // Pass 2 escapes the braces written by pass 1; locked-in behavior.
        assert_eq!(escape("\\"), "\\textbackslash\\{\\}");
        assert_eq!(escape("\\frac{a}{b}"), "\\textbackslash\\{\\}frac\\{a\\}\\{b\\}");
    }

    #[test]
    fn tilde_and_caret_keep_their_terminating_braces() {
        assert_eq!(escape("~"), "\\textasciitilde{}");
        assert_eq!(escape("^"), "\\textasciicircum{}");
        assert_eq!(escape("e^x ~ 1+x"), "e\\textasciicircum{}x \\textasciitilde{} 1+x");
    }

    #[test]
    fn no_reserved_character_left_standalone() {
        let hostile = "100% of {groups} & $vars #1 _x ~y ^z \\cmd 50%";
        let escaped = escape(hostile);
        let chars: Vec<char> = escaped.chars().collect();
        for (idx, ch) in chars.iter().enumerate() {
            match ch {
                '&' | '%' | '$' | '#' | '_' => {
                    assert_eq!(chars[idx - 1], '\\', "unescaped {ch} at {idx}: {escaped}");
                }
                // Braces are either backslash-prefixed or the empty `{}`
                // terminating a substitution command.
                '{' => assert!(
                    chars[idx - 1] == '\\' || chars.get(idx + 1) == Some(&'}'),
                    "unescaped {{ at {idx}: {escaped}"
                ),
                '}' => assert!(
                    chars[idx - 1] == '\\' || chars[idx - 1] == '{',
                    "unescaped }} at {idx}: {escaped}"
                ),
                '~' | '^' => panic!("raw {ch} survived escaping: {escaped}"),
                _ => {}
            }
        }
    }

    #[test]
    fn comment_marker_cannot_comment_out_the_rest_of_a_line() {
        assert_eq!(escape("99% confidence"), "99\\% confidence");
    }
}
