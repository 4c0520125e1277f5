//! ASCII alias normalization for formula input.
//!
//! Sits in front of the lexer, rewriting the documented ASCII aliases to the
//! canonical connective symbols in a single O(n) pass over the input:
//!
//! - **`forall` / `exists`** — quantifiers `∀` / `∃`
//! - **`implies` / `=>` / `->` / `—>`** — implication `→`
//! - **`and` / `&&` / `&`** — conjunction `∧`
//! - **`or` / `|`** — disjunction `∨`
//! - **`not` / `!`** — negation `¬`
//!
//! Word aliases only fire at word boundaries so they never rewrite the inside
//! of a longer identifier. Symbolic aliases fire anywhere. Because the scan
//! moves strictly left to right and no replacement ever re-forms an alias,
//! the order of the table entries cannot change the result for well-formed
//! input; canonical formulas pass through untouched. There are no error
//! cases.

/// Aliases that are words: replaced only at word boundaries.
const WORD_ALIASES: &[(&str, &str)] = &[
    ("forall", "∀"),
    ("exists", "∃"),
    ("implies", "→"),
    ("and", "∧"),
    ("not", "¬"),
    ("or", "∨"),
];

/// Symbolic aliases: replaced anywhere. Longer spellings come first so that
/// `&&` is seen before `&`.
const SYMBOL_ALIASES: &[(&str, &str)] = &[
    ("&&", "∧"),
    ("&", "∧"),
    ("—>", "→"),
    ("->", "→"),
    ("=>", "→"),
    ("|", "∨"),
    ("!", "¬"),
];

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Rewrite every documented ASCII alias in `formula` to its canonical symbol.
pub fn normalize(formula: &str) -> String {
    let mut out = String::with_capacity(formula.len());
    let mut rest = formula;
    let mut prev: Option<char> = None;

    'scan: while let Some(c) = rest.chars().next() {
        let at_word_start = !prev.map_or(false, is_word_char);

        if at_word_start {
            for &(alias, replacement) in WORD_ALIASES {
                if let Some(after) = rest.strip_prefix(alias) {
                    let boundary_after = !after.chars().next().map_or(false, is_word_char);
                    if boundary_after {
                        out.push_str(replacement);
                        rest = after;
                        prev = None;
                        continue 'scan;
                    }
                }
            }
        }

        for &(alias, replacement) in SYMBOL_ALIASES {
            if let Some(after) = rest.strip_prefix(alias) {
                out.push_str(replacement);
                rest = after;
                prev = None;
                continue 'scan;
            }
        }

        out.push(c);
        rest = &rest[c.len_utf8()..];
        prev = Some(c);
    }

    out
}
