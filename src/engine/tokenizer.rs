//! Argument tokenizers.
//!
//! Each dialect splits its argument list differently:
//!
//! - **AdGuard** calls are a parenthesised list of quoted strings. They are
//!   read by a three-state machine ([`tokenize_call`]), the only true state
//!   machine in the engine.
//! - **uBlock Origin** calls and `$` modifier lists are flat, comma-separated
//!   and use `\,` for a literal comma ([`split_escaped`]).
//! - **Adblock Plus** snippets are whitespace-separated words with quoting and
//!   backslash escapes, chained by `;` ([`split_snippets`]).
//!
//! ## AdGuard call state machine
//!
//! ```text
//!            ws , (              any other char
//!           ┌──────┐            ┌──────────────┐
//!           v      │   ' or "   v              │
//!   ──> [Opened] ──┴──────────> [Param] ───────┘
//!         │  ^                    │
//!         │  └── matching quote ──┘  (after an even run of `\`)
//!         │
//!         └── `)` as last char ──> [Closed]
//! ```
//!
//! Inside `Param`, a run of `n` backslashes directly before the opening quote
//! character stands for `n / 2` literal backslashes; an odd run also escapes
//! the quote. Backslashes anywhere else are literal, so `'\d+'` stays `\d+`.
//!
//! Anything else in `Opened`, or ending in a state other than `Closed`, is a
//! parse error. No partial argument list is ever returned.

use crate::{Dialect, Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Opened,
    Param,
    Closed,
}

/// Tokenize an AdGuard call body such as `('name', 'arg')`.
///
/// The first element of the result is the scriptlet name. An empty `()`
/// returns no elements.
pub(crate) fn tokenize_call(input: &str) -> Result<Vec<String>> {
    let chars: Vec<char> = input.trim().chars().collect();
    let last = chars.len().checked_sub(1);

    let mut state = State::Opened;
    let mut quote = '\'';
    let mut current = String::new();
    let mut backslashes = 0usize;
    let mut args = Vec::new();

    for (i, &c) in chars.iter().enumerate() {
        state = match state {
            State::Opened => match c {
                '(' | ',' => State::Opened,
                c if c.is_whitespace() => State::Opened,
                '\'' | '"' => {
                    quote = c;
                    State::Param
                }
                ')' if Some(i) == last => State::Closed,
                ')' => return Err(Error::parse(Dialect::Adg, format!("unbalanced ')' at offset {i}"))),
                other => {
                    return Err(Error::parse(Dialect::Adg, format!("unexpected character '{other}' at offset {i}")));
                }
            },
            State::Param => match c {
                '\\' => {
                    backslashes += 1;
                    State::Param
                }
                c if c == quote => {
                    current.extend(std::iter::repeat_n('\\', backslashes / 2));
                    let escaped = backslashes % 2 == 1;
                    backslashes = 0;
                    if escaped {
                        current.push(c);
                        State::Param
                    } else {
                        args.push(std::mem::take(&mut current));
                        State::Opened
                    }
                }
                c => {
                    current.extend(std::iter::repeat_n('\\', backslashes));
                    backslashes = 0;
                    current.push(c);
                    State::Param
                }
            },
            State::Closed => return Err(Error::parse(Dialect::Adg, "characters after the closing ')'")),
        };
    }

    match state {
        State::Closed => {
            log::trace!("[tokenize] adg {input:?} -> {args:?}");
            Ok(args)
        }
        State::Param => Err(Error::parse(Dialect::Adg, "unterminated quoted argument")),
        State::Opened => Err(Error::parse(Dialect::Adg, "missing closing ')'")),
    }
}

/// Split `input` on `separator` unless it is escaped with a backslash. The
/// escaping backslash is dropped; any other backslash is kept as written.
pub(crate) fn split_escaped(input: &str, separator: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&separator) => {
                current.push(separator);
                chars.next();
            }
            c if c == separator => parts.push(std::mem::take(&mut current)),
            c => current.push(c),
        }
    }
    parts.push(current);
    parts
}

/// Split a `$` modifier list (`script,redirect=noopjs`).
pub(crate) fn split_modifiers(input: &str) -> Vec<String> {
    if input.trim().is_empty() {
        return Vec::new();
    }
    split_escaped(input, ',').into_iter().map(|m| m.trim().to_string()).collect()
}

/// Split a uBO call body (`set-constant, foo, ''`) into name and arguments.
///
/// Pieces are trimmed and one layer of matching quotes is removed, so `''`
/// becomes an empty argument. An empty body returns no elements.
pub(crate) fn split_ubo_args(body: &str) -> Vec<String> {
    if body.trim().is_empty() {
        return Vec::new();
    }
    let args: Vec<String> =
        split_escaped(body, ',').iter().map(|piece| strip_quotes(piece.trim()).to_string()).collect();
    log::trace!("[tokenize] ubo {body:?} -> {args:?}");
    args
}

fn strip_quotes(piece: &str) -> &str {
    let mut chars = piece.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) if first == last && matches!(first, '\'' | '"' | '`') => &piece[1..piece.len() - 1],
        _ => piece,
    }
}

/// Trailing tokens of `remove-attr`/`remove-class` that select when to apply
/// the removal rather than what to remove. They combine with spaces
/// (`asap stay`).
pub(crate) const MODE_TOKENS: &[&str] = &["asap", "stay", "complete"];

fn is_mode(piece: &str) -> bool {
    let mut words = piece.split_whitespace().peekable();
    words.peek().is_some() && words.all(|w| MODE_TOKENS.contains(&w))
}

/// Re-join a selector that uBO split at its unescaped commas.
///
/// `args` excludes the name: `[attrs, selector pieces.., mode?]`.
pub(crate) fn rejoin_selector(mut args: Vec<String>) -> Vec<String> {
    if args.len() <= 2 {
        return args;
    }

    let mode = match args.last() {
        Some(last) if is_mode(last) => args.pop(),
        _ => None,
    };
    let selector = args.split_off(1).join(", ");
    args.push(selector);
    args.extend(mode);
    args
}

/// Split the body of an Adblock Plus snippet line into statements and their
/// words.
///
/// Statements are separated by `;`, words by whitespace. `'…'` and `"…"`
/// group words; a backslash escapes the next character, with `\n`, `\r`,
/// `\t` and `\uXXXX` decoded.
pub(crate) fn split_snippets(body: &str) -> Result<Vec<Vec<String>>> {
    let mut statements = Vec::new();
    let mut words: Vec<String> = Vec::new();
    let mut word = String::new();
    let mut has_word = false;
    let mut quote: Option<char> = None;
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            let escaped = match chars.next() {
                Some('n') => '\n',
                Some('r') => '\r',
                Some('t') => '\t',
                Some('u') => decode_unicode(&mut chars)?,
                Some(other) => other,
                None => return Err(Error::parse(Dialect::Abp, "dangling escape at end of snippet")),
            };
            word.push(escaped);
            has_word = true;
            continue;
        }

        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => word.push(c),
            None => match c {
                '\'' | '"' => {
                    quote = Some(c);
                    has_word = true;
                }
                ';' => {
                    flush_word(&mut words, &mut word, &mut has_word);
                    if !words.is_empty() {
                        statements.push(std::mem::take(&mut words));
                    }
                }
                c if c.is_whitespace() => flush_word(&mut words, &mut word, &mut has_word),
                c => {
                    word.push(c);
                    has_word = true;
                }
            },
        }
    }

    if quote.is_some() {
        return Err(Error::parse(Dialect::Abp, "unterminated quoted argument"));
    }
    flush_word(&mut words, &mut word, &mut has_word);
    if !words.is_empty() {
        statements.push(words);
    }

    log::trace!("[tokenize] abp {body:?} -> {statements:?}");
    Ok(statements)
}

fn flush_word(words: &mut Vec<String>, word: &mut String, has_word: &mut bool) {
    if *has_word {
        words.push(std::mem::take(word));
        *has_word = false;
    }
}

fn decode_unicode(chars: &mut std::str::Chars<'_>) -> Result<char> {
    let hex: String = chars.by_ref().take(4).collect();
    if hex.len() != 4 {
        return Err(Error::parse(Dialect::Abp, "truncated \\u escape"));
    }
    u32::from_str_radix(&hex, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| Error::parse(Dialect::Abp, format!("invalid \\u escape '{hex}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn adg_call_reads_quoted_arguments() {
        let args = tokenize_call("('abort-on-property-read', 'alert')").unwrap();
        assert_eq!(args, strings(&["abort-on-property-read", "alert"]));
    }

    #[test]
    fn adg_call_mixes_quote_styles_and_keeps_inner_commas() {
        let args = tokenize_call(r#"("set-constant", 'a,b', "it's")"#).unwrap();
        assert_eq!(args, strings(&["set-constant", "a,b", "it's"]));
    }

    #[test]
    fn adg_call_unescapes_the_opening_quote() {
        let args = tokenize_call(r"('log', 'don\'t', '\d+')").unwrap();
        assert_eq!(args, strings(&["log", "don't", r"\d+"]));
    }

    #[test]
    fn adg_call_reads_escaped_backslash_before_quote() {
        let args = tokenize_call(r"('log', 'C:\\', 'a\\\'b')").unwrap();
        assert_eq!(args, strings(&["log", r"C:\", r"a\'b"]));
        assert!(tokenize_call(r"('log', 'C:\')").is_err());
    }

    #[test]
    fn adg_call_keeps_empty_arguments() {
        let args = tokenize_call("('set-constant', 'foo', '')").unwrap();
        assert_eq!(args, strings(&["set-constant", "foo", ""]));
    }

    #[test]
    fn adg_call_allows_empty_list() {
        assert_eq!(tokenize_call("()").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn adg_call_rejects_unterminated_quote() {
        let err = tokenize_call("('abc)").unwrap_err();
        assert!(matches!(err, Error::Parse { dialect: Dialect::Adg, .. }));
    }

    #[test]
    fn adg_call_rejects_bare_words_and_stray_parens() {
        assert!(tokenize_call("(log)").is_err());
        assert!(tokenize_call("('log') ('x')").is_err());
        assert!(tokenize_call("('log'").is_err());
    }

    #[test]
    fn escaped_separator_stays_in_one_piece() {
        assert_eq!(split_modifiers(r"a\,b"), strings(&["a,b"]));
        assert_eq!(split_modifiers(r"script, redirect=noopjs"), strings(&["script", "redirect=noopjs"]));
        assert_eq!(split_escaped(r"/\d+/,x", ','), strings(&[r"/\d+/", "x"]));
    }

    #[test]
    fn ubo_args_are_trimmed_and_unquoted() {
        let args = split_ubo_args(r"set-constant.js, test, '', a\, b");
        assert_eq!(args, strings(&["set-constant.js", "test", "", "a, b"]));
        assert!(split_ubo_args("  ").is_empty());
    }

    #[test]
    fn selector_is_rejoined_before_mode_token() {
        let args = rejoin_selector(strings(&["href", "a.ad", "a.promo", "stay"]));
        assert_eq!(args, strings(&["href", "a.ad, a.promo", "stay"]));

        let args = rejoin_selector(strings(&["href", "a.ad", "a.promo"]));
        assert_eq!(args, strings(&["href", "a.ad, a.promo"]));

        let args = rejoin_selector(strings(&["href", "a.ad", "complete"]));
        assert_eq!(args, strings(&["href", "a.ad", "complete"]));
    }

    #[test]
    fn combined_mode_stays_separate() {
        let args = rejoin_selector(strings(&["href", "a.ad", "a.promo", "asap stay"]));
        assert_eq!(args, strings(&["href", "a.ad, a.promo", "asap stay"]));

        let args = rejoin_selector(strings(&["href", "a.ad", "a.promo", "asap banner"]));
        assert_eq!(args, strings(&["href", "a.ad, a.promo, asap banner"]));
    }

    #[test]
    fn abp_snippets_split_on_semicolons_and_whitespace() {
        let out = split_snippets("log 1; abort-on-property-read   alert").unwrap();
        assert_eq!(out, vec![strings(&["log", "1"]), strings(&["abort-on-property-read", "alert"])]);
    }

    #[test]
    fn abp_quotes_group_and_escapes_decode() {
        let out = split_snippets(r"log 'a b;c' '' it\'s A\n").unwrap();
        assert_eq!(out, vec![strings(&["log", "a b;c", "", "it's", "A\n"])]);
    }

    #[test]
    fn abp_rejects_unterminated_quote() {
        assert!(split_snippets("log 'open").is_err());
        assert!(split_snippets(r"log \").is_err());
    }
}
