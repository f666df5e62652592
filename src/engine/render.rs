//! Dialect templates.
//!
//! Each dialect has one positive and one exception skeleton with two holes:
//! the domains prefix and the call.
//!
//! ```text
//! Adg  {domains}#%#//scriptlet({call})    {domains}#@%#//scriptlet({call})
//! Ubo  {domains}##+js({call})             {domains}#@#+js({call})
//! Abp  {domains}#$#{call}                 {domains}#@$#{call}
//! ```

use crate::{Dialect, ParsedCall};

struct Template {
    positive: &'static str,
    exception: &'static str,
    close: &'static str,
}

fn template(dialect: Dialect) -> Template {
    match dialect {
        Dialect::Adg => Template { positive: "#%#//scriptlet(", exception: "#@%#//scriptlet(", close: ")" },
        Dialect::Ubo => Template { positive: "##+js(", exception: "#@#+js(", close: ")" },
        Dialect::Abp => Template { positive: "#$#", exception: "#@$#", close: "" },
    }
}

/// Render one call for AdGuard or uBO, or a single-statement ABP line.
pub(crate) fn render_call(dialect: Dialect, domains: &str, exception: bool, call: &ParsedCall) -> String {
    render_calls(dialect, domains, exception, std::slice::from_ref(call))
}

/// Render `calls` as one line. Only Adblock Plus can chain several calls; for
/// the other dialects `calls` must hold exactly one.
pub(crate) fn render_calls(dialect: Dialect, domains: &str, exception: bool, calls: &[ParsedCall]) -> String {
    let t = template(dialect);
    let marker = if exception { t.exception } else { t.positive };
    let body = match dialect {
        Dialect::Adg => calls.iter().map(adg_call).collect::<Vec<_>>().join(", "),
        Dialect::Ubo => calls.iter().map(ubo_call).collect::<Vec<_>>().join(", "),
        Dialect::Abp => calls.iter().map(abp_call).collect::<Vec<_>>().join("; "),
    };
    format!("{domains}{marker}{body}{}", t.close)
}

fn adg_call(call: &ParsedCall) -> String {
    if call.is_generic() {
        return String::new();
    }
    std::iter::once(&call.name).chain(&call.args).map(|a| quote_adg(a)).collect::<Vec<_>>().join(", ")
}

fn ubo_call(call: &ParsedCall) -> String {
    if call.is_generic() {
        return String::new();
    }
    std::iter::once(call.name.clone())
        .chain(call.args.iter().map(|a| escape_separator(a, ',')))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Whether `arg` survives a uBO render and re-parse unchanged.
///
/// uBO trims arguments, strips one layer of quotes and has no escape for a
/// backslash that ends an argument followed by another one.
pub(crate) fn ubo_representable(arg: &str, last: bool) -> bool {
    let quoted = arg.len() >= 2 && {
        let (first, end) = (arg.as_bytes()[0], arg.as_bytes()[arg.len() - 1]);
        first == end && matches!(first, b'\'' | b'"' | b'`')
    };
    arg.trim() == arg && !quoted && (last || !arg.ends_with('\\'))
}

fn abp_call(call: &ParsedCall) -> String {
    std::iter::once(call.name.clone()).chain(call.args.iter().map(|a| quote_abp(a))).collect::<Vec<_>>().join(" ")
}

/// `'value'` with inner single quotes escaped. A run of backslashes that
/// precedes a quote or the end of the value is doubled.
pub(crate) fn quote_adg(arg: &str) -> String {
    let mut out = String::with_capacity(arg.len() + 2);
    let mut backslashes = 0;
    out.push('\'');
    for c in arg.chars() {
        match c {
            '\\' => backslashes += 1,
            '\'' => {
                out.extend(std::iter::repeat_n('\\', backslashes * 2 + 1));
                out.push('\'');
                backslashes = 0;
            }
            c => {
                out.extend(std::iter::repeat_n('\\', backslashes));
                out.push(c);
                backslashes = 0;
            }
        }
    }
    out.extend(std::iter::repeat_n('\\', backslashes * 2));
    out.push('\'');
    out
}

/// Bare word when safe, otherwise `'…'` with ABP escapes.
pub(crate) fn quote_abp(arg: &str) -> String {
    let needs_quotes =
        arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || matches!(c, '\'' | '"' | ';' | '\\'));
    if !needs_quotes {
        return arg.to_string();
    }

    let mut out = String::with_capacity(arg.len() + 2);
    out.push('\'');
    for c in arg.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Escape every `separator` in `value` with a backslash.
pub(crate) fn escape_separator(value: &str, separator: char) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if c == separator {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// `base$mod1,mod2` with commas inside modifier values re-escaped.
pub(crate) fn render_redirect(base: &str, modifiers: &[String]) -> String {
    let modifiers: Vec<String> = modifiers.iter().map(|m| escape_separator(m, ',')).collect();
    format!("{base}${}", modifiers.join(","))
}
