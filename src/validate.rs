use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

// Up to three leading digit groups (optionally parenthesized, each followed by an
// optional separator), then the subscriber digits.
static TEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?(?:\(?[0-9]{1,4}\)?[-\s.]?){0,3}[0-9]{1,9}$").expect("tel pattern")
});

static DECIMAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
        .expect("decimal pattern")
});

// ECMAScript WhiteSpace and LineTerminator code points. Unlike
// `char::is_whitespace`, this includes U+FEFF and excludes U+0085.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{9}'
            | '\u{a}'
            | '\u{b}'
            | '\u{c}'
            | '\u{d}'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

/// Trims a string the way a browser's `String.prototype.trim` does.
pub fn js_trim(s: &str) -> &str {
    s.trim_matches(is_js_whitespace)
}

/// Decides if a field holds anything worth validating
///
/// # Returns
/// true: if the value is non-empty after trimming; false otherwise
pub fn has_value(value: &str) -> bool {
    !js_trim(value).is_empty()
}

/// Decides if a string looks like an email address
/// (something@something.something, no whitespace, a single @)
pub fn is_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// Decides if a string is an absolute URL
///
/// Parses with the WHATWG rules (as a browser's `new URL()` does), then rejects
/// hierarchical URLs that name no host, such as `htp:/bad`.
///
/// # Parameters
/// value: the candidate URL, untrimmed
///
/// # Returns
/// true: if the URL is well-formed; false otherwise
pub fn is_url(value: &str) -> bool {
    let Ok(url) = Url::parse(value) else {
        return false;
    };
    url.has_host() || url.cannot_be_a_base() || url.scheme() == "file"
}

/// Decides if a string is a numeric value, following the browser's
/// string-to-number conversion: decimals with sign, fraction and exponent,
/// signed `Infinity`, and `0x`/`0o`/`0b` integer literals.
pub fn is_number(value: &str) -> bool {
    let s = js_trim(value);
    if s.is_empty() {
        return false;
    }
    if s.strip_prefix(['+', '-']).unwrap_or(s) == "Infinity" {
        return true;
    }
    let radix_digits = match s.get(..2) {
        Some("0x" | "0X") => Some((16, &s[2..])),
        Some("0o" | "0O") => Some((8, &s[2..])),
        Some("0b" | "0B") => Some((2, &s[2..])),
        _ => None,
    };
    if let Some((radix, digits)) = radix_digits {
        return !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
    }
    DECIMAL.is_match(s)
}

/// Decides if a string is a plausible phone number (permissive)
pub fn is_tel(value: &str) -> bool {
    TEL.is_match(value)
}
