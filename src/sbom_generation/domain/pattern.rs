//! Glob patterns used as Mapping Table keys.
//!
//! Supports `*` (any run of characters), `?` (exactly one character) and
//! bracket classes `[abc]`, `[a-z]`, `[!abc]`. An unterminated `[` is a
//! literal. Matching is case-sensitive and anchored at both ends.

use regex::Regex;

/// Characters that turn a Mapping Table key into a glob pattern
const GLOB_METACHARACTERS: [char; 3] = ['*', '?', '['];

/// Separators trimmed from the end of a pattern's literal prefix
const PREFIX_SEPARATORS: [char; 4] = ['-', '_', ' ', '.'];

/// Returns true if the pattern contains any glob metacharacter
pub fn has_wildcard(pattern: &str) -> bool {
    pattern.contains(GLOB_METACHARACTERS)
}

/// A glob Mapping Table key, compiled once and matched many times
#[derive(Debug, Clone)]
pub struct GlobPattern {
    source: String,
    regex: Option<Regex>,
}

impl GlobPattern {
    /// Compiles `pattern`, or returns `None` for a key without metacharacters.
    ///
    /// A pattern that cannot be compiled never matches.
    pub fn compile(pattern: &str) -> Option<Self> {
        if !has_wildcard(pattern) {
            return None;
        }
        Some(Self {
            source: pattern.to_string(),
            regex: compile_glob(pattern).ok(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns true if `text` satisfies the pattern
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(text))
    }
}

impl PartialEq for GlobPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

/// Literal characters of the pattern up to its first metacharacter,
/// with trailing separators removed, lower-cased.
///
/// `"boost-*"` yields `"boost"`, `"qt5?"` yields `"qt5"`, `"*"` yields `""`.
pub fn literal_prefix(pattern: &str) -> String {
    let end = pattern.find(GLOB_METACHARACTERS).unwrap_or(pattern.len());
    pattern[..end]
        .trim_end_matches(PREFIX_SEPARATORS)
        .to_lowercase()
}

/// Compile a glob pattern to an anchored regex.
fn compile_glob(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&translate(pattern))
}

fn translate(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::from("(?s)^");
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '*' => {
                out.push_str(".*");
                i += 1;
            }
            '?' => {
                out.push('.');
                i += 1;
            }
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    push_class(&mut out, &chars[i + 1..end]);
                    i = end + 1;
                }
                None => {
                    out.push_str("\\[");
                    i += 1;
                }
            },
            c => {
                out.push_str(&regex::escape(c.encode_utf8(&mut [0; 4])));
                i += 1;
            }
        }
    }

    out.push('$');
    out
}

/// Index of the `]` closing the class opened at `open`.
///
/// A `]` directly after `[` or `[!` is part of the class.
fn class_end(chars: &[char], open: usize) -> Option<usize> {
    let mut j = open + 1;
    if chars.get(j) == Some(&'!') {
        j += 1;
    }
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    chars[j.min(chars.len())..]
        .iter()
        .position(|&c| c == ']')
        .map(|offset| j + offset)
}

fn push_class(out: &mut String, body: &[char]) {
    let (negated, body) = match body.split_first() {
        Some((&'!', rest)) => (true, rest),
        _ => (false, body),
    };

    out.push('[');
    if negated {
        out.push('^');
    }
    for &c in body {
        if matches!(c, '\\' | '[' | ']' | '^' | '&' | '~') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push(']');
}
