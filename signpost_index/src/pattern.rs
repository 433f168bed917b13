// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Route patterns: parse templates such as `/user/:id`, match concrete paths, and compile back.
//!
//! ## Grammar
//!
//! - Literal text matches itself (case-insensitively). `\` escapes the next character.
//! - `:name` is a named parameter matching one segment (`[^/]+?`). Names use `[A-Za-z0-9_]`.
//! - `:name(regex)` restricts the parameter to a custom expression.
//! - `(regex)` is an unnamed parameter, numbered from `0`.
//! - `*` on its own is an unnamed parameter matching anything.
//! - Modifiers after a parameter: `?` optional, `*` zero or more segments, `+` one or more.
//!
//! A `/` or `.` immediately before a parameter is its prefix and is omitted together with
//! an absent optional parameter. A single trailing `/` is tolerated when matching.
//!
//! ```
//! use signpost_index::pattern::{Params, PathPattern};
//!
//! let p = PathPattern::parse("/user/:id/posts/:post?").unwrap();
//! let params = p.captures("/user/7/posts").unwrap();
//! assert_eq!(params.get("id").map(String::as_str), Some("7"));
//! assert!(!params.contains_key("post"));
//!
//! let mut params = Params::new();
//! params.insert("id".into(), "a b".into());
//! assert_eq!(p.compile(&params).unwrap(), "/user/a%20b/posts");
//! ```

use std::borrow::Cow;
use std::collections::BTreeMap;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::{Regex, RegexBuilder};

use crate::error::PatternError;

/// Parameter values keyed by name. Unnamed parameters use their index (`"0"`, `"1"`, ...).
pub type Params = BTreeMap<String, String>;

const DEFAULT_SEGMENT: &str = "[^/]+?";

/// Repetition modifier of a parameter.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Modifier {
    /// Exactly one occurrence.
    One,
    /// `?`: zero or one.
    Optional,
    /// `*`: zero or more segments.
    ZeroOrMore,
    /// `+`: one or more segments.
    OneOrMore,
}

impl Modifier {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '?' => Some(Self::Optional),
            '*' => Some(Self::ZeroOrMore),
            '+' => Some(Self::OneOrMore),
            _ => None,
        }
    }

    /// Whether the parameter may be absent.
    pub const fn is_optional(self) -> bool {
        matches!(self, Self::Optional | Self::ZeroOrMore)
    }

    /// Whether the parameter may span several segments.
    pub const fn repeats(self) -> bool {
        matches!(self, Self::ZeroOrMore | Self::OneOrMore)
    }
}

/// One parameter of a [`PathPattern`].
#[derive(Clone, Debug)]
pub struct Param {
    /// Parameter name; unnamed parameters use their index.
    pub name: String,
    /// Whether the name was written in the pattern (`:name`).
    pub named: bool,
    /// `/`, `.`, or empty.
    pub prefix: String,
    /// Expression for one segment.
    pub pattern: String,
    /// Repetition modifier.
    pub modifier: Modifier,
    group: String,
    validator: Regex,
}

#[derive(Clone, Debug)]
enum Token {
    Text(String),
    Param(Param),
}

/// A compiled route pattern.
#[derive(Clone, Debug)]
pub struct PathPattern {
    source: String,
    tokens: Vec<Token>,
    regex: Regex,
}

impl PathPattern {
    /// Parse and compile `source`.
    pub fn parse(source: &str) -> Result<Self, PatternError> {
        let tokens = tokenize(source)?;
        let regex = build_regex(source, &tokens)?;
        Ok(Self {
            source: source.to_string(),
            tokens,
            regex,
        })
    }

    /// The template this pattern was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Parameters in template order.
    pub fn params(&self) -> impl Iterator<Item = &Param> + '_ {
        self.tokens.iter().filter_map(|t| match t {
            Token::Param(p) => Some(p),
            Token::Text(_) => None,
        })
    }

    /// Names of parameters written as `:name`.
    pub fn named_params(&self) -> impl Iterator<Item = &str> + '_ {
        self.params().filter(|p| p.named).map(|p| p.name.as_str())
    }

    /// Whether the template has at least one `:name` parameter.
    pub fn has_named_params(&self) -> bool {
        self.params().any(|p| p.named)
    }

    /// Names of parameters that must be present to [compile](Self::compile).
    pub fn required_params(&self) -> impl Iterator<Item = &str> + '_ {
        self.params()
            .filter(|p| !p.modifier.is_optional())
            .map(|p| p.name.as_str())
    }

    /// Names that occur more than once, each reported once, in template order.
    pub fn duplicate_params(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        let mut dups: Vec<&str> = Vec::new();
        for p in self.params() {
            if seen.contains(&p.name.as_str()) {
                if !dups.contains(&p.name.as_str()) {
                    dups.push(&p.name);
                }
            } else {
                seen.push(&p.name);
            }
        }
        dups
    }

    /// Whether `path` (without query string) matches.
    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Match `path` and return decoded parameter values.
    ///
    /// Absent optional parameters are omitted. When a name repeats, the first
    /// occurrence wins.
    pub fn captures(&self, path: &str) -> Option<Params> {
        let caps = self.regex.captures(path)?;
        let mut params = Params::new();
        for p in self.params() {
            if let Some(m) = caps.name(&p.group) {
                let raw = m.as_str();
                let value = decode_component(raw).unwrap_or_else(|| raw.to_string());
                params.entry(p.name.clone()).or_insert(value);
            }
        }
        Some(params)
    }

    /// Substitute `params` into the template, percent-encoding each value.
    ///
    /// Repeating parameters split their value on `/` and encode each segment.
    pub fn compile(&self, params: &Params) -> Result<String, PatternError> {
        let mut out = String::new();
        for token in &self.tokens {
            let p = match token {
                Token::Text(t) => {
                    out.push_str(t);
                    continue;
                }
                Token::Param(p) => p,
            };
            let Some(value) = params.get(&p.name).filter(|v| !v.is_empty()) else {
                if p.modifier.is_optional() {
                    continue;
                }
                return Err(PatternError::MissingParam {
                    name: p.name.clone(),
                });
            };
            let segments: Vec<&str> = if p.modifier.repeats() {
                value.split('/').collect()
            } else {
                vec![value.as_str()]
            };
            let delimiter = if p.prefix.is_empty() { "/" } else { &p.prefix };
            for (n, segment) in segments.iter().enumerate() {
                let encoded = encode_component(segment);
                if !p.validator.is_match(&encoded) {
                    return Err(PatternError::InvalidParam {
                        name: p.name.clone(),
                        value: value.clone(),
                    });
                }
                out.push_str(if n == 0 { &p.prefix } else { delimiter });
                out.push_str(&encoded);
            }
        }
        Ok(out)
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn tokenize(source: &str) -> Result<Vec<Token>, PatternError> {
    let chars: Vec<char> = source.chars().collect();
    let mut tokens = Vec::new();
    let mut text = String::new();
    let mut index = 0_usize;
    let mut unnamed = 0_usize;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let (name, pattern) = match c {
            '\\' => {
                text.push(chars.get(i + 1).copied().unwrap_or('\\'));
                i += 2;
                continue;
            }
            ':' if chars.get(i + 1).is_some_and(|&n| is_name_char(n)) => {
                let start = i + 1;
                let mut end = start;
                while end < chars.len() && is_name_char(chars[end]) {
                    end += 1;
                }
                let name: String = chars[start..end].iter().collect();
                i = end;
                let pattern = if chars.get(i) == Some(&'(') {
                    let (group, next) = read_group(source, &chars, i)?;
                    i = next;
                    Some(group)
                } else {
                    None
                };
                (Some(name), pattern)
            }
            '(' => {
                let (group, next) = read_group(source, &chars, i)?;
                i = next;
                (None, Some(group))
            }
            '*' => {
                i += 1;
                (None, Some(".*".to_string()))
            }
            _ => {
                text.push(c);
                i += 1;
                continue;
            }
        };

        let mut modifier = Modifier::One;
        if c != '*'
            && let Some(m) = chars.get(i).and_then(|&m| Modifier::from_char(m))
        {
            modifier = m;
            i += 1;
        }

        let prefix = match text.chars().last() {
            Some(p @ ('/' | '.')) => {
                text.pop();
                p.to_string()
            }
            _ => String::new(),
        };
        if !text.is_empty() {
            tokens.push(Token::Text(core::mem::take(&mut text)));
        }

        let (name, named) = match name {
            Some(n) => (n, true),
            None => {
                unnamed += 1;
                ((unnamed - 1).to_string(), false)
            }
        };
        let pattern = pattern.unwrap_or_else(|| DEFAULT_SEGMENT.to_string());
        let validator = Regex::new(&format!("^(?:{pattern})$")).map_err(|source_err| {
            PatternError::InvalidRegex {
                pattern: source.to_string(),
                source: source_err,
            }
        })?;
        tokens.push(Token::Param(Param {
            name,
            named,
            prefix,
            pattern,
            modifier,
            group: format!("p{index}"),
            validator,
        }));
        index += 1;
    }
    if !text.is_empty() {
        tokens.push(Token::Text(text));
    }
    Ok(tokens)
}

// `chars[open]` is `(`; returns the group body and the index after the closing `)`.
fn read_group(source: &str, chars: &[char], open: usize) -> Result<(String, usize), PatternError> {
    let mut depth = 1_usize;
    let mut body = String::new();
    let mut i = open + 1;
    while i < chars.len() {
        let c = chars[i];
        match c {
            '\\' => {
                body.push(c);
                if let Some(&n) = chars.get(i + 1) {
                    body.push(n);
                }
                i += 2;
                continue;
            }
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    if body.is_empty() {
                        return Err(PatternError::EmptyGroup {
                            pattern: source.to_string(),
                            offset: open,
                        });
                    }
                    return Ok((body, i + 1));
                }
            }
            _ => {}
        }
        body.push(c);
        i += 1;
    }
    Err(PatternError::UnterminatedGroup {
        pattern: source.to_string(),
        offset: open,
    })
}

fn build_regex(source: &str, tokens: &[Token]) -> Result<Regex, PatternError> {
    let mut re = String::from("^");
    for token in tokens {
        match token {
            Token::Text(t) => re.push_str(&regex::escape(t)),
            Token::Param(p) => {
                let prefix = regex::escape(&p.prefix);
                let one = format!("(?:{})", p.pattern);
                let body = if p.modifier.repeats() {
                    format!("{one}(?:{prefix}{one})*")
                } else {
                    one
                };
                let group = format!("(?P<{}>{body})", p.group);
                if p.modifier.is_optional() {
                    re.push_str(&format!("(?:{prefix}{group})?"));
                } else {
                    re.push_str(&prefix);
                    re.push_str(&group);
                }
            }
        }
    }
    if matches!(tokens.last(), Some(Token::Text(t)) if t.ends_with('/')) {
        re.pop();
    }
    re.push_str("(?:/)?$");
    RegexBuilder::new(&re)
        .case_insensitive(true)
        .build()
        .map_err(|err| PatternError::InvalidRegex {
            pattern: source.to_string(),
            source: err,
        })
}

/// Bytes escaped in parameter values: everything but `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT).to_string()
}

/// Decode `%XX` escapes. Returns `None` when the decoded bytes are not UTF-8.
pub fn decode_component(s: &str) -> Option<String> {
    urlencoding::decode(s).ok().map(Cow::into_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Params {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn literal_matches_case_insensitively_with_trailing_slash() {
        let p = PathPattern::parse("/settings/profile").unwrap();
        assert!(p.is_match("/settings/profile"));
        assert!(p.is_match("/Settings/Profile/"));
        assert!(!p.is_match("/settings/profile/x"));
        assert!(!p.is_match("/settings"));
        assert!(!p.has_named_params());
    }

    #[test]
    fn root_and_trailing_slash_templates() {
        let root = PathPattern::parse("/").unwrap();
        assert!(root.is_match("/"));
        assert!(!root.is_match("/a"));
        let dir = PathPattern::parse("/docs/").unwrap();
        assert!(dir.is_match("/docs"));
        assert!(dir.is_match("/docs/"));
    }

    #[test]
    fn named_param_captures_and_decodes() {
        let p = PathPattern::parse("/user/:id").unwrap();
        assert!(p.has_named_params());
        let caps = p.captures("/user/j%C3%BCrgen").unwrap();
        assert_eq!(caps, params(&[("id", "jürgen")]));
        assert!(p.captures("/user").is_none());
        assert!(p.captures("/user/1/2").is_none());
    }

    #[test]
    fn optional_param_and_prefix() {
        let p = PathPattern::parse("/post/:id?").unwrap();
        assert_eq!(p.captures("/post").unwrap(), Params::new());
        assert_eq!(p.captures("/post/9").unwrap(), params(&[("id", "9")]));
        assert_eq!(p.required_params().count(), 0);
        assert_eq!(p.compile(&Params::new()).unwrap(), "/post");
    }

    #[test]
    fn repeating_params() {
        let p = PathPattern::parse("/files/:path+").unwrap();
        assert_eq!(
            p.captures("/files/a/b/c").unwrap(),
            params(&[("path", "a/b/c")])
        );
        assert!(!p.is_match("/files"));
        assert_eq!(
            p.compile(&params(&[("path", "a/b c")])).unwrap(),
            "/files/a/b%20c"
        );

        let q = PathPattern::parse("/tree/:path*").unwrap();
        assert!(q.is_match("/tree"));
        assert!(q.is_match("/tree/x/y"));
        assert_eq!(q.compile(&Params::new()).unwrap(), "/tree");
    }

    #[test]
    fn custom_and_unnamed_groups() {
        let p = PathPattern::parse("/order/:id(\\d+)/(edit|view)").unwrap();
        assert!(p.is_match("/order/12/edit"));
        assert!(!p.is_match("/order/ab/edit"));
        let caps = p.captures("/order/12/view").unwrap();
        assert_eq!(caps, params(&[("id", "12"), ("0", "view")]));
        assert_eq!(p.named_params().collect::<Vec<_>>(), vec!["id"]);
        assert!(matches!(
            p.compile(&params(&[("id", "x"), ("0", "edit")])),
            Err(PatternError::InvalidParam { name, .. }) if name == "id"
        ));
    }

    #[test]
    fn asterisk_matches_anything() {
        let p = PathPattern::parse("/static/*").unwrap();
        assert!(p.is_match("/static/css/app.css"));
        assert_eq!(
            p.captures("/static/css/app.css").unwrap(),
            params(&[("0", "css/app.css")])
        );
    }

    #[test]
    fn dot_prefix_and_escapes() {
        let p = PathPattern::parse("/export.:format?").unwrap();
        assert!(p.is_match("/export"));
        assert_eq!(p.captures("/export.csv").unwrap(), params(&[("format", "csv")]));

        let q = PathPattern::parse("/a\\:b").unwrap();
        assert!(q.is_match("/a:b"));
        assert!(!q.has_named_params());
    }

    #[test]
    fn colon_without_name_is_literal() {
        let p = PathPattern::parse("/time/12:/x").unwrap();
        assert!(p.is_match("/time/12:/x"));
    }

    #[test]
    fn compile_encodes_and_requires_params() {
        let p = PathPattern::parse("/user/:id/edit").unwrap();
        assert_eq!(
            p.compile(&params(&[("id", "a/b?")])).unwrap(),
            "/user/a%2Fb%3F/edit"
        );
        assert!(matches!(
            p.compile(&Params::new()),
            Err(PatternError::MissingParam { name }) if name == "id"
        ));
    }

    #[test]
    fn duplicate_names_are_reported_and_first_wins() {
        let p = PathPattern::parse("/:id/x/:id/:other/:id").unwrap();
        assert_eq!(p.duplicate_params(), vec!["id"]);
        assert_eq!(
            p.captures("/1/x/2/o/3").unwrap(),
            params(&[("id", "1"), ("other", "o")])
        );
    }

    #[test]
    fn malformed_groups_fail() {
        assert!(matches!(
            PathPattern::parse("/a/(\\d+"),
            Err(PatternError::UnterminatedGroup { offset: 3, .. })
        ));
        assert!(matches!(
            PathPattern::parse("/a/()"),
            Err(PatternError::EmptyGroup { .. })
        ));
        assert!(matches!(
            PathPattern::parse("/a/:id([)"),
            Err(PatternError::InvalidRegex { .. })
        ));
    }

    #[test]
    fn percent_helpers() {
        assert_eq!(encode_component("a b/ü"), "a%20b%2F%C3%BC");
        assert_eq!(encode_component("it's-(ok)~*!"), "it's-(ok)~*!");
        assert_eq!(decode_component("a%20b").as_deref(), Some("a b"));
        assert_eq!(decode_component("%E0%A4%A"), None);
        assert_eq!(decode_component("%FF"), None);
        assert_eq!(decode_component("100%zz").as_deref(), Some("100%zz"));
    }
}
