//! Path patterns.
//!
//! # Responsibilities
//! - Tokenize a path into segments (`/user/<id>` → `user`, `<id>`)
//! - Match request paths segment by segment, extracting named parameters
//! - Prefix joining and stripping for router inclusion
//!
//! # Design Decisions
//! - Empty segments are dropped, so `/a/`, `//a` and `/a` are the same path
//! - A parameter matches exactly one non-empty segment
//! - No regex: structural comparison only

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// One path component.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Literal(String),
    Param(String),
}

impl Segment {
    fn parse(raw: &str) -> Self {
        match raw.strip_prefix('<').and_then(|r| r.strip_suffix('>')) {
            Some(name) if is_param_name(name) => Segment::Param(name.to_string()),
            _ => Segment::Literal(raw.to_string()),
        }
    }
}

fn is_param_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_')
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Literal(s) => f.write_str(s),
            Segment::Param(name) => write!(f, "<{name}>"),
        }
    }
}

/// Split a request path into its non-empty segments.
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Canonical form of a request path: `/` followed by its segments.
pub fn normalize_path(path: &str) -> String {
    format!("/{}", split_path(path).join("/"))
}

/// Parameters captured by a match, in pattern order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PathParams(IndexMap<String, String>);

impl PathParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A tokenized route path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PathPattern {
    segments: Vec<Segment>,
}

impl PathPattern {
    pub fn parse(path: &str) -> Self {
        Self {
            segments: split_path(path).into_iter().map(Segment::parse).collect(),
        }
    }

    pub fn root() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn is_parameterized(&self) -> bool {
        self.segments.iter().any(|s| matches!(s, Segment::Param(_)))
    }

    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// `self` followed by `other`.
    pub fn join(&self, other: &PathPattern) -> PathPattern {
        let mut segments = self.segments.clone();
        segments.extend(other.segments.iter().cloned());
        PathPattern { segments }
    }

    /// The remainder after a leading `prefix`, compared segment by segment.
    pub fn strip_prefix(&self, prefix: &PathPattern) -> Option<PathPattern> {
        self.segments
            .starts_with(&prefix.segments)
            .then(|| PathPattern {
                segments: self.segments[prefix.segments.len()..].to_vec(),
            })
    }

    /// Match already-split request segments.
    pub fn match_segments(&self, path: &[&str]) -> Option<PathParams> {
        if path.len() != self.segments.len() {
            return None;
        }
        let mut params = PathParams::new();
        for (segment, actual) in self.segments.iter().zip(path) {
            match segment {
                Segment::Literal(expected) if expected == actual => {}
                Segment::Literal(_) => return None,
                Segment::Param(name) => params.insert(name.as_str(), *actual),
            }
        }
        Some(params)
    }

    pub fn matches(&self, path: &str) -> Option<PathParams> {
        self.match_segments(&split_path(path))
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

impl From<&str> for PathPattern {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let p = PathPattern::parse("/user/<id>/posts/");
        assert_eq!(p.to_string(), "/user/<id>/posts");
        assert!(p.is_parameterized());
        assert_eq!(p.param_names().collect::<Vec<_>>(), vec!["id"]);
        assert_eq!(PathPattern::parse("").to_string(), "/");
        assert_eq!(PathPattern::parse("/").to_string(), "/");
    }

    #[test]
    fn test_bad_param_names_are_literals() {
        let p = PathPattern::parse("/a/<>/<b-c>");
        assert!(!p.is_parameterized());
        assert!(p.matches("/a/<>/<b-c>").is_some());
    }

    #[test]
    fn test_match_extracts_params() {
        let p = PathPattern::parse("/user/<id>/post/<slug>");
        let params = p.matches("/user/42/post/hello").unwrap();
        assert_eq!(params.get("id"), Some("42"));
        assert_eq!(params.get("slug"), Some("hello"));
        assert!(p.matches("/user/42/post").is_none());
        assert!(p.matches("/user/42/comment/hello").is_none());
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        let p = PathPattern::parse("/about");
        assert!(p.matches("/about/").is_some());
        assert_eq!(normalize_path("//about/"), "/about");
    }

    #[test]
    fn test_strip_prefix_is_segment_wise() {
        let route = PathPattern::parse("/api/apiary/api");
        let rest = route.strip_prefix(&PathPattern::parse("/api")).unwrap();
        assert_eq!(rest.to_string(), "/apiary/api");
        assert!(route.strip_prefix(&PathPattern::parse("/ap")).is_none());
    }

    #[test]
    fn test_join() {
        let joined = PathPattern::parse("/v1").join(&PathPattern::parse("/user/<id>"));
        assert_eq!(joined.to_string(), "/v1/user/<id>");
        assert_eq!(PathPattern::root().join(&PathPattern::root()).to_string(), "/");
    }
}
