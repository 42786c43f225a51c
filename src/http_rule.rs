use std::fmt;

use crate::descriptor::{http_rule::Pattern, HttpRule};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpVerb {
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

impl HttpVerb {
    /// The order bindings are checked in. The first with a non-empty path wins.
    pub const PRECEDENCE: [HttpVerb; 5] = [
        HttpVerb::Get,
        HttpVerb::Post,
        HttpVerb::Patch,
        HttpVerb::Put,
        HttpVerb::Delete,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HttpVerb::Get => "GET",
            HttpVerb::Post => "POST",
            HttpVerb::Patch => "PATCH",
            HttpVerb::Put => "PUT",
            HttpVerb::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpBinding<'a> {
    pub verb: HttpVerb,
    pub path: &'a str,
}

fn path_for(rule: &HttpRule, verb: HttpVerb) -> Option<&str> {
    match (verb, rule.pattern.as_ref()?) {
        (HttpVerb::Get, Pattern::Get(path))
        | (HttpVerb::Post, Pattern::Post(path))
        | (HttpVerb::Patch, Pattern::Patch(path))
        | (HttpVerb::Put, Pattern::Put(path))
        | (HttpVerb::Delete, Pattern::Delete(path)) => Some(path.as_str()),
        _ => None,
    }
}

/// Picks the verb and path template a method is called with.
///
/// `None` means the rule carries no usable binding: no verb pattern (which
/// includes `custom`-only rules) or an empty path. Callers treat that as a hard
/// error, since the method was annotated for HTTP in the first place.
pub fn resolve(rule: &HttpRule) -> Option<HttpBinding<'_>> {
    HttpVerb::PRECEDENCE.into_iter().find_map(|verb| {
        path_for(rule, verb)
            .filter(|path| !path.is_empty())
            .map(|path| HttpBinding { verb, path })
    })
}
