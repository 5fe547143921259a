//! Typed CSS selectors for the subset the layout controller queries with.
//!
//! Supported forms: type (`table`), class (`.card`), id (`#main`),
//! compound (`button.btn`, `input[type="submit"]`), descendant chains
//! (`thead th`) and selector lists (`a, b`). Everything else is rejected
//! at parse time so that a `MemoryDom` can evaluate exactly what a browser
//! would.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("empty selector in {0:?}")]
    Empty(String),
    #[error("unexpected {ch:?} in selector {input:?}")]
    Unexpected { ch: char, input: String },
    #[error("unterminated attribute in selector {0:?}")]
    UnterminatedAttribute(String),
}

/// `tag.class#id[attr="v"]` without combinators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compound {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
    /// Attribute name and required value (`None` = presence only).
    pub attrs: Vec<(String, Option<String>)>,
}

impl Compound {
    /// Evaluate against an element described by its tag, id, classes and an
    /// attribute lookup.
    pub fn matches<'a>(
        &self,
        tag: &str,
        id: Option<&str>,
        has_class: impl Fn(&str) -> bool,
        attr: impl Fn(&str) -> Option<&'a str>,
    ) -> bool {
        if let Some(want) = &self.tag {
            if !want.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(want) = &self.id {
            if id != Some(want.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| has_class(c.as_str())) {
            return false;
        }
        self.attrs.iter().all(|(name, value)| match (attr(name.as_str()), value) {
            (Some(_), None) => true,
            (Some(actual), Some(want)) => actual == want,
            (None, _) => false,
        })
    }

    fn is_empty(&self) -> bool {
        self.tag.is_none() && self.id.is_none() && self.classes.is_empty() && self.attrs.is_empty()
    }
}

/// Descendant chain: zero or more ancestor compounds, then the subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    ancestors: Vec<Compound>,
    subject: Compound,
}

impl Chain {
    fn single(subject: Compound) -> Self {
        Self {
            ancestors: Vec::new(),
            subject,
        }
    }

    /// `None` for an empty list.
    pub fn from_compounds(mut compounds: Vec<Compound>) -> Option<Self> {
        let subject = compounds.pop()?;
        Some(Self {
            ancestors: compounds,
            subject,
        })
    }

    pub fn subject(&self) -> &Compound {
        &self.subject
    }

    /// Outermost first.
    pub fn ancestors(&self) -> &[Compound] {
        &self.ancestors
    }

    pub fn compounds(&self) -> impl Iterator<Item = &Compound> {
        self.ancestors.iter().chain(std::iter::once(&self.subject))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Selector {
    alternatives: Vec<Chain>,
}

impl Selector {
    fn single(compound: Compound) -> Self {
        Self {
            alternatives: vec![Chain::single(compound)],
        }
    }

    pub fn tag(tag: &str) -> Self {
        Self::single(Compound {
            tag: Some(tag.to_ascii_lowercase()),
            ..Compound::default()
        })
    }

    pub fn class(class: &str) -> Self {
        Self::single(Compound {
            classes: vec![class.to_string()],
            ..Compound::default()
        })
    }

    pub fn id(id: &str) -> Self {
        Self::single(Compound {
            id: Some(id.to_string()),
            ..Compound::default()
        })
    }

    pub fn tag_with_attr(tag: &str, name: &str, value: &str) -> Self {
        Self::single(Compound {
            tag: Some(tag.to_ascii_lowercase()),
            attrs: vec![(name.to_string(), Some(value.to_string()))],
            ..Compound::default()
        })
    }

    /// `ancestor subject` for every combination of alternatives.
    pub fn within(ancestor: &Selector, subject: &Selector) -> Self {
        let mut alternatives = Vec::new();
        for outer in &ancestor.alternatives {
            for inner in &subject.alternatives {
                alternatives.push(Chain {
                    ancestors: outer
                        .compounds()
                        .chain(inner.ancestors.iter())
                        .cloned()
                        .collect(),
                    subject: inner.subject.clone(),
                });
            }
        }
        Self { alternatives }
    }

    /// Selector list (`a, b, c`).
    pub fn any(selectors: impl IntoIterator<Item = Selector>) -> Self {
        Self {
            alternatives: selectors
                .into_iter()
                .flat_map(|s| s.alternatives)
                .collect(),
        }
    }

    pub fn alternatives(&self) -> &[Chain] {
        &self.alternatives
    }

    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let mut alternatives = Vec::new();
        for part in input.split(',') {
            let mut chain = Vec::new();
            for token in part.split_whitespace() {
                chain.push(parse_compound(token, input)?);
            }
            let chain = Chain::from_compounds(chain)
                .ok_or_else(|| SelectorError::Empty(input.to_string()))?;
            alternatives.push(chain);
        }
        Ok(Self { alternatives })
    }
}

fn is_ident(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '-' || ch == '_'
}

fn ident_len(text: &str) -> usize {
    text.find(|c: char| !is_ident(c)).unwrap_or(text.len())
}

fn parse_compound(token: &str, input: &str) -> Result<Compound, SelectorError> {
    let mut out = Compound::default();
    let tag_len = ident_len(token);
    if tag_len > 0 {
        out.tag = Some(token[..tag_len].to_ascii_lowercase());
    }
    let mut rest = &token[tag_len..];
    while let Some(ch) = rest.chars().next() {
        match ch {
            '.' | '#' => {
                let body = &rest[1..];
                let len = ident_len(body);
                if len == 0 {
                    return Err(SelectorError::Unexpected {
                        ch,
                        input: input.to_string(),
                    });
                }
                let name = body[..len].to_string();
                if ch == '.' {
                    out.classes.push(name);
                } else {
                    out.id = Some(name);
                }
                rest = &body[len..];
            }
            '[' => {
                let close = rest
                    .find(']')
                    .ok_or_else(|| SelectorError::UnterminatedAttribute(input.to_string()))?;
                let inner = &rest[1..close];
                let (name, value) = match inner.split_once('=') {
                    Some((name, value)) => {
                        let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
                        (name.trim(), Some(value.to_string()))
                    }
                    None => (inner.trim(), None),
                };
                if name.is_empty() || ident_len(name) != name.len() {
                    return Err(SelectorError::Unexpected {
                        ch: '[',
                        input: input.to_string(),
                    });
                }
                out.attrs.push((name.to_string(), value));
                rest = &rest[close + 1..];
            }
            other => {
                return Err(SelectorError::Unexpected {
                    ch: other,
                    input: input.to_string(),
                })
            }
        }
    }
    if out.is_empty() {
        return Err(SelectorError::Empty(input.to_string()));
    }
    Ok(out)
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(tag) = &self.tag {
            f.write_str(tag)?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        for (name, value) in &self.attrs {
            match value {
                Some(value) => write!(f, "[{name}=\"{value}\"]")?,
                None => write!(f, "[{name}]")?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, chain) in self.alternatives.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            for (j, compound) in chain.compounds().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{compound}")?;
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Selector::parse(s)
    }
}

impl TryFrom<String> for Selector {
    type Error = SelectorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Selector::parse(&value)
    }
}

impl From<Selector> for String {
    fn from(value: Selector) -> Self {
        value.to_string()
    }
}
