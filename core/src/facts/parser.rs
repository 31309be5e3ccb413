//! # Host Fact Parser
//!
//! Reads the literal tuple written by the fact-gathering play:
//!
//! ```text
//! ('web01.example.lan', ['10.0.0.4', '131.8.1.2'], ['Fedora', '39'])
//! ```
//!
//! Strings may use single or double quotes. Trailing commas are accepted.

use std::net::Ipv4Addr;

use invmap_common::error::FactError;
use invmap_common::inventory::HostFact;

use crate::materialize::is_stanza_text;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Literal {
    Str(String),
    List(Vec<Literal>),
    Tuple(Vec<Literal>),
}

impl Literal {
    fn kind(&self) -> &'static str {
        match self {
            Literal::Str(_) => "a string",
            Literal::List(_) => "a list",
            Literal::Tuple(_) => "a tuple",
        }
    }
}

struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    fn unexpected(&self, expected: &'static str) -> FactError {
        let found = match self.peek() {
            Some(c) => format!("'{c}'"),
            None => String::from("end of input"),
        };
        FactError::Unexpected {
            offset: self.pos,
            expected,
            found,
        }
    }

    fn value(&mut self) -> Result<Literal, FactError> {
        self.skip_whitespace();
        match self.peek() {
            Some('(') => {
                self.bump();
                self.sequence(')').map(Literal::Tuple)
            }
            Some('[') => {
                self.bump();
                self.sequence(']').map(Literal::List)
            }
            Some(quote @ ('\'' | '"')) => {
                self.bump();
                self.string(quote).map(Literal::Str)
            }
            _ => Err(self.unexpected("a string, list or tuple")),
        }
    }

    fn sequence(&mut self, close: char) -> Result<Vec<Literal>, FactError> {
        let separator = if close == ')' { "',' or ')'" } else { "',' or ']'" };
        let mut items = Vec::new();

        loop {
            self.skip_whitespace();
            if self.peek() == Some(close) {
                self.bump();
                return Ok(items);
            }

            items.push(self.value()?);

            self.skip_whitespace();
            match self.peek() {
                Some(',') => {
                    self.bump();
                }
                Some(c) if c == close => {
                    self.bump();
                    return Ok(items);
                }
                _ => return Err(self.unexpected(separator)),
            }
        }
    }

    fn string(&mut self, quote: char) -> Result<String, FactError> {
        let start = self.pos - quote.len_utf8();
        let mut out = String::new();

        loop {
            match self.bump() {
                None => return Err(FactError::UnterminatedString(start)),
                Some('\\') => match self.bump() {
                    None => return Err(FactError::UnterminatedString(start)),
                    Some('n') => out.push('\n'),
                    Some('t') => out.push('\t'),
                    Some(escaped) => out.push(escaped),
                },
                Some(c) if c == quote => return Ok(out),
                Some(c) => out.push(c),
            }
        }
    }
}

/// Parses the first line of a host-fact file into a [`HostFact`].
pub fn parse_fact(text: &str) -> Result<HostFact, FactError> {
    let line = text.lines().next().unwrap_or_default();
    if line.trim().is_empty() {
        return Err(FactError::Empty);
    }

    let mut cursor = Cursor::new(line);
    let literal = cursor.value()?;
    cursor.skip_whitespace();
    if cursor.peek().is_some() {
        return Err(FactError::TrailingInput(cursor.pos));
    }

    let kind = literal.kind();
    let Literal::Tuple(items) = literal else {
        return Err(FactError::Unexpected {
            offset: 0,
            expected: "a tuple",
            found: kind.to_owned(),
        });
    };

    let [name, addresses, os] =
        <[Literal; 3]>::try_from(items).map_err(|items| FactError::Arity(items.len()))?;

    let Literal::Str(name) = name else {
        return Err(FactError::NotAString("host name"));
    };
    if !is_stanza_text(&name) {
        return Err(FactError::InvalidHostName(name));
    }

    let addresses = string_list(addresses, "address list")?;
    if let Some(bad) = addresses.iter().find(|a| a.parse::<Ipv4Addr>().is_err()) {
        return Err(FactError::InvalidAddress(bad.clone()));
    }

    let os = string_list(os, "os descriptor")?;
    let [distro, release] =
        <[String; 2]>::try_from(os).map_err(|os| FactError::OsDescriptor(os.len()))?;

    for component in [&distro, &release] {
        if !is_path_component(component) {
            return Err(FactError::InvalidPathComponent(component.clone()));
        }
    }

    Ok(HostFact::new(name, addresses, distro, release))
}

fn string_list(literal: Literal, what: &'static str) -> Result<Vec<String>, FactError> {
    let Literal::List(items) = literal else {
        return Err(FactError::NotAStringList(what));
    };

    items
        .into_iter()
        .map(|item| match item {
            Literal::Str(s) => Ok(s),
            _ => Err(FactError::NotAStringList(what)),
        })
        .collect()
}

/// Distro and release become directory names under the output root.
fn is_path_component(s: &str) -> bool {
    !s.is_empty() && s != "." && s != ".." && !s.contains(['/', '\\', '\0'])
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
