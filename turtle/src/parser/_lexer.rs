//! Turn Turtle text into a list of [`Token`]s.

use std::fmt;

use super::{Parsed, ParserError, SyntaxError};

/// A lexical unit of Turtle, with its (1-based) position in the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub col: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum TokenKind {
    /// `@prefix` (`sparql == false`) or `PREFIX`
    Prefix { sparql: bool },
    /// `@base` (`sparql == false`) or `BASE`
    Base { sparql: bool },
    /// `<...>`, with escape sequences decoded
    Iri(String),
    /// A quoted string, with escape sequences decoded
    Str(String),
    /// `@tag`, directly following a string
    LangTag(String),
    /// `^^`
    DatatypeMarker,
    /// Prefixed names, blank node labels, `a`, numbers and booleans
    Word(String),
    Dot,
    Semicolon,
    Comma,
    OpenBracket,
    CloseBracket,
    OpenParen,
    CloseParen,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Prefix { sparql: false } => f.write_str("@prefix"),
            TokenKind::Prefix { sparql: true } => f.write_str("PREFIX"),
            TokenKind::Base { sparql: false } => f.write_str("@base"),
            TokenKind::Base { sparql: true } => f.write_str("BASE"),
            TokenKind::Iri(iri) => write!(f, "<{iri}>"),
            TokenKind::Str(txt) => write!(f, "{txt:?}"),
            TokenKind::LangTag(tag) => write!(f, "@{tag}"),
            TokenKind::DatatypeMarker => f.write_str("^^"),
            TokenKind::Word(word) => f.write_str(word),
            TokenKind::Dot => f.write_str("."),
            TokenKind::Semicolon => f.write_str(";"),
            TokenKind::Comma => f.write_str(","),
            TokenKind::OpenBracket => f.write_str("["),
            TokenKind::CloseBracket => f.write_str("]"),
            TokenKind::OpenParen => f.write_str("("),
            TokenKind::CloseParen => f.write_str(")"),
        }
    }
}

/// Split `input` into tokens, dropping whitespace and comments.
pub(crate) fn tokenize(input: &str) -> Parsed<Vec<Token>> {
    let mut lexer = Lexer {
        chars: input.chars().collect(),
        pos: 0,
        line: 1,
        col: 1,
        tokens: Vec::new(),
        string_end: None,
    };
    lexer.run()?;
    log::trace!("{} tokens", lexer.tokens.len());
    Ok(lexer.tokens)
}

struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    col: usize,
    tokens: Vec<Token>,
    /// Where the last string token ended.
    string_end: Option<usize>,
}

impl Lexer {
    fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(c)
    }

    fn error(&self, kind: SyntaxError) -> ParserError {
        ParserError::at(kind, self.line, self.col)
    }

    fn push(&mut self, kind: TokenKind, line: usize, col: usize) {
        self.tokens.push(Token { kind, line, col });
    }

    /// Whether the last token is a string ending right before the current position.
    fn follows_string(&self) -> bool {
        self.string_end == Some(self.pos)
            && matches!(
                self.tokens.last(),
                Some(Token {
                    kind: TokenKind::Str(_),
                    ..
                })
            )
    }

    fn run(&mut self) -> Parsed<()> {
        while let Some(c) = self.peek() {
            let (line, col) = (self.line, self.col);
            match c {
                c if c.is_whitespace() => {
                    self.bump();
                }
                '#' => {
                    while !matches!(self.bump(), None | Some('\n')) {}
                }
                '<' => {
                    let iri = self.iri()?;
                    self.push(TokenKind::Iri(iri), line, col);
                }
                '"' | '\'' => {
                    let txt = self.string(c)?;
                    self.push(TokenKind::Str(txt), line, col);
                    self.string_end = Some(self.pos);
                }
                '@' => {
                    let lang_tag = self.follows_string();
                    self.bump();
                    let word = self.take_while(|c| c.is_ascii_alphanumeric() || c == '-');
                    let kind = if lang_tag {
                        if word.is_empty() {
                            return Err(ParserError::at(
                                SyntaxError::InvalidObject("empty language tag".into()),
                                line,
                                col,
                            ));
                        }
                        TokenKind::LangTag(word)
                    } else {
                        match word.as_str() {
                            "prefix" => TokenKind::Prefix { sparql: false },
                            "base" => TokenKind::Base { sparql: false },
                            _ => {
                                return Err(ParserError::at(
                                    SyntaxError::MalformedDirective(format!("@{word}")),
                                    line,
                                    col,
                                ))
                            }
                        }
                    };
                    self.push(kind, line, col);
                }
                '^' => {
                    self.bump();
                    if self.bump() != Some('^') {
                        return Err(ParserError::at(
                            SyntaxError::UnexpectedToken {
                                expected: "'^^'".into(),
                                found: "^".into(),
                            },
                            line,
                            col,
                        ));
                    }
                    self.push(TokenKind::DatatypeMarker, line, col);
                }
                '.' if !self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) => {
                    self.bump();
                    self.push(TokenKind::Dot, line, col);
                }
                ';' | ',' | '[' | ']' | '(' | ')' => {
                    self.bump();
                    let kind = match c {
                        ';' => TokenKind::Semicolon,
                        ',' => TokenKind::Comma,
                        '[' => TokenKind::OpenBracket,
                        ']' => TokenKind::CloseBracket,
                        '(' => TokenKind::OpenParen,
                        _ => TokenKind::CloseParen,
                    };
                    self.push(kind, line, col);
                }
                _ => {
                    let word = self.word();
                    let kind = if word == "PREFIX" {
                        TokenKind::Prefix { sparql: true }
                    } else if word == "BASE" {
                        TokenKind::Base { sparql: true }
                    } else {
                        TokenKind::Word(word)
                    };
                    self.push(kind, line, col);
                }
            }
        }
        Ok(())
    }

    fn take_while<F: Fn(char) -> bool>(&mut self, predicate: F) -> String {
        let mut taken = String::new();
        while let Some(c) = self.peek().filter(|c| predicate(*c)) {
            taken.push(c);
            self.bump();
        }
        taken
    }

    /// A bare word ends at whitespace, punctuation, or a `.` not followed by a name character.
    fn word(&mut self) -> String {
        let mut word = String::new();
        while let Some(c) = self.peek() {
            if c == '\\' {
                // PN_LOCAL_ESC, kept for the parser to decode
                word.push(c);
                self.bump();
                word.extend(self.bump());
                continue;
            }
            let ends = match c {
                c if c.is_whitespace() => true,
                ';' | ',' | '[' | ']' | '(' | ')' | '<' | '"' | '\'' | '#' | '^' => true,
                '.' => !self.peek_at(1).is_some_and(is_name_char),
                _ => false,
            };
            if ends {
                break;
            }
            word.push(c);
            self.bump();
        }
        word
    }

    fn iri(&mut self) -> Parsed<String> {
        self.bump();
        let mut iri = String::new();
        loop {
            match self.peek() {
                None | Some('\n') => return Err(self.error(SyntaxError::UnterminatedIri)),
                Some('>') => {
                    self.bump();
                    return Ok(iri);
                }
                Some('\\') => {
                    self.bump();
                    match self.bump() {
                        Some(u @ ('u' | 'U')) => iri.push(self.unicode_escape(u)?),
                        other => return Err(self.invalid_escape(other)),
                    }
                }
                Some(c) => {
                    iri.push(c);
                    self.bump();
                }
            }
        }
    }

    fn string(&mut self, quote: char) -> Parsed<String> {
        let long = self.peek_at(1) == Some(quote) && self.peek_at(2) == Some(quote);
        let opening = if long { 3 } else { 1 };
        for _ in 0..opening {
            self.bump();
        }
        let mut txt = String::new();
        loop {
            match self.peek() {
                None => return Err(self.error(SyntaxError::UnterminatedString)),
                Some('\n' | '\r') if !long => {
                    return Err(self.error(SyntaxError::UnterminatedString))
                }
                Some(c) if c == quote => {
                    if !long {
                        self.bump();
                        return Ok(txt);
                    }
                    if self.peek_at(1) == Some(quote) && self.peek_at(2) == Some(quote) {
                        // a long string may end with up to two extra quotes
                        while self.peek_at(3) == Some(quote) {
                            txt.push(quote);
                            self.bump();
                        }
                        for _ in 0..3 {
                            self.bump();
                        }
                        return Ok(txt);
                    }
                    txt.push(c);
                    self.bump();
                }
                Some('\\') => {
                    self.bump();
                    let escaped = match self.bump() {
                        Some('t') => '\t',
                        Some('b') => '\u{8}',
                        Some('n') => '\n',
                        Some('r') => '\r',
                        Some('f') => '\u{c}',
                        Some(c @ ('"' | '\'' | '\\')) => c,
                        Some(u @ ('u' | 'U')) => self.unicode_escape(u)?,
                        other => return Err(self.invalid_escape(other)),
                    };
                    txt.push(escaped);
                }
                Some(c) => {
                    txt.push(c);
                    self.bump();
                }
            }
        }
    }

    fn unicode_escape(&mut self, marker: char) -> Parsed<char> {
        let len = if marker == 'u' { 4 } else { 8 };
        let hex = self.take_while_n(len, |c| c.is_ascii_hexdigit());
        u32::from_str_radix(&hex, 16)
            .ok()
            .filter(|_| hex.len() == len)
            .and_then(char::from_u32)
            .ok_or_else(|| self.error(SyntaxError::InvalidEscape(format!("\\{marker}{hex}"))))
    }

    fn take_while_n<F: Fn(char) -> bool>(&mut self, n: usize, predicate: F) -> String {
        let mut taken = String::new();
        while taken.len() < n {
            match self.peek().filter(|c| predicate(*c)) {
                Some(c) => {
                    taken.push(c);
                    self.bump();
                }
                None => break,
            }
        }
        taken
    }

    fn invalid_escape(&self, found: Option<char>) -> ParserError {
        let seq = found.map(|c| format!("\\{c}")).unwrap_or_else(|| "\\".into());
        self.error(SyntaxError::InvalidEscape(seq))
    }
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | ':' | '%' | '.')
}
