//! A deliberately small path parser. It understands the subset of the SVG path
//! mini-language that hand-drawn letterforms exported from vector editors tend to use:
//!
//! | command | arguments              | meaning                              |
//! |---------|------------------------|--------------------------------------|
//! | `M`     | `x y`                  | absolute move, starts a sub-path     |
//! | `H`/`h` | `x` / `dx`             | horizontal line, absolute / relative |
//! | `V`/`v` | `y` / `dy`             | vertical line, absolute / relative   |
//! | `l`     | `dx dy`                | relative line                        |
//! | `c`     | `dx2 dy2 dx3 dy3 dx dy` | relative cubic                       |
//! | `s`     | `dx3 dy3 dx dy`         | relative smooth cubic                |
//! | `z`/`Z` |                        | close the current sub-path           |
//!
//! Extra argument groups repeat the previous command; extra pairs after `M` are
//! absolute line-tos. Curves are flattened to straight chords right away, so the
//! result is always a [`Shape`].
use geo_types::{coord, Coord, Line};

use crate::errors::ParseError;
use crate::shape::{LineSegment, Shape};

/// Fixed-count cubic/quadratic flattening.
pub mod bezier;

/// Pulling the path data out of a whole SVG document.
pub mod document;

pub use bezier::{flatten_cubic, flatten_quadratic, BEZIER_SUBDIVISIONS};
pub use document::extract_path_data;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Command(char),
    Number(f64),
}

/// Splits path data into commands and numbers. Whitespace and commas separate
/// tokens. Any letter is a command; numbers are an optional `-`, digits, and at
/// most one `.`.
pub struct Tokenizer<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(src: &'a str) -> Self {
        Tokenizer { src, pos: 0 }
    }

    /// Byte offset of the next token.
    pub fn offset(&mut self) -> usize {
        self.skip_separators();
        self.pos
    }

    fn skip_separators(&mut self) {
        let bytes = self.src.as_bytes();
        while self.pos < bytes.len() && (bytes[self.pos].is_ascii_whitespace() || bytes[self.pos] == b',') {
            self.pos += 1;
        }
    }

    /// Look at the next token without consuming it.
    pub fn peek(&mut self) -> Result<Option<Token>, ParseError> {
        let saved = self.pos;
        let token = self.next_token();
        self.pos = saved;
        token
    }

    pub fn next_token(&mut self) -> Result<Option<Token>, ParseError> {
        self.skip_separators();
        let bytes = self.src.as_bytes();
        if self.pos >= bytes.len() {
            return Ok(None);
        }

        let letter = self
            .src
            .get(self.pos..)
            .and_then(|rest| rest.chars().next())
            .filter(|ch| ch.is_alphabetic());
        if let Some(ch) = letter {
            self.pos += ch.len_utf8();
            return Ok(Some(Token::Command(ch)));
        }

        let start = self.pos;
        let mut end = start;
        if bytes[end] == b'-' {
            end += 1;
        }
        let mut seen_dot = false;
        while end < bytes.len() {
            match bytes[end] {
                b'0'..=b'9' => end += 1,
                b'.' if !seen_dot => {
                    seen_dot = true;
                    end += 1;
                }
                _ => break,
            }
        }
        match self.src[start..end].parse::<f64>() {
            Ok(value) => {
                self.pos = end;
                Ok(Some(Token::Number(value)))
            }
            Err(_) => Err(ParseError::InvalidNumber(start)),
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_err() {
            // Nothing sensible follows a bad token; stop here.
            self.pos = self.src.len();
        }
        token.transpose()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    MoveTo,
    /// Only reachable through implicit repetition of `M`.
    LineToAbs,
    HorizontalAbs,
    HorizontalRel,
    VerticalAbs,
    VerticalRel,
    LineRel,
    CubicRel,
    SmoothCubicRel,
    Close,
}

impl Command {
    fn from_letter(letter: char) -> Result<Command, ParseError> {
        Ok(match letter {
            'M' => Command::MoveTo,
            'H' => Command::HorizontalAbs,
            'h' => Command::HorizontalRel,
            'V' => Command::VerticalAbs,
            'v' => Command::VerticalRel,
            'l' => Command::LineRel,
            'c' => Command::CubicRel,
            's' => Command::SmoothCubicRel,
            'z' | 'Z' => Command::Close,
            other => return Err(ParseError::UnknownCommand(other)),
        })
    }

    /// What a bare argument group after this command means.
    fn repeated(self) -> Option<Command> {
        match self {
            Command::MoveTo | Command::LineToAbs => Some(Command::LineToAbs),
            Command::Close => None,
            other => Some(other),
        }
    }
}

#[derive(Default)]
struct PathBuilder {
    segments: Vec<LineSegment>,
    pen: Option<Coord<f64>>,
    subpath_start: Option<Coord<f64>>,
    /// Second control point of the cubic just drawn, if the previous command was one.
    last_handle: Option<Coord<f64>>,
}

impl PathBuilder {
    fn pen(&self, letter: char) -> Result<Coord<f64>, ParseError> {
        self.pen.ok_or(ParseError::NoCurrentPoint(letter))
    }

    fn line_to(&mut self, letter: char, to: Coord<f64>) -> Result<(), ParseError> {
        let from = self.pen(letter)?;
        self.segments.push(Line::new(from, to));
        self.pen = Some(to);
        self.last_handle = None;
        Ok(())
    }

    fn cubic_to(&mut self, from: Coord<f64>, c1: Coord<f64>, c2: Coord<f64>, to: Coord<f64>) {
        self.segments.extend(flatten_cubic(from, c1, c2, to));
        self.pen = Some(to);
        self.last_handle = Some(c2);
    }

    fn apply(
        &mut self,
        command: Command,
        letter: char,
        tokens: &mut Tokenizer,
    ) -> Result<(), ParseError> {
        let mut arg = || next_number(tokens, letter);
        match command {
            Command::MoveTo => {
                let to = coord! {x: arg()?, y: arg()?};
                self.pen = Some(to);
                self.subpath_start = Some(to);
                self.last_handle = None;
            }
            Command::LineToAbs => {
                let to = coord! {x: arg()?, y: arg()?};
                self.line_to(letter, to)?;
            }
            Command::HorizontalAbs => {
                let x = arg()?;
                let pen = self.pen(letter)?;
                self.line_to(letter, coord! {x: x, y: pen.y})?;
            }
            Command::HorizontalRel => {
                let dx = arg()?;
                let pen = self.pen(letter)?;
                self.line_to(letter, coord! {x: pen.x + dx, y: pen.y})?;
            }
            Command::VerticalAbs => {
                let y = arg()?;
                let pen = self.pen(letter)?;
                self.line_to(letter, coord! {x: pen.x, y: y})?;
            }
            Command::VerticalRel => {
                let dy = arg()?;
                let pen = self.pen(letter)?;
                self.line_to(letter, coord! {x: pen.x, y: pen.y + dy})?;
            }
            Command::LineRel => {
                let delta = coord! {x: arg()?, y: arg()?};
                let pen = self.pen(letter)?;
                self.line_to(letter, pen + delta)?;
            }
            Command::CubicRel => {
                let d2 = coord! {x: arg()?, y: arg()?};
                let d3 = coord! {x: arg()?, y: arg()?};
                let d4 = coord! {x: arg()?, y: arg()?};
                let pen = self.pen(letter)?;
                self.cubic_to(pen, pen + d2, pen + d3, pen + d4);
            }
            Command::SmoothCubicRel => {
                let d3 = coord! {x: arg()?, y: arg()?};
                let d4 = coord! {x: arg()?, y: arg()?};
                let pen = self.pen(letter)?;
                let c1 = match self.last_handle {
                    Some(handle) => pen + (pen - handle),
                    None => pen,
                };
                self.cubic_to(pen, c1, pen + d3, pen + d4);
            }
            Command::Close => {
                let pen = self.pen(letter)?;
                let start = self.subpath_start.unwrap_or(pen);
                if pen != start {
                    self.segments.push(Line::new(pen, start));
                }
                self.pen = Some(start);
                self.last_handle = None;
            }
        }
        Ok(())
    }
}

fn next_number(tokens: &mut Tokenizer, letter: char) -> Result<f64, ParseError> {
    match tokens.peek()? {
        Some(Token::Number(value)) => {
            tokens.next_token()?;
            Ok(value)
        }
        _ => Err(ParseError::MissingArgument(letter)),
    }
}

/// Parse path data into a [`Shape`]. Blank input is [`ParseError::MissingPath`].
pub fn parse_path(data: &str) -> Result<Shape, ParseError> {
    let mut tokens = Tokenizer::new(data);
    let mut builder = PathBuilder::default();
    let mut previous: Option<(Command, char)> = None;

    while let Some(token) = tokens.peek()? {
        let (command, letter) = match token {
            Token::Command(letter) => {
                tokens.next_token()?;
                (Command::from_letter(letter)?, letter)
            }
            Token::Number(_) => match previous.and_then(|(cmd, letter)| cmd.repeated().map(|c| (c, letter))) {
                Some(repeat) => repeat,
                None => return Err(ParseError::InvalidNumber(tokens.offset())),
            },
        };
        builder.apply(command, letter, &mut tokens)?;
        previous = Some((command, letter));
    }

    if previous.is_none() {
        return Err(ParseError::MissingPath);
    }
    log::trace!("parsed path into {} segments", builder.segments.len());
    Ok(Shape::new(builder.segments))
}
