//! `%` directive time formatting and parsing.
//!
//! A pattern is a mix of literal text and directives of the form
//! `%[fill][width][.precision]token`, where fill is `0` or a space.
//! Each token renders (or captures) one derived field of an instant,
//! for example `%F` the full GPS week or `% 13.6g` the second of week,
//! right justified on 13 columns with 6 decimals.

mod printing;
mod scanning;

pub use printing::print_time;
pub use scanning::scan_time;

use std::iter::Peekable;
use std::str::Chars;

/// One parsed `%` directive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Directive {
    pub fill: Option<char>,
    pub width: Option<usize>,
    pub precision: Option<usize>,
    pub token: char,
}

impl Directive {
    /// Reproduces the directive as it appeared in the pattern.
    /// Used to pass unrecognized directives through literally.
    pub fn raw(&self) -> String {
        let mut s = String::from("%");
        if let Some(fill) = self.fill {
            s.push(fill);
        }
        if let Some(width) = self.width {
            s.push_str(&width.to_string());
        }
        if let Some(precision) = self.precision {
            s.push('.');
            s.push_str(&precision.to_string());
        }
        s.push(self.token);
        s
    }
}

/// Consumes one directive from `chars`, the leading `%` already taken.
/// When the pattern ends before a token is reached, the characters
/// consumed so far come back as the error so callers can reproduce
/// the truncated directive literally.
pub(crate) fn lex_directive(chars: &mut Peekable<Chars>) -> Result<Directive, String> {
    let mut consumed = String::new();
    let mut fill = None;
    let mut width = None;
    let mut precision = None;

    if let Some(&c) = chars.peek() {
        if c == ' ' || c == '0' {
            fill = Some(c);
            consumed.push(c);
            chars.next();
        }
    }

    let mut digits = String::new();
    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() {
            digits.push(c);
            consumed.push(c);
            chars.next();
        } else {
            break;
        }
    }
    if !digits.is_empty() {
        width = digits.parse().ok();
    }

    if let Some(&'.') = chars.peek() {
        chars.next();
        consumed.push('.');
        let mut digits = String::new();
        while let Some(&c) = chars.peek() {
            if c.is_ascii_digit() {
                digits.push(c);
                consumed.push(c);
                chars.next();
            } else {
                break;
            }
        }
        precision = Some(digits.parse().unwrap_or(0));
    }

    let token = match chars.next() {
        Some(token) => token,
        None => return Err(consumed),
    };

    Ok(Directive {
        fill,
        width,
        precision,
        token,
    })
}

pub(crate) const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub(crate) const MONTH_FULL: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
