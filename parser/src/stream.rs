//! Destructive token queue and command-line splitting.
//!
//! Tokens are consumed strictly left to right; nothing is ever pushed back.
//! The option loop reads through [`TokenStream::next_option`], operands through
//! [`TokenStream::pop_operand`], and whatever is left afterwards is the
//! positional argument.

use std::collections::VecDeque;

use launch_intent_core::IntentError;

/// Order-preserving queue of string tokens.
///
/// # Examples
///
/// ```
/// use launch_intent_parser::stream::TokenStream;
///
/// let mut tokens = TokenStream::new(["-a", "VIEW", "com.example"]);
/// assert_eq!(tokens.next_option().as_deref(), Some("-a"));
/// assert_eq!(tokens.pop_operand("-a").unwrap(), "VIEW");
/// assert_eq!(tokens.next_option(), None);
/// assert_eq!(tokens.take_positional().unwrap().as_deref(), Some("com.example"));
/// assert!(tokens.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: VecDeque<String>,
    options_closed: bool,
}

impl TokenStream {
    /// Creates a stream over the given tokens.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            options_closed: false,
        }
    }

    /// Splits a shell-like command string and creates a stream over the
    /// resulting tokens.
    pub fn from_command_line(line: &str) -> Self {
        Self::new(split_command_line(line))
    }

    /// Returns `true` when every token has been consumed.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of tokens not yet consumed.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Removes and returns the front token, if any.
    pub fn pop(&mut self) -> Option<String> {
        self.tokens.pop_front()
    }

    /// Removes and returns the operand of `option`.
    ///
    /// # Errors
    ///
    /// Returns [`IntentError::ExhaustedInput`] when the stream is empty.
    pub fn pop_operand(&mut self, option: &str) -> Result<String, IntentError> {
        self.pop().ok_or_else(|| IntentError::ExhaustedInput {
            option: option.to_string(),
        })
    }

    /// Returns the next option token, or `None` once options are over.
    ///
    /// Options end at the first token that does not start with `-`, or right
    /// after a literal `--`, which is consumed.
    pub fn next_option(&mut self) -> Option<String> {
        if self.options_closed {
            return None;
        }
        let front = self.tokens.front()?;
        if !front.starts_with('-') {
            self.options_closed = true;
            return None;
        }
        let token = self.pop()?;
        if token == "--" {
            self.options_closed = true;
            return None;
        }
        Some(token)
    }

    /// Takes the single positional argument left after the options.
    ///
    /// # Errors
    ///
    /// Returns [`IntentError::UnexpectedArgument`] naming the second token
    /// when more than one remains.
    pub fn take_positional(&mut self) -> Result<Option<String>, IntentError> {
        let positional = self.pop();
        if let Some(extra) = self.pop() {
            return Err(IntentError::UnexpectedArgument(extra));
        }
        Ok(positional)
    }
}

/// Splits a command string into tokens.
///
/// Whitespace separates tokens. Single quotes keep their content verbatim;
/// double quotes allow `\"` and `\\` escapes; outside quotes a backslash
/// escapes the next character. Adjacent quoted and unquoted pieces join into
/// one token, and `""` yields an empty token.
///
/// # Examples
///
/// ```
/// use launch_intent_parser::stream::split_command_line;
///
/// let tokens = split_command_line(r#"am start -d "/sdcard/My Roms/a.gba" --es k 'x y'"#);
/// assert_eq!(tokens, vec!["am", "start", "-d", "/sdcard/My Roms/a.gba", "--es", "k", "x y"]);
/// ```
pub fn split_command_line(line: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut has_token = false;
    let mut chars = line.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '\'' => {
                has_token = true;
                for quoted in chars.by_ref() {
                    if quoted == '\'' {
                        break;
                    }
                    current.push(quoted);
                }
            }
            '"' => {
                has_token = true;
                while let Some(quoted) = chars.next() {
                    match quoted {
                        '"' => break,
                        '\\' => match chars.next() {
                            Some(next @ ('"' | '\\')) => current.push(next),
                            Some(next) => {
                                current.push('\\');
                                current.push(next);
                            }
                            None => current.push('\\'),
                        },
                        other => current.push(other),
                    }
                }
            }
            '\\' => {
                has_token = true;
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            c if c.is_whitespace() => {
                if has_token {
                    out.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            other => {
                has_token = true;
                current.push(other);
            }
        }
    }

    if has_token {
        out.push(current);
    }

    out
}
