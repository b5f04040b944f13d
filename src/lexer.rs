//! The tokenizer for the TeX surface syntax.
//!
//! The [`Lexer`] is a deterministic scanner over the input string. It never
//! fails: malformed escapes degrade into single-character [`TokenKind::Sign`]
//! tokens, and every non-trivia character of the input is accounted for by
//! exactly one token. Math-shift markers (`$`, `$$`) and whitespace are
//! trivia and are discarded.

/// Classification of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input. Returned indefinitely once reached.
    End,
    /// `\name`, or a single-character control symbol such as `\,`.
    Command,
    /// `{` or `[`.
    StartGroup,
    /// `}` or `]`.
    EndGroup,
    /// `\begin{NAME}`; the lexeme is `NAME`.
    BeginEnv,
    /// `\end{NAME}`; the lexeme is `NAME`.
    EndEnv,
    /// A maximal run of ASCII digits, possibly with one interior `.`.
    Digit,
    /// A maximal run of letters.
    Text,
    /// Any other printable character, one codepoint per token.
    Sign,
}

/// A token is its classification paired with the input substring that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub lexeme: &'a str,
}

impl<'a> Token<'a> {
    const END: Token<'static> = Token {
        kind: TokenKind::End,
        lexeme: "",
    };

    fn new(kind: TokenKind, lexeme: &'a str) -> Self {
        Self { kind, lexeme }
    }
}

/// Scanner over a TeX math fragment.
///
/// `next` yields tokens on demand; the lexer holds no state besides the
/// remaining input.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    rest: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { rest: input }
    }

    /// Return the next token. After the first [`TokenKind::End`] every
    /// further call returns [`TokenKind::End`].
    pub fn next(&mut self) -> Token<'a> {
        self.skip_trivia();

        let Some(first) = self.rest.chars().next() else {
            return Token::END;
        };

        match first {
            '\\' => self.escape(),
            '{' | '[' => self.single(TokenKind::StartGroup),
            '}' | ']' => self.single(TokenKind::EndGroup),
            '0'..='9' => self.number(),
            c if c.is_alphabetic() => self.letters(),
            _ => self.single(TokenKind::Sign),
        }
    }

    /// Discard whitespace and `$`/`$$` math-shift markers.
    fn skip_trivia(&mut self) {
        self.rest = self
            .rest
            .trim_start_matches(|c: char| c.is_whitespace() || c == '$');
    }

    /// Emit a single-codepoint token of the given kind.
    fn single(&mut self, kind: TokenKind) -> Token<'a> {
        let len = self
            .rest
            .chars()
            .next()
            .map_or(0, char::len_utf8);
        let (lexeme, rest) = self.rest.split_at(len);
        self.rest = rest;
        Token::new(kind, lexeme)
    }

    /// Scan everything that starts with `\`.
    fn escape(&mut self) -> Token<'a> {
        let after = &self.rest[1..];
        let Some(next) = after.chars().next() else {
            // A trailing backslash degrades into a bare sign.
            return self.single(TokenKind::Sign);
        };

        if next.is_ascii_alphabetic() {
            if let Some(token) = self.environment(after) {
                return token;
            }
            let len = after
                .chars()
                .take_while(char::is_ascii_alphabetic)
                .count();
            let lexeme = &after[..len];
            self.rest = &after[len..];
            return Token::new(TokenKind::Command, lexeme);
        }

        // Control symbol. Escapable literals surface as the bare character;
        // the rest are single-character commands (spacing and friends).
        let lexeme = &after[..next.len_utf8()];
        self.rest = &after[next.len_utf8()..];
        match next {
            '{' | '}' | '[' | ']' => Token::new(TokenKind::Text, lexeme),
            '\\' => Token::new(TokenKind::Sign, lexeme),
            _ => Token::new(TokenKind::Command, lexeme),
        }
    }

    /// Recognize `\begin{NAME}` / `\end{NAME}`, with `after` pointing past
    /// the backslash. The braces around `NAME` are consumed here and never
    /// surface as tokens.
    fn environment(&mut self, after: &'a str) -> Option<Token<'a>> {
        let (kind, rest) = if let Some(rest) = after.strip_prefix("begin") {
            (TokenKind::BeginEnv, rest)
        } else if let Some(rest) = after.strip_prefix("end") {
            (TokenKind::EndEnv, rest)
        } else {
            return None;
        };
        // `\beginning` is a command, not an environment.
        let rest = rest.strip_prefix('{')?;

        let name_len = rest.find('}').unwrap_or(rest.len());
        let name = &rest[..name_len];
        self.rest = rest.get(name_len + 1..).unwrap_or("");
        Some(Token::new(kind, name))
    }

    /// A maximal digit run; one interior `.` is part of the number when a
    /// digit follows it, so `3.14` is one token and `3.` is two.
    fn number(&mut self) -> Token<'a> {
        let bytes = self.rest.as_bytes();
        let mut len = 0;
        let mut seen_point = false;
        while len < bytes.len() {
            match bytes[len] {
                b'0'..=b'9' => len += 1,
                b'.' if !seen_point
                    && bytes.get(len + 1).is_some_and(u8::is_ascii_digit) =>
                {
                    seen_point = true;
                    len += 1;
                }
                _ => break,
            }
        }
        let (lexeme, rest) = self.rest.split_at(len);
        self.rest = rest;
        Token::new(TokenKind::Digit, lexeme)
    }

    fn letters(&mut self) -> Token<'a> {
        let len = self
            .rest
            .chars()
            .take_while(|c| c.is_alphabetic())
            .map(char::len_utf8)
            .sum();
        let (lexeme, rest) = self.rest.split_at(len);
        self.rest = rest;
        Token::new(TokenKind::Text, lexeme)
    }
}
