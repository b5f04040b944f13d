//! The row builder, which drives the whole translation.

use crate::builder::{registry, scripts::SubSupBuilder, table::BeginEnvBuilder};
use crate::lexer::TokenKind;
use crate::stream::TokenStream;
use crate::symbols;

/// Accumulates a horizontal run of MathML nodes and wraps it in an element
/// (`<mrow>` by default, `<mtd>` for table cells).
///
/// The builder remembers the buffer offset of the last appended atom so
/// that a script operator (`^`, `_`) discovered afterwards can slice the
/// atom back out and wrap it; `\left`/`\right` fences use the same
/// offset-insertion scheme through [`Self::fences`].
pub(crate) struct RowBuilder {
    out: String,
    node: &'static str,
    /// Offset of the start of the last appended atom.
    last_token_pos: usize,
    /// Open `\left` fences: (insertion offset, opener lexeme).
    fences: Vec<(usize, String)>,
}

impl RowBuilder {
    pub fn new() -> Self {
        Self::with_node("mrow")
    }

    pub fn with_node(node: &'static str) -> Self {
        Self {
            out: String::new(),
            node,
            last_token_pos: 0,
            fences: Vec::new(),
        }
    }

    /// Consume one token (and, for commands, everything the construct
    /// recursively claims).
    pub fn add(&mut self, tokens: &mut TokenStream<'_>) {
        let token = tokens.top();
        match token.kind {
            TokenKind::Command => self.command(token.lexeme, tokens),
            TokenKind::Text => {
                self.leaf("mi", token.lexeme);
                tokens.next();
            }
            TokenKind::Digit => {
                self.leaf("mn", token.lexeme);
                tokens.next();
            }
            TokenKind::Sign => self.sign(token.lexeme, tokens),
            TokenKind::BeginEnv => {
                self.last_token_pos = self.out.len();
                let mut env = BeginEnvBuilder::new(token.lexeme);
                tokens.next();
                env.add(tokens);
                let fragment = env.take();
                self.out.push_str(&fragment);
            }
            // Grouping tokens belong to some enclosing context; a stray one
            // is silently discarded.
            TokenKind::StartGroup | TokenKind::EndGroup | TokenKind::EndEnv => {
                tokens.next();
            }
            TokenKind::End => {}
        }
    }

    pub fn take(self) -> String {
        format!("<{0}>{1}</{0}>", self.node, self.out)
    }

    /// Append a single `<mi>` character atom; used by argument builders for
    /// unbraced single-character arguments.
    pub fn append_identifier(&mut self, c: char) {
        self.last_token_pos = self.out.len();
        self.out.push_str("<mi>");
        self.out.push(c);
        self.out.push_str("</mi>");
    }

    fn command(&mut self, name: &str, tokens: &mut TokenStream<'_>) {
        match name {
            "left" => {
                tokens.next();
                let opener = tokens.top().lexeme.to_owned();
                self.fences.push((self.out.len(), opener));
                tokens.next();
            }
            "right" => {
                tokens.next();
                let closer = tokens.top().lexeme.to_owned();
                tokens.next();
                // An unmatched `\right` is consumed without effect.
                if let Some((pos, opener)) = self.fences.pop() {
                    self.resolve_fence(pos, &opener, &closer);
                }
            }
            _ => {
                if let Some(symbol) = symbols::operator(name) {
                    self.leaf("mo", symbol);
                    tokens.next();
                } else if let Some(letter) = symbols::identifier(name) {
                    self.leaf("mi", letter);
                    tokens.next();
                } else if let Some(mut builder) = registry::builder_for(name) {
                    self.last_token_pos = self.out.len();
                    tokens.next();
                    builder.add(tokens);
                    let fragment = builder.take();
                    self.out.push_str(&fragment);
                } else {
                    // Unknown command: identifier fallback.
                    self.leaf("mi", name);
                    tokens.next();
                }
            }
        }
    }

    fn sign(&mut self, lexeme: &str, tokens: &mut TokenStream<'_>) {
        match lexeme.as_bytes().first() {
            Some(b'^') | Some(b'_') => {
                // The atom the script applies to is already in the buffer;
                // slice it out and hand it to the script builder as a base.
                // The script tokens themselves are consumed by the builder.
                let base = self.out.split_off(self.last_token_pos);
                let mut script = SubSupBuilder::wrapping(base);
                script.add(tokens);
                let fragment = script.take();
                self.out.push_str(&fragment);
                // `last_token_pos` keeps pointing at the wrapper, so a
                // further script wraps the whole element.
            }
            Some(b'<') => {
                self.leaf("mo", "&lt;");
                tokens.next();
            }
            Some(b'>') => {
                self.leaf("mo", "&gt;");
                tokens.next();
            }
            _ => {
                self.leaf("mo", lexeme);
                tokens.next();
            }
        }
    }

    /// Retroactively wrap everything since `pos` in an `<mfenced>`.
    fn resolve_fence(&mut self, pos: usize, opener: &str, closer: &str) {
        let wrapper = format!(
            "<mfenced open='{}' close='{}'><mrow>",
            fence_attribute(opener),
            fence_attribute(closer),
        );
        self.out.insert_str(pos, &wrapper);
        self.out.push_str("</mrow></mfenced>");
        self.last_token_pos = pos;
    }

    fn leaf(&mut self, tag: &str, content: &str) {
        self.last_token_pos = self.out.len();
        self.out.push('<');
        self.out.push_str(tag);
        self.out.push('>');
        self.out.push_str(content);
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
    }
}

/// A `.` delimiter is invisible; `<`/`>` must be entity-escaped inside the
/// attribute value.
fn fence_attribute(delimiter: &str) -> &str {
    match delimiter {
        "." => "",
        "<" => "&lt;",
        ">" => "&gt;",
        other => other,
    }
}
