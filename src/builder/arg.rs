//! Argument builders: braced groups, optional `[...]` arguments, and raw
//! text arguments.

use crate::builder::row::RowBuilder;
use crate::lexer::TokenKind;
use crate::stream::TokenStream;

/// Consumes one TeX argument.
///
/// A braced group is consumed up to its matching close brace; anything else
/// is a single atom, per TeX semantics: `x^2` scripts the character `2`,
/// `x^{abc}` scripts the whole group.
pub(crate) struct ArgBuilder {
    row: RowBuilder,
}

impl ArgBuilder {
    pub fn new() -> Self {
        Self {
            row: RowBuilder::new(),
        }
    }

    pub fn add(&mut self, tokens: &mut TokenStream<'_>) {
        let top = tokens.top();
        match top.kind {
            TokenKind::StartGroup if top.lexeme == "{" => {
                consume_group(tokens, &mut self.row);
            }
            TokenKind::Text => {
                if let Some(c) = tokens.pop_char() {
                    self.row.append_identifier(c);
                }
            }
            _ => self.row.add(tokens),
        }
    }

    pub fn take(self) -> String {
        self.row.take()
    }
}

/// Consumes one optional `[...]` argument, or nothing at all.
pub(crate) struct OptArgBuilder {
    row: RowBuilder,
    consumed: bool,
}

impl OptArgBuilder {
    pub fn new() -> Self {
        Self {
            row: RowBuilder::new(),
            consumed: false,
        }
    }

    pub fn add(&mut self, tokens: &mut TokenStream<'_>) {
        if !tokens.top().lexeme.starts_with('[') {
            return;
        }
        self.consumed = true;
        consume_group(tokens, &mut self.row);
    }

    /// The empty fragment when no argument was present.
    pub fn take(self) -> String {
        if self.consumed {
            self.row.take()
        } else {
            String::new()
        }
    }
}

/// Feed one balanced group into `row`, including both delimiters (which the
/// row discards). Depth counts every group token, so the group also ends at
/// end of input, closing implicitly.
fn consume_group(tokens: &mut TokenStream<'_>, row: &mut RowBuilder) {
    let mut depth = 0usize;
    while !tokens.empty() {
        let closing = match tokens.top().kind {
            TokenKind::StartGroup => {
                depth += 1;
                false
            }
            TokenKind::EndGroup => {
                depth = depth.saturating_sub(1);
                depth == 0
            }
            _ => false,
        };
        row.add(tokens);
        if closing {
            break;
        }
    }
}

/// Like [`ArgBuilder`], but concatenates raw lexemes instead of translating
/// them; used for arguments that are attribute values or plain text
/// (`\genfrac` delimiters, `\mbox`).
pub(crate) struct TextArgBuilder {
    content: String,
    preserve_spaces: bool,
}

impl TextArgBuilder {
    pub fn new() -> Self {
        Self {
            content: String::new(),
            preserve_spaces: false,
        }
    }

    /// Whitespace-preserving mode: one ASCII space is re-inserted between
    /// consecutive lexemes, since the tokenizer discards the originals.
    pub fn preserving_whitespace() -> Self {
        Self {
            content: String::new(),
            preserve_spaces: true,
        }
    }

    pub fn add(&mut self, tokens: &mut TokenStream<'_>) {
        let top = tokens.top();
        match top.kind {
            TokenKind::StartGroup if top.lexeme == "{" => {
                // Only braces nest here; bracket tokens are content, so
                // `\genfrac{[}{]}…` sees its delimiters.
                let mut depth = 0usize;
                while !tokens.empty() {
                    let token = tokens.top();
                    match (token.kind, token.lexeme) {
                        (TokenKind::StartGroup, "{") => depth += 1,
                        (TokenKind::EndGroup, "}") => {
                            depth = depth.saturating_sub(1);
                            if depth == 0 {
                                tokens.next();
                                break;
                            }
                        }
                        _ => self.push_lexeme(token.lexeme),
                    }
                    tokens.next();
                }
            }
            TokenKind::Text => {
                if let Some(c) = tokens.pop_char() {
                    self.content.push(c);
                }
            }
            TokenKind::End => {}
            _ => {
                self.push_lexeme(top.lexeme);
                tokens.next();
            }
        }
    }

    pub fn take(self) -> String {
        format!("<mtext>{}</mtext>", self.content)
    }

    /// The raw concatenated string, for callers that splice it into an
    /// attribute value.
    pub fn take_content(self) -> String {
        self.content
    }

    fn push_lexeme(&mut self, lexeme: &str) {
        if self.preserve_spaces && !self.content.is_empty() {
            self.content.push(' ');
        }
        self.content.push_str(lexeme);
    }
}

#[cfg(test)]
mod tests {
    use super::{ArgBuilder, OptArgBuilder, TextArgBuilder};
    use crate::lexer::Lexer;
    use crate::stream::TokenStream;

    fn stream(input: &str) -> TokenStream<'_> {
        TokenStream::new(Lexer::new(input))
    }

    #[test]
    fn braced_argument() {
        let mut tokens = stream("{a+b}c");
        let mut arg = ArgBuilder::new();
        arg.add(&mut tokens);
        assert_eq!(arg.take(), "<mrow><mi>a</mi><mo>+</mo><mi>b</mi></mrow>");
        assert_eq!(tokens.top().lexeme, "c");
    }

    #[test]
    fn unbraced_argument_is_one_character() {
        let mut tokens = stream("ab");
        let mut arg = ArgBuilder::new();
        arg.add(&mut tokens);
        assert_eq!(arg.take(), "<mrow><mi>a</mi></mrow>");
        assert_eq!(tokens.top().lexeme, "b");
    }

    #[test]
    fn unbraced_command_argument_is_one_atom() {
        let mut tokens = stream(r"\alpha x");
        let mut arg = ArgBuilder::new();
        arg.add(&mut tokens);
        assert_eq!(arg.take(), "<mrow><mi>α</mi></mrow>");
        assert_eq!(tokens.top().lexeme, "x");
    }

    #[test]
    fn nested_groups_balance() {
        let mut tokens = stream("{a{b}c}d");
        let mut arg = ArgBuilder::new();
        arg.add(&mut tokens);
        assert_eq!(
            arg.take(),
            "<mrow><mi>a</mi><mi>b</mi><mi>c</mi></mrow>"
        );
        assert_eq!(tokens.top().lexeme, "d");
    }

    #[test]
    fn group_closes_implicitly_at_end_of_input() {
        let mut tokens = stream("{a");
        let mut arg = ArgBuilder::new();
        arg.add(&mut tokens);
        assert_eq!(arg.take(), "<mrow><mi>a</mi></mrow>");
    }

    #[test]
    fn optional_argument_present() {
        let mut tokens = stream("[3]x");
        let mut opt = OptArgBuilder::new();
        opt.add(&mut tokens);
        assert_eq!(opt.take(), "<mrow><mn>3</mn></mrow>");
        assert_eq!(tokens.top().lexeme, "x");
    }

    #[test]
    fn optional_argument_absent() {
        let mut tokens = stream("{x}");
        let mut opt = OptArgBuilder::new();
        opt.add(&mut tokens);
        assert_eq!(opt.take(), "");
        assert_eq!(tokens.top().lexeme, "{");
    }

    #[test]
    fn text_argument_content() {
        let mut tokens = stream("{0pt}");
        let mut text = TextArgBuilder::new();
        text.add(&mut tokens);
        assert_eq!(text.take_content(), "0pt");
    }

    #[test]
    fn text_argument_passes_brackets_through() {
        let mut tokens = stream("{[}x");
        let mut text = TextArgBuilder::new();
        text.add(&mut tokens);
        assert_eq!(text.take_content(), "[");
        assert_eq!(tokens.top().lexeme, "x");
    }

    #[test]
    fn text_argument_preserves_spacing() {
        let mut tokens = stream("{iff and only if}");
        let mut text = TextArgBuilder::preserving_whitespace();
        text.add(&mut tokens);
        assert_eq!(text.take(), "<mtext>iff and only if</mtext>");
    }
}
