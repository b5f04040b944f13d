//! Sub/superscript handling, including the large operators that default to
//! limit-style placement.

use crate::builder::arg::ArgBuilder;
use crate::lexer::TokenKind;
use crate::stream::TokenStream;

/// Where scripts attach to the base: beside it (`msub`/`msup`) or above and
/// below (`munder`/`mover`). `\limits` and `\nolimits` switch between the
/// two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Placement {
    Limits,
    NoLimits,
}

/// Builds the script element around an already-emitted base.
///
/// The row builder creates one of these when it encounters `^` or `_`,
/// handing over the fragment the script applies to; the registry creates
/// them up front for `\sum`, `\int` and friends, whose base is a fixed
/// operator node.
pub(crate) struct SubSupBuilder {
    base: String,
    placement: Placement,
    sub: Option<String>,
    sup: Option<String>,
}

impl SubSupBuilder {
    /// A script builder over a fixed operator base, e.g. `<mo>∑</mo>`.
    pub fn new(base: impl Into<String>, placement: Placement) -> Self {
        Self {
            base: base.into(),
            placement,
            sub: None,
            sup: None,
        }
    }

    /// Retroactive wrap of a fragment sliced back out of a row buffer.
    pub fn wrapping(base: String) -> Self {
        Self::new(base, Placement::NoLimits)
    }

    /// Consume any run of `^`, `_`, `\limits`, `\nolimits`. A second
    /// superscript or subscript ends the run and is left for the caller, so
    /// `x^2^3` wraps `x^2` as the base of the outer script.
    pub fn add(&mut self, tokens: &mut TokenStream<'_>) {
        loop {
            let top = tokens.top();
            match (top.kind, top.lexeme) {
                (TokenKind::Sign, "^") if self.sup.is_none() => {
                    tokens.next();
                    let mut arg = ArgBuilder::new();
                    arg.add(tokens);
                    self.sup = Some(arg.take());
                }
                (TokenKind::Sign, "_") if self.sub.is_none() => {
                    tokens.next();
                    let mut arg = ArgBuilder::new();
                    arg.add(tokens);
                    self.sub = Some(arg.take());
                }
                (TokenKind::Command, "limits") => {
                    self.placement = Placement::Limits;
                    tokens.next();
                }
                (TokenKind::Command, "nolimits") => {
                    self.placement = Placement::NoLimits;
                    tokens.next();
                }
                _ => break,
            }
        }
    }

    pub fn take(self) -> String {
        use Placement::{Limits, NoLimits};
        let base = self.base;
        match (self.sub, self.sup, self.placement) {
            (None, None, _) => base,
            (Some(sub), None, NoLimits) => {
                format!("<msub><mrow>{base}</mrow>{sub}</msub>")
            }
            (Some(sub), None, Limits) => {
                format!("<munder><mrow>{base}</mrow>{sub}</munder>")
            }
            (None, Some(sup), NoLimits) => {
                format!("<msup><mrow>{base}</mrow>{sup}</msup>")
            }
            (None, Some(sup), Limits) => {
                format!("<mover><mrow>{base}</mrow>{sup}</mover>")
            }
            (Some(sub), Some(sup), NoLimits) => {
                format!("<msubsup><mrow>{base}</mrow>{sub}{sup}</msubsup>")
            }
            (Some(sub), Some(sup), Limits) => {
                format!("<munderover><mrow>{base}</mrow>{sub}{sup}</munderover>")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Placement, SubSupBuilder};
    use crate::lexer::Lexer;
    use crate::stream::TokenStream;

    fn drive(builder: &mut SubSupBuilder, input: &str) {
        let mut tokens = TokenStream::new(Lexer::new(input));
        builder.add(&mut tokens);
    }

    #[test]
    fn superscript_only() {
        let mut b = SubSupBuilder::wrapping("<mi>x</mi>".into());
        drive(&mut b, "^2");
        assert_eq!(
            b.take(),
            "<msup><mrow><mi>x</mi></mrow><mrow><mn>2</mn></mrow></msup>"
        );
    }

    #[test]
    fn both_scripts_either_order() {
        let mut b = SubSupBuilder::wrapping("<mi>x</mi>".into());
        drive(&mut b, "_a^b");
        assert_eq!(
            b.take(),
            "<msubsup><mrow><mi>x</mi></mrow><mrow><mi>a</mi></mrow><mrow><mi>b</mi></mrow></msubsup>"
        );

        let mut b = SubSupBuilder::wrapping("<mi>x</mi>".into());
        drive(&mut b, "^b_a");
        assert_eq!(
            b.take(),
            "<msubsup><mrow><mi>x</mi></mrow><mrow><mi>a</mi></mrow><mrow><mi>b</mi></mrow></msubsup>"
        );
    }

    #[test]
    fn limits_placement() {
        let mut b = SubSupBuilder::new("<mo>∑</mo>", Placement::Limits);
        drive(&mut b, "_i^n");
        assert_eq!(
            b.take(),
            "<munderover><mrow><mo>∑</mo></mrow><mrow><mi>i</mi></mrow><mrow><mi>n</mi></mrow></munderover>"
        );
    }

    #[test]
    fn nolimits_overrides() {
        let mut b = SubSupBuilder::new("<mo>∑</mo>", Placement::Limits);
        drive(&mut b, r"\nolimits_i");
        assert_eq!(
            b.take(),
            "<msub><mrow><mo>∑</mo></mrow><mrow><mi>i</mi></mrow></msub>"
        );
    }

    #[test]
    fn second_superscript_stops_the_run() {
        let mut tokens = TokenStream::new(Lexer::new("^a^b"));
        let mut b = SubSupBuilder::wrapping(String::new());
        b.add(&mut tokens);
        assert_eq!(tokens.top().lexeme, "^");
        assert_eq!(
            b.take(),
            "<msup><mrow></mrow><mrow><mi>a</mi></mrow></msup>"
        );
    }

    #[test]
    fn bare_operator_without_scripts() {
        let mut b = SubSupBuilder::new("<mo>∫</mo>", Placement::NoLimits);
        drive(&mut b, "");
        assert_eq!(b.take(), "<mo>∫</mo>");
    }
}
