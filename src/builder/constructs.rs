//! Builders for the multi-argument commands: fractions, roots, accents,
//! style wrappers, and fixed spacing nodes.

use crate::builder::arg::{ArgBuilder, OptArgBuilder, TextArgBuilder};
use crate::stream::TokenStream;

/// `\frac`, `\cfrac`, `\dfrac`, `\tfrac`.
pub(crate) struct FracBuilder {
    numerator: ArgBuilder,
    denominator: ArgBuilder,
}

impl FracBuilder {
    pub fn new() -> Self {
        Self {
            numerator: ArgBuilder::new(),
            denominator: ArgBuilder::new(),
        }
    }

    pub fn add(&mut self, tokens: &mut TokenStream<'_>) {
        self.numerator.add(tokens);
        self.denominator.add(tokens);
    }

    pub fn take(self) -> String {
        format!(
            "<mfrac>{}{}</mfrac>",
            self.numerator.take(),
            self.denominator.take()
        )
    }
}

/// `\binom`, `\tbinom`: a zero-thickness fraction inside parentheses.
pub(crate) struct BinomBuilder {
    upper: ArgBuilder,
    lower: ArgBuilder,
}

impl BinomBuilder {
    pub fn new() -> Self {
        Self {
            upper: ArgBuilder::new(),
            lower: ArgBuilder::new(),
        }
    }

    pub fn add(&mut self, tokens: &mut TokenStream<'_>) {
        self.upper.add(tokens);
        self.lower.add(tokens);
    }

    pub fn take(self) -> String {
        format!(
            "<mfenced open='(' close=')'><mrow><mfrac linethickness='0pt'>{}{}</mfrac></mrow></mfenced>",
            self.upper.take(),
            self.lower.take()
        )
    }
}

/// `\genfrac{left}{right}{thickness}{style}{num}{den}`; the style argument
/// is consumed and ignored.
pub(crate) struct GenfracBuilder {
    left: TextArgBuilder,
    right: TextArgBuilder,
    thickness: TextArgBuilder,
    style: TextArgBuilder,
    numerator: ArgBuilder,
    denominator: ArgBuilder,
}

impl GenfracBuilder {
    pub fn new() -> Self {
        Self {
            left: TextArgBuilder::new(),
            right: TextArgBuilder::new(),
            thickness: TextArgBuilder::new(),
            style: TextArgBuilder::new(),
            numerator: ArgBuilder::new(),
            denominator: ArgBuilder::new(),
        }
    }

    pub fn add(&mut self, tokens: &mut TokenStream<'_>) {
        self.left.add(tokens);
        self.right.add(tokens);
        self.thickness.add(tokens);
        self.style.add(tokens);
        self.numerator.add(tokens);
        self.denominator.add(tokens);
    }

    pub fn take(self) -> String {
        format!(
            "<mfenced open='{}' close='{}'><mrow><mfrac linethickness='{}'>{}{}</mfrac></mrow></mfenced>",
            self.left.take_content(),
            self.right.take_content(),
            self.thickness.take_content(),
            self.numerator.take(),
            self.denominator.take()
        )
    }
}

/// `\sqrt[index]{radicand}`. The index slot stays in the output even when
/// empty; renderers accept the empty child.
pub(crate) struct SqrtBuilder {
    index: OptArgBuilder,
    radicand: ArgBuilder,
}

impl SqrtBuilder {
    pub fn new() -> Self {
        Self {
            index: OptArgBuilder::new(),
            radicand: ArgBuilder::new(),
        }
    }

    pub fn add(&mut self, tokens: &mut TokenStream<'_>) {
        self.index.add(tokens);
        self.radicand.add(tokens);
    }

    pub fn take(self) -> String {
        format!("<mroot>{}{}</mroot>", self.radicand.take(), self.index.take())
    }
}

/// `\overset`/`\stackrel` (`mover`) and `\underset` (`munder`). The
/// decoration is the first TeX argument but the second MathML child.
pub(crate) struct StackBuilder {
    tag: &'static str,
    decoration: ArgBuilder,
    base: ArgBuilder,
}

impl StackBuilder {
    pub fn over() -> Self {
        Self::with_tag("mover")
    }

    pub fn under() -> Self {
        Self::with_tag("munder")
    }

    fn with_tag(tag: &'static str) -> Self {
        Self {
            tag,
            decoration: ArgBuilder::new(),
            base: ArgBuilder::new(),
        }
    }

    pub fn add(&mut self, tokens: &mut TokenStream<'_>) {
        self.decoration.add(tokens);
        self.base.add(tokens);
    }

    pub fn take(self) -> String {
        format!(
            "<{0}>{1}{2}</{0}>",
            self.tag,
            self.base.take(),
            self.decoration.take()
        )
    }
}

/// One argument wrapped in a fixed pair of tags: `\mathrm`,
/// `\displaystyle`, `\textstyle`, `\phantom`.
pub(crate) struct WrapBuilder {
    open: &'static str,
    close: &'static str,
    arg: ArgBuilder,
}

impl WrapBuilder {
    pub fn new(open: &'static str, close: &'static str) -> Self {
        Self {
            open,
            close,
            arg: ArgBuilder::new(),
        }
    }

    pub fn add(&mut self, tokens: &mut TokenStream<'_>) {
        self.arg.add(tokens);
    }

    pub fn take(self) -> String {
        format!("{}{}{}", self.open, self.arg.take(), self.close)
    }
}

/// Accent commands: the argument with a fixed accent character above
/// (`\bar`, `\vec`, …) or below (`\underline`).
pub(crate) struct AccentBuilder {
    tag: &'static str,
    accent: &'static str,
    arg: ArgBuilder,
}

impl AccentBuilder {
    pub fn over(accent: &'static str) -> Self {
        Self {
            tag: "mover",
            accent,
            arg: ArgBuilder::new(),
        }
    }

    pub fn under(accent: &'static str) -> Self {
        Self {
            tag: "munder",
            accent,
            arg: ArgBuilder::new(),
        }
    }

    pub fn add(&mut self, tokens: &mut TokenStream<'_>) {
        self.arg.add(tokens);
    }

    pub fn take(self) -> String {
        format!(
            "<{0}>{1}<mo>{2}</mo></{0}>",
            self.tag,
            self.arg.take(),
            self.accent
        )
    }
}

/// `\hspace{…}`: the dimension argument is consumed and discarded, a thin
/// space is emitted in its place.
pub(crate) struct HSpaceBuilder {
    arg: ArgBuilder,
}

impl HSpaceBuilder {
    pub fn new() -> Self {
        Self {
            arg: ArgBuilder::new(),
        }
    }

    pub fn add(&mut self, tokens: &mut TokenStream<'_>) {
        self.arg.add(tokens);
    }

    pub fn take(self) -> String {
        "<mo>\u{2009}</mo>".to_owned()
    }
}

/// A command with fixed output and no arguments: `\quad` and the other
/// spacing commands.
pub(crate) struct FixedBuilder {
    fragment: &'static str,
}

impl FixedBuilder {
    pub fn new(fragment: &'static str) -> Self {
        Self { fragment }
    }

    pub fn add(&mut self, _tokens: &mut TokenStream<'_>) {}

    pub fn take(self) -> String {
        self.fragment.to_owned()
    }
}

/// `\mbox{…}`: raw text with whitespace re-inserted.
pub(crate) struct MboxBuilder {
    text: TextArgBuilder,
}

impl MboxBuilder {
    pub fn new() -> Self {
        Self {
            text: TextArgBuilder::preserving_whitespace(),
        }
    }

    pub fn add(&mut self, tokens: &mut TokenStream<'_>) {
        self.text.add(tokens);
    }

    pub fn take(self) -> String {
        self.text.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use crate::stream::TokenStream;

    fn stream(input: &str) -> TokenStream<'_> {
        TokenStream::new(Lexer::new(input))
    }

    #[test]
    fn fraction() {
        let mut tokens = stream("{a}{b}");
        let mut frac = FracBuilder::new();
        frac.add(&mut tokens);
        assert_eq!(
            frac.take(),
            "<mfrac><mrow><mi>a</mi></mrow><mrow><mi>b</mi></mrow></mfrac>"
        );
    }

    #[test]
    fn binomial() {
        let mut tokens = stream("{n}{k}");
        let mut binom = BinomBuilder::new();
        binom.add(&mut tokens);
        assert_eq!(
            binom.take(),
            "<mfenced open='(' close=')'><mrow><mfrac linethickness='0pt'>\
             <mrow><mi>n</mi></mrow><mrow><mi>k</mi></mrow></mfrac></mrow></mfenced>"
        );
    }

    #[test]
    fn genfrac() {
        let mut tokens = stream("{(}{)}{0pt}{}{n}{k}");
        let mut genfrac = GenfracBuilder::new();
        genfrac.add(&mut tokens);
        assert_eq!(
            genfrac.take(),
            "<mfenced open='(' close=')'><mrow><mfrac linethickness='0pt'>\
             <mrow><mi>n</mi></mrow><mrow><mi>k</mi></mrow></mfrac></mrow></mfenced>"
        );
    }

    #[test]
    fn sqrt_with_index() {
        let mut tokens = stream("[3]{x}");
        let mut sqrt = SqrtBuilder::new();
        sqrt.add(&mut tokens);
        assert_eq!(
            sqrt.take(),
            "<mroot><mrow><mi>x</mi></mrow><mrow><mn>3</mn></mrow></mroot>"
        );
    }

    #[test]
    fn sqrt_without_index_keeps_the_slot() {
        let mut tokens = stream("{x}");
        let mut sqrt = SqrtBuilder::new();
        sqrt.add(&mut tokens);
        assert_eq!(sqrt.take(), "<mroot><mrow><mi>x</mi></mrow></mroot>");
    }

    #[test]
    fn overset_reverses_arguments() {
        let mut tokens = stream("{a}{b}");
        let mut stack = StackBuilder::over();
        stack.add(&mut tokens);
        assert_eq!(
            stack.take(),
            "<mover><mrow><mi>b</mi></mrow><mrow><mi>a</mi></mrow></mover>"
        );
    }

    #[test]
    fn accent() {
        let mut tokens = stream("{x}");
        let mut accent = AccentBuilder::over("→");
        accent.add(&mut tokens);
        assert_eq!(
            accent.take(),
            "<mover><mrow><mi>x</mi></mrow><mo>→</mo></mover>"
        );
    }

    #[test]
    fn hspace_discards_its_argument() {
        let mut tokens = stream("{2em}x");
        let mut hspace = HSpaceBuilder::new();
        hspace.add(&mut tokens);
        assert_eq!(hspace.take(), "<mo>\u{2009}</mo>");
        assert_eq!(tokens.top().lexeme, "x");
    }
}
