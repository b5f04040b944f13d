//! The document envelope and the public entry points.
//!
//! Translation is driven here: characters → [`Lexer`] → [`TokenStream`] →
//! root [`RowBuilder`] loop → body string, wrapped in the XML declaration
//! and the `<math>` element.

use std::io;

use crate::builder::row::RowBuilder;
use crate::config::{DisplayMode, RenderConfig};
use crate::lexer::Lexer;
use crate::stream::TokenStream;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";
const MATH_OPEN: &str = "<math xmlns=\"http://www.w3.org/1998/Math/MathML\">";

/// Translate `input` and append the resulting MathML document to `string`.
pub fn push_mathml(string: &mut String, input: &str, config: RenderConfig) {
    string.push_str(XML_DECLARATION);
    string.push('\n');
    string.push_str(MATH_OPEN);
    string.push('\n');
    if config.display_mode == DisplayMode::Block {
        string.push_str("<mstyle displaystyle=\"true\">\n");
    }
    string.push_str(&body(input));
    string.push('\n');
    if config.display_mode == DisplayMode::Block {
        string.push_str("</mstyle>\n");
    }
    string.push_str("</math>\n");
}

/// Translate `input` and write the resulting MathML document to `writer`.
pub fn write_mathml<W: io::Write>(
    mut writer: W,
    input: &str,
    config: RenderConfig,
) -> io::Result<()> {
    let mut string = String::new();
    push_mathml(&mut string, input, config);
    writer.write_all(string.as_bytes())
}

/// Translate everything `reader` yields and write the document to `writer`.
///
/// The input is read eagerly and converted lossily, so arbitrary byte
/// streams are accepted.
pub fn write_mathml_from_reader<R: io::Read, W: io::Write>(
    mut reader: R,
    writer: W,
    config: RenderConfig,
) -> io::Result<()> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    write_mathml(writer, &String::from_utf8_lossy(&bytes), config)
}

/// The `<mrow>` body alone, without the envelope.
fn body(input: &str) -> String {
    let mut tokens = TokenStream::new(Lexer::new(input));
    let mut row = RowBuilder::new();
    while !tokens.empty() {
        row.add(&mut tokens);
    }
    row.take()
}

#[cfg(test)]
mod tests {
    use super::push_mathml;
    use crate::config::{DisplayMode, RenderConfig};

    #[test]
    fn envelope_inline() {
        let mut out = String::new();
        push_mathml(&mut out, "x", RenderConfig::default());
        assert_eq!(
            out,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <math xmlns=\"http://www.w3.org/1998/Math/MathML\">\n\
             <mrow><mi>x</mi></mrow>\n\
             </math>\n"
        );
    }

    #[test]
    fn envelope_block() {
        let mut out = String::new();
        push_mathml(
            &mut out,
            "x",
            RenderConfig::with_display_mode(DisplayMode::Block),
        );
        assert_eq!(
            out,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <math xmlns=\"http://www.w3.org/1998/Math/MathML\">\n\
             <mstyle displaystyle=\"true\">\n\
             <mrow><mi>x</mi></mrow>\n\
             </mstyle>\n\
             </math>\n"
        );
    }

    #[test]
    fn reader_entry_point_accepts_arbitrary_bytes() {
        let mut out = Vec::new();
        super::write_mathml_from_reader(
            &b"x + \xFF"[..],
            &mut out,
            RenderConfig::default(),
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("<mi>x</mi>"));
        assert!(text.ends_with("</math>\n"));
    }
}
