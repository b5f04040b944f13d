use tex2mml::RenderConfig;

/// Render `input` and return the full document.
pub fn render(input: &str) -> String {
    let mut output = String::new();
    tex2mml::push_mathml(&mut output, input, RenderConfig::default());
    output
}

/// Render `input` and return the body between the `<math>` envelope lines.
pub fn render_body(input: &str) -> String {
    let output = render(input);
    let (_, rest) = output
        .split_once("Math/MathML\">\n")
        .expect("output carries the math envelope");
    let (body, _) = rest
        .rsplit_once("\n</math>")
        .expect("output carries the math envelope");
    body.to_owned()
}

/// Every produced element must be paired; `<mspace>` is always
/// self-closing and is exempt.
pub fn assert_balanced(output: &str) {
    for tag in [
        "mrow", "mtd", "mtr", "mtable", "mfenced", "mfrac", "mroot", "msub",
        "msup", "msubsup", "munder", "mover", "munderover", "mstyle",
        "mphantom", "mtext", "mi", "mn", "mo", "math",
    ] {
        let opens = count_opens(output, tag);
        let closes = output.matches(&format!("</{tag}>")).count();
        assert_eq!(
            opens, closes,
            "unbalanced <{tag}> in output:\n{output}"
        );
    }
}

fn count_opens(output: &str, tag: &str) -> usize {
    let open = format!("<{tag}");
    output
        .match_indices(&open)
        .filter(|(at, _)| {
            matches!(
                output.as_bytes().get(at + open.len()),
                Some(b'>') | Some(b' ')
            )
        })
        .count()
}

/// Render every input and assert the output is structurally well formed.
#[macro_export]
macro_rules! round_trip {
    ($name:ident, $($input:literal),+ $(,)?) => {
        #[test]
        fn $name() {
            for input in [$($input),+] {
                let output = crate::common::render(input);
                crate::common::assert_balanced(&output);
            }
        }
    };
}
pub use round_trip;
