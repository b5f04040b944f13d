use tex2mml::{mathml::push_mathml, RenderConfig};

static INPUT_TEX: &str = r"\forall \epsilon \gt 0, \exists \delta \gt 0,
\left| x - c \right| \lt \delta \rightarrow \left| f(x) - L \right| \lt \epsilon";

fn main() {
    let mut mathml = String::new();
    push_mathml(&mut mathml, INPUT_TEX, RenderConfig::default());
    println!("{}", mathml);
}
