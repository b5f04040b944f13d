//! Translate TeX math fragments into Presentation MathML.
//!
//! The crate is a translation engine meant to be embedded in tools that
//! hold a stream of TeX math and want structured XML out: a tokenizer
//! segments the surface syntax, and a network of cooperating builders
//! assembles the MathML while tracking grouping, scripts, fences, and
//! tabular environments. Every input produces well-formed output; unknown
//! commands degrade into identifiers instead of raising errors.
//!
//! ```
//! use tex2mml::{mathml::push_mathml, RenderConfig};
//!
//! let mut out = String::new();
//! push_mathml(&mut out, r"\frac{a}{b}", RenderConfig::default());
//! assert!(out.contains("<mfrac>"));
//! ```

mod builder;
pub mod config;
pub mod lexer;
pub mod mathml;
mod stream;
mod symbols;

pub use config::{DisplayMode, RenderConfig};
pub use mathml::{push_mathml, write_mathml, write_mathml_from_reader};
