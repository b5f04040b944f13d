//! The builder network: one builder per TeX construct or grouping context.
//!
//! Builders cooperate over a shared [`TokenStream`]: each `add` call
//! consumes some prefix of the stream (recursively driving child builders
//! for nested constructs), and `take` finalizes the accumulated MathML
//! fragment. The root [`row::RowBuilder`] is driven in a loop until the
//! stream is exhausted; everything else hangs off it, either directly or
//! through the [`registry`].

pub(crate) mod arg;
pub(crate) mod constructs;
pub(crate) mod registry;
pub(crate) mod row;
pub(crate) mod scripts;
pub(crate) mod table;

use crate::stream::TokenStream;

/// A translation step for one construct.
///
/// `add` consumes tokens and updates internal state; `take` finalizes the
/// builder into its MathML fragment. Children are owned by their parent for
/// the duration of `add` and consumed once their fragment is appended.
pub(crate) trait Builder {
    fn add(&mut self, tokens: &mut TokenStream<'_>);
    fn take(self: Box<Self>) -> String;
}

/// Forward the [`Builder`] trait to a type's inherent `add`/`take` pair, so
/// the registry can hand it out as a `Box<dyn Builder>` while parents that
/// know the concrete type keep owning it by value.
macro_rules! forward_builder {
    ($($ty:ty),+ $(,)?) => {
        $(impl crate::builder::Builder for $ty {
            fn add(&mut self, tokens: &mut crate::stream::TokenStream<'_>) {
                <$ty>::add(self, tokens)
            }

            fn take(self: Box<Self>) -> String {
                <$ty>::take(*self)
            }
        })+
    };
}
pub(crate) use forward_builder;
