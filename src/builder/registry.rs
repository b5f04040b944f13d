//! The process-wide command registry: command name → builder factory.
//!
//! Populated once behind a [`OnceLock`] and read-only thereafter, so
//! translators on separate threads share it freely.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::builder::constructs::{
    AccentBuilder, BinomBuilder, FixedBuilder, FracBuilder, GenfracBuilder,
    HSpaceBuilder, MboxBuilder, SqrtBuilder, StackBuilder, WrapBuilder,
};
use crate::builder::scripts::{Placement, SubSupBuilder};
use crate::builder::table::ArgTableBuilder;
use crate::builder::{forward_builder, Builder};

forward_builder!(
    AccentBuilder,
    ArgTableBuilder,
    BinomBuilder,
    FixedBuilder,
    FracBuilder,
    GenfracBuilder,
    HSpaceBuilder,
    MboxBuilder,
    SqrtBuilder,
    StackBuilder,
    SubSupBuilder,
    WrapBuilder,
);

type Factory = fn() -> Box<dyn Builder>;

static REGISTRY: OnceLock<HashMap<&'static str, Factory>> = OnceLock::new();

/// Produce a fresh builder for the given command name, if the command is a
/// construct.
pub(crate) fn builder_for(name: &str) -> Option<Box<dyn Builder>> {
    registry().get(name).map(|factory| factory())
}

fn registry() -> &'static HashMap<&'static str, Factory> {
    REGISTRY.get_or_init(|| {
        let mut map: HashMap<&'static str, Factory> = HashMap::new();

        for name in ["frac", "cfrac", "dfrac", "tfrac"] {
            map.insert(name, || Box::new(FracBuilder::new()));
        }
        for name in ["binom", "tbinom"] {
            map.insert(name, || Box::new(BinomBuilder::new()));
        }
        map.insert("genfrac", || Box::new(GenfracBuilder::new()));
        map.insert("sqrt", || Box::new(SqrtBuilder::new()));

        for name in ["overset", "stackrel"] {
            map.insert(name, || Box::new(StackBuilder::over()));
        }
        map.insert("underset", || Box::new(StackBuilder::under()));

        map.insert("mathrm", || {
            Box::new(WrapBuilder::new("<mstyle mathvariant=\"normal\">", "</mstyle>"))
        });
        map.insert("displaystyle", || {
            Box::new(WrapBuilder::new("<mstyle displaystyle=\"true\">", "</mstyle>"))
        });
        map.insert("textstyle", || {
            Box::new(WrapBuilder::new("<mstyle displaystyle=\"false\">", "</mstyle>"))
        });
        map.insert("phantom", || {
            Box::new(WrapBuilder::new("<mphantom>", "</mphantom>"))
        });

        for name in ["overline", "closure", "widebar", "bar"] {
            map.insert(name, || Box::new(AccentBuilder::over("\u{00AF}")));
        }
        map.insert("dot", || Box::new(AccentBuilder::over("\u{02D9}")));
        map.insert("ddot", || Box::new(AccentBuilder::over("\u{00A8}")));
        for name in ["tilde", "widetilde"] {
            map.insert(name, || Box::new(AccentBuilder::over("\u{02DC}")));
        }
        map.insert("widehat", || Box::new(AccentBuilder::over("\u{02C6}")));
        for name in ["vec", "overrightarrow", "widevec"] {
            map.insert(name, || Box::new(AccentBuilder::over("→")));
        }
        map.insert("underline", || Box::new(AccentBuilder::under("_")));

        map.insert("hspace", || Box::new(HSpaceBuilder::new()));
        map.insert("mbox", || Box::new(MboxBuilder::new()));
        map.insert("substack", || Box::new(ArgTableBuilder::new()));

        // Fixed spacing nodes. The single-character names are the control
        // symbols `\,`, `\;`, and friends.
        map.insert("quad", || Box::new(FixedBuilder::new("<mspace width=\"1em\"/>")));
        map.insert("qquad", || Box::new(FixedBuilder::new("<mspace width=\"2em\"/>")));
        for name in ["thickspace", ";"] {
            map.insert(name, || Box::new(FixedBuilder::new("<mspace width=\"0.278em\"/>")));
        }
        for name in ["medspace", ":", ">"] {
            map.insert(name, || Box::new(FixedBuilder::new("<mspace width=\"0.222em\"/>")));
        }
        for name in ["thinspace", ","] {
            map.insert(name, || Box::new(FixedBuilder::new("<mspace width=\"0.167em\"/>")));
        }
        for name in ["negspace", "!"] {
            map.insert(name, || Box::new(FixedBuilder::new("<mspace width=\"-0.167em\"/>")));
        }
        map.insert("negmedspace", || {
            Box::new(FixedBuilder::new("<mspace width=\"-0.222em\"/>"))
        });
        map.insert("negthickspace", || {
            Box::new(FixedBuilder::new("<mspace width=\"-0.278em\"/>"))
        });
        for name in ["~", " "] {
            map.insert(name, || Box::new(FixedBuilder::new("<mspace width=\"0.333em\"/>")));
        }

        // Large operators carry script state, so they enter the network as
        // script builders around a fixed base.
        map.insert("sum", || {
            Box::new(SubSupBuilder::new("<mo>∑</mo>", Placement::Limits))
        });
        for name in ["prod", "product"] {
            map.insert(name, || {
                Box::new(SubSupBuilder::new("<mo>∏</mo>", Placement::Limits))
            });
        }
        map.insert("lim", || {
            Box::new(SubSupBuilder::new(
                "<mi mathvariant=\"normal\">lim</mi>",
                Placement::Limits,
            ))
        });
        for name in ["int", "integral"] {
            map.insert(name, || {
                Box::new(SubSupBuilder::new("<mo>∫</mo>", Placement::NoLimits))
            });
        }
        map.insert("iint", || {
            Box::new(SubSupBuilder::new("<mo>∬</mo>", Placement::NoLimits))
        });
        map.insert("iiint", || {
            Box::new(SubSupBuilder::new("<mo>∭</mo>", Placement::NoLimits))
        });
        map.insert("iiiint", || {
            Box::new(SubSupBuilder::new("<mo>⨌</mo>", Placement::NoLimits))
        });
        map.insert("oint", || {
            Box::new(SubSupBuilder::new("<mo>∮</mo>", Placement::NoLimits))
        });
        map.insert("oiint", || {
            Box::new(SubSupBuilder::new("<mo>∯</mo>", Placement::NoLimits))
        });
        map.insert("oiiint", || {
            Box::new(SubSupBuilder::new("<mo>∰</mo>", Placement::NoLimits))
        });

        map
    })
}
