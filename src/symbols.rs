//! The two process-wide symbol dictionaries.
//!
//! Commands listed here translate to a single leaf element: [`identifier`]
//! entries become `<mi>…</mi>`, [`operator`] entries become `<mo>…</mo>`.
//! Both maps are immutable and total lookups; anything absent falls through
//! to the caller's identifier fallback.

/// Commands that translate to a single `<mi>` element: the Greek alphabet
/// (with `var…` variants) and the dot family.
#[rustfmt::skip]
pub(crate) fn identifier(name: &str) -> Option<&'static str> {
    Some(match name {
        // Lowercase Greek
        "alpha" => "α",
        "beta" => "β",
        "gamma" => "γ",
        "delta" => "δ",
        "epsilon" => "ϵ",
        "varepsilon" => "ε",
        "zeta" => "ζ",
        "eta" => "η",
        "theta" => "θ",
        "vartheta" => "ϑ",
        "iota" => "ι",
        "kappa" => "κ",
        "varkappa" => "ϰ",
        "lambda" => "λ",
        "mu" => "μ",
        "nu" => "ν",
        "xi" => "ξ",
        "omicron" => "ο",
        "pi" => "π",
        "varpi" => "ϖ",
        "rho" => "ρ",
        "varrho" => "ϱ",
        "sigma" => "σ",
        "varsigma" => "ς",
        "tau" => "τ",
        "upsilon" => "υ",
        "phi" => "φ",
        "varphi" => "ϕ",
        "chi" => "χ",
        "psi" => "ψ",
        "omega" => "ω",
        // Uppercase Greek
        "Gamma" => "Γ",
        "Delta" => "Δ",
        "Theta" => "Θ",
        "Lambda" => "Λ",
        "Xi" => "Ξ",
        "Pi" => "Π",
        "Sigma" => "Σ",
        "Upsilon" => "Υ",
        "Phi" => "Φ",
        "Psi" => "Ψ",
        "Omega" => "Ω",
        // Italic uppercase variants
        "varGamma" => "𝛤",
        "varDelta" => "𝛥",
        "varTheta" => "𝛩",
        "varLambda" => "𝛬",
        "varXi" => "𝛯",
        "varPi" => "𝛱",
        "varSigma" => "𝛴",
        "varUpsilon" => "𝛶",
        "varPhi" => "𝛷",
        "varPsi" => "𝛹",
        "varOmega" => "𝛺",
        // Dots
        "dots" | "ldots" | "dotso" | "dotsc" => "…",
        "cdots" | "dotsb" => "⋯",
        "vdots" => "⋮",
        "ddots" => "⋱",
        "udots" => "⋰",
        _ => return None,
    })
}

/// Commands that translate to a single `<mo>` element.
///
/// `lt` and `gt` map to entity references; everything else is raw UTF-8.
/// Large operators (`sum`, `int`, …) are deliberately absent: they carry
/// script state and are constructed through the command registry instead.
#[rustfmt::skip]
pub(crate) fn operator(name: &str) -> Option<&'static str> {
    Some(match name {
        "pm" => "±",
        "approx" => "≈",
        "propto" => "∝",
        "ne" | "neq" => "≠",
        "le" | "leq" => "≤",
        "ge" | "geq" => "≥",
        "cdot" => "⋅",
        "times" => "×",
        "div" => "÷",
        "in" => "∈",
        "notin" => "∉",
        "subset" => "⊂",
        "subseteq" => "⊆",
        "supset" => "⊃",
        "supseteq" => "⊇",
        "nsubseteq" => "⊈",
        "nsupseteq" => "⊉",
        "cap" => "∩",
        "cup" => "∪",
        "leftarrow" => "←",
        "rightarrow" | "to" => "→",
        "uparrow" => "↑",
        "downarrow" => "↓",
        "infty" | "infinity" => "∞",
        "forall" => "∀",
        "exists" => "∃",
        "nabla" => "∇",
        "partial" => "∂",
        "perp" => "⊥",
        "parallel" => "∥",
        "nparallel" => "∦",
        "angle" => "∠",
        "measuredangle" => "∡",
        "triangle" => "△",
        "triangledown" => "▽",
        "hbar" | "hslash" => "ℏ",
        "Re" => "ℜ",
        "Im" => "ℑ",
        "wp" => "℘",
        "bullet" => "∙",
        "ast" => "∗",
        "circ" => "∘",
        "equiv" => "≡",
        "sim" => "∼",
        "simeq" => "≃",
        "cong" => "≅",
        "setminus" => "∖",
        "neg" => "¬",
        "not" => "\u{0338}",
        "lt" => "&lt;",
        "gt" => "&gt;",
        "oplus" => "⊕",
        "ominus" => "⊖",
        "otimes" => "⊗",
        "odot" => "⊙",
        "bigcap" => "⋂",
        "bigcup" => "⋃",
        "bigvee" => "⋁",
        "bigwedge" => "⋀",
        "amalg" => "⨿",
        "coprod" => "∐",
        "ngeq" => "≱",
        "nleq" => "≰",
        "nless" => "≮",
        _ => return None,
    })
}
