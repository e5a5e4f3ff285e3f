//! Opacity, shadow, filter, transition and transform utilities.

use super::family_table;
use crate::parser::lexer::{Grammar, Keywords, Scale, Template, Utility};
use crate::types::PropertyFamily;

const BLUR_KEYWORDS: Keywords = &[
    ("", "blur(8px)"),
    ("none", "none"),
    ("xs", "blur(var(--blur-xs))"),
    ("sm", "blur(var(--blur-sm))"),
    ("md", "blur(var(--blur-md))"),
    ("lg", "blur(var(--blur-lg))"),
    ("xl", "blur(var(--blur-xl))"),
    ("2xl", "blur(var(--blur-2xl))"),
    ("3xl", "blur(var(--blur-3xl))"),
];

static UTILITIES: &[Utility] = &[
    Utility::new("opacity", "opacity")
        .scale(Scale::Percent)
        .grammar(Grammar::Percent),
    Utility::new("shadow", "box-shadow")
        .keywords(&[
            ("", "var(--shadow-sm)"),
            ("none", "0 0 #0000"),
            ("2xs", "var(--shadow-2xs)"),
            ("xs", "var(--shadow-xs)"),
            ("sm", "var(--shadow-sm)"),
            ("md", "var(--shadow-md)"),
            ("lg", "var(--shadow-lg)"),
            ("xl", "var(--shadow-xl)"),
            ("2xl", "var(--shadow-2xl)"),
        ])
        .grammar(Grammar::Any),
    Utility::new("blur", "filter")
        .keywords(BLUR_KEYWORDS)
        .grammar(Grammar::Length)
        .template(Template::All("blur({})")),
    Utility::new("backdrop-blur", "backdrop-filter")
        .keywords(BLUR_KEYWORDS)
        .grammar(Grammar::Length)
        .template(Template::All("blur({})")),
    Utility::new("transition", "transition-property")
        .keywords(&[
            (
                "",
                "color, background-color, border-color, text-decoration-color, fill, stroke, \
                 opacity, box-shadow, transform, translate, scale, rotate, filter",
            ),
            ("all", "all"),
            ("colors", "color, background-color, border-color, text-decoration-color, fill, stroke"),
            ("opacity", "opacity"),
            ("shadow", "box-shadow"),
            ("transform", "transform, translate, scale, rotate"),
            ("none", "none"),
        ])
        .grammar(Grammar::Any),
    Utility::new("duration", "transition-duration")
        .keywords(&[("initial", "initial")])
        .scale(Scale::Milliseconds)
        .grammar(Grammar::Time),
    Utility::new("delay", "transition-delay")
        .scale(Scale::Milliseconds)
        .grammar(Grammar::Time),
    Utility::new("ease", "transition-timing-function")
        .keywords(&[
            ("linear", "linear"),
            ("in", "var(--ease-in)"),
            ("out", "var(--ease-out)"),
            ("in-out", "var(--ease-in-out)"),
            ("initial", "initial"),
        ])
        .grammar(Grammar::Any),
    Utility::new("animate", "animation")
        .keywords(&[
            ("none", "none"),
            ("spin", "var(--animate-spin)"),
            ("ping", "var(--animate-ping)"),
            ("pulse", "var(--animate-pulse)"),
            ("bounce", "var(--animate-bounce)"),
        ])
        .grammar(Grammar::Any),
    Utility::new("scale", "scale")
        .keywords(&[("none", "none")])
        .scale(Scale::Integer)
        .grammar(Grammar::Percent)
        .negatable()
        .template(Template::Scale("{}%")),
    Utility::new("rotate", "rotate")
        .keywords(&[("none", "none")])
        .scale(Scale::Integer)
        .grammar(Grammar::Angle)
        .negatable()
        .template(Template::Scale("{}deg")),
    Utility::new("mix-blend", "mix-blend-mode").keywords(&[
        ("normal", "normal"),
        ("multiply", "multiply"),
        ("screen", "screen"),
        ("overlay", "overlay"),
        ("darken", "darken"),
        ("lighten", "lighten"),
        ("difference", "difference"),
        ("exclusion", "exclusion"),
        ("luminosity", "luminosity"),
    ]),
    Utility::new("cursor", "cursor")
        .keywords(&[
            ("auto", "auto"),
            ("default", "default"),
            ("pointer", "pointer"),
            ("wait", "wait"),
            ("text", "text"),
            ("move", "move"),
            ("help", "help"),
            ("not-allowed", "not-allowed"),
            ("none", "none"),
            ("grab", "grab"),
            ("grabbing", "grabbing"),
        ])
        .grammar(Grammar::Any),
    Utility::new("pointer-events", "pointer-events")
        .keywords(&[("none", "none"), ("auto", "auto")]),
    Utility::new("select", "user-select").keywords(&[
        ("none", "none"),
        ("text", "text"),
        ("all", "all"),
        ("auto", "auto"),
    ]),
];

family_table!(PropertyFamily::Effects, UTILITIES);
