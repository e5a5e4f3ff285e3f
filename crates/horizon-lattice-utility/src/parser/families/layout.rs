//! Display, positioning, flexbox and grid utilities.

use super::family_table;
use crate::parser::lexer::{Grammar, Keywords, Scale, Template, Utility};
use crate::types::PropertyFamily;

const INSET_KEYWORDS: Keywords = &[("auto", "auto"), ("px", "1px"), ("full", "100%")];

const OVERFLOW_KEYWORDS: Keywords = &[
    ("auto", "auto"),
    ("hidden", "hidden"),
    ("clip", "clip"),
    ("visible", "visible"),
    ("scroll", "scroll"),
];

const fn inset(prefix: &'static str, property: &'static str) -> Utility {
    Utility::new(prefix, property)
        .keywords(INSET_KEYWORDS)
        .scale(Scale::Fraction)
        .grammar(Grammar::Length)
        .negatable()
}

static UTILITIES: &[Utility] = &[
    Utility::fixed("block", "display", &[("", "block")]),
    Utility::fixed("inline-block", "display", &[("", "inline-block")]),
    Utility::fixed("inline", "display", &[("", "inline")]),
    Utility::fixed("flex", "display", &[("", "flex")]),
    Utility::fixed("inline-flex", "display", &[("", "inline-flex")]),
    Utility::fixed("grid", "display", &[("", "grid")]),
    Utility::fixed("inline-grid", "display", &[("", "inline-grid")]),
    Utility::fixed("contents", "display", &[("", "contents")]),
    Utility::fixed("flow-root", "display", &[("", "flow-root")]),
    Utility::fixed("table", "display", &[("", "table")]),
    Utility::fixed("hidden", "display", &[("", "none")]),
    Utility::fixed("static", "position", &[("", "static")]),
    Utility::fixed("fixed", "position", &[("", "fixed")]),
    Utility::fixed("absolute", "position", &[("", "absolute")]),
    Utility::fixed("relative", "position", &[("", "relative")]),
    Utility::fixed("sticky", "position", &[("", "sticky")]),
    Utility::fixed("visible", "visibility", &[("", "visible")]),
    Utility::fixed("invisible", "visibility", &[("", "hidden")]),
    Utility::fixed("collapse", "visibility", &[("", "collapse")]),
    inset("inset", "inset"),
    inset("inset-x", "inset-inline"),
    inset("inset-y", "inset-block"),
    inset("start", "inset-inline-start"),
    inset("end", "inset-inline-end"),
    inset("top", "top"),
    inset("right", "right"),
    inset("bottom", "bottom"),
    inset("left", "left"),
    Utility::new("z", "z-index")
        .keywords(&[("auto", "auto")])
        .scale(Scale::Integer)
        .grammar(Grammar::Number)
        .negatable(),
    Utility::new("order", "order")
        .keywords(&[("first", "-9999"), ("last", "9999"), ("none", "0")])
        .scale(Scale::Integer)
        .grammar(Grammar::Number)
        .negatable(),
    Utility::new("overflow", "overflow").keywords(OVERFLOW_KEYWORDS),
    Utility::new("overflow-x", "overflow-x").keywords(OVERFLOW_KEYWORDS),
    Utility::new("overflow-y", "overflow-y").keywords(OVERFLOW_KEYWORDS),
    Utility::new("flex", "flex-direction").keywords(&[
        ("row", "row"),
        ("row-reverse", "row-reverse"),
        ("col", "column"),
        ("col-reverse", "column-reverse"),
    ]),
    Utility::new("flex", "flex-wrap").keywords(&[
        ("wrap", "wrap"),
        ("wrap-reverse", "wrap-reverse"),
        ("nowrap", "nowrap"),
    ]),
    Utility::new("flex", "flex")
        .keywords(&[("auto", "1 1 auto"), ("initial", "0 1 auto"), ("none", "none")])
        .scale(Scale::Integer)
        .grammar(Grammar::Any),
    Utility::new("grow", "flex-grow")
        .keywords(&[("", "1")])
        .scale(Scale::Integer)
        .grammar(Grammar::Number),
    Utility::new("shrink", "flex-shrink")
        .keywords(&[("", "1")])
        .scale(Scale::Integer)
        .grammar(Grammar::Number),
    Utility::new("basis", "flex-basis")
        .keywords(&[("auto", "auto"), ("full", "100%")])
        .scale(Scale::Fraction)
        .grammar(Grammar::Length),
    Utility::new("justify", "justify-content").keywords(&[
        ("start", "flex-start"),
        ("end", "flex-end"),
        ("center", "center"),
        ("between", "space-between"),
        ("around", "space-around"),
        ("evenly", "space-evenly"),
        ("stretch", "stretch"),
        ("normal", "normal"),
    ]),
    Utility::new("items", "align-items").keywords(&[
        ("start", "flex-start"),
        ("end", "flex-end"),
        ("center", "center"),
        ("baseline", "baseline"),
        ("stretch", "stretch"),
    ]),
    Utility::new("self", "align-self").keywords(&[
        ("auto", "auto"),
        ("start", "flex-start"),
        ("end", "flex-end"),
        ("center", "center"),
        ("stretch", "stretch"),
        ("baseline", "baseline"),
    ]),
    Utility::new("grid-cols", "grid-template-columns")
        .keywords(&[("none", "none"), ("subgrid", "subgrid")])
        .scale(Scale::Integer)
        .grammar(Grammar::Any)
        .template(Template::Scale("repeat({}, minmax(0, 1fr))")),
    Utility::new("grid-rows", "grid-template-rows")
        .keywords(&[("none", "none"), ("subgrid", "subgrid")])
        .scale(Scale::Integer)
        .grammar(Grammar::Any)
        .template(Template::Scale("repeat({}, minmax(0, 1fr))")),
    Utility::new("col-span", "grid-column")
        .keywords(&[("full", "1 / -1")])
        .scale(Scale::Integer)
        .template(Template::Scale("span {} / span {}")),
    Utility::new("row-span", "grid-row")
        .keywords(&[("full", "1 / -1")])
        .scale(Scale::Integer)
        .template(Template::Scale("span {} / span {}")),
    Utility::new("box", "box-sizing")
        .keywords(&[("border", "border-box"), ("content", "content-box")]),
    Utility::new("object", "object-fit").keywords(&[
        ("contain", "contain"),
        ("cover", "cover"),
        ("fill", "fill"),
        ("none", "none"),
        ("scale-down", "scale-down"),
    ]),
    Utility::new("float", "float").keywords(&[
        ("left", "left"),
        ("right", "right"),
        ("start", "inline-start"),
        ("end", "inline-end"),
        ("none", "none"),
    ]),
];

family_table!(PropertyFamily::Layout, UTILITIES);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flex_prefix_variants() {
        assert_eq!(parse("flex").unwrap().property, "display");
        assert_eq!(parse("flex-col").unwrap().css_value, "column");
        assert_eq!(parse("flex-wrap").unwrap().property, "flex-wrap");
        assert_eq!(parse("flex-1").unwrap().property, "flex");
        assert_eq!(parse("inline-flex").unwrap().css_value, "inline-flex");
    }

    #[test]
    fn grid_templates() {
        assert_eq!(
            parse("grid-cols-3").unwrap().css_value,
            "repeat(3, minmax(0, 1fr))"
        );
        assert_eq!(
            parse("grid-cols-[200px_1fr]").unwrap().css_value,
            "200px 1fr"
        );
        assert_eq!(parse("col-span-2").unwrap().css_value, "span 2 / span 2");
        assert_eq!(parse("grid").unwrap().property, "display");
    }

    #[test]
    fn negative_insets() {
        assert_eq!(
            parse("-top-1/2").unwrap().css_value,
            "calc(1/2 * -100%)"
        );
        assert_eq!(parse("-z-10").unwrap().css_value, "-10");
        assert!(parse("-flex-1").is_none());
    }

    #[test]
    fn hidden_maps_to_display_none() {
        let token = parse("hidden").unwrap();
        assert_eq!(token.to_css(), "display: none");
    }
}
