//! CSS color recognition.
//!
//! Accepts named colors, `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`,
//! `rgb()`/`rgba()` with 0-255 integer channels and `hsl()`/`hsla()` with
//! percentage saturation and lightness. Alpha, when present, is 0-1.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap()
});

static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^rgba?\(\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)$",
    )
    .unwrap()
});

static HSL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^hsla?\(\s*(-?[0-9]*\.?[0-9]+)(?:deg)?\s*,\s*([0-9]*\.?[0-9]+)%\s*,\s*([0-9]*\.?[0-9]+)%\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)$",
    )
    .unwrap()
});

const NAMED_COLORS: &[&str] = &[
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue", "darkcyan",
    "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki", "darkmagenta",
    "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon", "darkseagreen",
    "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise", "darkviolet", "deeppink",
    "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick", "floralwhite", "forestgreen",
    "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod", "gray", "green", "greenyellow",
    "grey", "honeydew", "hotpink", "indianred", "indigo", "ivory", "khaki", "lavender",
    "lavenderblush", "lawngreen", "lemonchiffon", "lightblue", "lightcoral", "lightcyan",
    "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey", "lightpink", "lightsalmon",
    "lightseagreen", "lightskyblue", "lightslategray", "lightslategrey", "lightsteelblue",
    "lightyellow", "lime", "limegreen", "linen", "magenta", "maroon", "mediumaquamarine",
    "mediumblue", "mediumorchid", "mediumpurple", "mediumseagreen", "mediumslateblue",
    "mediumspringgreen", "mediumturquoise", "mediumvioletred", "midnightblue", "mintcream",
    "mistyrose", "moccasin", "navajowhite", "navy", "oldlace", "olive", "olivedrab", "orange",
    "orangered", "orchid", "palegoldenrod", "palegreen", "paleturquoise", "palevioletred",
    "papayawhip", "peachpuff", "peru", "pink", "plum", "powderblue", "purple", "rebeccapurple",
    "red", "rosybrown", "royalblue", "saddlebrown", "salmon", "sandybrown", "seagreen",
    "seashell", "sienna", "silver", "skyblue", "slateblue", "slategray", "slategrey", "snow",
    "springgreen", "steelblue", "tan", "teal", "thistle", "tomato", "turquoise", "violet",
    "wheat", "white", "whitesmoke", "yellow", "yellowgreen", "transparent", "currentcolor",
];

static NAMED_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| NAMED_COLORS.iter().copied().collect());

/// Whether `s` is a color this crate accepts.
pub fn is_color(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() {
        return false;
    }
    if s.starts_with('#') {
        return HEX_RE.is_match(s);
    }
    if let Some(caps) = RGB_RE.captures(s) {
        let channels_ok = (1..=3).all(|i| caps[i].parse::<u16>().is_ok_and(|c| c <= 255));
        return channels_ok && alpha_ok(caps.get(4).map(|m| m.as_str()));
    }
    if let Some(caps) = HSL_RE.captures(s) {
        let percent_ok = (2..=3).all(|i| caps[i].parse::<f64>().is_ok_and(|p| p <= 100.0));
        return percent_ok && alpha_ok(caps.get(4).map(|m| m.as_str()));
    }
    NAMED_SET.contains(s.to_ascii_lowercase().as_str())
}

fn alpha_ok(alpha: Option<&str>) -> bool {
    match alpha {
        None => true,
        Some(a) => a.parse::<f64>().is_ok_and(|a| (0.0..=1.0).contains(&a)),
    }
}
