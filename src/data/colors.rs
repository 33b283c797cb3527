//! Color names understood by xcolor
//!
//! Used to warn about color names LaTeX will likely reject. Mixed
//! expressions such as `blue!30!white` are checked component by component.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    /// Named colors from xcolor (base names and dvipsnames)
    pub static ref NAMED_COLORS: HashSet<&'static str> = {
        let mut s = HashSet::new();

        // Base colors (always available)
        for name in [
            "black", "white", "red", "green", "blue", "yellow", "cyan", "magenta",
            "gray", "darkgray", "lightgray", "brown", "lime", "olive", "orange",
            "pink", "purple", "teal", "violet",
        ] {
            s.insert(name);
        }

        // dvipsnames (68 colors)
        for name in [
            "Apricot", "Aquamarine", "Bittersweet", "Black", "Blue", "BlueGreen",
            "BlueViolet", "BrickRed", "Brown", "BurntOrange", "CadetBlue",
            "CarnationPink", "Cerulean", "CornflowerBlue", "Cyan", "Dandelion",
            "DarkOrchid", "Emerald", "ForestGreen", "Fuchsia", "Goldenrod", "Gray",
            "Green", "GreenYellow", "JungleGreen", "Lavender", "LimeGreen", "Magenta",
            "Mahogany", "Maroon", "Melon", "MidnightBlue", "Mulberry", "NavyBlue",
            "OliveGreen", "Orange", "OrangeRed", "Orchid", "Peach", "Periwinkle",
            "PineGreen", "Plum", "ProcessBlue", "Purple", "RawSienna", "Red",
            "RedOrange", "RedViolet", "Rhodamine", "RoyalBlue", "RoyalPurple",
            "RubineRed", "Salmon", "SeaGreen", "Sepia", "SkyBlue", "SpringGreen",
            "Tan", "TealBlue", "Thistle", "Turquoise", "Violet", "VioletRed", "White",
            "WildStrawberry", "Yellow", "YellowGreen", "YellowOrange",
        ] {
            s.insert(name);
        }

        s
    };

    /// xcolor mix expression: `name`, `name!pct`, `name!pct!name`, ...
    static ref COLOR_EXPRESSION: Regex =
        Regex::new(r"^-?[A-Za-z][A-Za-z0-9]*(![0-9]{1,3}(![A-Za-z][A-Za-z0-9]*)?)*$").unwrap();
}

/// Whether `name` is one of the predefined xcolor names
pub fn is_known_color(name: &str) -> bool {
    NAMED_COLORS.contains(name)
}

/// Whether `expr` is a well-formed xcolor expression over known names
pub fn is_color_expression(expr: &str) -> bool {
    if !COLOR_EXPRESSION.is_match(expr) {
        return false;
    }
    expr.trim_start_matches('-')
        .split('!')
        .filter(|part| !part.chars().all(|c| c.is_ascii_digit()))
        .all(is_known_color)
}
