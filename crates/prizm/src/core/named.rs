/// The named-color vocabulary, sorted by name.
///
/// This is the fixed subset of CSS named colors the parser accepts and the
/// extractor scans for, not the full CSS keyword list. Values are the CSS
/// Color 4 sRGB definitions.
#[rustfmt::skip]
const NAMED_COLORS: [(&str, [u8; 3]); 44] = [
    ("aqua",       [0x00, 0xff, 0xff]),
    ("beige",      [0xf5, 0xf5, 0xdc]),
    ("black",      [0x00, 0x00, 0x00]),
    ("blue",       [0x00, 0x00, 0xff]),
    ("brown",      [0xa5, 0x2a, 0x2a]),
    ("coral",      [0xff, 0x7f, 0x50]),
    ("crimson",    [0xdc, 0x14, 0x3c]),
    ("cyan",       [0x00, 0xff, 0xff]),
    ("darkgray",   [0xa9, 0xa9, 0xa9]),
    ("darkgrey",   [0xa9, 0xa9, 0xa9]),
    ("fuchsia",    [0xff, 0x00, 0xff]),
    ("gainsboro",  [0xdc, 0xdc, 0xdc]),
    ("gold",       [0xff, 0xd7, 0x00]),
    ("gray",       [0x80, 0x80, 0x80]),
    ("green",      [0x00, 0x80, 0x00]),
    ("grey",       [0x80, 0x80, 0x80]),
    ("indigo",     [0x4b, 0x00, 0x82]),
    ("ivory",      [0xff, 0xff, 0xf0]),
    ("khaki",      [0xf0, 0xe6, 0x8c]),
    ("lavender",   [0xe6, 0xe6, 0xfa]),
    ("lightgray",  [0xd3, 0xd3, 0xd3]),
    ("lightgrey",  [0xd3, 0xd3, 0xd3]),
    ("lime",       [0x00, 0xff, 0x00]),
    ("magenta",    [0xff, 0x00, 0xff]),
    ("maroon",     [0x80, 0x00, 0x00]),
    ("navy",       [0x00, 0x00, 0x80]),
    ("olive",      [0x80, 0x80, 0x00]),
    ("orange",     [0xff, 0xa5, 0x00]),
    ("orchid",     [0xda, 0x70, 0xd6]),
    ("pink",       [0xff, 0xc0, 0xcb]),
    ("plum",       [0xdd, 0xa0, 0xdd]),
    ("purple",     [0x80, 0x00, 0x80]),
    ("red",        [0xff, 0x00, 0x00]),
    ("salmon",     [0xfa, 0x80, 0x72]),
    ("sienna",     [0xa0, 0x52, 0x2d]),
    ("silver",     [0xc0, 0xc0, 0xc0]),
    ("tan",        [0xd2, 0xb4, 0x8c]),
    ("teal",       [0x00, 0x80, 0x80]),
    ("turquoise",  [0x40, 0xe0, 0xd0]),
    ("violet",     [0xee, 0x82, 0xee]),
    ("wheat",      [0xf5, 0xde, 0xb3]),
    ("white",      [0xff, 0xff, 0xff]),
    ("whitesmoke", [0xf5, 0xf5, 0xf5]),
    ("yellow",     [0xff, 0xff, 0x00]),
];

/// Look up a named color, returning its 24-bit sRGB coordinates.
///
/// The name must already be lowercase; the parser lowercases its input before
/// dispatching.
pub(super) fn named_color(name: &str) -> Option<[u8; 3]> {
    NAMED_COLORS
        .binary_search_by_key(&name, |(n, _)| n)
        .ok()
        .map(|index| NAMED_COLORS[index].1)
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{named_color, NAMED_COLORS};

    #[test]
    fn test_sorted() {
        for pair in NAMED_COLORS.windows(2) {
            assert!(pair[0].0 < pair[1].0, "out of order: {}", pair[1].0);
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(named_color("red"), Some([0xff, 0x00, 0x00]));
        assert_eq!(named_color("rebeccapurple"), None);
        assert_eq!(named_color("gray"), named_color("grey"));
        // The extractor's vocabulary intentionally includes two non-colors;
        // the parser must reject them so validation can discard the matches.
        assert_eq!(named_color("peach"), None);
        assert_eq!(named_color("mint"), None);
    }
}
