//! Color palettes and the sequential colormap used by the charts

use plotters::style::RGBColor;

/// Team colors in first-appearance order. The first two match the classic
/// red/blue two-team rendering; further teams cycle through the rest.
pub const TEAM_COLORS: [RGBColor; 8] = [
    RGBColor(255, 0, 0),
    RGBColor(0, 0, 255),
    RGBColor(0, 128, 0),
    RGBColor(255, 165, 0),
    RGBColor(128, 0, 128),
    RGBColor(0, 128, 128),
    RGBColor(165, 42, 42),
    RGBColor(255, 0, 255),
];

/// Soft categorical palette for pie slices.
pub const PASTEL: [RGBColor; 10] = [
    RGBColor(161, 201, 244),
    RGBColor(255, 180, 130),
    RGBColor(141, 229, 161),
    RGBColor(255, 159, 155),
    RGBColor(208, 187, 255),
    RGBColor(222, 187, 155),
    RGBColor(250, 176, 228),
    RGBColor(207, 207, 207),
    RGBColor(255, 254, 163),
    RGBColor(185, 242, 240),
];

/// Evenly spaced hues for unrelated categories.
pub const HUSL: [RGBColor; 6] = [
    RGBColor(247, 113, 137),
    RGBColor(187, 152, 50),
    RGBColor(80, 177, 49),
    RGBColor(54, 173, 164),
    RGBColor(59, 163, 236),
    RGBColor(232, 102, 244),
];

/// Yellow → orange → red stops, low to high.
const YL_OR_RD: [RGBColor; 9] = [
    RGBColor(255, 255, 204),
    RGBColor(255, 237, 160),
    RGBColor(254, 217, 118),
    RGBColor(254, 178, 76),
    RGBColor(253, 141, 60),
    RGBColor(252, 78, 42),
    RGBColor(227, 26, 28),
    RGBColor(189, 0, 38),
    RGBColor(128, 0, 38),
];

/// Color of the `index`-th team, cycling when there are more teams than colors.
pub fn team_color(index: usize) -> RGBColor {
    TEAM_COLORS[index % TEAM_COLORS.len()]
}

/// Picks the `index`-th entry of `palette`, cycling past its end.
pub fn cycle(palette: &[RGBColor], index: usize) -> RGBColor {
    palette[index % palette.len()]
}

/// Maps `t` in `[0, 1]` onto the yellow-orange-red colormap.
///
/// Values outside the range (and NaN) are clamped to the nearest end.
pub fn yl_or_rd(t: f64) -> RGBColor {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let scaled = t * (YL_OR_RD.len() - 1) as f64;
    let lower = scaled.floor() as usize;
    if lower >= YL_OR_RD.len() - 1 {
        return YL_OR_RD[YL_OR_RD.len() - 1];
    }

    let frac = scaled - lower as f64;
    let (a, b) = (YL_OR_RD[lower], YL_OR_RD[lower + 1]);
    let lerp = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * frac).round() as u8;
    RGBColor(lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn two_teams_are_red_and_blue() {
        assert_eq!(team_color(0), RGBColor(255, 0, 0));
        assert_eq!(team_color(1), RGBColor(0, 0, 255));
    }

    #[test]
    fn team_colors_cycle() {
        assert_eq!(team_color(TEAM_COLORS.len()), team_color(0));
        assert_eq!(cycle(&HUSL, 7), HUSL[1]);
    }

    #[rstest(t, expected,
        case(0.0, RGBColor(255, 255, 204)),  // Lowest stop
        case(1.0, RGBColor(128, 0, 38)),     // Highest stop
        case(-3.0, RGBColor(255, 255, 204)), // Below range, clamped
        case(7.5, RGBColor(128, 0, 38)),     // Above range, clamped
        case(f64::NAN, RGBColor(255, 255, 204))
    )]
    fn colormap_endpoints(t: f64, expected: RGBColor) {
        assert_eq!(yl_or_rd(t), expected);
    }

    #[test]
    fn colormap_interpolates_between_stops() {
        // Halfway between the first two stops
        let mid = yl_or_rd(0.5 / 8.0);
        assert_eq!(mid, RGBColor(255, 246, 182));
    }
}
