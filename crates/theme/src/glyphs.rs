/// Characters used to draw the chart background and the plotted line.
///
/// Corner names follow the direction of travel from one column to the next:
/// a falling line turns down at its top (`fall_top`) and back out at its
/// bottom (`fall_bottom`); a rising line mirrors that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub grid:        char,
    pub flat:        char,
    pub vertical:    char,
    pub fall_top:    char,
    pub fall_bottom: char,
    pub rise_top:    char,
    pub rise_bottom: char,
}

impl Glyphs {
    pub const UNICODE: Self = Self {
        grid:        '·',
        flat:        '─',
        vertical:    '│',
        fall_top:    '╮',
        fall_bottom: '╰',
        rise_top:    '╭',
        rise_bottom: '╯',
    };

    pub const ASCII: Self = Self {
        grid:        '.',
        flat:        '-',
        vertical:    '|',
        fall_top:    '+',
        fall_bottom: '+',
        rise_top:    '+',
        rise_bottom: '+',
    };
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::UNICODE
    }
}
