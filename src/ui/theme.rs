use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub letter: Color,    // Yellow stations
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub blank_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    letter: Color::Rgb(249, 226, 175),       // Yellow for letter stations
    border_normal: Color::Rgb(108, 112, 134), // Grey border
    current_line_bg: Color::Rgb(50, 50, 70), // Slightly lighter BG for status bar
    blank_bg: Color::Rgb(40, 40, 56),        // Off-track cells
};
