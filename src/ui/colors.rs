use ratatui::style::Color;

/// Symbol used to indicate the selected row.
pub const RIGHT_ARROW: &str = "▶ ";

/// Common colors
pub const GRAY_COLOR: Color = Color::Indexed(237);
pub const BLACK_COLOR: Color = Color::Indexed(234);
pub const WHITE_COLOR: Color = Color::White;

// Title and footer
pub const TITLE_BG: Color = GRAY_COLOR;
pub const FOOTER_BG: Color = GRAY_COLOR;
pub const KEY_HINT_FG: Color = Color::Yellow;

// Status bar
pub const STATUS_BG: Color = Color::Blue;
pub const STATUS_FG: Color = WHITE_COLOR;
pub const DEBUG_FG: Color = Color::LightYellow;

// Command input
pub const INPUT_FOCUS_BORDER: Color = Color::Cyan;
pub const INPUT_BLUR_BORDER: Color = Color::DarkGray;
pub const INPUT_BUSY_FG: Color = Color::DarkGray;
pub const RECALL_FG: Color = Color::LightBlue;

// Table
pub const TABLE_HEADER_FG: Color = Color::Yellow;
pub const ZEBRA_BG: Color = BLACK_COLOR;
pub const TABLE_HIGHLIGHT_BG: Color = GRAY_COLOR;

// Settings
pub const SETTING_LABEL_FG: Color = Color::Gray;
pub const SETTING_ENABLED_FG: Color = Color::Green;
pub const SETTING_DISABLED_FG: Color = WHITE_COLOR;
pub const SETTING_EDIT_FG: Color = BLACK_COLOR;
pub const SETTING_EDIT_BG: Color = Color::Cyan;

// Notifications
pub const MESSAGE_INFO_FG: Color = WHITE_COLOR;
pub const MESSAGE_BORDER: Color = Color::Blue;
pub const MESSAGE_ERROR_FG: Color = Color::Red;
