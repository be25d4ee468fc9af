/// Element id of the slide shown while the page greets the visitor.
pub const WELCOME_SLIDE: &str = "welcomeSlide";
/// Element id of the login panel revealed at the end of the sequence.
pub const LOGIN_PAGE: &str = "loginPage";

/// Class that starts the stylesheet-driven fade of the welcome slide.
pub const HIDE_CLASS: &str = "hide";
/// Class that makes the login panel visible.
pub const SHOW_CLASS: &str = "show";

/// Inline `display` value that removes the welcome slide from layout.
pub const DISPLAY_NONE: &str = "none";

/// How long the welcome slide stays on screen, in milliseconds.
pub const HOLD_MS: u64 = 3000;
/// Length of the fade animation, in milliseconds.
pub const FADE_MS: u64 = 1000;
