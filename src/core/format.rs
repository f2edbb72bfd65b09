//! Display formatting
//!
//! Pure helpers that turn model values into the strings the interface shows.

/// Largest count a badge shows verbatim.
pub const BADGE_MAX: u32 = 99;

/// Text for an unread badge, or `None` when no badge should render.
///
/// # Examples
/// ```
/// use plaza::core::format::badge_label;
///
/// assert_eq!(badge_label(0), None);
/// assert_eq!(badge_label(17).as_deref(), Some("17"));
/// assert_eq!(badge_label(100).as_deref(), Some("99+"));
/// ```
pub fn badge_label(count: u32) -> Option<String> {
    match count {
        0 => None,
        n if n > BADGE_MAX => Some(format!("{BADGE_MAX}+")),
        n => Some(n.to_string()),
    }
}

/// Format a count with comma thousands separators.
///
/// # Examples
/// ```
/// use plaza::core::format::format_count;
///
/// assert_eq!(format_count(0), "0");
/// assert_eq!(format_count(6195), "6,195");
/// assert_eq!(format_count(1_234_567), "1,234,567");
/// ```
pub fn format_count(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// First `len` characters of a name, upper-cased. Used for avatar fallbacks.
pub fn initials(name: &str, len: usize) -> String {
    name.chars().take(len).collect::<String>().to_uppercase()
}

/// Link target of a sidebar "Create" entry.
///
/// Only the first space is replaced.
pub fn create_href(label: &str) -> String {
    format!("#/create/{}", label.to_lowercase().replacen(' ', "-", 1))
}
