//! # Avatar
//!
//! Inline avatar: an image marker when the reference resolves, otherwise
//! an initials badge. Used by every component that shows a person.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::core::format::initials;
use crate::core::image::{ImageSource, resolves_opt};

/// Marker drawn in place of a loaded avatar image.
pub const IMAGE_MARKER: &str = "◉";

#[derive(Clone, Copy)]
pub struct Avatar<'a> {
    pub name: &'a str,
    pub url: Option<&'a str>,
    /// How many leading characters of the name the fallback shows.
    pub initials_len: usize,
    /// Ring color around the avatar (stories use it for viewed state).
    pub ring: Option<Color>,
}

impl<'a> Avatar<'a> {
    pub fn new(name: &'a str, url: Option<&'a str>, initials_len: usize) -> Self {
        Self {
            name,
            url,
            initials_len,
            ring: None,
        }
    }

    pub fn ring(mut self, color: Color) -> Self {
        self.ring = Some(color);
        self
    }

    /// The text inside the brackets: marker or initials.
    pub fn face(&self, images: &dyn ImageSource) -> String {
        if resolves_opt(images, self.url) {
            IMAGE_MARKER.to_string()
        } else {
            initials(self.name, self.initials_len)
        }
    }

    /// `(◉)` / `(JU)` as styled spans; the brackets carry the ring color.
    pub fn spans(&self, images: &dyn ImageSource) -> Vec<Span<'static>> {
        let ring_style = match self.ring {
            Some(color) => Style::default().fg(color),
            None => Style::default(),
        };
        let face_style = if resolves_opt(images, self.url) {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        vec![
            Span::styled("(", ring_style),
            Span::styled(self.face(images), face_style),
            Span::styled(")", ring_style),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::image::{NoImages, UrlImageSource};

    #[test]
    fn resolved_avatar_shows_marker() {
        let avatar = Avatar::new("Julia Fillory", Some("https://i.pravatar.cc/40"), 2);
        assert_eq!(avatar.face(&UrlImageSource), IMAGE_MARKER);
    }

    #[test]
    fn unresolved_avatar_shows_initials() {
        let avatar = Avatar::new("Julia Fillory", Some("https://i.pravatar.cc/40"), 2);
        assert_eq!(avatar.face(&NoImages), "JU");
    }

    #[test]
    fn missing_url_shows_initials() {
        let avatar = Avatar::new("peggy", None, 1);
        assert_eq!(avatar.face(&UrlImageSource), "P");
    }

    #[test]
    fn ring_color_applies_to_brackets() {
        let spans = Avatar::new("Jane", None, 1).ring(Color::Blue).spans(&NoImages);
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0].style.fg, Some(Color::Blue));
        assert_eq!(spans[1].content, "J");
    }
}
