//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use crate::core::image::ImageSource;
use crate::core::model::{Attachment, EngagementStats, Post, Privacy, UserRef};

/// Resolves exactly the URLs it was given.
pub struct FixedImages(pub Vec<String>);

impl ImageSource for FixedImages {
    fn name(&self) -> &str {
        "fixed"
    }

    fn resolves(&self, url: &str) -> bool {
        self.0.iter().any(|u| u == url)
    }
}

/// Creates a test App that resolves no images.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Box::new(crate::core::image::NoImages))
}

/// A post with no attachment and the given stats.
pub fn text_post(id: &str, text: &str, stats: EngagementStats) -> Post {
    Post {
        id: id.to_string(),
        author: UserRef::new("Test Author", "https://example.com/a.png", "#/profile/test"),
        time: "just now".to_string(),
        privacy: Privacy::Public,
        text: text.to_string(),
        attachment: None,
        stats,
    }
}

pub fn with_attachment(mut post: Post, attachment: Attachment) -> Post {
    post.attachment = Some(attachment);
    post
}

/// Render with `draw` into a fresh `TestBackend` and return the buffer.
pub fn render_to_buffer(width: u16, height: u16, draw: impl FnOnce(&mut ratatui::Frame)) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(draw).unwrap();
    terminal.backend().buffer().clone()
}

/// All buffer symbols joined into one string (row-major, no separators).
pub fn buffer_text(buffer: &Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}

/// Buffer rows as trimmed strings.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>().trim_end().to_string())
        .collect()
}
