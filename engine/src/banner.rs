//! Background banner asset loading.
//!
//! The banner art is embedded in the binary, but it is still prepared off
//! the frame loop and delivered over a channel so the app observes a real
//! "loading complete" signal, joined with the minimum-loader timer.

use tokio::sync::oneshot;
use tracing::debug;

/// Parsed banner art: trimmed lines plus measured dimensions.
#[derive(Debug, Clone)]
pub struct BannerArt {
    lines: Vec<String>,
    width: u16,
    height: u16,
}

impl BannerArt {
    /// Normalize raw art: strip trailing whitespace per line, drop trailing
    /// blank lines, measure the bounding box.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut lines: Vec<String> = raw
            .lines()
            .map(|line| line.trim_end().to_string())
            .collect();
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }
        let width = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0) as u16;
        let height = lines.len() as u16;
        Self {
            lines,
            width,
            height,
        }
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u16 {
        self.height
    }
}

/// Parse the banner on a blocking worker and deliver it over a channel.
///
/// If the receiver is gone by the time parsing finishes (app torn down),
/// the result is dropped silently.
pub fn spawn_banner_load(raw: &'static str) -> oneshot::Receiver<BannerArt> {
    let (tx, rx) = oneshot::channel();
    tokio::task::spawn_blocking(move || {
        let art = BannerArt::parse(raw);
        debug!(width = art.width(), height = art.height(), "banner parsed");
        let _ = tx.send(art);
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_measures_bounding_box() {
        let art = BannerArt::parse("ab\nabcd  \na\n\n\n");
        assert_eq!(art.height(), 3);
        assert_eq!(art.width(), 4);
        assert_eq!(art.lines()[1], "abcd");
    }

    #[test]
    fn parse_empty_art() {
        let art = BannerArt::parse("");
        assert_eq!(art.height(), 0);
        assert_eq!(art.width(), 0);
    }
}
