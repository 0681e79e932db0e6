//! External redirect dispatch.

use anyhow::Result;

/// Destination for the contest redirect on successful login.
///
/// The seam exists so tests can record dispatches instead of launching a
/// browser.
pub trait RedirectSink: Send {
    fn open(&mut self, url: &str) -> Result<()>;
}

/// Opens the URL in the default browser, detached from this process.
#[derive(Debug, Default)]
pub struct BrowserRedirect;

impl RedirectSink for BrowserRedirect {
    fn open(&mut self, url: &str) -> Result<()> {
        open::that_detached(url)?;
        Ok(())
    }
}
