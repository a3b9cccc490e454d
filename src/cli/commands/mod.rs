//! Command implementations

mod export;
mod list;

pub use export::export;
pub use list::list;

/// The project a command works on
#[derive(Debug, Clone, Copy)]
pub struct Target<'a> {
    /// Owner login
    pub login: &'a str,
    /// Project number
    pub number: u32,
}

/// Write everything to stdout at once
fn emit(text: &str) -> anyhow::Result<()> {
    use std::io::Write as _;

    use anyhow::Context as _;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes()).context("failed to write output")?;
    stdout.flush().context("failed to write output")
}
