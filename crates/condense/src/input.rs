use std::path::{Path, PathBuf};

/// Where one-shot input comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Read all piped input as text
    Stdin,

    /// Read the file as UTF-8 text
    TextFile(PathBuf),

    /// Attach the file bytes as a PDF document
    Pdf(PathBuf),
}

/// Decide where input comes from. `--stdin` wins over `--file`;
/// neither returns `None`.
pub fn resolve_input(use_stdin: bool, file: Option<&Path>) -> Option<InputSource> {
    if use_stdin {
        return Some(InputSource::Stdin);
    }

    let path = file?;
    if is_pdf(path) {
        Some(InputSource::Pdf(path.to_path_buf()))
    } else {
        Some(InputSource::TextFile(path.to_path_buf()))
    }
}

/// `.pdf` extension check, case-insensitive
fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}
