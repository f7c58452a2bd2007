use super::{LoadError, LoadedDocument};
use std::path::{Path, PathBuf};

/// Loads a plain-text file. `~/` at the start of the path means `$HOME`.
pub fn load(path: &str) -> Result<LoadedDocument, LoadError> {
    let path = expand_home(path);

    if !path.exists() {
        return Err(LoadError::FileNotFound(path));
    }
    if !is_plain_text(&path) {
        return Err(LoadError::UnsupportedFormat(path));
    }

    let text = std::fs::read_to_string(&path).map_err(|source| LoadError::Io {
        path: path.clone(),
        source,
    })?;

    if text.trim().is_empty() {
        return Err(LoadError::EmptySource(path.display().to_string()));
    }

    let source = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(LoadedDocument { text, source })
}

pub fn is_plain_text(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
}

fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), std::env::var_os("HOME")) {
        (Some(rest), Some(home)) => PathBuf::from(home).join(rest),
        _ => PathBuf::from(path),
    }
}
