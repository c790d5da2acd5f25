use std::path::{
    MAIN_SEPARATOR,
    MAIN_SEPARATOR_STR,
    Path,
    PathBuf,
};

use crate::{
    Error,
    Result,
};

/// Display form of `cwd`: the home prefix collapses to `~` and every
/// directory above the last is cut to its first character, or first two
/// when it starts with a dot. The final segment is kept in full.
pub fn abbreviate(cwd: &Path, home: &Path) -> Result<String> {
    let display = match cwd.strip_prefix(home) {
        Ok(rest) if rest.as_os_str().is_empty() => PathBuf::from("~"),
        Ok(rest) => Path::new("~").join(rest),
        Err(_) => cwd.to_path_buf(),
    };
    let raw = match display.to_str() {
        Some(raw) => raw,
        None => {
            return Err(Error::NonUtf8Path {
                path: display.display().to_string(),
            });
        },
    };

    let mut segments: Vec<String> = raw.split(MAIN_SEPARATOR).map(str::to_owned).collect();
    let last = segments.len() - 1;
    for segment in &mut segments[..last] {
        if segment.is_empty() {
            continue;
        }
        let keep = if segment.starts_with('.') { 2 } else { 1 };
        *segment = segment.chars().take(keep).collect();
    }

    Ok(segments.join(MAIN_SEPARATOR_STR))
}
