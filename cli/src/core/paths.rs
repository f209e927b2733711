use std::path::{Component, Path, PathBuf};

/// A path as shown in messages, without `.` components.
pub fn display_path(path: &Path) -> String {
    let trimmed: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    if trimmed.as_os_str().is_empty() {
        ".".to_string()
    } else {
        trimmed.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_path() {
        assert_eq!(display_path(Path::new("./api.yaml")), "api.yaml");
        assert_eq!(display_path(Path::new(".")), ".");
        assert_eq!(display_path(Path::new("conf/./api.yaml")), "conf/api.yaml");
        assert_eq!(display_path(Path::new("/etc/hit")), "/etc/hit");
    }
}
