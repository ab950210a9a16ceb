//! URL joining for API endpoints and media assets.
//!
//! The backend returns media paths relative to its own origin. Joining is
//! done structurally here rather than by bare string concatenation so that
//! trailing/leading slash combinations cannot produce `//` or a missing
//! separator.

/// Join a base origin and a path, normalizing the slash between them.
pub fn join(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}

/// Resolve a media path against the media origin.
/// Paths that already carry a scheme are returned untouched; the backend
/// only emits absolute URLs when it means them literally.
pub fn resolve_media(origin: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        join(origin, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_inserts_missing_slash() {
        assert_eq!(join("http://host", "media/a.jpg"), "http://host/media/a.jpg");
    }

    #[test]
    fn test_join_collapses_double_slash() {
        assert_eq!(join("http://host/", "/media/a.jpg"), "http://host/media/a.jpg");
        assert_eq!(join("http://host//", "//media/a.jpg"), "http://host/media/a.jpg");
    }

    #[test]
    fn test_join_empty_path_keeps_base() {
        assert_eq!(join("http://host/api/", ""), "http://host/api");
    }

    #[test]
    fn test_resolve_media_passes_absolute_urls_through() {
        assert_eq!(
            resolve_media("http://host", "https://cdn.example/a.jpg"),
            "https://cdn.example/a.jpg"
        );
    }

    #[test]
    fn test_resolve_media_joins_relative_paths() {
        assert_eq!(
            resolve_media("http://host", "/media/wall-pic/a.jpg"),
            "http://host/media/wall-pic/a.jpg"
        );
    }
}
