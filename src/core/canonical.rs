//! Path canonicalization: collapsing `.` and `..` segments.

/// Collapse a path into its retained segments.
///
/// Empty and `.` segments are dropped. `..` removes the last retained segment
/// and is ignored once nothing is left, so a path can never climb above root.
pub fn canonical_segments(path: &str) -> Vec<&str> {
    let mut segments = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            _ => segments.push(segment),
        }
    }

    segments
}

/// Canonicalize a path, returning it with a single leading `/`.
///
/// # Examples
///
/// ```
/// use urlrec::canonicalize_path;
///
/// assert_eq!(canonicalize_path("/some/../relative/path.html"), "/relative/path.html");
/// assert_eq!(canonicalize_path("/../../etc"), "/etc");
/// assert_eq!(canonicalize_path(""), "/");
/// ```
pub fn canonicalize_path(path: &str) -> String {
    format!("/{}", canonical_segments(path).join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_segment() {
        assert_eq!(canonicalize_path("/some/../relative/path.html"), "/relative/path.html");
    }

    #[test]
    fn test_dot_and_empty_segments() {
        assert_eq!(canonicalize_path("/a/./b//c/"), "/a/b/c");
        assert_eq!(canonicalize_path("a/b"), "/a/b");
        assert_eq!(canonicalize_path("///"), "/");
    }

    #[test]
    fn test_parent_underflow_is_ignored() {
        assert_eq!(canonicalize_path("/.."), "/");
        assert_eq!(canonicalize_path("/../../x/../../y"), "/y");
        assert_eq!(canonical_segments("../../.."), Vec::<&str>::new());
    }

    #[test]
    fn test_segments() {
        assert_eq!(canonical_segments("/some/path/../file.ext"), vec!["some", "file.ext"]);
        assert_eq!(canonical_segments("/dir/sub/"), vec!["dir", "sub"]);
    }
}
