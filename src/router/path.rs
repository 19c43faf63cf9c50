//! Path normalization and active-link matching
//!
//! Every path that enters the router goes through [`normalize_path`] first:
//! - empty input becomes `/`
//! - anything from the first `?` on is dropped
//! - trailing slashes are stripped (the root stays `/`)
//! - a missing leading slash is added
//!
//! Interior slashes are left alone, so `/a//b` stays `/a//b`.

/// Canonicalizes a path string. Never fails; malformed input is normalized.
pub fn normalize_path(value: &str) -> String {
    if value.is_empty() {
        return "/".to_string();
    }

    let path = match value.find('?') {
        Some(pos) => &value[..pos],
        None => value,
    };

    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }

    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// Returns true if a link to `pattern` should be highlighted at `current`.
///
/// With `exact`, only equality counts. Otherwise strict descendants also
/// count: `/toy-space` is active at `/toy-space/prompt-hub` but not at
/// `/toy-space-extra`.
pub fn is_active(pattern: &str, current: &str, exact: bool) -> bool {
    let pattern = normalize_path(pattern);
    let current = normalize_path(current);

    if current == pattern {
        return true;
    }

    if exact {
        return false;
    }

    current
        .strip_prefix(pattern.as_str())
        .is_some_and(|rest| rest.starts_with('/'))
}

/// Splits a normalized path into its segments (the root has none)
pub(crate) fn segments(path: &str) -> Vec<&str> {
    if path == "/" {
        Vec::new()
    } else {
        path.trim_start_matches('/').split('/').collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_becomes_root() {
        assert_eq!(normalize_path(""), "/");
    }

    #[test]
    fn strips_query_string() {
        assert_eq!(normalize_path("/toy-space?tag=react"), "/toy-space");
        assert_eq!(normalize_path("?only=query"), "/");
    }

    #[test]
    fn strips_trailing_slashes() {
        assert_eq!(normalize_path("/contact/"), "/contact");
        assert_eq!(normalize_path("/contact///"), "/contact");
        assert_eq!(normalize_path("///"), "/");
    }

    #[test]
    fn adds_leading_slash() {
        assert_eq!(normalize_path("contact"), "/contact");
        assert_eq!(normalize_path("toy-space/prompt-hub/"), "/toy-space/prompt-hub");
    }

    #[test]
    fn keeps_interior_slashes() {
        assert_eq!(normalize_path("/a//b"), "/a//b");
    }

    #[test]
    fn active_for_exact_match() {
        assert!(is_active("/contact", "/contact", true));
        assert!(is_active("/contact", "/contact/", true));
        assert!(!is_active("/toy-space", "/toy-space/prompt-hub", true));
    }

    #[test]
    fn active_for_descendant() {
        assert!(is_active("/toy-space", "/toy-space/rust-go-gateway", false));
        assert!(!is_active("/toy-space", "/toy-space-extra", false));
    }

    #[test]
    fn root_is_not_a_prefix_of_everything() {
        assert!(is_active("/", "/", false));
        assert!(!is_active("/", "/contact", false));
    }

    #[test]
    fn segments_of_root_and_paths() {
        assert!(segments("/").is_empty());
        assert_eq!(segments("/toy-space/prompt-hub"), vec!["toy-space", "prompt-hub"]);
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(p in ".*") {
            let once = normalize_path(&p);
            prop_assert_eq!(normalize_path(&once), once);
        }

        #[test]
        fn normalized_shape(p in "[a-z/?=&.-]{0,24}") {
            let n = normalize_path(&p);
            prop_assert!(n.starts_with('/'));
            prop_assert!(n == "/" || !n.ends_with('/'));
            prop_assert!(!n.contains('?'));
        }
    }
}
