/// Elements the focus trap cycles through.
pub const FOCUSABLE_SELECTOR: &str =
    "a, button, input, textarea, select, [tabindex]:not([tabindex=\"-1\"])";

/// Where Tab should wrap to inside an open menu of `count` focusable
/// elements, given the position of the focused one. `None` leaves the
/// browser's default focus movement alone.
pub fn focus_trap_target(count: usize, focused: Option<usize>, shift: bool) -> Option<usize> {
    let last = count.checked_sub(1)?;
    match (focused, shift) {
        (Some(0), true) => Some(last),
        (Some(i), false) if i == last => Some(0),
        _ => None,
    }
}

/// Whether a navigation link points at the current page. Language roots
/// (`/az/`) only match themselves; other links match any path containing
/// them.
pub fn is_link_active(current_path: &str, href: &str) -> bool {
    let needle = href.strip_prefix('/').unwrap_or(href);
    if needle.is_empty() {
        return current_path == "/";
    }
    let is_language_root = !needle.trim_end_matches('/').contains('/');
    if is_language_root {
        return current_path.trim_end_matches('/') == href.trim_end_matches('/');
    }
    current_path.contains(needle.trim_end_matches('/'))
}

/// Whether a document click should close the open menu.
pub fn is_outside_click(in_menu: bool, in_toggle: bool) -> bool {
    !in_menu && !in_toggle
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_wraps_from_last_to_first() {
        assert_eq!(focus_trap_target(4, Some(3), false), Some(0));
        assert_eq!(focus_trap_target(4, Some(1), false), None);
    }

    #[test]
    fn shift_tab_wraps_from_first_to_last() {
        assert_eq!(focus_trap_target(4, Some(0), true), Some(3));
        assert_eq!(focus_trap_target(4, Some(2), true), None);
    }

    #[test]
    fn trap_ignores_empty_menus_and_outside_focus() {
        assert_eq!(focus_trap_target(0, None, false), None);
        assert_eq!(focus_trap_target(3, None, true), None);
        // a single element wraps onto itself
        assert_eq!(focus_trap_target(1, Some(0), false), Some(0));
    }

    #[test]
    fn active_link_matching() {
        assert!(is_link_active("/az/gallery", "/az/gallery"));
        assert!(is_link_active("/az/diseases/sut-intoleransi", "/az/diseases"));
        assert!(!is_link_active("/az/gallery", "/az/faq"));
        assert!(is_link_active("/az/", "/az/"));
        assert!(is_link_active("/az", "/az/"));
        assert!(!is_link_active("/az/gallery", "/az/"));
        assert!(is_link_active("/", "/"));
        assert!(!is_link_active("/az/", "/"));
    }

    #[test]
    fn outside_click_requires_both_misses() {
        assert!(is_outside_click(false, false));
        assert!(!is_outside_click(true, false));
        assert!(!is_outside_click(false, true));
    }
}
