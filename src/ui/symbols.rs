//! UI symbols (feed glyphs, status dot)
//!
//! ## Character Set Policy
//! - Single-width Unicode only: double-width emoji shift every cell after
//!   them and misalign the feed columns
//! - ASCII fallback (theme feature) to be considered in future
//!
//! ASCII alternatives (for reference):
//! - PUSH: '^'
//! - PULL_REQUEST: 'o'
//! - MERGE: '>'
//! - OTHER: '*'
//! - DOT: '*'

use crate::model::ActionKind;

/// Feed row glyphs
pub mod markers {
    /// Push marker (↑)
    pub const PUSH: char = '↑';
    /// Pull request marker (↻)
    pub const PULL_REQUEST: char = '↻';
    /// Merge marker (⇄)
    pub const MERGE: char = '⇄';
    /// Marker for unrecognized actions (•)
    pub const OTHER: char = '•';
    /// Connection status dot (●)
    pub const DOT: char = '●';
    /// First-load failure marker (⚠)
    pub const WARNING: char = '⚠';
}

/// Map an action to its feed glyph
pub fn action_icon(action: &ActionKind) -> char {
    match action {
        ActionKind::Push => markers::PUSH,
        ActionKind::PullRequest => markers::PULL_REQUEST,
        ActionKind::Merge => markers::MERGE,
        ActionKind::Other(_) => markers::OTHER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_actions_have_distinct_icons() {
        let push = action_icon(&ActionKind::Push);
        let pr = action_icon(&ActionKind::PullRequest);
        let merge = action_icon(&ActionKind::Merge);
        assert_ne!(push, pr);
        assert_ne!(pr, merge);
        assert_ne!(push, merge);
    }

    #[test]
    fn test_unknown_actions_share_the_fallback_icon() {
        let tag = action_icon(&ActionKind::Other("TAG".to_string()));
        let release = action_icon(&ActionKind::Other("RELEASE".to_string()));
        assert_eq!(tag, markers::OTHER);
        assert_eq!(release, markers::OTHER);
    }

    #[test]
    fn test_markers_are_single_char() {
        assert!(markers::PUSH.len_utf8() <= 3); // Unicode char
        assert!(markers::MERGE.len_utf8() <= 3);
        assert!(markers::DOT.len_utf8() <= 3);
    }
}
