use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Channel {
    pub id: &'static str,
    pub display_name: &'static str,
}

/// Tracked channels in display order. Fixed for the life of the process.
const CHANNELS: &[Channel] = &[
    Channel { id: "leetcode", display_name: "LeetCode" },
    Channel { id: "gfg", display_name: "GFG" },
    Channel { id: "codingNinja", display_name: "Coding Ninja" },
    Channel { id: "codechef", display_name: "CodeChef" },
    Channel { id: "duolingo", display_name: "Duolingo" },
    Channel { id: "mimo", display_name: "Mimo" },
    Channel { id: "additionalCourse", display_name: "Additional Course" },
];

pub fn channels() -> &'static [Channel] {
    CHANNELS
}

pub fn channel_count() -> usize {
    CHANNELS.len()
}

pub fn find(id: &str) -> Option<&'static Channel> {
    CHANNELS.iter().find(|channel| channel.id == id)
}

pub fn contains(id: &str) -> bool {
    find(id).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn channel_ids_are_unique() {
        let ids: HashSet<_> = channels().iter().map(|channel| channel.id).collect();
        assert_eq!(ids.len(), channel_count());
        assert_eq!(channel_count(), 7);
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(find("gfg").map(|c| c.display_name), Some("GFG"));
        assert!(contains("additionalCourse"));
        assert!(!contains("chess"));
        assert!(!contains("LeetCode"));
    }
}
