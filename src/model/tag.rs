use std::fmt::Display;

/// Category filter shown above the grid. `All` disables filtering, every other
/// variant matches the Data Dragon tag of the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagFilter {
    #[default]
    All,
    Fighter,
    Tank,
    Mage,
    Assassin,
    Support,
    Marksman,
}

impl TagFilter {
    pub const ALL: [TagFilter; 7] = [
        TagFilter::All,
        TagFilter::Fighter,
        TagFilter::Tank,
        TagFilter::Mage,
        TagFilter::Assassin,
        TagFilter::Support,
        TagFilter::Marksman,
    ];

    /// Tag string to match against, `None` for the show-all sentinel.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            TagFilter::All => None,
            TagFilter::Fighter => Some("Fighter"),
            TagFilter::Tank => Some("Tank"),
            TagFilter::Mage => Some("Mage"),
            TagFilter::Assassin => Some("Assassin"),
            TagFilter::Support => Some("Support"),
            TagFilter::Marksman => Some("Marksman"),
        }
    }

    pub fn label(&self) -> &'static str {
        self.tag().unwrap_or("All")
    }

    pub fn index(&self) -> usize {
        TagFilter::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<TagFilter> {
        TagFilter::ALL.get(index).copied()
    }

    pub fn next(&self) -> TagFilter {
        TagFilter::ALL[(self.index() + 1) % TagFilter::ALL.len()]
    }

    pub fn previous(&self) -> TagFilter {
        let len = TagFilter::ALL.len();
        TagFilter::ALL[(self.index() + len - 1) % len]
    }
}

impl Display for TagFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::TagFilter;

    #[test]
    fn cycles_in_both_directions() {
        assert_eq!(TagFilter::All.next(), TagFilter::Fighter);
        assert_eq!(TagFilter::Marksman.next(), TagFilter::All);
        assert_eq!(TagFilter::All.previous(), TagFilter::Marksman);
        assert_eq!(TagFilter::Tank.previous(), TagFilter::Fighter);
    }

    #[test]
    fn all_has_no_tag() {
        assert_eq!(TagFilter::All.tag(), None);
        assert_eq!(TagFilter::All.label(), "All");
        assert_eq!(TagFilter::Mage.tag(), Some("Mage"));
    }

    #[test]
    fn index_round_trips() {
        for filter in TagFilter::ALL {
            assert_eq!(TagFilter::from_index(filter.index()), Some(filter));
        }
        assert_eq!(TagFilter::from_index(7), None);
    }
}
