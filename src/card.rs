//! Story card model and the positional column mapping.

use std::fmt;

use crate::loader::StoryRow;

// Column positions in the tracker export (0-indexed).
pub const TITLE_COLUMN: usize = 1;
pub const LABELS_COLUMN: usize = 2;
pub const TYPE_COLUMN: usize = 6;
pub const POINTS_COLUMN: usize = 7;
pub const OWNER_COLUMN: usize = 12;
pub const BODY_COLUMN: usize = 13;
pub const TASKS_COLUMN: usize = 20;

/// Shown when a story carries no estimate.
pub const POINTS_PLACEHOLDER: &str = "...";
/// Signature line filler when the requester column is absent.
pub const OWNER_FILLER_LEN: usize = 50;

/// Story category; drives the card background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoryType {
    Feature,
    Chore,
    Bug,
    Release,
    /// Anything else, kept verbatim (may be empty).
    Other(String),
}

impl StoryType {
    /// Exact, case-sensitive match against the tracker's type names.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "feature" => Self::Feature,
            "chore" => Self::Chore,
            "bug" => Self::Bug,
            "release" => Self::Release,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Feature => "feature",
            Self::Chore => "chore",
            Self::Bug => "bug",
            Self::Release => "release",
            Self::Other(raw) => raw,
        }
    }

    /// First letter upper-cased, the rest lower-cased: `"BUG"` → `"Bug"`.
    pub fn display_name(&self) -> String {
        let mut chars = self.as_str().chars();
        match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for StoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One printable story.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub labels: String,
    pub body: String,
    pub tasks: String,
    pub story_type: StoryType,
    pub points: String,
    pub owner: String,
}

impl Card {
    /// Projects a row onto a card. Columns past the end of the row take
    /// their defaults; present-but-empty cells stay empty.
    pub fn from_row(row: &StoryRow) -> Self {
        let field = |index: usize, default: &str| row.get(index).unwrap_or(default).to_string();

        Self {
            title: field(TITLE_COLUMN, ""),
            labels: field(LABELS_COLUMN, ""),
            body: field(BODY_COLUMN, ""),
            tasks: field(TASKS_COLUMN, ""),
            story_type: StoryType::parse(row.get(TYPE_COLUMN).unwrap_or("")),
            points: field(POINTS_COLUMN, POINTS_PLACEHOLDER),
            owner: row
                .get(OWNER_COLUMN)
                .map(str::to_string)
                .unwrap_or_else(owner_filler),
        }
    }
}

pub fn owner_filler() -> String {
    ".".repeat(OWNER_FILLER_LEN)
}

/// Maps rows to cards, preserving order.
pub fn map_cards(rows: &[StoryRow]) -> Vec<Card> {
    rows.iter().map(Card::from_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> StoryRow {
        StoryRow::new(fields.iter().map(|s| s.to_string()).collect())
    }

    fn full_row() -> StoryRow {
        let mut fields: Vec<String> = (0..21).map(|i| format!("col{i}")).collect();
        fields[TITLE_COLUMN] = "Fix login bug".into();
        fields[LABELS_COLUMN] = "auth, web".into();
        fields[TYPE_COLUMN] = "bug".into();
        fields[POINTS_COLUMN] = "3".into();
        fields[OWNER_COLUMN] = "Ada".into();
        fields[BODY_COLUMN] = "Users cannot log in with SSO.".into();
        fields[TASKS_COLUMN] = "Reproduce; patch".into();
        StoryRow::new(fields)
    }

    #[test]
    fn test_full_row_maps_every_column() {
        let card = Card::from_row(&full_row());
        assert_eq!(card.title, "Fix login bug");
        assert_eq!(card.labels, "auth, web");
        assert_eq!(card.story_type, StoryType::Bug);
        assert_eq!(card.points, "3");
        assert_eq!(card.owner, "Ada");
        assert_eq!(card.body, "Users cannot log in with SSO.");
        assert_eq!(card.tasks, "Reproduce; patch");
    }

    #[test]
    fn test_short_row_takes_defaults() {
        let card = Card::from_row(&row(&["1", "Only a title"]));
        assert_eq!(card.title, "Only a title");
        assert_eq!(card.labels, "");
        assert_eq!(card.body, "");
        assert_eq!(card.tasks, "");
        assert_eq!(card.story_type, StoryType::Other(String::new()));
        assert_eq!(card.points, "...");
        assert_eq!(card.owner, ".".repeat(50));
    }

    #[test]
    fn test_empty_row_takes_all_defaults() {
        let card = Card::from_row(&StoryRow::default());
        assert_eq!(card.title, "");
        assert_eq!(card.points, POINTS_PLACEHOLDER);
        assert_eq!(card.owner.len(), OWNER_FILLER_LEN);
    }

    #[test]
    fn test_present_empty_cells_stay_empty() {
        let fields = vec![""; 14];
        let card = Card::from_row(&row(&fields));
        assert_eq!(card.points, "");
        assert_eq!(card.owner, "");
    }

    #[test]
    fn test_map_cards_preserves_order() {
        let rows = vec![row(&["1", "A"]), row(&["2", "B"]), row(&["3", "C"])];
        let titles: Vec<String> = map_cards(&rows).into_iter().map(|c| c.title).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_story_type_parse_is_exact() {
        assert_eq!(StoryType::parse("feature"), StoryType::Feature);
        assert_eq!(StoryType::parse("chore"), StoryType::Chore);
        assert_eq!(StoryType::parse("bug"), StoryType::Bug);
        assert_eq!(StoryType::parse("release"), StoryType::Release);
        assert_eq!(StoryType::parse("Bug"), StoryType::Other("Bug".into()));
        assert_eq!(StoryType::parse("epic"), StoryType::Other("epic".into()));
    }

    #[test]
    fn test_display_name_capitalizes() {
        assert_eq!(StoryType::Feature.display_name(), "Feature");
        assert_eq!(StoryType::parse("EPIC").display_name(), "Epic");
        assert_eq!(StoryType::parse("écrit").display_name(), "Écrit");
        assert_eq!(StoryType::Other(String::new()).display_name(), "");
    }
}
