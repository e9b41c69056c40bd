//! Sort-order mini-language for journal entry listings.
//!
//! A raw `orderBy` query value such as `"created_at desc/title/text asc"`
//! is parsed into an ordered sequence of `(column, direction)` clauses.
//! Two layers cooperate:
//!
//! - [`entry_order_by_regex`] is the validating gate at the HTTP boundary.
//!   It only admits a closed allow-list of physical column names, at most
//!   six clauses, and explicit `asc`/`desc` direction tokens. Anything
//!   else is rejected before the string reaches the parser.
//! - [`to_order_by`] is the lenient application-level parser. It accepts
//!   arbitrary identifiers and treats unrecognized direction tokens as
//!   ascending. It never fails; safety comes from the boundary regex and
//!   from [`EntryColumn`], through which the persistence adapter maps
//!   columns, so no raw user string is ever embedded in generated SQL.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Sort direction for a single ordering clause.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ordering {
    /// Ascending order; the default when a clause omits its direction.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl Ordering {
    /// SQL keyword for this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for Ordering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Ordering {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(()),
        }
    }
}

/// One parsed `column direction` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderClause {
    /// Column identifier as supplied by the caller.
    pub column: String,
    /// Sort direction, `asc` unless the clause said `desc`.
    pub direction: Ordering,
}

/// Parse a raw ordering specification into clauses.
///
/// Lenient by design: empty or whitespace-only input yields no clauses, a
/// missing or unrecognized direction token falls back to ascending, and
/// column identifiers are taken verbatim. Callers wanting strict
/// validation run the input through [`entry_order_by_regex`] first.
///
/// # Examples
/// ```
/// use backend::domain::{Ordering, to_order_by};
///
/// let clauses = to_order_by("created_at desc/title");
/// assert_eq!(clauses.len(), 2);
/// assert_eq!(clauses[0].column, "created_at");
/// assert_eq!(clauses[0].direction, Ordering::Desc);
/// assert_eq!(clauses[1].direction, Ordering::Asc);
/// ```
pub fn to_order_by(input: &str) -> Vec<OrderClause> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    trimmed
        .split('/')
        .map(|clause| {
            let mut parts = clause.split(' ');
            let column = parts.next().unwrap_or_default().to_owned();
            let direction = parts
                .next()
                .and_then(|token| token.parse().ok())
                .unwrap_or_default();
            OrderClause { column, direction }
        })
        .collect()
}

/// Columns of the `journal_entries` table that may appear in an ordering
/// specification. The allow-list keeps the generated `ORDER BY` clause
/// injection-proof: the persistence adapter only ever orders through this
/// enum, never through a caller-supplied string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryColumn {
    Id,
    JournalId,
    Title,
    Text,
    CreatedAt,
    UpdatedAt,
}

impl EntryColumn {
    /// Physical column name in the `journal_entries` table.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::JournalId => "journal_id",
            Self::Title => "title",
            Self::Text => "text",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }
}

impl FromStr for EntryColumn {
    type Err = UnknownEntryColumn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "journal_id" => Ok(Self::JournalId),
            "title" => Ok(Self::Title),
            "text" => Ok(Self::Text),
            "created_at" => Ok(Self::CreatedAt),
            "updated_at" => Ok(Self::UpdatedAt),
            _ => Err(UnknownEntryColumn(s.to_owned())),
        }
    }
}

impl fmt::Display for EntryColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised when an identifier is not a known entry column.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown journal entry column: {0}")]
pub struct UnknownEntryColumn(pub String);

/// A fully validated ordering term: an allow-listed column plus a
/// direction. This is the only ordering shape the persistence port
/// accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntrySort {
    pub column: EntryColumn,
    pub direction: Ordering,
}

impl TryFrom<&OrderClause> for EntrySort {
    type Error = UnknownEntryColumn;

    fn try_from(clause: &OrderClause) -> Result<Self, Self::Error> {
        Ok(Self {
            column: clause.column.parse()?,
            direction: clause.direction,
        })
    }
}

/// Validating grammar for the `orderBy` parameter of entry listings.
///
/// The repetition is bounded at `{0,5}` (six clauses total, one per
/// sortable column) so a hostile caller cannot amplify the generated
/// query, and the column alternation is the closed allow-list mirrored by
/// [`EntryColumn`]. Trailing slashes and unknown direction tokens fail
/// the match.
pub const ENTRY_ORDER_BY_PATTERN: &str = r"^(id|journal_id|title|text|created_at|updated_at)(\s(asc|desc))?(\b/(id|journal_id|title|text|created_at|updated_at)(\s(asc|desc))?){0,5}$";

/// Compiled form of [`ENTRY_ORDER_BY_PATTERN`], built once.
pub fn entry_order_by_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(ENTRY_ORDER_BY_PATTERN).unwrap_or_else(|err| {
            unreachable!("entry orderBy pattern must compile: {err}");
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", 0)]
    #[case("   ", 0)]
    #[case("title", 1)]
    #[case("title asc", 1)]
    #[case("created_at desc/title/text asc", 3)]
    #[case("id/journal_id/title/text/created_at/updated_at", 6)]
    fn parser_yields_one_clause_per_segment(#[case] input: &str, #[case] expected: usize) {
        assert_eq!(to_order_by(input).len(), expected);
    }

    #[rstest]
    #[case("title", Ordering::Asc)]
    #[case("title asc", Ordering::Asc)]
    #[case("title desc", Ordering::Desc)]
    #[case("title sideways", Ordering::Asc)]
    #[case("title DESC", Ordering::Asc)]
    fn direction_defaults_to_ascending(#[case] input: &str, #[case] expected: Ordering) {
        let clauses = to_order_by(input);
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].direction, expected);
    }

    #[rstest]
    fn parser_keeps_clause_order_and_columns() {
        let clauses = to_order_by("created_at desc/title");
        assert_eq!(
            clauses,
            vec![
                OrderClause {
                    column: "created_at".to_owned(),
                    direction: Ordering::Desc,
                },
                OrderClause {
                    column: "title".to_owned(),
                    direction: Ordering::Asc,
                },
            ]
        );
    }

    #[rstest]
    fn parser_accepts_arbitrary_identifiers() {
        // Leniency is deliberate; the boundary regex is the actual gate.
        let clauses = to_order_by("not_a_column desc");
        assert_eq!(clauses[0].column, "not_a_column");
        assert_eq!(clauses[0].direction, Ordering::Desc);
    }

    #[rstest]
    fn parser_trims_surrounding_whitespace() {
        let clauses = to_order_by("  title desc  ");
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].column, "title");
        assert_eq!(clauses[0].direction, Ordering::Desc);
    }

    #[rstest]
    #[case("id")]
    #[case("title desc")]
    #[case("created_at desc/title")]
    #[case("created_at desc/title/text asc")]
    #[case("id/journal_id/title/text/created_at/updated_at")]
    #[case("updated_at asc/created_at desc")]
    fn regex_accepts_valid_specifications(#[case] input: &str) {
        assert!(entry_order_by_regex().is_match(input), "rejected: {input}");
    }

    #[rstest]
    #[case("")]
    #[case("title/")]
    #[case("/title")]
    #[case("title sideways")]
    #[case("title  desc")]
    #[case("title,created_at")]
    #[case("no_such_column")]
    #[case("id; drop table journal_entries")]
    #[case("id/id/id/id/id/id/id")]
    fn regex_rejects_invalid_specifications(#[case] input: &str) {
        assert!(!entry_order_by_regex().is_match(input), "accepted: {input}");
    }

    #[rstest]
    fn every_validated_column_maps_to_an_entry_column() {
        for column in ["id", "journal_id", "title", "text", "created_at", "updated_at"] {
            let parsed: EntryColumn = column.parse().expect("allow-listed column must parse");
            assert_eq!(parsed.as_str(), column);
        }
    }

    #[rstest]
    fn unknown_columns_fail_entry_column_parsing() {
        let err = "passwd".parse::<EntryColumn>().expect_err("must reject");
        assert_eq!(err, UnknownEntryColumn("passwd".to_owned()));
    }
}
