use reactive_stores::Store;
use serde::{Deserialize, Serialize};
use shared_constants::{FUZZY_MATCH_MIN_QUERY_LEN, FUZZY_MATCH_THRESHOLD};
use std::{fmt::Display, str::FromStr};
use strsim::jaro_winkler;

pub type AnecdoteId = u32;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnecdoteError {
    #[error("The content must not be empty")]
    EmptyContent,
    #[error("The author must not be empty")]
    EmptyAuthor,
    #[error("The url for more info must start with `http://` or `https://`")]
    InvalidInfoUrl,
    #[error("`{0}` is not a valid anecdote id")]
    InvalidId(String),
    #[error("No anecdote with id {0}")]
    NotFound(AnecdoteId),
    #[error("No more anecdote ids available")]
    IdsExhausted,
    #[error("Unknown sort order `{0}`")]
    UnknownSortKind(String),
    #[error("The anecdote list is no longer available")]
    StoreDisposed,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq, Store)]
pub struct Anecdote {
    pub id: AnecdoteId,
    pub content: String,
    pub author: String,
    pub info: String,
    pub votes: u32,
}

impl Anecdote {
    pub fn href(&self) -> String {
        format!("/anecdotes/{}", self.id)
    }

    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        let author = self.author.to_lowercase();
        self.content.to_lowercase().contains(&query)
            || author.contains(&query)
            || self.info.to_lowercase().contains(&query)
            || (query.chars().count() >= FUZZY_MATCH_MIN_QUERY_LEN
                && author
                    .split_whitespace()
                    .any(|word| jaro_winkler(&query, word) >= FUZZY_MATCH_THRESHOLD))
    }
}

/// Unsaved anecdote as typed into the creation form.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct NewAnecdote {
    pub content: String,
    pub author: String,
    pub info: String,
}

impl NewAnecdote {
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
            && self.author.trim().is_empty()
            && self.info.trim().is_empty()
    }

    pub fn validate(&self) -> Result<(), AnecdoteError> {
        if self.content.trim().is_empty() {
            return Err(AnecdoteError::EmptyContent);
        }
        if self.author.trim().is_empty() {
            return Err(AnecdoteError::EmptyAuthor);
        }
        let info = self.info.trim();
        if !info.is_empty() {
            let rest = info
                .strip_prefix("https://")
                .or_else(|| info.strip_prefix("http://"))
                .ok_or(AnecdoteError::InvalidInfoUrl)?;
            if rest.is_empty() {
                return Err(AnecdoteError::InvalidInfoUrl);
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKind {
    #[default]
    AddedAsc,
    AddedDesc,
    VotesDesc,
    VotesAsc,
    ContentAsc,
    AuthorAsc,
}

impl SortKind {
    pub const ALL: [SortKind; 6] = [
        SortKind::AddedAsc,
        SortKind::AddedDesc,
        SortKind::VotesDesc,
        SortKind::VotesAsc,
        SortKind::ContentAsc,
        SortKind::AuthorAsc,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortKind::AddedAsc => "Added (Oldest first)",
            SortKind::AddedDesc => "Added (Newest first)",
            SortKind::VotesDesc => "Votes (Most first)",
            SortKind::VotesAsc => "Votes (Fewest first)",
            SortKind::ContentAsc => "Content (A-Z)",
            SortKind::AuthorAsc => "Author (A-Z)",
        }
    }

    fn sort(&self, anecdotes: &mut [Anecdote]) {
        match self {
            SortKind::AddedAsc => anecdotes.sort_by_key(|a| a.id),
            SortKind::AddedDesc => anecdotes.sort_by_key(|a| std::cmp::Reverse(a.id)),
            SortKind::VotesDesc => {
                anecdotes.sort_by(|a, b| b.votes.cmp(&a.votes).then(a.id.cmp(&b.id)))
            }
            SortKind::VotesAsc => {
                anecdotes.sort_by(|a, b| a.votes.cmp(&b.votes).then(a.id.cmp(&b.id)))
            }
            SortKind::ContentAsc => anecdotes.sort_by_cached_key(|a| a.content.to_lowercase()),
            SortKind::AuthorAsc => anecdotes
                .sort_by_cached_key(|a| (a.author.to_lowercase(), a.content.to_lowercase())),
        }
    }
}

impl Display for SortKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            SortKind::AddedAsc => "AddedAsc",
            SortKind::AddedDesc => "AddedDesc",
            SortKind::VotesDesc => "VotesDesc",
            SortKind::VotesAsc => "VotesAsc",
            SortKind::ContentAsc => "ContentAsc",
            SortKind::AuthorAsc => "AuthorAsc",
        };
        write!(f, "{}", value)
    }
}

impl FromStr for SortKind {
    type Err = AnecdoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKind::ALL
            .into_iter()
            .find(|kind| kind.to_string() == s)
            .ok_or_else(|| AnecdoteError::UnknownSortKind(s.to_string()))
    }
}

/// In-memory list of anecdotes; ids are handed out here and nowhere else.
#[derive(Clone, Debug, Default, PartialEq, Eq, Store)]
pub struct Anecdotes {
    anecdotes: Vec<Anecdote>,
}

impl Anecdotes {
    pub fn seeded() -> Self {
        Self {
            anecdotes: vec![
                Anecdote {
                    id: 1,
                    content: "If it hurts, do it more often".to_string(),
                    author: "Jez Humble".to_string(),
                    info: "https://martinfowler.com/bliki/FrequencyReducesDifficulty.html"
                        .to_string(),
                    votes: 0,
                },
                Anecdote {
                    id: 2,
                    content: "Premature optimization is the root of all evil".to_string(),
                    author: "Donald Knuth".to_string(),
                    info: "http://wiki.c2.com/?PrematureOptimization".to_string(),
                    votes: 0,
                },
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.anecdotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anecdotes.is_empty()
    }

    pub fn find(&self, id: AnecdoteId) -> Option<&Anecdote> {
        self.anecdotes.iter().find(|a| a.id == id)
    }

    fn next_id(&self) -> Result<AnecdoteId, AnecdoteError> {
        match self.anecdotes.iter().map(|a| a.id).max() {
            None => Ok(1),
            Some(max) => max.checked_add(1).ok_or(AnecdoteError::IdsExhausted),
        }
    }

    pub fn add(&mut self, draft: NewAnecdote) -> Result<Anecdote, AnecdoteError> {
        draft.validate()?;
        let anecdote = Anecdote {
            id: self.next_id()?,
            content: draft.content.trim().to_string(),
            author: draft.author.trim().to_string(),
            info: draft.info.trim().to_string(),
            votes: 0,
        };
        self.anecdotes.push(anecdote.clone());
        Ok(anecdote)
    }

    pub fn vote(&mut self, id: AnecdoteId) -> Result<u32, AnecdoteError> {
        let anecdote = self
            .anecdotes
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(AnecdoteError::NotFound(id))?;
        anecdote.votes = anecdote.votes.saturating_add(1);
        Ok(anecdote.votes)
    }

    pub fn query(&self, query: &str, sort_kind: SortKind) -> Vec<Anecdote> {
        let mut matching = self
            .anecdotes
            .iter()
            .filter(|a| a.matches_query(query))
            .cloned()
            .collect::<Vec<_>>();
        sort_kind.sort(&mut matching);
        matching
    }
}

pub fn parse_anecdote_id(raw: &str) -> Result<AnecdoteId, AnecdoteError> {
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return Err(AnecdoteError::InvalidId(raw.to_string()));
    }
    raw.parse::<AnecdoteId>()
        .map_err(|_| AnecdoteError::InvalidId(raw.to_string()))
}

pub fn creation_message(anecdote: &Anecdote) -> String {
    format!("A new anecdote '{}' created!", anecdote.content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(content: &str, author: &str, info: &str) -> NewAnecdote {
        NewAnecdote {
            content: content.to_string(),
            author: author.to_string(),
            info: info.to_string(),
        }
    }

    fn sample_anecdote(id: AnecdoteId, content: &str, author: &str, votes: u32) -> Anecdote {
        Anecdote {
            id,
            content: content.to_string(),
            author: author.to_string(),
            info: String::new(),
            votes,
        }
    }

    #[test]
    fn test_seeded_contains_two_anecdotes_without_votes() {
        let anecdotes = Anecdotes::seeded();

        assert_eq!(anecdotes.len(), 2);
        assert_eq!(
            anecdotes.find(1).map(|a| a.author.as_str()),
            Some("Jez Humble")
        );
        assert_eq!(
            anecdotes.find(2).map(|a| a.author.as_str()),
            Some("Donald Knuth")
        );
        assert!(anecdotes.query("", SortKind::AddedAsc).iter().all(|a| a.votes == 0));
    }

    #[test]
    fn test_add_assigns_next_id_and_zero_votes() {
        // Arrange
        let mut anecdotes = Anecdotes::seeded();

        // Act
        let created = anecdotes
            .add(draft(
                "Adding manpower to a late software project makes it later!",
                "Fred Brooks",
                "https://en.wikipedia.org/wiki/Brooks%27s_law",
            ))
            .unwrap();

        // Assert
        assert_eq!(created.id, 3);
        assert_eq!(created.votes, 0);
        assert_eq!(anecdotes.len(), 3);
        assert_eq!(anecdotes.find(3), Some(&created));
    }

    #[test]
    fn test_add_to_empty_list_starts_at_one() {
        let mut anecdotes = Anecdotes::default();
        assert!(anecdotes.is_empty());

        let created = anecdotes.add(draft("content", "author", "")).unwrap();

        assert_eq!(created.id, 1);
    }

    #[test]
    fn test_add_keeps_ids_unique() {
        let mut anecdotes = Anecdotes::seeded();
        for i in 0..10 {
            anecdotes
                .add(draft(&format!("anecdote {i}"), "someone", ""))
                .unwrap();
        }

        let mut ids = anecdotes
            .query("", SortKind::AddedAsc)
            .into_iter()
            .map(|a| a.id)
            .collect::<Vec<_>>();
        let before = ids.len();
        ids.dedup();

        assert_eq!(before, 12);
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn test_add_trims_fields() {
        let mut anecdotes = Anecdotes::default();

        let created = anecdotes
            .add(draft("  spaced  ", " Ada ", " https://example.com "))
            .unwrap();

        assert_eq!(created.content, "spaced");
        assert_eq!(created.author, "Ada");
        assert_eq!(created.info, "https://example.com");
    }

    #[test]
    fn test_add_rejects_invalid_draft_without_changing_list() {
        let mut anecdotes = Anecdotes::seeded();

        assert_eq!(
            anecdotes.add(draft("", "author", "")),
            Err(AnecdoteError::EmptyContent)
        );
        assert_eq!(anecdotes.len(), 2);
    }

    #[test]
    fn test_add_fails_when_ids_are_exhausted() {
        let mut anecdotes = Anecdotes {
            anecdotes: vec![sample_anecdote(AnecdoteId::MAX, "last", "someone", 0)],
        };

        assert_eq!(
            anecdotes.add(draft("one more", "someone", "")),
            Err(AnecdoteError::IdsExhausted)
        );
        assert_eq!(anecdotes.len(), 1);
    }

    #[test]
    fn test_vote_increments_votes() {
        let mut anecdotes = Anecdotes::seeded();

        assert_eq!(anecdotes.vote(2), Ok(1));
        assert_eq!(anecdotes.vote(2), Ok(2));

        assert_eq!(anecdotes.find(2).map(|a| a.votes), Some(2));
        assert_eq!(anecdotes.find(1).map(|a| a.votes), Some(0));
    }

    #[test]
    fn test_vote_unknown_id() {
        let mut anecdotes = Anecdotes::seeded();

        assert_eq!(anecdotes.vote(42), Err(AnecdoteError::NotFound(42)));
    }

    #[test]
    fn test_vote_saturates() {
        let mut anecdotes = Anecdotes {
            anecdotes: vec![sample_anecdote(7, "popular", "someone", u32::MAX)],
        };

        assert_eq!(anecdotes.vote(7), Ok(u32::MAX));
    }

    #[test]
    fn test_validate() {
        assert!(draft("content", "author", "").validate().is_ok());
        assert!(draft("content", "author", "http://example.com").validate().is_ok());
        assert!(draft("content", "author", "https://example.com/x?y=1")
            .validate()
            .is_ok());

        assert_eq!(
            draft("   ", "author", "").validate(),
            Err(AnecdoteError::EmptyContent)
        );
        assert_eq!(
            draft("content", "", "").validate(),
            Err(AnecdoteError::EmptyAuthor)
        );
        assert_eq!(
            draft("content", "author", "example.com").validate(),
            Err(AnecdoteError::InvalidInfoUrl)
        );
        assert_eq!(
            draft("content", "author", "https://").validate(),
            Err(AnecdoteError::InvalidInfoUrl)
        );
        assert_eq!(
            draft("content", "author", "ftp://example.com").validate(),
            Err(AnecdoteError::InvalidInfoUrl)
        );
    }

    #[test]
    fn test_is_blank() {
        assert!(NewAnecdote::default().is_blank());
        assert!(draft(" ", "\t", "").is_blank());
        assert!(!draft("", "", "h").is_blank());
    }

    #[test]
    fn test_matches_query() {
        let anecdote = Anecdote {
            id: 2,
            content: "Premature optimization is the root of all evil".to_string(),
            author: "Donald Knuth".to_string(),
            info: "http://wiki.c2.com/?PrematureOptimization".to_string(),
            votes: 0,
        };

        // Empty query
        assert!(anecdote.matches_query(""));
        assert!(anecdote.matches_query("   "));

        // Content, case-insensitive
        assert!(anecdote.matches_query("optimization"));
        assert!(anecdote.matches_query("ROOT OF"));

        // Author
        assert!(anecdote.matches_query("knuth"));
        assert!(anecdote.matches_query("Donald"));

        // Info
        assert!(anecdote.matches_query("c2.com"));

        // Misspelled author
        assert!(anecdote.matches_query("kunth"));
        assert!(anecdote.matches_query("donlad"));

        assert!(!anecdote.matches_query("humble"));
        assert!(!anecdote.matches_query("zzz"));
    }

    #[test]
    fn test_matches_query_short_queries_are_not_fuzzy() {
        let anecdote = sample_anecdote(1, "content", "Al", 0);

        assert!(anecdote.matches_query("al"));
        assert!(!anecdote.matches_query("la"));
    }

    #[test]
    fn test_query_filters_and_sorts() {
        let anecdotes = Anecdotes {
            anecdotes: vec![
                sample_anecdote(1, "bravo", "Zed", 3),
                sample_anecdote(2, "Alpha", "Yan", 5),
                sample_anecdote(3, "charlie", "Xia", 3),
            ],
        };
        let ids = |kind: SortKind| {
            anecdotes
                .query("", kind)
                .into_iter()
                .map(|a| a.id)
                .collect::<Vec<_>>()
        };

        assert_eq!(ids(SortKind::AddedAsc), vec![1, 2, 3]);
        assert_eq!(ids(SortKind::AddedDesc), vec![3, 2, 1]);
        assert_eq!(ids(SortKind::VotesDesc), vec![2, 1, 3]);
        assert_eq!(ids(SortKind::VotesAsc), vec![1, 3, 2]);
        assert_eq!(ids(SortKind::ContentAsc), vec![2, 1, 3]);
        assert_eq!(ids(SortKind::AuthorAsc), vec![3, 2, 1]);

        let filtered = anecdotes.query("r", SortKind::AddedDesc);
        assert_eq!(
            filtered.iter().map(|a| a.id).collect::<Vec<_>>(),
            vec![3, 1]
        );
    }

    #[test]
    fn test_sort_kind_round_trips_through_select_value() {
        for kind in SortKind::ALL {
            assert_eq!(kind.to_string().parse::<SortKind>(), Ok(kind));
        }
        assert_eq!(
            shared_constants::DEFAULT_SORT.parse::<SortKind>(),
            Ok(SortKind::default())
        );
        assert_eq!(
            "Sideways".parse::<SortKind>(),
            Err(AnecdoteError::UnknownSortKind("Sideways".to_string()))
        );
    }

    #[test]
    fn test_parse_anecdote_id() {
        assert_eq!(parse_anecdote_id("1"), Ok(1));
        assert_eq!(parse_anecdote_id("0042"), Ok(42));

        for raw in ["", "abc", "-1", "+1", "1.5", " 1", "99999999999"] {
            assert_eq!(
                parse_anecdote_id(raw),
                Err(AnecdoteError::InvalidId(raw.to_string())),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_href_and_creation_message() {
        let anecdote = sample_anecdote(12, "Talk is cheap. Show me the code.", "Linus", 0);

        assert_eq!(anecdote.href(), "/anecdotes/12");
        assert_eq!(
            creation_message(&anecdote),
            "A new anecdote 'Talk is cheap. Show me the code.' created!"
        );
    }

    #[test]
    fn test_anecdote_serialized_shape() {
        let anecdote = Anecdotes::seeded().find(1).cloned().unwrap();

        let json = serde_json::to_value(&anecdote).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "content": "If it hurts, do it more often",
                "author": "Jez Humble",
                "info": "https://martinfowler.com/bliki/FrequencyReducesDifficulty.html",
                "votes": 0
            })
        );
    }
}
