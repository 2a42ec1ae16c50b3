use std::time::Duration;

pub const NOTIFICATION_DURATION: Duration = Duration::from_secs(5);

pub const FUZZY_MATCH_THRESHOLD: f64 = 0.85;
pub const FUZZY_MATCH_MIN_QUERY_LEN: usize = 3;

pub const DEFAULT_SORT: &str = "AddedAsc";

pub const COURSE_URL: &str = "https://fullstackopen.com/";
pub const SOURCE_URL: &str =
    "https://github.com/fullstack-hy2020/routed-anecdotes/blob/master/src/App.js";
pub const WIKIPEDIA_ANECDOTE_URL: &str = "https://en.wikipedia.org/wiki/Anecdote";
