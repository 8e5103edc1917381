//! Museum content: records, the merged item list, and the résumé sections
//!
//! Three heterogeneous sources feed the walls: the repository listing, an
//! optional recently-played track, and the built-in résumé sections.
//! `aggregate` merges them into the single ordered list the layout engine
//! distributes across the walls.

mod fetch;

pub use fetch::{
    begin_art_fetch, begin_content_fetch, parse_repositories, parse_track, AlbumArt, AsyncOp,
    FetchError, PendingArt, PendingContent,
};

use serde::Deserialize;

use crate::config::TRACK_INSERT_INDEX;

/// One repository from the GitHub listing endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct RepoRecord {
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    pub language: Option<String>,
    #[serde(default)]
    pub updated_at: String,
}

impl RepoRecord {
    /// Date portion of the ISO-8601 update timestamp
    pub fn updated_date(&self) -> &str {
        self.updated_at.split('T').next().unwrap_or("")
    }
}

/// The recently-played track object
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackRecord {
    pub name: String,
    pub artists: String,
    pub album: String,
    pub album_art: String,
    pub spotify_url: String,
}

/// One static résumé section
#[derive(Debug, Clone)]
pub struct InfoSection {
    pub title: String,
    pub text: String,
    pub url: String,
}

/// A single wall panel's content, one variant per source
#[derive(Debug, Clone)]
pub enum ContentItem {
    Repo(RepoRecord),
    Track(TrackRecord),
    Info(InfoSection),
}

impl ContentItem {
    /// Display title, used for logging and the pick side effect
    pub fn title(&self) -> String {
        match self {
            ContentItem::Repo(r) => r.name.clone(),
            ContentItem::Track(t) => format!("{} by {}", t.name, t.artists),
            ContentItem::Info(i) => i.title.clone(),
        }
    }

    /// URL opened when the panel is picked
    pub fn url(&self) -> &str {
        match self {
            ContentItem::Repo(r) => &r.html_url,
            ContentItem::Track(t) => &t.spotify_url,
            ContentItem::Info(i) => &i.url,
        }
    }

    pub fn is_track(&self) -> bool {
        matches!(self, ContentItem::Track(_))
    }
}

/// Merge the three content sources into the ordered panel list.
///
/// Info sections come first, then repositories, both in input order. A
/// present track is inserted near the start of the list (fixed index,
/// clamped) rather than appended, so its panel lands inside the first wall
/// instead of at a room corner. Absent inputs just shrink the list.
pub fn aggregate(
    info: Vec<InfoSection>,
    repos: Vec<RepoRecord>,
    track: Option<TrackRecord>,
) -> Vec<ContentItem> {
    let mut items: Vec<ContentItem> = info
        .into_iter()
        .map(ContentItem::Info)
        .chain(repos.into_iter().map(ContentItem::Repo))
        .collect();

    if let Some(track) = track {
        let index = TRACK_INSERT_INDEX.min(items.len());
        items.insert(index, ContentItem::Track(track));
    }

    items
}

/// Resolve the two fetch outcomes into the content list plus an optional
/// user-facing error.
///
/// The startup policy: a failed primary fetch empties the museum and
/// surfaces an inline message (no retry, no crash); an absent track just
/// means no track panel.
pub fn resolve_content(
    repos: Result<Vec<RepoRecord>, FetchError>,
    track: Option<TrackRecord>,
) -> (Vec<ContentItem>, Option<String>) {
    match repos {
        Ok(repos) => {
            println!("Loaded {} repositories", repos.len());
            (aggregate(info_sections(), repos, track), None)
        }
        Err(e) => {
            eprintln!("Repository fetch failed: {}", e);
            let message = "Could not load repositories. Check your connection and relaunch.";
            (Vec::new(), Some(message.to_string()))
        }
    }
}

/// The built-in résumé sections shown alongside the fetched content
pub fn info_sections() -> Vec<InfoSection> {
    let section = |title: &str, text: &str| InfoSection {
        title: title.to_string(),
        text: text.to_string(),
        url: "resume.pdf".to_string(),
    };

    vec![
        section(
            "Summary",
            "Software engineer, 9+ years. Systems, tooling and interactive graphics.",
        ),
        section(
            "Experience",
            "Shipped developer platforms and rendering tools across three product teams.",
        ),
        section(
            "Open Source",
            "Maintainer and contributor; most of the walls around you are the receipts.",
        ),
        section(
            "Skills",
            "Rust, TypeScript, Python. Realtime rendering, network services, build systems.",
        ),
        section(
            "Contact",
            "Walk up to any panel and click it to visit the project behind it.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str) -> RepoRecord {
        RepoRecord {
            name: name.to_string(),
            description: None,
            html_url: format!("https://example.com/{}", name),
            stargazers_count: 0,
            forks_count: 0,
            language: None,
            updated_at: String::new(),
        }
    }

    fn track() -> TrackRecord {
        TrackRecord {
            name: "Song".to_string(),
            artists: "Artist".to_string(),
            album: "Album".to_string(),
            album_art: "https://example.com/art.jpg".to_string(),
            spotify_url: "https://example.com/track".to_string(),
        }
    }

    #[test]
    fn aggregate_preserves_source_order() {
        let info = info_sections();
        let info_count = info.len();
        let items = aggregate(info, vec![repo("a"), repo("b")], None);

        assert_eq!(items.len(), info_count + 2);
        assert!(matches!(items[0], ContentItem::Info(_)));
        match &items[info_count] {
            ContentItem::Repo(r) => assert_eq!(r.name, "a"),
            other => panic!("expected repo at index {}, got {:?}", info_count, other),
        }
        match &items[info_count + 1] {
            ContentItem::Repo(r) => assert_eq!(r.name, "b"),
            other => panic!("unexpected item: {:?}", other),
        }
    }

    #[test]
    fn track_inserts_at_fixed_index() {
        // 7 items plus the track: final length 8, track at index 1
        let info = info_sections(); // 5 sections
        let items = aggregate(info, vec![repo("a"), repo("b")], Some(track()));

        assert_eq!(items.len(), 8);
        assert!(items[1].is_track());
        assert_eq!(items.iter().filter(|i| i.is_track()).count(), 1);
    }

    #[test]
    fn track_insert_clamps_on_short_lists() {
        let items = aggregate(Vec::new(), Vec::new(), Some(track()));
        assert_eq!(items.len(), 1);
        assert!(items[0].is_track());
    }

    #[test]
    fn absent_inputs_shrink_the_list() {
        assert!(aggregate(Vec::new(), Vec::new(), None).is_empty());

        let items = aggregate(Vec::new(), vec![repo("solo")], None);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].url(), "https://example.com/solo");
    }

    #[test]
    fn primary_failure_empties_the_museum() {
        let (items, error) =
            resolve_content(Err(FetchError::Http("unreachable".into())), Some(track()));
        assert!(items.is_empty());
        assert!(error.is_some());
    }

    #[test]
    fn missing_track_degrades_to_the_other_sources() {
        let (items, error) = resolve_content(Ok(vec![repo("a")]), None);
        assert!(error.is_none());
        assert_eq!(items.len(), info_sections().len() + 1);
        assert!(items.iter().all(|item| !item.is_track()));
    }

    #[test]
    fn updated_date_strips_the_time() {
        let mut r = repo("x");
        r.updated_at = "2024-01-15T08:30:00Z".to_string();
        assert_eq!(r.updated_date(), "2024-01-15");

        r.updated_at = String::new();
        assert_eq!(r.updated_date(), "");
    }
}
