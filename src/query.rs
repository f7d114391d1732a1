//! Filtering, sorting and pagination over entity lists.

use serde::Deserialize;

use crate::error::ApiError;
use crate::models::Artist;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page: usize,
    pub size: usize,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            page: 1,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Page {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.page == 0 {
            return Err(ApiError::Validation("page must be at least 1".to_string()));
        }
        if self.size == 0 || self.size > MAX_PAGE_SIZE {
            return Err(ApiError::Validation(format!(
                "size must be between 1 and {MAX_PAGE_SIZE}"
            )));
        }
        Ok(())
    }
}

// 1-based page of `items`; empty when the page is past the end
pub fn paginate<T>(items: Vec<T>, page: Page) -> Vec<T> {
    let start = page.page.saturating_sub(1).saturating_mul(page.size);
    items.into_iter().skip(start).take(page.size).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtistSortKey {
    Name,
    Genre,
    Country,
}

// Not flattened: urlencoded values arrive as strings and flattened numeric
// fields reject them.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ArtistQuery {
    pub genre: Option<String>,
    pub country: Option<String>,
    pub sort_by: Option<ArtistSortKey>,
    pub page: usize,
    pub size: usize,
}

impl Default for ArtistQuery {
    fn default() -> Self {
        let page = Page::default();
        Self {
            genre: None,
            country: None,
            sort_by: None,
            page: page.page,
            size: page.size,
        }
    }
}

impl ArtistQuery {
    pub fn page(&self) -> Page {
        Page {
            page: self.page,
            size: self.size,
        }
    }

    pub fn matches(&self, artist: &Artist) -> bool {
        self.genre.as_ref().is_none_or(|g| &artist.genre == g)
            && self.country.as_ref().is_none_or(|c| &artist.country == c)
    }
}

// Stable ascending sort
pub fn sort_artists(artists: &mut [Artist], key: ArtistSortKey) {
    match key {
        ArtistSortKey::Name => artists.sort_by(|a, b| a.name.cmp(&b.name)),
        ArtistSortKey::Genre => artists.sort_by(|a, b| a.genre.cmp(&b.genre)),
        ArtistSortKey::Country => artists.sort_by(|a, b| a.country.cmp(&b.country)),
    }
}

pub fn name_contains(artist: &Artist, needle_lower: &str) -> bool {
    artist.name.to_lowercase().contains(needle_lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artist(id: u32, name: &str, genre: &str, country: &str) -> Artist {
        Artist {
            id,
            name: name.to_string(),
            genre: genre.to_string(),
            country: country.to_string(),
            image_url: None,
            schedule: Vec::new(),
            stage: None,
        }
    }

    #[test]
    fn paginate_slices_pages() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(paginate(items.clone(), Page { page: 1, size: 10 }), (1..=10).collect::<Vec<_>>());
        assert_eq!(paginate(items.clone(), Page { page: 3, size: 10 }), (21..=25).collect::<Vec<_>>());
        assert!(paginate(items, Page { page: 4, size: 10 }).is_empty());
    }

    #[test]
    fn page_validation() {
        assert!(Page::default().validate().is_ok());
        assert!(Page { page: 0, size: 10 }.validate().is_err());
        assert!(Page { page: 1, size: 0 }.validate().is_err());
        assert!(Page { page: 1, size: MAX_PAGE_SIZE + 1 }.validate().is_err());
    }

    #[test]
    fn filters_combine() {
        let query = ArtistQuery {
            genre: Some("rock".into()),
            country: Some("UK".into()),
            ..Default::default()
        };
        assert!(query.matches(&artist(1, "Muse", "rock", "UK")));
        assert!(!query.matches(&artist(2, "Foo Fighters", "rock", "US")));
        assert!(!query.matches(&artist(3, "Massive Attack", "trip-hop", "UK")));
    }

    #[test]
    fn sort_is_stable() {
        let mut artists = vec![
            artist(1, "b", "rock", "US"),
            artist(2, "a", "jazz", "US"),
            artist(3, "c", "rock", "FR"),
        ];
        sort_artists(&mut artists, ArtistSortKey::Country);
        let ids: Vec<u32> = artists.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);

        sort_artists(&mut artists, ArtistSortKey::Name);
        let ids: Vec<u32> = artists.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let a = artist(1, "The Chemical Brothers", "electronic", "UK");
        assert!(name_contains(&a, "chemical"));
        assert!(!name_contains(&a, "daft"));
    }
}
