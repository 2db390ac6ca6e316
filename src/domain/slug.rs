// src/domain/slug.rs
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// URL-safe identifier derived from a title. Uniqueness is enforced per
/// storage namespace (articles and categories keep separate slug spaces).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// Normalize a title into slug form: lowercase, keep letters, digits,
/// whitespace and hyphens, collapse separator runs into single hyphens and
/// trim them from the ends. Characters outside that set are dropped without
/// acting as separators, so `"Hello!World"` becomes `helloworld` while
/// `"Hello, World!"` becomes `hello-world`. Non-ASCII letters survive.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_separator = false;

    for ch in input.chars().flat_map(char::to_lowercase) {
        if ch.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch);
        } else if ch.is_whitespace() || ch == '-' {
            pending_separator = true;
        }
    }

    slug
}

/// Storage-side uniqueness probe. `excluding` carries the id of the record
/// being renamed so it does not collide with itself.
#[async_trait]
pub trait SlugExistence: Send + Sync {
    async fn slug_exists(&self, candidate: &str, excluding: Option<i64>) -> DomainResult<bool>;
}

/// Walks `base`, `base-1`, `base-2`, ... until a free candidate is found.
/// The unique index stays the final authority; callers retry once when a
/// concurrent writer wins the race for the probed candidate.
pub struct SlugAssigner {
    store: Arc<dyn SlugExistence>,
}

impl SlugAssigner {
    pub fn new(store: Arc<dyn SlugExistence>) -> Self {
        Self { store }
    }

    pub async fn assign(&self, title: &str, excluding: Option<i64>) -> DomainResult<Slug> {
        let base = slugify(title);
        if base.is_empty() {
            return Err(DomainError::Validation(
                "title contains no characters usable in a slug".into(),
            ));
        }

        let mut candidate = base.clone();
        let mut counter: u64 = 1;
        while self.store.slug_exists(&candidate, excluding).await? {
            candidate = format!("{base}-{counter}");
            counter += 1;
        }

        Slug::new(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct FixedSlugs {
        taken: Mutex<HashMap<String, i64>>,
    }

    impl FixedSlugs {
        fn new(taken: &[(&str, i64)]) -> Self {
            Self {
                taken: Mutex::new(
                    taken
                        .iter()
                        .map(|(slug, id)| ((*slug).to_string(), *id))
                        .collect(),
                ),
            }
        }
    }

    #[async_trait]
    impl SlugExistence for FixedSlugs {
        async fn slug_exists(
            &self,
            candidate: &str,
            excluding: Option<i64>,
        ) -> DomainResult<bool> {
            let taken = self.taken.lock().unwrap();
            Ok(match (taken.get(candidate), excluding) {
                (Some(owner), Some(id)) => *owner != id,
                (Some(_), None) => true,
                (None, _) => false,
            })
        }
    }

    #[test]
    fn slugify_normalizes_punctuation_and_spacing() {
        assert_eq!(
            slugify("Hello, World!  Breaking News"),
            "hello-world-breaking-news"
        );
    }

    #[test]
    fn slugify_drops_stripped_characters_without_separating() {
        assert_eq!(slugify("Hello!World"), "helloworld");
    }

    #[test]
    fn slugify_collapses_hyphen_runs_and_trims() {
        assert_eq!(slugify("--Rust -- 2026 --"), "rust-2026");
    }

    #[test]
    fn slugify_keeps_unicode_letters_and_strips_underscores() {
        assert_eq!(slugify("Übung macht_den Meister"), "übung-machtden-meister");
    }

    #[test]
    fn slugify_of_symbols_only_is_empty() {
        assert_eq!(slugify("!!! ??? ..."), "");
    }

    #[tokio::test]
    async fn assign_returns_base_when_free() {
        let assigner = SlugAssigner::new(Arc::new(FixedSlugs::new(&[])));
        let slug = assigner
            .assign("Hello, World!  Breaking News", None)
            .await
            .unwrap();
        assert_eq!(slug.as_str(), "hello-world-breaking-news");
    }

    #[tokio::test]
    async fn assign_appends_counter_for_duplicate_title() {
        let assigner =
            SlugAssigner::new(Arc::new(FixedSlugs::new(&[("hello-world-breaking-news", 7)])));
        let slug = assigner
            .assign("Hello, World!  Breaking News", None)
            .await
            .unwrap();
        assert_eq!(slug.as_str(), "hello-world-breaking-news-1");
    }

    #[tokio::test]
    async fn assign_walks_past_taken_counters() {
        let assigner = SlugAssigner::new(Arc::new(FixedSlugs::new(&[
            ("launch", 1),
            ("launch-1", 2),
            ("launch-2", 3),
        ])));
        let slug = assigner.assign("Launch", None).await.unwrap();
        assert_eq!(slug.as_str(), "launch-3");
    }

    #[tokio::test]
    async fn renaming_to_the_same_title_keeps_the_slug() {
        let assigner = SlugAssigner::new(Arc::new(FixedSlugs::new(&[("launch", 42)])));
        let slug = assigner.assign("Launch", Some(42)).await.unwrap();
        assert_eq!(slug.as_str(), "launch");
    }

    #[tokio::test]
    async fn rename_still_avoids_other_records() {
        let assigner =
            SlugAssigner::new(Arc::new(FixedSlugs::new(&[("launch", 1), ("launch-1", 42)])));
        let slug = assigner.assign("Launch", Some(42)).await.unwrap();
        assert_eq!(slug.as_str(), "launch-1");
    }

    #[tokio::test]
    async fn punctuation_only_title_is_rejected() {
        let assigner = SlugAssigner::new(Arc::new(FixedSlugs::new(&[])));
        let err = assigner.assign("!!!", None).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
