//! Dashboard load lifecycle and the rules for turning two independently
//! fetched feeds into one list.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{
    content::{merge_feeds, Article, ContentItem, ContentKind, Photograph},
    envelope::Envelope,
};

/// Role value that unlocks the delete action in the dashboard.
pub const ADMIN_ROLE: &str = "admin";

/// Result of one fan-out: the merged items plus whatever each source
/// reported instead of data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeedOutcome {
    /// Merged rows of every source that answered.
    pub items: Vec<ContentItem>,
    /// Reason per source that did not.
    pub failures: Vec<(ContentKind, String)>,
}

impl FeedOutcome {
    /// A failed source contributes no rows; it does not fail the load.
    pub fn aggregate(
        articles: Result<Vec<Article>, String>,
        photographs: Result<Vec<Photograph>, String>,
    ) -> Self {
        let mut failures = Vec::new();
        let articles = articles.unwrap_or_else(|err| {
            failures.push((ContentKind::Article, err));
            Vec::new()
        });
        let photographs = photographs.unwrap_or_else(|err| {
            failures.push((ContentKind::Photograph, err));
            Vec::new()
        });

        Self {
            items: merge_feeds(articles, photographs),
            failures,
        }
    }

    /// Same as [`FeedOutcome::aggregate`] but starting from the raw
    /// envelopes; a `success: false` envelope counts as a failed source.
    pub fn from_envelopes(
        articles: Result<Envelope<Vec<Article>>, String>,
        photographs: Result<Envelope<Vec<Photograph>>, String>,
    ) -> Self {
        Self::aggregate(
            articles.and_then(Envelope::into_data),
            photographs.and_then(Envelope::into_data),
        )
    }

    /// True when no source answered.
    pub fn all_sources_failed(&self) -> bool {
        self.failures.len() == 2
    }
}

/// Explicit replacement for an implicit "is loading" flag.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DashboardState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A fan-out is in flight.
    Loading,
    /// Load finished with at least one source answering.
    Ready(Vec<ContentItem>),
    /// Every source failed; carries the combined reason.
    Errored(String),
}

impl DashboardState {
    /// Every load and refresh rebuilds the list from scratch.
    pub fn begin_load(&mut self) {
        *self = DashboardState::Loading;
    }

    /// Applies a completed fan-out. Ignored unless a load is in flight.
    pub fn finish_load(&mut self, outcome: FeedOutcome) {
        if !self.is_loading() {
            tracing::debug!("dropping feed outcome that arrived outside a load");
            return;
        }

        for (kind, reason) in &outcome.failures {
            tracing::warn!("{kind} feed unavailable: {reason}");
        }

        *self = if outcome.all_sources_failed() {
            let reason = outcome
                .failures
                .iter()
                .map(|(kind, reason)| format!("{kind}: {reason}"))
                .collect::<Vec<_>>()
                .join("; ");
            DashboardState::Errored(reason)
        } else {
            DashboardState::Ready(outcome.items)
        };
    }

    /// A transport failure of the fan-out itself.
    pub fn fail_load(&mut self, reason: impl Into<String>) {
        if self.is_loading() {
            *self = DashboardState::Errored(reason.into());
        }
    }

    /// Whether a load is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, DashboardState::Loading)
    }

    /// Rows to render; empty unless ready.
    pub fn items(&self) -> &[ContentItem] {
        match self {
            DashboardState::Ready(items) => items,
            _ => &[],
        }
    }

    /// Failure reason when errored.
    pub fn error(&self) -> Option<&str> {
        match self {
            DashboardState::Errored(reason) => Some(reason),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct CachedUser {
    #[serde(default)]
    title: Option<String>,
}

/// Extracts the role from the JSON user blob the site caches after login.
/// Malformed data yields no role.
pub fn role_from_cached_user(raw: &str) -> Option<String> {
    match serde_json::from_str::<CachedUser>(raw) {
        Ok(user) => user.title,
        Err(err) => {
            tracing::warn!("failed to parse cached user data: {err}");
            None
        },
    }
}

/// Display gate for destructive actions. Not an authorization check; the
/// delete endpoints decide for themselves.
pub fn can_delete(role: Option<&str>) -> bool {
    role == Some(ADMIN_ROLE)
}

/// Numeric `YYYY/MM/DD`, the layout of the site's zh-TW date format.
pub fn format_date(value: DateTime<Utc>) -> String {
    value.format("%Y/%m/%d").to_string()
}
