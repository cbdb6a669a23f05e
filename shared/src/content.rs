//! Article and photograph records from the external content APIs, and
//! the merged dashboard row built from them.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Article as served by the external Article API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Opaque id assigned by the Article API.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Credited author.
    pub author: String,
    /// URL slug, shown as the row's secondary text.
    pub slug: String,
    /// `None` while the article is unpublished.
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    /// Creation time at the source.
    pub created_at: DateTime<Utc>,
    /// Last modification at the source.
    pub updated_at: DateTime<Utc>,
}

/// Photograph as served by the external Photograph API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photograph {
    /// Opaque id assigned by the Photograph API.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Credited author.
    pub author: String,
    /// Free text, shown as the row's secondary text. Missing or `null`
    /// reads as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// When the photograph was taken.
    pub photo_date: DateTime<Utc>,
    /// Creation time at the source.
    pub created_at: DateTime<Utc>,
    /// Last modification at the source.
    pub updated_at: DateTime<Utc>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Which external API an item came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Article API.
    Article,
    /// Photograph API.
    Photograph,
}

impl ContentKind {
    /// Lowercase tag, as used in row keys and edit paths.
    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::Article => "article",
            ContentKind::Photograph => "photograph",
        }
    }

    /// Collection segment of the owning API, e.g. `articles` in
    /// `/api/articles/:id`.
    pub fn api_collection(self) -> &'static str {
        match self {
            ContentKind::Article => "articles",
            ContentKind::Photograph => "photographs",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One dashboard row. Built only on the client to sort and render both
/// sources uniformly; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentItem {
    /// Row from the Article API.
    Article(Article),
    /// Row from the Photograph API.
    Photograph(Photograph),
}

impl ContentItem {
    /// Source API of the row.
    pub fn kind(&self) -> ContentKind {
        match self {
            ContentItem::Article(_) => ContentKind::Article,
            ContentItem::Photograph(_) => ContentKind::Photograph,
        }
    }

    /// Id within the source API; not unique across sources.
    pub fn id(&self) -> &str {
        match self {
            ContentItem::Article(article) => &article.id,
            ContentItem::Photograph(photo) => &photo.id,
        }
    }

    /// Row key, unique across both sources even when ids collide.
    pub fn display_key(&self) -> String {
        format!("{}-{}", self.kind(), self.id())
    }

    /// Display title.
    pub fn title(&self) -> &str {
        match self {
            ContentItem::Article(article) => &article.title,
            ContentItem::Photograph(photo) => &photo.title,
        }
    }

    /// Credited author or photographer.
    pub fn author(&self) -> &str {
        match self {
            ContentItem::Article(article) => &article.author,
            ContentItem::Photograph(photo) => &photo.author,
        }
    }

    /// Slug for articles, description for photographs.
    pub fn secondary_text(&self) -> &str {
        match self {
            ContentItem::Article(article) => &article.slug,
            ContentItem::Photograph(photo) => &photo.description,
        }
    }

    /// Publication date for articles (`None` while unpublished), shooting
    /// date for photographs.
    pub fn effective_date(&self) -> Option<DateTime<Utc>> {
        match self {
            ContentItem::Article(article) => article.published_at,
            ContentItem::Photograph(photo) => Some(photo.photo_date),
        }
    }

    /// Sort key of the merged list.
    pub fn updated_at(&self) -> DateTime<Utc> {
        match self {
            ContentItem::Article(article) => article.updated_at,
            ContentItem::Photograph(photo) => photo.updated_at,
        }
    }

    /// Client route of the kind-specific edit page.
    pub fn edit_path(&self) -> String {
        format!("/dashboard/update/{}/{}", self.kind(), self.id())
    }
}

/// Tag both sources, concatenate, and order by `updatedAt` with the most
/// recent first. The sort is stable, so equal timestamps keep articles
/// ahead of photographs and each source's own order.
pub fn merge_feeds(articles: Vec<Article>, photographs: Vec<Photograph>) -> Vec<ContentItem> {
    let mut items: Vec<ContentItem> = Vec::with_capacity(articles.len() + photographs.len());
    items.extend(articles.into_iter().map(ContentItem::Article));
    items.extend(photographs.into_iter().map(ContentItem::Photograph));
    items.sort_by(|a, b| b.updated_at().cmp(&a.updated_at()));
    items
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::{DateTime, TimeZone, Utc};

    use super::{Article, Photograph};

    pub fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, 8, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    pub fn article(id: &str, updated_day: u32) -> Article {
        Article {
            id: id.to_string(),
            title: format!("Article {id}"),
            author: "Lin".to_string(),
            slug: format!("article-{id}"),
            published_at: None,
            created_at: at(1),
            updated_at: at(updated_day),
        }
    }

    pub fn photograph(id: &str, updated_day: u32) -> Photograph {
        Photograph {
            id: id.to_string(),
            title: format!("Photo {id}"),
            author: "Chen".to_string(),
            description: format!("Old street {id}"),
            photo_date: at(2),
            created_at: at(1),
            updated_at: at(updated_day),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{
        fixtures::{article, at, photograph},
        merge_feeds, Article, ContentItem, ContentKind,
    };

    #[test]
    fn merge_orders_by_updated_at_across_sources() {
        let items = merge_feeds(vec![article("a1", 10), article("a2", 30)], vec![photograph(
            "p1", 20,
        )]);

        let keys: Vec<String> = items.iter().map(ContentItem::display_key).collect();
        assert_eq!(keys, vec!["article-a2", "photograph-p1", "article-a1"]);
    }

    #[test]
    fn merge_keeps_source_order_on_ties() {
        let items = merge_feeds(vec![article("a1", 5)], vec![photograph("p1", 5)]);
        assert_eq!(items[0].kind(), ContentKind::Article);
        assert_eq!(items[1].kind(), ContentKind::Photograph);
    }

    #[test]
    fn display_key_separates_colliding_ids() {
        let items = merge_feeds(vec![article("7", 1)], vec![photograph("7", 2)]);
        assert_ne!(items[0].display_key(), items[1].display_key());
    }

    #[test]
    fn kind_specific_fields_follow_the_variant() {
        let mut published = article("a1", 3);
        published.published_at = Some(at(4));
        let unpublished = article("a2", 3);
        let photo = photograph("p1", 3);

        let items = merge_feeds(vec![published, unpublished], vec![photo]);
        assert_eq!(items[0].secondary_text(), "article-a1");
        assert_eq!(items[0].effective_date(), Some(at(4)));
        assert_eq!(items[1].effective_date(), None);
        assert_eq!(items[2].secondary_text(), "Old street p1");
        assert_eq!(items[2].effective_date(), Some(at(2)));
        assert_eq!(items[2].edit_path(), "/dashboard/update/photograph/p1");
    }

    #[test]
    fn article_parses_api_payload_with_null_publish_date() {
        let article: Article = serde_json::from_value(json!({
            "id": "clx1",
            "title": "Temple fair",
            "author": "Lin",
            "slug": "temple-fair",
            "publishedAt": null,
            "createdAt": "2024-03-01T08:00:00.000Z",
            "updatedAt": "2024-03-02T08:00:00.000Z"
        }))
        .expect("deserialize article");
        assert_eq!(article.published_at, None);
        assert_eq!(article.updated_at, at(2));
    }

    #[test]
    fn content_item_serializes_with_type_tag() {
        let value =
            serde_json::to_value(ContentItem::Photograph(photograph("p1", 3))).expect("serialize");
        assert_eq!(value["type"], "photograph");
        assert_eq!(value["description"], "Old street p1");
    }
}
