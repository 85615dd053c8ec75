use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// A hiking route in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: i64,
    pub title: String,
    pub image: String,
    pub image_thumb: String,
    pub distance: String,
    pub difficulty: String,
    pub time: String,
    pub description: String,
    pub likes: i64,
    pub comments: Vec<Comment>,
    /// Id handed to the next appended comment. Never serialized.
    #[serde(skip)]
    pub(crate) next_comment_id: i64,
}

impl Route {
    /// Append a comment and return the id it was given
    pub fn push_comment(&mut self, author: String, text: String, date: String) -> i64 {
        let id = self.next_comment_id;
        self.next_comment_id += 1;
        self.comments.push(Comment {
            id,
            author,
            text,
            date,
        });
        id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Comment {
    pub id: i64,
    pub author: String,
    pub text: String,
    /// Creation date, `dd/mm/yyyy`
    pub date: String,
}

/// Reduced view of a route used by the gallery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct GalleryItem {
    pub id: i64,
    pub image: String,
    pub title: String,
}

impl From<&Route> for GalleryItem {
    fn from(route: &Route) -> Self {
        GalleryItem {
            id: route.id,
            image: route.image_thumb.clone(),
            title: route.title.clone(),
        }
    }
}

/// Request body for PATCH /api/routes/{id}
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRouteRequest {
    pub likes: Option<i64>,
    /// Anything that is not a comment object reads as no comment
    #[serde(default, deserialize_with = "lenient")]
    pub new_comment: Option<NewComment>,
}

/// Comment payload; `name`/`description` are accepted for `author`/`text`
///
/// Fields that are not strings read as missing.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct NewComment {
    #[serde(default, alias = "name", deserialize_with = "lenient")]
    pub author: Option<String>,
    #[serde(default, alias = "description", deserialize_with = "lenient")]
    pub text: Option<String>,
}

/// Deserialize any JSON value, keeping it only if it has the expected shape
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

impl NewComment {
    /// Author and text, if both are present and non-empty
    pub fn fields(self) -> Option<(String, String)> {
        match (self.author, self.text) {
            (Some(author), Some(text)) if !author.is_empty() && !text.is_empty() => {
                Some((author, text))
            }
            _ => None,
        }
    }
}

/// Response type for successful PATCH operations
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateRouteResponse {
    pub message: String,
    pub route: Route,
}

/// Response type for the favorite toggle
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteResponse {
    pub message: String,
    pub favorite_ids: Vec<i64>,
}
