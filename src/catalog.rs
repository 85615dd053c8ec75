use chrono::Local;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::{GalleryItem, NewComment, Route};
use crate::seed::seed_routes;

/// Outcome of a favorite toggle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoriteToggle {
    Added(Vec<i64>),
    Removed(Vec<i64>),
}

impl FavoriteToggle {
    /// The user's favorite ids after the toggle, in insertion order
    pub fn favorite_ids(&self) -> &[i64] {
        match self {
            FavoriteToggle::Added(ids) | FavoriteToggle::Removed(ids) => ids,
        }
    }
}

#[derive(Debug, Default)]
struct Catalog {
    routes: Vec<Route>,
    /// user id -> favorite route ids, insertion order
    favorites: HashMap<String, Vec<i64>>,
}

impl Catalog {
    fn route_mut(&mut self, id: i64) -> Option<&mut Route> {
        self.routes.iter_mut().find(|r| r.id == id)
    }

    fn contains_route(&self, id: i64) -> bool {
        self.routes.iter().any(|r| r.id == id)
    }
}

/// Shareable in-memory catalog for use across async handlers
///
/// Every operation holds the lock for its whole read-modify-write, so each
/// request observes and leaves the catalog in a consistent state. Nothing
/// is persisted: state lives as long as the process.
#[derive(Clone)]
pub struct CatalogStore {
    inner: Arc<RwLock<Catalog>>,
    gallery: Arc<Vec<GalleryItem>>,
}

impl CatalogStore {
    /// Create a store over the given routes
    ///
    /// The gallery is projected here, once. Later edits to routes do not
    /// show up in it.
    pub fn new(routes: Vec<Route>) -> Self {
        let gallery = routes.iter().map(GalleryItem::from).collect();
        Self {
            inner: Arc::new(RwLock::new(Catalog {
                routes,
                favorites: HashMap::new(),
            })),
            gallery: Arc::new(gallery),
        }
    }

    /// Create a store holding the built-in catalog
    pub fn seeded() -> Self {
        Self::new(seed_routes())
    }

    /// All routes, in catalog order
    pub async fn list_routes(&self) -> Vec<Route> {
        self.inner.read().await.routes.clone()
    }

    pub async fn route_count(&self) -> usize {
        self.inner.read().await.routes.len()
    }

    /// The gallery projection taken when the store was created
    pub fn gallery(&self) -> Vec<GalleryItem> {
        self.gallery.as_ref().clone()
    }

    /// Overwrite likes and/or append a comment
    ///
    /// `likes` replaces the counter as given, with no sign or range checks.
    /// A comment lacking a non-empty author or text is ignored. Returns the
    /// route after the update, or `None` if no route has this id.
    pub async fn update_route(
        &self,
        id: i64,
        likes: Option<i64>,
        new_comment: Option<NewComment>,
    ) -> Option<Route> {
        let mut catalog = self.inner.write().await;
        let route = catalog.route_mut(id)?;

        if let Some(likes) = likes {
            tracing::debug!("Setting likes of route {} from {} to {}", id, route.likes, likes);
            route.likes = likes;
        }

        if let Some((author, text)) = new_comment.and_then(NewComment::fields) {
            let comment_id = route.push_comment(author, text, today());
            tracing::debug!("Appended comment {} to route {}", comment_id, id);
        }

        Some(route.clone())
    }

    /// Add the route to the user's favorites, or remove it if already there
    ///
    /// Returns `None` if no route has this id. The user's entry is created
    /// on first use and kept even when it becomes empty.
    pub async fn toggle_favorite(&self, user_id: &str, route_id: i64) -> Option<FavoriteToggle> {
        let mut catalog = self.inner.write().await;
        if !catalog.contains_route(route_id) {
            return None;
        }

        let favorites = catalog.favorites.entry(user_id.to_string()).or_default();
        match favorites.iter().position(|&id| id == route_id) {
            Some(index) => {
                favorites.remove(index);
                Some(FavoriteToggle::Removed(favorites.clone()))
            }
            None => {
                favorites.push(route_id);
                Some(FavoriteToggle::Added(favorites.clone()))
            }
        }
    }

    /// Full records of the user's favorite routes, in catalog order
    pub async fn favorite_routes(&self, user_id: &str) -> Vec<Route> {
        let catalog = self.inner.read().await;
        let Some(ids) = catalog.favorites.get(user_id) else {
            return Vec::new();
        };

        catalog
            .routes
            .iter()
            .filter(|r| ids.contains(&r.id))
            .cloned()
            .collect()
    }
}

/// Server-local date as `dd/mm/yyyy`
fn today() -> String {
    Local::now().format("%d/%m/%Y").to_string()
}
