use crate::album::{Album, AlbumId};
use crate::client::AlbumApi;
use crate::error::ViewError;

/// The view's snapshot of the album collection.
///
/// Owned by the caller and handed to the controller for every operation.
/// It is only ever replaced as a whole.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    albums: Vec<Album>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    pub fn len(&self) -> usize {
        self.albums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    fn replace(&mut self, albums: Vec<Album>) {
        self.albums = albums;
    }

    fn clear(&mut self) {
        self.albums.clear();
    }
}

pub struct ViewController<A: AlbumApi> {
    api: A,
}

impl<A: AlbumApi> ViewController<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Empties the snapshot and loads it from the service.
    pub async fn initialize(&self, state: &mut ViewState) -> Result<(), ViewError> {
        state.clear();
        self.refresh(state).await
    }

    /// Replaces the snapshot with the service's collection. On error the
    /// snapshot is left as it was.
    pub async fn refresh(&self, state: &mut ViewState) -> Result<(), ViewError> {
        let albums = self.api.list_albums().await?;
        log::debug!("snapshot refreshed with {} albums", albums.len());
        state.replace(albums);
        Ok(())
    }

    /// Deletes one album, then refreshes. Whatever the service answers to
    /// the delete counts as done; only a transport failure stops the
    /// refresh.
    pub async fn remove(&self, state: &mut ViewState, id: AlbumId) -> Result<(), ViewError> {
        self.api.delete_album(id).await?;
        log::info!("🗑️ album #{} deleted", id);
        self.refresh(state).await
    }

    pub fn edit(&self, id: AlbumId) {
        log::info!("✏️ edit requested for album #{}", id);
    }

    pub fn add(&self) {
        log::info!("➕ add album requested");
    }
}
