use async_trait::async_trait;
use reqwest::{header, Client};
use url::Url;

use crate::album::{decode_collection, Album, AlbumId};
use crate::error::ViewError;

/// Remote side of the view: the album service.
#[async_trait]
pub trait AlbumApi: Send + Sync {
    /// GET the whole collection.
    async fn list_albums(&self) -> Result<Vec<Album>, ViewError>;
    /// DELETE one record. The service's answer is not inspected.
    async fn delete_album(&self, id: AlbumId) -> Result<(), ViewError>;
}

#[derive(Clone, Debug)]
pub struct HttpAlbumApi {
    http: Client,
    base: Url,
}

impl HttpAlbumApi {
    pub fn new(base: Url) -> Result<Self, ViewError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        let http = Client::builder().default_headers(headers).build()?;
        Ok(Self {
            http,
            base: with_trailing_slash(base),
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// `{base}/albums/`
    pub fn collection_url(&self) -> Result<Url, ViewError> {
        Ok(self.base.join("albums/")?)
    }

    /// `{base}/album/{id}`
    pub fn record_url(&self, id: AlbumId) -> Result<Url, ViewError> {
        Ok(self.base.join(&format!("album/{id}"))?)
    }
}

#[async_trait]
impl AlbumApi for HttpAlbumApi {
    async fn list_albums(&self) -> Result<Vec<Album>, ViewError> {
        let url = self.collection_url()?;
        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        log::debug!("GET {} -> {} ({} bytes)", url, status, body.len());
        Ok(decode_collection(&body)?)
    }

    async fn delete_album(&self, id: AlbumId) -> Result<(), ViewError> {
        let url = self.record_url(id)?;
        let response = self.http.delete(url.clone()).send().await?;
        log::debug!("DELETE {} -> {}", url, response.status());
        Ok(())
    }
}

/// Joins resolve against the last path segment, so a base without a
/// trailing slash would lose it.
pub fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let mut path = url.path().to_string();
        path.push('/');
        url.set_path(&path);
    }
    url
}
