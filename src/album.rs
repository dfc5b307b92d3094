use serde::{Deserialize, Serialize};

pub type AlbumId = i64;

/// One record of the album service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl Album {
    pub fn new(id: AlbumId, title: &str, artist: &str, price: f64) -> Self {
        Self {
            id,
            title: title.to_string(),
            artist: artist.to_string(),
            price,
        }
    }
}

/// Decodes a collection response body.
///
/// The album service encodes an empty table as `null`, which is read as an
/// empty collection.
pub fn decode_collection(body: &[u8]) -> Result<Vec<Album>, serde_json::Error> {
    let albums: Option<Vec<Album>> = serde_json::from_slice(body)?;
    Ok(albums.unwrap_or_default())
}
