//! Pure rendering of a [`ViewState`] snapshot.
//!
//! [`render`] builds a [`TableView`], which the `html` and `text` modules
//! turn into output. Nothing here performs I/O.

pub mod html;
pub mod text;

use crate::album::{Album, AlbumId};
use crate::view::ViewState;

pub use html::RenderOptions;

pub const HEADER: [&str; 4] = ["ID", "Title", "Artist", "Price"];

/// A control the user can trigger from the rendered view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Edit(AlbumId),
    Delete(AlbumId),
    Refresh,
    Add,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::Edit(_) => "Edit",
            Action::Delete(_) => "Delete",
            Action::Refresh => "Refresh Data",
            Action::Add => "Add Album",
        }
    }

    /// Path the browser surface binds this action to.
    pub fn path(&self) -> String {
        match self {
            Action::Edit(id) => format!("/albums/{id}/edit"),
            Action::Delete(id) => format!("/albums/{id}/delete"),
            Action::Refresh => "/refresh".to_string(),
            Action::Add => "/add".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub id: AlbumId,
    pub cells: [String; 4],
    pub actions: [Action; 2],
}

impl Row {
    fn from_album(album: &Album) -> Self {
        Self {
            id: album.id,
            cells: [
                album.id.to_string(),
                album.title.clone(),
                album.artist.clone(),
                format_price(album.price),
            ],
            actions: [Action::Edit(album.id), Action::Delete(album.id)],
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TableView {
    pub rows: Vec<Row>,
}

impl TableView {
    pub fn header(&self) -> [&'static str; 4] {
        HEADER
    }

    pub fn controls(&self) -> [Action; 2] {
        [Action::Refresh, Action::Add]
    }
}

pub fn render(state: &ViewState) -> TableView {
    TableView {
        rows: state.albums().iter().map(Row::from_album).collect(),
    }
}

/// Shortest form that reads back to the same value: `5.99`, `5`, `0.5`.
/// Magnitudes of at least 1e21 or below 1e-6 switch to exponent form with
/// an explicit sign, `1e+21` and `1.5e-7`, like browser number printing.
pub fn format_price(price: f64) -> String {
    let magnitude = price.abs();
    if price.is_finite() && price != 0.0 && !(1e-6..1e21).contains(&magnitude) {
        let exp = format!("{price:e}");
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exp,
        };
    }
    price.to_string()
}
