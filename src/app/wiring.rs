use anyhow::{Context, Result};

use crate::client::HttpAlbumApi;
use crate::context;
use crate::view::ViewController;

pub fn build_controller(ctx: &context::Context) -> Result<ViewController<HttpAlbumApi>> {
    let api = HttpAlbumApi::new(ctx.api_url.clone()).context("failed to create HTTP client")?;
    Ok(ViewController::new(api))
}
