use anyhow::Result;
use tracing::debug;
use utoipa::OpenApi;

use crate::schemas::ApiDoc;

pub fn print_openapi() -> Result<()> {
    debug!("Rendering OpenAPI document");
    let document = ApiDoc::openapi().to_pretty_json()?;
    println!("{}", document);
    Ok(())
}
