use reqwest::blocking::Client;

use super::error::{ClientError, Result};

/// Download album art. Decoding is left to the renderer.
pub fn fetch_artwork(http: &Client, url: &str) -> Result<Vec<u8>> {
    let resp = http.get(url).send()?;

    let status = resp.status();
    if !status.is_success() {
        return Err(ClientError::Status {
            status: status.as_u16(),
            message: format!("artwork fetch failed for {url}"),
        });
    }

    Ok(resp.bytes()?.to_vec())
}
