use reqwest::Client;

use crate::{info_time, Result, USER_AGENT};

/// Anything that can turn a url into an HTML body.
#[allow(async_fn_in_trait)]
pub trait Fetch {
    async fn fetch(&self, url: &str) -> Result<String>;
}

impl Fetch for Client {
    /// Requests a page and returns a `Result<String>` containing the HTML.
    /// Non-2xx responses are errors.
    async fn fetch(&self, url: &str) -> Result<String> {
        info_time!("Visiting page {url}");
        let res = self.get(url).send().await?.error_for_status()?;
        let html = res.text().await?;
        Ok(html)
    }
}

/// The one client shared by every entity kind.
pub fn create_client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}
