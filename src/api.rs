// API client module: contains a small blocking HTTP client that talks to
// the Dog CEO REST API. It is intentionally small and synchronous; each
// menu action performs at most two sequential requests.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

/// Breed directory as returned by the list-all endpoint: breed name
/// mapped to its sub-breed names. A BTreeMap keeps the keys in
/// lexicographic order, which is the order the lister prints them in.
/// An empty vec (or an absent key) means the breed has no sub-breeds.
pub type BreedDirectory = BTreeMap<String, Vec<String>>;

/// Default request timeout. The remote service is a public API with no
/// SLA, so every call gets a hard deadline instead of hanging forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const DEFAULT_BASE_URL: &str = "https://dog.ceo/api";

/// The three GET operations the menu needs. `ApiClient` is the real
/// implementation; tests substitute a stub so flows can run without a
/// network.
pub trait DogApi {
    /// Fetch the full breed-to-subbreed directory.
    fn all_breeds(&self) -> Result<BreedDirectory>;

    /// Fetch a random image URL for `breed`. The caller is expected to
    /// have validated the breed against the directory first.
    fn random_breed_image(&self, breed: &str) -> Result<String>;

    /// Fetch a random image URL for `sub_breed` of `breed`.
    fn random_sub_breed_image(&self, breed: &str, sub_breed: &str) -> Result<String>;
}

/// Simple API client that holds a reqwest blocking client and the base
/// URL of the Dog CEO service.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

/// Body of the list-all-breeds endpoint. Deserialization fails if
/// `message` or `status` is missing or mis-shaped, which the fetchers
/// report the same way as a transport failure.
#[derive(Deserialize, Debug)]
struct BreedListResponse {
    message: BreedDirectory,
    status: String,
}

/// Body of the two random-image endpoints; `message` is the image URL.
#[derive(Deserialize, Debug)]
struct ImageResponse {
    message: String,
    status: String,
}

impl ApiClient {
    /// Create an ApiClient configured from the environment variable
    /// `DOG_API_URL` or fallback to the public Dog CEO service.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("DOG_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        Self::new(base_url)
    }

    /// Create an ApiClient against an explicit base URL.
    pub fn new(base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient { client, base_url })
    }

    /// GET `url` and deserialize the JSON body. Transport errors, non-2xx
    /// statuses and unexpected body shapes all come back as errors.
    fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let res = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Failed to send request to {}", url))?;
        if !res.status().is_success() {
            let status = res.status();
            let txt = res.text().unwrap_or_else(|_| "".into());
            anyhow::bail!("Request failed: {} - {}", status, txt);
        }
        res.json().context("Parsing response json")
    }
}

impl DogApi for ApiClient {
    fn all_breeds(&self) -> Result<BreedDirectory> {
        let url = format!("{}/breeds/list/all", &self.base_url);
        let resp: BreedListResponse = self.get_json(&url)?;
        if resp.status != "success" {
            anyhow::bail!("Breed list request reported status {:?}", resp.status);
        }
        Ok(resp.message)
    }

    fn random_breed_image(&self, breed: &str) -> Result<String> {
        let url = format!("{}/breed/{}/images/random", &self.base_url, breed);
        let resp: ImageResponse = self.get_json(&url)?;
        if resp.status != "success" {
            anyhow::bail!("Image request reported status {:?}", resp.status);
        }
        Ok(resp.message)
    }

    fn random_sub_breed_image(&self, breed: &str, sub_breed: &str) -> Result<String> {
        let url = format!("{}/breed/{}/{}/images/random", &self.base_url, breed, sub_breed);
        let resp: ImageResponse = self.get_json(&url)?;
        if resp.status != "success" {
            anyhow::bail!("Image request reported status {:?}", resp.status);
        }
        Ok(resp.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breed_list_body_parses() {
        let body = r#"{"message":{"hound":["afghan","basset"],"pug":[]},"status":"success"}"#;
        let resp: BreedListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.status, "success");
        assert_eq!(resp.message["hound"], vec!["afghan", "basset"]);
        assert!(resp.message["pug"].is_empty());
    }

    #[test]
    fn image_body_parses() {
        let body = r#"{"message":"https://images.dog.ceo/breeds/pug/n02110958_1975.jpg","status":"success"}"#;
        let resp: ImageResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.status, "success");
        assert!(resp.message.ends_with(".jpg"));
    }

    #[test]
    fn missing_message_field_is_an_error() {
        // A well-formed HTTP body with the wrong shape must fail to
        // parse so the fetchers report it like a transport failure.
        let body = r#"{"status":"success"}"#;
        assert!(serde_json::from_str::<BreedListResponse>(body).is_err());
        assert!(serde_json::from_str::<ImageResponse>(body).is_err());
    }
}
