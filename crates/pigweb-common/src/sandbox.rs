use reqwest::{Client, ClientBuilder};
use std::collections::HashSet;
use std::time::Duration;
use url::Url;
use crate::error::PigwebError;

/// An HTTP client that only allows requests to approved domains.
#[derive(Debug, Clone)]
pub struct SandboxClient {
    client: Client,
    allowlist: HashSet<String>,
}

impl SandboxClient {
    /// Creates a client allowing only the NCBI E-utilities host.
    pub fn new(timeout: Duration) -> Result<Self, PigwebError> {
        let mut allowlist = HashSet::new();
        allowlist.insert("eutils.ncbi.nlm.nih.gov".to_string());

        let client = ClientBuilder::new()
            .timeout(timeout)
            .user_agent(concat!("pigweb/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PigwebError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, allowlist })
    }

    /// Appends an exact hostname to the allowlist.
    pub fn allow_domain(&mut self, domain: &str) {
        self.allowlist.insert(domain.to_string());
    }

    /// Validates if a URL is permitted under the current sandbox policy.
    pub fn is_allowed(&self, url: &str) -> bool {
        let Ok(parsed) = Url::parse(url) else {
            return false;
        };
        let Some(host) = parsed.host_str() else {
            return false;
        };
        self.allowlist
            .iter()
            .any(|allowed| host == allowed || host.ends_with(&format!(".{}", allowed)))
    }

    /// Builds a GET request if the URL is allowlisted.
    pub fn get(&self, url: &str) -> Result<reqwest::RequestBuilder, PigwebError> {
        if !self.is_allowed(url) {
            return Err(PigwebError::SecurityError(format!(
                "Network capabilities capped: domain not in allowlist for URL {}",
                url
            )));
        }

        Ok(self.client.get(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> SandboxClient {
        SandboxClient::new(Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_ncbi_is_allowed() {
        let c = client();
        assert!(c.is_allowed("https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi"));
    }

    #[test]
    fn test_unknown_host_rejected() {
        let c = client();
        assert!(!c.is_allowed("https://corsproxy.io/?x"));
        assert!(!c.is_allowed("not a url"));
        assert!(matches!(
            c.get("https://example.com/"),
            Err(PigwebError::SecurityError(_))
        ));
    }

    #[test]
    fn test_allow_domain_covers_subdomains() {
        let mut c = client();
        c.allow_domain("example.org");
        assert!(c.is_allowed("https://api.example.org/v1"));
        assert!(!c.is_allowed("https://badexample.org/"));
    }
}
