use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;

use crate::core::{GitError, Result};

const API_BASE: &str = "https://api.github.com";

/// A file listed on the remote, ready to be fetched
#[derive(Debug, Clone)]
pub struct RemoteFile {
    pub path: String,
    pub download_url: String,
}

#[derive(Deserialize)]
struct RepoCreated {
    full_name: String,
    clone_url: String,
}

#[derive(Deserialize)]
struct ContentItem {
    path: String,
    #[serde(rename = "type")]
    kind: String,
    download_url: Option<String>,
}

/// Token-authenticated client for the GitHub REST API.
///
/// This is the remote-sync collaborator: push hands it the blobs
/// exported from the current tree, clone receives back the files to
/// materialize.
pub struct GitHubClient {
    http: reqwest::Client,
}

impl GitHubClient {
    pub fn new(token: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("DemoGit/1.0"));
        let auth = HeaderValue::from_str(&format!("token {}", token))
            .map_err(|_| GitError::Remote("token contains invalid header characters".to_string()))?;
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;
        Ok(Self { http })
    }

    /// Create a repository for the authenticated user; returns its
    /// `owner/repo` name and clone URL.
    pub async fn create_repository(&self, name: &str) -> Result<(String, String)> {
        let payload = json!({
            "name": name,
            "private": false,
        });

        let response = self
            .http
            .post(format!("{}/user/repos", API_BASE))
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GitError::Remote(format!(
                "creating repository failed: {}, {}",
                status, body
            )));
        }

        let created: RepoCreated = response.json().await?;
        Ok((created.full_name, created.clone_url))
    }

    /// Upload one file through the contents API
    pub async fn upload_file(
        &self,
        repo: &str,
        path: &str,
        bytes: &[u8],
        message: &str,
    ) -> Result<()> {
        let payload = json!({
            "message": message,
            "content": BASE64.encode(bytes),
        });

        let response = self
            .http
            .put(format!("{}/repos/{}/contents/{}", API_BASE, repo, path))
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GitError::Remote(format!(
                "uploading '{}' failed: {}, {}",
                path, status, body
            )));
        }
        Ok(())
    }

    /// List every file in the repository, walking directories through
    /// the contents API.
    pub async fn list_files(&self, repo: &str) -> Result<Vec<RemoteFile>> {
        let mut files = Vec::new();
        let mut pending = vec![String::new()];

        while let Some(dir) = pending.pop() {
            let url = format!("{}/repos/{}/contents/{}", API_BASE, repo, dir);
            let response = self.http.get(url).send().await?;

            if response.status() == StatusCode::NOT_FOUND {
                // An empty repository lists no contents
                continue;
            }
            if !response.status().is_success() {
                let status = response.status();
                return Err(GitError::Remote(format!(
                    "listing '{}' failed: {}",
                    dir, status
                )));
            }

            let items: Vec<ContentItem> = response.json().await?;
            for item in items {
                match item.kind.as_str() {
                    "dir" => pending.push(item.path),
                    "file" => {
                        if let Some(download_url) = item.download_url {
                            files.push(RemoteFile {
                                path: item.path,
                                download_url,
                            });
                        }
                    }
                    _ => {}
                }
            }
        }

        Ok(files)
    }

    /// Fetch one file's raw bytes
    pub async fn fetch_file(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(GitError::Remote(format!(
                "fetching '{}' failed: {}",
                url,
                response.status()
            )));
        }
        Ok(response.bytes().await?.to_vec())
    }
}
