//! Infrastructure implementation of the launcher ports over HTTP.
//!
//! `HttpLauncher` speaks the launcher's REST API rooted at
//! `<base-url>/api/v1`. Every request is sent exactly once. A response with
//! an error status becomes a [`RemoteServiceError`]; a request that never got
//! a response becomes a [`TransportError`].

use anyhow::{Context, Result, anyhow};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder, Response, Url};
use rlc_common::{FileInfo, HostInfo, InstanceInfo, InstanceParams};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::application::ports::{
    InstanceInspector, InstanceLifecycle, LauncherDirectory, ModifyOptions, OutputQuery,
    ResourceTransfer, StdinWriter,
};
use crate::domain::address::{AppPath, InstancePath, ResourcePath};
use crate::domain::config::validate_url;
use crate::domain::error::{RemoteServiceError, TransportError};

/// REST API version spoken by this client.
pub const API_VERSION: &str = "v1";

const OCTET_STREAM: &str = "application/octet-stream";

/// Production launcher client.
pub struct HttpLauncher {
    client: Client,
    base: Url,
}

impl HttpLauncher {
    /// Client for the launcher at `url` (scheme, host and optional path
    /// prefix, without the `/api/<version>` suffix).
    ///
    /// # Errors
    ///
    /// Returns an error if `url` is not an absolute http(s) URL or the HTTP
    /// client cannot be built.
    pub fn new(url: &str) -> Result<Self> {
        validate_url(url)?;
        let mut base = Url::parse(url).with_context(|| format!("invalid launcher URL: {url}"))?;
        base.path_segments_mut()
            .map_err(|()| anyhow!("launcher URL cannot be used as a base: {url}"))?
            .pop_if_empty()
            .extend(["api", API_VERSION]);
        let client = Client::builder()
            .user_agent(concat!("rlc/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client, base })
    }

    /// Root of the versioned API, e.g. `http://host:7000/api/v1`.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| anyhow!("launcher URL cannot be used as a base: {}", self.base))?
            .extend(segments);
        Ok(url)
    }

    fn app_url(&self, app: &AppPath) -> Result<Url> {
        self.endpoint(&[app.host_name.as_str(), app.app_id.as_str()])
    }

    fn instance_url(&self, path: &InstancePath) -> Result<Url> {
        let id = path.instance_id.to_string();
        self.endpoint(&[path.host_name.as_str(), path.app_id.as_str(), id.as_str()])
    }

    fn resource_url(&self, path: &ResourcePath) -> Result<Url> {
        let id = path.instance_id.to_string();
        self.endpoint(&[
            path.host_name.as_str(),
            path.app_id.as_str(),
            id.as_str(),
            path.res_name.as_str(),
        ])
    }

    /// Send once and map error statuses to [`RemoteServiceError`].
    async fn send(req: RequestBuilder) -> Result<Response> {
        let resp = req.send().await.map_err(TransportError::new)?;
        let status = resp.status();
        debug!(url = %resp.url(), %status, "launcher response");
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.map_err(TransportError::new)?;
        Err(RemoteServiceError {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body: body.trim().to_string(),
        }
        .into())
    }

    async fn bytes(req: RequestBuilder) -> Result<Vec<u8>> {
        let resp = Self::send(req).await?;
        let body = resp.bytes().await.map_err(TransportError::new)?;
        Ok(body.to_vec())
    }

    async fn json<T: DeserializeOwned>(req: RequestBuilder) -> Result<T> {
        let body = Self::bytes(req).await?;
        serde_json::from_slice(&body).context("failed to decode launcher response")
    }
}

impl LauncherDirectory for HttpLauncher {
    async fn list(
        &self,
        host_pattern: Option<&str>,
        app_pattern: Option<&str>,
    ) -> Result<Vec<HostInfo>> {
        let mut query = Vec::new();
        if let Some(host) = host_pattern {
            query.push(("host", host));
        }
        if let Some(app) = app_pattern {
            query.push(("app", app));
        }
        let url = self.endpoint(&[""])?;
        Self::json(self.client.get(url).query(&query)).await
    }
}

impl InstanceInspector for HttpLauncher {
    async fn instance(&self, path: &InstancePath) -> Result<InstanceInfo> {
        Self::json(self.client.get(self.instance_url(path)?)).await
    }

    async fn read_output(&self, path: &InstancePath, query: &OutputQuery) -> Result<Vec<u8>> {
        let mut params = vec![("what", query.stream.as_str().to_string())];
        if let Some(offset) = query.offset {
            params.push(("offset", offset.to_string()));
        }
        if let Some(run_num) = query.run_num {
            params.push(("run_num", run_num.to_string()));
        }
        Self::bytes(self.client.get(self.instance_url(path)?).query(&params)).await
    }

    async fn read_log(&self, path: &InstancePath) -> Result<Vec<u8>> {
        Self::bytes(
            self.client
                .get(self.instance_url(path)?)
                .query(&[("what", "log")]),
        )
        .await
    }

    async fn file_info(&self, path: &InstancePath) -> Result<Vec<FileInfo>> {
        Self::json(
            self.client
                .get(self.instance_url(path)?)
                .query(&[("what", "fileinfo")]),
        )
        .await
    }
}

impl InstanceLifecycle for HttpLauncher {
    async fn create(&self, app: &AppPath, params: &InstanceParams) -> Result<InstanceInfo> {
        Self::json(self.client.put(self.app_url(app)?).json(params)).await
    }

    async fn modify(
        &self,
        path: &InstancePath,
        params: &InstanceParams,
        options: ModifyOptions,
    ) -> Result<InstanceInfo> {
        let mut req = self.client.post(self.instance_url(path)?).json(params);
        if options.sync {
            req = req.query(&[("sync", "true")]);
        }
        Self::json(req).await
    }

    async fn delete(&self, path: &InstancePath) -> Result<()> {
        Self::send(self.client.delete(self.instance_url(path)?)).await?;
        Ok(())
    }
}

impl ResourceTransfer for HttpLauncher {
    async fn download(&self, path: &ResourcePath) -> Result<Vec<u8>> {
        Self::bytes(self.client.get(self.resource_url(path)?)).await
    }

    async fn upload(&self, path: &ResourcePath, content: Vec<u8>) -> Result<()> {
        Self::send(
            self.client
                .put(self.resource_url(path)?)
                .header(CONTENT_TYPE, OCTET_STREAM)
                .body(content),
        )
        .await?;
        Ok(())
    }

    async fn remove(&self, path: &ResourcePath) -> Result<()> {
        Self::send(self.client.delete(self.resource_url(path)?)).await?;
        Ok(())
    }
}

impl StdinWriter for HttpLauncher {
    async fn write_stdin(&self, path: &InstancePath, text: &str) -> Result<()> {
        Self::send(
            self.client
                .post(self.instance_url(path)?)
                .query(&[("stdin", "true")])
                .header(CONTENT_TYPE, OCTET_STREAM)
                .body(text.to_string()),
        )
        .await?;
        Ok(())
    }
}
