use serde::{Deserialize, Serialize};
use url::Url;

use super::error::{DomainError, DomainResult};

/// Forces the scheme of `raw` to https, keeping authority, path and query.
/// An unparseable base is returned verbatim so URL math stays total.
pub(crate) fn with_https_scheme(raw: &str) -> String {
    let Ok(mut url) = Url::parse(raw) else {
        return raw.to_string();
    };
    let _ = url.set_scheme("https");
    url.to_string()
}

/// Appends path segments to `raw`, collapsing any trailing slash first.
pub(crate) fn append_path(raw: &str, segments: &[&str]) -> String {
    let Ok(mut url) = Url::parse(raw) else {
        return raw.to_string();
    };
    let appended = url
        .path_segments_mut()
        .map(|mut path| {
            path.pop_if_empty().extend(segments);
        })
        .is_ok();
    if !appended {
        return raw.to_string();
    }
    url.to_string()
}

/// Server-provided URL bundle for a project: the web entry points plus an
/// optional set of API endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Urls {
    web: Web,
    api: Option<Api>,
}

impl Urls {
    pub fn builder() -> UrlsBuilder {
        UrlsBuilder::default()
    }

    pub fn to_builder(&self) -> UrlsBuilder {
        UrlsBuilder {
            web: Some(self.web.clone()),
            api: self.api.clone(),
        }
    }

    pub fn web(&self) -> &Web {
        &self.web
    }

    pub fn api(&self) -> Option<&Api> {
        self.api.as_ref()
    }
}

#[derive(Debug, Default, Clone)]
pub struct UrlsBuilder {
    web: Option<Web>,
    api: Option<Api>,
}

impl UrlsBuilder {
    pub fn web(mut self, web: Web) -> Self {
        self.web = Some(web);
        self
    }

    pub fn api(mut self, api: Api) -> Self {
        self.api = Some(api);
        self
    }

    pub fn build(self) -> DomainResult<Urls> {
        Ok(Urls {
            web: self.web.ok_or(DomainError::MissingField("web"))?,
            api: self.api,
        })
    }
}

/// Web-facing URLs for a project. `project` and `rewards` always come down
/// from the server; the short form and the updates page may not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Web {
    project: String,
    project_short: Option<String>,
    rewards: String,
    updates: Option<String>,
}

impl Web {
    pub fn builder() -> WebBuilder {
        WebBuilder::default()
    }

    pub fn to_builder(&self) -> WebBuilder {
        WebBuilder {
            project: Some(self.project.clone()),
            project_short: self.project_short.clone(),
            rewards: Some(self.rewards.clone()),
            updates: self.updates.clone(),
        }
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn project_short(&self) -> Option<&str> {
        self.project_short.as_deref()
    }

    pub fn rewards(&self) -> &str {
        &self.rewards
    }

    pub fn updates(&self) -> Option<&str> {
        self.updates.as_deref()
    }

    /// The creator biography page under the project URL.
    pub fn creator_bio(&self) -> String {
        append_path(&self.project, &["creator_bio"])
    }

    /// The campaign description page under the project URL.
    pub fn description(&self) -> String {
        append_path(&self.project, &["description"])
    }
}

#[derive(Debug, Default, Clone)]
pub struct WebBuilder {
    project: Option<String>,
    project_short: Option<String>,
    rewards: Option<String>,
    updates: Option<String>,
}

impl WebBuilder {
    pub fn project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    pub fn project_short(mut self, project_short: impl Into<String>) -> Self {
        self.project_short = Some(project_short.into());
        self
    }

    pub fn rewards(mut self, rewards: impl Into<String>) -> Self {
        self.rewards = Some(rewards.into());
        self
    }

    pub fn updates(mut self, updates: impl Into<String>) -> Self {
        self.updates = Some(updates.into());
        self
    }

    pub fn build(self) -> DomainResult<Web> {
        Ok(Web {
            project: self.project.ok_or(DomainError::MissingField("project"))?,
            project_short: self.project_short,
            rewards: self.rewards.ok_or(DomainError::MissingField("rewards"))?,
            updates: self.updates,
        })
    }
}

/// API endpoints for a project. Every field is optional, so building one
/// cannot fail.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Api {
    project: Option<String>,
    comments: Option<String>,
    updates: Option<String>,
}

impl Api {
    pub fn builder() -> ApiBuilder {
        ApiBuilder::default()
    }

    pub fn to_builder(&self) -> ApiBuilder {
        ApiBuilder {
            project: self.project.clone(),
            comments: self.comments.clone(),
            updates: self.updates.clone(),
        }
    }

    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }

    pub fn comments(&self) -> Option<&str> {
        self.comments.as_deref()
    }

    pub fn updates(&self) -> Option<&str> {
        self.updates.as_deref()
    }
}

#[derive(Debug, Default, Clone)]
pub struct ApiBuilder {
    project: Option<String>,
    comments: Option<String>,
    updates: Option<String>,
}

impl ApiBuilder {
    pub fn project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    pub fn comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = Some(comments.into());
        self
    }

    pub fn updates(mut self, updates: impl Into<String>) -> Self {
        self.updates = Some(updates.into());
        self
    }

    pub fn build(self) -> Api {
        Api {
            project: self.project,
            comments: self.comments,
            updates: self.updates,
        }
    }
}
