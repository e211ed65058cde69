use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::*;

/// Wire shape of a project payload. Keys match the server's snake_case
/// names; timestamps travel as epoch seconds; unknown keys are ignored.
/// Nested collaborator types (`User`, `Backing`, ...) deserialize directly
/// since the core passes them through untouched.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectDto {
    pub id: i64,
    pub name: String,
    pub blurb: String,
    pub slug: Option<String>,
    pub category: Option<Category>,
    pub location: Option<Location>,
    pub country: String,
    pub goal: f32,
    pub pledged: f32,
    pub currency: String,
    pub currency_symbol: String,
    pub currency_trailing_code: bool,
    pub static_usd_rate: Option<f32>,
    pub created_at: i64,
    pub updated_at: i64,
    pub launched_at: Option<i64>,
    pub deadline: Option<i64>,
    pub featured_at: Option<i64>,
    pub potd_at: Option<i64>,
    pub state_changed_at: Option<i64>,
    pub state: String,
    pub backers_count: u32,
    pub comments_count: Option<u32>,
    pub updates_count: Option<u32>,
    pub creator: User,
    pub backing: Option<Backing>,
    pub friends: Option<Vec<User>>,
    pub rewards: Option<Vec<Reward>>,
    pub photo: Option<Photo>,
    pub video: Option<Video>,
    pub is_backing: Option<bool>,
    pub is_starred: Option<bool>,
    pub urls: UrlsDto,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UrlsDto {
    pub web: WebDto,
    pub api: Option<ApiDto>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WebDto {
    pub project: String,
    pub project_short: Option<String>,
    pub rewards: String,
    pub updates: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiDto {
    pub project: Option<String>,
    pub comments: Option<String>,
    pub updates: Option<String>,
}

fn timestamp(secs: i64) -> DomainResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or(DomainError::InvalidTimestamp(secs))
}

fn timestamp_opt(secs: Option<i64>) -> DomainResult<Option<DateTime<Utc>>> {
    secs.map(timestamp).transpose()
}

impl TryFrom<ProjectDto> for Project {
    type Error = DomainError;

    /// Drives a bare builder field-by-field. Optionals are set only when the
    /// payload carried them, so an absent `rewards` stays absent rather than
    /// picking up the fresh-builder default of an empty list.
    fn try_from(dto: ProjectDto) -> Result<Self, Self::Error> {
        let mut builder = ProjectBuilder::default()
            .id(dto.id)
            .name(dto.name)
            .blurb(dto.blurb)
            .country(dto.country)
            .goal(dto.goal)
            .pledged(dto.pledged)
            .currency(dto.currency)
            .currency_symbol(dto.currency_symbol)
            .currency_trailing_code(dto.currency_trailing_code)
            .created_at(timestamp(dto.created_at)?)
            .updated_at(timestamp(dto.updated_at)?)
            .state(dto.state.parse()?)
            .backers_count(dto.backers_count)
            .creator(dto.creator)
            .is_backing(dto.is_backing.unwrap_or(false))
            .is_starred(dto.is_starred.unwrap_or(false))
            .urls(Urls::try_from(dto.urls)?);

        if let Some(slug) = dto.slug {
            builder = builder.slug(slug);
        }
        if let Some(category) = dto.category {
            builder = builder.category(category);
        }
        if let Some(location) = dto.location {
            builder = builder.location(location);
        }
        if let Some(rate) = dto.static_usd_rate {
            builder = builder.static_usd_rate(rate);
        }
        if let Some(ts) = timestamp_opt(dto.launched_at)? {
            builder = builder.launched_at(ts);
        }
        if let Some(ts) = timestamp_opt(dto.deadline)? {
            builder = builder.deadline(ts);
        }
        if let Some(ts) = timestamp_opt(dto.featured_at)? {
            builder = builder.featured_at(ts);
        }
        if let Some(ts) = timestamp_opt(dto.potd_at)? {
            builder = builder.potd_at(ts);
        }
        if let Some(ts) = timestamp_opt(dto.state_changed_at)? {
            builder = builder.state_changed_at(ts);
        }
        if let Some(count) = dto.comments_count {
            builder = builder.comments_count(count);
        }
        if let Some(count) = dto.updates_count {
            builder = builder.updates_count(count);
        }
        if let Some(backing) = dto.backing {
            builder = builder.backing(backing);
        }
        if let Some(friends) = dto.friends {
            builder = builder.friends(friends);
        }
        if let Some(rewards) = dto.rewards {
            builder = builder.rewards(rewards);
        }
        if let Some(photo) = dto.photo {
            builder = builder.photo(photo);
        }
        if let Some(video) = dto.video {
            builder = builder.video(video);
        }

        builder.build()
    }
}

impl TryFrom<UrlsDto> for Urls {
    type Error = DomainError;

    fn try_from(dto: UrlsDto) -> Result<Self, Self::Error> {
        let mut builder = Urls::builder().web(Web::try_from(dto.web)?);
        if let Some(api) = dto.api {
            builder = builder.api(Api::from(api));
        }
        builder.build()
    }
}

impl TryFrom<WebDto> for Web {
    type Error = DomainError;

    fn try_from(dto: WebDto) -> Result<Self, Self::Error> {
        let mut builder = Web::builder().project(dto.project).rewards(dto.rewards);
        if let Some(short) = dto.project_short {
            builder = builder.project_short(short);
        }
        if let Some(updates) = dto.updates {
            builder = builder.updates(updates);
        }
        builder.build()
    }
}

impl From<ApiDto> for Api {
    fn from(dto: ApiDto) -> Self {
        let mut builder = Api::builder();
        if let Some(project) = dto.project {
            builder = builder.project(project);
        }
        if let Some(comments) = dto.comments {
            builder = builder.comments(comments);
        }
        if let Some(updates) = dto.updates {
            builder = builder.updates(updates);
        }
        builder.build()
    }
}

impl From<&Project> for ProjectDto {
    fn from(project: &Project) -> Self {
        ProjectDto {
            id: project.id().0,
            name: project.name().to_string(),
            blurb: project.blurb().to_string(),
            slug: project.slug().map(str::to_string),
            category: project.category().cloned(),
            location: project.location().cloned(),
            country: project.country().to_string(),
            goal: project.goal(),
            pledged: project.pledged(),
            currency: project.currency().to_string(),
            currency_symbol: project.currency_symbol().to_string(),
            currency_trailing_code: project.currency_trailing_code(),
            static_usd_rate: project.static_usd_rate(),
            created_at: project.created_at().timestamp(),
            updated_at: project.updated_at().timestamp(),
            launched_at: project.launched_at().map(|ts| ts.timestamp()),
            deadline: project.deadline().map(|ts| ts.timestamp()),
            featured_at: project.featured_at().map(|ts| ts.timestamp()),
            potd_at: project.potd_at().map(|ts| ts.timestamp()),
            state_changed_at: project.state_changed_at().map(|ts| ts.timestamp()),
            state: project.state().to_string(),
            backers_count: project.backers_count(),
            comments_count: project.comments_count(),
            updates_count: project.updates_count(),
            creator: project.creator().clone(),
            backing: project.backing().cloned(),
            friends: project.friends().map(<[User]>::to_vec),
            rewards: project.rewards().map(<[Reward]>::to_vec),
            photo: project.photo().cloned(),
            video: project.video().cloned(),
            is_backing: Some(project.is_backing()),
            is_starred: Some(project.is_starred()),
            urls: UrlsDto::from(project.urls()),
        }
    }
}

impl From<&Urls> for UrlsDto {
    fn from(urls: &Urls) -> Self {
        UrlsDto {
            web: WebDto {
                project: urls.web().project().to_string(),
                project_short: urls.web().project_short().map(str::to_string),
                rewards: urls.web().rewards().to_string(),
                updates: urls.web().updates().map(str::to_string),
            },
            api: urls.api().map(|api| ApiDto {
                project: api.project().map(str::to_string),
                comments: api.comments().map(str::to_string),
                updates: api.updates().map(str::to_string),
            }),
        }
    }
}
