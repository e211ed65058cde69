use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use url::Url;

use super::error::{DomainError, DomainResult};
use super::urls::{append_path, with_https_scheme, Urls};
use super::{Backing, Category, Location, Photo, Reward, RewardId, User, Video};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub i64);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProjectId {
    fn from(id: i64) -> Self {
        ProjectId(id)
    }
}

/// Lifecycle state of a campaign. The server owns transitions; the client
/// only decodes the active tag and classifies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    Started,
    Submitted,
    Live,
    Successful,
    Failed,
    Canceled,
    Suspended,
    Purged,
}

impl State {
    pub const ALL: [State; 8] = [
        State::Started,
        State::Submitted,
        State::Live,
        State::Successful,
        State::Failed,
        State::Canceled,
        State::Suspended,
        State::Purged,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            State::Started => "started",
            State::Submitted => "submitted",
            State::Live => "live",
            State::Successful => "successful",
            State::Failed => "failed",
            State::Canceled => "canceled",
            State::Suspended => "suspended",
            State::Purged => "purged",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for State {
    type Err = DomainError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        State::ALL
            .into_iter()
            .find(|state| state.as_str() == tag)
            .ok_or_else(|| DomainError::InvalidState(tag.to_string()))
    }
}

/// A crowdfunding campaign as the server last described it, plus the
/// viewer-local `is_backing`/`is_starred` flags.
///
/// Immutable once built: construction goes through [`ProjectBuilder`], and
/// any "change" is `to_builder()` followed by a fresh `build()`.
///
/// # Equality is identity-only
///
/// `PartialEq`, `Eq` and `Hash` look at `id` alone. Two projects with the
/// same id but different remaining fields compare equal, like two reads of
/// the same database row at different times. Never compare projects when
/// you mean to compare their contents; compare the fields you care about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    name: String,
    blurb: String,
    slug: Option<String>,
    category: Option<Category>,
    location: Option<Location>,
    country: String,
    goal: f32,
    pledged: f32,
    currency: String,
    currency_symbol: String,
    currency_trailing_code: bool,
    static_usd_rate: Option<f32>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    launched_at: Option<DateTime<Utc>>,
    deadline: Option<DateTime<Utc>>,
    featured_at: Option<DateTime<Utc>>,
    potd_at: Option<DateTime<Utc>>,
    state_changed_at: Option<DateTime<Utc>>,
    state: State,
    backers_count: u32,
    comments_count: Option<u32>,
    updates_count: Option<u32>,
    creator: User,
    backing: Option<Backing>,
    friends: Option<Vec<User>>,
    rewards: Option<Vec<Reward>>,
    photo: Option<Photo>,
    video: Option<Video>,
    is_backing: bool,
    is_starred: bool,
    urls: Urls,
}

impl PartialEq for Project {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Project {}

impl Hash for Project {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Project{{id={}, name={}}}", self.id, self.name)
    }
}

impl Project {
    /// A fresh builder with the viewer-local defaults: not backing, not
    /// starred, and a present-but-empty reward list.
    pub fn builder() -> ProjectBuilder {
        ProjectBuilder::default()
            .is_backing(false)
            .is_starred(false)
            .rewards(Vec::new())
    }

    /// A builder pre-filled with every field of this record. Building it
    /// unchanged reproduces an equal record field-for-field.
    pub fn to_builder(&self) -> ProjectBuilder {
        ProjectBuilder {
            id: Some(self.id),
            name: Some(self.name.clone()),
            blurb: Some(self.blurb.clone()),
            slug: self.slug.clone(),
            category: self.category.clone(),
            location: self.location.clone(),
            country: Some(self.country.clone()),
            goal: Some(self.goal),
            pledged: Some(self.pledged),
            currency: Some(self.currency.clone()),
            currency_symbol: Some(self.currency_symbol.clone()),
            currency_trailing_code: Some(self.currency_trailing_code),
            static_usd_rate: self.static_usd_rate,
            created_at: Some(self.created_at),
            updated_at: Some(self.updated_at),
            launched_at: self.launched_at,
            deadline: self.deadline,
            featured_at: self.featured_at,
            potd_at: self.potd_at,
            state_changed_at: self.state_changed_at,
            state: Some(self.state),
            backers_count: Some(self.backers_count),
            comments_count: self.comments_count,
            updates_count: self.updates_count,
            creator: Some(self.creator.clone()),
            backing: self.backing.clone(),
            friends: self.friends.clone(),
            rewards: self.rewards.clone(),
            photo: self.photo.clone(),
            video: self.video.clone(),
            is_backing: Some(self.is_backing),
            is_starred: Some(self.is_starred),
            urls: Some(self.urls.clone()),
        }
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn blurb(&self) -> &str {
        &self.blurb
    }

    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    pub fn category(&self) -> Option<&Category> {
        self.category.as_ref()
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn goal(&self) -> f32 {
        self.goal
    }

    pub fn pledged(&self) -> f32 {
        self.pledged
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    pub fn currency_trailing_code(&self) -> bool {
        self.currency_trailing_code
    }

    pub fn static_usd_rate(&self) -> Option<f32> {
        self.static_usd_rate
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn launched_at(&self) -> Option<DateTime<Utc>> {
        self.launched_at
    }

    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }

    pub fn featured_at(&self) -> Option<DateTime<Utc>> {
        self.featured_at
    }

    pub fn potd_at(&self) -> Option<DateTime<Utc>> {
        self.potd_at
    }

    pub fn state_changed_at(&self) -> Option<DateTime<Utc>> {
        self.state_changed_at
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn backers_count(&self) -> u32 {
        self.backers_count
    }

    pub fn comments_count(&self) -> Option<u32> {
        self.comments_count
    }

    pub fn updates_count(&self) -> Option<u32> {
        self.updates_count
    }

    pub fn creator(&self) -> &User {
        &self.creator
    }

    pub fn backing(&self) -> Option<&Backing> {
        self.backing.as_ref()
    }

    pub fn friends(&self) -> Option<&[User]> {
        self.friends.as_deref()
    }

    pub fn rewards(&self) -> Option<&[Reward]> {
        self.rewards.as_deref()
    }

    pub fn photo(&self) -> Option<&Photo> {
        self.photo.as_ref()
    }

    pub fn video(&self) -> Option<&Video> {
        self.video.as_ref()
    }

    pub fn is_backing(&self) -> bool {
        self.is_backing
    }

    pub fn is_starred(&self) -> bool {
        self.is_starred
    }

    pub fn urls(&self) -> &Urls {
        &self.urls
    }

    /// Pledged amount as a percentage of the goal. A zero or negative goal
    /// reads as 0 rather than dividing by it.
    pub fn percentage_funded(&self) -> f32 {
        if self.goal > 0.0 {
            (self.pledged / self.goal) * 100.0
        } else {
            0.0
        }
    }

    pub fn is_funded(&self) -> bool {
        self.is_live() && self.percentage_funded() >= 100.0
    }

    pub fn has_comments(&self) -> bool {
        self.comments_count.is_some_and(|count| count != 0)
    }

    /// Whether the server sent a reward list at all. An empty list still
    /// counts; only an absent list does not.
    pub fn has_rewards(&self) -> bool {
        self.rewards.is_some()
    }

    pub fn has_video(&self) -> bool {
        self.video.is_some()
    }

    pub fn is_friend_backing(&self) -> bool {
        self.friends
            .as_ref()
            .is_some_and(|friends| !friends.is_empty())
    }

    pub fn is_featured_today(&self) -> bool {
        self.featured_at.is_some_and(is_date_today)
    }

    pub fn is_potd_today(&self) -> bool {
        self.potd_at.is_some_and(is_date_today)
    }

    pub fn is_backing_reward_id(&self, reward_id: RewardId) -> bool {
        self.backing
            .as_ref()
            .and_then(|backing| backing.reward_id)
            .is_some_and(|backed| backed == reward_id)
    }

    pub fn is_started(&self) -> bool {
        self.state == State::Started
    }

    pub fn is_submitted(&self) -> bool {
        self.state == State::Submitted
    }

    pub fn is_live(&self) -> bool {
        self.state == State::Live
    }

    pub fn is_successful(&self) -> bool {
        self.state == State::Successful
    }

    pub fn is_failed(&self) -> bool {
        self.state == State::Failed
    }

    pub fn is_canceled(&self) -> bool {
        self.state == State::Canceled
    }

    pub fn is_suspended(&self) -> bool {
        self.state == State::Suspended
    }

    pub fn is_purged(&self) -> bool {
        self.state == State::Purged
    }

    /// Human-friendly identifier for URL paths: the slug when the server
    /// assigned one, else the decimal id.
    pub fn param(&self) -> String {
        match &self.slug {
            Some(slug) => slug.clone(),
            None => self.id.to_string(),
        }
    }

    pub fn web_project_url(&self) -> &str {
        self.urls.web().project()
    }

    pub fn secure_web_project_url(&self) -> String {
        with_https_scheme(self.web_project_url())
    }

    pub fn creator_bio_url(&self) -> String {
        self.urls.web().creator_bio()
    }

    pub fn description_url(&self) -> String {
        self.urls.web().description()
    }

    pub fn updates_url(&self) -> String {
        append_path(&self.secure_web_project_url(), &["updates"])
    }

    pub fn new_pledge_url(&self) -> String {
        append_path(&self.secure_web_project_url(), &["pledge", "new"])
    }

    pub fn edit_pledge_url(&self) -> String {
        append_path(&self.secure_web_project_url(), &["pledge", "edit"])
    }

    /// The new-pledge URL with the chosen reward pre-selected. The bracketed
    /// query key is percent-encoded (`backing%5Bbacker_reward_id%5D`).
    pub fn reward_selected_url(&self, reward: &Reward) -> String {
        let base = self.new_pledge_url();
        let Ok(mut url) = Url::parse(&base) else {
            return base;
        };
        let _ = url.set_scheme("https");
        url.query_pairs_mut()
            .append_pair("backing[backer_reward_id]", &reward.id.to_string())
            .append_pair("clicked_reward", "true");
        url.to_string()
    }
}

fn is_date_today(ts: DateTime<Utc>) -> bool {
    ts.with_timezone(&Local).date_naive() == Local::now().date_naive()
}

/// Mutable staging object for [`Project`]. Accumulates fields and validates
/// the required ones at `build`. Single-owner; not meant to be shared.
#[derive(Debug, Default, Clone)]
pub struct ProjectBuilder {
    id: Option<ProjectId>,
    name: Option<String>,
    blurb: Option<String>,
    slug: Option<String>,
    category: Option<Category>,
    location: Option<Location>,
    country: Option<String>,
    goal: Option<f32>,
    pledged: Option<f32>,
    currency: Option<String>,
    currency_symbol: Option<String>,
    currency_trailing_code: Option<bool>,
    static_usd_rate: Option<f32>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    launched_at: Option<DateTime<Utc>>,
    deadline: Option<DateTime<Utc>>,
    featured_at: Option<DateTime<Utc>>,
    potd_at: Option<DateTime<Utc>>,
    state_changed_at: Option<DateTime<Utc>>,
    state: Option<State>,
    backers_count: Option<u32>,
    comments_count: Option<u32>,
    updates_count: Option<u32>,
    creator: Option<User>,
    backing: Option<Backing>,
    friends: Option<Vec<User>>,
    rewards: Option<Vec<Reward>>,
    photo: Option<Photo>,
    video: Option<Video>,
    is_backing: Option<bool>,
    is_starred: Option<bool>,
    urls: Option<Urls>,
}

impl ProjectBuilder {
    pub fn id(mut self, id: impl Into<ProjectId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn blurb(mut self, blurb: impl Into<String>) -> Self {
        self.blurb = Some(blurb.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn goal(mut self, goal: f32) -> Self {
        self.goal = Some(goal);
        self
    }

    pub fn pledged(mut self, pledged: f32) -> Self {
        self.pledged = Some(pledged);
        self
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn currency_symbol(mut self, currency_symbol: impl Into<String>) -> Self {
        self.currency_symbol = Some(currency_symbol.into());
        self
    }

    pub fn currency_trailing_code(mut self, currency_trailing_code: bool) -> Self {
        self.currency_trailing_code = Some(currency_trailing_code);
        self
    }

    pub fn static_usd_rate(mut self, static_usd_rate: f32) -> Self {
        self.static_usd_rate = Some(static_usd_rate);
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    pub fn launched_at(mut self, launched_at: DateTime<Utc>) -> Self {
        self.launched_at = Some(launched_at);
        self
    }

    pub fn deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn featured_at(mut self, featured_at: DateTime<Utc>) -> Self {
        self.featured_at = Some(featured_at);
        self
    }

    pub fn potd_at(mut self, potd_at: DateTime<Utc>) -> Self {
        self.potd_at = Some(potd_at);
        self
    }

    pub fn state_changed_at(mut self, state_changed_at: DateTime<Utc>) -> Self {
        self.state_changed_at = Some(state_changed_at);
        self
    }

    pub fn state(mut self, state: State) -> Self {
        self.state = Some(state);
        self
    }

    pub fn backers_count(mut self, backers_count: u32) -> Self {
        self.backers_count = Some(backers_count);
        self
    }

    pub fn comments_count(mut self, comments_count: u32) -> Self {
        self.comments_count = Some(comments_count);
        self
    }

    pub fn updates_count(mut self, updates_count: u32) -> Self {
        self.updates_count = Some(updates_count);
        self
    }

    pub fn creator(mut self, creator: User) -> Self {
        self.creator = Some(creator);
        self
    }

    pub fn backing(mut self, backing: Backing) -> Self {
        self.backing = Some(backing);
        self
    }

    pub fn friends(mut self, friends: Vec<User>) -> Self {
        self.friends = Some(friends);
        self
    }

    pub fn rewards(mut self, rewards: Vec<Reward>) -> Self {
        self.rewards = Some(rewards);
        self
    }

    pub fn photo(mut self, photo: Photo) -> Self {
        self.photo = Some(photo);
        self
    }

    pub fn video(mut self, video: Video) -> Self {
        self.video = Some(video);
        self
    }

    pub fn is_backing(mut self, is_backing: bool) -> Self {
        self.is_backing = Some(is_backing);
        self
    }

    pub fn is_starred(mut self, is_starred: bool) -> Self {
        self.is_starred = Some(is_starred);
        self
    }

    pub fn urls(mut self, urls: Urls) -> Self {
        self.urls = Some(urls);
        self
    }

    /// Finalizes the record. Fails with `MissingField` on the first required
    /// field that was never set; absent optionals are fine.
    pub fn build(self) -> DomainResult<Project> {
        Ok(Project {
            id: self.id.ok_or(DomainError::MissingField("id"))?,
            name: self.name.ok_or(DomainError::MissingField("name"))?,
            blurb: self.blurb.ok_or(DomainError::MissingField("blurb"))?,
            slug: self.slug,
            category: self.category,
            location: self.location,
            country: self.country.ok_or(DomainError::MissingField("country"))?,
            goal: self.goal.ok_or(DomainError::MissingField("goal"))?,
            pledged: self.pledged.ok_or(DomainError::MissingField("pledged"))?,
            currency: self.currency.ok_or(DomainError::MissingField("currency"))?,
            currency_symbol: self
                .currency_symbol
                .ok_or(DomainError::MissingField("currency_symbol"))?,
            currency_trailing_code: self
                .currency_trailing_code
                .ok_or(DomainError::MissingField("currency_trailing_code"))?,
            static_usd_rate: self.static_usd_rate,
            created_at: self
                .created_at
                .ok_or(DomainError::MissingField("created_at"))?,
            updated_at: self
                .updated_at
                .ok_or(DomainError::MissingField("updated_at"))?,
            launched_at: self.launched_at,
            deadline: self.deadline,
            featured_at: self.featured_at,
            potd_at: self.potd_at,
            state_changed_at: self.state_changed_at,
            state: self.state.ok_or(DomainError::MissingField("state"))?,
            backers_count: self
                .backers_count
                .ok_or(DomainError::MissingField("backers_count"))?,
            comments_count: self.comments_count,
            updates_count: self.updates_count,
            creator: self.creator.ok_or(DomainError::MissingField("creator"))?,
            backing: self.backing,
            friends: self.friends,
            rewards: self.rewards,
            photo: self.photo,
            video: self.video,
            is_backing: self
                .is_backing
                .ok_or(DomainError::MissingField("is_backing"))?,
            is_starred: self
                .is_starred
                .ok_or(DomainError::MissingField("is_starred"))?,
            urls: self.urls.ok_or(DomainError::MissingField("urls"))?,
        })
    }
}
