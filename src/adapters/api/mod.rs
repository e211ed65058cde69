pub mod dto;

pub use dto::{ApiDto, ProjectDto, UrlsDto, WebDto};

use thiserror::Error;

use crate::domain::{DomainError, Project};

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Malformed payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Decodes a project wire payload. A payload missing a required field, or
/// carrying an unknown state tag, is malformed input; absent optional keys
/// and unrecognized keys are fine.
pub fn decode_project(payload: &str) -> Result<Project, DecodeError> {
    let dto: ProjectDto = serde_json::from_str(payload)?;
    let project = Project::try_from(dto)?;
    tracing::debug!(id = %project.id(), "decoded project payload");
    Ok(project)
}

/// Encodes a project back to its wire payload form.
pub fn encode_project(project: &Project) -> Result<String, DecodeError> {
    Ok(serde_json::to_string(&ProjectDto::from(project))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainError, RewardId, State};

    fn full_payload() -> String {
        r#"{
            "id": 42,
            "name": "Cool Project",
            "blurb": "A project so cool it funds itself",
            "slug": "cool-project",
            "category": {"id": 3, "name": "Games", "slug": "games", "parent_id": null},
            "location": {"id": 7, "name": "Portland", "displayable_name": "Portland, OR", "country": "US"},
            "country": "US",
            "goal": 200.0,
            "pledged": 100.0,
            "currency": "USD",
            "currency_symbol": "$",
            "currency_trailing_code": true,
            "static_usd_rate": 1.0,
            "created_at": 1400000000,
            "updated_at": 1400100000,
            "launched_at": 1400050000,
            "deadline": 1405000000,
            "state_changed_at": 1400050000,
            "state": "live",
            "backers_count": 10,
            "comments_count": 3,
            "updates_count": 2,
            "creator": {"id": 9, "name": "Creator", "avatar": null},
            "backing": {"id": 1, "amount": 25.0, "pledged_at": 1400060000, "reward_id": 42},
            "friends": [{"id": 11, "name": "Friend", "avatar": null}],
            "rewards": [{"id": 42, "minimum": 10.0, "description": "A sticker", "backers_count": 5}],
            "photo": {"full": "http://img.example.com/full.jpg", "med": null, "small": null},
            "is_backing": true,
            "is_starred": false,
            "urls": {
                "web": {
                    "project": "http://www.example.com/projects/creator/cool-project",
                    "rewards": "http://www.example.com/projects/creator/cool-project/rewards"
                },
                "api": {"project": "http://api.example.com/projects/42"}
            },
            "unknown_server_key": {"ignored": true}
        }"#
        .to_string()
    }

    #[test]
    fn decodes_a_full_payload() {
        let p = decode_project(&full_payload()).unwrap();
        assert_eq!(p.id().0, 42);
        assert_eq!(p.slug(), Some("cool-project"));
        assert_eq!(p.state(), State::Live);
        assert_eq!(p.comments_count(), Some(3));
        assert!(p.is_backing());
        assert!(p.is_backing_reward_id(RewardId(42)));
        assert_eq!(p.created_at().timestamp(), 1_400_000_000);
        assert_eq!(
            p.urls().api().and_then(|api| api.project()),
            Some("http://api.example.com/projects/42")
        );
    }

    #[test]
    fn absent_optionals_decode_to_not_present() {
        let payload = r#"{
            "id": 7,
            "name": "Sparse",
            "blurb": "Few fields",
            "country": "US",
            "goal": 50.0,
            "pledged": 0.0,
            "currency": "USD",
            "currency_symbol": "$",
            "currency_trailing_code": false,
            "created_at": 1400000000,
            "updated_at": 1400000000,
            "state": "submitted",
            "backers_count": 0,
            "creator": {"id": 9, "name": "Creator", "avatar": null},
            "urls": {
                "web": {
                    "project": "http://www.example.com/projects/creator/sparse",
                    "rewards": "http://www.example.com/projects/creator/sparse/rewards"
                }
            }
        }"#;
        let p = decode_project(payload).unwrap();
        assert_eq!(p.slug(), None);
        assert!(!p.has_comments());
        assert!(!p.has_rewards());
        assert!(!p.is_backing());
        assert!(!p.is_starred());
        assert_eq!(p.urls().api(), None);
        assert_eq!(p.param(), "7");
    }

    #[test]
    fn missing_required_field_is_a_hard_error() {
        // No creator.
        let payload = r#"{
            "id": 7,
            "name": "Broken",
            "blurb": "b",
            "country": "US",
            "goal": 50.0,
            "pledged": 0.0,
            "currency": "USD",
            "currency_symbol": "$",
            "currency_trailing_code": false,
            "created_at": 1400000000,
            "updated_at": 1400000000,
            "state": "live",
            "backers_count": 0,
            "urls": {
                "web": {
                    "project": "http://www.example.com/p",
                    "rewards": "http://www.example.com/p/rewards"
                }
            }
        }"#;
        assert!(matches!(decode_project(payload), Err(DecodeError::Json(_))));
    }

    #[test]
    fn unknown_state_tag_is_a_hard_error() {
        let payload = full_payload().replace("\"live\"", "\"paused\"");
        assert!(matches!(
            decode_project(&payload),
            Err(DecodeError::Domain(DomainError::InvalidState(tag))) if tag == "paused"
        ));
    }

    #[test]
    fn empty_reward_list_stays_present() {
        let payload = full_payload().replace(
            r#""rewards": [{"id": 42, "minimum": 10.0, "description": "A sticker", "backers_count": 5}],"#,
            r#""rewards": [],"#,
        );
        let p = decode_project(&payload).unwrap();
        assert!(p.has_rewards());
        assert_eq!(p.rewards(), Some(&[][..]));
    }

    #[test]
    fn encode_then_decode_preserves_every_field() {
        let p = decode_project(&full_payload()).unwrap();
        let reencoded = encode_project(&p).unwrap();
        let p2 = decode_project(&reencoded).unwrap();
        assert_eq!(
            serde_json::to_value(&p2).unwrap(),
            serde_json::to_value(&p).unwrap()
        );
    }
}
