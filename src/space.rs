//! The `Space` record and its seed data.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Caller-assigned record identifier, 32-bit like the wire contract
pub type SpaceId = i32;

/// A workspace-like record with metadata and an uploaded-files buffer.
///
/// Every field falls back to its default when absent from a request body.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Space {
    pub id: SpaceId,
    pub title: String,
    pub default_focus_mode: String,
    pub projects: String,
    pub description: String,
    pub private: bool,
    pub creation_date: DateTime<Utc>,
    pub last_accessed_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
    /// Uploaded file names, concatenated without a delimiter
    pub uploaded_files: String,
    pub system_message: String,
    pub group_id: String,
}

impl Space {
    /// Create an empty space with the given id
    pub fn new(id: SpaceId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Whether `query` is a substring of the title or the description
    pub fn matches(&self, query: &str) -> bool {
        self.title.contains(query) || self.description.contains(query)
    }

    /// Copy the caller-editable fields from `payload`, leaving id and
    /// creation/access timestamps untouched.
    pub fn apply_update(&mut self, payload: Space, now: DateTime<Utc>) {
        self.title = payload.title;
        self.default_focus_mode = payload.default_focus_mode;
        self.projects = payload.projects;
        self.description = payload.description;
        self.private = payload.private;
        self.uploaded_files = payload.uploaded_files;
        self.system_message = payload.system_message;
        self.group_id = payload.group_id;
        self.updated_date = now;
    }

    /// Stamp all three timestamps with `now`
    pub fn touch_all(&mut self, now: DateTime<Utc>) {
        self.creation_date = now;
        self.last_accessed_date = now;
        self.updated_date = now;
    }
}

/// The two records every process starts with, dated relative to `now`.
pub fn seed_spaces(now: DateTime<Utc>) -> Vec<Space> {
    let days_ago = |days: i64| now - Duration::days(days);

    vec![
        Space {
            id: 1,
            title: "Space 1".to_string(),
            default_focus_mode: "Focus Mode 1".to_string(),
            projects: "Project 1".to_string(),
            description: "Description for Space 1".to_string(),
            private: true,
            creation_date: days_ago(10),
            last_accessed_date: days_ago(5),
            updated_date: days_ago(1),
            uploaded_files: "file1.txt".to_string(),
            system_message: "System message for Space 1".to_string(),
            group_id: "Group1".to_string(),
        },
        Space {
            id: 2,
            title: "Space 2".to_string(),
            default_focus_mode: "Focus Mode 2".to_string(),
            projects: "Project 2".to_string(),
            description: "Description for Space 2".to_string(),
            private: false,
            creation_date: days_ago(20),
            last_accessed_date: days_ago(10),
            updated_date: days_ago(2),
            uploaded_files: "file2.txt".to_string(),
            system_message: "System message for Space 2".to_string(),
            group_id: "Group2".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_fills_missing_fields() {
        let space: Space = serde_json::from_value(json!({ "id": 3, "title": "X" })).unwrap();

        assert_eq!(space.id, 3);
        assert_eq!(space.title, "X");
        assert_eq!(space.description, "");
        assert_eq!(space.uploaded_files, "");
        assert!(!space.private);
        assert_eq!(space.creation_date, DateTime::<Utc>::default());
    }

    #[test]
    fn test_serialize_uses_camel_case_names() {
        let value = serde_json::to_value(Space::new(7)).unwrap();
        let obj = value.as_object().unwrap();

        for key in [
            "id",
            "title",
            "defaultFocusMode",
            "projects",
            "description",
            "private",
            "creationDate",
            "lastAccessedDate",
            "updatedDate",
            "uploadedFiles",
            "systemMessage",
            "groupId",
        ] {
            assert!(obj.contains_key(key), "missing field {key}");
        }
        assert_eq!(obj.len(), 12);
    }

    #[test]
    fn test_matches_is_case_sensitive() {
        let space = Space {
            title: "Alpha".to_string(),
            description: "first space".to_string(),
            ..Space::new(1)
        };

        assert!(space.matches("Alp"));
        assert!(space.matches("first"));
        assert!(space.matches(""));
        assert!(!space.matches("alpha"));
        assert!(!space.matches("First"));
    }

    #[test]
    fn test_apply_update_keeps_identity_and_creation() {
        let created = Utc::now() - Duration::days(3);
        let mut space = Space::new(5);
        space.touch_all(created);

        let payload = Space {
            id: 99,
            title: "new".to_string(),
            private: true,
            uploaded_files: "a.txt".to_string(),
            group_id: "g".to_string(),
            ..Space::default()
        };
        let now = Utc::now();
        space.apply_update(payload, now);

        assert_eq!(space.id, 5);
        assert_eq!(space.creation_date, created);
        assert_eq!(space.last_accessed_date, created);
        assert_eq!(space.updated_date, now);
        assert_eq!(space.title, "new");
        assert!(space.private);
        assert_eq!(space.uploaded_files, "a.txt");
        assert_eq!(space.group_id, "g");
    }

    #[test]
    fn test_seed_spaces() {
        let now = Utc::now();
        let seeds = seed_spaces(now);

        assert_eq!(seeds.len(), 2);
        assert_eq!(seeds[0].id, 1);
        assert_eq!(seeds[0].uploaded_files, "file1.txt");
        assert_eq!(seeds[0].creation_date, now - Duration::days(10));
        assert!(seeds[0].private);
        assert_eq!(seeds[1].id, 2);
        assert_eq!(seeds[1].group_id, "Group2");
        assert!(!seeds[1].private);
    }
}
