use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_uuid_v7;
use crate::domain::post::value_objects::UpdatePostInput;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub images: Vec<String>,
    pub is_published: bool,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_by: Uuid,
    pub updated_by: Uuid,
    pub deleted_by: Option<Uuid>,
}

impl Post {
    pub fn new(
        title: String,
        content: String,
        images: Vec<String>,
        is_published: bool,
        created_by: Uuid,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: generate_uuid_v7(),
            title,
            content,
            images,
            is_published,
            is_deleted: false,
            created_at: now,
            updated_at: now,
            deleted_at: None,
            created_by,
            updated_by: created_by,
            deleted_by: None,
        }
    }

    pub fn apply_update(&mut self, input: UpdatePostInput, updated_by: Uuid) {
        if let Some(title) = input.title {
            self.title = title;
        }
        if let Some(content) = input.content {
            self.content = content;
        }
        if let Some(images) = input.images {
            self.images = images;
        }
        if let Some(is_published) = input.is_published {
            self.is_published = is_published;
        }
        self.updated_by = updated_by;
        self.updated_at = Utc::now();
    }

    pub fn soft_delete(&mut self, deleted_by: Uuid) {
        self.is_deleted = true;
        self.deleted_at = Some(Utc::now());
        self.deleted_by = Some(deleted_by);
        self.updated_at = Utc::now();
        self.updated_by = deleted_by;
    }
}
