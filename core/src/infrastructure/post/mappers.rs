use chrono::{TimeZone, Utc};

use crate::domain::post::entities::Post;
use crate::entity::posts::Model as PostModel;

impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        let created_at = Utc.from_utc_datetime(&model.created_at);
        let updated_at = Utc.from_utc_datetime(&model.updated_at);
        let deleted_at = model.deleted_at.map(|dt| dt.and_utc());
        Post {
            id: model.id,
            title: model.title,
            content: model.content,
            images: model.images,
            is_published: model.is_published,
            is_deleted: model.is_deleted,
            created_at,
            updated_at,
            deleted_at,
            created_by: model.created_by,
            updated_by: model.updated_by,
            deleted_by: model.deleted_by,
        }
    }
}

impl From<&PostModel> for Post {
    fn from(model: &PostModel) -> Self {
        let created_at = Utc.from_utc_datetime(&model.created_at);
        let updated_at = Utc.from_utc_datetime(&model.updated_at);
        let deleted_at = model.deleted_at.map(|dt| dt.and_utc());
        Post {
            id: model.id,
            title: model.title.clone(),
            content: model.content.clone(),
            images: model.images.clone(),
            is_published: model.is_published,
            is_deleted: model.is_deleted,
            created_at,
            updated_at,
            deleted_at,
            created_by: model.created_by,
            updated_by: model.updated_by,
            deleted_by: model.deleted_by,
        }
    }
}
