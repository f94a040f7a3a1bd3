use chrono::NaiveDate;
use diesel::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::schema::feedback;

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug)]
#[diesel(table_name = feedback)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Feedback {
    #[serde(rename = "id_feedback")]
    pub id: i32,
    #[serde(rename = "comentario")]
    pub comment: String,
    #[serde(rename = "avaliacao")]
    pub rating: i32,
    #[serde(rename = "data_feedback")]
    pub created_on: NaiveDate,
    #[serde(rename = "qtd_curtidas")]
    pub like_count: i32,
    #[serde(rename = "id_receita")]
    pub recipe_id: i32,
    #[serde(rename = "id_usuario")]
    pub user_id: String,
}

#[derive(Insertable)]
#[diesel(table_name = feedback)]
pub struct NewFeedback<'a> {
    pub comment: &'a str,
    pub rating: i32,
    pub created_on: NaiveDate,
    pub recipe_id: i32,
    pub user_id: &'a str,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateFeedbackRequest {
    #[serde(rename = "comentario")]
    pub comment: String,
    #[serde(rename = "avaliacao")]
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,
    #[serde(rename = "data_feedback")]
    pub created_on: Option<NaiveDate>,
    #[serde(rename = "id_receita")]
    pub recipe_id: i32,
    #[serde(rename = "id_usuario")]
    pub user_id: String,
}

/// Like count only moves through the like endpoint.
#[derive(Debug, Deserialize, Validate, AsChangeset)]
#[diesel(table_name = feedback)]
#[serde(deny_unknown_fields)]
pub struct FeedbackChanges {
    #[serde(rename = "comentario")]
    pub comment: Option<String>,
    #[serde(rename = "avaliacao")]
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: Option<i32>,
}

impl FeedbackChanges {
    pub fn is_empty(&self) -> bool {
        self.comment.is_none() && self.rating.is_none()
    }
}
