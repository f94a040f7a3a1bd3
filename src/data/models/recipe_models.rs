use chrono::NaiveDate;
use diesel::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::schema::recipes;

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug)]
#[diesel(table_name = recipes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Recipe {
    #[serde(rename = "id_receita")]
    pub id: i32,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "ingredientes")]
    pub ingredients: String,
    #[serde(rename = "nome_receita")]
    pub name: String,
    #[serde(rename = "descricao_receita")]
    pub description: String,
    #[serde(rename = "armazenamento_ftvd")]
    pub storage_note: String,
    #[serde(rename = "data_receita")]
    pub published_on: NaiveDate,
    #[serde(rename = "id_site")]
    pub site_id: i32,
    #[serde(rename = "id_usuario")]
    pub user_id: String,
}

#[derive(Insertable)]
#[diesel(table_name = recipes)]
pub struct NewRecipe<'a> {
    pub category: &'a str,
    pub ingredients: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    pub storage_note: &'a str,
    pub published_on: NaiveDate,
    pub site_id: i32,
    pub user_id: &'a str,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateRecipeRequest {
    #[serde(rename = "categoria")]
    #[validate(length(min = 1, max = 100))]
    pub category: String,
    #[serde(rename = "ingredientes")]
    #[validate(length(min = 1))]
    pub ingredients: String,
    #[serde(rename = "nome_receita")]
    #[validate(length(min = 1, max = 30))]
    pub name: String,
    #[serde(rename = "descricao_receita")]
    pub description: String,
    #[serde(rename = "armazenamento_ftvd")]
    #[validate(length(max = 150))]
    pub storage_note: String,
    #[serde(rename = "data_receita")]
    pub published_on: Option<NaiveDate>,
    #[serde(rename = "id_site")]
    pub site_id: i32,
    #[serde(rename = "id_usuario")]
    pub user_id: String,
}

/// Owner and site are fixed at creation.
#[derive(Debug, Deserialize, Validate, AsChangeset)]
#[diesel(table_name = recipes)]
#[serde(deny_unknown_fields)]
pub struct RecipeChanges {
    #[serde(rename = "categoria")]
    #[validate(length(min = 1, max = 100))]
    pub category: Option<String>,
    #[serde(rename = "ingredientes")]
    #[validate(length(min = 1))]
    pub ingredients: Option<String>,
    #[serde(rename = "nome_receita")]
    #[validate(length(min = 1, max = 30))]
    pub name: Option<String>,
    #[serde(rename = "descricao_receita")]
    pub description: Option<String>,
    #[serde(rename = "armazenamento_ftvd")]
    #[validate(length(max = 150))]
    pub storage_note: Option<String>,
    #[serde(rename = "data_receita")]
    pub published_on: Option<NaiveDate>,
}

impl RecipeChanges {
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.ingredients.is_none()
            && self.name.is_none()
            && self.description.is_none()
            && self.storage_note.is_none()
            && self.published_on.is_none()
    }
}

#[derive(Debug, Deserialize)]
pub struct RecipeFilter {
    #[serde(rename = "categoria")]
    pub category: Option<String>,
}
