use chrono::NaiveDate;
use diesel::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::schema::sites;

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug)]
#[diesel(table_name = sites)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Site {
    #[serde(rename = "id_site")]
    pub id: i32,
    #[serde(rename = "nome_site")]
    pub name: String,
    pub url: String,
    #[serde(rename = "descricao_site")]
    pub description: String,
    #[serde(rename = "data_site")]
    pub published_on: NaiveDate,
    #[serde(rename = "id_usuario")]
    pub user_id: String,
}

#[derive(Insertable)]
#[diesel(table_name = sites)]
pub struct NewSite<'a> {
    pub name: &'a str,
    pub url: &'a str,
    pub description: &'a str,
    pub published_on: NaiveDate,
    pub user_id: &'a str,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateSiteRequest {
    #[serde(rename = "nome_site")]
    #[validate(length(min = 1, max = 150))]
    pub name: String,
    #[validate(url, length(max = 225))]
    pub url: String,
    #[serde(rename = "descricao_site")]
    pub description: String,
    #[serde(rename = "data_site")]
    pub published_on: Option<NaiveDate>,
    #[serde(rename = "id_usuario")]
    pub user_id: String,
}

#[derive(Debug, Deserialize, Validate, AsChangeset)]
#[diesel(table_name = sites)]
#[serde(deny_unknown_fields)]
pub struct SiteChanges {
    #[serde(rename = "nome_site")]
    #[validate(length(min = 1, max = 150))]
    pub name: Option<String>,
    #[validate(url, length(max = 225))]
    pub url: Option<String>,
    #[serde(rename = "descricao_site")]
    pub description: Option<String>,
    #[serde(rename = "data_site")]
    pub published_on: Option<NaiveDate>,
}

impl SiteChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.url.is_none()
            && self.description.is_none()
            && self.published_on.is_none()
    }
}
