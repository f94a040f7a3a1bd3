use diesel::{Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};

use crate::schema::saved_recipes;

#[derive(Queryable, Selectable, Identifiable, Insertable, Serialize, Deserialize, Debug)]
#[diesel(table_name = saved_recipes)]
#[diesel(primary_key(recipe_id, user_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(deny_unknown_fields)]
pub struct SavedRecipe {
    #[serde(rename = "id_receita")]
    pub recipe_id: i32,
    #[serde(rename = "id_usuario")]
    pub user_id: String,
}
