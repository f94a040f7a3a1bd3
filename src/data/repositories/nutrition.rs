use crate::data::models::{NewNutritionInfo, NutritionChanges, NutritionInfo};
use crate::schema::nutrition_info;
use diesel::prelude::*;

use super::last_insert_id;

pub struct NutritionRepository;

impl NutritionRepository {
    pub fn create(conn: &mut SqliteConnection, info: &NewNutritionInfo) -> QueryResult<i32> {
        conn.transaction(|conn| {
            diesel::insert_into(nutrition_info::table).values(info).execute(conn)?;
            last_insert_id(conn)
        })
    }

    pub fn find_by_id(conn: &mut SqliteConnection, id: i32) -> QueryResult<Option<NutritionInfo>> {
        nutrition_info::table
            .find(id)
            .select(NutritionInfo::as_select())
            .first(conn)
            .optional()
    }

    pub fn list_by_recipe(conn: &mut SqliteConnection, recipe_id: i32) -> QueryResult<Vec<NutritionInfo>> {
        nutrition_info::table
            .filter(nutrition_info::recipe_id.eq(recipe_id))
            .select(NutritionInfo::as_select())
            .order(nutrition_info::id.asc())
            .load(conn)
    }

    pub fn update(
        conn: &mut SqliteConnection,
        id: i32,
        changes: &NutritionChanges,
    ) -> QueryResult<usize> {
        diesel::update(nutrition_info::table.find(id)).set(changes).execute(conn)
    }

    pub fn delete(conn: &mut SqliteConnection, id: i32) -> QueryResult<usize> {
        diesel::delete(nutrition_info::table.find(id)).execute(conn)
    }
}
