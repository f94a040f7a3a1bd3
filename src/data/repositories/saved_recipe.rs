use crate::data::models::{Recipe, SavedRecipe};
use crate::schema::{recipes, saved_recipes};
use diesel::prelude::*;

pub struct SavedRecipeRepository;

impl SavedRecipeRepository {
    /// Saving twice is a no-op; returns whether a new bookmark was written.
    pub fn save(conn: &mut SqliteConnection, saved: &SavedRecipe) -> QueryResult<bool> {
        let inserted = diesel::insert_into(saved_recipes::table)
            .values(saved)
            .on_conflict((saved_recipes::recipe_id, saved_recipes::user_id))
            .do_nothing()
            .execute(conn)?;
        Ok(inserted > 0)
    }

    pub fn list_recipes_for_user(conn: &mut SqliteConnection, user_id: &str) -> QueryResult<Vec<Recipe>> {
        saved_recipes::table
            .inner_join(recipes::table)
            .filter(saved_recipes::user_id.eq(user_id))
            .select(Recipe::as_select())
            .order(recipes::id.asc())
            .load(conn)
    }

    pub fn remove(conn: &mut SqliteConnection, user_id: &str, recipe_id: i32) -> QueryResult<usize> {
        diesel::delete(saved_recipes::table.find((recipe_id, user_id))).execute(conn)
    }
}
