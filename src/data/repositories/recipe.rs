use crate::data::models::{NewRecipe, Recipe, RecipeChanges};
use crate::schema::recipes;
use diesel::prelude::*;

use super::last_insert_id;

pub struct RecipeRepository;

impl RecipeRepository {
    pub fn create(conn: &mut SqliteConnection, recipe: &NewRecipe<'_>) -> QueryResult<i32> {
        conn.transaction(|conn| {
            diesel::insert_into(recipes::table).values(recipe).execute(conn)?;
            last_insert_id(conn)
        })
    }

    pub fn find_by_id(conn: &mut SqliteConnection, id: i32) -> QueryResult<Option<Recipe>> {
        recipes::table
            .find(id)
            .select(Recipe::as_select())
            .first(conn)
            .optional()
    }

    pub fn list(conn: &mut SqliteConnection, category: Option<&str>) -> QueryResult<Vec<Recipe>> {
        let mut query = recipes::table
            .select(Recipe::as_select())
            .order(recipes::id.asc())
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(category) = category {
            query = query.filter(recipes::category.eq(category));
        }

        query.load(conn)
    }

    pub fn list_by_site(conn: &mut SqliteConnection, site_id: i32) -> QueryResult<Vec<Recipe>> {
        recipes::table
            .filter(recipes::site_id.eq(site_id))
            .select(Recipe::as_select())
            .order(recipes::id.asc())
            .load(conn)
    }

    pub fn update(conn: &mut SqliteConnection, id: i32, changes: &RecipeChanges) -> QueryResult<usize> {
        diesel::update(recipes::table.find(id)).set(changes).execute(conn)
    }

    /// Nutrition rows and bookmarks go with the recipe; feedback blocks it.
    pub fn delete(conn: &mut SqliteConnection, id: i32) -> QueryResult<usize> {
        diesel::delete(recipes::table.find(id)).execute(conn)
    }
}
