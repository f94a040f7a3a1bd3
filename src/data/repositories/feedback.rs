use crate::data::models::{Feedback, FeedbackChanges, NewFeedback};
use crate::schema::feedback;
use diesel::prelude::*;

use super::last_insert_id;

pub struct FeedbackRepository;

impl FeedbackRepository {
    pub fn create(conn: &mut SqliteConnection, entry: &NewFeedback<'_>) -> QueryResult<i32> {
        conn.transaction(|conn| {
            diesel::insert_into(feedback::table).values(entry).execute(conn)?;
            last_insert_id(conn)
        })
    }

    pub fn find_by_id(conn: &mut SqliteConnection, id: i32) -> QueryResult<Option<Feedback>> {
        feedback::table
            .find(id)
            .select(Feedback::as_select())
            .first(conn)
            .optional()
    }

    /// Newest first.
    pub fn list_by_recipe(conn: &mut SqliteConnection, recipe_id: i32) -> QueryResult<Vec<Feedback>> {
        feedback::table
            .filter(feedback::recipe_id.eq(recipe_id))
            .select(Feedback::as_select())
            .order((feedback::created_on.desc(), feedback::id.desc()))
            .load(conn)
    }

    pub fn update(conn: &mut SqliteConnection, id: i32, changes: &FeedbackChanges) -> QueryResult<usize> {
        diesel::update(feedback::table.find(id)).set(changes).execute(conn)
    }

    /// Single statement, so concurrent likes are never lost.
    pub fn add_like(conn: &mut SqliteConnection, id: i32) -> QueryResult<usize> {
        diesel::update(feedback::table.find(id))
            .set(feedback::like_count.eq(feedback::like_count + 1))
            .execute(conn)
    }

    pub fn delete(conn: &mut SqliteConnection, id: i32) -> QueryResult<usize> {
        diesel::delete(feedback::table.find(id)).execute(conn)
    }
}
