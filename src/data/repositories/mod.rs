pub mod feedback;
pub mod nutrition;
pub mod recipe;
pub mod saved_recipe;
pub mod site;
pub mod user;

pub use feedback::FeedbackRepository;
pub use nutrition::NutritionRepository;
pub use recipe::RecipeRepository;
pub use saved_recipe::SavedRecipeRepository;
pub use site::SiteRepository;
pub use user::UserRepository;

use diesel::prelude::*;
use diesel::sql_types::Integer;

/// Row id generated by the last insert on this connection.
pub(crate) fn last_insert_id(conn: &mut SqliteConnection) -> QueryResult<i32> {
    diesel::select(diesel::dsl::sql::<Integer>("last_insert_rowid()")).get_result::<i32>(conn)
}
