use crate::data::models::{NewUser, User, UserChanges};
use crate::schema::users;
use diesel::prelude::*;

pub struct UserRepository;

impl UserRepository {
    pub fn find_by_id(
        conn: &mut SqliteConnection,
        id: &str,
    ) -> Result<Option<User>, diesel::result::Error> {
        users::table
            .find(id)
            .select(User::as_select())
            .first(conn)
            .optional()
    }

    pub fn find_by_email(
        conn: &mut SqliteConnection,
        email: &str,
    ) -> Result<Option<User>, diesel::result::Error> {
        users::table
            .filter(users::email.eq(email))
            .select(User::as_select())
            .first(conn)
            .optional()
    }

    pub fn email_exists(
        conn: &mut SqliteConnection,
        email: &str,
    ) -> Result<bool, diesel::result::Error> {
        use diesel::dsl::exists;
        use diesel::select;

        select(exists(users::table.filter(users::email.eq(email)))).get_result(conn)
    }

    /// `user.password_hash` must already be hashed.
    pub fn create(
        conn: &mut SqliteConnection,
        user: &NewUser<'_>,
    ) -> Result<(), diesel::result::Error> {
        diesel::insert_into(users::table).values(user).execute(conn)?;
        Ok(())
    }

    /// Returns the number of rows touched; zero means no such user.
    pub fn update(
        conn: &mut SqliteConnection,
        id: &str,
        changes: &UserChanges,
    ) -> Result<usize, diesel::result::Error> {
        diesel::update(users::table.find(id)).set(changes).execute(conn)
    }

    pub fn delete(conn: &mut SqliteConnection, id: &str) -> Result<usize, diesel::result::Error> {
        diesel::delete(users::table.find(id)).execute(conn)
    }
}
