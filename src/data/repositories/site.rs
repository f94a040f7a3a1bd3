use crate::data::models::{NewSite, Site, SiteChanges};
use crate::schema::sites;
use diesel::prelude::*;

use super::last_insert_id;

pub struct SiteRepository;

impl SiteRepository {
    pub fn create(conn: &mut SqliteConnection, site: &NewSite<'_>) -> QueryResult<i32> {
        conn.transaction(|conn| {
            diesel::insert_into(sites::table).values(site).execute(conn)?;
            last_insert_id(conn)
        })
    }

    pub fn find_by_id(conn: &mut SqliteConnection, id: i32) -> QueryResult<Option<Site>> {
        sites::table
            .find(id)
            .select(Site::as_select())
            .first(conn)
            .optional()
    }

    pub fn list(conn: &mut SqliteConnection) -> QueryResult<Vec<Site>> {
        sites::table
            .select(Site::as_select())
            .order(sites::id.asc())
            .load(conn)
    }

    pub fn update(conn: &mut SqliteConnection, id: i32, changes: &SiteChanges) -> QueryResult<usize> {
        diesel::update(sites::table.find(id)).set(changes).execute(conn)
    }

    pub fn delete(conn: &mut SqliteConnection, id: i32) -> QueryResult<usize> {
        diesel::delete(sites::table.find(id)).execute(conn)
    }
}
