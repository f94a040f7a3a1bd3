pub mod auth;
pub mod feedback;
pub mod informacao_nutricional;
pub mod receitas;
pub mod receitas_salvas;
pub mod site;
pub mod usuario;

use chrono::{Local, NaiveDate};

/// Date used when a create payload leaves its date out.
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}
