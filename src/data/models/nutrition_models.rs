use diesel::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};

use super::amount::Amount;
use crate::schema::nutrition_info;

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug)]
#[diesel(table_name = nutrition_info)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct NutritionInfo {
    #[serde(rename = "id_info")]
    pub id: i32,
    #[serde(rename = "carboidratos")]
    pub carbs: Amount,
    #[serde(rename = "proteinas")]
    pub protein: Amount,
    #[serde(rename = "sodio")]
    pub sodium: Amount,
    #[serde(rename = "gorduras_trans")]
    pub trans_fat: Amount,
    #[serde(rename = "gordura_saturada")]
    pub saturated_fat: Amount,
    #[serde(rename = "fibra_alimentar")]
    pub fiber: Amount,
    #[serde(rename = "id_receita")]
    pub recipe_id: i32,
}

/// Amounts are range-checked while deserializing, see [`Amount`].
#[derive(Debug, Deserialize, Insertable)]
#[diesel(table_name = nutrition_info)]
#[serde(deny_unknown_fields)]
pub struct NewNutritionInfo {
    #[serde(rename = "carboidratos")]
    pub carbs: Amount,
    #[serde(rename = "proteinas")]
    pub protein: Amount,
    #[serde(rename = "sodio")]
    pub sodium: Amount,
    #[serde(rename = "gorduras_trans")]
    pub trans_fat: Amount,
    #[serde(rename = "gordura_saturada")]
    pub saturated_fat: Amount,
    #[serde(rename = "fibra_alimentar")]
    pub fiber: Amount,
    #[serde(rename = "id_receita")]
    pub recipe_id: i32,
}

#[derive(Debug, Deserialize, AsChangeset)]
#[diesel(table_name = nutrition_info)]
#[serde(deny_unknown_fields)]
pub struct NutritionChanges {
    #[serde(rename = "carboidratos")]
    pub carbs: Option<Amount>,
    #[serde(rename = "proteinas")]
    pub protein: Option<Amount>,
    #[serde(rename = "sodio")]
    pub sodium: Option<Amount>,
    #[serde(rename = "gorduras_trans")]
    pub trans_fat: Option<Amount>,
    #[serde(rename = "gordura_saturada")]
    pub saturated_fat: Option<Amount>,
    #[serde(rename = "fibra_alimentar")]
    pub fiber: Option<Amount>,
}

impl NutritionChanges {
    pub fn is_empty(&self) -> bool {
        [
            self.carbs,
            self.protein,
            self.sodium,
            self.trans_fat,
            self.saturated_fat,
            self.fiber,
        ]
        .iter()
        .all(Option::is_none)
    }
}
