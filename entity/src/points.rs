use sea_orm::entity::prelude::*;

/// Accumulated drop points for a single Discord user.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "points")]
pub struct Model {
    /// Discord user ID (stored as String).
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    #[sea_orm(default_value = 0)]
    pub score: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
