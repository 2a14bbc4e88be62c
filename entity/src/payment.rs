use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "payment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Weak reference to the paid parcel; not enforced as a foreign key.
    pub parcel_id: Uuid,
    pub email: String,
    #[sea_orm(column_type = "Double")]
    pub amount: f64,
    pub payment_method: Option<String>,
    pub transaction_id: Option<String>,
    pub paid_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
