use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "parcel")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub created_by: Option<String>,
    pub payment_status: String,
    pub delivery_status: String,
    pub assigned_rider_id: Option<Uuid>,
    pub assigned_rider_name: Option<String>,
    pub cashout_status: Option<String>,
    pub details: Json,
    pub created_at: DateTimeUtc,
    pub picked_at: Option<DateTimeUtc>,
    pub delivered_at: Option<DateTimeUtc>,
    pub cashed_out_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
