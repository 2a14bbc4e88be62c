pub use super::parcel::Entity as Parcel;
pub use super::payment::Entity as Payment;
pub use super::rider::Entity as Rider;
pub use super::tracking_log::Entity as TrackingLog;
pub use super::user::Entity as User;
