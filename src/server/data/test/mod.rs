mod parcel;
mod payment;
mod rider;
mod tracking;
mod user;
