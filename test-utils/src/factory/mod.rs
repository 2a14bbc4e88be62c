//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let admin = factory::user::UserFactory::new(db)
//!     .email("admin@example.com")
//!     .role("admin")
//!     .build()
//!     .await?;
//!
//! let parcel = factory::parcel::ParcelFactory::new(db)
//!     .created_by("sender@example.com")
//!     .delivery_status("in_transit")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user accounts
//! - `parcel` - Create parcel records
//! - `rider` - Create rider applications
//! - `payment` - Create payment records
//! - `helpers` - Unique id generation shared by all factories

pub mod helpers;
pub mod parcel;
pub mod payment;
pub mod rider;
pub mod user;

pub use parcel::create_parcel;
pub use payment::create_payment;
pub use rider::create_rider;
pub use user::create_user;
