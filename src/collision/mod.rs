pub mod collision_ids;
pub mod collision_filter;

pub use self::collision_ids::{CollisionCategory, CollisionGroups, CollisionIds};
pub use self::collision_filter::{CollisionFilter, GroupMaskFilter};
