mod body_type;
mod geometry;

pub use self::body_type::BodyType;
pub use self::geometry::ShapeGeometry;
