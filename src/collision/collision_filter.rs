use crate::bodies::PhysicsBody;

/// Decides whether two bodies should be tested for collision
///
/// The physics core only stores body and collide identifiers; the consumer
/// owns the filtering policy and may supply its own implementation.
pub trait CollisionFilter: Send + Sync {
    /// Returns whether the two bodies should be tested for collision
    fn should_collide(&self, body_a: &PhysicsBody, body_b: &PhysicsBody) -> bool;
}

/// A filter that treats body identifiers as groups and collide identifiers
/// as masks
#[derive(Debug, Clone, Copy)]
pub struct GroupMaskFilter {
    /// When set, both bodies must accept each other; otherwise one side is
    /// enough
    require_mutual: bool,
}

impl GroupMaskFilter {
    /// Creates a filter that requires both bodies to accept each other
    pub fn new() -> Self {
        Self { require_mutual: true }
    }

    /// Creates a filter where either body accepting the other is enough
    pub fn one_sided() -> Self {
        Self { require_mutual: false }
    }

    /// Returns whether `body`'s collide mask contains `other`'s body id
    pub fn accepts(body: &PhysicsBody, other: &PhysicsBody) -> bool {
        body.get_collide_id() & other.get_body_id() != 0
    }
}

impl Default for GroupMaskFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl CollisionFilter for GroupMaskFilter {
    fn should_collide(&self, body_a: &PhysicsBody, body_b: &PhysicsBody) -> bool {
        let a_accepts_b = Self::accepts(body_a, body_b);
        let b_accepts_a = Self::accepts(body_b, body_a);

        if self.require_mutual {
            a_accepts_b && b_accepts_a
        } else {
            a_accepts_b || b_accepts_a
        }
    }
}
