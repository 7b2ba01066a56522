use bitflags::bitflags;
use std::fmt;
use std::str::FromStr;

use crate::error::PhysicsError;
use crate::Result;

bitflags! {
    /// One bit per collision category
    ///
    /// A body's category identifier is the bit value of its group, so several
    /// identifiers can be OR-ed into a collide mask.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CollisionGroups: u32 {
        const PLAYER      = 0x0000_0001;
        const ENVIRONMENT = 0x0000_0002;
        const ENEMY       = 0x0000_0004;
        const BULLET      = 0x0000_0008;
        const PICKUP      = 0x0000_0010;
        const ACID        = 0x0000_0020;
        const WIN         = 0x0000_0040;
    }
}

/// The fixed set of collision categories used by gameplay code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionCategory {
    Player,
    Environment,
    Enemy,
    Bullet,
    Pickup,
    Acid,
    Win,
}

impl CollisionCategory {
    /// Every category, in declaration order
    pub const ALL: [CollisionCategory; 7] = [
        CollisionCategory::Player,
        CollisionCategory::Environment,
        CollisionCategory::Enemy,
        CollisionCategory::Bullet,
        CollisionCategory::Pickup,
        CollisionCategory::Acid,
        CollisionCategory::Win,
    ];

    /// The category's name as gameplay code and data files spell it
    pub fn name(self) -> &'static str {
        match self {
            CollisionCategory::Player => "Player",
            CollisionCategory::Environment => "Environment",
            CollisionCategory::Enemy => "Enemy",
            CollisionCategory::Bullet => "Bullet",
            CollisionCategory::Pickup => "Pickup",
            CollisionCategory::Acid => "Acid",
            CollisionCategory::Win => "Win",
        }
    }

    /// The group bit belonging to this category
    pub fn group(self) -> CollisionGroups {
        match self {
            CollisionCategory::Player => CollisionGroups::PLAYER,
            CollisionCategory::Environment => CollisionGroups::ENVIRONMENT,
            CollisionCategory::Enemy => CollisionGroups::ENEMY,
            CollisionCategory::Bullet => CollisionGroups::BULLET,
            CollisionCategory::Pickup => CollisionGroups::PICKUP,
            CollisionCategory::Acid => CollisionGroups::ACID,
            CollisionCategory::Win => CollisionGroups::WIN,
        }
    }
}

impl fmt::Display for CollisionCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CollisionCategory {
    type Err = PhysicsError;

    fn from_str(name: &str) -> Result<Self> {
        CollisionCategory::ALL
            .into_iter()
            .find(|category| category.name() == name)
            .ok_or_else(|| PhysicsError::InvalidParameter(format!("unknown collision category '{}'", name)))
    }
}

/// Table mapping every collision category to its identifier
///
/// Built once at startup and then only read. Identifiers are stable for the
/// lifetime of the table and distinct between categories.
#[derive(Debug, Clone)]
pub struct CollisionIds {
    table: [(CollisionCategory, u32); 7],
}

impl CollisionIds {
    /// Builds the identifier table
    pub fn new() -> Self {
        Self {
            table: CollisionCategory::ALL.map(|category| (category, category.group().bits())),
        }
    }

    /// Returns the identifier of a category
    pub fn id(&self, category: CollisionCategory) -> u32 {
        // Rows are laid out in `CollisionCategory::ALL` order
        self.table[category as usize].1
    }

    /// Looks up a category identifier by name
    pub fn category_id(&self, name: &str) -> Result<u32> {
        let category: CollisionCategory = name.parse()?;
        Ok(self.id(category))
    }

    /// Returns the category an identifier belongs to, if any
    pub fn category_of(&self, id: u32) -> Option<CollisionCategory> {
        self.table
            .iter()
            .find(|(_, entry)| *entry == id)
            .map(|(category, _)| *category)
    }

    /// Combines several categories into a collide mask
    pub fn mask(&self, categories: &[CollisionCategory]) -> u32 {
        categories.iter().fold(0, |mask, category| mask | self.id(*category))
    }
}

impl Default for CollisionIds {
    fn default() -> Self {
        Self::new()
    }
}
