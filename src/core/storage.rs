use std::collections::HashMap;
use crate::core::BodyHandle;
use crate::error::PhysicsError;
use crate::Result;

/// Handle-keyed storage for physics bodies
pub struct BodyStorage<T> {
    items: HashMap<BodyHandle, T>,
    next_id: u32,
}

impl<T> BodyStorage<T> {
    /// Creates a new empty storage
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
            next_id: 1, // Start at 1, so 0 can represent invalid handle
        }
    }

    /// Adds an item to the storage and returns its handle
    pub fn add(&mut self, item: T) -> BodyHandle {
        let handle = BodyHandle(self.next_id);
        self.next_id += 1;
        self.items.insert(handle, item);
        handle
    }

    /// Removes an item from the storage
    pub fn remove(&mut self, handle: BodyHandle) -> Result<T> {
        self.items.remove(&handle).ok_or_else(|| not_found(handle))
    }

    /// Gets a body by its handle, returning an error if not found
    pub fn get_body(&self, handle: BodyHandle) -> Result<&T> {
        self.items.get(&handle).ok_or_else(|| not_found(handle))
    }

    /// Gets a mutable reference to a body by its handle, returning an error if not found
    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut T> {
        self.items.get_mut(&handle).ok_or_else(|| not_found(handle))
    }

    /// Returns the number of items in the storage
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the storage is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Clears all items from the storage
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns all handles in ascending order
    pub fn handles(&self) -> Vec<BodyHandle> {
        let mut handles: Vec<BodyHandle> = self.items.keys().copied().collect();
        handles.sort();
        handles
    }

    /// Returns an iterator over all items
    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &T)> + '_ {
        self.items.iter().map(|(h, item)| (*h, item))
    }

    /// Returns a mutable iterator over all items
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (BodyHandle, &mut T)> + '_ {
        self.items.iter_mut().map(|(h, item)| (*h, item))
    }
}

impl<T> Default for BodyStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(handle: BodyHandle) -> PhysicsError {
    PhysicsError::ResourceNotFound(format!("Body with handle {:?} not found", handle))
}
