//! An undirected friendship graph with breadth-first reachability queries.
//!
//! People live in an arena (a [`Registry`]) and refer to each other through [`PersonId`]
//! handles, so the friendship relation can be as cyclic as it likes without any `Rc` or
//! `RefCell` in sight. A [`FriendGraph`] owns that arena, tracks which people are members of the
//! graph, and is the only thing allowed to change who is friends with whom. That keeps the
//! relation symmetric: if Harry is Ron's friend, Ron is Harry's friend.
//!
//! ```
//! use friendgraph::{FriendGraph, Person};
//!
//! let mut graph = FriendGraph::new();
//! let harry = graph.create(Person::new("Harry"))?;
//! let ron = graph.create(Person::new("Ron"))?;
//! let draco = graph.create(Person::new("Draco"))?;
//! graph.add_people([harry, ron, draco])?;
//!
//! graph.set_friends(harry, ron)?;
//! assert!(graph.are_connected(ron, harry));
//! assert!(!graph.are_connected(harry, draco));
//! # Ok::<(), friendgraph::Error>(())
//! ```

use std::marker::PhantomData;

pub mod error;
pub mod graph;
pub mod id;
pub mod iter;
pub mod person;


pub use error::{Error, InvalidArgument, Result};
pub use graph::{make_friendship, make_simple_friendship, FriendGraph};
pub use id::{Id, IdTrait};
pub use person::{Person, PersonId};

use iter::{Ids, Iter, Values};

/// An append-only arena that hands out a typed [`Id`] for every element inserted into it.
///
/// Elements are never removed, so an ID stays valid for as long as the registry lives.
#[derive(Clone, Debug)]
pub struct Registry<T, ID: IdTrait = Id<T>> {
    values: Vec<T>,
    _phantom: PhantomData<fn() -> ID>,
}

impl<T> Registry<T, Id<T>> {
    /// Construct a new, empty `Registry<T>` with the default [`Id`] type.
    ///
    /// The registry will not allocate until elements are inserted into it.
    pub fn new() -> Self {
        Self::with_id_type()
    }

    /// Construct a new, empty `Registry<T>` with the default `Id` type and with at least the
    /// specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_id_type_and_capacity(capacity)
    }
}

impl<T> Default for Registry<T, Id<T>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, ID: IdTrait> Registry<T, ID> {
    /// Construct a new, empty `Registry<T>` with a custom ID type.
    ///
    /// The registry will not allocate until elements are inserted into it.
    pub fn with_id_type() -> Self {
        Self::with_id_type_and_capacity(0)
    }

    /// Construct a new, empty `Registry<T>` with a custom ID type and with at least the specified
    /// capacity.
    pub fn with_id_type_and_capacity(capacity: usize) -> Self {
        id::static_assert_index_bits::<ID::IndexBits>();
        let capacity = capacity.min(ID::max_len() as usize);
        Self {
            values: Vec::with_capacity(capacity),
            _phantom: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.values.capacity()
    }

    /// `false` for the null ID and for any ID this registry never issued.
    pub fn contains_id(&self, id: ID) -> bool {
        !id.is_null() && (id.index() as usize) < self.values.len()
    }

    pub fn get(&self, id: ID) -> Option<&T> {
        if id.is_null() {
            return None;
        }
        self.values.get(id.index() as usize)
    }

    pub fn get_mut(&mut self, id: ID) -> Option<&mut T> {
        if id.is_null() {
            return None;
        }
        self.values.get_mut(id.index() as usize)
    }

    /// Move `value` into the registry and return its new ID.
    ///
    /// # Panics
    ///
    /// Panics if every index representable by `ID` is already in use.
    pub fn insert(&mut self, value: T) -> ID {
        // Panic if the index space is full.
        assert!(
            (self.values.len() as u64) < ID::max_len() as u64,
            "all slots occupied",
        );
        let index = self.values.len() as u32;
        self.values.push(value);
        // The assert above keeps index strictly below max_len.
        unsafe { ID::new_unchecked(index) }
    }

    /// Iterate over `(ID, &T)` in insertion order.
    pub fn iter(&self) -> Iter<'_, T, ID> {
        Iter {
            registry: self,
            index: 0,
        }
    }

    pub fn ids(&self) -> Ids<'_, T, ID> {
        Ids { inner: self.iter() }
    }

    pub fn values(&self) -> Values<'_, T, ID> {
        Values { inner: self.iter() }
    }
}

impl<T, ID: IdTrait> std::ops::Index<ID> for Registry<T, ID> {
    type Output = T;

    fn index(&self, id: ID) -> &T {
        match self.get(id) {
            Some(value) => value,
            None => panic!("{:?} is not in this registry", id),
        }
    }
}

impl<T, ID: IdTrait> std::ops::IndexMut<ID> for Registry<T, ID> {
    fn index_mut(&mut self, id: ID) -> &mut T {
        match self.get_mut(id) {
            Some(value) => value,
            None => panic!("{:?} is not in this registry", id),
        }
    }
}
