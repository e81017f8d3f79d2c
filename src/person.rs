//! people, the nodes of a [`FriendGraph`](crate::FriendGraph)

use crate::{Id, IdTrait, InvalidArgument, Result};
use hashbrown::HashSet;
use std::fmt;

/// A handle to a [`Person`] owned by a [`FriendGraph`](crate::FriendGraph).
///
/// A handle only means something to the graph that created it. Handles are plain indexes into
/// that graph's arena, so another graph rejects one only if the index is out of its range;
/// otherwise it silently refers to whoever holds that index there.
pub type PersonId = Id<Person>;

/// Someone in a friendship graph.
///
/// Names don't have to be unique. Two people called "Ron" are still two different people, because
/// the graph tells them apart by [`PersonId`], never by name.
///
/// A `Person` can be built with an initial set of friends, but after that the only way to change
/// who their friends are is [`FriendGraph::set_friends`](crate::FriendGraph::set_friends).
#[derive(Clone)]
pub struct Person {
    name: String,
    adjacent: HashSet<PersonId>,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_adjacent(name, HashSet::new())
    }

    /// Build a person who is already friends with everyone in `adjacent`.
    ///
    /// The IDs are checked, and the friendships made mutual, when the person is handed to
    /// [`FriendGraph::create`](crate::FriendGraph::create).
    pub fn with_adjacent(name: impl Into<String>, adjacent: HashSet<PersonId>) -> Self {
        Self {
            name: name.into(),
            adjacent,
        }
    }

    /// Like [`with_adjacent`](Person::with_adjacent), but accepts any sequence of IDs.
    ///
    /// The sequence must still be a set. Repeating an ID, or passing the null ID, is an
    /// [`InvalidArgument`] error.
    ///
    /// ```
    /// use friendgraph::{Error, IdTrait, InvalidArgument, Person, PersonId};
    ///
    /// let ron = PersonId::new(0).unwrap();
    /// let err = Person::try_with_adjacent("Harry", [ron, ron]).unwrap_err();
    /// assert_eq!(err, Error::InvalidArgument(InvalidArgument::DuplicateAdjacent(0)));
    /// ```
    pub fn try_with_adjacent(
        name: impl Into<String>,
        adjacent: impl IntoIterator<Item = PersonId>,
    ) -> Result<Self> {
        let mut set = HashSet::new();
        for id in adjacent {
            if id.is_null() {
                return Err(InvalidArgument::NullId.into());
            }
            if !set.insert(id) {
                return Err(InvalidArgument::DuplicateAdjacent(id.index()).into());
            }
        }
        Ok(Self::with_adjacent(name, set))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn adjacent(&self) -> &HashSet<PersonId> {
        &self.adjacent
    }

    pub fn degree(&self) -> usize {
        self.adjacent.len()
    }

    pub fn is_adjacent_to(&self, id: PersonId) -> bool {
        self.adjacent.contains(&id)
    }

    // Only FriendGraph calls this. set_friends links both directions; create links the reverse
    // direction for each friend the new person already lists.
    pub(crate) fn link(&mut self, friend: PersonId) -> bool {
        self.adjacent.insert(friend)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Debug for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Person: {}>", self.name)
    }
}
