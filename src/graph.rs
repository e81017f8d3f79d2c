//! the friendship graph and its breadth-first reachability query

use crate::iter::{Bfs, Names, People};
use crate::{IdTrait, InvalidArgument, Person, PersonId, Registry, Result};
use hashbrown::HashSet;
use std::fmt;
use std::io::{self, Write};
use tracing::{debug, trace};

/// A set of people and the friendships between them.
///
/// The graph owns every [`Person`] it [`create`](FriendGraph::create)s, in an arena indexed by
/// [`PersonId`]. Being in the arena is not the same as being a *member* of the graph: membership
/// is what [`add_person`](FriendGraph::add_person) records, and it's what
/// [`people`](FriendGraph::people) and [`print_friends`](FriendGraph::print_friends) enumerate.
/// Friendships can be set between any two people in the arena, members or not.
///
/// Friendship is always mutual. [`set_friends`](FriendGraph::set_friends) is the only mutator of
/// a person's friends, and it updates both sides at once.
#[derive(Clone, Default)]
pub struct FriendGraph {
    people: Registry<Person>,
    nodes: HashSet<PersonId>,
}

impl FriendGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct an empty graph with room for at least `capacity` people before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            people: Registry::with_capacity(capacity),
            nodes: HashSet::with_capacity(capacity),
        }
    }

    fn check(&self, id: PersonId) -> Result<()> {
        if id.is_null() {
            Err(InvalidArgument::NullId.into())
        } else if !self.people.contains_id(id) {
            Err(InvalidArgument::UnknownPerson(id.index()).into())
        } else {
            Ok(())
        }
    }

    /// Move `person` into the graph's arena and return their ID. This does *not* make them a
    /// member; see [`add_person`](FriendGraph::add_person).
    ///
    /// If `person` was built with friends already, every one of those IDs must refer to someone
    /// created earlier, and each of those people gets `person` added to their own friends.
    pub fn create(&mut self, person: Person) -> Result<PersonId> {
        for &friend in person.adjacent() {
            self.check(friend)?;
        }
        let friends: Vec<PersonId> = person.adjacent().iter().copied().collect();
        let id = self.people.insert(person);
        for friend in friends {
            self.people[friend].link(id);
        }
        debug!(person = %self.people[id], index = id.index(), "created person");
        Ok(id)
    }

    /// Make someone a member of the graph. Returns `true` if they weren't one already.
    pub fn add_person(&mut self, id: PersonId) -> Result<bool> {
        self.check(id)?;
        let added = self.nodes.insert(id);
        if added {
            debug!(person = %self.people[id], "added person");
        }
        Ok(added)
    }

    /// Add each of `ids` with [`add_person`](FriendGraph::add_person). If any ID is invalid,
    /// nobody is added.
    pub fn add_people(&mut self, ids: impl IntoIterator<Item = PersonId>) -> Result<()> {
        let ids: Vec<PersonId> = ids.into_iter().collect();
        for &id in &ids {
            self.check(id)?;
        }
        for id in ids {
            self.add_person(id)?;
        }
        Ok(())
    }

    /// Make two people friends with each other. Setting the same friendship twice changes
    /// nothing. Neither person needs to be a member of the graph.
    pub fn set_friends(&mut self, person1: PersonId, person2: PersonId) -> Result<()> {
        self.check(person1)?;
        self.check(person2)?;
        self.people[person1].link(person2);
        self.people[person2].link(person1);
        debug!(
            person1 = %self.people[person1],
            person2 = %self.people[person2],
            "set friends"
        );
        Ok(())
    }

    /// Is there a chain of friendships, of any length, from `person1` to `person2`?
    ///
    /// Everyone is connected to themselves. The search is breadth-first and stops as soon as it
    /// reaches `person2`. An ID this graph never issued has no friends, so it's only connected to
    /// itself.
    ///
    /// ```
    /// # use friendgraph::{FriendGraph, Person};
    /// let mut graph = FriendGraph::new();
    /// let [a, b, c, d] = ["A", "B", "C", "D"].map(|name| graph.create(Person::new(name)).unwrap());
    /// graph.set_friends(a, b)?;
    /// graph.set_friends(b, c)?;
    /// assert!(graph.are_connected(a, c));
    /// assert!(graph.are_connected(d, d));
    /// assert!(!graph.are_connected(a, d));
    /// # Ok::<(), friendgraph::Error>(())
    /// ```
    pub fn are_connected(&self, person1: PersonId, person2: PersonId) -> bool {
        self.bfs(person1).any(|id| {
            if let Some(person) = self.people.get(id) {
                trace!(%person, "checking");
            }
            id == person2
        })
    }

    /// Walk everyone reachable from `start` in breadth-first order, starting with `start`.
    pub fn bfs(&self, start: PersonId) -> Bfs<'_> {
        Bfs::new(&self.people, start)
    }

    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.people.get(id)
    }

    /// Is `id` a member of the graph?
    pub fn contains(&self, id: PersonId) -> bool {
        self.nodes.contains(&id)
    }

    /// The number of members.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every member's ID, in no particular order.
    pub fn people(&self) -> People<'_> {
        People {
            inner: self.nodes.iter(),
        }
    }

    /// Every member's name, in no particular order.
    pub fn names(&self) -> Names<'_> {
        Names {
            people: &self.people,
            inner: self.people(),
        }
    }

    /// Write each member's name to `out`, one per line.
    pub fn write_friends(&self, out: &mut impl Write) -> io::Result<()> {
        for name in self.names() {
            writeln!(out, "{}", name)?;
        }
        Ok(())
    }

    /// Print each member's name to stdout, one per line.
    pub fn print_friends(&self) -> io::Result<()> {
        self.write_friends(&mut io::stdout().lock())
    }
}

impl std::ops::Index<PersonId> for FriendGraph {
    type Output = Person;

    fn index(&self, id: PersonId) -> &Person {
        &self.people[id]
    }
}

impl fmt::Debug for FriendGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<FriendGraph: ")?;
        f.debug_set().entries(self.names()).finish()?;
        write!(f, ">")
    }
}

/// Build a graph where everyone named in `names` is a member and everyone is friends with
/// everyone else.
pub fn make_friendship<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Result<FriendGraph> {
    let mut graph = FriendGraph::new();
    let mut ids = Vec::new();
    for name in names {
        ids.push(graph.create(Person::new(name))?);
    }
    graph.add_people(ids.iter().copied())?;
    for (i, &person1) in ids.iter().enumerate() {
        for &person2 in &ids[i + 1..] {
            graph.set_friends(person1, person2)?;
        }
    }
    Ok(graph)
}

/// Three people who are all friends with each other.
///
/// ```
/// let graph = friendgraph::make_simple_friendship(["Harry", "Ron", "Hermione"])?;
/// assert_eq!(graph.len(), 3);
/// for person in graph.people() {
///     assert_eq!(graph[person].degree(), 2);
/// }
/// # Ok::<(), friendgraph::Error>(())
/// ```
pub fn make_simple_friendship<S: Into<String>>(names: [S; 3]) -> Result<FriendGraph> {
    make_friendship(names)
}
