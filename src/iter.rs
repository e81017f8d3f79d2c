//! iterator types

use crate::{id::IdTrait, Id, Person, PersonId, Registry};
use std::collections::VecDeque;
use tracing::trace;

/// An iterator over `(ID, &T)`. Returned by [`iter`](crate::Registry::iter) or automatically
/// constructed by iterating over `&Registry`.
#[derive(Clone, Debug)]
pub struct Iter<'registry, T, ID: IdTrait = Id<T>> {
    pub(crate) registry: &'registry Registry<T, ID>,
    pub(crate) index: u32,
}

impl<'registry, T, ID: IdTrait> Iterator for Iter<'registry, T, ID> {
    type Item = (ID, &'registry T);

    fn next(&mut self) -> Option<Self::Item> {
        let id = ID::new(self.index)?;
        let value = self.registry.get(id)?;
        self.index += 1;
        Some((id, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.registry.len().saturating_sub(self.index as usize);
        (remaining, Some(remaining))
    }
}

impl<'registry, T, ID: IdTrait> ExactSizeIterator for Iter<'registry, T, ID> {}

impl<'registry, T, ID: IdTrait> IntoIterator for &'registry Registry<T, ID> {
    type Item = (ID, &'registry T);
    type IntoIter = Iter<'registry, T, ID>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over `ID`. Returned by [`ids`](crate::Registry::ids).
#[derive(Clone, Debug)]
pub struct Ids<'registry, T, ID: IdTrait = Id<T>> {
    pub(crate) inner: Iter<'registry, T, ID>,
}

impl<'registry, T, ID: IdTrait> Iterator for Ids<'registry, T, ID> {
    type Item = ID;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(id, _val)| id)
    }
}

/// An iterator over `&T`. Returned by [`values`](crate::Registry::values).
#[derive(Clone, Debug)]
pub struct Values<'registry, T, ID: IdTrait = Id<T>> {
    pub(crate) inner: Iter<'registry, T, ID>,
}

impl<'registry, T, ID: IdTrait> Iterator for Values<'registry, T, ID> {
    type Item = &'registry T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_id, val)| val)
    }
}

/// An iterator over the members of a graph, in no particular order. Returned by
/// [`people`](crate::FriendGraph::people).
#[derive(Clone, Debug)]
pub struct People<'graph> {
    pub(crate) inner: hashbrown::hash_set::Iter<'graph, PersonId>,
}

impl<'graph> Iterator for People<'graph> {
    type Item = PersonId;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'graph> ExactSizeIterator for People<'graph> {}

/// An iterator over the names of a graph's members, in the same order as [`People`]. Returned
/// by [`names`](crate::FriendGraph::names).
#[derive(Clone, Debug)]
pub struct Names<'graph> {
    pub(crate) people: &'graph Registry<Person>,
    pub(crate) inner: People<'graph>,
}

impl<'graph> Iterator for Names<'graph> {
    type Item = &'graph str;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.inner.next()?;
        Some(self.people[id].name())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// A breadth-first walk over everyone reachable from a starting person, the starting person
/// first. Returned by [`bfs`](crate::FriendGraph::bfs).
///
/// The walk is lazy: a person's friends are only queued once the caller asks for the item after
/// that person. Stopping as soon as the target turns up therefore never scans the target's own
/// friends.
///
/// People at the same depth come out in hash-set order, which is unspecified.
#[derive(Clone, Debug)]
pub struct Bfs<'graph> {
    people: &'graph Registry<Person>,
    queue: VecDeque<PersonId>,
    seen: hashbrown::HashSet<PersonId>,
    // Yielded but not yet expanded.
    last: Option<PersonId>,
}

impl<'graph> Bfs<'graph> {
    pub(crate) fn new(people: &'graph Registry<Person>, start: PersonId) -> Self {
        let mut queue = VecDeque::new();
        let mut seen = hashbrown::HashSet::new();
        queue.push_back(start);
        seen.insert(start);
        Self {
            people,
            queue,
            seen,
            last: None,
        }
    }

    fn expand(&mut self, id: PersonId) {
        let people = self.people;
        // Unknown IDs have no friends.
        let Some(person) = people.get(id) else {
            return;
        };
        for &friend in person.adjacent() {
            if self.seen.insert(friend) {
                if let Some(queued) = people.get(friend) {
                    trace!(friend = %queued, "added to queue");
                }
                self.queue.push_back(friend);
            }
        }
    }
}

impl<'graph> Iterator for Bfs<'graph> {
    type Item = PersonId;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(last) = self.last.take() {
            self.expand(last);
        }
        let id = self.queue.pop_front()?;
        self.last = Some(id);
        Some(id)
    }
}
