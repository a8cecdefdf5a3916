//! Append-only ordered list with a single shared cursor
//!
//! The venue list is filled once while the venues file is read and then
//! scanned many times, always front to back. Scanning goes through one cursor
//! stored inside the list itself:
//!
//! ```text
//! reset_cursor() ──► is_at_end()? ──no──► current() ──► advance() ──┐
//!                        ▲                                           │
//!                        └───────────────────────────────────────────┘
//! ```
//!
//! # Shared cursor
//!
//! There is exactly one traversal position per list. Two interleaved
//! traversals move the same cursor and corrupt each other, so callers must
//! finish one reset/advance sequence before starting the next. Code that
//! needs independent traversals uses [`OrderedRecordList::iter`], which
//! borrows the list and never touches the shared cursor.
//!
//! # Storage
//!
//! Nodes live in an arena (`Vec<Node<R>>`) and link to their successor by
//! index. The list owns every node; `head`, `tail` and `cursor` are plain
//! indices into the arena, so the cursor can never dangle. The cached `tail`
//! makes [`append`](OrderedRecordList::append) O(1).
//!
//! # Misuse
//!
//! Reading or advancing past the end, and any use after
//! [`destroy`](OrderedRecordList::destroy), return a [`ListError`] instead of
//! handing out stale data.

use crate::types::{ListError, Venue};

/// The list the record store keeps its venues in
pub type VenueList = OrderedRecordList<Venue>;

#[derive(Debug)]
struct Node<R> {
    record: R,
    next: Option<usize>,
}

/// Append-only singly-linked sequence with one shared traversal cursor
#[derive(Debug)]
pub struct OrderedRecordList<R> {
    nodes: Vec<Node<R>>,
    head: Option<usize>,
    tail: Option<usize>,
    /// `None` means "at end": past the last node, or not reset yet
    cursor: Option<usize>,
    destroyed: bool,
}

impl<R> OrderedRecordList<R> {
    /// Create an empty list with no head and no cursor
    pub fn new() -> Self {
        OrderedRecordList {
            nodes: Vec::new(),
            head: None,
            tail: None,
            cursor: None,
            destroyed: false,
        }
    }

    /// Append a record as the new tail
    ///
    /// The cursor is not moved: a traversal in progress continues where it
    /// was. A cursor that already ran past the end stays at end.
    ///
    /// # Errors
    ///
    /// - [`ListError::Destroyed`] if the list was destroyed
    /// - [`ListError::AllocationFailed`] if storage for the node could not be
    ///   reserved
    pub fn append(&mut self, record: R) -> Result<(), ListError> {
        self.ensure_live("append")?;

        self.nodes
            .try_reserve(1)
            .map_err(|_| ListError::AllocationFailed { requested: 1 })?;

        let index = self.nodes.len();
        self.nodes.push(Node { record, next: None });

        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);

        Ok(())
    }

    /// Move the cursor to the first node (or to end, if the list is empty)
    pub fn reset_cursor(&mut self) -> Result<(), ListError> {
        self.ensure_live("reset the cursor")?;
        self.cursor = self.head;
        Ok(())
    }

    /// Whether the cursor is past the last node
    ///
    /// Also true for an empty list and for a list whose cursor was never
    /// reset.
    pub fn is_at_end(&self) -> Result<bool, ListError> {
        self.ensure_live("check the cursor")?;
        Ok(self.cursor.is_none())
    }

    /// Step the cursor to the next node
    ///
    /// # Errors
    ///
    /// [`ListError::OutOfRange`] if the cursor is already at end; the cursor
    /// stays at end.
    pub fn advance(&mut self) -> Result<(), ListError> {
        self.ensure_live("advance")?;
        let at = self.cursor.ok_or_else(|| ListError::out_of_range("advance"))?;
        self.cursor = self.nodes[at].next;
        Ok(())
    }

    /// Release every node and mark the list as destroyed
    ///
    /// # Returns
    ///
    /// The number of nodes released.
    ///
    /// # Errors
    ///
    /// [`ListError::Destroyed`] when called a second time.
    pub fn destroy(&mut self) -> Result<usize, ListError> {
        self.ensure_live("destroy")?;
        let released = self.nodes.len();

        self.nodes = Vec::new();
        self.head = None;
        self.tail = None;
        self.cursor = None;
        self.destroyed = true;

        Ok(released)
    }

    /// Number of records in the list (zero once destroyed)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Caller-owned iterator over the records in append order
    ///
    /// Independent of the shared cursor: any number of iterators can be
    /// alive at once, and none of them moves the cursor.
    pub fn iter(&self) -> Result<Iter<'_, R>, ListError> {
        self.ensure_live("iterate")?;
        Ok(Iter {
            nodes: &self.nodes,
            next: self.head,
            remaining: self.nodes.len(),
        })
    }

    fn ensure_live(&self, operation: &'static str) -> Result<(), ListError> {
        if self.destroyed {
            return Err(ListError::destroyed(operation));
        }
        Ok(())
    }
}

impl<R: Clone> OrderedRecordList<R> {
    /// Copy of the record under the cursor
    ///
    /// # Errors
    ///
    /// [`ListError::OutOfRange`] when the cursor is at end, including on an
    /// empty list.
    pub fn current(&self) -> Result<R, ListError> {
        self.ensure_live("read the current record")?;
        self.cursor
            .map(|at| self.nodes[at].record.clone())
            .ok_or_else(|| ListError::out_of_range("current"))
    }
}

impl<R> Default for OrderedRecordList<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowing iterator returned by [`OrderedRecordList::iter`]
#[derive(Debug, Clone)]
pub struct Iter<'a, R> {
    nodes: &'a [Node<R>],
    next: Option<usize>,
    remaining: usize,
}

impl<'a, R> Iterator for Iter<'a, R> {
    type Item = &'a R;

    fn next(&mut self) -> Option<Self::Item> {
        let at = self.next?;
        let node = &self.nodes[at];
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R> ExactSizeIterator for Iter<'_, R> {}
