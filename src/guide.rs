//! Legend and colorbar queues
//!
//! Each axes owns a [`GuideQueue`] per [`GuideKind`]. A queue maps locations to
//! entries that are either pending (handles, labels and properties accumulated
//! by successive calls) or resolved (a guide drawn by the scene).
//! Pending entries are materialized at draw time by [`GuideQueue::flush`].
use std::fmt;

use crate::Error;
use crate::loc::{GuideLoc, LocMap};
use crate::style::{Props, StyleValue};

pub mod colorbar;
pub mod legend;

/// The kind of guide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuideKind {
    /// A legend
    Legend,
    /// A colorbar
    Colorbar,
}

impl fmt::Display for GuideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuideKind::Legend => f.write_str("legend"),
            GuideKind::Colorbar => f.write_str("colorbar"),
        }
    }
}

/// Opaque reference to an artist of the scene (a line, a mappable...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(pub u64);

/// Opaque reference to a guide drawn by the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuideObj(pub u64);

/// The content of a pending guide
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    /// Artists to represent
    pub handles: Vec<Handle>,
    /// Labels of the artists. Missing labels are left to the scene.
    pub labels: Vec<String>,
    /// Colorbar levels
    pub values: Vec<f64>,
    /// Guide properties
    pub props: Props,
}

impl Payload {
    /// An empty payload
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a handle with its label and return self for chaining
    pub fn with_entry(mut self, handle: Handle, label: impl Into<String>) -> Self {
        self.handles.push(handle);
        self.labels.push(label.into());
        self
    }

    /// Add a handle without label and return self for chaining
    pub fn with_handle(mut self, handle: Handle) -> Self {
        self.handles.push(handle);
        self
    }

    /// Set the colorbar levels and return self for chaining
    pub fn with_values(self, values: Vec<f64>) -> Self {
        Self { values, ..self }
    }

    /// Set a property and return self for chaining
    pub fn with_prop(mut self, key: &str, value: impl Into<StyleValue>) -> Self {
        self.props.insert(key.to_string(), value.into());
        self
    }

    /// Append handles, labels and values of `other`, and merge its properties.
    /// Properties of `other` override the ones already set.
    pub fn merge(&mut self, other: Payload) {
        self.handles.extend(other.handles);
        self.labels.extend(other.labels);
        self.values.extend(other.values);
        self.props.extend(other.props);
    }
}

/// An entry of a guide queue
#[derive(Debug, Clone, PartialEq)]
pub enum GuideEntry {
    /// Content waiting to be drawn
    Pending(Payload),
    /// A guide already drawn
    Resolved(GuideObj),
}

impl GuideEntry {
    /// Whether the entry waits to be drawn
    pub fn is_pending(&self) -> bool {
        matches!(self, GuideEntry::Pending(_))
    }

    /// The pending payload
    pub fn pending(&self) -> Option<&Payload> {
        match self {
            GuideEntry::Pending(payload) => Some(payload),
            GuideEntry::Resolved(_) => None,
        }
    }

    /// The drawn guide
    pub fn resolved(&self) -> Option<GuideObj> {
        match self {
            GuideEntry::Pending(_) => None,
            GuideEntry::Resolved(obj) => Some(*obj),
        }
    }
}

/// Location-keyed queue of guides of one kind
#[derive(Debug, Clone)]
pub struct GuideQueue {
    kind: GuideKind,
    entries: LocMap<GuideLoc, GuideEntry>,
}

impl GuideQueue {
    /// An empty queue
    pub fn new(kind: GuideKind) -> Self {
        GuideQueue {
            kind,
            entries: LocMap::new(),
        }
    }

    /// The kind of guides in the queue
    pub fn kind(&self) -> GuideKind {
        self.kind
    }

    /// Number of occupied locations
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no location is occupied
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry at `loc`
    pub fn get(&self, loc: GuideLoc) -> Option<&GuideEntry> {
        self.entries.get(loc)
    }

    /// Iterate over the entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (GuideLoc, &GuideEntry)> {
        self.entries.iter()
    }

    /// Number of entries waiting to be drawn
    pub fn pending_count(&self) -> usize {
        self.entries.iter().filter(|(_, e)| e.is_pending()).count()
    }

    /// Register a payload at `loc`.
    ///
    /// A guide already drawn at `loc` is retired with `retire` first, in both modes.
    /// With `merge`, the payload is appended to a pending entry at `loc`, which keeps
    /// its position in the queue. Otherwise the payload replaces the entry and moves
    /// to the end of the queue.
    pub fn register<F>(
        &mut self,
        loc: GuideLoc,
        payload: Payload,
        merge: bool,
        mut retire: F,
    ) -> Result<(), Error>
    where
        F: FnMut(GuideObj) -> Result<(), Error>,
    {
        match self.entries.get_mut(loc) {
            Some(GuideEntry::Resolved(obj)) => {
                let obj = *obj;
                log::debug!("retiring {} at {}", self.kind, loc);
                retire(obj)?;
                self.entries.insert(loc, GuideEntry::Pending(payload));
            }
            Some(GuideEntry::Pending(pending)) if merge => {
                pending.merge(payload);
            }
            _ => {
                self.entries.insert(loc, GuideEntry::Pending(payload));
            }
        }
        Ok(())
    }

    /// Install a guide drawn right away at `loc`, retiring the guide it replaces
    pub fn install<F>(&mut self, loc: GuideLoc, obj: GuideObj, mut retire: F) -> Result<(), Error>
    where
        F: FnMut(GuideObj) -> Result<(), Error>,
    {
        if let Some(GuideEntry::Resolved(prev)) = self.entries.get(loc) {
            if *prev != obj {
                retire(*prev)?;
            }
        }
        match self.entries.get_mut(loc) {
            Some(entry) => *entry = GuideEntry::Resolved(obj),
            None => {
                self.entries.insert(loc, GuideEntry::Resolved(obj));
            }
        }
        Ok(())
    }

    /// Remove the entry at `loc`
    pub fn remove(&mut self, loc: GuideLoc) -> Option<GuideEntry> {
        self.entries.remove(loc)
    }

    /// Draw the pending entries in insertion order, replacing each of them in place
    /// by the guide returned by `draw`. Resolved entries are left untouched, so
    /// flushing twice is a no-op.
    ///
    /// Returns the number of guides drawn. On error, the entries drawn so far stay
    /// resolved and the others pending.
    pub fn flush<F>(&mut self, mut draw: F) -> Result<usize, Error>
    where
        F: FnMut(GuideLoc, &Payload) -> Result<GuideObj, Error>,
    {
        let mut count = 0;
        for (loc, entry) in self.entries.iter_mut() {
            let GuideEntry::Pending(payload) = entry else {
                continue;
            };
            let obj = draw(loc, payload)?;
            log::debug!("{} drawn at {}", self.kind, loc);
            *entry = GuideEntry::Resolved(obj);
            count += 1;
        }
        Ok(count)
    }
}
