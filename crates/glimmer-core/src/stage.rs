//! Headless element registry.
//!
//! A `Stage` stands in for whatever actually draws: every element has an id,
//! a class set, text content, an optional background and a display style.
//! Components look targets up by id and mutate them here; a renderer reads
//! them back.

use std::collections::HashMap;

use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;

use crate::{Color, Error, Result};

new_key_type! {
    pub struct ElementKey;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayStyle {
    pub scale: f32,
    pub opacity: f32,
}

impl DisplayStyle {
    pub const NORMAL: DisplayStyle = DisplayStyle {
        scale: 1.0,
        opacity: 1.0,
    };
    /// Applied while a result panel waits for its new content.
    pub const DIMMED: DisplayStyle = DisplayStyle {
        scale: 0.95,
        opacity: 0.7,
    };
}

impl Default for DisplayStyle {
    fn default() -> Self {
        Self::NORMAL
    }
}

#[derive(Clone, Debug)]
pub struct Element {
    id: String,
    classes: SmallVec<[String; 4]>,
    pub content: String,
    pub background: Option<Color>,
    pub style: DisplayStyle,
}

impl Element {
    fn new(id: String) -> Self {
        Self {
            id,
            classes: SmallVec::new(),
            content: String::new(),
            background: None,
            style: DisplayStyle::NORMAL,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Returns true if the class was not already present.
    pub fn add_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            return false;
        }
        self.classes.push(class.to_string());
        true
    }

    /// Returns true if the class was present.
    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        self.classes.len() != before
    }

    /// Flips `class` and returns whether it is now present.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.remove_class(class) {
            false
        } else {
            self.classes.push(class.to_string());
            true
        }
    }

    pub fn set_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }
}

#[derive(Default)]
pub struct Stage {
    elements: SlotMap<ElementKey, Element>,
    by_id: HashMap<String, ElementKey>,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `id`, or returns the existing key if it is already there.
    pub fn insert(&mut self, id: impl Into<String>) -> ElementKey {
        let id = id.into();
        if let Some(&key) = self.by_id.get(&id) {
            return key;
        }
        let key = self.elements.insert(Element::new(id.clone()));
        self.by_id.insert(id, key);
        key
    }

    pub fn remove(&mut self, id: &str) -> Option<Element> {
        let key = self.by_id.remove(id)?;
        self.elements.remove(key)
    }

    pub fn lookup(&self, id: &str) -> Option<ElementKey> {
        self.by_id.get(id).copied()
    }

    /// Like [`Stage::lookup`], but a miss is a `TargetNotFound` error.
    pub fn resolve(&self, id: &str) -> Result<ElementKey> {
        self.lookup(id).ok_or_else(|| {
            log::warn!("stage: no element '{id}'");
            Error::TargetNotFound(id.to_string())
        })
    }

    pub fn get(&self, key: ElementKey) -> Option<&Element> {
        self.elements.get(key)
    }

    pub fn get_mut(&mut self, key: ElementKey) -> Option<&mut Element> {
        self.elements.get_mut(key)
    }

    pub fn by_id(&self, id: &str) -> Option<&Element> {
        self.lookup(id).and_then(|k| self.elements.get(k))
    }

    pub fn by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        let key = self.lookup(id)?;
        self.elements.get_mut(key)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ElementKey, &Element)> {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_idempotent_per_id() {
        let mut s = Stage::new();
        let a = s.insert("box");
        let b = s.insert("box");
        assert_eq!(a, b);
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn class_ops() {
        let mut s = Stage::new();
        s.insert("card");
        let el = s.by_id_mut("card").unwrap();
        assert!(el.add_class("a"));
        assert!(!el.add_class("a"));
        assert!(el.toggle_class("b"));
        assert!(!el.toggle_class("b"));
        assert!(el.remove_class("a"));
        assert_eq!(el.classes().count(), 0);
    }

    #[test]
    fn resolve_missing() {
        let s = Stage::new();
        assert_eq!(
            s.resolve("ghost"),
            Err(Error::TargetNotFound("ghost".into()))
        );
    }

    #[test]
    fn removed_key_goes_stale() {
        let mut s = Stage::new();
        let k = s.insert("gone");
        assert!(s.remove("gone").is_some());
        assert!(s.get(k).is_none());
        assert!(s.lookup("gone").is_none());
    }
}
