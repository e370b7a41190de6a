//! The scope chain: nested data frames, innermost last.
//!
//! Frames borrow host values; nothing is cloned. The root frame is pushed at
//! construction and can never be popped, so [`ScopeChain::current`] always
//! has an answer.

use fastache_core::Value;

/// How a frame came to be on the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOrigin {
    /// The data value the render was started with.
    Root,
    /// The resolved value of a truthy, non-sequence section.
    Section,
    /// One element of a sequence being iterated.
    Element,
}

#[derive(Debug, Clone, Copy)]
pub struct Frame<'v> {
    pub value: &'v Value,
    pub origin: FrameOrigin,
}

#[derive(Debug, Clone)]
pub struct ScopeChain<'v> {
    frames: Vec<Frame<'v>>,
}

impl<'v> ScopeChain<'v> {
    pub fn new(root: &'v Value) -> Self {
        ScopeChain {
            frames: vec![Frame {
                value: root,
                origin: FrameOrigin::Root,
            }],
        }
    }

    /// Number of frames, root included. Never zero.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn push(&mut self, value: &'v Value, origin: FrameOrigin) {
        self.frames.push(Frame { value, origin });
    }

    /// Remove the innermost frame.
    ///
    /// # Panics
    ///
    /// Panics when only the root frame is left; push and pop must balance.
    pub fn pop(&mut self) -> Frame<'v> {
        assert!(self.frames.len() > 1, "attempted to pop the root scope frame");
        match self.frames.pop() {
            Some(frame) => frame,
            None => unreachable!("scope chain is never empty"),
        }
    }

    /// The innermost frame's value.
    pub fn current(&self) -> &'v Value {
        match self.frames.last() {
            Some(frame) => frame.value,
            None => unreachable!("scope chain is never empty"),
        }
    }

    /// Search mapping frames from innermost to outermost for `name`.
    ///
    /// Frames holding anything other than a mapping are skipped.
    pub fn find(&self, name: &str) -> Option<&'v Value> {
        self.frames.iter().rev().find_map(|frame| frame.value.get(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn find_walks_outward_and_prefers_inner_frames() {
        let root = Value::from(json!({ "name": "root", "only_root": 1 }));
        let inner = Value::from(json!({ "name": "inner" }));
        let mut chain = ScopeChain::new(&root);
        chain.push(&inner, FrameOrigin::Element);

        assert_eq!(chain.find("name"), Some(&Value::from("inner")));
        assert_eq!(chain.find("only_root"), Some(&Value::Integer(1)));
        assert_eq!(chain.find("nowhere"), None);
    }

    #[test]
    fn non_mapping_frames_are_skipped_by_find_but_are_current() {
        let root = Value::from(json!({ "name": "root" }));
        let scalar = Value::from("plain");
        let mut chain = ScopeChain::new(&root);
        chain.push(&scalar, FrameOrigin::Section);

        assert_eq!(chain.find("name"), Some(&Value::from("root")));
        assert_eq!(chain.current(), &scalar);
    }

    #[test]
    fn push_then_pop_leaves_lookups_unchanged() {
        let root = Value::from(json!({ "a": 1, "b": 2 }));
        let shadow = Value::from(json!({ "a": 10 }));
        let mut chain = ScopeChain::new(&root);
        let before: Vec<_> = ["a", "b", "c"].iter().map(|n| chain.find(n)).collect();

        chain.push(&shadow, FrameOrigin::Section);
        assert_eq!(chain.find("a"), Some(&Value::Integer(10)));
        let popped = chain.pop();
        assert_eq!(popped.origin, FrameOrigin::Section);

        let after: Vec<_> = ["a", "b", "c"].iter().map(|n| chain.find(n)).collect();
        assert_eq!(before, after);
        assert_eq!(chain.depth(), 1);
    }

    #[test]
    #[should_panic(expected = "root scope frame")]
    fn popping_the_root_panics() {
        let root = Value::empty_mapping();
        let mut chain = ScopeChain::new(&root);
        chain.pop();
    }
}
