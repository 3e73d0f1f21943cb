//! Arena-backed phrase tree.
//!
//! A [`SyntaxTree`] owns every node; children and the parent back-reference
//! are [`NodeId`] indices, never owning pointers, so an ownership cycle is
//! unrepresentable. Attaching a node that already has a parent (or to
//! itself) is rejected at construction time; the realisation pipeline may
//! therefore assume a well-formed acyclic tree.

use crate::features::Features;
use crate::lexicon::InflectionTable;
use crate::{DiscourseFunction, LexicalCategory, PhraseCategory};

/// Handle of a node inside a [`SyntaxTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Structural construction errors. These are the only fatal errors in the
/// system, and they happen while building a tree, never while realising one.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("node is already attached to a parent")]
    AlreadyAttached,
    #[error("a node cannot be attached to itself")]
    SelfAttachment,
    #[error("target node does not accept children in this slot")]
    InvalidSlot,
}

/// Ordered child slots of a phrase. `subjects` is only populated on clauses.
#[derive(Clone, Debug, Default)]
pub struct PhraseSlots {
    pub specifier: Option<NodeId>,
    pub subjects: Vec<NodeId>,
    pub pre_modifiers: Vec<NodeId>,
    pub head: Option<NodeId>,
    pub complements: Vec<NodeId>,
    pub post_modifiers: Vec<NodeId>,
}

#[derive(Clone, Debug)]
pub enum NodeKind {
    /// A single word: lemma, lexical category and per-instance irregular
    /// form overrides (consulted before the lexicon).
    Word {
        lemma: String,
        category: LexicalCategory,
        overrides: InflectionTable,
    },
    Phrase {
        category: PhraseCategory,
        slots: PhraseSlots,
    },
    /// A conjunction plus an ordered list of coordinates. An empty
    /// conjunction joins the coordinates without a linking word.
    Coordination {
        conjunction: String,
        coordinates: Vec<NodeId>,
    },
    /// Canned text realised verbatim (apart from cross-word rewrites).
    Literal(String),
}

#[derive(Clone, Debug)]
pub struct Node {
    pub kind: NodeKind,
    pub features: Features,
    pub function: Option<DiscourseFunction>,
    pub parent: Option<NodeId>,
}

#[derive(Clone, Debug, Default)]
pub struct SyntaxTree {
    nodes: Vec<Node>,
}

impl SyntaxTree {
    pub fn new() -> Self {
        SyntaxTree::default()
    }

    pub fn alloc(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            kind,
            features: Features::default(),
            function: None,
            parent: None,
        });
        id
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    pub fn features(&self, id: NodeId) -> &Features {
        &self.node(id).features
    }

    pub fn features_mut(&mut self, id: NodeId) -> &mut Features {
        &mut self.node_mut(id).features
    }

    /// Records `child` as a dependent of `parent` with the given discourse
    /// function. The caller is responsible for placing the child in the
    /// appropriate slot; this method only wires the back-reference and
    /// rejects structures that would break tree shape.
    pub fn adopt(
        &mut self,
        parent: NodeId,
        child: NodeId,
        function: DiscourseFunction,
    ) -> Result<(), TreeError> {
        if parent == child {
            return Err(TreeError::SelfAttachment);
        }
        let node = self.node_mut(child);
        if node.parent.is_some() {
            return Err(TreeError::AlreadyAttached);
        }
        node.parent = Some(parent);
        node.function = Some(function);
        Ok(())
    }

    /// Walks parent references from `id` upwards (excluding `id` itself).
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let mut current = self.node(id).parent;
        std::iter::from_fn(move || {
            let next = current?;
            current = self.node(next).parent;
            Some(next)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(tree: &mut SyntaxTree, lemma: &str) -> NodeId {
        tree.alloc(NodeKind::Word {
            lemma: lemma.into(),
            category: LexicalCategory::Noun,
            overrides: InflectionTable::new(),
        })
    }

    #[test]
    fn double_attachment_is_rejected() {
        let mut tree = SyntaxTree::new();
        let a = tree.alloc(NodeKind::Phrase {
            category: PhraseCategory::NounPhrase,
            slots: PhraseSlots::default(),
        });
        let b = tree.alloc(NodeKind::Phrase {
            category: PhraseCategory::NounPhrase,
            slots: PhraseSlots::default(),
        });
        let w = word(&mut tree, "can");
        assert_eq!(tree.adopt(a, w, DiscourseFunction::Head), Ok(()));
        assert_eq!(
            tree.adopt(b, w, DiscourseFunction::Head),
            Err(TreeError::AlreadyAttached)
        );
    }

    #[test]
    fn self_attachment_is_rejected() {
        let mut tree = SyntaxTree::new();
        let w = word(&mut tree, "can");
        assert_eq!(
            tree.adopt(w, w, DiscourseFunction::Head),
            Err(TreeError::SelfAttachment)
        );
    }

    #[test]
    fn ancestors_walk_upwards() {
        let mut tree = SyntaxTree::new();
        let np = tree.alloc(NodeKind::Phrase {
            category: PhraseCategory::NounPhrase,
            slots: PhraseSlots::default(),
        });
        let clause = tree.alloc(NodeKind::Phrase {
            category: PhraseCategory::Clause,
            slots: PhraseSlots::default(),
        });
        let w = word(&mut tree, "can");
        tree.adopt(clause, np, DiscourseFunction::Subject).unwrap();
        tree.adopt(np, w, DiscourseFunction::Head).unwrap();
        let chain: Vec<NodeId> = tree.ancestors(w).collect();
        assert_eq!(chain, vec![np, clause]);
    }
}
