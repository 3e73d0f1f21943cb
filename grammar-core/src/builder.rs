//! Phrase-spec builder: the convenience layer used to construct input trees.
//!
//! The builder owns the arena while the tree is under construction and is
//! the only place where structure is wired, so every structural invariant
//! (single parent, no self-attachment) is enforced here, at build time.
//! Word defaults (category, gender, person) come from the lexicon; a lemma
//! the lexicon does not know becomes a noun, proper if capitalised. Text
//! containing whitespace becomes a literal chunk realised verbatim.

use crate::features::Features;
use crate::lexicon::{FormKey, InflectionTable, Lexicon};
use crate::tree::{NodeId, NodeKind, PhraseSlots, SyntaxTree, TreeError};
use crate::{DiscourseFunction, LexicalCategory, PhraseCategory};

pub struct TreeBuilder<'a> {
    tree: SyntaxTree,
    lexicon: &'a Lexicon,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        TreeBuilder {
            tree: SyntaxTree::new(),
            lexicon,
        }
    }

    pub fn tree(&self) -> &SyntaxTree {
        &self.tree
    }

    pub fn features_mut(&mut self, id: NodeId) -> &mut Features {
        self.tree.features_mut(id)
    }

    fn phrase(&mut self, category: PhraseCategory) -> NodeId {
        self.tree.alloc(NodeKind::Phrase {
            category,
            slots: PhraseSlots::default(),
        })
    }

    pub fn clause(&mut self) -> NodeId {
        self.phrase(PhraseCategory::Clause)
    }

    /// Convenience for the common subject-verb-object clause shape.
    pub fn clause_svo(
        &mut self,
        subject: &str,
        verb: &str,
        object: &str,
    ) -> Result<NodeId, TreeError> {
        let clause = self.clause();
        self.set_subject_text(clause, subject)?;
        self.set_verb(clause, verb)?;
        self.set_object_text(clause, object)?;
        Ok(clause)
    }

    /// A single word with lexicon-supplied default features.
    pub fn word(&mut self, lemma: &str, category: LexicalCategory) -> NodeId {
        let mut features = Features::default();
        if let Some(unit) = self.lexicon.lookup(lemma, category) {
            features.gender = unit.gender;
            features.number = unit.number;
            features.person = unit.person;
            features.proper = unit.proper;
            features.possessive = unit.possessive;
        }
        let id = self.tree.alloc(NodeKind::Word {
            lemma: lemma.into(),
            category,
            overrides: InflectionTable::new(),
        });
        self.tree.node_mut(id).features = features;
        id
    }

    /// Canned text realised verbatim.
    pub fn literal(&mut self, text: &str) -> NodeId {
        self.tree.alloc(NodeKind::Literal(text.into()))
    }

    /// A word or literal from free text: whitespace makes a literal chunk,
    /// a single word is categorised by the lexicon.
    pub fn element(&mut self, text: &str) -> NodeId {
        if text.contains(' ') {
            return self.literal(text);
        }
        match self.lexicon.lookup_any(text) {
            Some(unit) => {
                let category = unit.category;
                self.word(text, category)
            }
            None => {
                let id = self.word(text, LexicalCategory::Noun);
                let proper = text.chars().next().is_some_and(char::is_uppercase);
                self.tree.features_mut(id).proper = proper;
                id
            }
        }
    }

    /// A per-instance irregular form, consulted before the lexicon.
    pub fn add_form_override(&mut self, word: NodeId, key: FormKey, text: &str) {
        if let NodeKind::Word { overrides, .. } = &mut self.tree.node_mut(word).kind {
            overrides.insert(key, text.into());
        }
    }

    pub fn noun_phrase(
        &mut self,
        specifier: Option<&str>,
        noun: &str,
    ) -> Result<NodeId, TreeError> {
        let np = self.phrase(PhraseCategory::NounPhrase);
        let head = self.element(noun);
        self.set_head(np, head)?;
        // Noun-phrase defaults come from the head noun.
        let head_features = self.tree.features(head).clone();
        let np_features = self.tree.features_mut(np);
        np_features.gender = head_features.gender;
        np_features.number = head_features.number;
        np_features.person = head_features.person;
        if let Some(det) = specifier {
            self.set_specifier(np, det)?;
        }
        Ok(np)
    }

    pub fn set_specifier(&mut self, np: NodeId, determiner: &str) -> Result<(), TreeError> {
        let det = self.word(determiner, LexicalCategory::Determiner);
        self.tree.adopt(np, det, DiscourseFunction::Specifier)?;
        self.slots_mut(np)?.specifier = Some(det);
        Ok(())
    }

    pub fn verb_phrase(&mut self, verb: &str) -> Result<NodeId, TreeError> {
        let vp = self.phrase(PhraseCategory::VerbPhrase);
        let head = self.word(verb, LexicalCategory::Verb);
        self.set_head(vp, head)?;
        Ok(vp)
    }

    pub fn preposition_phrase(
        &mut self,
        preposition: &str,
        complement: NodeId,
    ) -> Result<NodeId, TreeError> {
        let pp = self.phrase(PhraseCategory::PrepositionalPhrase);
        let head = self.word(preposition, LexicalCategory::Preposition);
        self.set_head(pp, head)?;
        self.tree.adopt(pp, complement, DiscourseFunction::Complement)?;
        self.slots_mut(pp)?.complements.push(complement);
        Ok(pp)
    }

    pub fn preposition_phrase_text(
        &mut self,
        preposition: &str,
        complement: &str,
    ) -> Result<NodeId, TreeError> {
        let object = self.element(complement);
        self.preposition_phrase(preposition, object)
    }

    /// A coordination of previously built nodes, joined with "e" unless
    /// overridden by [`TreeBuilder::set_conjunction`].
    pub fn coordination(&mut self, coordinates: &[NodeId]) -> Result<NodeId, TreeError> {
        let id = self.tree.alloc(NodeKind::Coordination {
            conjunction: "e".into(),
            coordinates: coordinates.to_vec(),
        });
        for &c in coordinates {
            self.tree.adopt(id, c, DiscourseFunction::Complement)?;
        }
        Ok(id)
    }

    pub fn set_conjunction(&mut self, coordination: NodeId, conjunction: &str) {
        if let NodeKind::Coordination { conjunction: c, .. } =
            &mut self.tree.node_mut(coordination).kind
        {
            *c = conjunction.into();
        }
    }

    pub fn add_subject(&mut self, clause: NodeId, subject: NodeId) -> Result<(), TreeError> {
        self.tree.adopt(clause, subject, DiscourseFunction::Subject)?;
        self.slots_mut(clause)?.subjects.push(subject);
        Ok(())
    }

    pub fn set_subject(&mut self, clause: NodeId, subject: NodeId) -> Result<(), TreeError> {
        let existing = std::mem::take(&mut self.slots_mut(clause)?.subjects);
        for old in existing {
            self.tree.node_mut(old).parent = None;
        }
        self.add_subject(clause, subject)
    }

    pub fn set_subject_text(&mut self, clause: NodeId, subject: &str) -> Result<(), TreeError> {
        let node = self.element(subject);
        self.set_subject(clause, node)
    }

    /// Sets the clause's verb, creating the verb phrase on first use.
    pub fn set_verb(&mut self, clause: NodeId, verb: &str) -> Result<(), TreeError> {
        let vp = self.clause_verb_phrase(clause)?;
        let head = self.word(verb, LexicalCategory::Verb);
        self.set_head(vp, head)
    }

    pub fn set_verb_phrase(&mut self, clause: NodeId, vp: NodeId) -> Result<(), TreeError> {
        if let Some(old) = self.slots_mut(clause)?.head.take() {
            self.tree.node_mut(old).parent = None;
        }
        self.tree.adopt(clause, vp, DiscourseFunction::Head)?;
        self.slots_mut(clause)?.head = Some(vp);
        Ok(())
    }

    pub fn set_object(&mut self, target: NodeId, object: NodeId) -> Result<(), TreeError> {
        self.set_verb_complement(target, object, DiscourseFunction::Object)
    }

    pub fn set_object_text(&mut self, target: NodeId, object: &str) -> Result<(), TreeError> {
        let node = self.element(object);
        self.set_object(target, node)
    }

    pub fn set_indirect_object(
        &mut self,
        target: NodeId,
        object: NodeId,
    ) -> Result<(), TreeError> {
        self.set_verb_complement(target, object, DiscourseFunction::IndirectObject)
    }

    pub fn set_indirect_object_text(
        &mut self,
        target: NodeId,
        object: &str,
    ) -> Result<(), TreeError> {
        let node = self.element(object);
        self.set_indirect_object(target, node)
    }

    /// Adds a complement to a clause, verb phrase or other phrase. On a
    /// clause the complement is realised after the verb phrase's own
    /// complements.
    pub fn add_complement(&mut self, target: NodeId, complement: NodeId) -> Result<(), TreeError> {
        self.tree
            .adopt(target, complement, DiscourseFunction::Complement)?;
        self.slots_mut(target)?.complements.push(complement);
        Ok(())
    }

    pub fn add_complement_text(
        &mut self,
        target: NodeId,
        complement: &str,
    ) -> Result<(), TreeError> {
        let node = self.element(complement);
        self.add_complement(target, node)
    }

    pub fn add_pre_modifier(&mut self, target: NodeId, modifier: NodeId) -> Result<(), TreeError> {
        self.tree
            .adopt(target, modifier, DiscourseFunction::PreModifier)?;
        self.slots_mut(target)?.pre_modifiers.push(modifier);
        Ok(())
    }

    pub fn add_pre_modifier_text(
        &mut self,
        target: NodeId,
        modifier: &str,
    ) -> Result<(), TreeError> {
        let node = self.element(modifier);
        self.add_pre_modifier(target, node)
    }

    pub fn add_post_modifier(&mut self, target: NodeId, modifier: NodeId) -> Result<(), TreeError> {
        self.tree
            .adopt(target, modifier, DiscourseFunction::PostModifier)?;
        self.slots_mut(target)?.post_modifiers.push(modifier);
        Ok(())
    }

    pub fn add_post_modifier_text(
        &mut self,
        target: NodeId,
        modifier: &str,
    ) -> Result<(), TreeError> {
        let node = self.element(modifier);
        self.add_post_modifier(target, node)
    }

    /// Adds a modifier with the noun-phrase placement heuristic: single
    /// adjectives premodify, everything else postmodifies.
    pub fn add_modifier_text(&mut self, target: NodeId, modifier: &str) -> Result<(), TreeError> {
        let node = self.element(modifier);
        let is_adjective = matches!(
            &self.tree.node(node).kind,
            NodeKind::Word {
                category: LexicalCategory::Adjective | LexicalCategory::Adverb,
                ..
            }
        );
        if is_adjective {
            self.add_pre_modifier(target, node)
        } else {
            self.add_post_modifier(target, node)
        }
    }

    fn set_head(&mut self, phrase: NodeId, head: NodeId) -> Result<(), TreeError> {
        if let Some(old) = self.slots_mut(phrase)?.head.take() {
            self.tree.node_mut(old).parent = None;
        }
        self.tree.adopt(phrase, head, DiscourseFunction::Head)?;
        self.slots_mut(phrase)?.head = Some(head);
        Ok(())
    }

    /// The clause's verb phrase, created on demand.
    fn clause_verb_phrase(&mut self, clause: NodeId) -> Result<NodeId, TreeError> {
        if let Some(vp) = self.slots_mut(clause)?.head {
            if let NodeKind::Phrase {
                category: PhraseCategory::VerbPhrase,
                ..
            } = self.tree.node(vp).kind
            {
                return Ok(vp);
            }
        }
        let vp = self.phrase(PhraseCategory::VerbPhrase);
        self.set_verb_phrase(clause, vp)?;
        Ok(vp)
    }

    fn set_verb_complement(
        &mut self,
        target: NodeId,
        complement: NodeId,
        function: DiscourseFunction,
    ) -> Result<(), TreeError> {
        let vp = match self.tree.node(target).kind {
            NodeKind::Phrase {
                category: PhraseCategory::Clause,
                ..
            } => self.clause_verb_phrase(target)?,
            _ => target,
        };
        let complements = self.slots_mut(vp)?.complements.clone();
        if let Some(pos) = complements
            .iter()
            .position(|&c| self.tree.node(c).function == Some(function))
        {
            let old = self.slots_mut(vp)?.complements.remove(pos);
            self.tree.node_mut(old).parent = None;
        }
        self.tree.adopt(vp, complement, function)?;
        self.slots_mut(vp)?.complements.push(complement);
        Ok(())
    }

    fn slots_mut(&mut self, id: NodeId) -> Result<&mut PhraseSlots, TreeError> {
        match &mut self.tree.node_mut(id).kind {
            NodeKind::Phrase { slots, .. } => Ok(slots),
            _ => Err(TreeError::InvalidSlot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clause_svo_builds_a_well_formed_tree() {
        let lexicon = Lexicon::builtin();
        let mut b = TreeBuilder::new(&lexicon);
        let clause = b.clause_svo("María", "perseguir", "un mono").unwrap();
        let NodeKind::Phrase { slots, .. } = &b.tree().node(clause).kind else {
            panic!("clause is a phrase");
        };
        assert_eq!(slots.subjects.len(), 1);
        assert!(slots.head.is_some());
    }

    #[test]
    fn known_word_takes_lexicon_category() {
        let lexicon = Lexicon::builtin();
        let mut b = TreeBuilder::new(&lexicon);
        let me = b.element("me");
        assert!(matches!(
            &b.tree().node(me).kind,
            NodeKind::Word {
                category: LexicalCategory::Pronoun,
                ..
            }
        ));
    }

    #[test]
    fn unknown_capitalised_word_is_a_proper_noun() {
        let lexicon = Lexicon::builtin();
        let mut b = TreeBuilder::new(&lexicon);
        let mary = b.element("Mary");
        assert!(b.tree().features(mary).proper);
    }

    #[test]
    fn reused_object_slot_releases_the_old_child() {
        let lexicon = Lexicon::builtin();
        let mut b = TreeBuilder::new(&lexicon);
        let clause = b.clause();
        let first = b.element("o can");
        let second = b.element("a cadela");
        b.set_object(clause, first).unwrap();
        b.set_object(clause, second).unwrap();
        assert!(b.tree().node(first).parent.is_none());
        // The released node can be attached elsewhere.
        let pp = b.preposition_phrase("con", first).unwrap();
        assert!(b.tree().node(pp).parent.is_none());
    }
}
