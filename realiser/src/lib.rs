//! Surface realiser for Galician.
//!
//! Takes a feature-annotated phrase tree (built with
//! [`grammar_core::TreeBuilder`]) and deterministically produces inflected,
//! correctly ordered surface text: the syntax stage linearises the tree
//! into a word-token sequence, the realiser decides clitic placement once
//! per realisation, and the morphology stage inflects every token and runs
//! the cross-word contraction/clitic pass.
//!
//! ```
//! use galician_realiser::Realiser;
//! use grammar_core::{Lexicon, TreeBuilder};
//!
//! let lexicon = Lexicon::builtin();
//! let mut builder = TreeBuilder::new(&lexicon);
//! let clause = builder.clause_svo("María", "perseguir", "un mono").unwrap();
//! let realiser = Realiser::new(&lexicon);
//! assert_eq!(
//!     realiser.realise_text(builder.tree(), clause),
//!     "María persegue un mono"
//! );
//! ```
//!
//! The output is a sequence of frozen [`LiteralText`] tokens (or their
//! space-joined text); capitalisation, punctuation and layout belong to a
//! downstream orthography stage.

mod morphology;
mod syntax;

use grammar_core::{LexicalCategory, Lexicon, LiteralText, NodeId, SyntaxTree, WordToken};
use itertools::Itertools;

use morphology::CliticPlacement;

/// Subordinating words that force proclisis on a following verb.
const SUBORDINATORS: [&str; 3] = ["porque", "que", "se"];
/// Adverbs that force proclisis when they precede the verb.
const PREVERBAL_ADVERBS: [&str; 18] = [
    "quizais", "talvez", "seica", "disque", "xa", "só", "mal", "axiña", "sempre", "aínda",
    "aquí", "aí", "alí", "máis", "menos", "ata", "até", "tamén",
];
/// Indefinite pronouns with the same effect.
const INDEFINITES: [&str; 9] = [
    "ninguén", "alguén", "calquera", "mesmo", "algo", "nada", "bastante", "todo", "ambos",
];
/// Interrogative words with the same effect.
const INTERROGATIVE_WORDS: [&str; 4] = ["cando", "onde", "canto", "como"];
/// Desiderative particles with the same effect.
const DESIDERATIVES: [&str; 1] = ["oxalá"];

/// The realisation pipeline: syntax, clitic-placement decision, morphology.
/// Holds only a reference to the shared read-only lexicon, so independent
/// realisations may run in parallel.
pub struct Realiser<'l> {
    lexicon: &'l Lexicon,
}

impl<'l> Realiser<'l> {
    pub fn new(lexicon: &'l Lexicon) -> Self {
        Realiser { lexicon }
    }

    /// Realises the tree rooted at `root` into frozen literal-text tokens
    /// with their discourse-function and appositive markers intact.
    pub fn realise(&self, tree: &SyntaxTree, root: NodeId) -> Vec<LiteralText> {
        let seq = syntax::realise(tree, self.lexicon, root);
        log::debug!(
            "post-syntax sequence: {:?}",
            seq.iter().map(|t| t.lemma.as_str()).collect::<Vec<_>>()
        );
        let placement = clitic_placement(tree, root, &seq);
        log::debug!("clitic placement: {placement:?}");
        morphology::realise_sequence(seq, self.lexicon, placement)
    }

    /// Realises the tree to plain text (tokens joined with spaces).
    pub fn realise_text(&self, tree: &SyntaxTree, root: NodeId) -> String {
        self.realise(tree, root)
            .iter()
            .map(|t| t.text.as_str())
            .join(" ")
            .replace(" ,", ",")
    }

    /// Realises several independent trees in order.
    pub fn realise_texts(&self, tree: &SyntaxTree, roots: &[NodeId]) -> Vec<String> {
        roots
            .iter()
            .map(|&root| self.realise_text(tree, root))
            .collect()
    }
}

/// The global pronoun-position decision, a pure function of the realised
/// token sequence: enclisis by default; proclisis in negated and
/// interrogative clauses and whenever a subordinator, a triggering adverb,
/// an indefinite, an interrogative word or a desiderative particle
/// precedes the first verb.
fn clitic_placement(tree: &SyntaxTree, root: NodeId, seq: &grammar_core::TokenSeq) -> CliticPlacement {
    let features = tree.features(root);
    if features.negated || features.interrogative.is_some() {
        return CliticPlacement::Proclitic;
    }
    let Some(verb) = seq.first_verb() else {
        return CliticPlacement::Enclitic;
    };
    if seq.iter().take(verb).any(triggers_proclisis) {
        CliticPlacement::Proclitic
    } else {
        CliticPlacement::Enclitic
    }
}

fn triggers_proclisis(token: &WordToken) -> bool {
    if token.category == LexicalCategory::Adverb && !token.literal {
        return true;
    }
    let word = token.lemma.as_str();
    SUBORDINATORS.contains(&word)
        || PREVERBAL_ADVERBS.contains(&word)
        || INDEFINITES.contains(&word)
        || INTERROGATIVE_WORDS.contains(&word)
        || DESIDERATIVES.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use grammar_core::TreeBuilder;

    #[test]
    fn declarative_clause_is_enclitic() {
        let lexicon = Lexicon::builtin();
        let mut b = TreeBuilder::new(&lexicon);
        let clause = b.clause_svo("María", "dicir", "o").unwrap();
        let seq = syntax::realise(b.tree(), &lexicon, clause);
        assert_eq!(
            clitic_placement(b.tree(), clause, &seq),
            CliticPlacement::Enclitic
        );
    }

    #[test]
    fn negation_forces_proclisis() {
        let lexicon = Lexicon::builtin();
        let mut b = TreeBuilder::new(&lexicon);
        let clause = b.clause_svo("María", "dicir", "o").unwrap();
        b.features_mut(clause).negated = true;
        let seq = syntax::realise(b.tree(), &lexicon, clause);
        assert_eq!(
            clitic_placement(b.tree(), clause, &seq),
            CliticPlacement::Proclitic
        );
    }

    #[test]
    fn preverbal_adverb_forces_proclisis() {
        let lexicon = Lexicon::builtin();
        let mut b = TreeBuilder::new(&lexicon);
        let clause = b.clause_svo("María", "dicir", "o").unwrap();
        b.add_pre_modifier_text(clause, "quizais").unwrap();
        let seq = syntax::realise(b.tree(), &lexicon, clause);
        assert_eq!(
            clitic_placement(b.tree(), clause, &seq),
            CliticPlacement::Proclitic
        );
    }
}
