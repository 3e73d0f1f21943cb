//! Shared data model for the Galician surface realiser: the feature
//! vocabulary, the arena-backed phrase tree, the word-token sequence
//! exchanged between pipeline stages, the lexicon and the phrase builder.

pub mod builder;
pub mod features;
pub mod lexicon;
pub mod sequence;
pub mod tree;

use serde::{Deserialize, Serialize};

pub use builder::TreeBuilder;
pub use features::{
    Agreement, Features, Gender, InterrogativeKind, Number, Person, PronounCase, Tense, VerbForm,
};
pub use lexicon::{FormKey, InflectionTable, LexicalUnit, Lexicon};
pub use sequence::{LiteralText, TokenSeq, WordToken};
pub use tree::{Node, NodeId, NodeKind, PhraseSlots, SyntaxTree, TreeError};

/// Word-level category.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    parse_display::Display,
)]
#[serde(rename_all = "lowercase")]
#[display(style = "lowercase")]
pub enum LexicalCategory {
    Noun,
    Verb,
    Modal,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Preposition,
    Conjunction,
}

/// Phrase-level category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, parse_display::Display)]
#[display(style = "snake_case")]
pub enum PhraseCategory {
    Clause,
    NounPhrase,
    VerbPhrase,
    PrepositionalPhrase,
    AdjectivePhrase,
    AdverbPhrase,
}

/// The grammatical role a node plays in its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, parse_display::Display)]
#[display(style = "snake_case")]
pub enum DiscourseFunction {
    Subject,
    Object,
    IndirectObject,
    Specifier,
    PreModifier,
    PostModifier,
    Auxiliary,
    Complement,
    Head,
    Conjunction,
    CuePhrase,
    Complementiser,
}
