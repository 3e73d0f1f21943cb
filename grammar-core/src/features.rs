//! Grammatical feature vocabulary.
//!
//! Every feature is a closed enum, and a node's feature set is a struct of
//! typed optional fields rather than a string-keyed map. An absent feature
//! means the documented default: present tense, singular, third person,
//! masculine gender, normal (finite indicative) form.

use serde::{Deserialize, Serialize};

/// Indicative tense of a verb. `Future` and `Conditional` inflect the whole
/// infinitive; the remaining tenses inflect the radical (infinitive minus the
/// two-letter class marker).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, parse_display::Display,
)]
#[serde(rename_all = "lowercase")]
#[display(style = "lowercase")]
pub enum Tense {
    Present,
    Past,
    Imperfect,
    Pluperfect,
    Future,
    Conditional,
}

/// Number agreement. `Both` marks words whose form does not vary with number
/// (e.g. stem-plural nouns); they realise as their base form.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, parse_display::Display,
)]
#[serde(rename_all = "lowercase")]
#[display(style = "lowercase")]
pub enum Number {
    Singular,
    Plural,
    Both,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, parse_display::Display,
)]
#[serde(rename_all = "lowercase")]
#[display(style = "lowercase")]
pub enum Person {
    First,
    Second,
    Third,
}

/// Grammatical gender. `Neuter` is used by invariant pronouns and by
/// adjectives that keep their base form under feminine agreement.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, parse_display::Display,
)]
#[serde(rename_all = "lowercase")]
#[display(style = "lowercase")]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

/// Verb form. `Normal` is the finite indicative selected by [`Tense`];
/// `ConjugateInfinitive` is the Galician personal infinitive, which shares
/// its cells with the future subjunctive.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, parse_display::Display,
)]
#[serde(rename_all = "snake_case")]
#[display(style = "snake_case")]
pub enum VerbForm {
    Normal,
    Infinitive,
    BareInfinitive,
    Gerund,
    PresentParticiple,
    PastParticiple,
    Subjunctive,
    Imperative,
    ConjugateInfinitive,
}

/// The kind of question a clause realises. WH kinds front their
/// interrogative word and suppress the questioned argument.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, parse_display::Display,
)]
#[serde(rename_all = "snake_case")]
#[display(style = "snake_case")]
pub enum InterrogativeKind {
    YesNo,
    WhoSubject,
    WhatSubject,
    WhoObject,
    WhatObject,
    WhoIndirectObject,
    Where,
    Why,
    How,
    HowPredicate,
    HowMany,
}

/// Case role of a pronoun, resolved by the syntax stage from the pronoun's
/// discourse function and the clause's voice. Selects the row of the
/// pronoun table in the morphology stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, parse_display::Display)]
#[display(style = "snake_case")]
pub enum PronounCase {
    Subject,
    DirectObject,
    Reflexive,
    IndirectObject,
    Possessive,
    Prepositional,
}

impl PronounCase {
    /// Row index in the pronoun lookup table.
    pub fn row(self) -> usize {
        match self {
            PronounCase::Subject => 0,
            PronounCase::DirectObject => 1,
            PronounCase::Reflexive => 2,
            PronounCase::IndirectObject => 3,
            PronounCase::Possessive => 4,
            PronounCase::Prepositional => 5,
        }
    }

    /// Whether this case realises as an unstressed clitic that attaches to
    /// the verb.
    pub fn is_clitic(self) -> bool {
        matches!(
            self,
            PronounCase::DirectObject | PronounCase::IndirectObject | PronounCase::Reflexive
        )
    }
}

/// The feature set carried by every tree node and word token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Features {
    pub tense: Option<Tense>,
    pub number: Option<Number>,
    pub person: Option<Person>,
    pub gender: Option<Gender>,
    pub form: Option<VerbForm>,
    pub interrogative: Option<InterrogativeKind>,
    pub negated: bool,
    pub passive: bool,
    pub progressive: bool,
    pub reflexive: bool,
    pub impersonal: bool,
    pub possessive: bool,
    pub pronominal: bool,
    pub appositive: bool,
    pub elided: bool,
    pub proper: bool,
    pub comparative: bool,
    pub superlative: bool,
    /// Modal verb lemma governing the clause, e.g. "poder".
    pub modal: Option<String>,
    /// Subordinating word realised before an embedded clause.
    pub complementiser: Option<String>,
    /// Canned text realised clause-initially.
    pub cue_phrase: Option<String>,
}

impl Features {
    pub fn tense(&self) -> Tense {
        self.tense.unwrap_or(Tense::Present)
    }

    pub fn number(&self) -> Number {
        self.number.unwrap_or(Number::Singular)
    }

    pub fn person(&self) -> Person {
        self.person.unwrap_or(Person::Third)
    }

    pub fn gender(&self) -> Gender {
        self.gender.unwrap_or(Gender::Masculine)
    }

    pub fn form(&self) -> VerbForm {
        self.form.unwrap_or(VerbForm::Normal)
    }

    /// Fills unset features from `parent`. Used by coordination: features
    /// set on the coordination are inherited by each coordinate, but a
    /// coordinate's own explicit features always win.
    pub fn inherit_from(&mut self, parent: &Features) {
        self.tense = self.tense.or(parent.tense);
        self.number = self.number.or(parent.number);
        self.person = self.person.or(parent.person);
        self.gender = self.gender.or(parent.gender);
        self.form = self.form.or(parent.form);
        self.interrogative = self.interrogative.or(parent.interrogative);
        self.negated |= parent.negated;
        self.passive |= parent.passive;
        self.progressive |= parent.progressive;
        self.reflexive |= parent.reflexive;
        self.impersonal |= parent.impersonal;
        self.pronominal |= parent.pronominal;
        self.comparative |= parent.comparative;
        self.superlative |= parent.superlative;
        if self.modal.is_none() {
            self.modal = parent.modal.clone();
        }
    }
}

/// Agreement resolved from a governing node, stamped onto word tokens by the
/// syntax stage. The morphology stage consults this, not the word's own
/// instance features, wherever agreement is governor-driven (adjectives,
/// determiners, finite verbs, passive participles).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Agreement {
    pub gender: Option<Gender>,
    pub number: Option<Number>,
    pub person: Option<Person>,
}

impl Agreement {
    pub fn gender(&self) -> Gender {
        self.gender.unwrap_or(Gender::Masculine)
    }

    pub fn number(&self) -> Number {
        self.number.unwrap_or(Number::Singular)
    }

    pub fn person(&self) -> Person {
        self.person.unwrap_or(Person::Third)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_features_default() {
        let f = Features::default();
        assert_eq!(f.tense(), Tense::Present);
        assert_eq!(f.number(), Number::Singular);
        assert_eq!(f.person(), Person::Third);
        assert_eq!(f.gender(), Gender::Masculine);
        assert_eq!(f.form(), VerbForm::Normal);
    }

    #[test]
    fn coordinate_features_win_over_inherited() {
        let mut child = Features {
            tense: Some(Tense::Past),
            ..Features::default()
        };
        let parent = Features {
            tense: Some(Tense::Future),
            number: Some(Number::Plural),
            ..Features::default()
        };
        child.inherit_from(&parent);
        assert_eq!(child.tense(), Tense::Past);
        assert_eq!(child.number(), Number::Plural);
    }
}
