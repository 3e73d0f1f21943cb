//! Syntax engine: linearises a phrase tree into the flat word-token
//! sequence, resolving agreement, voice, verb-group construction and
//! interrogative word order on the way.

mod clause;
mod coordination;
mod noun_phrase;
mod phrase;
mod verb_phrase;

use grammar_core::{
    Agreement, DiscourseFunction, Features, Gender, LexicalCategory, Lexicon, NodeId, NodeKind,
    Number, Person, PhraseCategory, PronounCase, SyntaxTree, TokenSeq, WordToken,
};

pub(crate) struct Cx<'a> {
    pub tree: &'a SyntaxTree,
    pub lexicon: &'a Lexicon,
}

/// Realisation context handed down from the governing node.
#[derive(Clone, Debug, Default)]
pub(crate) struct Outer {
    /// Discourse function override for the realised tokens.
    pub function: Option<DiscourseFunction>,
    /// Agreement resolved from the governor.
    pub agreement: Agreement,
    /// Inside a prepositional phrase (pronouns take prepositional case).
    pub in_pp: bool,
    /// Inside a passive clause (flips pronoun case selection).
    pub passive: bool,
    /// Features inherited from a coordination.
    pub inherited: Option<Features>,
}

/// Linearises the tree rooted at `root`.
pub(crate) fn realise(tree: &SyntaxTree, lexicon: &Lexicon, root: NodeId) -> TokenSeq {
    let cx = Cx { tree, lexicon };
    TokenSeq::new(realise_node(&cx, root, &Outer::default()))
}

pub(crate) fn realise_node(cx: &Cx, id: NodeId, outer: &Outer) -> Vec<WordToken> {
    let node = cx.tree.node(id);
    let mut features = node.features.clone();
    if let Some(inherited) = &outer.inherited {
        features.inherit_from(inherited);
    }
    if features.elided {
        return Vec::new();
    }
    let function = outer
        .function
        .or(node.function)
        .unwrap_or(DiscourseFunction::Complement);

    match &node.kind {
        NodeKind::Literal(text) => {
            let mut token = WordToken::canned(text.clone(), function);
            token.features = features;
            vec![token]
        }
        NodeKind::Word {
            lemma,
            category,
            overrides,
        } => {
            vec![word_token(
                lemma, *category, overrides, features, function, outer,
            )]
        }
        NodeKind::Coordination { .. } => coordination::realise(cx, id, features, function, outer),
        NodeKind::Phrase { category, .. } => match category {
            PhraseCategory::Clause => clause::realise(cx, id, features),
            PhraseCategory::NounPhrase => noun_phrase::realise(cx, id, features, function, outer),
            PhraseCategory::VerbPhrase => clause::realise_bare_verb_phrase(cx, id, features),
            PhraseCategory::PrepositionalPhrase
            | PhraseCategory::AdjectivePhrase
            | PhraseCategory::AdverbPhrase => {
                phrase::realise(cx, id, *category, features, function, outer)
            }
        },
    }
}

/// Builds the token for a single word, stamping governor agreement and
/// pronoun case.
pub(crate) fn word_token(
    lemma: &str,
    category: LexicalCategory,
    overrides: &grammar_core::InflectionTable,
    features: Features,
    function: DiscourseFunction,
    outer: &Outer,
) -> WordToken {
    let mut token = WordToken::word(lemma, category, function);
    token.overrides = overrides.clone();
    token.features = features;
    token.agreement = outer.agreement;
    if category == LexicalCategory::Pronoun {
        token.case = Some(pronoun_case(&token, function, outer));
    }
    token
}

/// Case-role resolution for pronouns, from discourse function, voice and
/// position: reflexives and possessives keep their role, passive subjects
/// and prepositional complements go tonic, objects cliticise.
fn pronoun_case(token: &WordToken, function: DiscourseFunction, outer: &Outer) -> PronounCase {
    if token.features.reflexive {
        return PronounCase::Reflexive;
    }
    if token.features.possessive {
        return PronounCase::Possessive;
    }
    if outer.in_pp {
        return PronounCase::Prepositional;
    }
    match function {
        DiscourseFunction::Subject if outer.passive => PronounCase::Prepositional,
        DiscourseFunction::Subject | DiscourseFunction::Specifier => PronounCase::Subject,
        DiscourseFunction::IndirectObject => PronounCase::IndirectObject,
        DiscourseFunction::Object if outer.passive => PronounCase::Subject,
        DiscourseFunction::Object => PronounCase::DirectObject,
        DiscourseFunction::Complement if outer.passive => PronounCase::Subject,
        _ => PronounCase::DirectObject,
    }
}

/// Gender/number/person of a nominal node, for agreement resolution.
pub(crate) fn nominal_agreement(cx: &Cx, id: NodeId) -> Agreement {
    let node = cx.tree.node(id);
    match &node.kind {
        NodeKind::Word { lemma, category, .. } => {
            let unit = cx.lexicon.lookup(lemma, *category);
            Agreement {
                gender: node.features.gender.or(unit.and_then(|u| u.gender)),
                number: node.features.number.or(unit.and_then(|u| u.number)),
                person: node.features.person.or(unit.and_then(|u| u.person)),
            }
        }
        NodeKind::Phrase {
            category: PhraseCategory::NounPhrase,
            slots,
        } => {
            let mut agr = Agreement {
                gender: node.features.gender,
                number: node.features.number,
                person: node.features.person,
            };
            if let Some(head) = slots.head {
                let head_agr = nominal_agreement(cx, head);
                agr.gender = agr.gender.or(head_agr.gender);
                agr.number = agr.number.or(head_agr.number);
                agr.person = agr.person.or(head_agr.person);
            }
            agr
        }
        NodeKind::Coordination { coordinates, .. } => {
            let members: Vec<Agreement> =
                coordinates.iter().map(|&c| nominal_agreement(cx, c)).collect();
            let person = members
                .iter()
                .map(|a| a.person())
                .min_by_key(|p| match p {
                    Person::First => 0,
                    Person::Second => 1,
                    Person::Third => 2,
                })
                .unwrap_or(Person::Third);
            let all_feminine = !members.is_empty()
                && members.iter().all(|a| a.gender() == Gender::Feminine);
            Agreement {
                gender: Some(if all_feminine {
                    Gender::Feminine
                } else {
                    Gender::Masculine
                }),
                number: Some(Number::Plural),
                person: Some(person),
            }
        }
        NodeKind::Literal(text) => {
            // a canned noun phrase reveals gender/number through its article
            let first = text.split(' ').next().unwrap_or_default();
            let (gender, number) = match first {
                "o" | "un" => (Some(Gender::Masculine), Some(Number::Singular)),
                "a" | "unha" => (Some(Gender::Feminine), Some(Number::Singular)),
                "os" | "uns" => (Some(Gender::Masculine), Some(Number::Plural)),
                "as" | "unhas" => (Some(Gender::Feminine), Some(Number::Plural)),
                _ => (None, None),
            };
            Agreement {
                gender,
                number: node.features.number.or(number),
                person: None,
            }
        }
        _ => Agreement::default(),
    }
}
