//! Clause realisation: subject-driven agreement, voice transformation,
//! verb-group assembly and interrogative word order.

use grammar_core::{
    Agreement, DiscourseFunction, Features, Gender, InterrogativeKind, LexicalCategory, NodeId,
    NodeKind, Number, Person, PhraseCategory, VerbForm, WordToken,
};

use super::verb_phrase::{self, VpOptions, VpParts};
use super::{nominal_agreement, realise_node, Cx, Outer};

pub(crate) fn realise(cx: &Cx, id: NodeId, features: Features) -> Vec<WordToken> {
    let NodeKind::Phrase { slots, .. } = &cx.tree.node(id).kind else {
        return Vec::new();
    };
    let slots = slots.clone();
    let f = features;

    let vp = slots.head;
    let (object, indirect) = object_ids(cx, vp);
    let copular = verb_lemma(cx, vp).is_some_and(|l| verb_phrase::is_copular(&l));

    // Passive: the direct object is promoted into subject position; with
    // an indirect object present, that one is promoted and the direct
    // object survives as a complement.
    let mut promoted: Option<NodeId> = None;
    let mut suppress_object = false;
    let mut suppress_indirect = false;
    if f.passive {
        if let (Some(io), Some(_)) = (indirect, object) {
            promoted = Some(unwrap_case_marker(cx, io));
            suppress_indirect = true;
        } else if let Some(o) = object {
            promoted = Some(unwrap_case_marker(cx, o));
            suppress_object = true;
        }
    }

    let mut agreement = if f.passive {
        promoted
            .map(|p| nominal_agreement(cx, p))
            .unwrap_or_default()
    } else {
        subject_agreement(cx, &slots.subjects)
    };
    if matches!(
        f.interrogative,
        Some(InterrogativeKind::WhoSubject | InterrogativeKind::WhatSubject)
    ) && copular
    {
        // the copular verb agrees with its complement, not the wh subject
        agreement.number = Some(verb_phrase::complement_number(cx, vp));
    }

    let suppress_subject = matches!(
        f.form(),
        VerbForm::Infinitive | VerbForm::BareInfinitive | VerbForm::Imperative | VerbForm::Gerund
    ) || matches!(
        f.interrogative,
        Some(InterrogativeKind::WhoSubject | InterrogativeKind::WhatSubject)
    );

    let mut subject_tokens: Vec<WordToken> = Vec::new();
    if !suppress_subject {
        if f.passive {
            if let Some(p) = promoted {
                subject_tokens = realise_node(
                    cx,
                    p,
                    &Outer {
                        function: Some(DiscourseFunction::Subject),
                        ..Outer::default()
                    },
                );
            }
        } else {
            for &s in &slots.subjects {
                subject_tokens.extend(realise_node(
                    cx,
                    s,
                    &Outer {
                        function: Some(DiscourseFunction::Subject),
                        ..Outer::default()
                    },
                ));
            }
        }
    }

    // the demoted subject resurfaces inside a "por" agent post-modifier
    let mut agent: Vec<WordToken> = Vec::new();
    if f.passive && !slots.subjects.is_empty() {
        agent.push(WordToken::word(
            "por",
            LexicalCategory::Preposition,
            DiscourseFunction::PostModifier,
        ));
        for &s in &slots.subjects {
            agent.extend(realise_node(
                cx,
                s,
                &Outer {
                    function: Some(DiscourseFunction::PostModifier),
                    in_pp: true,
                    passive: true,
                    ..Outer::default()
                },
            ));
        }
    }

    match f.interrogative {
        Some(
            InterrogativeKind::WhoObject
            | InterrogativeKind::WhatObject
            | InterrogativeKind::HowMany,
        ) => suppress_object = true,
        Some(InterrogativeKind::WhoIndirectObject) => suppress_indirect = true,
        _ => {}
    }

    let parts = verb_phrase::parts(
        cx,
        vp,
        &f,
        agreement,
        VpOptions {
            suppress_object,
            suppress_indirect,
            participle_agreement: promoted.map(|p| nominal_agreement(cx, p)),
            subject_agreement: agreement,
            agent,
        },
    );

    let mut out: Vec<WordToken> = Vec::new();
    if let Some(cue) = &f.cue_phrase {
        out.push(WordToken::canned(cue.clone(), DiscourseFunction::CuePhrase));
    }
    if cx.tree.node(id).parent.is_some() {
        if let Some(c) = &f.complementiser {
            out.push(WordToken::canned(
                c.clone(),
                DiscourseFunction::Complementiser,
            ));
        }
    }
    let mut front_modifiers: Vec<WordToken> = Vec::new();
    for &m in &slots.pre_modifiers {
        front_modifiers.extend(realise_node(
            cx,
            m,
            &Outer {
                function: Some(DiscourseFunction::PreModifier),
                ..Outer::default()
            },
        ));
    }

    match f.interrogative {
        None => {
            // modifiers of the clause sit between subject and verb group
            out.extend(subject_tokens);
            out.extend(front_modifiers);
            out.extend(parts.declarative());
        }
        Some(InterrogativeKind::YesNo) => {
            out.extend(front_modifiers);
            out.extend(fronted_verb(parts, subject_tokens));
        }
        Some(InterrogativeKind::WhoSubject) => {
            out.push(wh_pronoun("quen"));
            out.extend(front_modifiers);
            out.extend(parts.declarative());
        }
        Some(InterrogativeKind::WhatSubject) => {
            out.push(wh_pronoun("que"));
            out.extend(front_modifiers);
            out.extend(parts.declarative());
        }
        Some(InterrogativeKind::WhoObject | InterrogativeKind::WhoIndirectObject) => {
            out.push(WordToken::word(
                "a",
                LexicalCategory::Preposition,
                DiscourseFunction::Complement,
            ));
            out.push(wh_pronoun("quen"));
            out.extend(front_modifiers);
            out.extend(verb_then_subject(parts, subject_tokens));
        }
        Some(InterrogativeKind::WhatObject) => {
            out.push(wh_pronoun("que"));
            out.extend(front_modifiers);
            out.extend(verb_then_subject(parts, subject_tokens));
        }
        Some(InterrogativeKind::Where) => {
            out.push(wh_pronoun("onde"));
            out.extend(front_modifiers);
            out.extend(fronted_verb(parts, subject_tokens));
        }
        Some(InterrogativeKind::Why) => {
            out.push(WordToken::canned("por que", DiscourseFunction::Complement));
            out.extend(front_modifiers);
            out.extend(fronted_verb(parts, subject_tokens));
        }
        Some(InterrogativeKind::How | InterrogativeKind::HowPredicate) => {
            out.push(wh_pronoun("como"));
            out.extend(front_modifiers);
            out.extend(fronted_verb(parts, subject_tokens));
        }
        Some(InterrogativeKind::HowMany) => {
            let object_agr = object
                .map(|o| nominal_agreement(cx, o))
                .unwrap_or_default();
            let wh = if object_agr.gender() == Gender::Feminine {
                "cantas"
            } else {
                "cantos"
            };
            out.push(wh_pronoun(wh));
            if let Some(o) = object {
                let mut tokens = realise_node(
                    cx,
                    o,
                    &Outer {
                        function: Some(DiscourseFunction::Object),
                        ..Outer::default()
                    },
                );
                tokens.retain(|t| t.function != DiscourseFunction::Specifier);
                for t in &mut tokens {
                    t.features.number = Some(Number::Plural);
                    t.agreement.number = Some(Number::Plural);
                }
                out.extend(tokens);
            }
            out.extend(front_modifiers);
            out.extend(verb_then_subject(parts, subject_tokens));
        }
    }

    for &c in &slots.complements {
        out.extend(realise_node(cx, c, &Outer::default()));
    }
    for &m in &slots.post_modifiers {
        out.extend(realise_node(
            cx,
            m,
            &Outer {
                function: Some(DiscourseFunction::PostModifier),
                ..Outer::default()
            },
        ));
    }
    out
}

/// A verb phrase realised outside a clause: no subject, default agreement.
pub(crate) fn realise_bare_verb_phrase(cx: &Cx, id: NodeId, features: Features) -> Vec<WordToken> {
    verb_phrase::parts(
        cx,
        Some(id),
        &features,
        Agreement::default(),
        VpOptions::default(),
    )
    .declarative()
}

/// Yes/no (and adverbial wh) order: the tense-bearing element fronts, the
/// subject follows it, the rest of the verb group resumes after.
fn fronted_verb(parts: VpParts, subject: Vec<WordToken>) -> Vec<WordToken> {
    let mut out = parts.pre;
    out.extend(parts.negation);
    let (front, rest) = verb_phrase::split_front(parts.aux, parts.main);
    out.extend(front);
    out.extend(subject);
    out.extend(rest);
    out.extend(parts.complements);
    out.extend(parts.post);
    out
}

/// Wh-argument order: the whole verb group precedes the subject.
fn verb_then_subject(parts: VpParts, subject: Vec<WordToken>) -> Vec<WordToken> {
    let mut out = parts.pre;
    out.extend(parts.negation);
    out.extend(parts.aux);
    out.extend(parts.main);
    out.extend(subject);
    out.extend(parts.complements);
    out.extend(parts.post);
    out
}

fn wh_pronoun(lemma: &str) -> WordToken {
    let mut token = WordToken::word(
        lemma,
        LexicalCategory::Pronoun,
        DiscourseFunction::Complement,
    );
    token.no_morphology = true;
    token
}

fn verb_lemma(cx: &Cx, vp: Option<NodeId>) -> Option<String> {
    let vp = vp?;
    let NodeKind::Phrase { slots, .. } = &cx.tree.node(vp).kind else {
        return None;
    };
    match &cx.tree.node(slots.head?).kind {
        NodeKind::Word { lemma, .. } => Some(lemma.clone()),
        _ => None,
    }
}

fn object_ids(cx: &Cx, vp: Option<NodeId>) -> (Option<NodeId>, Option<NodeId>) {
    let Some(vp) = vp else {
        return (None, None);
    };
    let NodeKind::Phrase { slots, .. } = &cx.tree.node(vp).kind else {
        return (None, None);
    };
    let mut object = None;
    let mut indirect = None;
    for &c in &slots.complements {
        match cx.tree.node(c).function {
            Some(DiscourseFunction::Object) if object.is_none() => object = Some(c),
            Some(DiscourseFunction::IndirectObject) if indirect.is_none() => indirect = Some(c),
            _ => {}
        }
    }
    (object, indirect)
}

/// Strips the personal-"a" case marker off an object when promoting it.
fn unwrap_case_marker(cx: &Cx, id: NodeId) -> NodeId {
    if let NodeKind::Phrase {
        category: PhraseCategory::PrepositionalPhrase,
        slots,
    } = &cx.tree.node(id).kind
    {
        if let Some(head) = slots.head {
            if let NodeKind::Word { lemma, .. } = &cx.tree.node(head).kind {
                if lemma == "a" {
                    if let Some(&complement) = slots.complements.first() {
                        return complement;
                    }
                }
            }
        }
    }
    id
}

fn subject_agreement(cx: &Cx, subjects: &[NodeId]) -> Agreement {
    match subjects {
        [] => Agreement::default(),
        [s] => nominal_agreement(cx, *s),
        many => {
            let members: Vec<Agreement> = many.iter().map(|&s| nominal_agreement(cx, s)).collect();
            let person = members
                .iter()
                .map(|a| a.person())
                .min_by_key(|p| match p {
                    Person::First => 0,
                    Person::Second => 1,
                    Person::Third => 2,
                })
                .unwrap_or(Person::Third);
            let all_feminine = members.iter().all(|a| a.gender() == Gender::Feminine);
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
    }
}
