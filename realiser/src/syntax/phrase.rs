//! Prepositional, adjective and adverb phrase realisation.

use grammar_core::{DiscourseFunction, Features, NodeId, NodeKind, PhraseCategory, WordToken};

use super::{realise_node, Cx, Outer};

pub(crate) fn realise(
    cx: &Cx,
    id: NodeId,
    category: PhraseCategory,
    features: Features,
    function: DiscourseFunction,
    outer: &Outer,
) -> Vec<WordToken> {
    let NodeKind::Phrase { slots, .. } = &cx.tree.node(id).kind else {
        return Vec::new();
    };
    let slots = slots.clone();
    let in_pp = category == PhraseCategory::PrepositionalPhrase;

    let mut out = Vec::new();
    for &m in &slots.pre_modifiers {
        out.extend(realise_node(
            cx,
            m,
            &Outer {
                function: Some(DiscourseFunction::PreModifier),
                agreement: outer.agreement,
                ..Outer::default()
            },
        ));
    }
    if let Some(head) = slots.head {
        // the head adjective/adverb agrees with the phrase's governor and
        // inherits the phrase's degree features
        out.extend(realise_node(
            cx,
            head,
            &Outer {
                function: Some(function),
                agreement: outer.agreement,
                inherited: Some(features.clone()),
                ..Outer::default()
            },
        ));
    }
    for &c in &slots.complements {
        out.extend(realise_node(
            cx,
            c,
            &Outer {
                function: Some(DiscourseFunction::Complement),
                in_pp,
                passive: outer.passive,
                ..Outer::default()
            },
        ));
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
