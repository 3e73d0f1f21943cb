//! Noun-phrase realisation: specifier, pre-modifiers, head, complements,
//! post-modifiers in fixed order, with the head's gender/number/person
//! stamped as governor agreement on specifier and modifier tokens.

use grammar_core::{DiscourseFunction, Features, NodeId, NodeKind, WordToken};

use super::{nominal_agreement, realise_node, Cx, Outer};

pub(crate) fn realise(
    cx: &Cx,
    id: NodeId,
    features: Features,
    function: DiscourseFunction,
    outer: &Outer,
) -> Vec<WordToken> {
    let NodeKind::Phrase { slots, .. } = &cx.tree.node(id).kind else {
        return Vec::new();
    };
    let slots = slots.clone();

    let mut agreement = nominal_agreement(cx, id);
    agreement.gender = features.gender.or(agreement.gender);
    agreement.number = features.number.or(agreement.number);

    let mut out = Vec::new();
    if let Some(specifier) = slots.specifier {
        out.extend(realise_node(
            cx,
            specifier,
            &Outer {
                function: Some(DiscourseFunction::Specifier),
                agreement,
                ..Outer::default()
            },
        ));
    }
    for &m in &slots.pre_modifiers {
        out.extend(realise_node(
            cx,
            m,
            &Outer {
                function: Some(DiscourseFunction::PreModifier),
                agreement,
                ..Outer::default()
            },
        ));
    }
    if let Some(head) = slots.head {
        out.extend(realise_node(
            cx,
            head,
            &Outer {
                function: Some(function),
                agreement,
                in_pp: outer.in_pp,
                passive: outer.passive,
                ..Outer::default()
            },
        ));
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
                agreement,
                ..Outer::default()
            },
        ));
    }
    out
}
