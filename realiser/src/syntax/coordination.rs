//! Coordination realisation: each coordinate realised independently with
//! inherited features, joined by commas and the conjunction token.

use grammar_core::{DiscourseFunction, Features, LexicalCategory, NodeId, NodeKind, WordToken};

use super::{realise_node, Cx, Outer};

pub(crate) fn realise(
    cx: &Cx,
    id: NodeId,
    features: Features,
    function: DiscourseFunction,
    outer: &Outer,
) -> Vec<WordToken> {
    let NodeKind::Coordination {
        conjunction,
        coordinates,
    } = &cx.tree.node(id).kind
    else {
        return Vec::new();
    };
    let conjunction = conjunction.clone();
    let coordinates = coordinates.clone();
    let last = coordinates.len().saturating_sub(1);

    let mut out = Vec::new();
    for (i, &coordinate) in coordinates.iter().enumerate() {
        if i > 0 {
            if i == last {
                if !conjunction.is_empty() {
                    out.push(WordToken::word(
                        conjunction.clone(),
                        LexicalCategory::Conjunction,
                        DiscourseFunction::Conjunction,
                    ));
                }
            } else {
                out.push(WordToken::canned(",", DiscourseFunction::Conjunction));
            }
        }
        out.extend(realise_node(
            cx,
            coordinate,
            &Outer {
                function: Some(function),
                agreement: outer.agreement,
                in_pp: outer.in_pp,
                passive: outer.passive,
                inherited: Some(features.clone()),
            },
        ));
    }
    out
}
