//! Verb-phrase realisation: verb-group construction as a stack of
//! components (modal, progressive auxiliary, passive auxiliary, main verb),
//! split into auxiliary and main sub-stacks, plus complements in fixed
//! order (direct object before indirect object) and post-modifiers.

use grammar_core::{
    Agreement, DiscourseFunction, Features, LexicalCategory, NodeId, NodeKind, VerbForm, WordToken,
};

use super::{realise_node, Cx, Outer};

#[derive(Clone, Debug, Default)]
pub(crate) struct VpOptions {
    pub suppress_object: bool,
    pub suppress_indirect: bool,
    /// Agreement of the promoted argument, driving the passive participle.
    pub participle_agreement: Option<Agreement>,
    /// Subject agreement, stamped onto predicative complements of copular
    /// heads.
    pub subject_agreement: Agreement,
    /// Agent phrase tokens appended after the post-modifiers (passive).
    pub agent: Vec<WordToken>,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct VpParts {
    pub pre: Vec<WordToken>,
    pub negation: Vec<WordToken>,
    pub aux: Vec<WordToken>,
    pub main: Vec<WordToken>,
    pub complements: Vec<WordToken>,
    pub post: Vec<WordToken>,
    pub copular: bool,
}

impl VpParts {
    /// Declarative order. The copular short form only applies when no
    /// auxiliary is realised.
    pub fn declarative(self) -> Vec<WordToken> {
        let mut out = Vec::new();
        if self.copular && self.aux.is_empty() {
            out.extend(self.negation);
            out.extend(self.main);
            out.extend(self.pre);
        } else {
            out.extend(self.pre);
            out.extend(self.negation);
            out.extend(self.aux);
            out.extend(self.main);
        }
        out.extend(self.complements);
        out.extend(self.post);
        out
    }
}

pub(crate) fn is_copular(lemma: &str) -> bool {
    matches!(lemma, "ser" | "estar")
}

/// Builds the verb phrase's parts under the clause's resolved agreement.
pub(crate) fn parts(
    cx: &Cx,
    vp: Option<NodeId>,
    clause_features: &Features,
    agreement: Agreement,
    options: VpOptions,
) -> VpParts {
    let mut parts = VpParts::default();
    let Some(vp) = vp else {
        parts.post = options.agent;
        return parts;
    };
    let node = cx.tree.node(vp);
    let NodeKind::Phrase { slots, .. } = &node.kind else {
        parts.post = options.agent;
        return parts;
    };
    let slots = slots.clone();
    let mut features = node.features.clone();
    features.inherit_from(clause_features);

    let chain = verb_group(cx, &slots, &features, clause_features, agreement, &options);
    parts.copular = head_lemma(cx, &slots).is_some_and(|l| is_copular(&l));

    if features.negated {
        parts.negation.push(WordToken::word(
            "non",
            LexicalCategory::Adverb,
            DiscourseFunction::PreModifier,
        ));
    }

    for &m in &slots.pre_modifiers {
        parts.pre.extend(realise_node(
            cx,
            m,
            &Outer {
                function: Some(DiscourseFunction::PreModifier),
                ..Outer::default()
            },
        ));
    }

    let mut chain = chain;
    if let Some(main) = chain.pop() {
        parts.main = vec![main];
        for aux in &mut chain {
            aux.function = DiscourseFunction::Auxiliary;
        }
        parts.aux = chain;
    }

    // reflexive or pronominal "se" rides along as an ordinary clitic
    if (features.reflexive || features.pronominal) && features.modal.is_none() {
        let mut se = WordToken::word(
            "se",
            LexicalCategory::Pronoun,
            DiscourseFunction::Complement,
        );
        se.features.person = Some(grammar_core::Person::Third);
        se.features.reflexive = true;
        se.case = Some(grammar_core::PronounCase::Reflexive);
        parts.complements.push(se);
    }

    parts
        .complements
        .extend(complements(cx, &slots, &features, &options, parts.copular));

    for &m in &slots.post_modifiers {
        parts.post.extend(realise_node(
            cx,
            m,
            &Outer {
                function: Some(DiscourseFunction::PostModifier),
                ..Outer::default()
            },
        ));
    }
    parts.post.extend(options.agent);
    parts
}

fn head_lemma(cx: &Cx, slots: &grammar_core::PhraseSlots) -> Option<String> {
    let head = slots.head?;
    match &cx.tree.node(head).kind {
        NodeKind::Word { lemma, .. } => Some(lemma.clone()),
        _ => None,
    }
}

/// The verb-component stack: [modal] [estar (progressive)] [ser (passive)]
/// main verb, innermost first; each wrap moves the finite inflection
/// outwards. Once a modal is present the inner verbs lose negation (the
/// single "non" surfaces before the modal) and take the bare infinitive.
fn verb_group(
    cx: &Cx,
    slots: &grammar_core::PhraseSlots,
    features: &Features,
    clause_features: &Features,
    agreement: Agreement,
    options: &VpOptions,
) -> Vec<WordToken> {
    let mut chain: Vec<WordToken> = Vec::new();
    if let Some(head) = slots.head {
        let head_node = cx.tree.node(head);
        if let NodeKind::Word {
            lemma,
            category,
            overrides,
        } = &head_node.kind
        {
            let mut token =
                WordToken::word(lemma.clone(), *category, DiscourseFunction::Head);
            token.overrides = overrides.clone();
            token.features = head_node.features.clone();
            // the word's own tense is an instance-level override
            token.features.tense = token.features.tense.or(features.tense);
            token.features.impersonal |= features.impersonal;
            token.agreement = agreement;
            chain.push(token);
        }
    }
    if chain.is_empty() {
        return chain;
    }

    if features.passive {
        chain[0].features.form = Some(VerbForm::PastParticiple);
        chain[0].agreement = options.participle_agreement.unwrap_or(agreement);
        let mut aux = WordToken::word("ser", LexicalCategory::Verb, DiscourseFunction::Head);
        aux.features.tense = Some(features.tense());
        aux.agreement = agreement;
        chain.insert(0, aux);
    }
    if features.progressive {
        if chain[0].features.form() == VerbForm::Normal {
            chain[0].features.form = Some(VerbForm::Gerund);
        }
        let mut aux = WordToken::word("estar", LexicalCategory::Verb, DiscourseFunction::Head);
        aux.features.tense = Some(features.tense());
        aux.agreement = agreement;
        chain.insert(0, aux);
    }
    if let Some(modal) = &features.modal {
        if chain[0].features.form() == VerbForm::Normal {
            chain[0].features.form = Some(VerbForm::Infinitive);
        }
        let mut token = WordToken::word(modal.clone(), LexicalCategory::Modal, DiscourseFunction::Head);
        token.features.tense = Some(features.tense());
        token.agreement = agreement;
        chain.insert(0, token);
    }

    // a clause-level form (infinitive, imperative, subjunctive...) lands on
    // the fronted element
    if clause_features.form.is_some_and(|f| f != VerbForm::Normal) {
        chain[0].features.form = clause_features.form;
    }
    chain
}

/// Complements in fixed order: direct object first, indirect object after,
/// everything else in source order before the indirect object.
fn complements(
    cx: &Cx,
    slots: &grammar_core::PhraseSlots,
    features: &Features,
    options: &VpOptions,
    copular: bool,
) -> Vec<WordToken> {
    let mut plain: Vec<WordToken> = Vec::new();
    let mut indirect: Vec<WordToken> = Vec::new();
    for &c in &slots.complements {
        let function = cx.tree.node(c).function;
        match function {
            Some(DiscourseFunction::Object) if options.suppress_object => continue,
            Some(DiscourseFunction::IndirectObject) if options.suppress_indirect => continue,
            _ => {}
        }
        let outer = Outer {
            function,
            passive: features.passive,
            agreement: if copular {
                options.subject_agreement
            } else {
                Agreement::default()
            },
            ..Outer::default()
        };
        let tokens = realise_node(cx, c, &outer);
        if function == Some(DiscourseFunction::IndirectObject) {
            indirect.extend(tokens);
        } else {
            plain.extend(tokens);
        }
    }
    plain.extend(indirect);
    plain
}

/// Number agreement for WHO/WHAT-subject interrogatives over a copular
/// head: the verb agrees with its complement instead of the wh subject.
pub(crate) fn complement_number(cx: &Cx, vp: Option<NodeId>) -> grammar_core::Number {
    let Some(vp) = vp else {
        return grammar_core::Number::Singular;
    };
    let NodeKind::Phrase { slots, .. } = &cx.tree.node(vp).kind else {
        return grammar_core::Number::Singular;
    };
    let plural = slots.complements.iter().any(|&c| {
        super::nominal_agreement(cx, c).number() == grammar_core::Number::Plural
    });
    if plural {
        grammar_core::Number::Plural
    } else {
        grammar_core::Number::Singular
    }
}

/// The tense-bearing front element of the verb group and the rest, for
/// interrogative fronting.
pub(crate) fn split_front(aux: Vec<WordToken>, main: Vec<WordToken>) -> (Vec<WordToken>, Vec<WordToken>) {
    let mut chain = aux;
    chain.extend(main);
    if chain.is_empty() {
        return (Vec::new(), Vec::new());
    }
    let rest = chain.split_off(1);
    (chain, rest)
}
