//! # Keyword Router
//!
//! A deterministic, single-pass, first-match-wins classifier over the
//! knowledge base. The question is lowercased, lightly canonicalized, and then
//! checked against an ordered table of substring rules. The first rule whose
//! predicate holds selects one or more KB entries; when nothing matches, a
//! fixed generic fallback is returned. The router performs no I/O and is total
//! over all string inputs.

use crate::kb::KnowledgeBase;
use tracing::debug;

/// A named routing rule: a substring predicate over the normalized question
/// plus the fixed KB entries it assembles into an answer.
struct Rule {
    name: &'static str,
    matches: fn(&str) -> bool,
    answer: fn(&KnowledgeBase) -> String,
}

/// The ordered rule table.
///
/// Order is significant: earlier rules deliberately shadow later, broader
/// ones. The players rule must come before the bare "ball" equipment rule so
/// that "famous pickleball player" is not answered with the ball entry, and
/// the explain-the-sport rule must come first of all so that it is not
/// swallowed by narrower keyword checks.
const RULES: &[Rule] = &[
    Rule {
        name: "explain_pickleball",
        matches: |q| {
            q.contains("explain pickleball")
                || q.contains("pickleball game")
                || (q.contains("what is") && q.contains("pickleball"))
                || q.trim() == "pickleball"
        },
        answer: |kb| join(&[kb.general.what_is, kb.rules.scoring, kb.rules.serving]),
    },
    Rule {
        name: "players_needed",
        matches: |q| q.contains("how many players") || (q.contains("players") && q.contains("needed")),
        answer: |kb| kb.general.players_needed.to_string(),
    },
    Rule {
        name: "beginner",
        matches: |q| {
            q.contains("beginner") || q.contains("first time") || q.contains("new to pickleball")
        },
        answer: |kb| join(&[kb.general.what_is, kb.rules.scoring, kb.tips.consistency]),
    },
    Rule {
        name: "famous_players",
        matches: |q| {
            q.contains("famous") || q.contains("best") || q.contains("pro") || q.contains("professional")
        },
        answer: |kb| {
            join(&[
                kb.players.ben_johns,
                kb.players.anna_leigh_waters,
                kb.players.other_notable,
            ])
        },
    },
    Rule {
        name: "tips",
        matches: |q| {
            q.contains("tip") || q.contains("improve") || q.contains("strategy") || q.contains("drill")
        },
        answer: |kb| {
            join(&[
                kb.tips.consistency,
                kb.tips.dink,
                kb.tips.third_shot,
                kb.tips.positioning,
                kb.tips.communication,
                kb.tips.footwork,
            ])
        },
    },
    Rule {
        name: "what_is",
        matches: |q| q.contains("what is pickleball") || (q.contains("what") && q.contains("pickleball")),
        answer: |kb| kb.general.what_is.to_string(),
    },
    Rule {
        name: "history",
        matches: |q| q.contains("history"),
        answer: |kb| kb.general.history.to_string(),
    },
    Rule {
        name: "popularity",
        matches: |q| q.contains("popular") || q.contains("popularity") || q.contains("growing"),
        answer: |kb| kb.general.popularity.to_string(),
    },
    Rule {
        name: "two_bounce",
        matches: |q| q.contains("two bounce") || q.contains("double bounce"),
        answer: |kb| kb.rules.two_bounce.to_string(),
    },
    Rule {
        name: "kitchen",
        matches: |q| q.contains("kitchen") || q.contains("non-volley") || q.contains("nvz"),
        answer: |kb| kb.rules.kitchen.to_string(),
    },
    Rule {
        name: "scoring",
        matches: |q| q.contains("score") || q.contains("scoring") || q.contains("points"),
        answer: |kb| kb.rules.scoring.to_string(),
    },
    Rule {
        name: "serving",
        matches: |q| q.contains("serve") || q.contains("serving") || q.contains("server"),
        answer: |kb| kb.rules.serving.to_string(),
    },
    Rule {
        name: "faults",
        matches: |q| q.contains("fault") || q.contains("error") || q.contains("violation"),
        answer: |kb| kb.rules.faults.to_string(),
    },
    Rule {
        name: "let_serve",
        matches: |q| q.contains("let") && q.contains("serve"),
        answer: |kb| kb.rules.let_serve.to_string(),
    },
    Rule {
        name: "singles_doubles",
        matches: |q| q.contains("single") || q.contains("doubles"),
        answer: |kb| kb.rules.singles_doubles.to_string(),
    },
    Rule {
        name: "paddle",
        matches: |q| q.contains("paddle"),
        answer: |kb| kb.equipment.paddle.to_string(),
    },
    Rule {
        name: "ball",
        matches: |q| q.contains("ball"),
        answer: |kb| kb.equipment.ball.to_string(),
    },
    Rule {
        name: "court",
        matches: |q| q.contains("court") || q.contains("dimension") || q.contains("size"),
        answer: |kb| kb.equipment.court.to_string(),
    },
    Rule {
        name: "shoes",
        matches: |q| q.contains("shoe") || q.contains("shoes"),
        answer: |kb| kb.equipment.shoes.to_string(),
    },
];

/// Joins KB entries with a single space.
fn join(entries: &[&str]) -> String {
    entries.join(" ")
}

/// Normalizes a question for matching: lowercase, plus canonicalizing the
/// two-word spelling of the sport.
fn normalize(question: &str) -> String {
    question.to_lowercase().replace("pickle ball", "pickleball")
}

/// Routes a free-text question to canned knowledge base text.
///
/// Total over all inputs: every question, including the empty string, maps to
/// some non-empty answer. Calling it twice with the same input returns the
/// same output.
pub fn route(kb: &KnowledgeBase, question: &str) -> String {
    let q = normalize(question);

    for rule in RULES {
        if (rule.matches)(&q) {
            debug!(rule = rule.name, "router matched");
            return (rule.answer)(kb);
        }
    }

    // Generic info, so an enrichment step still has context to work with.
    debug!("router fell through to the generic fallback");
    format!(
        "General pickleball info: {} {}",
        kb.general.what_is, kb.general.popularity
    )
}
