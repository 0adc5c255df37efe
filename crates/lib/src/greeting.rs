//! Greeting short-circuit: bare greetings are answered with a canned message
//! before any knowledge base or model work happens.

/// Inputs that count as a greeting when they are the whole message.
const GREETINGS: &[&str] = &["hi", "hello", "hey", "hii", "hai"];

/// Prefixes that count as a greeting when the message starts with them.
const GREETING_PREFIXES: &[&str] = &["hi ", "hello ", "hey "];

/// The canned reply for a greeting.
pub const GREETING_REPLY: &str = "Hi! Great to see you here. 👋\n\
    Ask me anything about pickleball rules, training tips, equipment, or famous players, \
    and I'll break it down for you.";

/// Returns true when the input is a plain greeting rather than a question.
///
/// Matching is exact-or-prefix over a small fixed token set; there is no
/// ambiguity resolution beyond that.
pub fn is_greeting(question: &str) -> bool {
    let q = question.trim().to_lowercase();
    GREETINGS.contains(&q.as_str()) || GREETING_PREFIXES.iter().any(|p| q.starts_with(p))
}
