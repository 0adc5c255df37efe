//! # Knowledge Base
//!
//! The static pickleball knowledge base: a fixed topic -> subtopic -> text
//! mapping, authored by hand and constructed once at process start. Pure data
//! with no behavior; the [router](crate::router) decides which entries answer
//! a question. Every subtopic is a named field, so a lookup that does not
//! exist cannot compile.

/// Canned answers about the rules of the game.
#[derive(Clone, Debug)]
pub struct RulesTopic {
    pub scoring: &'static str,
    pub serving: &'static str,
    pub two_bounce: &'static str,
    pub kitchen: &'static str,
    pub faults: &'static str,
    pub singles_doubles: &'static str,
    pub let_serve: &'static str,
}

/// Canned answers about balls, paddles, courts and footwear.
#[derive(Clone, Debug)]
pub struct EquipmentTopic {
    pub ball: &'static str,
    pub paddle: &'static str,
    pub court: &'static str,
    pub shoes: &'static str,
}

/// Coaching tips for beginner and intermediate play.
#[derive(Clone, Debug)]
pub struct TipsTopic {
    pub consistency: &'static str,
    pub dink: &'static str,
    pub third_shot: &'static str,
    pub positioning: &'static str,
    pub communication: &'static str,
    pub footwork: &'static str,
}

/// Short bios of well-known professional players.
#[derive(Clone, Debug)]
pub struct PlayersTopic {
    pub ben_johns: &'static str,
    pub anna_leigh_waters: &'static str,
    pub other_notable: &'static str,
}

/// General facts about the sport itself.
#[derive(Clone, Debug)]
pub struct GeneralTopic {
    pub what_is: &'static str,
    pub history: &'static str,
    pub popularity: &'static str,
    pub players_needed: &'static str,
}

/// The complete topic -> subtopic -> text mapping.
///
/// Immutable after construction. Entries are short, human-authored paragraphs
/// that are returned to the user verbatim or joined with a single space.
#[derive(Clone, Debug)]
pub struct KnowledgeBase {
    pub rules: RulesTopic,
    pub equipment: EquipmentTopic,
    pub tips: TipsTopic,
    pub players: PlayersTopic,
    pub general: GeneralTopic,
}

impl KnowledgeBase {
    /// The built-in, curated pickleball knowledge base.
    pub const fn curated() -> Self {
        Self {
            rules: RulesTopic {
                scoring: "Standard games go to 11 points, win by 2. \
                    Only the serving team can score, and you call score as server score, \
                    receiver score, server number.",
                serving: "Serve underhand from behind the baseline, diagonally cross-court, \
                    and the ball must clear the non-volley zone (kitchen) including the line.",
                two_bounce: "After the serve, the ball must bounce once on the return and once \
                    on the next shot before anyone can volley. This is the two-bounce rule.",
                kitchen: "The kitchen (non-volley zone) is a 7-foot area by the net. \
                    You may step in to hit a ball that has bounced, but you cannot volley \
                    while touching it or its line.",
                faults: "Common faults: serve lands in the kitchen, ball out of bounds, \
                    ball into the net, ball bounces twice, or volleying from the kitchen.",
                singles_doubles: "Singles is 1 vs 1, doubles is 2 vs 2. \
                    Serving order and court positioning change slightly, but the main rules \
                    are the same.",
                let_serve: "Most modern play does not use lets on serves. If the serve clips \
                    the net but lands correctly, the ball is still in play.",
            },
            equipment: EquipmentTopic {
                ball: "A pickleball is a light plastic ball with holes. \
                    Outdoor balls are a bit harder with smaller holes; indoor balls are softer \
                    with larger holes.",
                paddle: "Paddles are solid, usually composite or graphite, \
                    bigger than a ping-pong paddle and smaller than a tennis racket.",
                court: "The court is 20 by 44 feet with a 7-foot non-volley zone on each side \
                    of the net. The same court size is used for singles and doubles.",
                shoes: "Court shoes with good lateral support are best. \
                    Running shoes are not ideal because they are built for straight-line motion.",
            },
            tips: TipsTopic {
                consistency: "Play high-percentage shots: clear the net with a safe margin and \
                    keep the ball in. Winning at beginner level is mostly about fewer unforced \
                    errors.",
                dink: "Practice soft dinks into the kitchen to slow the game down and force \
                    your opponents to hit up. Think smooth, relaxed swings rather than big power.",
                third_shot: "On your team's third shot, aim for a soft drop into the kitchen \
                    instead of blasting it. That gives you time to move to the net.",
                positioning: "Try to get both partners up to the non-volley line together. \
                    Playing from the baseline all the time puts you at a big disadvantage.",
                communication: "In doubles, call balls that are yours, shout 'mine' or 'yours', \
                    and decide in advance who takes middle balls and lobs.",
                footwork: "Stay light on your feet, take small adjustment steps, and avoid \
                    crossing your feet when moving sideways.",
            },
            players: PlayersTopic {
                ben_johns: "Ben Johns is one of the most successful pro pickleball players, \
                    known for his balanced offense and defense and multiple titles in singles \
                    and doubles.",
                anna_leigh_waters: "Anna Leigh Waters is a top women's pro, famous for her \
                    aggressive style and dominance in singles, doubles, and mixed doubles.",
                other_notable: "Other notable pros include Tyson McGuffin, JW Johnson, \
                    Riley Newman, and Catherine Parenteau.",
            },
            general: GeneralTopic {
                what_is: "Pickleball is a paddle sport that mixes elements of tennis, \
                    badminton, and table tennis, played on a small court with a perforated \
                    plastic ball.",
                history: "Pickleball began in 1965 on Bainbridge Island, Washington, as a \
                    backyard family game and has grown into a global sport with pro tours.",
                popularity: "Pickleball is one of the fastest-growing sports, with millions of \
                    players and new courts popping up in parks, gyms, and clubs.",
                players_needed: "You usually play pickleball with 2 players for singles \
                    (1 on each side) or 4 players for doubles (2 on each side).",
            },
        }
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::curated()
    }
}
