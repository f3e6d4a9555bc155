//! Crisis framing detector.
//!
//! Emergency rhetoric presents the present moment as a breakdown that
//! demands immediate, drastic action. Five weighted term groups:
//! explicit crisis, threat, decline, urgency, and catastrophic
//! outcomes.

use rhetor_core::constants::DENSITY_WORDS;

use super::lexicon::{TermGroup, WeightedLexicon};
use super::traits::{Metric, RhetoricDetector, SpeechText};

const CRISIS_TERMS: TermGroup = &[
    ("crisis", 3.0),
    ("crises", 3.0),
    ("emergency", 3.0),
    ("catastrophe", 4.0),
    ("catastrophic", 4.0),
    ("disaster", 3.5),
    ("disastrous", 3.5),
    ("chaos", 3.0),
    ("chaotic", 2.5),
    ("breakdown", 2.5),
    ("collapse", 3.0),
    ("collapsing", 3.0),
];

const THREAT_TERMS: TermGroup = &[
    ("threat", 2.5),
    ("threatens", 2.5),
    ("threatening", 2.5),
    ("threatened", 2.5),
    ("danger", 2.5),
    ("dangerous", 2.5),
    ("dangerously", 2.5),
    ("risk", 2.0),
    ("risks", 2.0),
    ("at risk", 2.5),
    ("under threat", 3.0),
    ("under attack", 3.0),
    ("attack", 2.0),
    ("attacking", 2.0),
    ("fear", 2.0),
    ("fears", 2.0),
    ("terrify", 2.5),
    ("terrifying", 2.5),
    ("alarm", 2.0),
    ("alarming", 2.5),
];

const DECLINE_TERMS: TermGroup = &[
    ("decline", 2.0),
    ("declining", 2.0),
    ("deteriorate", 2.5),
    ("deteriorating", 2.5),
    ("deterioration", 2.5),
    ("worse", 1.5),
    ("worsen", 2.0),
    ("worsening", 2.0),
    ("falling apart", 3.0),
    ("fall apart", 3.0),
    ("breaking down", 2.5),
    ("break down", 2.5),
    ("spiral", 2.0),
    ("spiraling", 2.5),
    ("out of control", 3.0),
    ("losing control", 2.5),
];

const URGENCY_TERMS: TermGroup = &[
    ("urgent", 2.5),
    ("urgently", 2.5),
    ("urgency", 2.5),
    ("immediate", 2.0),
    ("immediately", 2.0),
    ("now", 1.5),
    ("right now", 2.0),
    ("must act", 2.5),
    ("act now", 2.5),
    ("time is running out", 3.0),
    ("running out of time", 3.0),
    ("no time", 2.5),
    ("cannot wait", 2.5),
    ("can't wait", 2.5),
    ("before it's too late", 3.0),
    ("too late", 2.0),
];

const CATASTROPHIC_TERMS: TermGroup = &[
    ("destroy", 2.5),
    ("destroying", 2.5),
    ("destruction", 3.0),
    ("devastate", 3.0),
    ("devastating", 3.0),
    ("devastation", 3.0),
    ("ruin", 2.5),
    ("ruined", 2.5),
    ("ruining", 2.5),
    ("irreversible", 3.0),
    ("point of no return", 3.5),
    ("no going back", 3.0),
    ("existential", 3.5),
    ("existential threat", 4.0),
    ("survival", 2.5),
    ("survive", 2.0),
];

const METRICS: &[&str] = &["crisis_count", "crisis_score", "crisis_density"];

pub struct CrisisDetector {
    lexicon: WeightedLexicon,
}

impl CrisisDetector {
    pub fn new() -> Self {
        Self {
            lexicon: WeightedLexicon::new(&[
                CRISIS_TERMS,
                THREAT_TERMS,
                DECLINE_TERMS,
                URGENCY_TERMS,
                CATASTROPHIC_TERMS,
            ]),
        }
    }
}

impl Default for CrisisDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl RhetoricDetector for CrisisDetector {
    fn id(&self) -> &'static str {
        "crisis"
    }

    fn metrics(&self) -> &'static [&'static str] {
        METRICS
    }

    fn detect(&self, speech: &SpeechText<'_>) -> Vec<Metric> {
        let hits = self.lexicon.scan(&speech.lowered);
        let word_count = speech.word_count();

        let count = hits.total_count();
        let density = if word_count > 0 {
            count as f64 / word_count as f64 * DENSITY_WORDS
        } else {
            0.0
        };

        vec![
            Metric::new("crisis_count", count as f64),
            Metric::new("crisis_score", hits.total_score()),
            Metric::new("crisis_density", density),
        ]
    }
}
