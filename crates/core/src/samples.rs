//! Built-in code-switching sample utterances.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleKind {
    Positive,
    Negative,
    Neutral,
}

impl SampleKind {
    pub const ALL: [SampleKind; 3] = [
        SampleKind::Positive,
        SampleKind::Negative,
        SampleKind::Neutral,
    ];
}

pub fn sample_text(kind: SampleKind) -> &'static str {
    match kind {
        SampleKind::Positive => {
            "Ayer fue amazing, la pasé super bien con mis amigos y we had so much fun!"
        }
        SampleKind::Negative => {
            "Estoy so tired of this, siempre the same problems y nadie helps me."
        }
        SampleKind::Neutral => "I need to go al supermercado porque no hay milk en la casa.",
    }
}
