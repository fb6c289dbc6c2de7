use serde::{Deserialize, Serialize};

use crate::frame::FrameKind;

/// Score of a single frame including its bonus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameScore {
    /// 1-based frame number
    pub number: usize,
    pub kind: FrameKind,
    pub marks: String,
    pub score: u32,
    pub running_total: u32,
}

/// Per-frame breakdown of a scored game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub frames: Vec<FrameScore>,
    pub total: u32,
}

impl ScoreCard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a frame, carrying the running total forward.
    pub fn push(&mut self, kind: FrameKind, marks: String, score: u32) {
        self.total += score;
        self.frames.push(FrameScore {
            number: self.frames.len() + 1,
            kind,
            marks,
            score,
            running_total: self.total,
        });
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn strikes(&self) -> usize {
        self.count_kind(FrameKind::Strike)
    }

    pub fn spares(&self) -> usize {
        self.count_kind(FrameKind::Spare)
    }

    fn count_kind(&self, kind: FrameKind) -> usize {
        self.frames.iter().filter(|f| f.kind == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_tracks_running_total() {
        let mut card = ScoreCard::new();
        card.push(FrameKind::Strike, "X".to_string(), 19);
        card.push(FrameKind::Open, "54".to_string(), 9);

        assert_eq!(card.total, 28);
        assert_eq!(card.frames[0].number, 1);
        assert_eq!(card.frames[0].running_total, 19);
        assert_eq!(card.frames[1].number, 2);
        assert_eq!(card.frames[1].running_total, 28);
        assert_eq!(card.strikes(), 1);
        assert_eq!(card.spares(), 0);
    }
}
