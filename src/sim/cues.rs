//! Fire-once audio cues produced by a frame step.

/// Sound a collaborator should play. The core never plays anything itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Flap,
    Hit,
    Die,
    Point,
}

impl Cue {
    pub fn tag(self) -> &'static str {
        match self {
            Self::Flap => "flap",
            Self::Hit => "hit",
            Self::Die => "die",
            Self::Point => "point",
        }
    }
}

/// Ordered cue list for one frame. Each tag appears at most once.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Cues(Vec<Cue>);

impl Cues {
    pub fn push(&mut self, cue: Cue) {
        if !self.0.contains(&cue) {
            self.0.push(cue);
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn contains(&self, cue: Cue) -> bool {
        self.0.contains(&cue)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Cue> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[Cue] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_occurrence_order() {
        let mut cues = Cues::default();
        cues.push(Cue::Hit);
        cues.push(Cue::Flap);
        cues.push(Cue::Hit);
        cues.push(Cue::Die);
        assert_eq!(cues.as_slice(), &[Cue::Hit, Cue::Flap, Cue::Die]);

        cues.clear();
        assert!(cues.is_empty());
    }
}
