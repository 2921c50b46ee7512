use crate::config::{PRELOADER_CURTAIN_MS, PRELOADER_FADE_MS, PRELOADER_SPIN_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreloaderPhase {
    Spinning,
    Fading,
    CurtainRising,
    Dismissed,
}

impl PreloaderPhase {
    /// Phases only move forward; `Dismissed` is terminal.
    pub fn next(self) -> Self {
        match self {
            PreloaderPhase::Spinning => PreloaderPhase::Fading,
            PreloaderPhase::Fading => PreloaderPhase::CurtainRising,
            PreloaderPhase::CurtainRising | PreloaderPhase::Dismissed => PreloaderPhase::Dismissed,
        }
    }
}

/// The intro sequence as data: each phase with how long it lasts before the
/// next one begins. Anything not listed is terminal.
#[derive(Clone, Debug, PartialEq)]
pub struct PreloaderTimeline {
    steps: Vec<(PreloaderPhase, u32)>,
}

impl Default for PreloaderTimeline {
    fn default() -> Self {
        Self::new(PRELOADER_SPIN_MS, PRELOADER_FADE_MS, PRELOADER_CURTAIN_MS)
    }
}

impl PreloaderTimeline {
    pub fn new(spin_ms: u32, fade_ms: u32, curtain_ms: u32) -> Self {
        Self {
            steps: vec![
                (PreloaderPhase::Spinning, spin_ms),
                (PreloaderPhase::Fading, fade_ms),
                (PreloaderPhase::CurtainRising, curtain_ms),
            ],
        }
    }

    /// How long `phase` lasts and what follows it, or `None` once dismissed.
    pub fn step(&self, phase: PreloaderPhase) -> Option<(u32, PreloaderPhase)> {
        self.steps
            .iter()
            .find(|(p, _)| *p == phase)
            .map(|(_, ms)| (*ms, phase.next()))
    }
}

/// Where the sequence starts: visitors arriving from another page of the
/// site never see the intro.
pub fn initial_phase(skip_intro: bool) -> PreloaderPhase {
    if skip_intro {
        PreloaderPhase::Dismissed
    } else {
        PreloaderPhase::Spinning
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every phase with the time (ms since load) at which it starts, following
    /// `step` the way the overlay schedules its timeouts.
    fn walk(timeline: &PreloaderTimeline, start: PreloaderPhase) -> Vec<(u32, PreloaderPhase)> {
        let mut at = 0;
        let mut phase = start;
        let mut seen = vec![(at, phase)];
        while let Some((ms, next)) = timeline.step(phase) {
            at += ms;
            phase = next;
            seen.push((at, phase));
        }
        seen
    }

    #[test]
    fn fresh_load_follows_the_timeline() {
        let timeline = PreloaderTimeline::default();
        assert_eq!(
            walk(&timeline, initial_phase(false)),
            vec![
                (0, PreloaderPhase::Spinning),
                (2000, PreloaderPhase::Fading),
                (2600, PreloaderPhase::CurtainRising),
                (3800, PreloaderPhase::Dismissed),
            ]
        );
    }

    #[test]
    fn each_step_names_its_duration_and_successor() {
        let timeline = PreloaderTimeline::default();
        assert_eq!(timeline.step(PreloaderPhase::Spinning), Some((2000, PreloaderPhase::Fading)));
        assert_eq!(timeline.step(PreloaderPhase::Fading), Some((600, PreloaderPhase::CurtainRising)));
        assert_eq!(
            timeline.step(PreloaderPhase::CurtainRising),
            Some((1200, PreloaderPhase::Dismissed))
        );
    }

    #[test]
    fn dismissed_is_terminal() {
        let timeline = PreloaderTimeline::default();
        assert_eq!(timeline.step(PreloaderPhase::Dismissed), None);
        assert_eq!(PreloaderPhase::Dismissed.next(), PreloaderPhase::Dismissed);
    }

    #[test]
    fn skipped_intro_schedules_nothing() {
        let timeline = PreloaderTimeline::default();
        assert_eq!(
            walk(&timeline, initial_phase(true)),
            vec![(0, PreloaderPhase::Dismissed)]
        );
    }

    #[test]
    fn stepping_never_returns_to_spinning() {
        let mut phase = PreloaderPhase::Spinning;
        let mut seen = vec![phase];
        for _ in 0..6 {
            phase = phase.next();
            seen.push(phase);
        }
        assert!(seen[1..].iter().all(|p| *p != PreloaderPhase::Spinning));
    }
}
