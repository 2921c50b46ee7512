use std::rc::Rc;
use std::str::FromStr;

use thiserror::Error;
use yew::Reducible;

/// What the visitor asked for. `System` defers to the OS colour scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    Dark,
    System,
}

/// A concrete scheme, after `System` has been looked up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme value {0:?}")]
pub struct UnknownTheme(pub String);

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    pub fn resolve(self, system: ResolvedTheme) -> ResolvedTheme {
        match self {
            ThemePreference::Light => ResolvedTheme::Light,
            ThemePreference::Dark => ResolvedTheme::Dark,
            ThemePreference::System => system,
        }
    }

    pub fn is_explicit(self) -> bool {
        self != ThemePreference::System
    }
}

impl FromStr for ThemePreference {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            "system" => Ok(ThemePreference::System),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

impl ResolvedTheme {
    pub fn toggled(self) -> Self {
        match self {
            ResolvedTheme::Light => ResolvedTheme::Dark,
            ResolvedTheme::Dark => ResolvedTheme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ResolvedTheme::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResolvedTheme::Light => "light",
            ResolvedTheme::Dark => "dark",
        }
    }

    fn as_preference(self) -> ThemePreference {
        match self {
            ResolvedTheme::Light => ThemePreference::Light,
            ResolvedTheme::Dark => ThemePreference::Dark,
        }
    }
}

/// `system` stays `None` until the first hydrate, which is what keeps the
/// toggle on its neutral placeholder during the first paint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeState {
    pub preference: ThemePreference,
    pub system: Option<ResolvedTheme>,
}

pub enum ThemeAction {
    Hydrate {
        stored: Option<ThemePreference>,
        system: ResolvedTheme,
    },
    SystemChanged(ResolvedTheme),
    Toggle,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self {
            preference: ThemePreference::System,
            system: None,
        }
    }
}

impl ThemeState {
    pub fn resolved(&self) -> Option<ResolvedTheme> {
        self.system.map(|system| self.preference.resolve(system))
    }

    pub fn is_hydrated(&self) -> bool {
        self.system.is_some()
    }

    /// The value that belongs in storage right now. Nothing is written before
    /// hydration, or while the visitor is still following the OS.
    pub fn choice_to_persist(&self) -> Option<ThemePreference> {
        (self.is_hydrated() && self.preference.is_explicit()).then_some(self.preference)
    }
}

impl Reducible for ThemeState {
    type Action = ThemeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ThemeAction::Hydrate { stored, system } => Rc::new(ThemeState {
                preference: stored.unwrap_or(ThemePreference::System),
                system: Some(system),
            }),
            ThemeAction::SystemChanged(system) => Rc::new(ThemeState {
                preference: self.preference,
                system: Some(system),
            }),
            ThemeAction::Toggle => match self.resolved() {
                Some(current) => Rc::new(ThemeState {
                    preference: current.toggled().as_preference(),
                    system: self.system,
                }),
                None => self,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hydrated(stored: Option<ThemePreference>, system: ResolvedTheme) -> Rc<ThemeState> {
        Rc::new(ThemeState::default()).reduce(ThemeAction::Hydrate { stored, system })
    }

    #[test]
    fn unresolved_until_hydrated() {
        let state = Rc::new(ThemeState::default());
        assert_eq!(state.resolved(), None);
        let state = state.reduce(ThemeAction::Toggle);
        assert_eq!(*state, ThemeState::default());
    }

    #[test]
    fn no_stored_preference_follows_dark_system_then_toggles_to_light() {
        let state = hydrated(None, ResolvedTheme::Dark);
        assert_eq!(state.preference, ThemePreference::System);
        assert_eq!(state.resolved(), Some(ResolvedTheme::Dark));

        let state = state.reduce(ThemeAction::Toggle);
        assert_eq!(state.resolved(), Some(ResolvedTheme::Light));
        assert_eq!(state.preference, ThemePreference::Light);
        assert!(state.preference.is_explicit());
    }

    #[test]
    fn stored_preference_wins_over_system() {
        let state = hydrated(Some(ThemePreference::Light), ResolvedTheme::Dark);
        assert_eq!(state.resolved(), Some(ResolvedTheme::Light));
    }

    #[test]
    fn system_changes_only_matter_while_following_the_os() {
        let following = hydrated(None, ResolvedTheme::Light)
            .reduce(ThemeAction::SystemChanged(ResolvedTheme::Dark));
        assert_eq!(following.resolved(), Some(ResolvedTheme::Dark));

        let pinned = hydrated(Some(ThemePreference::Light), ResolvedTheme::Light)
            .reduce(ThemeAction::SystemChanged(ResolvedTheme::Dark));
        assert_eq!(pinned.resolved(), Some(ResolvedTheme::Light));
    }

    #[test]
    fn double_toggle_returns_to_the_same_scheme_but_stays_explicit() {
        let state = hydrated(None, ResolvedTheme::Light)
            .reduce(ThemeAction::Toggle)
            .reduce(ThemeAction::Toggle);
        assert_eq!(state.resolved(), Some(ResolvedTheme::Light));
        assert_eq!(state.preference, ThemePreference::Light);
    }

    #[test]
    fn toggled_choice_is_persisted() {
        assert_eq!(ThemeState::default().choice_to_persist(), None);

        let following = hydrated(None, ResolvedTheme::Dark);
        assert_eq!(following.choice_to_persist(), None);

        let toggled = following.reduce(ThemeAction::Toggle);
        assert_eq!(toggled.choice_to_persist(), Some(ThemePreference::Light));

        let toggled_back = toggled.reduce(ThemeAction::Toggle);
        assert_eq!(toggled_back.choice_to_persist(), Some(ThemePreference::Dark));
    }

    #[test]
    fn stored_choice_is_rewritten_unchanged_after_hydration() {
        let state = hydrated(Some(ThemePreference::Dark), ResolvedTheme::Light);
        assert_eq!(state.choice_to_persist(), Some(ThemePreference::Dark));
        let state = state.reduce(ThemeAction::SystemChanged(ResolvedTheme::Dark));
        assert_eq!(state.choice_to_persist(), Some(ThemePreference::Dark));
    }

    #[test]
    fn parses_stored_values() {
        assert_eq!("dark".parse::<ThemePreference>(), Ok(ThemePreference::Dark));
        assert_eq!(" light\n".parse::<ThemePreference>(), Ok(ThemePreference::Light));
        assert_eq!("system".parse::<ThemePreference>(), Ok(ThemePreference::System));
        assert_eq!(
            "sepia".parse::<ThemePreference>(),
            Err(UnknownTheme("sepia".to_string()))
        );
        for pref in [ThemePreference::Light, ThemePreference::Dark, ThemePreference::System] {
            assert_eq!(pref.as_str().parse::<ThemePreference>(), Ok(pref));
        }
    }
}
