//! The profile rendered by the card: a load-time constant parsed from
//! an embedded JSON document. Nothing here is ever mutated.

use std::{ops::Deref, sync::LazyLock};

use gpui::{App, Global, SharedString};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::assets::AppIconKind;

/// Marker the intro text uses for explicit line breaks.
pub const LINE_BREAK_TOKEN: &str = "<br>";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Profile {
    pub name: SharedString,
    pub handle: SharedString,
    /// Plain text; line breaks are spelled with [`LINE_BREAK_TOKEN`].
    pub intro: SharedString,
    /// Asset path of the avatar image. The card falls back to the
    /// name's initial when absent.
    #[serde(default)]
    pub avatar: Option<SharedString>,
    pub links: SmallVec<[ProfileLink; 2]>,
    pub skills: SmallVec<[SharedString; 8]>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProfileLink {
    pub label: SharedString,
    pub url: SharedString,
    pub icon: AppIconKind,
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("profile field `{0}` must not be empty")]
    MissingField(&'static str),
}

pub struct LazyLockProfile(LazyLock<Profile>);

impl LazyLockProfile {
    #[inline(always)]
    const fn new(f: fn() -> Profile) -> Self {
        Self(LazyLock::new(f))
    }
}

impl Deref for LazyLockProfile {
    type Target = Profile;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Profile> for LazyLockProfile {
    fn as_ref(&self) -> &Profile {
        &self.0
    }
}

impl Profile {
    pub const DEFAULT: LazyLockProfile =
        LazyLockProfile::new(|| Profile::from_string(include_str!("../data/profile.json")).unwrap());

    pub fn from_string<S: AsRef<str>>(str: S) -> Result<Profile, ProfileError> {
        let profile: Profile = serde_json::from_str(str.as_ref())?;

        if profile.name.is_empty() {
            return Err(ProfileError::MissingField("name"));
        }
        if profile.handle.is_empty() {
            return Err(ProfileError::MissingField("handle"));
        }

        Ok(profile)
    }

    /// Intro text split on the line-break marker, in document order.
    pub fn intro_lines(&self) -> impl Iterator<Item = &str> {
        self.intro.split(LINE_BREAK_TOKEN)
    }

    /// First character of the name, shown when no avatar image is set.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}

impl Global for Profile {}

/// Extension trait for accessing the process-wide profile constant.
pub trait ProfileExt {
    /// Installs the profile. Called once at startup.
    fn set_profile<P: AsRef<Profile>>(&mut self, profile: P);

    /// Gets an immutable reference to the profile.
    fn get_profile(&self) -> &Profile;
}

impl ProfileExt for App {
    fn set_profile<P: AsRef<Profile>>(&mut self, profile: P) {
        self.set_global::<Profile>(profile.as_ref().clone())
    }

    fn get_profile(&self) -> &Profile {
        self.global()
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use gpui::TestAppContext;

    #[gpui::test]
    fn test_default_profile_loads(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let profile = &Profile::DEFAULT;

            assert!(!profile.name.is_empty(), "Profile should have a name");
            assert!(!profile.handle.is_empty(), "Profile should have a handle");
            assert!(!profile.links.is_empty(), "Profile should have links");
            assert!(!profile.skills.is_empty(), "Profile should have skills");
        });
    }

    #[gpui::test]
    fn test_intro_lines_split_on_token(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let profile = Profile::from_string(
                r#"{
                    "name": "A",
                    "handle": "a",
                    "intro": "first<br>second",
                    "links": [],
                    "skills": []
                }"#,
            )
            .unwrap();

            let lines: Vec<&str> = profile.intro_lines().collect();
            assert_eq!(lines, ["first", "second"], "Lines should split in order");
        });
    }

    #[gpui::test]
    fn test_intro_without_token_is_one_line(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let profile = Profile::from_string(
                r#"{
                    "name": "A",
                    "handle": "a",
                    "intro": "just one line",
                    "links": [],
                    "skills": []
                }"#,
            )
            .unwrap();

            assert_eq!(profile.intro_lines().count(), 1);
        });
    }

    #[gpui::test]
    fn test_links_and_skills_keep_document_order(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let profile = &Profile::DEFAULT;

            let labels: Vec<&str> = profile.links.iter().map(|link| link.label.as_ref()).collect();
            assert_eq!(labels, ["GitHub", "Twitter"], "Link order should match the document");

            let first_skills: Vec<&str> = profile.skills.iter().take(2).map(|s| s.as_ref()).collect();
            assert_eq!(first_skills, ["HTML", "CSS"], "Skill order should match the document");
        });
    }

    #[gpui::test]
    fn test_empty_name_is_rejected(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let result = Profile::from_string(
                r#"{ "name": "", "handle": "a", "intro": "", "links": [], "skills": [] }"#,
            );

            assert!(
                matches!(result, Err(ProfileError::MissingField("name"))),
                "Empty name should be rejected"
            );
        });
    }

    #[gpui::test]
    fn test_invalid_json_is_rejected(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let result = Profile::from_string("not json");
            assert!(matches!(result, Err(ProfileError::Parse(_))));
        });
    }

    #[gpui::test]
    fn test_initial_takes_first_character(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            assert_eq!(Profile::DEFAULT.initial(), Some('K'));
        });
    }

    #[gpui::test]
    fn test_set_and_get_profile(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_profile(Profile::DEFAULT);
            let profile = cx.get_profile();
            assert_eq!(profile.name, Profile::DEFAULT.name, "Profiles should match");
        });
    }
}
