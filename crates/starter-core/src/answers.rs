//! The user's answers to the scaffolding questions
//!
//! Answers are collected once and read-only afterwards. Framework-specific
//! choices live in [`Stack`] so that a Next.js project can never carry a
//! styling choice and a Vite project can never carry a styled-components answer.

use crate::error::ScaffoldError;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Frontend framework used to generate the base project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Framework {
    ViteReact,
    NextJs,
}

impl Framework {
    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::ViteReact => "ReactJS (with Vite)",
            Framework::NextJs => "NextJS",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Styling approach layered on top of the default global CSS
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Styling {
    Tailwind,
    StyledComponents,
    #[default]
    None,
}

impl Styling {
    pub fn display_name(&self) -> &'static str {
        match self {
            Styling::Tailwind => "Tailwind CSS",
            Styling::StyledComponents => "Styled Components",
            Styling::None => "No",
        }
    }
}

/// State management library used instead of plain React Context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum StateManagement {
    ReduxToolkit,
    Zustand,
    #[default]
    None,
}

impl StateManagement {
    pub fn display_name(&self) -> &'static str {
        match self {
            StateManagement::ReduxToolkit => "Redux Toolkit",
            StateManagement::Zustand => "Zustand",
            StateManagement::None => "No",
        }
    }
}

/// Answer to the Next.js styled-components question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum StyledComponentsChoice {
    Yes,
    No,
    /// The question was skipped because Tailwind was already installed
    #[default]
    #[value(skip)]
    NotAsked,
}

impl From<bool> for StyledComponentsChoice {
    fn from(yes: bool) -> Self {
        if yes {
            StyledComponentsChoice::Yes
        } else {
            StyledComponentsChoice::No
        }
    }
}

/// A validated project name: non-empty and free of whitespace
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn parse(input: &str) -> Result<Self, ScaffoldError> {
        if input.is_empty() || input.chars().any(char::is_whitespace) {
            return Err(ScaffoldError::InvalidProjectName);
        }
        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ProjectName {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Framework together with the choices that only exist for that framework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "framework", rename_all = "kebab-case")]
pub enum Stack {
    ViteReact { styling: Styling },
    NextJs { styled_components: StyledComponentsChoice },
}

impl Stack {
    pub fn framework(&self) -> Framework {
        match self {
            Stack::ViteReact { .. } => Framework::ViteReact,
            Stack::NextJs { .. } => Framework::NextJs,
        }
    }
}

/// Complete set of answers for one scaffolding run
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Answers {
    pub project_name: ProjectName,
    #[serde(flatten)]
    pub stack: Stack,
    pub state_management: StateManagement,
}

impl Answers {
    pub fn new(project_name: ProjectName, stack: Stack, state_management: StateManagement) -> Self {
        Self {
            project_name,
            stack,
            state_management,
        }
    }

    pub fn framework(&self) -> Framework {
        self.stack.framework()
    }

    /// Styling choice; always `None` for Next.js, which is never asked
    pub fn styling(&self) -> Styling {
        match self.stack {
            Stack::ViteReact { styling } => styling,
            Stack::NextJs { .. } => Styling::None,
        }
    }

    /// Styled-components answer; always `NotAsked` for Vite
    pub fn styled_components(&self) -> StyledComponentsChoice {
        match self.stack {
            Stack::ViteReact { .. } => StyledComponentsChoice::NotAsked,
            Stack::NextJs { styled_components } => styled_components,
        }
    }
}
