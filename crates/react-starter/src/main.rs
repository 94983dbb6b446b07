//! React Starter CLI - Scaffolds React (Vite) and Next.js starter projects

use anyhow::Result;
use clap::{CommandFactory, FromArgMatches, Parser};
use starter_core::tui::CreateArgs;
use starter_core::{Answers, Framework, ProductConfig, StateManagement, StyledComponentsChoice, Styling};
use std::path::Path;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// React Starter product configuration
#[derive(Clone)]
pub struct StarterConfig;

impl ProductConfig for StarterConfig {
    fn name(&self) -> &'static str {
        "react-starter"
    }

    fn display_name(&self) -> &'static str {
        "React Starter"
    }

    fn cli_description(&self) -> &'static str {
        "CLI for scaffolding React (Vite) and Next.js starter projects"
    }

    fn next_steps(&self, project_dir: &Path, answers: &Answers) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();

        if current.as_deref() != Some(project_dir) {
            steps.push(format!("cd {}", project_dir.display()));
        }

        steps.push("yarn dev".to_string());

        if answers.state_management == StateManagement::ReduxToolkit {
            steps.push("Wrap your app in <Provider store={store}> from src/stores/store.ts".to_string());
        }

        if answers.styled_components() == StyledComponentsChoice::Yes
            || (answers.framework() == Framework::ViteReact
                && answers.styling() == Styling::StyledComponents)
        {
            steps.push(
                "Wrap your root layout in <StyledComponentsRegistry> from src/libs".to_string(),
            );
        }

        steps.push("git commit (hooks run lint-staged and commitlint)".to_string());

        steps
    }
}

#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    /// Framework to scaffold with
    #[arg(long, value_enum)]
    pub framework: Option<Framework>,

    /// Project name (no whitespace)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Styling for Vite projects
    #[arg(long, value_enum)]
    pub styling: Option<Styling>,

    /// State management library
    #[arg(long = "state-management", value_enum)]
    pub state_management: Option<StateManagement>,

    /// Install styled-components in Next.js projects without Tailwind
    #[arg(long = "styled-components", value_enum)]
    pub styled_components: Option<StyledComponentsChoice>,

    /// Skip yarn installation check
    #[arg(long = "skip-tool-check")]
    pub skip_tool_check: bool,

    /// Print the commands and files that would be generated, without running anything
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            framework: args.framework,
            name: args.name,
            styling: args.styling,
            state_management: args.state_management,
            styled_components: args.styled_components,
            skip_tool_check: args.skip_tool_check,
            dry_run: args.dry_run,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let config = StarterConfig;
    let matches = Args::command()
        .name(config.name())
        .about(config.cli_description())
        .get_matches();
    let args = Args::from_arg_matches(&matches)?;

    let result = starter_core::run(&config, args.into(), CLI_VERSION).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
