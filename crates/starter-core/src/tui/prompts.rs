//! Charm-style CLI prompts using cliclack

use crate::answers::{
    Answers, Framework, ProjectName, Stack, StateManagement, StyledComponentsChoice, Styling,
};
use crate::detect::DetectedDependencies;
use crate::plan;
use crate::product::ProductConfig;
use crate::runtime::{check, tool};
use crate::workflow::Scaffolder;
use anyhow::{Context, Result};
use std::path::Path;

/// Pre-supplied answers and switches for the create flow
///
/// Any answer left as `None` is asked interactively.
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    pub framework: Option<Framework>,
    pub name: Option<String>,
    pub styling: Option<Styling>,
    pub state_management: Option<StateManagement>,
    pub styled_components: Option<StyledComponentsChoice>,

    /// Skip the yarn installation check
    pub skip_tool_check: bool,

    /// Print the plan instead of executing it
    pub dry_run: bool,
}

/// Run the CLI with interactive prompts
///
/// Scaffolding errors are reported here and not returned: a failed run leaves
/// the partially generated project in place and exits normally.
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs, cli_version: &str) -> Result<()> {
    cliclack::intro(format!("{} v{}", config.display_name(), cli_version))?;

    match create(config, &args).await {
        Ok(()) => Ok(()),
        Err(e) if is_interrupted(&e) => {
            cliclack::outro_cancel("Setup cancelled.")?;
            Ok(())
        }
        Err(e) => {
            cliclack::log::error(format!("Error during project creation: {:#}", e))?;
            cliclack::outro_cancel("Project setup did not complete")?;
            Ok(())
        }
    }
}

fn is_interrupted(err: &anyhow::Error) -> bool {
    err.downcast_ref::<std::io::Error>()
        .is_some_and(|e| e.kind() == std::io::ErrorKind::Interrupted)
}

async fn create<C: ProductConfig>(config: &C, args: &CreateArgs) -> Result<()> {
    // Step 1: Check runtimes
    check_runtimes()?;

    // Step 2: Check yarn installation
    if config.requires_yarn() && !args.skip_tool_check {
        handle_tool_check().await?;
    } else if args.skip_tool_check {
        cliclack::log::info("Skipping tool check")?;
    }

    // Step 3: Framework and project name
    let framework = select_framework(args)?;
    let project_name = input_project_name(args)?;

    if args.dry_run {
        return dry_run(framework, project_name, args);
    }

    // Step 4: Generate the base project and inspect it
    let workspace = std::env::current_dir().context("Failed to read current directory")?;
    let scaffolder = Scaffolder::system(workspace);

    cliclack::log::step(format!(
        "Creating project {} using {}...",
        project_name, framework
    ))?;
    let detected = scaffolder.generate_base(framework, &project_name)?;

    // Step 5: Remaining questions, which depend on what the generator installed
    let answers = collect_answers(framework, project_name, &detected, args)?;

    // Step 6: Run commands, then write files
    let plan = plan::build_plan(&answers, &detected);
    scaffolder.execute(&answers.project_name, &plan)?;

    let written = scaffolder.materialize(&answers.project_name, &plan).await?;
    for file in &written {
        if let Some(label) = file.label {
            cliclack::log::success(format!("{} configuration generated.", label))?;
        }
    }

    // Step 7: Show next steps
    let project_dir = scaffolder.project_dir(&answers.project_name);
    print_next_steps(config, &project_dir, &answers)?;

    cliclack::outro(format!(
        "Project {} created and setup successfully!",
        answers.project_name
    ))?;

    Ok(())
}

fn check_runtimes() -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Checking runtimes...");

    match check::check_runtimes() {
        Ok(runtimes) => {
            let runtime_info: Vec<String> = runtimes
                .iter()
                .map(|r| format!("{} ({})", r.name, r.version.as_deref().unwrap_or("unknown")))
                .collect();
            spinner.stop(format!("Detected runtimes: {}", runtime_info.join(", ")));

            for warning in runtimes.iter().filter_map(|r| r.version_warning()) {
                cliclack::log::warning(warning)?;
            }
            Ok(())
        }
        Err(e) => {
            spinner.stop("Missing runtimes");
            cliclack::log::error(format!("{}", e))?;
            anyhow::bail!("Please install the missing runtimes and try again.");
        }
    }
}

async fn handle_tool_check() -> Result<()> {
    let tool = tool::yarn_tool();

    if let Some(version) = tool.get_version() {
        cliclack::log::success(format!(
            "{} installed ({})",
            tool.config().display_name,
            version
        ))?;
        return Ok(());
    }

    cliclack::log::warning(format!("{} is not installed", tool.config().display_name))?;

    let action: &str = cliclack::select("What would you like to do?")
        .item(
            "install",
            format!("Install {} automatically", tool.config().display_name),
            tool.install_command(),
        )
        .item(
            "docs",
            format!("Open documentation ({})", tool.config().docs_url),
            "",
        )
        .item(
            "skip",
            format!("Skip and continue without {}", tool.config().display_name),
            "",
        )
        .interact()?;

    match action {
        "install" => {
            cliclack::log::info(format!("This will execute: {}", tool.install_command()))?;

            let confirm: bool = cliclack::confirm("Proceed with installation?")
                .initial_value(true)
                .interact()?;

            if confirm {
                match tool.install().await {
                    Ok(_) => {
                        cliclack::log::success(format!(
                            "{} installed successfully",
                            tool.config().display_name
                        ))?;
                    }
                    Err(e) => {
                        cliclack::log::error(format!("{}", e))?;

                        let continue_anyway: bool = cliclack::confirm(format!(
                            "Continue without {}?",
                            tool.config().display_name
                        ))
                        .initial_value(false)
                        .interact()?;

                        if !continue_anyway {
                            anyhow::bail!("Setup cancelled.");
                        }
                    }
                }
            }
        }
        "docs" => {
            tool.open_docs()?;
            cliclack::outro(format!(
                "After installing {}, run this command again.",
                tool.config().display_name
            ))?;
            std::process::exit(0);
        }
        _ => {
            cliclack::log::info(format!(
                "Continuing without {}. Package installs will fail until it is installed ({})",
                tool.config().display_name,
                tool.config().docs_url
            ))?;
        }
    }

    Ok(())
}

fn select_framework(args: &CreateArgs) -> Result<Framework> {
    if let Some(framework) = args.framework {
        cliclack::log::info(format!("Using framework: {}", framework))?;
        return Ok(framework);
    }

    let framework = cliclack::select("Which framework do you want to use?")
        .item(Framework::ViteReact, Framework::ViteReact.display_name(), "")
        .item(Framework::NextJs, Framework::NextJs.display_name(), "")
        .interact()?;

    Ok(framework)
}

fn input_project_name(args: &CreateArgs) -> Result<ProjectName> {
    if let Some(name) = &args.name {
        let project_name = ProjectName::parse(name)?;
        cliclack::log::info(format!("Using project name: {}", project_name))?;
        return Ok(project_name);
    }

    let input: String = cliclack::input("What is your project name?")
        .placeholder("my-app")
        .validate(|input: &String| ProjectName::parse(input).map(|_| ()))
        .interact()?;

    Ok(ProjectName::parse(&input)?)
}

/// Ask the follow-up questions in their fixed order
fn collect_answers(
    framework: Framework,
    project_name: ProjectName,
    detected: &DetectedDependencies,
    args: &CreateArgs,
) -> Result<Answers> {
    let styled_components = if framework == Framework::NextJs {
        if plan::asks_styled_components(framework, detected) {
            let choice = select_styled_components(args)?;
            if choice == StyledComponentsChoice::Yes {
                cliclack::log::info("Styled Components will be installed.")?;
            } else {
                cliclack::log::info("Styled Components installation skipped.")?;
            }
            choice
        } else {
            cliclack::log::info(
                "Tailwind CSS is already installed, skipping Styled Components prompt.",
            )?;
            StyledComponentsChoice::NotAsked
        }
    } else {
        StyledComponentsChoice::NotAsked
    };

    let styling = if plan::asks_styling(framework) {
        select_styling(args)?
    } else {
        Styling::None
    };

    let state_management = select_state_management(args)?;

    let stack = match framework {
        Framework::ViteReact => Stack::ViteReact { styling },
        Framework::NextJs => Stack::NextJs { styled_components },
    };

    Ok(Answers::new(project_name, stack, state_management))
}

fn select_styled_components(args: &CreateArgs) -> Result<StyledComponentsChoice> {
    if let Some(choice) = args.styled_components {
        return Ok(choice);
    }

    let choice = cliclack::select("Would you like to use Styled Components?")
        .item(StyledComponentsChoice::Yes, "Yes", "")
        .item(StyledComponentsChoice::No, "No", "")
        .interact()?;

    Ok(choice)
}

fn select_styling(args: &CreateArgs) -> Result<Styling> {
    if let Some(styling) = args.styling {
        cliclack::log::info(format!("Using styling: {}", styling.display_name()))?;
        return Ok(styling);
    }

    let mut select =
        cliclack::select("Would you like to use other styling (Global CSS is default)?");
    for styling in [Styling::Tailwind, Styling::StyledComponents, Styling::None] {
        select = select.item(styling, styling.display_name(), "");
    }

    Ok(select.interact()?)
}

fn select_state_management(args: &CreateArgs) -> Result<StateManagement> {
    if let Some(state) = args.state_management {
        cliclack::log::info(format!("Using state management: {}", state.display_name()))?;
        return Ok(state);
    }

    let mut select = cliclack::select(
        "Would you like to use other state management (React Context is default)?",
    );
    for state in [
        StateManagement::ReduxToolkit,
        StateManagement::Zustand,
        StateManagement::None,
    ] {
        select = select.item(state, state.display_name(), "");
    }

    Ok(select.interact()?)
}

fn dry_run(framework: Framework, project_name: ProjectName, args: &CreateArgs) -> Result<()> {
    let detected = DetectedDependencies::default();
    cliclack::log::info("Dry run: assuming the generator installs neither Tailwind CSS nor ESLint")?;

    let answers = collect_answers(framework, project_name, &detected, args)?;
    let plan = plan::build_plan(&answers, &detected);
    let report = plan::render_report(&answers, &plan).context("Failed to render plan")?;

    println!();
    println!("{}", report);

    cliclack::outro("Dry run complete. Nothing was executed.")?;
    Ok(())
}

fn print_next_steps<C: ProductConfig>(
    config: &C,
    project_dir: &Path,
    answers: &Answers,
) -> Result<()> {
    let steps = config.next_steps(project_dir, answers);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    Ok(())
}
