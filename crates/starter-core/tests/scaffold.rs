//! End-to-end scaffolding with a fake shell and real files

use starter_core::answers::{
    Answers, Framework, ProjectName, Stack, StateManagement, StyledComponentsChoice, Styling,
};
use starter_core::detect::{DetectedDependencies, PackageJsonProbe};
use starter_core::exec::CommandRunner;
use starter_core::plan::{self, ShellCommand};
use starter_core::workflow::Scaffolder;
use starter_core::ScaffoldError;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

const VITE_MANIFEST: &str = r#"{
  "name": "shop",
  "dependencies": { "react": "^18.3.1" },
  "devDependencies": { "vite": "^5.4.1" }
}"#;

const NEXT_MANIFEST_WITH_ESLINT: &str = r#"{
  "name": "shop",
  "dependencies": { "next": "14.2.5" },
  "devDependencies": { "eslint": "^8", "eslint-config-next": "14.2.5" }
}"#;

/// Plays the part of the generators: the base command creates a project skeleton
struct FakeShell {
    manifest: &'static str,
    ran: RefCell<Vec<(String, PathBuf)>>,
    fail_on: Option<&'static str>,
}

impl FakeShell {
    fn new(manifest: &'static str) -> Self {
        Self {
            manifest,
            ran: RefCell::new(Vec::new()),
            fail_on: None,
        }
    }

    fn commands(&self) -> Vec<String> {
        self.ran.borrow().iter().map(|(c, _)| c.clone()).collect()
    }
}

impl CommandRunner for FakeShell {
    fn run(&self, command: &ShellCommand, cwd: &Path) -> Result<(), ScaffoldError> {
        self.ran
            .borrow_mut()
            .push((command.to_string(), cwd.to_path_buf()));

        if self.fail_on == Some(command.as_str()) {
            return Err(ScaffoldError::CommandFailed {
                command: command.to_string(),
                code: Some(1),
            });
        }

        if command.as_str().starts_with("npx create-") {
            let name = command.as_str().split_whitespace().nth(2).unwrap();
            let project = cwd.join(name);
            fs::create_dir_all(project.join("src")).unwrap();
            fs::write(project.join("package.json"), self.manifest).unwrap();
            fs::write(project.join("src/index.css"), "body { margin: 0; }\n").unwrap();
        }
        Ok(())
    }
}

fn name() -> ProjectName {
    ProjectName::parse("shop").unwrap()
}

#[tokio::test]
async fn test_vite_tailwind_zustand_project() {
    let workspace = tempfile::tempdir().unwrap();
    let scaffolder = Scaffolder::new(
        FakeShell::new(VITE_MANIFEST),
        PackageJsonProbe,
        workspace.path().to_path_buf(),
    );

    let detected = scaffolder.generate_base(Framework::ViteReact, &name()).unwrap();
    assert_eq!(detected, DetectedDependencies::default());

    let answers = Answers::new(
        name(),
        Stack::ViteReact {
            styling: Styling::Tailwind,
        },
        StateManagement::Zustand,
    );
    let plan = plan::build_plan(&answers, &detected);
    scaffolder.execute(&answers.project_name, &plan).unwrap();
    let written = scaffolder
        .materialize(&answers.project_name, &plan)
        .await
        .unwrap();
    assert_eq!(written.len(), plan.files.len());

    let project = workspace.path().join("shop");
    let css = fs::read_to_string(project.join("src/index.css")).unwrap();
    assert!(css.starts_with("body { margin: 0; }\n"));
    assert!(css.trim_end().ends_with(
        "@tailwind base;\n@tailwind components;\n@tailwind utilities;"
    ));

    assert!(project.join("tailwind.config.js").is_file());
    assert!(project.join("src/stores/useStore.ts").is_file());
    assert!(!project.join("src/stores/store.ts").exists());
    assert!(!project.join("src/stores/hooks.ts").exists());
    assert_eq!(
        fs::read_to_string(project.join("src/stores/index.ts")).unwrap(),
        "// stores index file"
    );

    let ran = scaffolder.runner().commands();
    assert_eq!(ran[0], "npx create-vite@latest shop --template react-ts");
    assert!(ran.contains(&"yarn add tailwindcss postcss autoprefixer".to_string()));
    assert!(ran.contains(&"npx tailwind init -p".to_string()));
}

#[test]
fn test_next_project_skips_styled_prompt_when_tailwind_present() {
    let workspace = tempfile::tempdir().unwrap();
    let manifest = r#"{ "devDependencies": { "tailwindcss": "^3.4.1" } }"#;
    let scaffolder = Scaffolder::new(
        FakeShell::new(manifest),
        PackageJsonProbe,
        workspace.path().to_path_buf(),
    );

    let detected = scaffolder.generate_base(Framework::NextJs, &name()).unwrap();
    assert!(detected.has_tailwind);
    assert!(!plan::asks_styled_components(Framework::NextJs, &detected));
}

#[tokio::test]
async fn test_next_styled_components_with_existing_eslint() {
    let workspace = tempfile::tempdir().unwrap();
    let scaffolder = Scaffolder::new(
        FakeShell::new(NEXT_MANIFEST_WITH_ESLINT),
        PackageJsonProbe,
        workspace.path().to_path_buf(),
    );

    let detected = scaffolder.generate_base(Framework::NextJs, &name()).unwrap();
    assert!(detected.has_eslint);
    assert!(plan::asks_styled_components(Framework::NextJs, &detected));

    let answers = Answers::new(
        name(),
        Stack::NextJs {
            styled_components: StyledComponentsChoice::Yes,
        },
        StateManagement::None,
    );
    let plan = plan::build_plan(&answers, &detected);
    scaffolder.execute(&answers.project_name, &plan).unwrap();
    scaffolder
        .materialize(&answers.project_name, &plan)
        .await
        .unwrap();

    let project = workspace.path().join("shop");
    let registry =
        fs::read_to_string(project.join("src/libs/StyledComponentsRegistry.tsx")).unwrap();
    assert!(registry.contains("useServerInsertedHTML"));

    let ran = scaffolder.runner().ran.borrow().clone();
    // Base generator runs in the workspace, everything else inside the project
    assert_eq!(ran[0].1, workspace.path());
    assert!(ran[1..].iter().all(|(_, cwd)| cwd == &project));

    let lint = ran
        .iter()
        .map(|(c, _)| c.as_str())
        .find(|c| c.starts_with("yarn add -D prettier"))
        .unwrap();
    assert!(!lint.split_whitespace().any(|p| p == "eslint"));
    assert!(lint.contains("eslint-config-next"));
}

#[tokio::test]
async fn test_failed_command_aborts_before_files_are_written() {
    let workspace = tempfile::tempdir().unwrap();
    let mut shell = FakeShell::new(VITE_MANIFEST);
    shell.fail_on = Some("yarn add @reduxjs/toolkit react-redux");
    let scaffolder = Scaffolder::new(shell, PackageJsonProbe, workspace.path().to_path_buf());

    let detected = scaffolder.generate_base(Framework::ViteReact, &name()).unwrap();
    let answers = Answers::new(
        name(),
        Stack::ViteReact {
            styling: Styling::None,
        },
        StateManagement::ReduxToolkit,
    );
    let plan = plan::build_plan(&answers, &detected);

    let err = scaffolder.execute(&answers.project_name, &plan).unwrap_err();
    assert!(err.is_subprocess());

    let ran = scaffolder.runner().commands();
    assert_eq!(ran.last().unwrap(), "yarn add @reduxjs/toolkit react-redux");
    assert!(!ran.iter().any(|c| c == "npx husky"));

    // The partially generated project is left as-is
    let project = workspace.path().join("shop");
    assert!(project.join("package.json").is_file());
    assert!(!project.join(".eslintrc").exists());
}

#[test]
fn test_generator_without_manifest_is_reported() {
    let workspace = tempfile::tempdir().unwrap();
    let probe = |_: &Path| -> Result<DetectedDependencies, ScaffoldError> {
        Err(ScaffoldError::ManifestRead {
            path: PathBuf::from("shop/package.json"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        })
    };
    let scaffolder = Scaffolder::new(
        FakeShell::new(VITE_MANIFEST),
        probe,
        workspace.path().to_path_buf(),
    );

    let err = scaffolder
        .generate_base(Framework::NextJs, &name())
        .unwrap_err();
    assert!(!err.is_subprocess());
    assert_eq!(
        scaffolder.runner().commands(),
        vec!["npx create-next-app@latest shop".to_string()]
    );
}
