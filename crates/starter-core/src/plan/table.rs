//! Decision table from answers to commands and files

use super::files;
use super::{FileWrite, Plan, ShellCommand};
use crate::answers::{Answers, Framework, StateManagement, StyledComponentsChoice, Styling};
use crate::detect::DetectedDependencies;

const STYLED_COMPONENTS_INSTALL: &[&str] = &[
    "yarn add styled-components",
    "yarn add -D @types/styled-components",
];

const TAILWIND_INSTALL: &[&str] = &[
    "yarn add tailwindcss postcss autoprefixer",
    "npx tailwind init -p",
];

const LINT_STAGED_SETUP: &str = r#"npx json -I -f package.json -e 'this["lint-staged"]={"*.{js,jsx,ts,tsx}": ["eslint --fix", "prettier --write"]}'"#;

/// Always run last, after the lint tooling is installed
const FIXED_TAIL: &[&str] = &[
    "yarn add antd @ant-design/icons @ant-design/cssinjs",
    "npx husky",
    "npx husky init",
    r#"echo "npx lint-staged" > .husky/pre-commit"#,
    r#"echo "npx --no -- commitlint --edit $1" > .husky/commit-msg"#,
];

const STYLED_REGISTRY_PATH: &str = "src/libs/StyledComponentsRegistry.tsx";

/// Generator command that creates the project directory
pub fn base_command(framework: Framework, project_name: &str) -> ShellCommand {
    match framework {
        Framework::ViteReact => ShellCommand::new(format!(
            "npx create-vite@latest {} --template react-ts",
            project_name
        )),
        Framework::NextJs => ShellCommand::new(format!("npx create-next-app@latest {}", project_name)),
    }
}

/// Next.js projects are asked about styled-components unless Tailwind came with the generator
pub fn asks_styled_components(framework: Framework, detected: &DetectedDependencies) -> bool {
    framework == Framework::NextJs && !detected.has_tailwind
}

/// Only Vite projects get the styling question
pub fn asks_styling(framework: Framework) -> bool {
    framework == Framework::ViteReact
}

/// Build the full plan for a project whose base generator has already run
pub fn build_plan(answers: &Answers, detected: &DetectedDependencies) -> Plan {
    Plan {
        commands: commands(answers, detected),
        files: file_writes(answers),
    }
}

fn commands(answers: &Answers, detected: &DetectedDependencies) -> Vec<ShellCommand> {
    let mut commands: Vec<ShellCommand> = Vec::new();

    if answers.styled_components() == StyledComponentsChoice::Yes {
        push_all(STYLED_COMPONENTS_INSTALL, &mut commands);
    }

    match answers.styling() {
        Styling::Tailwind => push_all(TAILWIND_INSTALL, &mut commands),
        Styling::StyledComponents => push_all(STYLED_COMPONENTS_INSTALL, &mut commands),
        Styling::None => {}
    }

    match answers.state_management {
        StateManagement::ReduxToolkit => {
            commands.push(ShellCommand::new("yarn add @reduxjs/toolkit react-redux"))
        }
        StateManagement::Zustand => commands.push(ShellCommand::new("yarn add zustand")),
        StateManagement::None => {}
    }

    commands.push(lint_install(answers.framework(), detected.has_eslint));
    commands.push(ShellCommand::new(LINT_STAGED_SETUP));

    push_all(FIXED_TAIL, &mut commands);

    commands
}

fn push_all(list: &[&str], commands: &mut Vec<ShellCommand>) {
    commands.extend(list.iter().copied().map(ShellCommand::new));
}

fn lint_install(framework: Framework, has_eslint: bool) -> ShellCommand {
    let mut packages: Vec<&str> = Vec::new();
    if !has_eslint {
        packages.push("eslint");
    }
    packages.extend(["prettier", "eslint-config-prettier", "eslint-plugin-react"]);
    if framework == Framework::NextJs {
        packages.push("eslint-config-next");
    }
    packages.extend([
        "eslint-plugin-react-hooks",
        "eslint-plugin-react-refresh",
        "@typescript-eslint/eslint-plugin",
        "@typescript-eslint/parser",
        "husky",
        "@commitlint/cli",
        "@commitlint/config-conventional",
        "lint-staged",
    ]);

    ShellCommand::new(format!("yarn add -D {}", packages.join(" ")))
}

fn file_writes(answers: &Answers) -> Vec<FileWrite> {
    let mut writes: Vec<FileWrite> = files::SRC_FOLDERS
        .iter()
        .map(|folder| {
            FileWrite::overwrite(format!("src/{}/index.ts", folder), files::folder_index(folder))
        })
        .collect();

    writes.push(FileWrite::overwrite(".commitlintrc.cjs", files::COMMITLINT_CONFIG).labeled("Commitlint"));
    writes.push(FileWrite::overwrite(".prettierrc", files::PRETTIER_CONFIG).labeled("Prettier"));

    let eslint_config = match answers.framework() {
        Framework::NextJs => files::ESLINT_CONFIG_NEXT,
        Framework::ViteReact => files::ESLINT_CONFIG_VITE,
    };
    writes.push(FileWrite::overwrite(".eslintrc", eslint_config).labeled("ESLint"));

    if answers.styling() == Styling::Tailwind {
        writes.push(FileWrite::overwrite("tailwind.config.js", files::TAILWIND_CONFIG));
        writes.push(FileWrite::append("src/index.css", files::TAILWIND_DIRECTIVES).labeled("Tailwind CSS"));
    } else if answers.styled_components() == StyledComponentsChoice::Yes {
        writes.push(
            FileWrite::overwrite(STYLED_REGISTRY_PATH, files::STYLED_REGISTRY_NEXT)
                .labeled("Styled Components"),
        );
    } else if answers.styling() == Styling::StyledComponents {
        writes.push(
            FileWrite::overwrite(STYLED_REGISTRY_PATH, files::STYLED_REGISTRY)
                .labeled("Styled Components"),
        );
    }

    match answers.state_management {
        StateManagement::ReduxToolkit => {
            writes.push(FileWrite::overwrite("src/stores/store.ts", files::REDUX_STORE));
            writes.push(FileWrite::overwrite("src/stores/hooks.ts", files::REDUX_HOOKS).labeled("Redux Toolkit"));
        }
        StateManagement::Zustand => {
            writes.push(FileWrite::overwrite("src/stores/useStore.ts", files::ZUSTAND_STORE).labeled("Zustand"));
        }
        StateManagement::None => {}
    }

    writes
}
