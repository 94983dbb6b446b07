//! File templates written into generated projects

/// Folders created under `src/`, each seeded with an `index.ts`
pub const SRC_FOLDERS: &[&str] = &[
    "components",
    "config",
    "constants",
    "features",
    "helpers",
    "hooks",
    "libs",
    "stores",
    "theme",
    "types",
];

pub const COMMITLINT_CONFIG: &str = include_str!("../../templates/commitlintrc.cjs");
pub const PRETTIER_CONFIG: &str = include_str!("../../templates/prettierrc.json");
pub const ESLINT_CONFIG_NEXT: &str = include_str!("../../templates/eslintrc.next.json");
pub const ESLINT_CONFIG_VITE: &str = include_str!("../../templates/eslintrc.vite.json");

pub const TAILWIND_CONFIG: &str = include_str!("../../templates/tailwind.config.js");
pub const TAILWIND_DIRECTIVES: &str = include_str!("../../templates/tailwind-directives.css");

/// Registry using `useServerInsertedHTML` from `next/navigation`
pub const STYLED_REGISTRY_NEXT: &str =
    include_str!("../../templates/StyledComponentsRegistry.next.tsx");
pub const STYLED_REGISTRY: &str = include_str!("../../templates/StyledComponentsRegistry.tsx");

pub const REDUX_STORE: &str = include_str!("../../templates/redux-store.ts");
pub const REDUX_HOOKS: &str = include_str!("../../templates/redux-hooks.ts");
pub const ZUSTAND_STORE: &str = include_str!("../../templates/zustand-store.ts");

pub fn folder_index(folder: &str) -> String {
    format!("// {} index file", folder)
}
