//! Side-effecting scaffolding phases
//!
//! Prompting lives elsewhere; a [`Scaffolder`] only runs the base generator,
//! inspects what it produced, runs planned commands and writes planned files.
//! Each step takes the data it needs explicitly so callers decide the order.

use crate::answers::{Framework, ProjectName};
use crate::detect::{DependencyProbe, DetectedDependencies, PackageJsonProbe};
use crate::error::ScaffoldError;
use crate::exec::{run_all, CommandRunner, ShellRunner};
use crate::materialize::{self, MaterializedFile};
use crate::plan::{self, Plan};
use std::path::{Path, PathBuf};

pub struct Scaffolder<R, P> {
    runner: R,
    probe: P,
    /// Directory the project folder is created in
    workspace: PathBuf,
}

impl Scaffolder<ShellRunner, PackageJsonProbe> {
    /// Real shell and manifest probe, creating projects under `workspace`
    pub fn system(workspace: PathBuf) -> Self {
        Self::new(ShellRunner, PackageJsonProbe, workspace)
    }
}

impl<R: CommandRunner, P: DependencyProbe> Scaffolder<R, P> {
    pub fn new(runner: R, probe: P, workspace: PathBuf) -> Self {
        Self {
            runner,
            probe,
            workspace,
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn workspace(&self) -> &Path {
        &self.workspace
    }

    pub fn project_dir(&self, name: &ProjectName) -> PathBuf {
        self.workspace.join(name.as_str())
    }

    /// Run the framework generator, then inspect the project it created
    pub fn generate_base(
        &self,
        framework: Framework,
        name: &ProjectName,
    ) -> Result<DetectedDependencies, ScaffoldError> {
        let command = plan::base_command(framework, name.as_str());
        self.runner.run(&command, &self.workspace)?;
        self.probe.detect(&self.project_dir(name))
    }

    /// Run the plan's commands inside the project directory
    pub fn execute(&self, name: &ProjectName, plan: &Plan) -> Result<(), ScaffoldError> {
        run_all(&self.runner, &plan.commands, &self.project_dir(name))
    }

    /// Write the plan's files into the project directory
    pub async fn materialize(
        &self,
        name: &ProjectName,
        plan: &Plan,
    ) -> Result<Vec<MaterializedFile>, ScaffoldError> {
        materialize::materialize(&self.project_dir(name), &plan.files).await
    }
}
