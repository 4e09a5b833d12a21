use crate::core::steps::Step;
use crate::domain::model::{Entry, ProjectName, ScaffoldReport};
use crate::domain::ports::Filesystem;
use crate::utils::error::Result;
use std::path::PathBuf;

pub struct Scaffolder<F: Filesystem> {
    fs: F,
    root: PathBuf,
    quiet: bool,
}

impl<F: Filesystem> Scaffolder<F> {
    pub fn new(fs: F, root: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            root: root.into(),
            quiet: false,
        }
    }

    /// Sends step progress to the log instead of stdout.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn filesystem(&self) -> &F {
        &self.fs
    }

    /// Everything a run would create, without touching the filesystem.
    pub fn plan(&self, name: &ProjectName) -> Vec<Entry> {
        Step::ALL.iter().flat_map(|step| step.render(name)).collect()
    }

    /// Runs every step in order. The first failure aborts the run and leaves
    /// the output of earlier steps in place.
    pub fn run(&self, name: &ProjectName) -> Result<ScaffoldReport> {
        tracing::info!("Scaffolding project '{}' in {}", name, self.root.display());

        let mut created = Vec::new();
        for step in Step::ALL {
            if self.quiet {
                tracing::info!("{}", step.description());
            } else {
                println!("{}", step.description());
            }

            let paths = step.apply(&self.fs, name).inspect_err(|e| {
                tracing::error!("{:?} failed: {}", step, e);
            })?;
            tracing::debug!("{:?} created {} paths", step, paths.len());
            created.extend(paths);
        }

        Ok(ScaffoldReport {
            project_name: name.clone(),
            root: self.root.clone(),
            created,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryFilesystem;
    use crate::utils::error::ScaffoldError;

    #[test]
    fn test_run_creates_full_layout() {
        let scaffolder = Scaffolder::new(MemoryFilesystem::new(), ".");
        let name = ProjectName::new("demo").unwrap();

        let report = scaffolder.run(&name).unwrap();

        assert_eq!(report.created.len(), 17);
        assert_eq!(report.created.first(), Some(&PathBuf::from("demo")));
        assert_eq!(
            report.created.last(),
            Some(&PathBuf::from(".github/workflows/test.yml"))
        );
        assert_eq!(scaffolder.filesystem().paths().len(), 17);
    }

    #[test]
    fn test_quiet_run_creates_same_layout() {
        let loud = Scaffolder::new(MemoryFilesystem::new(), ".");
        let quiet = Scaffolder::new(MemoryFilesystem::new(), ".").quiet(true);
        let name = ProjectName::new("demo").unwrap();

        let loud_report = loud.run(&name).unwrap();
        let quiet_report = quiet.run(&name).unwrap();

        assert_eq!(loud_report.created, quiet_report.created);
        assert_eq!(
            quiet.filesystem().read("README.md").as_deref(),
            Some("# demo\n\n")
        );
    }

    #[test]
    fn test_plan_matches_run() {
        let scaffolder = Scaffolder::new(MemoryFilesystem::new(), ".");
        let name = ProjectName::new("demo").unwrap();

        let planned: Vec<PathBuf> = scaffolder
            .plan(&name)
            .iter()
            .map(|entry| entry.path().clone())
            .collect();
        assert!(scaffolder.filesystem().paths().is_empty());

        let report = scaffolder.run(&name).unwrap();
        assert_eq!(planned, report.created);
    }

    #[test]
    fn test_second_run_collides_on_first_path() {
        let scaffolder = Scaffolder::new(MemoryFilesystem::new(), ".");
        let name = ProjectName::new("demo").unwrap();
        scaffolder.run(&name).unwrap();

        let err = scaffolder.run(&name).unwrap_err();
        assert!(matches!(err, ScaffoldError::PathCollision { ref path } if path == &PathBuf::from("demo")));
    }

    #[test]
    fn test_failure_keeps_earlier_output() {
        let fs = MemoryFilesystem::new();
        fs.create_file(std::path::Path::new("Makefile"), "all:\n").unwrap();
        let scaffolder = Scaffolder::new(fs, ".");
        let name = ProjectName::new("demo").unwrap();

        let err = scaffolder.run(&name).unwrap_err();

        assert!(matches!(err, ScaffoldError::PathCollision { .. }));
        let fs = scaffolder.filesystem();
        assert!(fs.read(".cov_config").is_some());
        assert_eq!(fs.read("Makefile").as_deref(), Some("all:\n"));
        assert!(fs.read("pyproject.toml").is_none());
    }
}
