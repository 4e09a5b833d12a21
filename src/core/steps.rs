use crate::core::templates;
use crate::domain::model::{Entry, ProjectName};
use crate::domain::ports::Filesystem;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    DirectoryStructure,
    CoverageConfig,
    BuildFile,
    DependencyManifest,
    Readme,
    VcsMetadataFiles,
    CiWorkflow,
}

impl Step {
    pub const ALL: [Step; 7] = [
        Step::DirectoryStructure,
        Step::CoverageConfig,
        Step::BuildFile,
        Step::DependencyManifest,
        Step::Readme,
        Step::VcsMetadataFiles,
        Step::CiWorkflow,
    ];

    /// Progress line printed when the step starts.
    pub fn description(&self) -> &'static str {
        match self {
            Step::DirectoryStructure => "Generating structure...",
            Step::CoverageConfig => "Generating coverage configuration...",
            Step::BuildFile => "Generating Makefile...",
            Step::DependencyManifest => "Generating Poetry dependencies...",
            Step::Readme => "Generating README.md...",
            Step::VcsMetadataFiles => "Generating .gitignore and .gitattributes...",
            Step::CiWorkflow => "Generating GitHub workflow...",
        }
    }

    /// Renders the step's outputs in creation order.
    pub fn render(&self, name: &ProjectName) -> Vec<Entry> {
        match self {
            Step::DirectoryStructure => directory_structure(name),
            Step::CoverageConfig => vec![Entry::file(".cov_config", templates::cov_config(name))],
            Step::BuildFile => vec![Entry::file("Makefile", templates::makefile(name))],
            Step::DependencyManifest => {
                vec![Entry::file("pyproject.toml", templates::pyproject(name))]
            }
            Step::Readme => vec![Entry::file("README.md", templates::readme(name))],
            Step::VcsMetadataFiles => vec![
                Entry::file(".gitignore", templates::GITIGNORE),
                Entry::file(".gitattributes", templates::GITATTRIBUTES),
            ],
            Step::CiWorkflow => {
                let workflows = Path::new(".github").join("workflows");
                vec![
                    Entry::dir(".github"),
                    Entry::dir(&workflows),
                    Entry::file(workflows.join("test.yml"), templates::test_workflow(name)),
                ]
            }
        }
    }

    /// Renders the step and creates every output, stopping at the first failure.
    pub fn apply<F: Filesystem + ?Sized>(&self, fs: &F, name: &ProjectName) -> Result<Vec<PathBuf>> {
        let mut created = Vec::new();
        for entry in self.render(name) {
            fs.create_entry(&entry)?;
            created.push(entry.path().clone());
        }
        Ok(created)
    }
}

fn directory_structure(name: &ProjectName) -> Vec<Entry> {
    let main_dir = PathBuf::from(name.as_str());
    let src_dir = main_dir.join(name.as_str());
    let test_dir = main_dir.join("tests");

    vec![
        Entry::dir(&main_dir),
        Entry::marker(main_dir.join("__init__.py")),
        Entry::dir(&src_dir),
        Entry::marker(src_dir.join("__init__.py")),
        Entry::file(src_dir.join("main.py"), templates::MAIN_PY),
        Entry::dir(&test_dir),
        Entry::marker(test_dir.join("__init__.py")),
        Entry::file(test_dir.join(format!("test_{}.py", name)), templates::TEST_PY),
    ]
}

pub fn create_directory_structure<F: Filesystem + ?Sized>(
    fs: &F,
    name: &ProjectName,
) -> Result<Vec<PathBuf>> {
    Step::DirectoryStructure.apply(fs, name)
}

pub fn create_coverage_config<F: Filesystem + ?Sized>(
    fs: &F,
    name: &ProjectName,
) -> Result<Vec<PathBuf>> {
    Step::CoverageConfig.apply(fs, name)
}

pub fn create_build_file<F: Filesystem + ?Sized>(fs: &F, name: &ProjectName) -> Result<Vec<PathBuf>> {
    Step::BuildFile.apply(fs, name)
}

pub fn create_dependency_manifest<F: Filesystem + ?Sized>(
    fs: &F,
    name: &ProjectName,
) -> Result<Vec<PathBuf>> {
    Step::DependencyManifest.apply(fs, name)
}

pub fn create_readme<F: Filesystem + ?Sized>(fs: &F, name: &ProjectName) -> Result<Vec<PathBuf>> {
    Step::Readme.apply(fs, name)
}

pub fn create_vcs_metadata_files<F: Filesystem + ?Sized>(
    fs: &F,
    name: &ProjectName,
) -> Result<Vec<PathBuf>> {
    Step::VcsMetadataFiles.apply(fs, name)
}

pub fn create_ci_workflow<F: Filesystem + ?Sized>(fs: &F, name: &ProjectName) -> Result<Vec<PathBuf>> {
    Step::CiWorkflow.apply(fs, name)
}
