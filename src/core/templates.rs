//! Fixed file templates. Only the project name is substituted.

use crate::domain::model::ProjectName;

pub const MAIN_PY: &str = "def main():\n    print(\"Hello World\")\n\nif __name__ == \"__main__\":\n    main()";

pub const TEST_PY: &str = "def test_simple():\n    assert 2 == 2";

pub const GITIGNORE: &str = "cov_report/\n.coverage*\n**/.pytest_cache\n**/__pycache__\n";

pub const GITATTRIBUTES: &str = "* text=auto eol=lf\n";

pub fn cov_config(name: &ProjectName) -> String {
    format!("[run]\nomit =\n    {name}/tests/*\n    **/__init__.py")
}

pub fn makefile(name: &ProjectName) -> String {
    format!(
        concat!(
            "RUN=poetry run\n",
            "\n",
            ".PHONY: cov\n",
            "\n",
            "update:\n",
            "\tpoetry update\n",
            "\tpoetry lock\n",
            "\n",
            "install:\n",
            "\tpoetry install\n",
            "\n",
            "cov:\n",
            "\t${{RUN}} pytest --cov-config=.cov_config --cov-report html:cov_report --cov=./{name} ./{name}/tests\n",
            "\n",
            "format:\n",
            "\t${{RUN}} black .\n",
            "\n",
            "todo:\n",
            "\tfind . | grep .py$$ | grep -rnw . -e TODO\n",
            "\n",
            "clean:\n",
            "\trm -rf cov_report dist .idea .ipynb_checkpoints\n",
            "\trm -f .coverage*\n",
            "\tfind ./ | grep __pycache__$ | xargs rm -rf\n",
            "\tfind ./ | grep .pytest_cache$ | xargs rm -rf\n",
        ),
        name = name
    )
}

pub fn pyproject(name: &ProjectName) -> String {
    format!(
        r#"[tool.poetry]
name = "{name}"
version = "0.1.0"
description = "Python-Poetry template"
authors = ["Ledmington <ledmington.dev@gmail.com>"]


[tool.poetry.dependencies]
python = "^3.9"


[tool.poetry.dev-dependencies]
pytest = "^7.1.1"
pytest-cov = "^3.0.0"
black = "^22.3.0"


[build-system]
requires = ["poetry-core>=1.0.0"]
build-backend = "poetry.core.masonry.api"
"#
    )
}

pub fn readme(name: &ProjectName) -> String {
    format!("# {name}\n\n")
}

pub fn test_workflow(name: &ProjectName) -> String {
    format!(
        r#"name: {name} tests

on:
    workflow_dispatch:
    push:
        branches: [ master ]

jobs:
    tests:
        runs-on: ubuntu-latest
        strategy:
            matrix:
                pv: ['3.8', '3.9', '3.10']
        steps:
            - uses: actions/checkout@v2
            - uses: actions/setup-python@v2
              with:
                  python-version: ${{{{ matrix.pv }}}}
                  architecture: 'x64'

            - name: Install Poetry
              run: pip install poetry

            - name: Install dependencies
              run: make install

            - name: Tests
              run: make cov
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo() -> ProjectName {
        ProjectName::new("demo").unwrap()
    }

    #[test]
    fn test_cov_config_omits_tests_and_markers() {
        assert_eq!(
            cov_config(&demo()),
            "[run]\nomit =\n    demo/tests/*\n    **/__init__.py"
        );
    }

    #[test]
    fn test_main_py_text() {
        assert_eq!(
            MAIN_PY,
            "def main():\n    print(\"Hello World\")\n\nif __name__ == \"__main__\":\n    main()"
        );
    }

    #[test]
    fn test_makefile_text() {
        let expected = "RUN=poetry run\n\
\n\
.PHONY: cov\n\
\n\
update:\n\
\tpoetry update\n\
\tpoetry lock\n\
\n\
install:\n\
\tpoetry install\n\
\n\
cov:\n\
\t${RUN} pytest --cov-config=.cov_config --cov-report html:cov_report --cov=./demo ./demo/tests\n\
\n\
format:\n\
\t${RUN} black .\n\
\n\
todo:\n\
\tfind . | grep .py$$ | grep -rnw . -e TODO\n\
\n\
clean:\n\
\trm -rf cov_report dist .idea .ipynb_checkpoints\n\
\trm -f .coverage*\n\
\tfind ./ | grep __pycache__$ | xargs rm -rf\n\
\tfind ./ | grep .pytest_cache$ | xargs rm -rf\n";

        assert_eq!(makefile(&demo()), expected);
    }

    #[test]
    fn test_pyproject_text() {
        let expected = "[tool.poetry]\n\
name = \"demo\"\n\
version = \"0.1.0\"\n\
description = \"Python-Poetry template\"\n\
authors = [\"Ledmington <ledmington.dev@gmail.com>\"]\n\
\n\
\n\
[tool.poetry.dependencies]\n\
python = \"^3.9\"\n\
\n\
\n\
[tool.poetry.dev-dependencies]\n\
pytest = \"^7.1.1\"\n\
pytest-cov = \"^3.0.0\"\n\
black = \"^22.3.0\"\n\
\n\
\n\
[build-system]\n\
requires = [\"poetry-core>=1.0.0\"]\n\
build-backend = \"poetry.core.masonry.api\"\n";

        assert_eq!(pyproject(&demo()), expected);
    }

    #[test]
    fn test_readme_is_heading_only() {
        assert_eq!(readme(&demo()), "# demo\n\n");
    }

    #[test]
    fn test_workflow_embeds_name_and_matrix() {
        let workflow = test_workflow(&demo());
        assert!(workflow.starts_with("name: demo tests\n"));
        assert!(workflow.contains("python-version: ${{ matrix.pv }}"));
        assert!(workflow.contains("pv: ['3.8', '3.9', '3.10']"));
    }
}
