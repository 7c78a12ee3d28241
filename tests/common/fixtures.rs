// Test fixtures for integration testing

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Hand-written snapshot in the layout Sphinx emits
///
/// Documents: 0 PDEs/PDEs, 1 PDEs/PDEs-Poisson,
/// 2 basiclinalg/bla-expressions, 3 intro.
#[allow(dead_code)]
pub fn sample_snapshot_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/searchindex.js")
}

/// Book source tree fixture
#[allow(dead_code)]
pub struct TestBook {
    pub dir: TempDir,
}

impl TestBook {
    /// A small book laid out like a jupyter-book project
    ///
    /// Sorted docnames (and so document ids):
    /// 0 `PDEs/PDEs`, 1 `PDEs/PDEs-Poisson`, 2 `PDEs/PDEs-waves`,
    /// 3 `basiclinalg/bla-expressions`, 4 `intro`, 5 `notebooks`.
    #[allow(dead_code)]
    pub fn small() -> Self {
        Self::with_files(&[
            (
                "intro.md",
                "# Introduction to Scientific Computing\n\n\
                 This course covers numerical methods for PDEs.\n",
            ),
            (
                "PDEs/PDEs.md",
                "# Partial differential equations\n\nWe discretize on a grid.\n",
            ),
            (
                "PDEs/PDEs-Poisson.md",
                "---\njupytext:\n  formats: md:myst\n---\n\
                 # Poisson Equation and the 5-point stencil\n\n\
                 The five point stencil approximates the Laplace operator on a grid.\n\n\
                 ```cpp\nfor (size_t i = 0; i < n; i++)\n  u[i] = 0;\n```\n",
            ),
            (
                "PDEs/PDEs-waves.md",
                "# Wave equations\n\nThe wave equation is solved with a stencil in time.\n",
            ),
            (
                "basiclinalg/bla-expressions.md",
                "# Expression templates\n\n\
                 Lazy evaluation avoids temporaries. Schöberl's ngbla uses expression templates.\n",
            ),
            (
                "notebooks.ipynb",
                r##"{
 "cells": [
  {"cell_type": "markdown", "metadata": {}, "source": ["# Content with notebooks\n", "\n", "Notebooks mix prose and code.\n"]},
  {"cell_type": "code", "metadata": {}, "execution_count": 1, "source": "print(\"hello world\")", "outputs": [{"output_type": "stream", "name": "stdout", "text": ["hello world\n"]}]}
 ],
 "metadata": {},
 "nbformat": 4,
 "nbformat_minor": 5
}"##,
            ),
            ("_build/html/stale.md", "# Stale\n\nobsolete build artifact\n"),
            (
                ".ipynb_checkpoints/notebooks-checkpoint.ipynb",
                r#"{"cells": []}"#,
            ),
        ])
    }

    /// Create with custom files
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");

        for (path, content) in files {
            let full_path = dir.path().join(path);
            if let Some(parent) = full_path.parent() {
                std::fs::create_dir_all(parent).expect("Failed to create directories");
            }
            std::fs::write(&full_path, content).expect("Failed to write file");
        }

        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
