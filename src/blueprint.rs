use crate::tree::TreeSpec;

/// A compiled-in project variant: the directory it creates, the layout,
/// and the boilerplate files seeded after the tree exists.
#[derive(Debug, Clone)]
pub struct Blueprint {
    /// Directory created under the invocation directory.
    pub project_dir: &'static str,
    /// Name used in the completion message.
    pub display_name: &'static str,
    /// `name` field of the rendered package manifest.
    pub package_name: &'static str,
    /// `description` field of the rendered package manifest.
    pub description: &'static str,
    /// `(destination, embedded template)` pairs written by the content
    /// writer. Dotfile destinations store their template without the dot.
    pub seed_files: &'static [(&'static str, &'static str)],
    pub tree: TreeSpec,
}

const STARTER_KIT_SEEDS: &[(&str, &str)] = &[
    ("README.md", "starter-kit/README.md"),
    ("Dockerfile", "starter-kit/Dockerfile"),
    ("docker-compose.yml", "starter-kit/docker-compose.yml"),
    ("Makefile", "starter-kit/Makefile"),
    (".env", "starter-kit/env"),
    (".gitignore", "starter-kit/gitignore"),
    ("LICENSE", "starter-kit/LICENSE"),
    ("CHANGELOG.md", "starter-kit/CHANGELOG.md"),
    ("SECURITY.md", "starter-kit/SECURITY.md"),
    ("CODE_OF_CONDUCT.md", "starter-kit/CODE_OF_CONDUCT.md"),
    ("CONTRIBUTING.md", "starter-kit/CONTRIBUTING.md"),
    ("release/release-notes.md", "starter-kit/release-notes.md"),
    ("release/versioning.md", "starter-kit/versioning.md"),
];

const DRAGON_CURVE_SEEDS: &[(&str, &str)] = &[("README.md", "dragon-curve/README.md")];

/// The variant the shipped binary materializes.
pub fn starter_kit() -> Blueprint {
    Blueprint {
        project_dir: "starter-kit",
        display_name: "Starter kit",
        package_name: "starter-kit",
        description: "A high-quality starter kit for modern development.",
        seed_files: STARTER_KIT_SEEDS,
        tree: project_tree(),
    }
}

/// Earlier variant of the same layout, kept for its seed content.
#[allow(dead_code)]
pub fn dragon_curve() -> Blueprint {
    Blueprint {
        project_dir: "my-dragon-curve",
        display_name: "Project",
        package_name: "my-dragon-curve",
        description: "A project to visualize and animate the Dragon Curve fractal.",
        seed_files: DRAGON_CURVE_SEEDS,
        tree: project_tree(),
    }
}

/// Both variants share one layout. `release` files are created empty here
/// and overwritten by the content writer afterwards.
fn project_tree() -> TreeSpec {
    TreeSpec::new()
        .dir(
            ".github",
            TreeSpec::new()
                .files("workflows", ["node.js.yml", "deploy.yml", "release.yml"])
                .files("ISSUE_TEMPLATE", ["bug_report.md", "feature_request.md"]),
        )
        .files(
            "docs",
            [
                "index.md",
                "setup.md",
                "usage.md",
                "api.md",
                "contributing.md",
                "faq.md",
            ],
        )
        .dir(
            "src",
            TreeSpec::new()
                .files("components", ["Button.js"])
                .files("assets", ["logo.png"])
                .files("utils", ["helpers.js"]),
        )
        .dir(
            "tests",
            TreeSpec::new()
                .files("unit", ["index.test.js"])
                .files("e2e", ["demo.spec.js"])
                .files("integration", ["api.test.js"])
                .files("performance", ["load.test.js"]),
        )
        .dir(
            "cypress",
            TreeSpec::new()
                .files("fixtures", [])
                .files("integration", ["demo.spec.js"]),
        )
        .files("scripts", ["setup.sh", "deploy.sh"])
        .files("tools", ["build.sh", "lint.sh"])
        .files("release", ["release-notes.md", "versioning.md"])
}
