use std::fs;

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use tracing::info;

use crate::blueprint::{self, Blueprint};
use crate::cli::Cli;
use crate::{content, logging, tree};

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.verbose);

    let base = current_working_dir()?;
    let blueprint = blueprint::starter_kit();
    scaffold(&base, &blueprint)?;

    println!("{} structure created successfully!", blueprint.display_name);
    Ok(())
}

/// Materialize `blueprint` under `base`: project directory first, then the
/// tree, then the seed content.
pub fn scaffold(base: &Utf8Path, blueprint: &Blueprint) -> Result<()> {
    let project_dir = base.join(blueprint.project_dir);
    fs::create_dir_all(&project_dir)
        .with_context(|| format!("creating directory {}", project_dir))?;

    info!("materializing {} into {}", blueprint.display_name, project_dir);
    tree::materialize(&project_dir, &blueprint.tree)?;
    content::write_initial_content(&project_dir, blueprint)?;
    Ok(())
}

fn current_working_dir() -> Result<Utf8PathBuf> {
    let cwd = std::env::current_dir().context("determining current directory")?;
    Utf8PathBuf::from_path_buf(cwd).map_err(|_| anyhow!("current directory is not valid UTF-8"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir() -> Utf8PathBuf {
        let mut dir = std::env::temp_dir();
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        dir.push(format!("starterkit-test-{ts}"));
        Utf8PathBuf::from_path_buf(dir).unwrap()
    }

    #[test]
    fn scaffold_produces_tree_and_seed_content() {
        let base = unique_temp_dir();
        fs::create_dir_all(base.as_std_path()).unwrap();

        scaffold(&base, &blueprint::starter_kit()).unwrap();

        let project = base.join("starter-kit");
        let workflow = project.join(".github/workflows/node.js.yml");
        let metadata = fs::metadata(workflow.as_std_path()).unwrap();
        assert!(metadata.is_file());
        assert_eq!(metadata.len(), 0);

        assert!(project.join("Makefile").as_std_path().is_file());
        assert!(project.join("package.json").as_std_path().is_file());

        let _ = fs::remove_dir_all(base.as_std_path());
    }

    #[test]
    fn scaffold_into_populated_directory_leaves_strangers_alone() {
        let base = unique_temp_dir();
        let project = base.join("starter-kit");
        fs::create_dir_all(project.join("notes").as_std_path()).unwrap();
        fs::write(project.join("notes/todo.txt").as_std_path(), "unrelated").unwrap();

        scaffold(&base, &blueprint::starter_kit()).unwrap();

        let kept = fs::read_to_string(project.join("notes/todo.txt").as_std_path()).unwrap();
        assert_eq!(kept, "unrelated");

        let _ = fs::remove_dir_all(base.as_std_path());
    }
}
