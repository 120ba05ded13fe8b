//! Interactive flow: load → pick a mod folder if needed → resolve → save

use crate::cli::Cli;
use crate::prompt::Prompter;
use anyhow::{Context, Result};
use modlist_export::{
    ConsoleProgressReporter, ExportError, ExportSession, LoadedManifest, ModListExporter,
};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, warn};

/// How a run ended
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The report was written to this path
    Exported(PathBuf),
    /// No manifest or no mod folder was chosen
    Cancelled,
    /// Names were resolved but no destination was accepted
    NotSaved,
}

pub fn run<R: BufRead, W: Write>(args: Cli, prompter: &mut Prompter<R, W>) -> Result<Outcome> {
    let manifest_path = match args.manifest.clone() {
        Some(path) => path,
        None => match prompter.ask_path("Select dlc_load.json")? {
            Some(path) => path,
            None => return Ok(Outcome::Cancelled),
        },
    };

    let exporter = ModListExporter::new(args.export_config())
        .with_reporter(ConsoleProgressReporter::new(args.quiet));
    let loaded = exporter
        .load(&manifest_path)
        .with_context(|| format!("Failed to load {}", manifest_path.display()))?;

    let Some(session) = resolve_with_folder_prompt(&exporter, &loaded, prompter)? else {
        prompter.say("Operation cancelled. Cannot extract names without mod folder.")?;
        return Ok(Outcome::Cancelled);
    };

    save_with_retry(&session, args.output, prompter)
}

/// Resolve against the known folder, or keep asking until one is usable
fn resolve_with_folder_prompt<R: BufRead, W: Write>(
    exporter: &ModListExporter,
    loaded: &LoadedManifest,
    prompter: &mut Prompter<R, W>,
) -> Result<Option<ExportSession>> {
    if let Some(dir) = loaded.mod_directory.path() {
        return Ok(Some(exporter.resolve(loaded, dir)?));
    }

    prompter.say(
        "I couldn't find the 'mod' folder automatically.\n\
         Please select your 'mod' folder manually.",
    )?;
    loop {
        let Some(dir) = prompter.ask_path("Select your Paradox 'mod' folder")? else {
            return Ok(None);
        };
        match exporter.resolve(loaded, &dir) {
            Ok(session) => return Ok(Some(session)),
            Err(ExportError::ModDirectoryNotFound { path }) => {
                debug!("Rejected mod folder {}", path.display());
                prompter.say(&format!("'{}' is not a folder.", path.display()))?;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Export the session, asking for another destination after each failure
fn save_with_retry<R: BufRead, W: Write>(
    session: &ExportSession,
    output: Option<PathBuf>,
    prompter: &mut Prompter<R, W>,
) -> Result<Outcome> {
    let mut destination = output;
    loop {
        let path = match destination.take() {
            Some(path) => path,
            None => match prompter.ask_path("Save Mod List as (.txt)")? {
                Some(path) => path,
                None => {
                    prompter.say("Mod list not saved.")?;
                    return Ok(Outcome::NotSaved);
                }
            },
        };

        match session.export(&path) {
            Ok(written) => {
                prompter.say(&format!("Mod list saved successfully! ({})", written.display()))?;
                return Ok(Outcome::Exported(written));
            }
            Err(e) => {
                warn!(category = e.category(), "Export failed");
                prompter.say(&format!("Could not save file: {:#}", anyhow::Error::from(e)))?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use std::path::Path;
    use tempfile::{TempDir, tempdir};

    fn quiet_args(manifest: &Path) -> Cli {
        Cli {
            manifest: Some(manifest.to_path_buf()),
            quiet: true,
            ..Cli::default()
        }
    }

    /// `<root>/dlc_load.json` referencing 111.mod (named) and 222.mod (absent)
    fn playset(with_mod_folder: bool) -> (TempDir, PathBuf) {
        let root = tempdir().unwrap();
        let manifest = root.path().join("dlc_load.json");
        fs::write(&manifest, r#"{"enabled_mods": ["mod/111.mod", "mod/222.mod"]}"#).unwrap();
        if with_mod_folder {
            fs::create_dir(root.path().join("mod")).unwrap();
            fs::write(root.path().join("mod").join("111.mod"), "name=\"Alpha\"").unwrap();
        }
        (root, manifest)
    }

    fn run_with_input(args: Cli, input: &str) -> (Result<Outcome>, String) {
        let mut prompter = Prompter::new(Cursor::new(input.to_string()), Vec::new());
        let outcome = run(args, &mut prompter);
        let shown = String::from_utf8(prompter.into_output()).unwrap();
        (outcome, shown)
    }

    #[test]
    fn test_non_interactive_run() {
        let (root, manifest) = playset(true);
        let mut args = quiet_args(&manifest);
        args.output = Some(root.path().join("mods"));

        let (outcome, _) = run_with_input(args, "");

        let written = root.path().join("mods.txt");
        assert_eq!(outcome.unwrap(), Outcome::Exported(written.clone()));
        assert_eq!(
            fs::read_to_string(written).unwrap(),
            "Enabled Mods List:\n==================\nAlpha\nUnknown Mod (222.mod)\n"
        );
    }

    #[test]
    fn test_prompts_for_folder_when_not_detected() {
        let (root, manifest) = playset(false);
        let picked = root.path().join("picked");
        fs::create_dir(&picked).unwrap();
        fs::write(picked.join("222.mod"), "name = \"Beta\"").unwrap();
        let out = root.path().join("list.txt");
        let input = format!(
            "{}\n{}\n{}\n",
            root.path().join("nowhere").display(),
            picked.display(),
            out.display()
        );

        let (outcome, shown) = run_with_input(quiet_args(&manifest), &input);

        assert_eq!(outcome.unwrap(), Outcome::Exported(out.clone()));
        assert!(shown.contains("couldn't find the 'mod' folder"));
        assert!(shown.contains("is not a folder"));
        assert_eq!(
            fs::read_to_string(out).unwrap(),
            "Enabled Mods List:\n==================\nUnknown Mod (111.mod)\nBeta\n"
        );
    }

    #[test]
    fn test_cancelled_folder_prompt() {
        let (root, manifest) = playset(false);

        let (outcome, shown) = run_with_input(quiet_args(&manifest), "\n");

        assert_eq!(outcome.unwrap(), Outcome::Cancelled);
        assert!(shown.contains("Operation cancelled"));
        assert_eq!(fs::read_dir(root.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_failed_save_is_retried_with_same_results() {
        let (root, manifest) = playset(true);
        let mut args = quiet_args(&manifest);
        args.output = Some(root.path().join("no_such_dir").join("mods.txt"));
        let good = root.path().join("mods.txt");

        let (outcome, shown) = run_with_input(args, &format!("{}\n", good.display()));

        assert_eq!(outcome.unwrap(), Outcome::Exported(good.clone()));
        assert!(shown.contains("Could not save file"));
        assert!(fs::read_to_string(good).unwrap().ends_with("Alpha\nUnknown Mod (222.mod)\n"));
    }

    #[test]
    fn test_declined_save() {
        let (_root, manifest) = playset(true);

        let (outcome, shown) = run_with_input(quiet_args(&manifest), "");

        assert_eq!(outcome.unwrap(), Outcome::NotSaved);
        assert!(shown.contains("Mod list not saved."));
    }

    #[test]
    fn test_invalid_manifest_is_an_error() {
        let root = tempdir().unwrap();
        let manifest = root.path().join("dlc_load.json");
        fs::write(&manifest, "[oops").unwrap();

        let (outcome, _) = run_with_input(quiet_args(&manifest), "");

        let err = outcome.unwrap_err();
        assert!(format!("{err:#}").starts_with(&format!("Failed to load {}", manifest.display())));
        assert!(matches!(
            err.downcast_ref::<ExportError>(),
            Some(ExportError::ManifestParse { .. })
        ));
    }

    #[test]
    fn test_manifest_prompt_cancelled() {
        let (outcome, _) = run_with_input(Cli::default(), "\n");
        assert_eq!(outcome.unwrap(), Outcome::Cancelled);
    }
}
