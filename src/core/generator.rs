//! Build command generation.
//!
//! Pure and deterministic: the same configuration and parameters always
//! produce the same ordered command list. Commands for the `"default"`
//! block come first, then the target application's block; entries and
//! boards keep their source order so step numbers stay reproducible
//! across runs no matter how the executor schedules them.

use crate::config::{BuildConfig, BuildEntry, ProjectFileType, DEFAULT_TARGET};
use crate::error::{Error, Result};

/// Placeholder substituted with the resolved project file tag in template mode.
pub const PROJECT_FILE_TYPE_TOKEN: &str = "{{projectFileType}}";

/// How an entry's project file tag maps to a concrete project path.
#[derive(Debug, Clone)]
pub enum PathResolution {
    /// Single path containing `{{projectFileType}}`; every occurrence is
    /// replaced with the resolved tag. Legacy input shape.
    Template(String),
    /// One literal path per tag, used verbatim. The two paths may differ in
    /// more than an extension.
    DualPath { slcp: String, slcw: String },
}

impl PathResolution {
    pub fn resolve(&self, file_type: ProjectFileType) -> String {
        match self {
            PathResolution::Template(template) => {
                template.replace(PROJECT_FILE_TYPE_TOKEN, file_type.tag())
            }
            PathResolution::DualPath { slcp, slcw } => match file_type {
                ProjectFileType::Slcp => slcp.clone(),
                ProjectFileType::Slcw => slcw.clone(),
            },
        }
    }
}

/// Generate the ordered list of shell build commands for one application.
///
/// Fails with [`Error::UnknownBuildType`] when `build_type` is not a key of
/// the configuration, and with [`Error::NoBuildInfo`] when the selected block
/// has neither a `"default"` nor a `target_app` key. When only one of the two
/// is present, the other contributes zero commands. An empty result is not an
/// error here; whether zero commands means "skip" is the caller's policy.
pub fn generate_commands(
    config: &BuildConfig,
    build_type: &str,
    target_app: &str,
    build_script: &str,
    output_directory: &str,
    paths: &PathResolution,
) -> Result<Vec<String>> {
    let block = config
        .build_type(build_type)
        .ok_or_else(|| Error::UnknownBuildType(build_type.to_string()))?;

    let default_entries = block.get(DEFAULT_TARGET);
    // Asking for "default" itself must not emit the default block twice.
    let target_entries = if target_app == DEFAULT_TARGET {
        None
    } else {
        block.get(target_app)
    };

    if default_entries.is_none() && target_entries.is_none() {
        return Err(Error::NoBuildInfo(target_app.to_string()));
    }

    let mut commands = Vec::new();
    for entries in [default_entries, target_entries].into_iter().flatten() {
        for entry in entries {
            let project_path = paths.resolve(entry.project_file_type());
            for board in &entry.boards {
                commands.push(format_command(
                    build_script,
                    &project_path,
                    output_directory,
                    board,
                    entry,
                ));
            }
        }
    }

    Ok(commands)
}

/// `<script> <project> <output> <board> <args...>`.
///
/// Arguments are joined with single spaces and passed through verbatim.
/// A lone empty-string argument therefore leaves a trailing space; downstream
/// tooling depends on that exact shape, so no trimming happens here.
fn format_command(
    build_script: &str,
    project_path: &str,
    output_directory: &str,
    board: &str,
    entry: &BuildEntry,
) -> String {
    let mut command = format!(
        "{} {} {} {}",
        build_script, project_path, output_directory, board
    );
    if !entry.arguments.is_empty() {
        command.push(' ');
        command.push_str(&entry.arguments.join(" "));
    }
    command
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(raw: &str) -> BuildConfig {
        BuildConfig::from_json(raw).unwrap()
    }

    fn dual() -> PathResolution {
        PathResolution::DualPath {
            slcp: "/p".to_string(),
            slcw: "/p".to_string(),
        }
    }

    const STANDARD: &str = r#"{
        "standard": {
            "default": [{"boards": ["b1", "b2"], "arguments": ["a1", "a2"]}],
            "app1": [{"boards": ["b3"], "arguments": ["a3"]}]
        }
    }"#;

    #[test]
    fn default_then_target_in_source_order() {
        let commands = generate_commands(
            &config(STANDARD),
            "standard",
            "app1",
            "build.sh",
            "/out",
            &dual(),
        )
        .unwrap();

        assert_eq!(
            commands,
            vec![
                "build.sh /p /out b1 a1 a2",
                "build.sh /p /out b2 a1 a2",
                "build.sh /p /out b3 a3",
            ]
        );
    }

    #[test]
    fn repeated_calls_are_identical() {
        let config = config(STANDARD);
        let first =
            generate_commands(&config, "standard", "app1", "build.sh", "/out", &dual()).unwrap();
        let second =
            generate_commands(&config, "standard", "app1", "build.sh", "/out", &dual()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn command_count_matches_board_count() {
        let commands = generate_commands(
            &config(STANDARD),
            "standard",
            "app1",
            "build.sh",
            "/out",
            &dual(),
        )
        .unwrap();
        // 2 default boards + 1 target board
        assert_eq!(commands.len(), 3);
    }

    #[test]
    fn unknown_build_type_fails() {
        let err = generate_commands(
            &config(STANDARD),
            "release",
            "app1",
            "build.sh",
            "/out",
            &dual(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::UnknownBuildType(ref t) if t == "release"));
    }

    #[test]
    fn neither_default_nor_target_fails_with_no_build_info() {
        let err = generate_commands(
            &config(r#"{"standard": {"app1": [{"boards": ["b1"]}]}}"#),
            "standard",
            "app2",
            "build.sh",
            "/out",
            &dual(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::NoBuildInfo(ref a) if a == "app2"));
    }

    #[test]
    fn default_only_succeeds_when_target_absent() {
        let commands = generate_commands(
            &config(r#"{"standard": {"default": [{"boards": ["b1"], "arguments": ["a1"]}]}}"#),
            "standard",
            "app1",
            "build.sh",
            "/out",
            &dual(),
        )
        .unwrap();
        assert_eq!(commands, vec!["build.sh /p /out b1 a1"]);
    }

    #[test]
    fn target_only_succeeds_when_default_absent() {
        let commands = generate_commands(
            &config(r#"{"standard": {"app1": [{"boards": ["b1"]}]}}"#),
            "standard",
            "app1",
            "build.sh",
            "/out",
            &dual(),
        )
        .unwrap();
        assert_eq!(commands, vec!["build.sh /p /out b1"]);
    }

    #[test]
    fn default_target_does_not_duplicate_default_block() {
        let commands = generate_commands(
            &config(r#"{"standard": {"default": [{"boards": ["b1"]}]}}"#),
            "standard",
            "default",
            "build.sh",
            "/out",
            &dual(),
        )
        .unwrap();
        assert_eq!(commands.len(), 1);
    }

    #[test]
    fn missing_tag_resolves_to_slcw_path() {
        let paths = PathResolution::DualPath {
            slcp: "/app/example.slcp".to_string(),
            slcw: "/solution/example.slcw".to_string(),
        };
        let commands = generate_commands(
            &config(r#"{"standard": {"default": [{"boards": ["b1"]}]}}"#),
            "standard",
            "app1",
            "build.sh",
            "/out",
            &paths,
        )
        .unwrap();
        assert_eq!(commands, vec!["build.sh /solution/example.slcw /out b1"]);
    }

    #[test]
    fn template_substitutes_project_file_type() {
        let paths = PathResolution::Template("/path/to/example.{{projectFileType}}".to_string());
        assert_eq!(paths.resolve(ProjectFileType::Slcp), "/path/to/example.slcp");
        assert_eq!(paths.resolve(ProjectFileType::Slcw), "/path/to/example.slcw");
    }

    #[test]
    fn dual_paths_are_used_verbatim() {
        // The two paths share no substring relationship on purpose.
        let paths = PathResolution::DualPath {
            slcp: "/a/narrow/project.xml".to_string(),
            slcw: "/b/wide/solution.ws".to_string(),
        };
        assert_eq!(paths.resolve(ProjectFileType::Slcp), "/a/narrow/project.xml");
        assert_eq!(paths.resolve(ProjectFileType::Slcw), "/b/wide/solution.ws");
    }

    #[test]
    fn single_empty_argument_keeps_trailing_space() {
        let commands = generate_commands(
            &config(r#"{"standard": {"default": [{"boards": ["b1"], "arguments": [""]}]}}"#),
            "standard",
            "app1",
            "build.sh",
            "/out",
            &dual(),
        )
        .unwrap();
        assert_eq!(commands, vec!["build.sh /p /out b1 "]);
    }

    #[test]
    fn empty_argument_list_has_no_trailing_space() {
        let commands = generate_commands(
            &config(r#"{"standard": {"default": [{"boards": ["b1"]}]}}"#),
            "standard",
            "app1",
            "build.sh",
            "/out",
            &dual(),
        )
        .unwrap();
        assert_eq!(commands, vec!["build.sh /p /out b1"]);
    }

    #[test]
    fn empty_block_for_both_keys_yields_no_build_info() {
        let err = generate_commands(
            &config(r#"{"standard": {}}"#),
            "standard",
            "app1",
            "build.sh",
            "/out",
            &dual(),
        )
        .unwrap_err();
        assert_eq!(err.code(), "NO_BUILD_INFO");
    }
}
