use clap::Args;
use serde::Serialize;

use slcbuild::config::BuildConfig;
use slcbuild::generator::{generate_commands, PathResolution};
use slcbuild::{log_status, Error};

use crate::commands::CmdResult;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to the build configuration JSON file
    #[arg(long, value_name = "FILE")]
    pub config: String,

    /// Build type profile to select (e.g. standard, full)
    #[arg(long)]
    pub build_type: String,

    /// Example application to build
    #[arg(long)]
    pub app: String,

    /// Build script prefixed to every generated command
    #[arg(long)]
    pub build_script: String,

    /// Output directory passed to the build script
    #[arg(long)]
    pub output_dir: String,

    /// Literal path to the application project file (.slcp)
    #[arg(long, requires = "slcw_path", conflicts_with = "project_path")]
    pub slcp_path: Option<String>,

    /// Literal path to the solution file with bootloader (.slcw)
    #[arg(long, requires = "slcp_path", conflicts_with = "project_path")]
    pub slcw_path: Option<String>,

    /// Legacy: single project path template containing {{projectFileType}}
    #[arg(long, value_name = "TEMPLATE")]
    pub project_path: Option<String>,
}

impl GenerateArgs {
    pub fn path_resolution(&self) -> slcbuild::Result<PathResolution> {
        if let (Some(slcp), Some(slcw)) = (&self.slcp_path, &self.slcw_path) {
            return Ok(PathResolution::DualPath {
                slcp: slcp.clone(),
                slcw: slcw.clone(),
            });
        }
        if let Some(template) = &self.project_path {
            return Ok(PathResolution::Template(template.clone()));
        }
        Err(Error::invalid_argument(
            "project_path",
            "Provide --slcp-path with --slcw-path, or a --project-path template",
        ))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateOutput {
    pub build_type: String,
    pub app: String,
    pub count: usize,
    pub commands: Vec<String>,
}

pub fn generate(args: &GenerateArgs) -> slcbuild::Result<GenerateOutput> {
    let paths = args.path_resolution()?;
    let config = BuildConfig::load(&args.config)?;

    let commands = generate_commands(
        &config,
        &args.build_type,
        &args.app,
        &args.build_script,
        &args.output_dir,
        &paths,
    )
    .map_err(|err| {
        if matches!(err, Error::UnknownBuildType(_)) {
            log_status!(
                "generate",
                "Known build types: {}",
                config.build_types().join(", ")
            );
        }
        err
    })?;

    log_status!(
        "generate",
        "Planned {} commands for {} ({})",
        commands.len(),
        args.app,
        args.build_type
    );

    Ok(GenerateOutput {
        build_type: args.build_type.clone(),
        app: args.app.clone(),
        count: commands.len(),
        commands,
    })
}

pub fn run(args: GenerateArgs) -> CmdResult<GenerateOutput> {
    let output = generate(&args)?;
    Ok((output, 0))
}
