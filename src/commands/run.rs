use clap::Args;
use serde::Serialize;

use slcbuild::executor::{run_commands, RunResult};

use crate::commands::generate::{self, GenerateArgs};
use crate::commands::CmdResult;

#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Keep executing remaining commands after a failure
    #[arg(long)]
    pub keep_going: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunOutput {
    pub build_type: String,
    pub app: String,
    #[serde(flatten)]
    pub result: RunResult,
}

pub fn run(args: RunArgs) -> CmdResult<RunOutput> {
    let generated = generate::generate(&args.generate)?;
    let result = run_commands(&generated.commands, args.keep_going);

    let exit_code = if result.summary.failed > 0 { 20 } else { 0 };

    Ok((
        RunOutput {
            build_type: generated.build_type,
            app: generated.app,
            result,
        },
        exit_code,
    ))
}
