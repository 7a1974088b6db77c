pub type CmdResult<T> = slcbuild::Result<(T, i32)>;

pub mod generate;
pub mod run;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args))
    };
}

pub(crate) fn run_json(command: crate::Commands) -> (slcbuild::Result<serde_json::Value>, i32) {
    crate::tty::status("slcbuild is working...");

    match command {
        crate::Commands::Generate(args) => dispatch!(args, generate),
        crate::Commands::Run(args) => dispatch!(args, run),
    }
}
