use anyhow::{Context, Result};
use log::debug;
use std::ffi::OsStr;

mod command;
pub use command::{
    DEFAULT_TARGET_SCRIPT, INTERPRETER_ENV, RANK_ARG_PREFIX, TARGET_SCRIPT_ENV,
    build_launch_command, exit_code, filter_rank_args, interpreter, target_script,
};

mod util;
pub use util::report_error;

/// Run the pipeline script with `args`, minus any rank arguments injected by
/// launch tooling, and return the child's exit code.
///
/// Standard streams and the environment are inherited, so whatever the child
/// prints appears unmodified; this function produces no output of its own
/// unless `RUST_LOG` enables it. The call blocks until the child terminates.
pub fn launch<T>(args: &[T]) -> Result<i32>
where
    T: AsRef<OsStr>,
{
    env_logger::try_init().unwrap_or_default();
    let mut command = build_launch_command(args);
    debug!("launching: {command:?}");
    let status = command
        .status()
        .with_context(|| format!("failed to spawn command: {command:?}"))?;
    Ok(exit_code(status))
}
