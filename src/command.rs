use std::{
    env::var_os,
    ffi::{OsStr, OsString},
    path::PathBuf,
    process::Command,
};

/// Prefix that distributed launch tooling prepends to identify a process's
/// position on the local machine. The pipeline script does not accept it.
pub const RANK_ARG_PREFIX: &str = "--local_rank";

/// Script the filtered arguments are forwarded to.
pub const DEFAULT_TARGET_SCRIPT: &str =
    "/workspace/optimum-habana/examples/image-to-text/run_pipeline.py";

/// Overrides the interpreter (default `python3`, resolved through `PATH`).
pub const INTERPRETER_ENV: &str = "PIPELINE_LAUNCHER_PYTHON";

/// Overrides the target script (default [`DEFAULT_TARGET_SCRIPT`]).
pub const TARGET_SCRIPT_ENV: &str = "PIPELINE_LAUNCHER_SCRIPT";

pub use os_specific::exit_code;

#[cfg(unix)]
mod os_specific {
    use std::{os::unix::process::ExitStatusExt, process::ExitStatus};

    #[must_use]
    pub fn exit_code(status: ExitStatus) -> i32 {
        if let Some(code) = status.code() {
            return code;
        }
        // Shell convention for children terminated by a signal.
        status.signal().map_or(1, |signal| 128 + signal)
    }
}

#[cfg(windows)]
mod os_specific {
    use std::process::ExitStatus;

    // Windows has no signals; a plain code is always available.
    #[must_use]
    pub fn exit_code(status: ExitStatus) -> i32 {
        status.code().unwrap_or(1)
    }
}

/// Retain every argument that does not start with [`RANK_ARG_PREFIX`].
///
/// The match is on the prefix, not the full token: `--local_rank`,
/// `--local_rank=0`, and `--local_rank_something` are all dropped. Order is
/// preserved and nothing is deduplicated.
#[must_use]
pub fn filter_rank_args<T: AsRef<OsStr>>(args: &[T]) -> Vec<OsString> {
    args.iter()
        .map(AsRef::as_ref)
        .filter(|arg| {
            !arg.as_encoded_bytes()
                .starts_with(RANK_ARG_PREFIX.as_bytes())
        })
        .map(OsStr::to_owned)
        .collect()
}

#[must_use]
pub fn interpreter() -> OsString {
    var_os(INTERPRETER_ENV).unwrap_or_else(|| OsString::from("python3"))
}

#[must_use]
pub fn target_script() -> PathBuf {
    var_os(TARGET_SCRIPT_ENV).map_or_else(|| PathBuf::from(DEFAULT_TARGET_SCRIPT), PathBuf::from)
}

/// Build `<interpreter> <target script> <filtered args...>`.
///
/// The returned command inherits the parent's standard streams and
/// environment; nothing is redirected or captured.
#[must_use]
pub fn build_launch_command<T: AsRef<OsStr>>(args: &[T]) -> Command {
    let mut command = Command::new(interpreter());
    command.arg(target_script());
    command.args(filter_rank_args(args));
    command
}
