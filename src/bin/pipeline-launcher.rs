use pipeline_launcher::{launch, report_error};
use std::{env::args_os, process::exit};

fn main() {
    let args = args_os().skip(1).collect::<Vec<_>>();
    let code = match launch(&args) {
        Ok(code) => code,
        Err(error) => {
            report_error(&error);
            1
        }
    };
    exit(code);
}
