use pipeline_launcher::filter_rank_args;

#[test]
fn retains_non_rank_args_in_order() {
    let args = ["--local_rank=0", "--model", "foo", "--batch-size", "8"];
    assert_eq!(
        vec!["--model", "foo", "--batch-size", "8"],
        filter_rank_args(&args)
    );
}

#[test]
fn drops_every_rank_arg() {
    let args = ["--local_rank", "--local_rank=3", "--local_rank_something"];
    assert!(filter_rank_args(&args).is_empty());
}

#[test]
fn matches_prefix_not_full_token() {
    let args = ["--local_rank_foo", "--localrank", "local_rank", "-local_rank"];
    assert_eq!(
        vec!["--localrank", "local_rank", "-local_rank"],
        filter_rank_args(&args)
    );
}

#[test]
fn empty_input_yields_empty_output() {
    assert!(filter_rank_args::<&str>(&[]).is_empty());
}

#[test]
fn preserves_duplicates() {
    let args = ["--verbose", "--local_rank=1", "--verbose"];
    assert_eq!(vec!["--verbose", "--verbose"], filter_rank_args(&args));
}

#[test]
fn is_idempotent() {
    let args = ["--local_rank=0", "--model", "foo"];
    let once = filter_rank_args(&args);
    assert_eq!(once, filter_rank_args(&once));
}

#[cfg(unix)]
#[test]
fn compares_encoded_bytes_of_non_utf8_args() {
    use std::{ffi::OsString, os::unix::ffi::OsStringExt};

    let rank = OsString::from_vec(b"--local_rank=\xff".to_vec());
    let other = OsString::from_vec(b"--output=\xff".to_vec());
    let filtered = filter_rank_args(&[rank, other.clone()]);
    assert_eq!(vec![other], filtered);
}
