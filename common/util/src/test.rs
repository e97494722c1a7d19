use std::ffi::OsString;
use std::path::PathBuf;

use predicates::function::{FnPredicate, function};
use tempfile::TempDir;

/// Builds the path of a file in the temporary directory, the file itself is not created.
///
/// Returns the full path and the file name.
pub fn build_temp_file(temp_dir: &TempDir, name: &str, extension: &str) -> (PathBuf, OsString) {
    let file_name = OsString::from(format!("{}.{}", name, extension));

    let mut path = PathBuf::from(temp_dir.path());
    path.push(&file_name);

    (path, file_name)
}

/// Splits each argument on spaces, so that an option and its value can be given together, e.g. "--unit inches".
///
/// Use separate arguments for values that contain spaces.
pub fn prepare_args(args: Vec<&str>) -> Vec<String> {
    args.iter()
        .flat_map(|arg| arg.split(' '))
        .filter(|arg| !arg.is_empty())
        .map(str::to_string)
        .collect()
}

/// A predicate that always passes, printing the content it was given.
pub fn print(label: &str) -> FnPredicate<impl Fn(&str) -> bool, str> {
    let label = label.to_string();
    function(move |content: &str| {
        println!("{}:\n{}", label, content);
        true
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use tempfile::tempdir;

    use super::*;

    #[rstest]
    #[case(vec!["--unit inches", "calculate"], vec!["--unit", "inches", "calculate"])]
    #[case(vec!["-vvv", "", "preset  list"], vec!["-vvv", "preset", "list"])]
    fn test_prepare_args(#[case] args: Vec<&str>, #[case] expected: Vec<&str>) {
        assert_eq!(prepare_args(args), expected);
    }

    #[test]
    fn test_build_temp_file() {
        // given
        let temp_dir = tempdir().unwrap();

        // when
        let (path, file_name) = build_temp_file(&temp_dir, "trace", "log");

        // then
        assert_eq!(file_name, OsString::from("trace.log"));
        assert!(path.starts_with(temp_dir.path()));
        assert!(!path.exists());
    }
}
