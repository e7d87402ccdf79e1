//! Library integration tests.

use picky::requirements::{Dialect, LineCodec, PackageEntry, Requirements};
use picky::PickyError;

#[test]
fn error_types_are_public() {
    let err = PickyError::UnknownDialect {
        name: "npm".into(),
    };
    assert!(err.to_string().contains("npm"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> picky::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use picky::cli::{Cli, Commands};

    let cli = Cli::parse_from(["picky", "check", "--json"]);
    if let Some(Commands::Check(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Check command");
    }
}

#[test]
fn comment_stripping() {
    assert_eq!(
        Dialect::Pip.parse_line("foo==1.0 # comment"),
        Some(("foo".to_string(), "1.0".to_string()))
    );
    assert_eq!(Dialect::Pip.parse_line("# just a comment"), None);
}

#[test]
fn duplicate_resolution_first_wins() {
    let reqs = Requirements::parse("a==1.0\na==2.0\n", Dialect::Pip, "test");
    assert_eq!(reqs.entries(), [PackageEntry::new("a", "1.0")]);
}

#[test]
fn end_to_end_example() {
    let ours = Requirements::parse("numpy==1.21.0\nrequests==2.26.0\n", Dialect::Pip, "pip freeze");
    let theirs = Requirements::parse(
        "numpy==1.21.0\nrequests==2.25.0\nflask==2.0.1\n",
        Dialect::Pip,
        "requirements.txt",
    );

    let diff = ours.diff(&theirs);
    assert!(diff.only_in_self.is_empty());
    assert_eq!(diff.only_in_other, [PackageEntry::new("flask", "2.0.1")]);
    assert_eq!(diff.mismatched.len(), 1);
    assert_eq!(diff.mismatched[0].name, "requests");
    assert_eq!(diff.mismatched[0].ours, "2.26.0");
    assert_eq!(diff.mismatched[0].theirs, "2.25.0");
}

#[test]
fn empty_input() {
    let reqs = Requirements::parse("", Dialect::Conda, "empty");
    assert!(reqs.as_mapping().is_empty());
    assert_eq!(reqs.serialise(), "");
}

#[test]
fn conda_multi_field() {
    assert_eq!(
        Dialect::Conda.parse_line("numpy=1.21.0=py39h1234"),
        Some(("numpy".to_string(), "1.21.0".to_string()))
    );
}
