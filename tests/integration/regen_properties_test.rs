//! End-to-end regeneration behavior, exercised through the library API

#[cfg(unix)]
mod properties {
    use fixgen::{regenerate, regenerate_fixtures, OutcomeStatus, RegenConfig};
    use pretty_assertions::assert_eq;
    use std::fs::{self, File};
    use std::io::Write;
    use std::path::Path;
    use tempfile::tempdir;

    fn write_file(path: &Path, content: &str) {
        let mut f = File::create(path).unwrap();
        write!(f, "{}", content).unwrap();
    }

    fn dir_contents(dir: &Path) -> Vec<(String, Vec<u8>)> {
        let mut entries: Vec<_> = fs::read_dir(dir)
            .unwrap()
            .map(|e| {
                let e = e.unwrap();
                (
                    e.file_name().to_string_lossy().into_owned(),
                    fs::read(e.path()).unwrap(),
                )
            })
            .collect();
        entries.sort();
        entries
    }

    #[test]
    fn test_one_output_per_input() {
        let src = tempdir().unwrap();
        for i in 0..5 {
            write_file(&src.path().join(format!("case{}.rr", i)), &format!("input {}", i));
        }

        let report = regenerate(src.path(), "/bin/cat").unwrap();
        assert_eq!(report.total(), 5);
        assert!(report.is_clean());
        assert_eq!(fs::read_dir(src.path().join("tests")).unwrap().count(), 5);
    }

    #[test]
    fn test_example_scenario_add() {
        // Source holds `add.rr` with "1 + 2"; an echoing program yields
        // `tests/add_out.txt` containing exactly "1 + 2".
        let src = tempdir().unwrap();
        write_file(&src.path().join("add.rr"), "1 + 2");

        regenerate(src.path(), "/bin/cat").unwrap();

        assert_eq!(
            fs::read_to_string(src.path().join("tests/add_out.txt")).unwrap(),
            "1 + 2"
        );
    }

    #[test]
    fn test_idempotent_reruns() {
        let src = tempdir().unwrap();
        write_file(&src.path().join("add.rr"), "1 + 2");
        write_file(&src.path().join("mul.rr"), "3 * 4");

        regenerate(src.path(), "/bin/cat").unwrap();
        let first = dir_contents(&src.path().join("tests"));

        regenerate(src.path(), "/bin/cat").unwrap();
        let second = dir_contents(&src.path().join("tests"));

        assert_eq!(first, second);
    }

    #[test]
    fn test_clean_slate_discards_stale_and_unrelated_files() {
        let src = tempdir().unwrap();
        write_file(&src.path().join("add.rr"), "1 + 2");

        let out = src.path().join("tests");
        fs::create_dir_all(&out).unwrap();
        write_file(&out.join("removed_out.txt"), "stale fixture");
        write_file(&out.join("unrelated.log"), "debris");

        regenerate(src.path(), "/bin/cat").unwrap();

        let names: Vec<_> = dir_contents(&out).into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["add_out.txt"]);
    }

    #[test]
    fn test_content_matches_direct_invocation() {
        let src = tempdir().unwrap();
        let input = src.path().join("case.rr");
        write_file(&input, "line one\nline two\n");

        regenerate(src.path(), "/bin/cat").unwrap();

        // Same bytes as running the program by hand with the file on stdin.
        let direct = std::process::Command::new("/bin/cat")
            .stdin(File::open(&input).unwrap())
            .output()
            .unwrap();
        let fixture = fs::read(src.path().join("tests/case_out.txt")).unwrap();
        assert_eq!(fixture, direct.stdout);
    }

    #[test]
    fn test_failed_files_reported_with_stderr() {
        let src = tempdir().unwrap();
        write_file(&src.path().join("bad.rr"), "");
        write_file(&src.path().join("good.rr"), "ok");

        // A shell stub that fails loudly, to check stderr capture alongside
        // a per-file exit status.
        let stub = src.path().join("failing-interp");
        write_file(&stub, "#!/bin/sh\necho \"parse error\" >&2\nexit 3\n");
        fs::set_permissions(&stub, std::os::unix::fs::PermissionsExt::from_mode(0o755)).unwrap();

        let config = RegenConfig::default()
            .with_source_dir(src.path())
            .with_program(&stub);
        let report = regenerate_fixtures(config).unwrap();

        assert_eq!(report.total(), 2);
        assert_eq!(report.failed(), 2);
        for outcome in report.failures() {
            match &outcome.status {
                OutcomeStatus::Failed { code, stderr } => {
                    assert_eq!(*code, Some(3));
                    assert!(stderr.contains("parse error"));
                }
                OutcomeStatus::Ok => panic!("expected failure"),
            }
        }
    }
}
