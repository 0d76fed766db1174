//! Integration tests for the installer's public API.

use depsure::config::{load_config, parse_config, ConfigSource};
use depsure::installer::{
    Installer, InstallScope, MockBackend, MockResponse, OutcomeKind, PackageRequest, PackageTable,
};
use depsure::logging::LineFormat;
use regex::Regex;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn with_log<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
    let buf = SharedBuf::default();
    let writer = buf.clone();
    let subscriber = tracing_subscriber::fmt()
        .event_format(LineFormat)
        .with_writer(move || writer.clone())
        .finish();
    let value = tracing::subscriber::with_default(subscriber, f);
    let text = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
    (value, text.lines().map(str::to_string).collect())
}

#[test]
fn scenario_present_and_unresolvable() {
    let backend = MockBackend::new().with_installed("numpy");
    let table = PackageTable::from_names(["numpy", "nonexistent-pkg-xyz"]);

    let (outcomes, log) = with_log(|| Installer::new(&backend, &table).run_all(&table.requests));

    let kinds: Vec<_> = outcomes.iter().map(|o| o.kind).collect();
    assert_eq!(kinds, vec![OutcomeKind::AlreadyPresent, OutcomeKind::Failed]);

    // One final-outcome record per package.
    let count = |needle: &str| log.iter().filter(|l| l.contains(needle)).count();
    assert_eq!(count(":INFO:numpy is already installed."), 1);
    assert_eq!(
        count(":ERROR:Failed to install nonexistent-pkg-xyz after troubleshooting."),
        1
    );
    assert!(log[0].ends_with(":INFO:numpy is already installed."));
    assert!(log
        .last()
        .unwrap()
        .contains(":ERROR:Final failure installing nonexistent-pkg-xyz."));

    // pip's two-line stderr must not leak unprefixed lines into the log.
    let record =
        Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2},\d{3}:(INFO|WARNING|ERROR):")
            .unwrap();
    for line in &log {
        assert!(record.is_match(line), "unprefixed log line: {:?}", line);
    }
    assert!(log
        .iter()
        .any(|l| l.contains("(from versions: none)\\nERROR: No matching distribution found")));
}

#[test]
fn advisory_is_logged_as_warning_before_install() {
    let backend = MockBackend::new().with_responses("graphviz", [MockResponse::Success]);
    let table = PackageTable::from_names(["graphviz"])
        .with_advisory("graphviz", "May require system-level installation.");

    let (outcomes, log) = with_log(|| Installer::new(&backend, &table).run_all(&table.requests));

    assert_eq!(outcomes[0].kind, OutcomeKind::InstalledClean);
    assert!(log[0].ends_with(":WARNING:May require system-level installation."));
    assert!(log[1].ends_with(":INFO:Successfully installed graphviz."));
}

#[test]
fn permission_retry_is_logged_and_user_scoped() {
    let backend = MockBackend::new().with_responses(
        "pandas",
        [
            MockResponse::permission_denied(),
            MockResponse::permission_denied(),
            MockResponse::Success,
        ],
    );
    let table = PackageTable::default();

    let (outcome, log) =
        with_log(|| Installer::new(&backend, &table).ensure(&PackageRequest::new("pandas")));

    assert_eq!(outcome.kind, OutcomeKind::InstalledAfterTroubleshooting);
    assert_eq!(backend.installs_of("pandas").last(), Some(&InstallScope::User));
    assert!(log
        .iter()
        .any(|l| l.contains(":INFO:Permission issue detected when installing pandas.")));
    assert!(log
        .last()
        .unwrap()
        .ends_with(":INFO:Successfully installed pandas after troubleshooting."));
}

#[test]
fn builtin_table_drives_aliases() {
    let config = load_config(&ConfigSource::BuiltIn).unwrap();
    let table = config.package_table();
    let torch = table.requests.iter().find(|r| r.name == "torch").unwrap();

    let backend = MockBackend::new().with_responses("pytorch", [MockResponse::Success]);
    let outcome = Installer::new(&backend, &table).ensure(torch);

    assert_eq!(outcome.kind, OutcomeKind::InstalledClean);
    assert_eq!(backend.install_count("pytorch"), 1);
    assert_eq!(backend.install_count("torch"), 0);
}

#[test]
fn synthetic_table_from_yaml() {
    let config = parse_config(
        "packages: [a, b, c]\naliases:\n  b: b-dist\n",
        Path::new("inline.yml"),
    )
    .unwrap();
    let table = config.package_table();
    let backend = MockBackend::new()
        .with_installed("a")
        .with_responses("b-dist", [MockResponse::Success])
        .with_responses("c", [MockResponse::not_found("c")]);

    let outcomes = Installer::new(&backend, &table).run_all(&table.requests);

    let kinds: Vec<_> = outcomes.iter().map(|o| o.kind).collect();
    assert_eq!(
        kinds,
        vec![
            OutcomeKind::AlreadyPresent,
            OutcomeKind::InstalledClean,
            OutcomeKind::Failed
        ]
    );
}
