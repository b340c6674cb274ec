//! End-to-end pipelines mixing outcomes, optional values and properties.

use std::cell::Cell;
use std::collections::HashMap;
use std::io;

use trackline::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Upload {
    owner: EmailAddress,
    extension: FileExtension,
    size: u64,
}

struct Store {
    quotas: HashMap<String, u64>,
}

impl Store {
    fn quota_for(&self, owner: &EmailAddress) -> Maybe<u64> {
        self.quotas.get(owner.as_str()).copied().into()
    }

    fn read_size(&self, path: &str) -> Result<u64, io::Error> {
        if path.starts_with("/missing") {
            Err(io::Error::new(io::ErrorKind::NotFound, "file does not exist"))
        } else {
            Ok(path.len() as u64 * 100)
        }
    }
}

fn store() -> Store {
    let mut quotas = HashMap::new();
    quotas.insert("ada@example.com".to_string(), 10_000);
    quotas.insert("tiny@example.com".to_string(), 10);
    Store { quotas }
}

fn plan_upload(store: &Store, owner: &str, path: &str, extension: &str) -> Outcome<Upload> {
    EmailAddress::create(owner)
        .with_note(format!("upload of {path}"))
        .on_success_try(|owner| {
            FileExtension::create(extension).on_success(|extension| (owner, extension))
        })
        .on_success_try(|(owner, extension)| {
            Outcome::from(store.read_size(path)).on_success(|size| Upload {
                owner,
                extension,
                size,
            })
        })
        .on_success_check(|upload| {
            store
                .quota_for(&upload.owner)
                .into_outcome("Owner has no quota")
                .ensure(|quota| *quota >= upload.size, "Upload exceeds quota")
        })
}

#[test]
fn test_successful_upload() {
    let upload = plan_upload(&store(), "ada@example.com", "/docs/a.pdf", "pdf");

    assert!(upload.is_success());
    let upload = upload.into_value();
    assert_eq!(upload.owner, "ada@example.com");
    assert_eq!(upload.extension, "PDF");
    assert_eq!(upload.size, 1100);
}

#[test]
fn test_each_stage_can_fail() {
    let s = store();

    assert_eq!(
        plan_upload(&s, "ada@", "/a", "pdf").error(),
        "No domain name after @ sign in EmailAddress"
    );
    assert_eq!(
        plan_upload(&s, "ada@example.com", "/a", "p:df").error(),
        "File extensions cannot contain colons."
    );
    assert_eq!(
        plan_upload(&s, "bob@example.com", "/a", "pdf").error(),
        "Owner has no quota"
    );
    assert_eq!(
        plan_upload(&s, "tiny@example.com", "/a", "pdf").error(),
        "Upload exceeds quota"
    );
}

#[test]
fn test_exception_survives_later_stages() {
    let failed = plan_upload(&store(), "ada@example.com", "/missing/a.pdf", "pdf");

    assert!(failed.is_failure());
    assert!(failed.error().contains("with error message 'file does not exist'"));
    let exception = failed.exception().expect("io error kept");
    assert_eq!(
        exception.downcast_ref::<io::Error>().map(io::Error::kind),
        Some(io::ErrorKind::NotFound)
    );
}

#[test]
fn test_notes_travel_with_failures() {
    let failed = plan_upload(&store(), "ada@example.com", "/a", "tar.gz");

    assert!(failed.is_failure());
    assert_eq!(failed.notes(), &["upload of /a".to_string()]);

    let err = failed.into_result().unwrap_err();
    assert_eq!(err.notes(), &["upload of /a".to_string()]);
    assert_eq!(err.to_string(), "The extension should not contain full stops.");
}

#[test]
fn test_failed_pipeline_never_runs_success_stages() {
    let calls = Cell::new(0);
    let count = || calls.set(calls.get() + 1);

    let outcome = Outcome::<u32>::fail("config missing")
        .on_success(|n| {
            count();
            n + 1
        })
        .on_success(|n| {
            count();
            n.to_string()
        })
        .on_success_try(|s| {
            count();
            Outcome::ok(s.len())
        })
        .ensure(
            |_| {
                count();
                true
            },
            "unused",
        )
        .on_success_do(count);

    assert_eq!(calls.get(), 0);
    assert_eq!(outcome.error(), "config missing");
}

#[test]
fn test_recovery_with_generated_default() {
    let calls = Cell::new(0);
    let port = Maybe::<u16>::none()
        .into_outcome("PORT is not set")
        .on_failure(|_| calls.set(calls.get() + 1))
        .on_failure_generated_default(|| Outcome::ok(8080))
        .ensure(|port| *port >= 1024, "privileged port");

    assert_eq!(calls.get(), 1);
    assert_eq!(*port.value(), 8080);
}

#[test]
fn test_on_both_into_finishes_pipeline() {
    let render = |outcome: Outcome<Upload>| match outcome.into_result() {
        Ok(upload) => format!("queued {} ({})", upload.extension, upload.size),
        Err(err) => format!("rejected: {err}"),
    };

    let ok = plan_upload(&store(), "ada@example.com", "/b", "*.Png").on_both_into(render);
    assert_eq!(ok, "queued PNG (200)");

    let rejected = plan_upload(&store(), "a@", "/b", "png").on_both_into(render);
    assert_eq!(rejected, "rejected: No domain name after @ sign in EmailAddress");
}

#[test]
fn test_strip_data_keeps_failure_details() {
    let stripped = plan_upload(&store(), "ada@example.com", "/missing", "pdf").strip_data();

    assert!(stripped.is_failure());
    assert!(stripped.exception().is_some());
    assert_eq!(stripped.notes(), &["upload of /missing".to_string()]);

    let ok: Outcome = plan_upload(&store(), "ada@example.com", "/c", "pdf").strip_data();
    assert!(ok.is_success());
}

#[test]
fn test_collecting_every_broken_rule() {
    let password = "hunter";
    let mut errors = Vec::new();

    let (outcome, _) = Outcome::success().ensure_recorded(
        password.len() >= 8,
        "at least 8 characters",
        Some(&mut errors),
    );
    let (_, has_digit) = Outcome::success().ensure_recorded(
        password.chars().any(|c| c.is_ascii_digit()),
        "at least one digit",
        Some(&mut errors),
    );
    let (_, lower) = Outcome::success().ensure_recorded(
        password.chars().any(|c| c.is_ascii_lowercase()),
        "at least one lower-case letter",
        Some(&mut errors),
    );

    assert_eq!(outcome.error(), "at least 8 characters");
    assert!(!has_digit);
    assert!(lower);
    assert_eq!(errors, ["at least 8 characters", "at least one digit"]);
}

#[test]
fn test_pairwise_comparison_reports_first_difference() {
    let expected = ["PNG", "JPG", "GIF"];
    let actual: Vec<FileExtension> = ["png", "jpeg", "gif"]
        .into_iter()
        .map(|raw| FileExtension::parse(raw).unwrap())
        .collect();

    let compared = Outcome::success().ensure_pairwise(
        Some(&expected[..]),
        Some(&actual[..]),
        |want, got| got == want,
        |side| format!("list {side} is missing"),
        |a, b| format!("expected {a} extensions, got {b}"),
        |index, want, got| format!("extension {index}: expected {want}, got {got}"),
    );

    assert_eq!(compared.error(), "extension 1: expected JPG, got JPEG");
}
