/*!
 * Guard clauses inside realistic call sites
 */

use std::collections::BTreeMap;
use std::io::{Cursor, Read};
use std::time::Duration;

use anyhow::{Context, Result};
use argguard::{bounds, check, should, ArgumentError, Check, ErrorKind, Param, StringComparison};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::common::{init_logging, names_with_gaps};

static SLUG_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap());

#[derive(Debug)]
struct RetryPolicy {
    attempts: u32,
    backoff: Duration,
    jitter: f64,
}

impl RetryPolicy {
    fn new(attempts: u32, backoff: Duration, jitter: f64) -> argguard::Result<Self> {
        let (min_attempts, max_attempts) = (1, 10);
        let jitter = check!(is_not_nan(jitter))?;
        Ok(Self {
            attempts: check!(is_inclusive_between(attempts, bounds!(min_attempts, max_attempts)))?,
            backoff: check!(is_positive(backoff))?,
            jitter: check!(is_right_opened_between(jitter, bounds!(0.0, 1.0)))?,
        })
    }
}

fn publish(slug: &str, format: &str, tags: &[Option<String>]) -> Result<String> {
    let slug = should!(match_pattern(slug, &SLUG_PATTERN), "slug must be lowercase words joined by dashes")?;
    let format = Check::is_one_of_str(format, &["md", "html"], StringComparison::OrdinalIgnoreCase, "format")?;
    Check::has_no_blank_elements(tags, "tags").context("tags are required")?;
    Ok(format!("{}.{}", slug, format.to_lowercase()))
}

fn read_header(mut source: impl Read + argguard::StreamCapabilities) -> Result<Vec<u8>> {
    let source = Check::is_at_start_position(Check::can_read(&mut source, "source")?, "source")?;
    let mut header = vec![0u8; 4];
    source.read_exact(&mut header)?;
    Ok(header)
}

#[test]
fn test_retryPolicy_withValidSettings_shouldBuild() {
    init_logging();
    let policy = RetryPolicy::new(3, Duration::from_millis(250), 0.1).unwrap();
    assert_eq!(policy.attempts, 3);
    assert_eq!(policy.backoff, Duration::from_millis(250));
    assert_eq!(policy.jitter, 0.1);
}

#[test]
fn test_retryPolicy_withInvalidSettings_shouldNameTheField() {
    init_logging();
    let attempts = RetryPolicy::new(0, Duration::from_secs(1), 0.0).unwrap_err();
    assert_eq!(attempts.kind(), ErrorKind::OutOfRange);
    assert_eq!(attempts.param(), "attempts");

    let backoff = RetryPolicy::new(1, Duration::ZERO, 0.0).unwrap_err();
    assert_eq!(backoff.param(), "backoff");

    let nan = RetryPolicy::new(1, Duration::from_secs(1), f64::NAN).unwrap_err();
    assert_eq!(nan.kind(), ErrorKind::OutOfRange);
    assert_eq!(nan.param(), "jitter");

    let full = RetryPolicy::new(1, Duration::from_secs(1), 1.0).unwrap_err();
    assert_eq!(full.kind(), ErrorKind::OutOfRange);
    assert_eq!(full.message(), "Input jitter was out of range [0.0, 1.0), found 1.0.");
}

#[test]
fn test_publish_withValidInput_shouldSucceed() -> Result<()> {
    let tags = vec![Some("rust".to_string())];
    assert_eq!(publish("guard-clauses", "MD", &tags)?, "guard-clauses.md");
    Ok(())
}

#[test]
fn test_publish_withBadSlug_shouldUseCustomMessage() {
    let error = publish("Guard Clauses", "md", &[]).unwrap_err();
    let argument = error.downcast_ref::<ArgumentError>().unwrap();
    assert_eq!(argument.param(), "slug");
    assert_eq!(argument.message(), "slug must be lowercase words joined by dashes");
}

#[test]
fn test_publish_withGappyTags_shouldAddContext() {
    let error = publish("ok", "html", &names_with_gaps()).unwrap_err();
    assert_eq!(error.to_string(), "tags are required");
    let argument = error.root_cause().downcast_ref::<ArgumentError>().unwrap();
    assert_eq!(
        argument.message(),
        "The argument \"tags\" cannot contain empty or white space elements (2 found, first at index 1)."
    );
}

#[test]
fn test_readHeader_shouldRequireUnreadStream() -> Result<()> {
    let fresh = Cursor::new(b"HEADbody".to_vec());
    assert_eq!(read_header(fresh)?, b"HEAD");

    let mut consumed = Cursor::new(b"HEADbody".to_vec());
    consumed.set_position(2);
    let error = read_header(consumed).unwrap_err();
    assert!(error.to_string().contains("is not at the starting position"));
    Ok(())
}

#[test]
fn test_settingsMap_shouldBeCheckedBeforeUse() {
    let mut settings: BTreeMap<&str, &str> = BTreeMap::new();
    let error = Check::is_not_empty(&settings, Param::new("settings")).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidArgument);

    settings.insert("mode", "fast");
    let checked = Check::is_not_empty(&settings, "settings").unwrap();
    assert_eq!(checked.get("mode"), Some(&"fast"));
}

#[test]
fn test_lazySequence_shouldRemainFullyReadable() {
    let lines = "first\nsecond\nthird".lines();
    let lines = check!(is_not_empty_iter(lines)).unwrap();
    assert_eq!(lines.collect::<Vec<_>>(), vec!["first", "second", "third"]);
}
