use chrono::{TimeDelta, Utc};

use app::cache::OtpStore;
use app::core::{OTP_TTL_MINUTES, generate_code, issue_otp, verify_otp};
use app::error::OtpError;
use models::domains::otp::OtpRecord;
use utils::testing::{RecordingMailer, RecordingPasswordStore};

pub(super) fn test_generated_codes_are_six_digits() {
    for _ in 0..32 {
        let code = generate_code();
        assert_eq!(code.len(), 6);
        let value: u32 = code.parse().expect("Code was not numeric!");
        assert!((100_000..=999_999).contains(&value));
    }
}

pub(super) async fn test_issue_and_verify(
    store: &OtpStore,
    mailer: &RecordingMailer,
    passwords: &RecordingPasswordStore,
) {
    issue_otp(store, mailer, "user@example.com")
        .await
        .expect("Issue failed!");

    let code = mailer.last_code().expect("No mail captured!");
    let record = store.get("user@example.com").expect("No record stored!");
    assert_eq!(record.code, code);
    assert!(!record.is_expired(Utc::now()));
    assert!(record.is_expired(Utc::now() + TimeDelta::minutes(OTP_TTL_MINUTES)));

    verify_otp(store, passwords, "user@example.com", &code, None)
        .await
        .expect("Verify failed!");
    assert!(store.get("user@example.com").is_none());

    let replay = verify_otp(store, passwords, "user@example.com", &code, None).await;
    assert!(matches!(replay, Err(OtpError::InvalidOrExpired)));
}

pub(super) async fn test_verify_without_record(
    store: &OtpStore,
    passwords: &RecordingPasswordStore,
) {
    let result = verify_otp(store, passwords, "nobody@example.com", "123456", None).await;
    assert!(matches!(result, Err(OtpError::InvalidOrExpired)));
}

pub(super) async fn test_wrong_code_keeps_record(
    store: &OtpStore,
    mailer: &RecordingMailer,
    passwords: &RecordingPasswordStore,
) {
    issue_otp(store, mailer, "wrong@example.com")
        .await
        .expect("Issue failed!");
    let code = mailer.last_code().expect("No mail captured!");

    // Issued codes never start with a zero.
    let result = verify_otp(store, passwords, "wrong@example.com", "012345", None).await;
    assert!(matches!(result, Err(OtpError::InvalidOrExpired)));
    assert!(store.get("wrong@example.com").is_some());

    verify_otp(store, passwords, "wrong@example.com", &code, None)
        .await
        .expect("Verify failed!");
}

pub(super) fn test_expiry_boundary(store: &OtpStore) {
    let expires_at = Utc::now() + TimeDelta::minutes(10);
    store.put(
        "edge@example.com",
        OtpRecord::new("123456".to_string(), expires_at),
    );

    // Exactly at the expiry instant the code is already dead.
    assert!(!store.consume_valid("edge@example.com", "123456", expires_at));
    assert!(store.get("edge@example.com").is_some());

    assert!(store.consume_valid(
        "edge@example.com",
        "123456",
        expires_at - TimeDelta::seconds(1)
    ));
    assert!(store.get("edge@example.com").is_none());
}

pub(super) async fn test_expired_record_stays_resident(
    store: &OtpStore,
    passwords: &RecordingPasswordStore,
) {
    store.put(
        "stale@example.com",
        OtpRecord::new("123456".to_string(), Utc::now() - TimeDelta::minutes(1)),
    );

    let result = verify_otp(store, passwords, "stale@example.com", "123456", None).await;
    assert!(matches!(result, Err(OtpError::InvalidOrExpired)));
    assert!(store.get("stale@example.com").is_some());
}

pub(super) async fn test_reissue_overwrites(
    store: &OtpStore,
    mailer: &RecordingMailer,
    passwords: &RecordingPasswordStore,
) {
    store.put(
        "reissue@example.com",
        OtpRecord::new("012345".to_string(), Utc::now() + TimeDelta::minutes(10)),
    );

    issue_otp(store, mailer, "reissue@example.com")
        .await
        .expect("Issue failed!");

    let record = store.get("reissue@example.com").expect("No record stored!");
    assert_eq!(Some(record.code), mailer.last_code());

    let result = verify_otp(store, passwords, "reissue@example.com", "012345", None).await;
    assert!(matches!(result, Err(OtpError::InvalidOrExpired)));
}

pub(super) async fn test_dispatch_failure_keeps_record(
    store: &OtpStore,
    mailer: &RecordingMailer,
) {
    mailer.set_failing(true);

    let result = issue_otp(store, mailer, "user@example.com").await;
    assert!(matches!(result, Err(OtpError::Dispatch(_))));

    // Orphaned on purpose; the next issuance overwrites it.
    assert!(store.get("user@example.com").is_some());
    assert!(mailer.sent().is_empty());
}

pub(super) async fn test_new_password_forwarded_after_consumption(
    store: &OtpStore,
    mailer: &RecordingMailer,
    passwords: &RecordingPasswordStore,
) {
    issue_otp(store, mailer, "pw@example.com")
        .await
        .expect("Issue failed!");
    let code = mailer.last_code().expect("No mail captured!");

    // A failed verification must not leak the password to the store.
    let result = verify_otp(store, passwords, "pw@example.com", "012345", Some("s3cret")).await;
    assert!(matches!(result, Err(OtpError::InvalidOrExpired)));
    assert!(passwords.applied().is_empty());

    verify_otp(store, passwords, "pw@example.com", &code, Some("s3cret"))
        .await
        .expect("Verify failed!");
    assert_eq!(
        passwords.applied(),
        vec![("pw@example.com".to_string(), "s3cret".to_string())]
    );
    assert!(store.get("pw@example.com").is_none());
}
