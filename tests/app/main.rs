use app::cache::OtpStore;
use utils::testing::{RecordingMailer, RecordingPasswordStore};

mod otp;

use otp::*;
use products::*;

#[tokio::test]
async fn otp_main() {
    let store = OtpStore::new();
    let mailer = RecordingMailer::new();
    let passwords = RecordingPasswordStore::new();

    test_generated_codes_are_six_digits();
    test_issue_and_verify(&store, &mailer, &passwords).await;
    test_verify_without_record(&store, &passwords).await;
    test_wrong_code_keeps_record(&store, &mailer, &passwords).await;
    test_expiry_boundary(&store);
    test_expired_record_stays_resident(&store, &passwords).await;
    test_reissue_overwrites(&store, &mailer, &passwords).await;
}

#[tokio::test]
async fn otp_dispatch_failure_main() {
    let store = OtpStore::new();
    let mailer = RecordingMailer::new();

    test_dispatch_failure_keeps_record(&store, &mailer).await;
}

#[tokio::test]
async fn otp_password_main() {
    let store = OtpStore::new();
    let mailer = RecordingMailer::new();
    let passwords = RecordingPasswordStore::new();

    test_new_password_forwarded_after_consumption(&store, &mailer, &passwords).await;
}

#[tokio::test]
async fn products_main() {
    test_seed_and_list().await;
    test_missing_file_reads_empty().await;
    test_corrupt_file_reads_empty().await;
    test_create_into_empty_store_starts_at_one().await;
}

#[tokio::test]
async fn products_crud_main() {
    test_create_assigns_next_id().await;
    test_update_patches_only_given_fields().await;
    test_update_clears_image_on_explicit_null().await;
    test_delete_then_reissue_id().await;
    test_update_missing_product().await;
}
