use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use domain_dav_import::{
    exception::ApiException,
    mock::{MockApiClient, MockDavImportApi, MockFileUploadService},
    model::vo::UploadFile,
    service::DavImportService,
};
use mockall::{predicate::eq, Sequence};
use service_dav_import::{DavImportClientImpl, DavImportClientOptions, FnFileUploadService};
use wiremock::{
    matchers::{body_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

const FILE_ID: &str = "fileId";
const TARGET: &str = "/target/path";

fn file() -> UploadFile {
    UploadFile::new("contacts.vcf", "text/vcard", br#"{"foo":"bar"}"#.to_vec())
}

#[derive(Debug, thiserror::Error)]
#[error("something wrong")]
struct SomethingWrong;

#[tokio::test]
async fn uploads_before_importing() {
    let mut seq = Sequence::new();
    let mut upload = MockFileUploadService::new();
    let mut api = MockDavImportApi::new();
    upload
        .expect_upload_file()
        .with(eq(file()))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(FILE_ID.to_string()));
    api.expect_import_from_file()
        .with(eq(FILE_ID), eq(TARGET))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Ok(()));
    let client = DavImportClientImpl::from_parts(Arc::new(upload), Arc::new(api));

    client.import_from_file(file(), TARGET).await.unwrap();
}

#[tokio::test]
async fn upload_failure_skips_import() {
    let mut upload = MockFileUploadService::new();
    let mut api = MockDavImportApi::new();
    upload
        .expect_upload_file()
        .with(eq(file()))
        .times(1)
        .returning(|_| Err(SomethingWrong.into()));
    api.expect_import_from_file().never();
    let client = DavImportClientImpl::from_parts(Arc::new(upload), Arc::new(api));

    let err = client.import_from_file(file(), TARGET).await.unwrap_err();

    assert!(err.downcast_ref::<SomethingWrong>().is_some());
    assert_eq!("something wrong", err.to_string());
}

#[tokio::test]
async fn import_failure_is_returned_as_is() {
    let mut upload = MockFileUploadService::new();
    let mut api = MockDavImportApi::new();
    upload
        .expect_upload_file()
        .with(eq(file()))
        .times(1)
        .returning(|_| Ok(FILE_ID.to_string()));
    api.expect_import_from_file()
        .with(eq(FILE_ID), eq(TARGET))
        .times(1)
        .returning(|_, _| Err(SomethingWrong.into()));
    let client = DavImportClientImpl::from_parts(Arc::new(upload), Arc::new(api));

    let err = client.import_from_file(file(), TARGET).await.unwrap_err();

    assert!(err.downcast_ref::<SomethingWrong>().is_some());
}

#[tokio::test]
async fn imports_through_api_client() {
    let mut api_client = MockApiClient::new();
    api_client
        .expect_post()
        .with(
            eq("/import"),
            eq(serde_json::json!({ "fileId": FILE_ID, "target": TARGET })),
        )
        .times(1)
        .returning(|_, _| Ok(()));
    let uploaded = Arc::new(Mutex::new(Vec::new()));
    let recorder = uploaded.clone();
    let upload_file = FnFileUploadService::new(move |file: UploadFile| {
        recorder.lock().unwrap().push(file);
        async { anyhow::Ok(FILE_ID.to_string()) }
    });
    let client = DavImportClientImpl::new(
        DavImportClientOptions::builder()
            .api_client(Arc::new(api_client))
            .upload_file(Arc::new(upload_file))
            .build(),
    )
    .unwrap();

    client.import_from_file(file(), TARGET).await.unwrap();

    assert_eq!(vec![file()], *uploaded.lock().unwrap());
}

#[tokio::test]
async fn concurrent_imports_are_independent() {
    let upload_file = FnFileUploadService::new(|file: UploadFile| async move {
        match file.name.as_str() {
            "bad.vcf" => Err(anyhow!("upload of {} refused", file.name)),
            name => Ok(format!("id-{name}")),
        }
    });
    let imported = Arc::new(Mutex::new(Vec::new()));
    let recorder = imported.clone();
    let mut api = MockDavImportApi::new();
    api.expect_import_from_file().times(1).returning(move |file_id, target| {
        recorder.lock().unwrap().push((file_id.to_owned(), target.to_owned()));
        Ok(())
    });
    let client = DavImportClientImpl::from_parts(Arc::new(upload_file), Arc::new(api));

    let (good, bad) = tokio::join!(
        client.import_from_file(UploadFile::new("good.vcf", "text/vcard", vec![1]), "/a"),
        client.import_from_file(UploadFile::new("bad.vcf", "text/vcard", vec![2]), "/b"),
    );

    good.unwrap();
    assert_eq!("upload of bad.vcf refused", bad.unwrap_err().to_string());
    assert_eq!(
        vec![("id-good.vcf".to_string(), "/a".to_string())],
        *imported.lock().unwrap()
    );
}

#[tokio::test]
async fn imports_against_backend_base_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/linagora.esn.dav.import/api/import"))
        .and(body_json(serde_json::json!({ "fileId": FILE_ID, "target": TARGET })))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;
    let upload_file =
        FnFileUploadService::new(|_: UploadFile| async { anyhow::Ok(FILE_ID.to_string()) });
    let client = DavImportClientImpl::from_base_url(
        Some(Arc::new(upload_file)),
        &server.uri(),
        Arc::new(reqwest::Client::new()),
    )
    .unwrap();

    client.import_from_file(file(), TARGET).await.unwrap();
}

#[tokio::test]
async fn backend_rejection_surfaces_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/linagora.esn.dav.import/api/import"))
        .respond_with(ResponseTemplate::new(400).set_body_string("invalid target"))
        .expect(1)
        .mount(&server)
        .await;
    let upload_file =
        FnFileUploadService::new(|_: UploadFile| async { anyhow::Ok(FILE_ID.to_string()) });
    let client = DavImportClientImpl::from_base_url(
        Some(Arc::new(upload_file)),
        &format!("{}/", server.uri()),
        Arc::new(reqwest::Client::new()),
    )
    .unwrap();

    let err = client.import_from_file(file(), TARGET).await.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ApiException>(),
        Some(ApiException::UnexpectedStatus { status: 400, body, .. }) if body == "invalid target"
    ));
}
