use assert_cmd::assert::OutputAssertExt;
use assert_cmd::Command;
use parca_push::pprofpb::{Profile, ValueType};
use parca_push::profilestorepb::profile_store_service_server::{
    ProfileStoreService, ProfileStoreServiceServer,
};
use parca_push::profilestorepb::{WriteRawRequest, WriteRawResponse};
use predicates::prelude::*;
use prost::Message;
use std::io::Write;
use std::net::SocketAddr;
use std::process::Output;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::{Identity, Server, ServerTlsConfig};
use tonic::{Request, Response, Status};

#[derive(Debug, Clone)]
struct Received {
    request: WriteRawRequest,
    authorization: Option<String>,
}

#[derive(Clone, Default)]
struct RecordingStore {
    received: Arc<Mutex<Vec<Received>>>,
    reject: bool,
}

#[tonic::async_trait]
impl ProfileStoreService for RecordingStore {
    async fn write_raw(
        &self,
        request: Request<WriteRawRequest>,
    ) -> Result<Response<WriteRawResponse>, Status> {
        if self.reject {
            return Err(Status::invalid_argument("profile rejected"));
        }

        let authorization = request
            .metadata()
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.received.lock().unwrap().push(Received {
            request: request.into_inner(),
            authorization,
        });

        Ok(Response::new(WriteRawResponse {}))
    }
}

async fn serve(store: RecordingStore) -> anyhow::Result<SocketAddr> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(
        Server::builder()
            .add_service(ProfileStoreServiceServer::new(store))
            .serve_with_incoming(TcpListenerStream::new(listener)),
    );

    Ok(addr)
}

async fn serve_tls(store: RecordingStore) -> anyhow::Result<SocketAddr> {
    let rcgen::CertifiedKey { cert, key_pair } =
        rcgen::generate_simple_self_signed(vec!["localhost".to_string(), "127.0.0.1".to_string()])?;
    let identity = Identity::from_pem(cert.pem(), key_pair.serialize_pem());

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(
        Server::builder()
            .tls_config(ServerTlsConfig::new().identity(identity))?
            .add_service(ProfileStoreServiceServer::new(store))
            .serve_with_incoming(TcpListenerStream::new(listener)),
    );

    Ok(addr)
}

async fn run(mut cmd: Command) -> anyhow::Result<Output> {
    Ok(tokio::task::spawn_blocking(move || cmd.output()).await??)
}

fn store_cmd(addr: SocketAddr) -> Command {
    let mut cmd = Command::cargo_bin("parca-push").unwrap();
    cmd.arg("--remote-store-address").arg(addr.to_string());
    cmd
}

fn push_cmd(addr: SocketAddr) -> Command {
    let mut cmd = store_cmd(addr);
    cmd.arg("--remote-store-insecure");
    cmd
}

fn encoded_profile() -> Vec<u8> {
    Profile {
        sample_type: vec![ValueType { r#type: 1, unit: 2 }],
        string_table: vec!["".into(), "samples".into(), "count".into()],
        time_nanos: 1_000,
        ..Default::default()
    }
    .encode_to_vec()
}

fn profile_file(content: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content).unwrap();
    file
}

#[tokio::test(flavor = "multi_thread")]
async fn pushes_profile_from_file() -> anyhow::Result<()> {
    let store = RecordingStore::default();
    let addr = serve(store.clone()).await?;

    let content = encoded_profile();
    let file = profile_file(&content);

    let mut cmd = push_cmd(addr);
    cmd.arg("--labels=__name__=process_cpu").arg(file.path());
    run(cmd).await?.assert().success();

    let received = store.received.lock().unwrap();
    assert_eq!(received.len(), 1);

    let request = &received[0].request;
    assert!(!request.normalized);
    assert_eq!(request.series.len(), 1);

    let labels = &request.series[0].labels.as_ref().unwrap().labels;
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].name, "__name__");
    assert_eq!(labels[0].value, "process_cpu");

    assert_eq!(request.series[0].samples.len(), 1);
    assert_eq!(request.series[0].samples[0].raw_profile, content);
    assert_eq!(received[0].authorization, None);

    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn pushes_profile_from_stdin() -> anyhow::Result<()> {
    let store = RecordingStore::default();
    let addr = serve(store.clone()).await?;

    let content = encoded_profile();

    let mut cmd = push_cmd(addr);
    cmd.args(["--labels", "__name__=memory;node=a", "--normalized", "-"])
        .write_stdin(content.clone());
    run(cmd).await?.assert().success();

    let received = store.received.lock().unwrap();
    assert_eq!(received.len(), 1);

    let request = &received[0].request;
    assert!(request.normalized);
    assert_eq!(request.series[0].labels.as_ref().unwrap().labels.len(), 2);
    assert_eq!(request.series[0].samples[0].raw_profile, content);

    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn overrides_timestamp_before_sending() -> anyhow::Result<()> {
    let store = RecordingStore::default();
    let addr = serve(store.clone()).await?;

    let file = profile_file(&encoded_profile());

    let mut cmd = push_cmd(addr);
    cmd.arg("--override-timestamp").arg(file.path());
    run(cmd).await?.assert().success();

    let received = store.received.lock().unwrap();
    let sent = &received[0].request.series[0].samples[0].raw_profile;
    let profile = Profile::decode(sent.as_slice())?;

    assert!(profile.time_nanos > 1_000);
    assert_eq!(profile.string_table, vec!["", "samples", "count"]);

    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn sends_bearer_token_from_file() -> anyhow::Result<()> {
    let store = RecordingStore::default();
    let addr = serve(store.clone()).await?;

    let file = profile_file(&encoded_profile());
    let token = profile_file(b"s3cr3t\n");

    let mut cmd = push_cmd(addr);
    cmd.arg("--remote-store-bearer-token-file")
        .arg(token.path())
        .arg(file.path());
    run(cmd).await?.assert().success();

    let received = store.received.lock().unwrap();
    assert_eq!(received[0].authorization.as_deref(), Some("Bearer s3cr3t"));

    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn rejected_profile_fails() -> anyhow::Result<()> {
    let store = RecordingStore {
        reject: true,
        ..Default::default()
    };
    let addr = serve(store.clone()).await?;

    let file = profile_file(&encoded_profile());

    let mut cmd = push_cmd(addr);
    cmd.arg(file.path());
    run(cmd)
        .await?
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("write profile").and(predicate::str::contains("profile rejected")));

    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_profile_is_not_sent() -> anyhow::Result<()> {
    let store = RecordingStore::default();
    let addr = serve(store.clone()).await?;

    let file = profile_file(b"\x0a\xff\xff\xff\xff\xff");

    let mut cmd = push_cmd(addr);
    cmd.arg("--override-timestamp").arg(file.path());
    run(cmd)
        .await?
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("parse pprof profile"));

    assert!(store.received.lock().unwrap().is_empty());

    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn pushes_over_tls_without_verification() -> anyhow::Result<()> {
    let store = RecordingStore::default();
    let addr = serve_tls(store.clone()).await?;

    let content = encoded_profile();
    let file = profile_file(&content);

    let mut cmd = store_cmd(addr);
    cmd.arg("--remote-store-insecure-skip-verify")
        .args(["--remote-store-bearer-token", "s3cr3t"])
        .arg("--labels=__name__=process_cpu")
        .arg(file.path());
    run(cmd).await?.assert().success();

    let received = store.received.lock().unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].request.series[0].samples[0].raw_profile, content);
    assert_eq!(received[0].authorization.as_deref(), Some("Bearer s3cr3t"));

    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn self_signed_certificate_is_rejected_by_default() -> anyhow::Result<()> {
    let store = RecordingStore::default();
    let addr = serve_tls(store.clone()).await?;

    let file = profile_file(&encoded_profile());

    let mut cmd = store_cmd(addr);
    cmd.arg(file.path());
    run(cmd)
        .await?
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("write profile"));

    assert!(store.received.lock().unwrap().is_empty());

    // The same store accepts the push once verification is skipped.
    let mut cmd = store_cmd(addr);
    cmd.arg("--remote-store-insecure-skip-verify").arg(file.path());
    run(cmd).await?.assert().success();

    assert_eq!(store.received.lock().unwrap().len(), 1);

    Ok(())
}
