use crate::error::Result;
use crate::grpc::Connection;
use crate::labels::LabelSet;
use crate::profilestorepb::profile_store_service_client::ProfileStoreServiceClient;
use crate::profilestorepb::{RawProfileSeries, RawSample, WriteRawRequest};
use tonic::Status;

/// The single remote call a push needs from the profile store.
#[tonic::async_trait]
pub trait RawProfileWriter: Send {
    /// WriteRaw accepts a raw set of bytes of a pprof file
    async fn write_raw(&mut self, request: WriteRawRequest) -> std::result::Result<(), Status>;
}

#[tonic::async_trait]
impl RawProfileWriter for Connection {
    async fn write_raw(&mut self, request: WriteRawRequest) -> std::result::Result<(), Status> {
        ProfileStoreServiceClient::write_raw(self, request).await?;
        Ok(())
    }
}

/// One series made of the given labels, holding exactly one sample.
pub fn write_raw_request(labels: &LabelSet, raw_profile: Vec<u8>, normalized: bool) -> WriteRawRequest {
    WriteRawRequest {
        series: vec![RawProfileSeries {
            labels: Some(labels.to_proto()),
            samples: vec![RawSample { raw_profile }],
        }],
        normalized,
    }
}

pub async fn write_profile<W: RawProfileWriter>(
    writer: &mut W,
    labels: &LabelSet,
    raw_profile: Vec<u8>,
    normalized: bool,
) -> Result<()> {
    let size = raw_profile.len();
    let request = write_raw_request(labels, raw_profile, normalized);

    writer.write_raw(request).await?;

    log::info!("Wrote profile ({} bytes) with {} labels", size, labels.len());
    Ok(())
}
