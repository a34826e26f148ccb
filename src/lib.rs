pub mod cli;
pub mod config;
pub mod error;
pub mod grpc;
pub mod labels;
pub mod profile;
pub mod profile_store;
pub mod push;
pub mod supervisor;

// Generated from proto/ by build.rs with `--features regenerate-proto`.
pub mod profilestorepb {
    include!("proto/parca.profilestore.v1alpha1.rs");
}

pub mod pprofpb {
    include!("proto/perftools.profiles.rs");
}

pub use error::{Error, Result};
pub use supervisor::run;

#[cfg(test)]
mod tests {
    use super::profilestorepb::profile_store_service_server::SERVICE_NAME;

    #[test]
    fn generated_service_matches_proto_source() {
        let proto = include_str!("../proto/parca/profilestore/v1alpha1/profilestore.proto");
        let (package, service) = SERVICE_NAME.rsplit_once('.').unwrap();

        assert!(proto.contains(&format!("package {};", package)));
        assert!(proto.contains(&format!("service {} {{", service)));
        assert!(proto.contains("rpc WriteRaw(WriteRawRequest) returns (WriteRawResponse)"));
        assert!(proto.contains("reserved \"tenant\";"));
    }
}
