// The generated code under src/proto is checked in. Building with
// `--features regenerate-proto` rewrites it from proto/ and needs `protoc`.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=proto");

    #[cfg(feature = "regenerate-proto")]
    tonic_build::configure()
        .build_client(true)
        .build_server(true)
        .out_dir("src/proto")
        .compile_protos(
            &[
                "proto/google/pprof/profile.proto",
                "proto/parca/profilestore/v1alpha1/profilestore.proto",
            ],
            &["proto"],
        )?;

    Ok(())
}
