fn main() -> Result<(), Box<dyn std::error::Error>> {
    // protoc is not on PATH in all build environments; use the vendored binary.
    if std::env::var_os("PROTOC").is_none() {
        if let Ok(protoc) = protoc_bin_vendored::protoc_bin_path() {
            std::env::set_var("PROTOC", protoc);
        }
    }

    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(&["proto/sso.proto"], &["proto/"])?;

    Ok(())
}
