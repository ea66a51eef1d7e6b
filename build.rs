use chrono::Utc;

fn main() {
    let build_version = Utc::now().format("%Y.%m.%d-%H%M%S");
    println!("cargo:rustc-env=BUILD_VERSION={build_version}");
    println!("cargo:rerun-if-changed=build.rs");
}
