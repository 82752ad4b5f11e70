use std::path::PathBuf;

const SOURCE_FILE_PATH: &str = "src/bindings.cpp";
const HEADER_FILE_PATH: &str = "src/bindings.h";
const SDK_DIR_VARIABLE: &str = "DXSDK_DIR";

fn sdk_path() -> Option<PathBuf> {
    std::env::var_os(SDK_DIR_VARIABLE).map(PathBuf::from)
}

fn library_path(sdk: &std::path::Path) -> PathBuf {
    let arch = match std::env::var("CARGO_CFG_TARGET_ARCH").as_deref() {
        Ok("x86") => "x86",
        _ => "x64",
    };
    sdk.join("Lib").join(arch)
}

fn is_docs_rs_build() -> bool {
    std::env::var("DOCS_RS").is_ok()
}

fn is_windows_target() -> bool {
    std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows")
}

fn compile_helpers(sdk: Option<&std::path::Path>) {
    let mut build = cc::Build::new();
    build.cpp(true).file(SOURCE_FILE_PATH);
    if let Some(sdk) = sdk {
        build.include(sdk.join("Include"));
    }
    build.compile("d3dx_helpers");
}

fn main() {
    println!("cargo:rerun-if-changed={SOURCE_FILE_PATH}");
    println!("cargo:rerun-if-changed={HEADER_FILE_PATH}");
    println!("cargo:rerun-if-env-changed={SDK_DIR_VARIABLE}");

    // The shim and D3DX itself only exist for Windows targets. Everything
    // else (types, constants, errors) builds without them.
    if is_docs_rs_build() || !is_windows_target() {
        return;
    }

    let sdk = sdk_path();
    compile_helpers(sdk.as_deref());

    // Tell cargo to look for the D3DX import library in the SDK.
    if let Some(sdk) = sdk.as_deref() {
        println!("cargo:rustc-link-search=native={}", library_path(sdk).display());
    }

    // Tell cargo to tell rustc to link to the libraries.
    println!("cargo:rustc-link-lib=d3dx9");
    println!("cargo:rustc-link-lib=d3d9");

    #[cfg(feature = "generate-bindings")]
    generate_bindings(sdk.as_deref());
}

#[cfg(feature = "generate-bindings")]
fn generate_bindings(sdk: Option<&std::path::Path>) {
    let mut builder = bindgen::Builder::default()
        .header(HEADER_FILE_PATH)
        .clang_arg("-xc++")
        // Tell cargo to invalidate the built crate whenever any of the
        // included header files changed.
        .parse_callbacks(Box::new(bindgen::CargoCallbacks::new()))
        // Exportable symbols defined by our `bindings.cpp/h`.
        .allowlist_function("HELPERS_D3DX_\\w+")
        // Every type is declared by hand in `types.rs` with exact layouts.
        .blocklist_type("\\w+")
        .disable_name_namespacing()
        .disable_nested_struct_naming();

    if let Some(sdk) = sdk {
        builder = builder.clang_arg(format!("-I{}", sdk.join("Include").display()));
    }

    let bindings = builder.generate().expect("Unable to generate bindings");

    let out_path = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").unwrap()).join("src");
    bindings
        .write_to_file(out_path.join("bindings.rs"))
        .expect("Couldn't write bindings!");
}
