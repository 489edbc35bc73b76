use serde::Deserialize;
use std::env;
use std::error::Error;
use std::fs::{read, read_to_string, write};
use std::path::PathBuf;

const WELCOME_PATH: &str = "resources/welcome.txt";

fn main() {
    if let Err(e) = render_welcome() {
        panic!("Cannot render welcome banner: {e}");
    }
}

#[derive(Deserialize)]
struct CargoManifest<'a> {
    #[serde(borrow = "'a")]
    package: Package<'a>,
}

#[derive(Deserialize)]
struct Package<'a> {
    version: &'a str,
}

fn render_welcome() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed={WELCOME_PATH}");
    println!("cargo:rerun-if-changed=Cargo.toml");

    let banner = read_to_string(WELCOME_PATH)?;
    let cargo = read("Cargo.toml")?;
    let manifest: CargoManifest = toml::from_slice(&cargo)?;

    let out_dir = env::var_os("OUT_DIR").ok_or("OUT_DIR is not set")?;
    let path = PathBuf::from(out_dir).join("welcome_info");

    write(
        path,
        banner.replace("${{version}}", manifest.package.version),
    )?;

    Ok(())
}
