// Linker setup from the embassy stm32f3 examples:
// https://github.com/embassy-rs/embassy/blob/main/examples/stm32f3/build.rs
// The same scripts are needed by the on-target defmt-test suite.
fn main() {
    for kind in ["bins", "tests"] {
        println!("cargo:rustc-link-arg-{kind}=--nmagic");
        println!("cargo:rustc-link-arg-{kind}=-Tlink.x");
        println!("cargo:rustc-link-arg-{kind}=-Tdefmt.x");
    }
}
